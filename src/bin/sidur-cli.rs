#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use sidur::{
    layout::{shift_cells, AmbulanceCell, LayoutOptions, ShiftCell, DEFAULT_STANDALONE_MARKER},
    load_grid,
    model::{EmployeeId, RoleId, ScheduleId},
    render::{ExportFormat, RosterDocument},
    report::{export_unfilled_csv, summarize},
    store::{import_employees_csv, Assignee, JsonStore},
};
use clap::{Parser, Subcommand};
use std::io::Write;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de sidur : affichage, contrôle et export des rosters
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON des tables
    #[arg(long, global = true, default_value = "sidur.json")]
    store: String,

    /// Sous-chaîne des cases à ambulance individuelle
    #[arg(long, global = true, default_value = DEFAULT_STANDALONE_MARKER)]
    standalone_marker: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher la grille en texte
    Show {
        #[arg(long)]
        schedule: String,
    },

    /// Exporter (html, xlsx, csv, print)
    Export {
        #[arg(long)]
        schedule: String,
        #[arg(long, default_value = "html")]
        format: ExportFormat,
        /// Fichier de sortie ; stdout si absent
        #[arg(long)]
        out: Option<String>,
    },

    /// Vérifier les cases non pourvues
    Check {
        #[arg(long)]
        schedule: String,
        /// Export CSV des cases vides (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Assigner un employé ou un nom manuel à un rôle
    Assign {
        #[arg(long)]
        schedule: String,
        #[arg(long)]
        role: String,
        #[arg(long, conflicts_with = "manual", required_unless_present = "manual")]
        employee: Option<String>,
        #[arg(long)]
        manual: Option<String>,
    },

    /// Retirer l'assignation d'un rôle
    Unassign {
        #[arg(long)]
        schedule: String,
        #[arg(long)]
        role: String,
    },

    /// Fixer le numéro d'ambulance d'un rôle (toute l'unité si partagé)
    SetAmbulance {
        #[arg(long)]
        role: String,
        /// Valeur vide pour effacer
        #[arg(long)]
        number: String,
    },

    /// Importer des employés depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let store = JsonStore::open(&cli.store)?;
    let layout = LayoutOptions {
        standalone_marker: cli.standalone_marker.clone(),
    };

    let code = match cli.cmd {
        Commands::Show { schedule } => {
            let dataset = store.load()?;
            let (_, grid) = load_grid(&dataset, &ScheduleId::new(schedule), &layout)?;
            for station in &grid.stations {
                for row in &station.rows {
                    for (kind, cell) in shift_cells(row) {
                        match cell {
                            ShiftCell::Blank => {}
                            ShiftCell::Annotation { label } => {
                                println!("{} | {} | {}", station.name, kind.label(), label);
                            }
                            ShiftCell::Slot {
                                role,
                                occupant,
                                ambulance,
                                ..
                            } => {
                                let occupant = if occupant.is_empty() {
                                    "-"
                                } else {
                                    occupant.as_str()
                                };
                                let number = match ambulance {
                                    AmbulanceCell::Single(v) => v.as_str(),
                                    AmbulanceCell::Span { value, .. } => value.as_str(),
                                    AmbulanceCell::Covered => "",
                                };
                                println!(
                                    "{} | {} | {} | {} | {}",
                                    station.name,
                                    kind.label(),
                                    role,
                                    occupant,
                                    number
                                );
                            }
                        }
                    }
                }
            }
            0
        }
        Commands::Export {
            schedule,
            format,
            out,
        } => {
            let dataset = store.load()?;
            let (schedule, grid) = load_grid(&dataset, &ScheduleId::new(schedule), &layout)?;
            let doc = RosterDocument::new(&schedule, &grid);
            let bytes = format.renderer()?.render(&doc)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, bytes).with_context(|| format!("writing {path}"))?;
                    eprintln!("Exported {} ({format}) to {path}", schedule.id);
                }
                None => std::io::stdout().write_all(&bytes)?,
            }
            0
        }
        Commands::Check { schedule, report } => {
            let dataset = store.load()?;
            let (_, grid) = load_grid(&dataset, &ScheduleId::new(schedule), &layout)?;
            let summary = summarize(&grid);
            if let Some(path) = report {
                export_unfilled_csv(path, &summary)?;
            }
            if summary.is_complete() {
                println!("OK: {} slot(s), all filled", summary.slots);
                0
            } else {
                eprintln!(
                    "Found {} unfilled slot(s) out of {}",
                    summary.unfilled.len(),
                    summary.slots
                );
                for slot in &summary.unfilled {
                    println!("{} | {} | {}", slot.station, slot.shift.label(), slot.role);
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Assign {
            schedule,
            role,
            employee,
            manual,
        } => {
            let mut dataset = store.load()?;
            let who = match (employee, manual) {
                (Some(id), _) => Assignee::Employee(EmployeeId::new(id)),
                (None, Some(name)) => Assignee::Manual(name),
                (None, None) => anyhow::bail!("either --employee or --manual is required"),
            };
            let id = dataset.assign(&ScheduleId::new(schedule), &RoleId::new(role), who)?;
            store.save(&dataset)?;
            println!("{id}");
            0
        }
        Commands::Unassign { schedule, role } => {
            let mut dataset = store.load()?;
            let removed = dataset.unassign(&ScheduleId::new(schedule), &RoleId::new(role));
            store.save(&dataset)?;
            println!("removed {removed} assignment(s)");
            0
        }
        Commands::SetAmbulance { role, number } => {
            let mut dataset = store.load()?;
            let updated = dataset.set_ambulance_number(&RoleId::new(role), Some(number))?;
            store.save(&dataset)?;
            println!("updated {updated} role(s)");
            0
        }
        Commands::ImportEmployees { csv } => {
            let mut dataset = store.load_or_default()?;
            let employees = import_employees_csv(csv)?;
            let count = dataset.upsert_employees(employees);
            store.save(&dataset)?;
            println!("imported {count} employee(s)");
            0
        }
    };

    std::process::exit(code);
}
