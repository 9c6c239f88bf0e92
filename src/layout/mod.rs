//! Mise en grille par station : trois colonnes de shift (nuit, matin, soir),
//! fusions des noms de station et des numéros d'ambulance, cases vides.
//!
//! La grille est calculée une seule fois puis projetée par chaque rendu.

mod ambulance;
mod classify;
mod types;

pub use classify::{classify_role, is_time_range};
pub use types::{
    AmbulanceCell, Grid, GridRow, LayoutOptions, RowKind, ShiftCell, StationGroup,
    DEFAULT_STANDALONE_MARKER,
};

use crate::model::{Role, Schedule, ShiftKind};
use std::collections::HashMap;
use tracing::debug;

/// Rôles d'une station, répartis par shift canonique.
struct StationBucket<'a> {
    name: &'a str,
    shifts: [Vec<&'a Role>; 3],
}

/// Regroupe les unités de même nom à travers les shifts, dans l'ordre de
/// première apparition.
fn group_by_station(schedule: &Schedule) -> Vec<StationBucket<'_>> {
    let mut out: Vec<StationBucket<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for shift in &schedule.shifts {
        let kind = shift.kind();
        for unit in &shift.units {
            let pos = *index.entry(unit.name.as_str()).or_insert_with(|| {
                out.push(StationBucket {
                    name: unit.name.as_str(),
                    shifts: Default::default(),
                });
                out.len() - 1
            });
            // shift non reconnu : la station est enregistrée mais sans colonne
            if let Some(kind) = kind {
                out[pos].shifts[kind.index()].extend(unit.roles.iter());
            }
        }
    }
    out
}

fn build_column(roles: &[&Role], row_count: usize, opts: &LayoutOptions) -> Vec<ShiftCell> {
    let kinds: Vec<RowKind> = roles
        .iter()
        .map(|role| classify_role(&role.name, opts))
        .collect();
    let ambulances = ambulance::ambulance_cells(roles, &kinds);

    let mut cells: Vec<ShiftCell> = roles
        .iter()
        .zip(kinds)
        .zip(ambulances)
        .map(|((role, kind), ambulance)| match (kind, ambulance) {
            (RowKind::Annotation, _) | (_, None) => ShiftCell::Annotation {
                label: role.name.clone(),
            },
            (kind, Some(ambulance)) => {
                let occupant = role.occupant_name();
                ShiftCell::Slot {
                    role: role.name.clone(),
                    unfilled: occupant.is_empty(),
                    occupant,
                    standalone: kind == RowKind::Standalone,
                    ambulance,
                }
            }
        })
        .collect();
    cells.resize(row_count, ShiftCell::Blank);
    cells
}

/// Construit la grille d'un sidur assemblé. Aucune E/S, aucun échec possible.
pub fn build_grid(schedule: &Schedule, opts: &LayoutOptions) -> Grid {
    let mut stations = Vec::new();

    for bucket in group_by_station(schedule) {
        let row_count = bucket.shifts.iter().map(Vec::len).max().unwrap_or(0);
        if row_count == 0 {
            debug!(station = bucket.name, "station has no rows; skipped");
            continue;
        }

        let [night, morning, evening]: [Vec<ShiftCell>; 3] =
            std::array::from_fn(|i| build_column(&bucket.shifts[i], row_count, opts));
        let rows = night
            .into_iter()
            .zip(morning)
            .zip(evening)
            .map(|((n, m), e)| GridRow { cells: [n, m, e] })
            .collect();

        stations.push(StationGroup {
            name: bucket.name.to_string(),
            rows,
        });
    }

    debug!(
        schedule = %schedule.id,
        stations = stations.len(),
        "grid built"
    );
    Grid { stations }
}

/// Raccourci : colonne d'un shift canonique pour une ligne.
pub fn shift_cells(row: &GridRow) -> impl Iterator<Item = (ShiftKind, &ShiftCell)> {
    ShiftKind::ALL.into_iter().map(move |kind| (kind, row.cell(kind)))
}
