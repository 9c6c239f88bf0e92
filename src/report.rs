use crate::layout::{shift_cells, Grid, ShiftCell};
use crate::model::ShiftKind;
use anyhow::Context;
use csv::WriterBuilder;
use serde::Serialize;
use std::path::Path;

/// Case non pourvue dans la grille.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfilledSlot {
    pub station: String,
    pub shift: ShiftKind,
    pub role: String,
}

/// Bilan d'effectif d'un sidur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaffingReport {
    pub slots: usize,
    pub filled: usize,
    pub annotations: usize,
    pub unfilled: Vec<UnfilledSlot>,
}

impl StaffingReport {
    pub fn is_complete(&self) -> bool {
        self.unfilled.is_empty()
    }
}

pub fn summarize(grid: &Grid) -> StaffingReport {
    let mut report = StaffingReport::default();
    for station in &grid.stations {
        for row in &station.rows {
            for (kind, cell) in shift_cells(row) {
                match cell {
                    ShiftCell::Blank => {}
                    ShiftCell::Annotation { .. } => report.annotations += 1,
                    ShiftCell::Slot { role, unfilled, .. } => {
                        report.slots += 1;
                        if *unfilled {
                            report.unfilled.push(UnfilledSlot {
                                station: station.name.clone(),
                                shift: kind,
                                role: role.clone(),
                            });
                        } else {
                            report.filled += 1;
                        }
                    }
                }
            }
        }
    }
    report
}

/// Export CSV des cases vides: header `station,shift,role`
pub fn export_unfilled_csv<P: AsRef<Path>>(path: P, report: &StaffingReport) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut w = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["station", "shift", "role"])?;
    for slot in &report.unfilled {
        w.write_record([slot.station.as_str(), slot.shift.label(), slot.role.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
