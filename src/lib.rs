#![forbid(unsafe_code)]
//! Sidur : assemblage et export des rosters journaliers d'un service d'ambulances.
//!
//! - Lecture groupée des tables (une requête par collection).
//! - Arbre trié : nuit, matin, soir ; unités et rôles par ordre stocké.
//! - Grille par station, fusions d'ambulance, cases vides surlignées.
//! - Rendus HTML / XLSX / boîtes imprimables / CSV depuis la même grille.

pub mod assembler;
pub mod layout;
pub mod model;
pub mod render;
pub mod report;
pub mod store;

pub use assembler::{AssembleError, Assembler};
pub use layout::{build_grid, Grid, LayoutOptions, ShiftCell, StationGroup};
pub use model::{
    Assignment, Employee, EmployeeId, Role, RoleId, Schedule, ScheduleId, ScheduleStatus, Shift,
    ShiftId, ShiftKind, Unit, UnitId,
};
pub use render::{ExportFormat, GridRenderer, RenderError, RosterDocument};
pub use report::{summarize, StaffingReport, UnfilledSlot};
pub use store::{Dataset, JsonStore, ScheduleSource};

/// Assemble puis met en grille : le pipeline complet d'un rendu.
pub fn load_grid<S: ScheduleSource>(
    source: S,
    id: &ScheduleId,
    opts: &LayoutOptions,
) -> Result<(Schedule, Grid), AssembleError> {
    let schedule = Assembler::new(source).assemble(id)?;
    let grid = build_grid(&schedule, opts);
    Ok((schedule, grid))
}
