//! Couche de persistance : lectures groupées par collection et stockage fichier.

mod dataset;
mod io;
mod json;
mod records;

pub use dataset::{Assignee, Dataset, StoreError};
pub use io::import_employees_csv;
pub use json::JsonStore;
pub use records::{
    AssignmentRecord, AssignmentRow, RoleRecord, ScheduleRecord, ShiftRecord, UnitRecord,
};

use crate::model::{ExtraAmbulance, ExtraMission, ScheduleId, ShiftId, UnitId};

/// Source des lignes d'un sidur.
///
/// Chaque méthode correspond à un seul aller-retour vers le support, quel que
/// soit le nombre de parents demandés : pas de lecture par shift ni par unité.
pub trait ScheduleSource {
    fn schedule(&self, id: &ScheduleId) -> anyhow::Result<Option<ScheduleRecord>>;
    fn shifts(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ShiftRecord>>;
    fn units(&self, shifts: &[ShiftId]) -> anyhow::Result<Vec<UnitRecord>>;
    fn roles(&self, units: &[UnitId]) -> anyhow::Result<Vec<RoleRecord>>;
    /// Assignations du sidur, avec l'employé lié déjà résolu.
    fn assignments(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<AssignmentRecord>>;
    fn extra_missions(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ExtraMission>>;
    fn extra_ambulances(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ExtraAmbulance>>;
}

impl<T: ScheduleSource + ?Sized> ScheduleSource for &T {
    fn schedule(&self, id: &ScheduleId) -> anyhow::Result<Option<ScheduleRecord>> {
        (**self).schedule(id)
    }
    fn shifts(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ShiftRecord>> {
        (**self).shifts(schedule)
    }
    fn units(&self, shifts: &[ShiftId]) -> anyhow::Result<Vec<UnitRecord>> {
        (**self).units(shifts)
    }
    fn roles(&self, units: &[UnitId]) -> anyhow::Result<Vec<RoleRecord>> {
        (**self).roles(units)
    }
    fn assignments(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<AssignmentRecord>> {
        (**self).assignments(schedule)
    }
    fn extra_missions(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ExtraMission>> {
        (**self).extra_missions(schedule)
    }
    fn extra_ambulances(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ExtraAmbulance>> {
        (**self).extra_ambulances(schedule)
    }
}
