//! Assemblage de l'arbre Schedule → Shift → Unit → Role (+ Assignment).

mod link;
mod ordering;
mod types;

pub use ordering::{compare_ids, shift_priority, UNKNOWN_SHIFT_PRIORITY};
pub use types::AssembleError;

use crate::model::{parse_notes, Schedule, ScheduleId, ShiftId, UnitId};
use crate::store::ScheduleSource;
use tracing::debug;

/// Assembleur : lit une source et reconstruit l'arbre trié.
///
/// Sans état entre deux appels ; peut tourner en parallèle pour des sidurim
/// différents (ou le même) tant que la source le permet.
#[derive(Debug, Clone)]
pub struct Assembler<S> {
    source: S,
}

impl<S: ScheduleSource> Assembler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn assemble(&self, id: &ScheduleId) -> Result<Schedule, AssembleError> {
        let record = self
            .source
            .schedule(id)
            .map_err(AssembleError::Dependency)?
            .ok_or_else(|| AssembleError::NotFound(id.to_string()))?;

        let shifts = self.source.shifts(id).map_err(AssembleError::Dependency)?;
        let mut extra_missions = self
            .source
            .extra_missions(id)
            .map_err(AssembleError::Dependency)?;
        let mut extra_ambulances = self
            .source
            .extra_ambulances(id)
            .map_err(AssembleError::Dependency)?;
        ordering::sort_extras(&mut extra_missions, &mut extra_ambulances);

        let mut schedule = Schedule {
            id: record.id,
            date: record.schedule_date,
            label: record.station,
            status: record.status,
            notes: parse_notes(record.notes.as_deref()),
            created_at: record.created_at,
            created_by: record.created_by,
            shifts: Vec::new(),
            extra_missions,
            extra_ambulances,
        };

        if shifts.is_empty() {
            debug!(schedule = %id, "schedule has no shifts yet");
            return Ok(schedule);
        }

        let shift_ids: Vec<ShiftId> = shifts.iter().map(|s| s.id.clone()).collect();
        let units = self
            .source
            .units(&shift_ids)
            .map_err(AssembleError::Dependency)?;
        let unit_ids: Vec<UnitId> = units.iter().map(|u| u.id.clone()).collect();
        let roles = self
            .source
            .roles(&unit_ids)
            .map_err(AssembleError::Dependency)?;
        let assignments = self
            .source
            .assignments(id)
            .map_err(AssembleError::Dependency)?;

        debug!(
            schedule = %id,
            shifts = shifts.len(),
            units = units.len(),
            roles = roles.len(),
            assignments = assignments.len(),
            "fetched schedule rows"
        );

        schedule.shifts = link::link_tree(id, shifts, units, roles, assignments);
        ordering::sort_tree(&mut schedule.shifts);
        Ok(schedule)
    }
}
