use super::ordering::compare_ids;
use crate::model::{Assignment, Role, RoleId, ScheduleId, Shift, ShiftId, Unit, UnitId};
use crate::store::{AssignmentRecord, RoleRecord, ShiftRecord, UnitRecord};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Rattache les collections plates à leurs parents par clé.
///
/// Les lignes dont le parent est absent de l'arbre sont journalisées puis
/// ignorées : un affichage partiel vaut mieux qu'une page vide.
pub(super) fn link_tree(
    schedule: &ScheduleId,
    shifts: Vec<ShiftRecord>,
    units: Vec<UnitRecord>,
    roles: Vec<RoleRecord>,
    assignments: Vec<AssignmentRecord>,
) -> Vec<Shift> {
    let mut by_role = group_assignments(schedule, assignments);

    let mut roles_by_unit: HashMap<UnitId, Vec<Role>> = HashMap::new();
    let known_units: HashSet<&UnitId> = units.iter().map(|u| &u.id).collect();
    for record in roles {
        if !known_units.contains(&record.unit_id) {
            warn!(
                role = %record.id,
                unit = %record.unit_id,
                "role references unknown unit; skipped"
            );
            continue;
        }
        let assignment = by_role
            .remove(&record.id)
            .and_then(|rows| pick_assignment(&record.id, rows));
        roles_by_unit
            .entry(record.unit_id.clone())
            .or_default()
            .push(Role {
                id: record.id,
                name: record.role_name,
                ambulance_number: record.ambulance_number,
                order: record.role_order,
                assignment,
            });
    }

    for (role, rows) in by_role {
        warn!(
            role = %role,
            count = rows.len(),
            "assignment references a role outside the schedule tree; skipped"
        );
    }

    let mut units_by_shift: HashMap<ShiftId, Vec<Unit>> = HashMap::new();
    let known_shifts: HashSet<&ShiftId> = shifts.iter().map(|s| &s.id).collect();
    for record in units {
        if !known_shifts.contains(&record.shift_id) {
            warn!(
                unit = %record.id,
                shift = %record.shift_id,
                "unit references unknown shift; skipped"
            );
            continue;
        }
        let roles = roles_by_unit.remove(&record.id).unwrap_or_default();
        units_by_shift
            .entry(record.shift_id.clone())
            .or_default()
            .push(Unit {
                id: record.id,
                name: record.unit_name,
                unit_type: record.unit_type,
                order: record.unit_order,
                roles,
            });
    }

    shifts
        .into_iter()
        .map(|record| Shift {
            units: units_by_shift.remove(&record.id).unwrap_or_default(),
            id: record.id,
            name: record.shift_name,
            start_time: record.start_time,
            end_time: record.end_time,
            order: record.shift_order,
        })
        .collect()
}

fn group_assignments(
    schedule: &ScheduleId,
    assignments: Vec<AssignmentRecord>,
) -> HashMap<RoleId, Vec<AssignmentRecord>> {
    let mut by_role: HashMap<RoleId, Vec<AssignmentRecord>> = HashMap::new();
    for record in assignments {
        if &record.schedule_id != schedule {
            warn!(
                assignment = %record.id,
                schedule = %record.schedule_id,
                expected = %schedule,
                "assignment belongs to another schedule; skipped"
            );
            continue;
        }
        by_role.entry(record.role_id.clone()).or_default().push(record);
    }
    by_role
}

/// Au plus une assignation par rôle : la plus petite par identifiant.
fn pick_assignment(role: &RoleId, rows: Vec<AssignmentRecord>) -> Option<Assignment> {
    if rows.len() > 1 {
        warn!(
            role = %role,
            count = rows.len(),
            "duplicate assignments for role; keeping lowest id"
        );
    }
    let chosen = rows
        .into_iter()
        .min_by(|a, b| compare_ids(a.id.as_str(), b.id.as_str()))?;
    if chosen.employee.is_some() && chosen.manual_employee_name.is_some() {
        debug!(assignment = %chosen.id, "assignment carries both employee and manual name");
    }
    Some(Assignment {
        id: chosen.id,
        employee: chosen.employee,
        manual_name: chosen.manual_employee_name,
    })
}
