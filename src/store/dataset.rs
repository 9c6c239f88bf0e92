use super::records::{
    AssignmentRecord, AssignmentRow, RoleRecord, ScheduleRecord, ShiftRecord, UnitRecord,
};
use super::ScheduleSource;
use crate::model::{
    is_shared_ambulance_type, AssignmentId, Employee, EmployeeId, ExtraAmbulance, ExtraMission,
    RoleId, ScheduleId, ShiftId, UnitId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unknown schedule: {0}")]
    UnknownSchedule(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Occupant demandé : exactement un des deux, par construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignee {
    Employee(EmployeeId),
    Manual(String),
}

/// Ensemble des tables, en mémoire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub schedules: Vec<ScheduleRecord>,
    #[serde(default)]
    pub shifts: Vec<ShiftRecord>,
    #[serde(default)]
    pub units: Vec<UnitRecord>,
    #[serde(default)]
    pub roles: Vec<RoleRecord>,
    #[serde(default)]
    pub assignments: Vec<AssignmentRow>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub extra_missions: Vec<ExtraMission>,
    #[serde(default)]
    pub extra_ambulances: Vec<ExtraAmbulance>,
}

impl Dataset {
    pub fn find_employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }

    pub fn find_role(&self, id: &RoleId) -> Option<&RoleRecord> {
        self.roles.iter().find(|r| &r.id == id)
    }

    /// Remonte rôle → unité → shift → sidur.
    pub fn schedule_of_role(&self, id: &RoleId) -> Option<&ScheduleId> {
        let role = self.find_role(id)?;
        let unit = self.units.iter().find(|u| u.id == role.unit_id)?;
        let shift = self.shifts.iter().find(|s| s.id == unit.shift_id)?;
        Some(&shift.schedule_id)
    }

    /// Ajoute des employés ; un identifiant déjà présent remplace l'entrée existante.
    pub fn upsert_employees(&mut self, employees: Vec<Employee>) -> usize {
        let mut count = 0;
        for employee in employees {
            match self.employees.iter_mut().find(|e| e.id == employee.id) {
                Some(existing) => *existing = employee,
                None => self.employees.push(employee),
            }
            count += 1;
        }
        count
    }

    /// Crée ou remplace l'assignation unique du couple (rôle, sidur).
    pub fn assign(
        &mut self,
        schedule: &ScheduleId,
        role: &RoleId,
        who: Assignee,
    ) -> Result<AssignmentId, StoreError> {
        if !self.schedules.iter().any(|s| &s.id == schedule) {
            return Err(StoreError::UnknownSchedule(schedule.to_string()));
        }
        let owner = self
            .schedule_of_role(role)
            .ok_or_else(|| StoreError::UnknownRole(role.to_string()))?;
        if owner != schedule {
            return Err(StoreError::MalformedInput(format!(
                "role {role} belongs to schedule {owner}, not {schedule}"
            )));
        }

        let (employee_id, manual_employee_name) = match who {
            Assignee::Employee(id) => {
                if self.find_employee(&id).is_none() {
                    return Err(StoreError::UnknownEmployee(id.to_string()));
                }
                (Some(id), None)
            }
            Assignee::Manual(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(StoreError::MalformedInput(
                        "manual employee name cannot be empty".to_string(),
                    ));
                }
                (None, Some(name.to_string()))
            }
        };

        let mut existing: Vec<usize> = self
            .assignments
            .iter()
            .enumerate()
            .filter(|(_, a)| &a.role_id == role && &a.schedule_id == schedule)
            .map(|(idx, _)| idx)
            .collect();

        if let Some(&keep) = existing.first() {
            let row = &mut self.assignments[keep];
            row.employee_id = employee_id;
            row.manual_employee_name = manual_employee_name;
            let id = row.id.clone();
            // doublons éventuels : on ne garde que la première ligne
            existing.remove(0);
            for idx in existing.into_iter().rev() {
                self.assignments.remove(idx);
            }
            return Ok(id);
        }

        let id = AssignmentId::random();
        self.assignments.push(AssignmentRow {
            id: id.clone(),
            schedule_id: schedule.clone(),
            role_id: role.clone(),
            employee_id,
            manual_employee_name,
        });
        Ok(id)
    }

    /// Retire toute assignation du couple (rôle, sidur). Retourne le nombre supprimé.
    pub fn unassign(&mut self, schedule: &ScheduleId, role: &RoleId) -> usize {
        let before = self.assignments.len();
        self.assignments
            .retain(|a| !(&a.role_id == role && &a.schedule_id == schedule));
        before - self.assignments.len()
    }

    /// Met à jour le numéro d'ambulance d'un rôle ; dans une unité à numéro
    /// partagé, tous les rôles de l'unité reçoivent la même valeur.
    pub fn set_ambulance_number(
        &mut self,
        role: &RoleId,
        number: Option<String>,
    ) -> Result<usize, StoreError> {
        let unit_id = self
            .find_role(role)
            .map(|r| r.unit_id.clone())
            .ok_or_else(|| StoreError::UnknownRole(role.to_string()))?;
        let shared = self
            .units
            .iter()
            .find(|u| u.id == unit_id)
            .map(|u| is_shared_ambulance_type(u.unit_type.as_deref()))
            .unwrap_or(false);

        let number = number
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let mut updated = 0;
        for r in self.roles.iter_mut() {
            let target = if shared {
                r.unit_id == unit_id
            } else {
                &r.id == role
            };
            if target {
                r.ambulance_number = number.clone();
                updated += 1;
            }
        }
        Ok(updated)
    }
}

impl ScheduleSource for Dataset {
    fn schedule(&self, id: &ScheduleId) -> anyhow::Result<Option<ScheduleRecord>> {
        Ok(self.schedules.iter().find(|s| &s.id == id).cloned())
    }

    fn shifts(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ShiftRecord>> {
        Ok(self
            .shifts
            .iter()
            .filter(|s| &s.schedule_id == schedule)
            .cloned()
            .collect())
    }

    fn units(&self, shifts: &[ShiftId]) -> anyhow::Result<Vec<UnitRecord>> {
        let wanted: HashSet<&ShiftId> = shifts.iter().collect();
        Ok(self
            .units
            .iter()
            .filter(|u| wanted.contains(&u.shift_id))
            .cloned()
            .collect())
    }

    fn roles(&self, units: &[UnitId]) -> anyhow::Result<Vec<RoleRecord>> {
        let wanted: HashSet<&UnitId> = units.iter().collect();
        Ok(self
            .roles
            .iter()
            .filter(|r| wanted.contains(&r.unit_id))
            .cloned()
            .collect())
    }

    fn assignments(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<AssignmentRecord>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| &a.schedule_id == schedule)
            .map(|a| AssignmentRecord {
                id: a.id.clone(),
                schedule_id: a.schedule_id.clone(),
                role_id: a.role_id.clone(),
                employee: a
                    .employee_id
                    .as_ref()
                    .and_then(|id| self.find_employee(id))
                    .cloned(),
                manual_employee_name: a.manual_employee_name.clone(),
            })
            .collect())
    }

    fn extra_missions(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ExtraMission>> {
        Ok(self
            .extra_missions
            .iter()
            .filter(|m| &m.schedule_id == schedule)
            .cloned()
            .collect())
    }

    fn extra_ambulances(&self, schedule: &ScheduleId) -> anyhow::Result<Vec<ExtraAmbulance>> {
        Ok(self
            .extra_ambulances
            .iter()
            .filter(|m| &m.schedule_id == schedule)
            .cloned()
            .collect())
    }
}
