use crate::model::{
    AssignmentId, Employee, EmployeeId, RoleId, ScheduleId, ScheduleStatus, ShiftId, UnitId,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Ligne `schedules`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub id: ScheduleId,
    pub schedule_date: NaiveDate,
    #[serde(default)]
    pub station: String,
    #[serde(default)]
    pub status: ScheduleStatus,
    /// Texte brut : tableau JSON ou note unique.
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Ligne `shifts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: ShiftId,
    pub schedule_id: ScheduleId,
    pub shift_name: String,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub shift_order: i32,
}

/// Ligne `units`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub id: UnitId,
    pub shift_id: ShiftId,
    pub unit_name: String,
    #[serde(default)]
    pub unit_type: Option<String>,
    #[serde(default)]
    pub unit_order: i32,
}

/// Ligne `roles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: RoleId,
    pub unit_id: UnitId,
    pub role_name: String,
    #[serde(default)]
    pub ambulance_number: Option<String>,
    #[serde(default)]
    pub role_order: i32,
}

/// Ligne `assignments` telle que stockée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub id: AssignmentId,
    pub schedule_id: ScheduleId,
    pub role_id: RoleId,
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    #[serde(default)]
    pub manual_employee_name: Option<String>,
}

/// Assignation jointe à son employé, telle que la lit l'assembleur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub id: AssignmentId,
    pub schedule_id: ScheduleId,
    pub role_id: RoleId,
    pub employee: Option<Employee>,
    pub manual_employee_name: Option<String>,
}
