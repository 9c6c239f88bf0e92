use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Type d'unité dont tous les rôles partagent un même numéro d'ambulance.
pub const SHARED_AMBULANCE_UNIT_TYPE: &str = "אטן";

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: AsRef<str>>(s: S) -> Self {
                Self(s.as_ref().to_owned())
            }
            pub fn random() -> Self {
                Self(Uuid::new_v4().to_string())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifiant fort pour Schedule
    ScheduleId
);
string_id!(
    /// Identifiant fort pour Shift
    ShiftId
);
string_id!(
    /// Identifiant fort pour Unit
    UnitId
);
string_id!(
    /// Identifiant fort pour Role
    RoleId
);
string_id!(
    /// Identifiant fort pour Assignment
    AssignmentId
);
string_id!(
    /// Identifiant fort pour Employee
    EmployeeId
);

/// Cycle de vie d'un sidur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// Employé référencé par les assignations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// Numéro de matricule affiché à côté du nom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Employee {
    pub fn new<F: Into<String>, L: Into<String>>(first_name: F, last_name: L) -> Self {
        Self {
            id: EmployeeId::random(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            badge: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Occupant d'un rôle : employé lié ou nom saisi à la main.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub manual_name: Option<String>,
}

impl Assignment {
    /// Nom affiché ; l'employé lié prime sur le nom manuel.
    pub fn display_name(&self) -> String {
        if let Some(employee) = &self.employee {
            return employee.full_name();
        }
        self.manual_name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }
}

/// Case à remplir dans une unité.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub ambulance_number: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub assignment: Option<Assignment>,
}

impl Role {
    pub fn occupant_name(&self) -> String {
        self.assignment
            .as_ref()
            .map(Assignment::display_name)
            .unwrap_or_default()
    }

    pub fn is_filled(&self) -> bool {
        !self.occupant_name().is_empty()
    }

    pub fn ambulance(&self) -> &str {
        self.ambulance_number.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Poste ou véhicule ("station" côté interface).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    #[serde(default)]
    pub unit_type: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Unit {
    pub fn shares_ambulance_number(&self) -> bool {
        is_shared_ambulance_type(self.unit_type.as_deref())
    }
}

pub fn is_shared_ambulance_type(unit_type: Option<&str>) -> bool {
    unit_type.map(str::trim) == Some(SHARED_AMBULANCE_UNIT_TYPE)
}

/// Les trois périodes canoniques, dans l'ordre d'affichage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftKind {
    Night,
    Morning,
    Evening,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Night, ShiftKind::Morning, ShiftKind::Evening];

    /// Reconnaît les libellés hébreux et leurs alias anglais.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        match name {
            "לילה" => return Some(ShiftKind::Night),
            "בוקר" => return Some(ShiftKind::Morning),
            "ערב" => return Some(ShiftKind::Evening),
            _ => {}
        }
        match name.to_ascii_lowercase().as_str() {
            "night" => Some(ShiftKind::Night),
            "morning" => Some(ShiftKind::Morning),
            "evening" => Some(ShiftKind::Evening),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ShiftKind::Night => 0,
            ShiftKind::Morning => 1,
            ShiftKind::Evening => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Night => "לילה",
            ShiftKind::Morning => "בוקר",
            ShiftKind::Evening => "ערב",
        }
    }
}

/// Période de travail nommée (nuit / matin / soir).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub name: String,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl Shift {
    pub fn kind(&self) -> Option<ShiftKind> {
        ShiftKind::from_name(&self.name)
    }
}

/// Mission hors équipe ("משימות מחוץ למשמרת").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraMission {
    pub id: String,
    pub schedule_id: ScheduleId,
    pub hours: String,
    pub location: String,
    #[serde(default)]
    pub vehicle: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Ambulance au-dessus de l'effectif ("מעל התקן").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraAmbulance {
    pub id: String,
    pub schedule_id: ScheduleId,
    pub working_hours: String,
    pub station: String,
    #[serde(default)]
    pub ambulance_number: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Sidur complet d'une journée, assemblé et trié.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub date: NaiveDate,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub status: ScheduleStatus,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub extra_missions: Vec<ExtraMission>,
    #[serde(default)]
    pub extra_ambulances: Vec<ExtraAmbulance>,
}

impl Schedule {
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.shifts
            .iter()
            .flat_map(|s| s.units.iter())
            .flat_map(|u| u.roles.iter())
    }
}

/// Les notes sont stockées soit en tableau JSON de chaînes, soit en texte brut.
pub fn parse_notes(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        _ => vec![raw.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_accept_json_array_or_plain_text() {
        assert_eq!(
            parse_notes(Some(r#"["a", "b"]"#)),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(parse_notes(Some("hello")), vec!["hello".to_string()]);
        assert_eq!(parse_notes(Some(r#""quoted""#)), vec![r#""quoted""#.to_string()]);
        assert!(parse_notes(Some("   ")).is_empty());
        assert!(parse_notes(None).is_empty());
    }

    #[test]
    fn employee_wins_over_manual_name() {
        let a = Assignment {
            id: AssignmentId::new("1"),
            employee: Some(Employee::new("Dana", "Levi")),
            manual_name: Some("Other".into()),
        };
        assert_eq!(a.display_name(), "Dana Levi");
    }

    #[test]
    fn blank_manual_name_is_unfilled() {
        let role = Role {
            id: RoleId::new("r"),
            name: "Driver".into(),
            ambulance_number: None,
            order: 0,
            assignment: Some(Assignment {
                id: AssignmentId::new("1"),
                employee: None,
                manual_name: Some("  ".into()),
            }),
        };
        assert!(!role.is_filled());
    }
}
