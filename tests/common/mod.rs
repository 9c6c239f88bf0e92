#![allow(dead_code)]
use chrono::NaiveDate;
use sidur::model::{AssignmentId, Employee, EmployeeId, RoleId, ScheduleId, ShiftId, UnitId};
use sidur::store::{AssignmentRow, Dataset, RoleRecord, ScheduleRecord, ShiftRecord, UnitRecord};

/// Construction de jeux de données de test, table par table.
#[derive(Default)]
pub struct Fixture {
    pub data: Dataset,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(mut self, id: &str, y: i32, m: u32, d: u32) -> Self {
        self.data.schedules.push(ScheduleRecord {
            id: ScheduleId::new(id),
            schedule_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            station: String::new(),
            status: Default::default(),
            notes: None,
            created_at: None,
            created_by: None,
        });
        self
    }

    pub fn notes(mut self, raw: &str) -> Self {
        if let Some(s) = self.data.schedules.last_mut() {
            s.notes = Some(raw.to_string());
        }
        self
    }

    pub fn shift(mut self, id: &str, schedule: &str, name: &str, order: i32) -> Self {
        self.data.shifts.push(ShiftRecord {
            id: ShiftId::new(id),
            schedule_id: ScheduleId::new(schedule),
            shift_name: name.to_string(),
            start_time: None,
            end_time: None,
            shift_order: order,
        });
        self
    }

    pub fn unit(
        mut self,
        id: &str,
        shift: &str,
        name: &str,
        unit_type: Option<&str>,
        order: i32,
    ) -> Self {
        self.data.units.push(UnitRecord {
            id: UnitId::new(id),
            shift_id: ShiftId::new(shift),
            unit_name: name.to_string(),
            unit_type: unit_type.map(str::to_string),
            unit_order: order,
        });
        self
    }

    pub fn role(
        mut self,
        id: &str,
        unit: &str,
        name: &str,
        ambulance: Option<&str>,
        order: i32,
    ) -> Self {
        self.data.roles.push(RoleRecord {
            id: RoleId::new(id),
            unit_id: UnitId::new(unit),
            role_name: name.to_string(),
            ambulance_number: ambulance.map(str::to_string),
            role_order: order,
        });
        self
    }

    pub fn employee(mut self, id: &str, first: &str, last: &str) -> Self {
        self.data.employees.push(Employee {
            id: EmployeeId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            badge: None,
        });
        self
    }

    pub fn assign_employee(mut self, id: &str, schedule: &str, role: &str, employee: &str) -> Self {
        self.data.assignments.push(AssignmentRow {
            id: AssignmentId::new(id),
            schedule_id: ScheduleId::new(schedule),
            role_id: RoleId::new(role),
            employee_id: Some(EmployeeId::new(employee)),
            manual_employee_name: None,
        });
        self
    }

    pub fn assign_manual(mut self, id: &str, schedule: &str, role: &str, name: &str) -> Self {
        self.data.assignments.push(AssignmentRow {
            id: AssignmentId::new(id),
            schedule_id: ScheduleId::new(schedule),
            role_id: RoleId::new(role),
            employee_id: None,
            manual_employee_name: Some(name.to_string()),
        });
        self
    }

    pub fn build(self) -> Dataset {
        self.data
    }
}

/// Une station "North Station", shift du matin, conducteur assigné et
/// paramédic libre, même ambulance.
pub fn north_station() -> Dataset {
    Fixture::new()
        .schedule("s1", 2024, 5, 1)
        .employee("e1", "Dana", "Levi")
        .shift("sh1", "s1", "morning", 1)
        .unit("u1", "sh1", "North Station", None, 1)
        .role("r1", "u1", "Driver", Some("55"), 1)
        .role("r2", "u1", "Paramedic", Some("55"), 2)
        .assign_employee("a1", "s1", "r1", "e1")
        .build()
}

/// Trois shifts, deux stations ; "Central" absente la nuit.
pub fn two_stations() -> Dataset {
    Fixture::new()
        .schedule("s2", 2024, 5, 2)
        .notes(r#"["בדיקה", "second note"]"#)
        .employee("e1", "Dana", "Levi")
        .employee("e2", "Avi", "Cohen")
        .shift("n", "s2", "לילה", 1)
        .shift("m", "s2", "בוקר", 2)
        .shift("e", "s2", "ערב", 3)
        .unit("n-north", "n", "North", None, 1)
        .role("n1", "n-north", "Driver", Some("12"), 1)
        .unit("m-central", "m", "Central", None, 1)
        .role("m1", "m-central", "Driver", Some("70"), 1)
        .role("m2", "m-central", "Medic", None, 2)
        .unit("e-central", "e", "Central", None, 1)
        .role("e1r", "e-central", "Driver", None, 1)
        .role("e2r", "e-central", "Medic", Some("80"), 2)
        .role("e3r", "e-central", "07:00-15:00", None, 3)
        .assign_employee("1", "s2", "n1", "e1")
        .assign_employee("2", "s2", "m1", "e2")
        .assign_manual("3", "s2", "m2", "Noa")
        .assign_manual("4", "s2", "e1r", "Yael")
        .build()
}
