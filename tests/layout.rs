#![forbid(unsafe_code)]
mod common;

use common::{north_station, two_stations, Fixture};
use sidur::layout::{AmbulanceCell, LayoutOptions, ShiftCell};
use sidur::model::{EmployeeId, RoleId, ScheduleId, ShiftKind};
use sidur::store::Assignee;
use sidur::{build_grid, load_grid, Grid};

fn grid_of(data: &sidur::Dataset, id: &str) -> Grid {
    load_grid(data, &ScheduleId::new(id), &LayoutOptions::default())
        .unwrap()
        .1
}

fn slot(cell: &ShiftCell) -> (&str, &str, bool, &AmbulanceCell) {
    match cell {
        ShiftCell::Slot {
            role,
            occupant,
            unfilled,
            ambulance,
            ..
        } => (role.as_str(), occupant.as_str(), *unfilled, ambulance),
        other => panic!("expected a slot, got {other:?}"),
    }
}

#[test]
fn single_morning_station() {
    let grid = grid_of(&north_station(), "s1");
    assert_eq!(grid.stations.len(), 1);
    let station = &grid.stations[0];
    assert_eq!(station.name, "North Station");
    assert_eq!(station.row_count(), 2);

    let (role, occupant, unfilled, ambulance) = slot(station.rows[0].cell(ShiftKind::Morning));
    assert_eq!((role, occupant, unfilled), ("Driver", "Dana Levi", false));
    assert_eq!(
        ambulance,
        &AmbulanceCell::Span {
            value: "55".into(),
            span: 2
        }
    );

    let (role, occupant, unfilled, ambulance) = slot(station.rows[1].cell(ShiftKind::Morning));
    assert_eq!((role, occupant, unfilled), ("Paramedic", "", true));
    assert_eq!(ambulance, &AmbulanceCell::Covered);

    for row in &station.rows {
        assert_eq!(row.cell(ShiftKind::Night), &ShiftCell::Blank);
        assert_eq!(row.cell(ShiftKind::Evening), &ShiftCell::Blank);
    }
}

#[test]
fn station_rows_pad_to_longest_shift() {
    let grid = grid_of(&two_stations(), "s2");
    let names: Vec<&str> = grid.stations.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["North", "Central"]);

    let central = &grid.stations[1];
    assert_eq!(central.row_count(), 3);
    assert!(central.merges_name());
    assert!(central
        .rows
        .iter()
        .all(|r| r.cell(ShiftKind::Night) == &ShiftCell::Blank));

    let morning: Vec<&ShiftCell> = central
        .rows
        .iter()
        .map(|r| r.cell(ShiftKind::Morning))
        .collect();
    assert!(matches!(morning[0], ShiftCell::Slot { .. }));
    assert!(matches!(morning[1], ShiftCell::Slot { .. }));
    assert_eq!(morning[2], &ShiftCell::Blank);
}

#[test]
fn single_row_station_keeps_plain_name_cell() {
    let grid = grid_of(&two_stations(), "s2");
    let north = &grid.stations[0];
    assert_eq!(north.row_count(), 1);
    assert!(!north.merges_name());
    let (_, occupant, _, ambulance) = slot(north.rows[0].cell(ShiftKind::Night));
    assert_eq!(occupant, "Dana Levi");
    assert_eq!(
        ambulance,
        &AmbulanceCell::Span {
            value: "12".into(),
            span: 1
        }
    );
}

#[test]
fn evening_run_takes_first_non_empty_number() {
    let grid = grid_of(&two_stations(), "s2");
    let central = &grid.stations[1];
    let evening: Vec<&ShiftCell> = central
        .rows
        .iter()
        .map(|r| r.cell(ShiftKind::Evening))
        .collect();

    let (role, occupant, unfilled, ambulance) = slot(evening[0]);
    assert_eq!((role, occupant, unfilled), ("Driver", "Yael", false));
    assert_eq!(
        ambulance,
        &AmbulanceCell::Span {
            value: "80".into(),
            span: 2
        }
    );
    let (_, _, unfilled, ambulance) = slot(evening[1]);
    assert!(unfilled);
    assert_eq!(ambulance, &AmbulanceCell::Covered);
    assert_eq!(
        evening[2],
        &ShiftCell::Annotation {
            label: "07:00-15:00".into()
        }
    );
}

#[test]
fn crew_run_then_standalone_role() {
    let data = Fixture::new()
        .schedule("s", 2024, 5, 1)
        .shift("m", "s", "בוקר", 1)
        .unit("u", "m", "East", None, 1)
        .role("r1", "u", "R1", None, 1)
        .role("r2", "u", "R2", Some("101"), 2)
        .role("r3", "u", "R3", None, 3)
        .role("r4", "u", "R4 רגיל תקן", Some("202"), 4)
        .build();
    let grid = grid_of(&data, "s");
    let rows = &grid.stations[0].rows;
    assert_eq!(rows.len(), 4);

    let ambulances: Vec<&AmbulanceCell> = rows
        .iter()
        .map(|r| slot(r.cell(ShiftKind::Morning)).3)
        .collect();
    assert_eq!(
        ambulances[0],
        &AmbulanceCell::Span {
            value: "101".into(),
            span: 3
        }
    );
    assert_eq!(ambulances[1], &AmbulanceCell::Covered);
    assert_eq!(ambulances[2], &AmbulanceCell::Covered);
    assert_eq!(ambulances[3], &AmbulanceCell::Single("202".into()));

    match rows[3].cell(ShiftKind::Morning) {
        ShiftCell::Slot { standalone, .. } => assert!(*standalone),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn custom_standalone_marker() {
    let data = Fixture::new()
        .schedule("s", 2024, 5, 1)
        .shift("m", "s", "morning", 1)
        .unit("u", "m", "East", None, 1)
        .role("r1", "u", "Driver", Some("1"), 1)
        .role("r2", "u", "Solo", Some("2"), 2)
        .build();
    let opts = LayoutOptions {
        standalone_marker: "Solo".into(),
    };
    let (_, grid) = load_grid(&data, &ScheduleId::new("s"), &opts).unwrap();
    let rows = &grid.stations[0].rows;
    assert_eq!(
        slot(rows[1].cell(ShiftKind::Morning)).3,
        &AmbulanceCell::Single("2".into())
    );
}

#[test]
fn stations_without_rows_are_skipped() {
    let data = Fixture::new()
        .schedule("s", 2024, 5, 1)
        .shift("m", "s", "morning", 1)
        .shift("x", "s", "special", 2)
        .unit("u1", "m", "Empty", None, 1)
        .unit("u2", "x", "Elsewhere", None, 1)
        .role("r", "u2", "Driver", None, 1)
        .build();
    let grid = grid_of(&data, "s");
    assert!(grid.is_empty());
    assert_eq!(grid.row_count(), 0);
}

#[test]
fn empty_schedule_gives_empty_grid() {
    let data = Fixture::new().schedule("s", 2024, 5, 1).build();
    let grid = grid_of(&data, "s");
    assert!(grid.is_empty());
}

#[test]
fn rebuilding_after_noop_write_is_stable() {
    let mut data = two_stations();
    let before = grid_of(&data, "s2");

    data.assign(
        &ScheduleId::new("s2"),
        &RoleId::new("n1"),
        Assignee::Employee(EmployeeId::new("e1")),
    )
    .unwrap();
    let after = grid_of(&data, "s2");
    assert_eq!(before, after);

    let (schedule, _) =
        load_grid(&data, &ScheduleId::new("s2"), &LayoutOptions::default()).unwrap();
    assert_eq!(
        build_grid(&schedule, &LayoutOptions::default()),
        build_grid(&schedule, &LayoutOptions::default())
    );
}

#[test]
fn grid_serializes_with_tagged_cells() {
    let grid = grid_of(&north_station(), "s1");
    let json = serde_json::to_value(&grid).unwrap();
    let first = &json["stations"][0]["rows"][0]["cells"];
    assert_eq!(first[0]["kind"], "blank");
    assert_eq!(first[1]["kind"], "slot");
    assert_eq!(first[1]["occupant"], "Dana Levi");
}

#[test]
fn staffing_summary_counts_slots() {
    let grid = grid_of(&two_stations(), "s2");
    let report = sidur::summarize(&grid);
    assert_eq!(report.slots, 5);
    assert_eq!(report.filled, 4);
    assert_eq!(report.annotations, 1);
    assert!(!report.is_complete());
    assert_eq!(report.unfilled[0].station, "Central");
    assert_eq!(report.unfilled[0].shift, ShiftKind::Evening);
    assert_eq!(report.unfilled[0].role, "Medic");
}
