#![forbid(unsafe_code)]
mod common;

use assert_cmd::Command;
use common::north_station;
use predicates::prelude::*;
use sidur::JsonStore;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn seeded() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sidur.json");
    JsonStore::open(&path).unwrap().save(&north_station()).unwrap();
    (dir, path)
}

fn cli(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sidur-cli").unwrap();
    cmd.arg("--store").arg(store);
    cmd
}

#[test]
fn show_lists_slots() {
    let (_dir, store) = seeded();
    cli(&store)
        .args(["show", "--schedule", "s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("North Station | בוקר | Driver | Dana Levi | 55"))
        .stdout(predicate::str::contains("North Station | בוקר | Paramedic | - |"));
}

#[test]
fn unknown_schedule_fails() {
    let (_dir, store) = seeded();
    cli(&store)
        .args(["show", "--schedule", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("schedule not found"));
}

#[test]
fn check_reports_unfilled_with_code_2() {
    let (dir, store) = seeded();
    let report = dir.path().join("unfilled.csv");
    cli(&store)
        .args(["check", "--schedule", "s1", "--report"])
        .arg(&report)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Paramedic"));
    let csv = fs::read_to_string(&report).unwrap();
    assert!(csv.starts_with("station,shift,role\n"));
    assert!(csv.contains("North Station,בוקר,Paramedic"));
}

#[test]
fn assign_then_check_passes() {
    let (_dir, store) = seeded();
    cli(&store)
        .args(["assign", "--schedule", "s1", "--role", "r2", "--manual", "Noa"])
        .assert()
        .success();
    cli(&store)
        .args(["check", "--schedule", "s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all filled"));

    cli(&store)
        .args(["unassign", "--schedule", "s1", "--role", "r2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed 1"));
}

#[test]
fn assign_needs_an_occupant() {
    let (_dir, store) = seeded();
    cli(&store)
        .args(["assign", "--schedule", "s1", "--role", "r2"])
        .assert()
        .failure();
}

#[test]
fn export_csv_to_stdout_and_html_to_file() {
    let (dir, store) = seeded();
    cli(&store)
        .args(["export", "--schedule", "s1", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "station,shift,row,role,occupant,ambulance,ambulance_span,unfilled",
        ));

    let out = dir.path().join("sidur.html");
    cli(&store)
        .args(["export", "--schedule", "s1", "--format", "html", "--out"])
        .arg(&out)
        .assert()
        .success();
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("North Station"));
}

#[test]
fn set_ambulance_and_import_employees() {
    let (dir, store) = seeded();
    cli(&store)
        .args(["set-ambulance", "--role", "r2", "--number", "77"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated 1"));

    let csv = dir.path().join("employees.csv");
    fs::write(&csv, "employee_id,first_name,last_name\n42,Noa,Katz\n").unwrap();
    cli(&store)
        .args(["import-employees", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("imported 1"));

    let data = JsonStore::open(&store).unwrap().load().unwrap();
    assert_eq!(data.employees.len(), 2);
    assert_eq!(data.roles[1].ambulance_number.as_deref(), Some("77"));
}
