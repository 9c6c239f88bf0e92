use crate::model::{Employee, EmployeeId};
use anyhow::{bail, Context};
use csv::ReaderBuilder;
use std::path::Path;

/// Import d'employés depuis CSV: header `employee_id,first_name,last_name`
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing employee_id")?;
        let first = rec.get(1).context("missing first_name")?;
        let last = rec.get(2).context("missing last_name")?;
        if id.is_empty() || first.is_empty() {
            bail!("invalid employee row (empty id or first_name)");
        }
        out.push(Employee {
            id: EmployeeId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            badge: Some(id.to_string()),
        });
    }
    Ok(out)
}
