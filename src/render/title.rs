use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];

/// `{jour} תאריך : j.m.aa`, semaine commençant le dimanche.
pub fn hebrew_date(date: NaiveDate) -> String {
    let day_name = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{day_name} תאריך : {}.{}.{:02}",
        date.day(),
        date.month(),
        date.year().rem_euclid(100)
    )
}

pub fn roster_title(date: NaiveDate) -> String {
    format!("סידור-עבודה כללי : {}", hebrew_date(date))
}
