use super::{GridRenderer, RenderError, RosterDocument};
use crate::layout::{AmbulanceCell, ShiftCell, StationGroup};
use crate::model::{ExtraAmbulance, ExtraMission, ShiftKind};
use std::fmt::Write;

const STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: Arial, sans-serif; padding: 20px; background: #f5f5f5; direction: rtl; }
        .print-button { position: fixed; top: 20px; left: 20px; background: #4CAF50; color: white; padding: 12px 24px; border: none; border-radius: 5px; cursor: pointer; font-size: 16px; font-weight: bold; z-index: 1000; }
        .container { max-width: 1600px; margin: 0 auto; background: white; padding: 30px; }
        h1 { text-align: center; color: #333; margin-bottom: 30px; font-size: 20px; padding: 12px; border: 2px solid #333; }
        table { width: 100%; border-collapse: collapse; margin-bottom: 20px; direction: rtl; }
        th, td { border: 1px solid #000; padding: 8px; text-align: center; vertical-align: middle; }
        th { background: #d9d9d9; font-weight: bold; font-size: 12px; }
        .station-cell { background: #f5f5f5; font-weight: bold; font-size: 14px; min-width: 80px; max-width: 120px; padding: 6px; }
        .special-row { background: #e0e0e0; font-weight: bold; font-size: 11px; }
        .role-cell { font-size: 12px; }
        .name-cell { font-size: 11px; }
        .number-cell { font-size: 12px; font-weight: bold; }
        .empty-cell { background: #000000 !important; }
        .unfilled { background-color: red !important; }
        .shift-header { background: #808080 !important; color: white !important; font-size: 13px; }
        .station-separator td { border-bottom: 3px solid #000 !important; }
        .notes { margin-top: 30px; padding: 15px; background: #f9f9f9; border: 2px solid #000; border-radius: 5px; }
        .extra h2 { text-align: center; margin: 30px 0 20px; font-size: 18px; }
        @media print {
            * { -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; }
            .print-button { display: none; }
            body { background: white; padding: 0; }
            .container { padding: 10px; max-width: 100%; }
            @page { size: landscape; margin: 0.5cm; }
            table { page-break-inside: avoid; }
        }
"#;

/// Page HTML imprimable depuis le navigateur (RTL, paysage).
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl GridRenderer for HtmlRenderer {
    fn render(&self, doc: &RosterDocument<'_>) -> Result<Vec<u8>, RenderError> {
        Ok(render_page(doc)?.into_bytes())
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_page(doc: &RosterDocument<'_>) -> Result<String, RenderError> {
    let title = escape_html(&doc.title());
    let mut html = String::new();
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, r#"<html dir="rtl" lang="he">"#)?;
    writeln!(html, "<head>")?;
    writeln!(html, r#"    <meta charset="UTF-8">"#)?;
    writeln!(html, "    <title>{title}</title>")?;
    writeln!(html, "    <style>{STYLE}    </style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(
        html,
        r#"    <button class="print-button" onclick="window.print()">שמור כPDF</button>"#
    )?;
    writeln!(html, r#"    <div class="container">"#)?;
    writeln!(html, "        <h1>{title}</h1>")?;

    write_grid(&mut html, doc)?;
    write_notes(&mut html, &doc.schedule.notes)?;
    write_extra_missions(&mut html, &doc.schedule.extra_missions)?;
    write_extra_ambulances(&mut html, &doc.schedule.extra_ambulances)?;

    writeln!(html, "    </div>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn write_grid(html: &mut String, doc: &RosterDocument<'_>) -> Result<(), RenderError> {
    writeln!(html, "        <table>")?;
    writeln!(html, "            <thead>")?;
    writeln!(html, "                <tr>")?;
    writeln!(html, r#"                    <th rowspan="2" class="shift-header">תחנה</th>"#)?;
    for kind in ShiftKind::ALL {
        writeln!(
            html,
            r#"                    <th colspan="3" class="shift-header">{}</th>"#,
            kind.label()
        )?;
    }
    writeln!(html, "                </tr>")?;
    writeln!(html, "                <tr>")?;
    for _ in ShiftKind::ALL {
        writeln!(html, "                    <th>משימה</th><th>שם</th><th>אמבולנס</th>")?;
    }
    writeln!(html, "                </tr>")?;
    writeln!(html, "            </thead>")?;
    writeln!(html, "            <tbody>")?;
    for station in &doc.grid.stations {
        write_station(html, station)?;
    }
    writeln!(html, "            </tbody>")?;
    writeln!(html, "        </table>")?;
    Ok(())
}

fn write_station(html: &mut String, station: &StationGroup) -> Result<(), RenderError> {
    let last = station.row_count().saturating_sub(1);
    for (idx, row) in station.rows.iter().enumerate() {
        if idx == last {
            writeln!(html, r#"                <tr class="station-separator">"#)?;
        } else {
            writeln!(html, "                <tr>")?;
        }
        if idx == 0 {
            let name = escape_html(&station.name);
            if station.merges_name() {
                writeln!(
                    html,
                    r#"                    <td rowspan="{}" class="station-cell">{name}</td>"#,
                    station.row_count()
                )?;
            } else {
                writeln!(html, r#"                    <td class="station-cell">{name}</td>"#)?;
            }
        }
        for cell in &row.cells {
            write_cell(html, cell)?;
        }
        writeln!(html, "                </tr>")?;
    }
    Ok(())
}

fn write_cell(html: &mut String, cell: &ShiftCell) -> Result<(), RenderError> {
    match cell {
        ShiftCell::Blank => writeln!(
            html,
            r#"                    <td class="empty-cell"></td><td class="empty-cell"></td><td class="empty-cell"></td>"#
        )?,
        ShiftCell::Annotation { label } => writeln!(
            html,
            r#"                    <td colspan="3" class="special-row">{}</td>"#,
            escape_html(label)
        )?,
        ShiftCell::Slot {
            role,
            occupant,
            unfilled,
            ambulance,
            ..
        } => {
            writeln!(
                html,
                r#"                    <td class="role-cell">{}</td>"#,
                escape_html(role)
            )?;
            let class = if *unfilled {
                "name-cell unfilled"
            } else {
                "name-cell"
            };
            writeln!(
                html,
                r#"                    <td class="{class}">{}</td>"#,
                escape_html(occupant)
            )?;
            match ambulance {
                AmbulanceCell::Single(value) => writeln!(
                    html,
                    r#"                    <td class="number-cell">{}</td>"#,
                    escape_html(value)
                )?,
                AmbulanceCell::Span { value, span } if *span > 1 => writeln!(
                    html,
                    r#"                    <td rowspan="{span}" class="number-cell">{}</td>"#,
                    escape_html(value)
                )?,
                AmbulanceCell::Span { value, .. } => writeln!(
                    html,
                    r#"                    <td class="number-cell">{}</td>"#,
                    escape_html(value)
                )?,
                AmbulanceCell::Covered => {}
            }
        }
    }
    Ok(())
}

fn write_notes(html: &mut String, notes: &[String]) -> Result<(), RenderError> {
    if notes.is_empty() {
        return Ok(());
    }
    writeln!(html, r#"        <div class="notes">"#)?;
    writeln!(html, "            <h3>הערות:</h3>")?;
    for note in notes {
        writeln!(html, "            <div>• {}</div>", escape_html(note))?;
    }
    writeln!(html, "        </div>")?;
    Ok(())
}

fn or_dash(value: Option<&String>) -> String {
    match value.map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(v) => escape_html(v),
        None => "-".to_string(),
    }
}

fn write_extra_missions(html: &mut String, missions: &[ExtraMission]) -> Result<(), RenderError> {
    if missions.is_empty() {
        return Ok(());
    }
    writeln!(html, r#"        <div class="extra missions">"#)?;
    writeln!(html, "            <h2>משימות מחוץ למשמרת</h2>")?;
    writeln!(html, "            <table>")?;
    writeln!(
        html,
        "                <thead><tr><th>שעות</th><th>מיקום</th><th>רכב</th><th>שם נהג</th><th>הערות</th></tr></thead>"
    )?;
    writeln!(html, "                <tbody>")?;
    for m in missions {
        writeln!(
            html,
            "                    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&m.hours),
            escape_html(&m.location),
            or_dash(m.vehicle.as_ref()),
            or_dash(m.driver_name.as_ref()),
            or_dash(m.notes.as_ref()),
        )?;
    }
    writeln!(html, "                </tbody>")?;
    writeln!(html, "            </table>")?;
    writeln!(html, "        </div>")?;
    Ok(())
}

fn write_extra_ambulances(
    html: &mut String,
    ambulances: &[ExtraAmbulance],
) -> Result<(), RenderError> {
    if ambulances.is_empty() {
        return Ok(());
    }
    writeln!(html, r#"        <div class="extra ambulances">"#)?;
    writeln!(html, "            <h2>מעל התקן</h2>")?;
    writeln!(html, "            <table>")?;
    writeln!(
        html,
        "                <thead><tr><th>שעות</th><th>תחנה</th><th>מספר אמבולנס</th><th>שם נהג</th><th>הערות</th></tr></thead>"
    )?;
    writeln!(html, "                <tbody>")?;
    for a in ambulances {
        writeln!(
            html,
            "                    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&a.working_hours),
            escape_html(&a.station),
            or_dash(a.ambulance_number.as_ref()),
            or_dash(a.driver_name.as_ref()),
            or_dash(a.notes.as_ref()),
        )?;
    }
    writeln!(html, "                </tbody>")?;
    writeln!(html, "            </table>")?;
    writeln!(html, "        </div>")?;
    Ok(())
}
