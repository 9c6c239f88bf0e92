use super::{GridRenderer, RenderError, RosterDocument};
use crate::layout::{AmbulanceCell, ShiftCell};
use crate::model::ShiftKind;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError,
};

const STATION_COL: u16 = 1;
const FIRST_SHIFT_COL: u16 = 2;
const FIRST_DATA_ROW: u32 = 3;

/// Classeur XLSX d'une feuille, droite-à-gauche, au format du sidur papier.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxRenderer;

impl GridRenderer for XlsxRenderer {
    fn render(&self, doc: &RosterDocument<'_>) -> Result<Vec<u8>, RenderError> {
        let mut workbook = Workbook::new();
        {
            let sheet = workbook.add_worksheet();
            write_sheet(sheet, doc)?;
        }
        Ok(workbook.save_to_buffer()?)
    }
}

struct Formats {
    title: Format,
    header: Format,
    station: Format,
    cell: Format,
    special: Format,
    unfilled: Format,
    blank: Format,
}

impl Formats {
    fn new() -> Self {
        let base = Format::new()
            .set_font_name("Arial")
            .set_font_size(10)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);
        Self {
            title: base.clone().set_font_size(14).set_bold(),
            header: base
                .clone()
                .set_font_size(12)
                .set_bold()
                .set_background_color(Color::RGB(0xD9D9D9)),
            station: base.clone().set_font_size(11).set_bold(),
            special: base.clone().set_background_color(Color::RGB(0xE0E0E0)),
            unfilled: base.clone().set_background_color(Color::RGB(0xFF0000)),
            blank: base.clone().set_background_color(Color::RGB(0x000000)),
            cell: base,
        }
    }
}

fn shift_col(kind: ShiftKind) -> u16 {
    FIRST_SHIFT_COL + 3 * kind.index() as u16
}

fn write_sheet(sheet: &mut Worksheet, doc: &RosterDocument<'_>) -> Result<(), XlsxError> {
    let f = Formats::new();

    sheet.set_name("סידור")?;
    sheet.set_right_to_left(true);
    sheet.set_column_width(0, 9)?;
    sheet.set_column_width(STATION_COL, 20)?;
    for kind in ShiftKind::ALL {
        let col = shift_col(kind);
        sheet.set_column_width(col, 20)?;
        sheet.set_column_width(col + 1, 25)?;
        sheet.set_column_width(col + 2, 10)?;
    }

    let last_col = shift_col(ShiftKind::Evening) + 2;
    sheet.merge_range(0, STATION_COL, 0, last_col, &doc.title(), &f.title)?;
    sheet.set_row_height(0, 25)?;

    sheet.merge_range(1, STATION_COL, 2, STATION_COL, "תחנה", &f.header)?;
    for kind in ShiftKind::ALL {
        let col = shift_col(kind);
        sheet.merge_range(1, col, 1, col + 2, kind.label(), &f.header)?;
        sheet.write_string_with_format(2, col, "משימה", &f.header)?;
        sheet.write_string_with_format(2, col + 1, "שם", &f.header)?;
        sheet.write_string_with_format(2, col + 2, "אמבולנס", &f.header)?;
    }
    sheet.set_row_height(1, 25)?;

    let mut row = FIRST_DATA_ROW;
    for station in &doc.grid.stations {
        let start = row;
        for grid_row in &station.rows {
            for kind in ShiftKind::ALL {
                write_cell(sheet, &f, row, shift_col(kind), grid_row.cell(kind))?;
            }
            row += 1;
        }
        if station.merges_name() {
            let last = row - 1;
            sheet.merge_range(start, STATION_COL, last, STATION_COL, &station.name, &f.station)?;
        } else {
            sheet.write_string_with_format(start, STATION_COL, &station.name, &f.station)?;
        }
    }
    Ok(())
}

fn write_cell(
    sheet: &mut Worksheet,
    f: &Formats,
    row: u32,
    col: u16,
    cell: &ShiftCell,
) -> Result<(), XlsxError> {
    match cell {
        ShiftCell::Blank => {
            for offset in 0..3 {
                sheet.write_blank(row, col + offset, &f.blank)?;
            }
        }
        ShiftCell::Annotation { label } => {
            sheet.merge_range(row, col, row, col + 2, label, &f.special)?;
        }
        ShiftCell::Slot {
            role,
            occupant,
            unfilled,
            ambulance,
            ..
        } => {
            sheet.write_string_with_format(row, col, role, &f.cell)?;
            if *unfilled {
                sheet.write_blank(row, col + 1, &f.unfilled)?;
            } else {
                sheet.write_string_with_format(row, col + 1, occupant, &f.cell)?;
            }
            match ambulance {
                AmbulanceCell::Span { value, span } if *span > 1 => {
                    let last = row + *span as u32 - 1;
                    sheet.merge_range(row, col + 2, last, col + 2, value, &f.cell)?;
                }
                AmbulanceCell::Span { value, .. } | AmbulanceCell::Single(value) => {
                    sheet.write_string_with_format(row, col + 2, value, &f.cell)?;
                }
                AmbulanceCell::Covered => {}
            }
        }
    }
    Ok(())
}
