use super::{GridRenderer, RenderError, RosterDocument};
use crate::layout::{AmbulanceCell, ShiftCell, StationGroup};
use crate::model::ShiftKind;
use serde::Serialize;

const HEADER_FILL: &str = "#d9d9d9";
const SPECIAL_FILL: &str = "#e0e0e0";
const UNFILLED_FILL: &str = "#ff0000";
const BLANK_FILL: &str = "#000000";

/// Dimensions de page et de colonnes, en points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintOptions {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub title_height: f32,
    pub row_height: f32,
    pub station_width: f32,
    pub role_width: f32,
    pub name_width: f32,
    pub number_width: f32,
}

impl Default for PrintOptions {
    fn default() -> Self {
        // A4 paysage
        Self {
            page_width: 842.0,
            page_height: 595.0,
            margin: 28.0,
            title_height: 30.0,
            row_height: 20.0,
            station_width: 80.0,
            role_width: 80.0,
            name_width: 100.0,
            number_width: 45.0,
        }
    }
}

impl PrintOptions {
    fn shift_width(&self) -> f32 {
        self.role_width + self.name_width + self.number_width
    }

    fn shift_x(&self, kind: ShiftKind) -> f32 {
        self.margin + self.station_width + self.shift_width() * kind.index() as f32
    }

    fn bottom(&self) -> f32 {
        self.page_height - self.margin
    }
}

/// Rectangle positionné, avec texte centré et remplissage éventuel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintPage {
    pub number: usize,
    pub boxes: Vec<PrintBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintLayout {
    pub width: f32,
    pub height: f32,
    pub pages: Vec<PrintPage>,
}

/// Plan de boîtes paginé, sérialisé en JSON : entrée d'un générateur PDF,
/// qui n'a pas de fusion de cellules native.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintRenderer {
    pub options: PrintOptions,
}

impl GridRenderer for PrintRenderer {
    fn render(&self, doc: &RosterDocument<'_>) -> Result<Vec<u8>, RenderError> {
        Ok(serde_json::to_vec_pretty(&layout_pages(doc, &self.options))?)
    }
}

impl PrintBox {
    fn new(x: f32, y: f32, width: f32, height: f32, text: &str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.to_string(),
            fill: None,
            bold: false,
        }
    }

    fn fill(mut self, color: &str) -> Self {
        self.fill = Some(color.to_string());
        self
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn header(x: f32, y: f32, width: f32, height: f32, text: &str) -> Self {
        Self::new(x, y, width, height, text).fill(HEADER_FILL).bold()
    }
}

struct PageCursor<'o> {
    opts: &'o PrintOptions,
    pages: Vec<PrintPage>,
    y: f32,
    has_station: bool,
}

impl<'o> PageCursor<'o> {
    fn new(opts: &'o PrintOptions) -> Self {
        Self {
            opts,
            pages: Vec::new(),
            y: opts.margin,
            has_station: false,
        }
    }

    fn push(&mut self, b: PrintBox) {
        if let Some(page) = self.pages.last_mut() {
            page.boxes.push(b);
        }
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(PrintPage {
            number,
            boxes: Vec::new(),
        });
        self.y = self.opts.margin;
        self.has_station = false;
    }

    fn header(&mut self) {
        let o = self.opts;
        let h = o.row_height;
        let y = self.y;
        self.push(PrintBox::header(o.margin, y, o.station_width, h * 2.0, "תחנה"));
        for kind in ShiftKind::ALL {
            let x = o.shift_x(kind);
            let name_x = x + o.role_width;
            let number_x = name_x + o.name_width;
            self.push(PrintBox::header(x, y, o.shift_width(), h, kind.label()));
            self.push(PrintBox::header(x, y + h, o.role_width, h, "משימה"));
            self.push(PrintBox::header(name_x, y + h, o.name_width, h, "שם"));
            self.push(PrintBox::header(number_x, y + h, o.number_width, h, "אמבולנס"));
        }
        self.y += h * 2.0;
    }

    fn station(&mut self, station: &StationGroup) {
        let o = self.opts;
        let h = o.row_height;
        let group_height = h * station.row_count() as f32;
        if self.has_station && self.y + group_height > o.bottom() {
            self.new_page();
            self.header();
        }

        let top = self.y;
        let name = PrintBox::header(o.margin, top, o.station_width, group_height, &station.name);
        self.push(name);
        for (idx, row) in station.rows.iter().enumerate() {
            let y = top + h * idx as f32;
            for kind in ShiftKind::ALL {
                self.cell(o.shift_x(kind), y, row.cell(kind));
            }
        }
        self.y = top + group_height;
        self.has_station = true;
    }

    fn cell(&mut self, x: f32, y: f32, cell: &ShiftCell) {
        let o = self.opts;
        let h = o.row_height;
        let name_x = x + o.role_width;
        let number_x = name_x + o.name_width;
        match cell {
            ShiftCell::Blank => {
                self.push(PrintBox::new(x, y, o.role_width, h, "").fill(BLANK_FILL));
                self.push(PrintBox::new(name_x, y, o.name_width, h, "").fill(BLANK_FILL));
                self.push(PrintBox::new(number_x, y, o.number_width, h, "").fill(BLANK_FILL));
            }
            ShiftCell::Annotation { label } => {
                let b = PrintBox::new(x, y, o.shift_width(), h, label);
                self.push(b.fill(SPECIAL_FILL).bold());
            }
            ShiftCell::Slot {
                role,
                occupant,
                unfilled,
                ambulance,
                ..
            } => {
                self.push(PrintBox::new(x, y, o.role_width, h, role));
                let mut name = PrintBox::new(name_x, y, o.name_width, h, occupant);
                if *unfilled {
                    name = name.fill(UNFILLED_FILL);
                }
                self.push(name);
                match ambulance {
                    AmbulanceCell::Single(value) => {
                        self.push(PrintBox::new(number_x, y, o.number_width, h, value).bold());
                    }
                    AmbulanceCell::Span { value, span } => {
                        let height = h * (*span).max(1) as f32;
                        let b = PrintBox::new(number_x, y, o.number_width, height, value);
                        self.push(b.bold());
                    }
                    AmbulanceCell::Covered => {}
                }
            }
        }
    }
}

/// Calcule les pages : titre sur la première, en-tête répété sur chacune,
/// jamais de station coupée entre deux pages.
pub fn layout_pages(doc: &RosterDocument<'_>, opts: &PrintOptions) -> PrintLayout {
    let mut cursor = PageCursor::new(opts);
    cursor.new_page();

    let width = opts.station_width + opts.shift_width() * 3.0;
    let title = PrintBox::new(opts.margin, opts.margin, width, opts.title_height, &doc.title());
    cursor.push(title.fill("#f0f0f0").bold());
    cursor.y += opts.title_height + 10.0;
    cursor.header();

    for station in &doc.grid.stations {
        cursor.station(station);
    }

    PrintLayout {
        width: opts.page_width,
        height: opts.page_height,
        pages: cursor.pages,
    }
}
