//! Rendus d'une grille : HTML imprimable, tableur XLSX, boîtes de mise en
//! page imprimée, CSV à plat. Tous consomment la même [`Grid`] ; seuls
//! l'encodage et la mise en forme diffèrent.

mod flat;
mod html;
mod print;
mod title;
#[cfg(feature = "xlsx")]
mod xlsx;

pub use flat::CsvRenderer;
pub use html::{escape_html, HtmlRenderer};
pub use print::{layout_pages, PrintBox, PrintLayout, PrintOptions, PrintPage, PrintRenderer};
pub use title::{hebrew_date, roster_title};
#[cfg(feature = "xlsx")]
pub use xlsx::XlsxRenderer;

use crate::layout::Grid;
use crate::model::Schedule;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("render format error: {0}")]
    Format(String),
    #[error(transparent)]
    Fmt(#[from] fmt::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[cfg(feature = "xlsx")]
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Ce que reçoit un rendu : le sidur (en-tête, notes, annexes) et sa grille.
#[derive(Debug, Clone, Copy)]
pub struct RosterDocument<'a> {
    pub schedule: &'a Schedule,
    pub grid: &'a Grid,
}

impl<'a> RosterDocument<'a> {
    pub fn new(schedule: &'a Schedule, grid: &'a Grid) -> Self {
        Self { schedule, grid }
    }

    pub fn title(&self) -> String {
        roster_title(self.schedule.date)
    }
}

/// Encode un document dans un format de sortie.
pub trait GridRenderer {
    fn render(&self, doc: &RosterDocument<'_>) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Xlsx,
    Csv,
    Print,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Print => "json",
        }
    }

    pub fn renderer(self) -> Result<Box<dyn GridRenderer>, RenderError> {
        match self {
            ExportFormat::Html => Ok(Box::new(HtmlRenderer)),
            ExportFormat::Csv => Ok(Box::new(CsvRenderer)),
            ExportFormat::Print => Ok(Box::new(PrintRenderer::default())),
            #[cfg(feature = "xlsx")]
            ExportFormat::Xlsx => Ok(Box::new(XlsxRenderer)),
            #[cfg(not(feature = "xlsx"))]
            ExportFormat::Xlsx => Err(RenderError::Format(
                "xlsx export requires the `xlsx` feature".to_string(),
            )),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "print" | "pdf" => Ok(ExportFormat::Print),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Html => "html",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Print => "print",
        };
        f.write_str(name)
    }
}
