use super::{GridRenderer, RenderError, RosterDocument};
use crate::layout::{shift_cells, AmbulanceCell, ShiftCell};
use csv::WriterBuilder;

/// Export CSV à plat: header `station,shift,row,role,occupant,ambulance,ambulance_span,unfilled`
///
/// Une ligne par cellule non vide ; les lignes couvertes par une fusion
/// d'ambulance ont une colonne ambulance vide et un span de 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

impl GridRenderer for CsvRenderer {
    fn render(&self, doc: &RosterDocument<'_>) -> Result<Vec<u8>, RenderError> {
        let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
        w.write_record([
            "station",
            "shift",
            "row",
            "role",
            "occupant",
            "ambulance",
            "ambulance_span",
            "unfilled",
        ])?;
        for station in &doc.grid.stations {
            for (idx, row) in station.rows.iter().enumerate() {
                let row_number = (idx + 1).to_string();
                for (kind, cell) in shift_cells(row) {
                    match cell {
                        ShiftCell::Blank => {}
                        ShiftCell::Annotation { label } => {
                            w.write_record([
                                station.name.as_str(),
                                kind.label(),
                                row_number.as_str(),
                                label.as_str(),
                                "",
                                "",
                                "",
                                "false",
                            ])?;
                        }
                        ShiftCell::Slot {
                            role,
                            occupant,
                            unfilled,
                            ambulance,
                            ..
                        } => {
                            let (number, span) = match ambulance {
                                AmbulanceCell::Single(v) => (v.as_str(), "1".to_string()),
                                AmbulanceCell::Span { value, span } => {
                                    (value.as_str(), span.to_string())
                                }
                                AmbulanceCell::Covered => ("", "0".to_string()),
                            };
                            w.write_record([
                                station.name.as_str(),
                                kind.label(),
                                row_number.as_str(),
                                role.as_str(),
                                occupant.as_str(),
                                number,
                                span.as_str(),
                                if *unfilled { "true" } else { "false" },
                            ])?;
                        }
                    }
                }
            }
        }
        w.flush().map_err(|e| RenderError::Format(e.to_string()))?;
        w.into_inner()
            .map_err(|e| RenderError::Format(e.to_string()))
    }
}
