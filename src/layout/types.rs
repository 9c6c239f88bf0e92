use crate::model::ShiftKind;
use serde::Serialize;

/// Marqueur par défaut des cases "רגיל תקן" (ambulance individuelle).
pub const DEFAULT_STANDALONE_MARKER: &str = "רגיל תקן";

/// Options de mise en page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Sous-chaîne qui désigne une case à ambulance individuelle.
    pub standalone_marker: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            standalone_marker: DEFAULT_STANDALONE_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Annotation, // plage horaire, une seule cellule sur trois colonnes
    Standalone, // ambulance propre, jamais fusionnée
    Crew,       // participe à la fusion du numéro d'ambulance
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbulanceCell {
    /// Cellule individuelle.
    Single(String),
    /// Première ligne d'une fusion couvrant `span` lignes.
    Span { value: String, span: usize },
    /// Couverte par une fusion commencée plus haut.
    Covered,
}

/// Contenu d'une colonne de shift (trois sous-colonnes) sur une ligne.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftCell {
    /// Shift absent pour cette station, ou ligne de remplissage.
    Blank,
    Annotation {
        label: String,
    },
    Slot {
        role: String,
        occupant: String,
        unfilled: bool,
        standalone: bool,
        ambulance: AmbulanceCell,
    },
}

impl ShiftCell {
    pub fn is_unfilled(&self) -> bool {
        matches!(self, ShiftCell::Slot { unfilled: true, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    /// Indexé par [`ShiftKind::index`] : nuit, matin, soir.
    pub cells: [ShiftCell; 3],
}

impl GridRow {
    pub fn cell(&self, kind: ShiftKind) -> &ShiftCell {
        &self.cells[kind.index()]
    }
}

/// Toutes les lignes d'une station, sur les trois shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationGroup {
    pub name: String,
    pub rows: Vec<GridRow>,
}

impl StationGroup {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// La cellule du nom n'est fusionnée qu'au-delà d'une ligne.
    pub fn merges_name(&self) -> bool {
        self.rows.len() > 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub stations: Vec<StationGroup>,
}

impl Grid {
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.stations.iter().map(StationGroup::row_count).sum()
    }
}
