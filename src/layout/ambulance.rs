use super::types::{AmbulanceCell, RowKind};
use crate::model::Role;
use std::ops::Range;

/// Première suite contiguë de lignes d'équipage ; le balayage s'arrête à la
/// première rupture après son début.
pub(super) fn crew_run(kinds: &[RowKind]) -> Option<Range<usize>> {
    let start = kinds.iter().position(|k| *k == RowKind::Crew)?;
    let len = kinds[start..]
        .iter()
        .take_while(|k| **k == RowKind::Crew)
        .count();
    Some(start..start + len)
}

/// Cellule ambulance de chaque ligne d'un shift ; `None` pour les annotations.
pub(super) fn ambulance_cells(roles: &[&Role], kinds: &[RowKind]) -> Vec<Option<AmbulanceCell>> {
    let run = crew_run(kinds);
    let run_value = run
        .as_ref()
        .and_then(|r| {
            roles[r.clone()]
                .iter()
                .map(|role| role.ambulance())
                .find(|v| !v.is_empty())
        })
        .unwrap_or("")
        .to_string();

    kinds
        .iter()
        .enumerate()
        .map(|(idx, kind)| match kind {
            RowKind::Annotation => None,
            RowKind::Standalone => Some(AmbulanceCell::Single(roles[idx].ambulance().to_string())),
            RowKind::Crew => Some(match &run {
                Some(r) if idx == r.start => AmbulanceCell::Span {
                    value: run_value.clone(),
                    span: r.len(),
                },
                Some(r) if r.contains(&idx) => AmbulanceCell::Covered,
                _ => AmbulanceCell::Single(roles[idx].ambulance().to_string()),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::RowKind::{Annotation as A, Crew as C, Standalone as S};

    #[test]
    fn run_starts_at_first_crew_row() {
        assert_eq!(crew_run(&[A, C, C, S, C]), Some(1..3));
        assert_eq!(crew_run(&[C]), Some(0..1));
        assert_eq!(crew_run(&[A, S]), None);
        assert_eq!(crew_run(&[]), None);
    }

    #[test]
    fn scanning_does_not_resume_after_break() {
        assert_eq!(crew_run(&[C, C, A, C, C, C]), Some(0..2));
    }
}
