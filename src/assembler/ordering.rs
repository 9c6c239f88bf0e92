use crate::model::{ExtraAmbulance, ExtraMission, Shift, ShiftKind};
use std::cmp::Ordering;

/// Priorité des noms de shift inconnus : toujours en dernier.
pub const UNKNOWN_SHIFT_PRIORITY: u32 = 999;

pub fn shift_priority(name: &str) -> u32 {
    ShiftKind::from_name(name)
        .map(|kind| kind.index() as u32)
        .unwrap_or(UNKNOWN_SHIFT_PRIORITY)
}

/// Compare deux identifiants : numériquement si les deux sont des entiers.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Tri stable : priorité du nom, puis `order`, puis ordre d'entrée.
pub(super) fn sort_tree(shifts: &mut [Shift]) {
    shifts.sort_by_key(|s| (shift_priority(&s.name), s.order));
    for shift in shifts.iter_mut() {
        shift.units.sort_by_key(|u| u.order);
        for unit in shift.units.iter_mut() {
            unit.roles.sort_by_key(|r| r.order);
        }
    }
}

pub(super) fn sort_extras(missions: &mut [ExtraMission], ambulances: &mut [ExtraAmbulance]) {
    missions.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| compare_ids(&a.id, &b.id))
    });
    ambulances.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| compare_ids(&a.id, &b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_table() {
        assert_eq!(shift_priority("לילה"), 0);
        assert_eq!(shift_priority("בוקר"), 1);
        assert_eq!(shift_priority(" ערב "), 2);
        assert_eq!(shift_priority("Morning"), 1);
        assert_eq!(shift_priority("תגבור"), UNKNOWN_SHIFT_PRIORITY);
    }

    #[test]
    fn ids_compare_numerically_when_possible() {
        assert_eq!(compare_ids("9", "10"), Ordering::Less);
        assert_eq!(compare_ids("b", "a"), Ordering::Greater);
        assert_eq!(compare_ids("10", "a"), Ordering::Less);
    }
}
