//! Order Computation
//!
//! Pure helpers computing a new id order for a dropped item.

use std::collections::HashMap;
use std::hash::Hash;

/// Remove `dragged` and reinsert it at the index `target` occupied.
///
/// Returns `None` when the ids are equal or either is missing from `ids`.
pub fn move_onto<Id: Copy + PartialEq>(ids: &[Id], dragged: Id, target: Id) -> Option<Vec<Id>> {
    if dragged == target {
        return None;
    }
    let from = ids.iter().position(|id| *id == dragged)?;
    let to = ids.iter().position(|id| *id == target)?;

    let mut next = ids.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(next)
}

/// True when both slices hold the same ids with the same multiplicity.
pub fn same_members<Id: Copy + Eq + Hash>(before: &[Id], after: &[Id]) -> bool {
    if before.len() != after.len() {
        return false;
    }
    let mut counts: HashMap<Id, i64> = HashMap::new();
    for id in before {
        *counts.entry(*id).or_default() += 1;
    }
    for id in after {
        *counts.entry(*id).or_default() -= 1;
    }
    counts.values().all(|c| *c == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_first_onto_last() {
        assert_eq!(move_onto(&[1, 2, 3], 1, 3), Some(vec![2, 3, 1]));
    }

    #[test]
    fn test_move_last_onto_first() {
        assert_eq!(move_onto(&[1, 2, 3], 3, 1), Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_move_to_neighbour() {
        assert_eq!(move_onto(&[1, 2, 3, 4], 2, 3), Some(vec![1, 3, 2, 4]));
        assert_eq!(move_onto(&[1, 2, 3, 4], 3, 2), Some(vec![1, 3, 2, 4]));
    }

    #[test]
    fn test_invalid_moves() {
        assert_eq!(move_onto(&[1, 2, 3], 2, 2), None);
        assert_eq!(move_onto(&[1, 2, 3], 9, 2), None);
        assert_eq!(move_onto(&[1, 2, 3], 2, 9), None);
        assert_eq!(move_onto::<u32>(&[], 1, 2), None);
    }

    #[test]
    fn test_moves_keep_members() {
        let ids = [10, 20, 30, 40, 50];
        for &dragged in &ids {
            for &target in &ids {
                if let Some(next) = move_onto(&ids, dragged, target) {
                    assert!(same_members(&ids, &next));
                    assert_eq!(next.iter().position(|i| *i == dragged), ids.iter().position(|i| *i == target));
                }
            }
        }
    }

    #[test]
    fn test_same_members_detects_loss_and_duplication() {
        assert!(same_members(&[1, 2, 3], &[3, 1, 2]));
        assert!(!same_members(&[1, 2, 3], &[1, 2]));
        assert!(!same_members(&[1, 2, 3], &[1, 1, 3]));
    }
}
