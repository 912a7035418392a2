//! Crate placement order.

use std::cmp::Reverse;
use truck_loader_core::Crate;

/// Orders crates by descending volume.
///
/// The sort is stable: crates of equal volume keep their input order.
pub fn sequence_crates(crates: &[Crate]) -> Vec<&Crate> {
    let mut sequence: Vec<&Crate> = crates.iter().collect();
    sequence.sort_by_key(|c| Reverse(c.volume()));
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(sequence: &[&Crate]) -> Vec<u32> {
        sequence.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn test_largest_first() {
        let crates = vec![
            Crate::new(1, 1, 1, 1),
            Crate::new(2, 3, 3, 3),
            Crate::new(3, 2, 2, 2),
        ];
        assert_eq!(ids(&sequence_crates(&crates)), vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_volumes_keep_input_order() {
        // 2x3x1, 1x1x6, 3x2x1 and 6x1x1 all have volume 6.
        let crates = vec![
            Crate::new(40, 2, 3, 1),
            Crate::new(10, 1, 1, 6),
            Crate::new(99, 1, 1, 1),
            Crate::new(30, 3, 2, 1),
            Crate::new(20, 6, 1, 1),
        ];
        assert_eq!(ids(&sequence_crates(&crates)), vec![40, 10, 30, 20, 99]);
    }

    #[test]
    fn test_empty() {
        assert!(sequence_crates(&[]).is_empty());
    }
}
