use rand::{Rng, seq::SliceRandom};

use crate::{constants::NEIGHBOR_SHIFTS, error::MazeError};

/// Decides the order in which freshly discovered neighbors are pushed.
///
/// Draw schedule: one draw for `shift` when constructed, then one `f64` draw
/// per call to [`order`](Self::order), followed by the shuffle's own draws when
/// that roll lands below `difficulty`.
#[derive(Clone, Debug)]
pub struct NeighborOrder<R: Rng> {
    rng: R,
    difficulty: f64,
    shift: usize,
}

impl<R: Rng> NeighborOrder<R> {
    pub fn new(mut rng: R, difficulty: f64) -> Result<Self, MazeError> {
        if !(0.0..=1.0).contains(&difficulty) {
            return Err(MazeError::InvalidDifficulty(difficulty));
        }

        let shift = rng.random_range(0..NEIGHBOR_SHIFTS);

        Ok(NeighborOrder {
            rng,
            difficulty,
            shift,
        })
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Left rotation applied whenever the candidates are not shuffled.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Shuffles `candidates` with probability `difficulty`; otherwise rotates
    /// them left by the fixed shift, which keeps corridors long and straight.
    pub fn order<T>(&mut self, mut candidates: Vec<T>) -> Vec<T> {
        let roll: f64 = self.rng.random();

        if roll < self.difficulty {
            candidates.shuffle(&mut self.rng);
        } else if !candidates.is_empty() {
            let k = self.shift % candidates.len();
            candidates.rotate_left(k);
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_rejects_difficulty_outside_unit_interval() {
        for difficulty in [-0.1, 1.5, f64::NAN] {
            let result = NeighborOrder::new(StdRng::seed_from_u64(1), difficulty);
            assert!(matches!(result, Err(MazeError::InvalidDifficulty(_))));
        }
    }

    #[test]
    fn test_shift_is_drawn_once_within_range() {
        for seed in 0..64 {
            let mut order = NeighborOrder::new(StdRng::seed_from_u64(seed), 0.5).unwrap();
            let shift = order.shift();
            assert!(shift < NEIGHBOR_SHIFTS);

            for _ in 0..8 {
                order.order(vec![1, 2, 3, 4]);
            }
            assert_eq!(order.shift(), shift, "shift should never be redrawn");
        }
    }

    #[test]
    fn test_zero_difficulty_always_rotates_by_shift() {
        for seed in 0..16 {
            let mut order = NeighborOrder::new(StdRng::seed_from_u64(seed), 0.0).unwrap();
            let k = order.shift();

            for _ in 0..8 {
                let mut expected = vec!['u', 'l', 'r', 'd'];
                expected.rotate_left(k % 4);
                assert_eq!(order.order(vec!['u', 'l', 'r', 'd']), expected);

                let mut expected = vec!['u', 'l', 'r'];
                expected.rotate_left(k % 3);
                assert_eq!(order.order(vec!['u', 'l', 'r']), expected);
            }
        }
    }

    #[test]
    fn test_zero_difficulty_yields_at_most_four_orderings() {
        let mut seen = HashSet::new();
        for seed in 0..128 {
            let mut order = NeighborOrder::new(StdRng::seed_from_u64(seed), 0.0).unwrap();
            seen.insert(order.order(vec![0, 1, 2, 3]));
        }
        assert!(seen.len() <= NEIGHBOR_SHIFTS);
    }

    #[test]
    fn test_full_difficulty_shuffles() {
        let mut order = NeighborOrder::new(StdRng::seed_from_u64(7), 1.0).unwrap();
        let mut seen = HashSet::new();

        for _ in 0..256 {
            let ordered = order.order(vec![0, 1, 2, 3]);
            let mut sorted = ordered.clone();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2, 3], "shuffle must be a permutation");
            seen.insert(ordered);
        }

        assert!(
            seen.len() > NEIGHBOR_SHIFTS,
            "expected more than {} orderings, got {}",
            NEIGHBOR_SHIFTS,
            seen.len()
        );
    }

    #[test]
    fn test_empty_and_single_candidates_pass_through() {
        for difficulty in [0.0, 1.0] {
            let mut order = NeighborOrder::new(StdRng::seed_from_u64(3), difficulty).unwrap();
            assert!(order.order(Vec::<u8>::new()).is_empty());
            assert_eq!(order.order(vec![9]), vec![9]);
        }
    }

    #[test]
    fn test_same_seed_same_orderings() {
        let mut a = NeighborOrder::new(StdRng::seed_from_u64(42), 0.6).unwrap();
        let mut b = NeighborOrder::new(StdRng::seed_from_u64(42), 0.6).unwrap();

        for _ in 0..32 {
            assert_eq!(a.order(vec![0, 1, 2, 3]), b.order(vec![0, 1, 2, 3]));
        }
    }
}
