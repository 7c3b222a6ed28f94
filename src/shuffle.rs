use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the deal is randomized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Fisher-Yates: every ordering is equally likely.
    #[default]
    Uniform,
    /// Sattolo's variant: the swap partner is drawn from `[0, i)`, so the
    /// result is always a single cycle and no slot keeps its element.
    Cyclic,
}

/// Shuffles `items` in place, walking from the back and swapping each slot
/// with a randomly chosen earlier (or, for `Uniform`, the same) slot.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R, mode: ShuffleMode)
where
    R: Rng + ?Sized,
{
    if items.len() < 2 {
        return;
    }

    for i in (1..items.len()).rev() {
        let j = match mode {
            ShuffleMode::Uniform => rng.random_range(0..=i),
            ShuffleMode::Cyclic => rng.random_range(0..i),
        };
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_and_single_are_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng, ShuffleMode::Uniform);
        assert!(empty.is_empty());

        let mut one = vec![42];
        shuffle(&mut one, &mut rng, ShuffleMode::Cyclic);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut a: Vec<u32> = (0..10).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(42), ShuffleMode::Uniform);
        shuffle(&mut b, &mut StdRng::seed_from_u64(42), ShuffleMode::Uniform);
        assert_eq!(a, b);
    }

    #[test]
    fn cyclic_pair_always_swaps() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut pair = [1, 2];
            shuffle(&mut pair, &mut rng, ShuffleMode::Cyclic);
            assert_eq!(pair, [2, 1]);
        }
    }

    #[test]
    fn uniform_can_leave_an_element_in_place() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut saw_fixed_point = false;
        for _ in 0..200 {
            let mut items = [0, 1, 2];
            shuffle(&mut items, &mut rng, ShuffleMode::Uniform);
            if items.iter().enumerate().any(|(idx, value)| idx == *value) {
                saw_fixed_point = true;
                break;
            }
        }
        assert!(saw_fixed_point);
    }

    #[test]
    fn uniform_reaches_every_ordering_of_three() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut items = [0, 1, 2];
            shuffle(&mut items, &mut rng, ShuffleMode::Uniform);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }
}
