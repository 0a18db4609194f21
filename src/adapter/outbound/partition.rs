//! Partition pickers backed by `rand`.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::port::outbound::partition::PartitionPicker;

/// Uniform picks from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPartitions;

impl PartitionPicker for RandomPartitions {
    fn pick(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound.max(1))
    }
}

/// Reproducible picks from an explicitly seeded generator.
pub struct SeededPartitions {
    rng: Mutex<StdRng>,
}

impl SeededPartitions {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PartitionPicker for SeededPartitions {
    fn pick(&self, bound: u32) -> u32 {
        self.rng.lock().gen_range(0..bound.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_picks_stay_in_range() {
        let picker = RandomPartitions;
        for _ in 0..500 {
            assert!(picker.pick(11) < 11);
        }
    }

    #[test]
    fn zero_bound_is_treated_as_one() {
        assert_eq!(RandomPartitions.pick(0), 0);
        assert_eq!(SeededPartitions::new(1).pick(0), 0);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let a = SeededPartitions::new(42);
        let b = SeededPartitions::new(42);
        let first: Vec<u32> = (0..20).map(|_| a.pick(3)).collect();
        let second: Vec<u32> = (0..20).map(|_| b.pick(3)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|p| *p < 3));
    }
}
