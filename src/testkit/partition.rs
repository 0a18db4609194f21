//! Deterministic partition picker.

use crate::port::outbound::partition::PartitionPicker;

/// Always picks the same partition, clamped below the bound.
#[derive(Debug, Clone, Copy)]
pub struct FixedPartitions(u32);

impl FixedPartitions {
    pub fn new(partition: u32) -> Self {
        Self(partition)
    }
}

impl PartitionPicker for FixedPartitions {
    fn pick(&self, bound: u32) -> u32 {
        self.0.min(bound.saturating_sub(1))
    }
}
