//! Partition selection port.

/// Source of partition numbers used to spread orders across shards.
///
/// Injected so tests and reproducible runs can fix the sequence.
pub trait PartitionPicker: Send + Sync {
    /// Pick a partition in `0..bound`. `bound` is always at least 1.
    fn pick(&self, bound: u32) -> u32;
}
