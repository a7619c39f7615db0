//! Run Log Capacities
//!
//! The run log is a fixed-capacity `heapless::Vec`, so its size is decided
//! at compile time.

/// Default number of runs a session log holds.
///
/// A lab session typically records 10-30 droplets; 64 leaves headroom
/// for repeats without growing the record store past a few KB
/// (~100 bytes per run).
pub const DEFAULT_RUN_LOG_CAPACITY: usize = 64;

/// Small run log for quick demonstrations.
pub const SMALL_RUN_LOG_CAPACITY: usize = 16;
