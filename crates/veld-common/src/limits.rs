//! Centralized limits and thresholds.

/// How many resolved calls a body traversal processes between cancellation
/// polls.
pub const CANCEL_CHECK_INTERVAL: usize = 64;
