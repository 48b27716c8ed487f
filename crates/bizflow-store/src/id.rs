//! Wall-clock-derived entity id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Generates ids of the form `{prefix}-{unix_millis}-{seq}`.
///
/// The millisecond stamp keeps ids readable and roughly ordered; the
/// process-wide sequence makes same-millisecond allocations unique.
/// Uniqueness is per session, which is all the in-memory store needs —
/// these are not cryptographic identifiers.
#[derive(Debug, Default)]
pub struct IdGenerator {
    seq: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, prefix: &str) -> String {
        let millis = Utc::now().timestamp_millis();
        let n = self.seq.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{millis}-{n}")
    }
}
