//! Element id generation.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Hands out element ids for widgets that were not given one.
pub trait IdSource {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Deterministic ids: `prefix-0`, `prefix-1`, ... per instance.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = self.next;
        self.next += 1;
        format!("{prefix}-{id}")
    }
}

/// Process-wide counter shared by every default-constructed widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalIds;

impl IdSource for GlobalIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id("input"), "input-0");
        assert_eq!(ids.next_id("grid"), "grid-1");
    }

    #[test]
    fn global_ids_never_repeat() {
        let a = GlobalIds.next_id("input");
        let b = GlobalIds.next_id("input");
        assert_ne!(a, b);
    }
}
