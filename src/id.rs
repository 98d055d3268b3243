//! Identity generation for new entities.

use crate::config::IdStrategy;

/// Mints ids for one collection. Owned by the store and only advanced under its write lock,
/// so two creates can never observe the same counter value.
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    prefix: &'static str,
    next: u64,
}

impl IdGenerator {
    /// `existing` is the collection size at construction; sequential ids continue after it.
    /// Seeded ids are bare numbers ("1", "2") and generated ones carry the prefix, so the two
    /// never collide. A seed that does use the prefix is still skipped by `next_id`.
    pub fn new(strategy: IdStrategy, prefix: &'static str, existing: usize) -> Self {
        IdGenerator {
            strategy,
            prefix,
            next: existing as u64 + 1,
        }
    }

    /// Next id for which `taken` is false. The counter only moves forward, so ids freed by a
    /// delete are never handed out again.
    pub fn next_id<F>(&mut self, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Sequential => {
                    let n = self.next;
                    self.next += 1;
                    format!("{}{}", self.prefix, n)
                }
                IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
            };
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}
