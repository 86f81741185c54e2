//! Per-dispatch token storage
//!
//! A fixed stack array stands in for a heap: acquiring more slots than the
//! configured limit fails immediately, nothing blocks, and the storage goes
//! away when the dispatch returns.

use super::ConsoleError;
use crate::config::MAX_TOKENS;

/// Bounded token slots for one dispatch
pub struct TokenScratch<'t> {
    slots: [&'t str; MAX_TOKENS],
    limit: usize,
}

impl<'t> TokenScratch<'t> {
    /// Scratch allowing at most `limit` slots (clamped to `MAX_TOKENS`)
    pub fn new(limit: usize) -> Self {
        Self {
            slots: [""; MAX_TOKENS],
            limit: limit.min(MAX_TOKENS),
        }
    }

    /// Largest request `acquire` will satisfy
    pub fn capacity(&self) -> usize {
        self.limit
    }

    /// Hand out `count` empty slots
    pub fn acquire(&mut self, count: usize) -> Result<&mut [&'t str], ConsoleError> {
        if count > self.limit {
            return Err(ConsoleError::AllocationFailure);
        }

        let slots = &mut self.slots[..count];
        slots.fill("");
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_within_limit() {
        let mut scratch = TokenScratch::new(4);
        let slots = scratch.acquire(4).unwrap();
        assert_eq!(slots.len(), 4);
        assert!(slots.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_acquire_over_limit_fails() {
        let mut scratch = TokenScratch::new(2);
        assert_eq!(scratch.acquire(3).err(), Some(ConsoleError::AllocationFailure));
    }

    #[test]
    fn test_limit_clamped_to_max_tokens() {
        let mut scratch = TokenScratch::new(MAX_TOKENS * 2);
        assert_eq!(scratch.capacity(), MAX_TOKENS);
        assert!(scratch.acquire(MAX_TOKENS + 1).is_err());
    }

    #[test]
    fn test_reacquire_clears_slots() {
        let mut scratch = TokenScratch::new(2);
        scratch.acquire(2).unwrap()[0] = "stale";
        assert_eq!(scratch.acquire(2).unwrap()[0], "");
    }
}
