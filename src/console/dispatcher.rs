//! Command dispatcher
//!
//! # Flow
//!
//! ```text
//! input line ──▶ match (registry order) ──▶ acquire scratch ──▶ tokenize
//!                     │                          │                 │
//!                     ▼                          ▼                 ▼
//!               UnknownCommand          AllocationFailure    handler(ctx, out)
//! ```
//!
//! Exactly one definition is tried. The handler's result is returned unchanged.

use core::sync::atomic::{AtomicU32, Ordering};

use log::{debug, warn};

use super::registry::{CommandContext, CommandDefinition, Registry};
use super::scratch::TokenScratch;
use super::tokenizer::{first_token, tokenize};
use super::{ConsoleError, OutputBuffer};
use crate::config::{InterpreterConfig, MatchMode, REGISTRY_CAPACITY};

/// Dispatch counters since boot.
///
/// Lock-free, updated from whichever task dispatches. Never reset.
pub struct DispatchStats {
    /// Lines that matched a command.
    dispatched: AtomicU32,
    /// Handlers that returned `Ok`.
    succeeded: AtomicU32,
    /// Lines that matched nothing.
    not_found: AtomicU32,
    /// Handlers that returned an error.
    failed: AtomicU32,
    /// Dispatches aborted before the handler ran.
    allocation_failures: AtomicU32,
}

impl DispatchStats {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU32::new(0),
            succeeded: AtomicU32::new(0),
            not_found: AtomicU32::new(0),
            failed: AtomicU32::new(0),
            allocation_failures: AtomicU32::new(0),
        }
    }

    #[inline]
    fn bump(counter: &AtomicU32) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of the counters.
    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            dispatched: self.dispatched.load(Ordering::Relaxed),
            succeeded: self.succeeded.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            allocation_failures: self.allocation_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for DispatchStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of dispatch counters at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DispatchSnapshot {
    pub dispatched: u32,
    pub succeeded: u32,
    pub not_found: u32,
    pub failed: u32,
    pub allocation_failures: u32,
}

/// Serve-phase interpreter: a frozen registry plus settings
pub struct Interpreter<'a, const N: usize = REGISTRY_CAPACITY> {
    registry: Registry<'a, N>,
    config: InterpreterConfig,
    stats: DispatchStats,
}

impl<'a, const N: usize> Interpreter<'a, N> {
    pub fn new(registry: Registry<'a, N>) -> Self {
        Self::with_config(registry, InterpreterConfig::default())
    }

    pub fn with_config(registry: Registry<'a, N>, config: InterpreterConfig) -> Self {
        Self {
            registry,
            config,
            stats: DispatchStats::new(),
        }
    }

    pub fn registry(&self) -> &Registry<'a, N> {
        &self.registry
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    /// First registered definition matching `input`
    pub fn find_match(&self, input: &str) -> Option<&'a CommandDefinition> {
        let mut commands = self.registry.commands().iter().copied();

        match self.config.match_mode {
            MatchMode::Prefix => commands.find(|c| input.starts_with(c.name)),
            MatchMode::FirstToken => {
                let name = first_token(input)?;
                commands.find(|c| c.name == name)
            }
        }
    }

    /// Process one input line
    ///
    /// `out` is cleared first and stays empty unless the handler writes to it.
    pub fn process_input(&self, input: &str, out: &mut OutputBuffer<'_>) -> Result<(), ConsoleError> {
        out.clear();

        let Some(definition) = self.find_match(input) else {
            DispatchStats::bump(&self.stats.not_found);
            debug!("no command matches {:?}", input);
            return Err(ConsoleError::UnknownCommand);
        };

        DispatchStats::bump(&self.stats.dispatched);

        // Slot 0 holds the command name itself
        let wanted = definition.max_arguments.saturating_add(1);
        let mut scratch = TokenScratch::new(self.config.scratch_slots);
        let available = scratch.capacity();
        let slots = match scratch.acquire(wanted) {
            Ok(slots) => slots,
            Err(err) => {
                DispatchStats::bump(&self.stats.allocation_failures);
                warn!("'{}' needs {} token slots, {} available", definition.name, wanted, available);
                return Err(err);
            }
        };

        let count = tokenize(input, slots, self.config.argument_length.max(1));
        let ctx = CommandContext::new(&slots[..count], self.registry.commands(), &self.stats);

        let result = definition.handler.invoke(&ctx, out);
        match result {
            Ok(()) => DispatchStats::bump(&self.stats.succeeded),
            Err(err) => {
                DispatchStats::bump(&self.stats.failed);
                debug!("'{}' failed: {}", definition.name, err);
            }
        }
        result
    }
}
