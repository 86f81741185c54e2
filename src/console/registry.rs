//! Command registry
//!
//! # Lifecycle
//!
//! ```text
//! init phase                        serve phase
//! ──────────                        ───────────
//! Registry::new()  (help only)
//! registry.register(&CMD)  ──────▶  Interpreter::new(registry)
//! registry.register(&CMD2)          &self only, never mutated again
//! ```
//!
//! Registration needs `&mut Registry`, dispatch only ever sees `&Registry`
//! inside an `Interpreter`, so the two phases cannot overlap.

use log::warn;

use super::dispatcher::DispatchStats;
use super::help::HELP;
use super::pairs::{arguments_to_pairs, CommandArgumentPair};
use super::{ConsoleError, OutputBuffer};
use crate::config::{MAX_TOKENS, REGISTRY_CAPACITY};

/// Command capability: run with the tokenized line, write into `out`
pub trait CommandHandler: Sync {
    fn invoke(&self, ctx: &CommandContext<'_>, out: &mut OutputBuffer<'_>) -> Result<(), ConsoleError>;
}

impl<F> CommandHandler for F
where
    F: Fn(&CommandContext<'_>, &mut OutputBuffer<'_>) -> Result<(), ConsoleError> + Sync,
{
    fn invoke(&self, ctx: &CommandContext<'_>, out: &mut OutputBuffer<'_>) -> Result<(), ConsoleError> {
        self(ctx, out)
    }
}

/// Command descriptor
pub struct CommandDefinition {
    /// Matched against the start of the input line
    pub name: &'static str,
    /// Arguments after the name; extra tokens are not tokenized
    pub max_arguments: usize,
    pub handler: &'static dyn CommandHandler,
    /// Shown by `help`, carries its own line terminator
    pub help: &'static str,
}

impl core::fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("max_arguments", &self.max_arguments)
            .finish_non_exhaustive()
    }
}

/// What a handler sees of one dispatch
pub struct CommandContext<'c> {
    tokens: &'c [&'c str],
    commands: &'c [&'c CommandDefinition],
    stats: &'c DispatchStats,
}

impl<'c> CommandContext<'c> {
    pub fn new(
        tokens: &'c [&'c str],
        commands: &'c [&'c CommandDefinition],
        stats: &'c DispatchStats,
    ) -> Self {
        Self { tokens, commands, stats }
    }

    /// All tokens, slot 0 being the command name
    pub fn tokens(&self) -> &'c [&'c str] {
        self.tokens
    }

    /// The command name as typed (first token)
    pub fn name(&self) -> &'c str {
        self.tokens.first().copied().unwrap_or("")
    }

    /// Tokens after the command name
    pub fn args(&self) -> &'c [&'c str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Get argument by index (0-based, after the command name)
    pub fn arg(&self, idx: usize) -> Option<&'c str> {
        self.args().get(idx).copied()
    }

    /// Registered commands in matching order
    pub fn commands(&self) -> &'c [&'c CommandDefinition] {
        self.commands
    }

    pub fn stats(&self) -> &'c DispatchStats {
        self.stats
    }

    /// Extract `--key value` pairs from the arguments
    pub fn pairs(&self, pairs: &mut [CommandArgumentPair<'c>]) -> usize {
        arguments_to_pairs(self.args(), pairs)
    }
}

/// Ordered, add-only set of command definitions
///
/// Insertion order is matching priority. `help` always occupies slot 0.
pub struct Registry<'a, const N: usize = REGISTRY_CAPACITY> {
    entries: [&'a CommandDefinition; N],
    len: usize,
}

impl<'a, const N: usize> Registry<'a, N> {
    const HAS_ROOM_FOR_HELP: () = assert!(N > 0, "Registry capacity must hold at least `help`");

    /// Create a registry holding only the built-in `help`
    pub fn new() -> Self {
        let () = Self::HAS_ROOM_FOR_HELP;

        Self {
            entries: [&HELP; N],
            len: 1,
        }
    }

    /// Append a definition (init phase only)
    ///
    /// Duplicate names are kept; the earlier one always wins lookups.
    pub fn register(&mut self, definition: &'a CommandDefinition) -> Result<(), ConsoleError> {
        if definition.name.is_empty() {
            warn!("rejected command with empty name");
            return Err(ConsoleError::InvalidDefinition);
        }

        if self.len == N {
            warn!("registry full, '{}' not registered", definition.name);
            return Err(ConsoleError::RegistryFull);
        }

        if definition.max_arguments >= MAX_TOKENS {
            warn!(
                "'{}' takes {} arguments, only {} token slots exist",
                definition.name,
                definition.max_arguments,
                MAX_TOKENS - 1
            );
        }

        self.entries[self.len] = definition;
        self.len += 1;
        Ok(())
    }

    /// Registered definitions in matching order
    pub fn commands(&self) -> &[&'a CommandDefinition] {
        &self.entries[..self.len]
    }

    /// Exact-name lookup, first registered wins
    pub fn find(&self, name: &str) -> Option<&'a CommandDefinition> {
        self.commands().iter().copied().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true in practice, `help` is always present
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for Registry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
