//! Module: config
//!
//! Purpose: Limits and tunables for the command interpreter.
//!
//! Architecture:
//! - Compile-time limits size every static buffer (no heap anywhere)
//! - `InterpreterConfig` carries the few knobs that may differ per console
//!
//! Safety: plain data, `Copy`, shared freely between tasks.

/// Maximum length of a single token in bytes. Longer tokens are truncated.
pub const ARGUMENT_LENGTH: usize = 32;

/// Token slots available to one dispatch (command name included).
pub const MAX_TOKENS: usize = 16;

/// Number of command definitions a registry can hold, `help` included.
pub const REGISTRY_CAPACITY: usize = 32;

/// Maximum input line length accepted from the serial port.
pub const LINE_SIZE: usize = 128;

/// Size of the per-line output buffer, terminator included.
pub const OUTPUT_BUFFER_SIZE: usize = 512;

/// How an input line is matched against registered command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The command name only has to be a literal prefix of the raw line.
    ///
    /// First registered match wins, so `he` registered before `help`
    /// captures `help` too.
    #[default]
    Prefix,
    /// The first whitespace-delimited token must equal the command name.
    FirstToken,
}

/// Runtime interpreter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    pub match_mode: MatchMode,
    /// Tokens longer than this are cut to exactly this many bytes (at least 1).
    pub argument_length: usize,
    /// Upper bound on token slots one dispatch may acquire (clamped to `MAX_TOKENS`).
    pub scratch_slots: usize,
}

impl InterpreterConfig {
    pub const fn new() -> Self {
        Self {
            match_mode: MatchMode::Prefix,
            argument_length: ARGUMENT_LENGTH,
            scratch_slots: MAX_TOKENS,
        }
    }

    pub const fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Zero would hand handlers empty tokens, so it is raised to 1
    pub const fn with_argument_length(mut self, argument_length: usize) -> Self {
        self.argument_length = if argument_length == 0 { 1 } else { argument_length };
        self
    }

    pub const fn with_scratch_slots(mut self, scratch_slots: usize) -> Self {
        self.scratch_slots = scratch_slots;
        self
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InterpreterConfig::default();
        assert_eq!(config.match_mode, MatchMode::Prefix);
        assert_eq!(config.argument_length, ARGUMENT_LENGTH);
        assert_eq!(config.scratch_slots, MAX_TOKENS);
    }

    #[test]
    fn test_builder_overrides() {
        let config = InterpreterConfig::new()
            .with_match_mode(MatchMode::FirstToken)
            .with_argument_length(8)
            .with_scratch_slots(2);

        assert_eq!(config.match_mode, MatchMode::FirstToken);
        assert_eq!(config.argument_length, 8);
        assert_eq!(config.scratch_slots, 2);
    }

    #[test]
    fn test_zero_argument_length_clamped() {
        let config = InterpreterConfig::new().with_argument_length(0);
        assert_eq!(config.argument_length, 1);
    }
}
