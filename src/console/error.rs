//! Console error types

/// Console error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// E01: No registered command matches the input
    UnknownCommand,
    /// E02: Output did not fit in the caller's buffer
    BufferOverflow,
    /// E03: Token scratch storage could not be acquired
    AllocationFailure,
    /// E04: Invalid value format
    InvalidValue,
    /// E05: Missing required argument
    MissingArg,
    /// E06: Value out of allowed range
    OutOfRange,
    /// E07: Registry has no free slot
    RegistryFull,
    /// E08: Command definition rejected at registration
    InvalidDefinition,
    /// Handler-specific code, passed through unchanged
    Handler(u8),
}

impl ConsoleError {
    /// Get numeric error code
    pub fn code(&self) -> u8 {
        match self {
            Self::UnknownCommand => 1,
            Self::BufferOverflow => 2,
            Self::AllocationFailure => 3,
            Self::InvalidValue => 4,
            Self::MissingArg => 5,
            Self::OutOfRange => 6,
            Self::RegistryFull => 7,
            Self::InvalidDefinition => 8,
            Self::Handler(code) => *code,
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "command not found",
            Self::BufferOverflow => "output buffer overflow",
            Self::AllocationFailure => "could not allocate argument storage",
            Self::InvalidValue => "invalid value",
            Self::MissingArg => "missing argument",
            Self::OutOfRange => "out of range",
            Self::RegistryFull => "command registry full",
            Self::InvalidDefinition => "invalid command definition",
            Self::Handler(_) => "command failed",
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "E{:02}: {}", self.code(), self.message())
    }
}

/// Formatting into an [`OutputBuffer`](super::OutputBuffer) only fails when it is full.
impl From<core::fmt::Error> for ConsoleError {
    fn from(_: core::fmt::Error) -> Self {
        Self::BufferOverflow
    }
}
