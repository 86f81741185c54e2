//! Stock command handlers
//!
//! Registered after `help` by the firmware. Each handler writes CRLF-terminated
//! lines into the output buffer and never touches the UART directly.

use core::fmt::Write;

use super::console::VERSION;
use super::pairs::CommandArgumentPair;
use super::registry::{CommandContext, CommandDefinition};
use super::{ConsoleError, OutputBuffer};

/// Pairs `set` accepts in one line
pub const SET_MAX_PAIRS: usize = 4;

pub static ECHO: CommandDefinition = CommandDefinition {
    name: "echo",
    max_arguments: 8,
    handler: &cmd_echo,
    help: "echo <text...>: prints its arguments\r\n",
};

pub static SET: CommandDefinition = CommandDefinition {
    name: "set",
    max_arguments: 8,
    handler: &cmd_set,
    help: "set --<key> [value]...: parses and acknowledges options\r\n",
};

pub static STATS: CommandDefinition = CommandDefinition {
    name: "stats",
    max_arguments: 0,
    handler: &cmd_stats,
    help: "stats: shows dispatch counters\r\n",
};

pub static VERSION_CMD: CommandDefinition = CommandDefinition {
    name: "version",
    max_arguments: 0,
    handler: &cmd_version,
    help: "version: shows firmware version\r\n",
};

/// Stock commands in registration order (`help` is built in and not listed)
pub static DEFAULT_COMMANDS: &[&CommandDefinition] = &[&ECHO, &SET, &STATS, &VERSION_CMD];

// --- Command Implementations ---

fn cmd_echo(ctx: &CommandContext<'_>, out: &mut OutputBuffer<'_>) -> Result<(), ConsoleError> {
    for (i, arg) in ctx.args().iter().enumerate() {
        if i > 0 {
            out.append(" ")?;
        }
        out.append(arg)?;
    }
    out.append("\r\n")
}

fn cmd_set(ctx: &CommandContext<'_>, out: &mut OutputBuffer<'_>) -> Result<(), ConsoleError> {
    let mut pairs = [CommandArgumentPair::EMPTY; SET_MAX_PAIRS];
    let found = ctx.pairs(&mut pairs);
    if found == 0 {
        return Err(ConsoleError::MissingArg);
    }

    for pair in &pairs[..found] {
        let key = pair.key.unwrap_or("");
        match pair.value {
            Some(value) => write!(out, "{}={}\r\n", key, value)?,
            None => write!(out, "{}\r\n", key)?,
        }
    }
    Ok(())
}

fn cmd_stats(ctx: &CommandContext<'_>, out: &mut OutputBuffer<'_>) -> Result<(), ConsoleError> {
    let snap = ctx.stats().snapshot();

    write!(out, "dispatched: {}\r\n", snap.dispatched)?;
    write!(out, "succeeded: {}\r\n", snap.succeeded)?;
    write!(out, "failed: {}\r\n", snap.failed)?;
    write!(out, "not found: {}\r\n", snap.not_found)?;
    write!(out, "alloc failures: {}\r\n", snap.allocation_failures)?;
    Ok(())
}

fn cmd_version(_ctx: &CommandContext<'_>, out: &mut OutputBuffer<'_>) -> Result<(), ConsoleError> {
    write!(out, "{}\r\n", VERSION)?;
    Ok(())
}
