//! # RustCommandInterpreter
//!
//! Serial command interpreter for resource-constrained controllers.
//!
//! ## Architecture
//!
//! A line received on the console is matched against an ordered registry of
//! command definitions and run by exactly one handler:
//! - Registry is built once during init, then frozen inside an [`Interpreter`]
//! - Tokens borrow from the input line, scratch slots live on the stack
//! - Handlers write into a caller-owned, bounded [`OutputBuffer`]
//! - Every failure is an explicit [`ConsoleError`], never a panic

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod logging;

pub use config::{InterpreterConfig, MatchMode};
pub use console::{
    arguments_to_pairs, CommandArgumentPair, CommandContext, CommandDefinition, CommandHandler,
    ConsoleError, Interpreter, OutputBuffer, Registry, SerialConsole,
};
