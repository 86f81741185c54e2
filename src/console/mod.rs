//! Serial command interpreter
//!
//! One line in, one handler run, one result code out.
//! Zero heap allocation - all buffers are fixed-size or caller-owned.

pub mod commands;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod help;
pub mod line_buffer;
pub mod output;
pub mod pairs;
pub mod registry;
pub mod scratch;
pub mod tokenizer;

pub use commands::DEFAULT_COMMANDS;
pub use console::{SerialConsole, VERSION};
pub use dispatcher::{DispatchSnapshot, DispatchStats, Interpreter};
pub use error::ConsoleError;
pub use help::HELP;
pub use line_buffer::LineBuffer;
pub use output::OutputBuffer;
pub use pairs::{arguments_to_pairs, find_pair, CommandArgumentPair};
pub use registry::{CommandContext, CommandDefinition, CommandHandler, Registry};
pub use scratch::TokenScratch;
pub use tokenizer::{is_delimiter, tokenize};
