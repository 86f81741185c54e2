//! Built-in `help` command

use super::registry::{CommandContext, CommandDefinition};
use super::{ConsoleError, OutputBuffer};

/// Always registered first
pub static HELP: CommandDefinition = CommandDefinition {
    name: "help",
    max_arguments: 0,
    handler: &cmd_help,
    help: "help: lists all available commands\r\n",
};

/// Concatenate every help text in registry order
///
/// Stops at the first text that does not fit; what was already copied stays.
fn cmd_help(ctx: &CommandContext<'_>, out: &mut OutputBuffer<'_>) -> Result<(), ConsoleError> {
    for definition in ctx.commands() {
        out.append(definition.help)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::DispatchStats;

    #[test]
    fn test_help_lists_itself() {
        let stats = DispatchStats::new();
        let commands = [&HELP];
        let ctx = CommandContext::new(&["help"], &commands, &stats);

        let mut raw = [0u8; 64];
        let mut out = OutputBuffer::new(&mut raw);
        assert_eq!(HELP.handler.invoke(&ctx, &mut out), Ok(()));
        assert_eq!(out.as_str(), HELP.help);
    }

    #[test]
    fn test_help_needs_room_for_terminator() {
        let stats = DispatchStats::new();
        let commands = [&HELP];
        let ctx = CommandContext::new(&["help"], &commands, &stats);

        let mut raw = [0u8; 36];
        assert_eq!(HELP.help.len(), 36);
        let mut out = OutputBuffer::new(&mut raw);
        assert_eq!(HELP.handler.invoke(&ctx, &mut out), Err(ConsoleError::BufferOverflow));
        assert!(out.is_empty());
    }
}
