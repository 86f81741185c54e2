//! Stock command handler tests

use rust_command_interpreter::console::commands::{ECHO, SET, STATS, VERSION_CMD};
use rust_command_interpreter::console::{ConsoleError, Interpreter, OutputBuffer, Registry, DEFAULT_COMMANDS, VERSION};

fn interpreter() -> Interpreter<'static> {
    let mut registry: Registry<'static> = Registry::new();
    for definition in DEFAULT_COMMANDS {
        registry.register(definition).unwrap();
    }
    Interpreter::new(registry)
}

fn run(interpreter: &Interpreter<'_>, line: &str) -> (Result<(), ConsoleError>, String) {
    let mut raw = [0u8; 512];
    let mut out = OutputBuffer::new(&mut raw);
    let result = interpreter.process_input(line, &mut out);
    (result, out.as_str().to_string())
}

#[test]
fn test_default_commands_registered_after_help() {
    let interpreter = interpreter();
    let names: Vec<&str> = interpreter.registry().commands().iter().map(|c| c.name).collect();

    assert_eq!(names, ["help", "echo", "set", "stats", "version"]);
}

#[test]
fn test_echo() {
    let interpreter = interpreter();
    assert_eq!(run(&interpreter, "echo  hello   world"), (Ok(()), "hello world\r\n".to_string()));
    assert_eq!(run(&interpreter, "echo"), (Ok(()), "\r\n".to_string()));
}

#[test]
fn test_echo_argument_limit() {
    let interpreter = interpreter();
    let (_, output) = run(&interpreter, "echo 1 2 3 4 5 6 7 8 9 10");
    assert_eq!(output, "1 2 3 4 5 6 7 8\r\n");
    assert_eq!(ECHO.max_arguments, 8);
}

#[test]
fn test_set_acknowledges_pairs() {
    let interpreter = interpreter();
    let (result, output) = run(&interpreter, "set --wpm 25 --weight --mode b");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "wpm=25\r\nweight\r\nmode=b\r\n");
}

#[test]
fn test_set_without_keys() {
    let interpreter = interpreter();
    assert_eq!(run(&interpreter, "set wpm 25").0, Err(ConsoleError::MissingArg));
    assert_eq!(run(&interpreter, "set").0, Err(ConsoleError::MissingArg));
    assert!(SET.help.ends_with("\r\n"));
}

#[test]
fn test_stats_reports_counters() {
    let interpreter = interpreter();
    let _ = run(&interpreter, "bogus");
    let _ = run(&interpreter, "echo hi");

    let (result, output) = run(&interpreter, "stats");
    assert_eq!(result, Ok(()));
    assert!(output.contains("dispatched: 2\r\n"), "{}", output);
    assert!(output.contains("succeeded: 1\r\n"), "{}", output);
    assert!(output.contains("not found: 1\r\n"), "{}", output);
    assert_eq!(STATS.max_arguments, 0);
}

#[test]
fn test_version() {
    let interpreter = interpreter();
    let (result, output) = run(&interpreter, "version");

    assert_eq!(result, Ok(()));
    assert_eq!(output, format!("{}\r\n", VERSION));
    assert!(VERSION_CMD.help.starts_with("version"));
}

#[test]
fn test_help_lists_all_commands() {
    let interpreter = interpreter();
    let (result, output) = run(&interpreter, "help");

    assert_eq!(result, Ok(()));
    for definition in interpreter.registry().commands() {
        assert!(output.contains(definition.help), "missing help for '{}'", definition.name);
    }
}

#[test]
fn test_execute_unknown_command() {
    let interpreter = interpreter();
    assert_eq!(run(&interpreter, "foobar").0, Err(ConsoleError::UnknownCommand));
}
