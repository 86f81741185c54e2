//! RustCommandInterpreter - console entry point
//!
//! 1. Bring up logging (EspLogger on target, stderr on the host)
//! 2. Register the stock commands, freeze the registry
//! 3. Feed console bytes to the interpreter forever
//!
//! On target stdin is the IDF console UART, on the host it is the terminal.

use std::io::{self, ErrorKind, Read, Write as _};
use std::time::Duration;

use rust_command_interpreter::console::{Interpreter, Registry, SerialConsole, DEFAULT_COMMANDS};

/// Back-off when the console has nothing to read
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// `core::fmt::Write` over stdout for the console state machine
struct StdoutSink(io::Stdout);

impl core::fmt::Write for StdoutSink {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)
    }
}

#[cfg(not(target_os = "espidf"))]
mod host_log {
    use std::io::Write as _;

    use log::{Log, Metadata, Record};
    use rust_command_interpreter::logging;

    pub struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }

            let mut line = String::new();
            if logging::format_record(record, &mut line).is_ok() {
                let _ = std::io::stderr().write_all(line.as_bytes());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: ConsoleLogger = ConsoleLogger;

    /// Install the stderr logger, level from `LOG` (off when unset)
    pub fn init() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(logging::level_filter(std::env::var("LOG").ok().as_deref()));
        }
    }
}

#[cfg(target_os = "espidf")]
fn init_platform() {
    // Initialize ESP-IDF
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
}

#[cfg(not(target_os = "espidf"))]
fn init_platform() {
    host_log::init();
}

fn main() {
    init_platform();

    let mut registry: Registry = Registry::new();
    for definition in DEFAULT_COMMANDS {
        if let Err(err) = registry.register(definition) {
            log::error!("cannot register '{}': {}", definition.name, err);
        }
    }
    let interpreter = Interpreter::new(registry);
    log::info!("{} commands registered", interpreter.registry().len());

    // A host terminal echoes on its own, a bare UART does not
    let mut console = SerialConsole::new(&interpreter).with_echo(cfg!(target_os = "espidf"));
    let mut out = StdoutSink(io::stdout());
    console.print_banner(&mut out);
    let _ = out.0.flush();

    let mut stdin = io::stdin().lock();
    let mut byte = [0u8; 1];
    loop {
        match stdin.read(&mut byte) {
            Ok(0) if cfg!(target_os = "espidf") => std::thread::sleep(POLL_INTERVAL),
            Ok(0) => break,
            Ok(_) => {
                console.process_byte(byte[0], &mut out);
                let _ = out.0.flush();
            }
            Err(err) if matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) => {
                std::thread::sleep(POLL_INTERVAL)
            }
            Err(err) => {
                log::error!("console read failed: {}", err);
                break;
            }
        }
    }
}
