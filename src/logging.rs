//! Log formatting shared by the firmware and host loggers.
//!
//! The library only emits through the `log` facade:
//!
//! ```text
//! Interpreter ──▶ log::warn!/debug! ──▶ EspLogger      (target)
//!                                   └─▶ ConsoleLogger  (host, stderr)
//! ```
//!
//! Nothing is logged per byte, only per dispatched line.

use core::fmt::Write;

use log::{LevelFilter, Record};

/// Parse a level name as found in the `LOG` environment variable.
///
/// Unknown or missing names turn logging off.
pub fn level_filter(spec: Option<&str>) -> LevelFilter {
    match spec.map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("error") => LevelFilter::Error,
        Some(s) if s.eq_ignore_ascii_case("warn") => LevelFilter::Warn,
        Some(s) if s.eq_ignore_ascii_case("info") => LevelFilter::Info,
        Some(s) if s.eq_ignore_ascii_case("debug") => LevelFilter::Debug,
        Some(s) if s.eq_ignore_ascii_case("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Format a record as `[LEVEL target] message\r\n`.
pub fn format_record(record: &Record<'_>, out: &mut dyn Write) -> core::fmt::Result {
    write!(out, "[{:<5} {}] {}\r\n", record.level(), record.target(), record.args())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_filter(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(level_filter(Some("chatty")), LevelFilter::Off);
        assert_eq!(level_filter(None), LevelFilter::Off);
    }

    #[test]
    fn test_format_record() {
        let mut line = String::new();
        format_record(
            &Record::builder()
                .args(format_args!("no command matches {:?}", "foo"))
                .level(Level::Debug)
                .target("console")
                .build(),
            &mut line,
        )
        .unwrap();

        assert_eq!(line, "[DEBUG console] no command matches \"foo\"\r\n");
    }
}
