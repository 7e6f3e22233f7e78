//! # Console Diagnostics
//!
//! Sets up the process's diagnostic stream, separate from any [`crate::SentinelLogger`]:
//! a `tracing` subscriber on stderr whose lines read
//!
//! ```text
//! [sentinel]2024/05/01 13:04:05 message key=value
//! ```
//!
//! It is meant for early startup, before any file logger exists, and it is also where
//! this crate's own warnings (directory creation, unopenable log files) end up.
//! Verbosity follows `RUST_LOG` and defaults to `info`. When no subscriber is
//! installed those warnings are written to stderr directly, stamped like a
//! [`LineFlags::STD`] log line.

use crate::sink::{LineFlags, render_line};
use chrono::Local;
use std::fmt;
use std::io::Write;
use std::sync::Once;
use tracing::subscriber::NoSubscriber;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Tag placed in front of every diagnostic line.
pub const CONSOLE_PREFIX: &str = "[sentinel]";

static INIT: Once = Once::new();

/// Event format producing `[sentinel]YYYY/MM/DD HH:MM:SS <fields>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentinelConsoleFormat;

impl<S, N> FormatEvent<S, N> for SentinelConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{}{} ",
            CONSOLE_PREFIX,
            Local::now().format("%Y/%m/%d %H:%M:%S")
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the console subscriber. Only the first call has any effect.
///
/// If another global subscriber is already installed it is left in place.
pub fn init_console_logging() {
    INIT.call_once(|| {
        println!("Init default log, output to console");

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = tracing_subscriber::registry()
            .with(env_filter)
            .with(
                layer()
                    .event_format(SentinelConsoleFormat)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init();

        if installed.is_err() {
            tracing::debug!("global subscriber already set; console format not installed");
        }
    });
}

/// True if a `tracing` subscriber (global or scoped to this thread) will see events.
fn has_subscriber() -> bool {
    tracing::dispatcher::get_default(|dispatch| !dispatch.is::<NoSubscriber>())
}

fn write_stderr(message: &dyn fmt::Display) {
    let line = render_line(LineFlags::STD, &Local::now(), &message.to_string());
    let _ = std::io::stderr().lock().write_all(line.as_bytes());
}

/// Reports a non-fatal setup problem on the diagnostic stream.
pub(crate) fn report_warn(message: &dyn fmt::Display) {
    if has_subscriber() {
        tracing::warn!("{message}");
    } else {
        write_stderr(message);
    }
}

/// Reports a fatal setup problem on the diagnostic stream.
pub(crate) fn report_error(message: &dyn fmt::Display) {
    if has_subscriber() {
        tracing::error!("{message}");
    } else {
        write_stderr(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::registry().with(
            layer()
                .event_format(SentinelConsoleFormat)
                .with_writer(move || writer.clone())
                .with_ansi(false),
        );
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_console_line_has_prefix_and_timestamp() {
        let out = capture(|| tracing::info!("booting"));
        assert!(out.starts_with(CONSOLE_PREFIX), "{out}");
        assert!(out.ends_with(" booting\n"), "{out}");

        // [sentinel]YYYY/MM/DD HH:MM:SS booting
        let stamp = &out[CONSOLE_PREFIX.len()..CONSOLE_PREFIX.len() + 19];
        assert_eq!(stamp.as_bytes()[4], b'/');
        assert_eq!(stamp.as_bytes()[7], b'/');
        assert_eq!(stamp.as_bytes()[10], b' ');
        assert_eq!(stamp.as_bytes()[13], b':');
    }

    #[test]
    fn test_console_line_includes_fields() {
        let out = capture(|| tracing::warn!(path = "/tmp/x", "cannot create"));
        assert!(out.contains("cannot create"), "{out}");
        assert!(out.contains("path=\"/tmp/x\""), "{out}");
    }

    #[test]
    fn test_directory_warning_reaches_diagnostic_stream() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let out = capture(|| {
            let _ = crate::sink::Sink::open_append(&blocker, "a.log");
        });
        assert!(out.contains("Failed to create the log directory"), "{out}");
    }

    #[test]
    fn test_scoped_subscriber_receives_reports() {
        let out = capture(|| {
            assert!(has_subscriber());
            report_warn(&"disk unavailable");
            report_error(&"cannot open");
        });
        assert!(out.contains("disk unavailable"), "{out}");
        assert!(out.contains("cannot open"), "{out}");
    }

    #[test]
    fn test_no_subscriber_detected_under_none_dispatch() {
        let none = tracing::Dispatch::none();
        tracing::dispatcher::with_default(&none, || assert!(!has_subscriber()));
    }

    #[test]
    fn test_init_is_idempotent() {
        init_console_logging();
        init_console_logging();
    }
}
