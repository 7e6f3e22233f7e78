//! # Line Sinks
//!
//! A [`Sink`] is the destination a logger writes to: standard output, standard error,
//! an append-only file, or any caller-supplied writer. Every sink holds a single
//! lock and each log line goes out as one `write_all`, so lines from concurrent
//! threads never interleave. Ordering of whole lines across threads is whatever
//! order the lock is acquired in.
//!
//! [`LineFlags`] select the metadata the sink puts in front of every line, e.g.
//! `2024/05/01 13:04:05 ` for [`LineFlags::STD`].
//!
//! Write failures are dropped here. Logging never reports an error to the caller
//! once a sink exists.

use crate::console::report_warn;
use crate::error::{LogError, Result};
use crate::log_dir::ensure_dir;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{self, Write as _};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::ops::{BitOr, BitOrAssign};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Metadata prefixed to each line by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineFlags(u8);

impl LineFlags {
    /// No prefix at all.
    pub const NONE: LineFlags = LineFlags(0);
    /// `YYYY/MM/DD`
    pub const DATE: LineFlags = LineFlags(1);
    /// `HH:MM:SS`
    pub const TIME: LineFlags = LineFlags(1 << 1);
    /// `HH:MM:SS.ffffff`; implies `TIME`.
    pub const MICROSECONDS: LineFlags = LineFlags(1 << 2);
    /// Stamp in UTC rather than the local timezone.
    pub const UTC: LineFlags = LineFlags(1 << 3);
    /// Date and time, the usual choice for log files.
    pub const STD: LineFlags = LineFlags(Self::DATE.0 | Self::TIME.0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn from_bits(bits: u8) -> LineFlags {
        LineFlags(bits & 0b1111)
    }

    pub const fn contains(self, other: LineFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn has_time(self) -> bool {
        self.contains(Self::TIME) || self.contains(Self::MICROSECONDS)
    }
}

impl BitOr for LineFlags {
    type Output = LineFlags;

    fn bitor(self, rhs: LineFlags) -> LineFlags {
        LineFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for LineFlags {
    fn bitor_assign(&mut self, rhs: LineFlags) {
        self.0 |= rhs.0;
    }
}

/// Renders one complete line: timestamp prefix per `flags`, the body, and a single
/// trailing newline.
pub fn render_line<Tz>(flags: LineFlags, now: &DateTime<Tz>, body: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut line = String::with_capacity(body.len() + 28);
    if flags.contains(LineFlags::DATE) {
        let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
    }
    if flags.has_time() {
        let _ = write!(line, "{}", now.format("%H:%M:%S"));
        if flags.contains(LineFlags::MICROSECONDS) {
            let _ = write!(line, "{}", now.format("%.6f"));
        }
        line.push(' ');
    }
    line.push_str(body);
    if !body.ends_with('\n') {
        line.push('\n');
    }
    line
}

fn render_now(flags: LineFlags, body: &str) -> String {
    if flags.contains(LineFlags::UTC) {
        render_line(flags, &Utc::now(), body)
    } else {
        render_line(flags, &Local::now(), body)
    }
}

enum Target {
    Stdout,
    Stderr,
    File { path: PathBuf, file: Mutex<File> },
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// A synchronized line writer.
pub struct Sink {
    target: Target,
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Target::Stdout => f.write_str("Sink::Stdout"),
            Target::Stderr => f.write_str("Sink::Stderr"),
            Target::File { path, .. } => f.debug_tuple("Sink::File").field(path).finish(),
            Target::Writer(_) => f.write_str("Sink::Writer"),
        }
    }
}

impl Sink {
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }

    /// Wraps an arbitrary writer, e.g. a shared buffer in tests.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            target: Target::Writer(Mutex::new(Box::new(writer))),
        }
    }

    /// Opens `dir/file_name` for appending, creating the directory first.
    ///
    /// A directory that cannot be created is only reported on the diagnostic stream;
    /// the open that follows then fails with [`LogError::OpenFile`]. Existing
    /// content is never truncated.
    pub fn open_append(dir: &Path, file_name: &str) -> Result<Self> {
        if let Err(e) = ensure_dir(dir) {
            report_warn(&format_args!("Failed to create the log directory: {e}"));
        }

        let path = dir.join(file_name);
        let file = open_options()
            .open(&path)
            .map_err(|source| LogError::OpenFile {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "opened log file");
        Ok(Self {
            target: Target::File {
                path,
                file: Mutex::new(file),
            },
        })
    }

    /// Path of the backing file, if this is a file sink.
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            Target::File { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Writes `body` as a single prefixed line. Errors are ignored.
    pub fn write_line(&self, flags: LineFlags, body: &str) {
        let line = render_now(flags, body);
        let _ = self.write_raw(line.as_bytes());
    }

    fn write_raw(&self, bytes: &[u8]) -> io::Result<()> {
        match &self.target {
            Target::Stdout => io::stdout().lock().write_all(bytes),
            Target::Stderr => io::stderr().lock().write_all(bytes),
            Target::File { file, .. } => {
                let mut file = file.lock().unwrap_or_else(|e| e.into_inner());
                file.write_all(bytes)
            }
            Target::Writer(writer) => {
                let mut writer = writer.lock().unwrap_or_else(|e| e.into_inner());
                writer.write_all(bytes)?;
                writer.flush()
            }
        }
    }
}

fn open_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true).create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o777);
    }
    options
}
