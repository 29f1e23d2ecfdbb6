use std::io;
use std::sync;

use std::io::Write;

/// Format used to stamp every log line.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Thread-safe logger that stamps every message with the local time.
///
/// Concurrent callers are serialized on the sink, so lines from different
/// threads never interleave. The timestamp is taken once the lock is held.
pub(crate) struct Logger {
    sink: sync::Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Logger writing to standard output.
    pub(crate) fn new() -> Logger {
        Logger::with_sink(Box::new(io::stdout()))
    }

    pub(crate) fn with_sink(sink: Box<dyn Write + Send>) -> Logger {
        Logger {
            sink: sync::Mutex::new(sink),
        }
    }

    /// Writes `[YYYY-MM-DD HH:MM:SS] <message>` to the sink.
    pub(crate) fn log(&self, message: &str) {
        // a panic elsewhere cannot leave the sink half-written; keep logging.
        let mut sink = self
            .sink
            .lock()
            .unwrap_or_else(sync::PoisonError::into_inner);
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        if let Err(e) = writeln!(sink, "[{}] {}", timestamp, message).and_then(|_| sink.flush()) {
            eprintln!("Couldn't write log line: {}", e);
        }
    }
}
