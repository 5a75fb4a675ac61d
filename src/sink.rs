//! # Log Sink
//!
//! The engine reports every worker/observer evaluation and a per-iteration
//! population dump through an injected [`LogSink`]. The sink is a write-only
//! side channel: the engine never reads it back and behaves identically with
//! a no-op sink, which keeps the optimization core testable without
//! capturing console output.

/// A write-only channel the hive reports progress lines into.
pub trait LogSink {
    /// Records one human-readable line.
    fn record(&mut self, line: &str);
}

/// A sink that prints every line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn record(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// A sink that discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn record(&mut self, _line: &str) {}
}

/// A sink that retains every line in memory, for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded lines, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LogSink for MemorySink {
    fn record(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Adapts any `FnMut(&str)` closure into a sink.
///
/// ## Example
///
/// ```rust
/// use bees::sink::{FnSink, LogSink};
///
/// let mut seen = Vec::new();
/// let mut sink = FnSink(|line: &str| seen.push(line.to_string()));
/// sink.record("hello");
/// drop(sink);
/// assert_eq!(seen, vec!["hello".to_string()]);
/// ```
pub struct FnSink<F: FnMut(&str)>(pub F);

impl<F: FnMut(&str)> LogSink for FnSink<F> {
    fn record(&mut self, line: &str) {
        (self.0)(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_retains_lines_in_order() {
        let mut sink = MemorySink::new();
        sink.record("first");
        sink.record("second");

        assert_eq!(sink.lines(), &["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|line: &str| seen.push(line.to_string()));
            sink.record("hello");
        }

        assert_eq!(seen, vec!["hello".to_string()]);
    }

    #[test]
    fn test_null_sink_is_silent() {
        let mut sink = NullSink;
        sink.record("dropped");
    }
}
