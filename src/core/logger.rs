//! Main logger implementation

use super::{
    format::write_record,
    render::Render,
    severity::Severity,
    sink::{sink_handle, Sink, SinkHandle},
};

/// The leveled, multi-sink logger core.
///
/// A logger is an explicit, caller-constructed value: construct it, configure
/// it once with sinks and a threshold, then pass it (or a reference) to the
/// code that logs. There is no global instance.
///
/// Until [`configure`](Logger::configure) runs, the threshold is
/// [`Severity::Off`] and every log call is a no-op. Configuration replaces
/// the previous sinks and threshold wholesale; there is no way back to the
/// unconfigured state.
///
/// Sinks are held as an ordered collection of optional handles. An absent
/// slot is tolerated and skipped during fan-out; the single-sink setup is
/// simply a collection of size one.
///
/// # Example
///
/// ```
/// use taglog::prelude::*;
///
/// let output = MemorySink::new();
/// let view = output.clone();
///
/// let mut logger = Logger::new();
/// logger.configure_sink(sink_handle(output), Severity::Info);
///
/// logger.warn("MAIN", "battery low");
/// logger.debug("MAIN", "suppressed");
///
/// assert_eq!(view.contents(), "WARN\t[MAIN]\tbattery low\n");
/// ```
pub struct Logger {
    threshold: Severity,
    sinks: Vec<Option<SinkHandle>>,
}

impl Logger {
    /// Create an unconfigured logger: threshold `Off`, no sinks attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Severity::Off,
            sinks: Vec::new(),
        }
    }

    /// Attach an ordered group of sink slots and set the threshold.
    ///
    /// Replaces any prior configuration; intended to be called once. `None`
    /// slots are kept and skipped silently at dispatch.
    pub fn configure(&mut self, sinks: Vec<Option<SinkHandle>>, threshold: Severity) {
        self.sinks = sinks;
        self.threshold = threshold;
    }

    /// Single-sink convenience for [`configure`](Logger::configure).
    pub fn configure_sink(&mut self, sink: SinkHandle, threshold: Severity) {
        self.configure(vec![Some(sink)], threshold);
    }

    /// The last configured threshold, `Off` if never configured.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Emit one record.
    ///
    /// Runs the level filter, and if it passes, renders the record into every
    /// attached sink in attachment order, flushing each sink before moving to
    /// the next. A sentinel `severity`, an unconfigured logger, an absent
    /// slot, and a failing sink all degrade to silent no-ops; this call never
    /// reports an error and never panics.
    ///
    /// `tag` and `message` are rendered once per sink, so side-effecting
    /// renderers run once for each destination.
    #[inline]
    pub fn log<T: Render, M: Render>(&self, severity: Severity, tag: T, message: M) {
        if !severity.should_emit(self.threshold) {
            return;
        }
        self.dispatch(severity, &tag, &message);
    }

    /// Fan one passed record out to every attached sink.
    ///
    /// No atomicity across sinks: a crash mid-iteration leaves earlier sinks
    /// updated and later ones not.
    fn dispatch(&self, severity: Severity, tag: &dyn Render, message: &dyn Render) {
        for slot in &self.sinks {
            let Some(handle) = slot else { continue };
            let mut sink = handle.lock();
            // A write failure has no return channel here and is never retried.
            let _ = write_record(&mut *sink, severity, tag, message);
            let _ = sink.flush();
        }
    }

    #[inline]
    pub fn fatal<T: Render, M: Render>(&self, tag: T, message: M) {
        self.log(Severity::Fatal, tag, message);
    }

    #[inline]
    pub fn error<T: Render, M: Render>(&self, tag: T, message: M) {
        self.log(Severity::Error, tag, message);
    }

    #[inline]
    pub fn warn<T: Render, M: Render>(&self, tag: T, message: M) {
        self.log(Severity::Warn, tag, message);
    }

    #[inline]
    pub fn info<T: Render, M: Render>(&self, tag: T, message: M) {
        self.log(Severity::Info, tag, message);
    }

    #[inline]
    pub fn debug<T: Render, M: Render>(&self, tag: T, message: M) {
        self.log(Severity::Debug, tag, message);
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use taglog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .threshold(Severity::Debug)
    ///     .sink(MemorySink::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a configured [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use taglog::prelude::*;
///
/// let capture = MemorySink::new();
/// let view = capture.clone();
///
/// let logger = Logger::builder()
///     .threshold(Severity::Warn)
///     .sink(capture)
///     .empty_slot()
///     .sink(MemorySink::new())
///     .build();
///
/// logger.error("NET", "link down");
/// assert_eq!(view.lines(), vec!["ERROR\t[NET]\tlink down"]);
/// ```
pub struct LoggerBuilder {
    threshold: Severity,
    sinks: Vec<Option<SinkHandle>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: Severity::Off,
            sinks: Vec::new(),
        }
    }

    /// Set the threshold severity
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Attach a sink, wrapping it into a shared handle
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(self, sink: S) -> Self {
        self.sink_handle(sink_handle(sink))
    }

    /// Attach an existing shared sink handle
    #[must_use = "builder methods return a new value"]
    pub fn sink_handle(mut self, handle: SinkHandle) -> Self {
        self.sinks.push(Some(handle));
        self
    }

    /// Reserve an absent slot in the fan-out order
    #[must_use = "builder methods return a new value"]
    pub fn empty_slot(mut self) -> Self {
        self.sinks.push(None);
        self
    }

    /// Build the configured Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.configure(self.sinks, self.threshold);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
