//! Logging setup for ngkit.
//!
//! Annotations and the registry adapter only emit `tracing` events; this
//! module is where a subscriber gets installed for them.
//!
//! # Configuration-Based Initialization
//!
//! ```rust,ignore
//! use ngkit_runtime::{config::load_config, logging};
//!
//! let config = load_config()?;
//! logging::init_from_config(&config.logging);
//! ```
//!
//! # Manual Initialization
//!
//! ```rust,ignore
//! use ngkit_runtime::logging::{LoggingBuilder, SpanEvents};
//!
//! LoggingBuilder::new()
//!     .directive("ngkit_framework=debug")
//!     .span_events(SpanEvents::LIFECYCLE)
//!     .init();
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::warn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LogOutput, LoggingConfig, SpanEventConfig};

/// Which span lifecycle events get logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanEvents {
    /// Log when a span is created.
    pub new: bool,
    /// Log when a span is entered.
    pub enter: bool,
    /// Log when a span is exited.
    pub exit: bool,
    /// Log when a span is closed.
    pub close: bool,
}

impl SpanEvents {
    /// No span events.
    pub const NONE: Self = Self {
        new: false,
        enter: false,
        exit: false,
        close: false,
    };

    /// Creation and close only.
    pub const LIFECYCLE: Self = Self {
        new: true,
        enter: false,
        exit: false,
        close: true,
    };

    /// Every span event.
    pub const FULL: Self = Self {
        new: true,
        enter: true,
        exit: true,
        close: true,
    };

    fn to_fmt_span(self) -> fmt::format::FmtSpan {
        let mut span = fmt::format::FmtSpan::NONE;
        if self.new {
            span |= fmt::format::FmtSpan::NEW;
        }
        if self.enter {
            span |= fmt::format::FmtSpan::ENTER;
        }
        if self.exit {
            span |= fmt::format::FmtSpan::EXIT;
        }
        if self.close {
            span |= fmt::format::FmtSpan::CLOSE;
        }
        span
    }
}

impl From<&SpanEventConfig> for SpanEvents {
    fn from(config: &SpanEventConfig) -> Self {
        Self {
            new: config.new,
            enter: config.enter,
            exit: config.exit,
            close: config.close,
        }
    }
}

/// Initializes logging from a [`LoggingConfig`].
///
/// Does nothing if a global subscriber is already installed.
pub fn init_from_config(config: &LoggingConfig) {
    let _ = LoggingBuilder::from_config(config).try_init();
}

/// A builder for the global `tracing` subscriber.
#[derive(Debug, Default)]
pub struct LoggingBuilder {
    directives: Vec<String>,
    level: Option<tracing::Level>,
    span_events: SpanEvents,
    format: LogFormat,
    output: LogOutput,
    thread_ids: bool,
    file_location: bool,
    file_path: Option<PathBuf>,
}

impl LoggingBuilder {
    /// Creates a builder with compact stdout output.
    pub fn new() -> Self {
        Self {
            format: LogFormat::Compact,
            ..Default::default()
        }
    }

    /// Creates a builder from a [`LoggingConfig`].
    pub fn from_config(config: &LoggingConfig) -> Self {
        let mut filters: Vec<_> = config.filters.iter().collect();
        filters.sort_by(|a, b| a.0.cmp(b.0));

        Self {
            directives: filters
                .into_iter()
                .map(|(module, level)| format!("{module}={level}"))
                .collect(),
            level: Some(config.level.to_tracing_level()),
            span_events: SpanEvents::from(&config.span_events),
            format: config.format,
            output: config.output,
            thread_ids: config.thread_ids,
            file_location: config.file_location,
            file_path: config.file_path.clone(),
        }
    }

    /// Adds a filter directive such as `ngkit_framework=trace`.
    pub fn directive(mut self, directive: &str) -> Self {
        self.directives.push(directive.to_string());
        self
    }

    /// Sets the span events to log.
    pub fn span_events(mut self, events: SpanEvents) -> Self {
        self.span_events = events;
        self
    }

    /// Sets the log file and switches output to it.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self.output = LogOutput::File;
        self
    }

    /// Filter directives in the order they will be applied.
    pub fn directives(&self) -> &[String] {
        &self.directives
    }

    fn build_filter(&self) -> EnvFilter {
        let level = self.level.unwrap_or(tracing::Level::INFO);

        // RUST_LOG takes precedence over the configured level.
        let mut filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

        for directive in &self.directives {
            match directive.parse() {
                Ok(d) => filter = filter.add_directive(d),
                Err(e) => eprintln!("Warning: ignoring log directive `{directive}` ({e})"),
            }
        }

        filter
    }

    /// The writer for the configured output, and whether a file was asked
    /// for without a path.
    fn make_writer(&self) -> (BoxMakeWriter, bool) {
        match (self.output, &self.file_path) {
            (LogOutput::Stdout, _) => (BoxMakeWriter::new(std::io::stdout), false),
            (LogOutput::Stderr, _) => (BoxMakeWriter::new(std::io::stderr), false),
            (LogOutput::File, Some(path)) => {
                let appender = tracing_appender::rolling::never(
                    path.parent().unwrap_or_else(|| Path::new(".")),
                    path.file_name().unwrap_or_else(|| OsStr::new("ngkit.log")),
                );
                (BoxMakeWriter::new(appender), false)
            }
            (LogOutput::File, None) => (BoxMakeWriter::new(std::io::stdout), true),
        }
    }

    /// Installs the subscriber, ignoring an already-installed one.
    pub fn init(self) {
        let _ = self.try_init();
    }

    /// Installs the subscriber.
    pub fn try_init(self) -> Result<(), TryInitError> {
        let (writer, missing_path) = self.make_writer();
        let registry = tracing_subscriber::registry().with(self.build_filter());
        let layer = fmt::layer()
            .with_span_events(self.span_events.to_fmt_span())
            .with_thread_ids(self.thread_ids)
            .with_file(self.file_location)
            .with_line_number(self.file_location)
            .with_writer(writer);

        match self.format {
            LogFormat::Compact => registry.with(layer.compact()).try_init()?,
            LogFormat::Full => registry.with(layer).try_init()?,
            LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
            #[cfg(feature = "json-log")]
            LogFormat::Json => registry.with(layer.json()).try_init()?,
            #[cfg(not(feature = "json-log"))]
            LogFormat::Json => {
                registry.with(layer).try_init()?;
                warn!("JSON log format requires the `json-log` feature, using full format");
            }
        }

        if missing_path {
            warn!("File output requested but no file path configured, using stdout");
        }
        Ok(())
    }
}
