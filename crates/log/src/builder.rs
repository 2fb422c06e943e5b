//! Logger builder implementation

use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{Config, DisplayConfig, Format, Writer};
use crate::error::{LogError, LogResult};

type Filtered = Layered<EnvFilter, Registry>;
type FmtLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;
type Subscriber = Layered<FmtLayer, Filtered>;

/// Applies the display options shared by every format, then drops the
/// timestamp when disabled. Each arm yields a boxed layer so the formats
/// unify.
macro_rules! finish_layer {
    ($layer:expr, $display:expr) => {{
        let display: &DisplayConfig = $display;
        let layer = $layer
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids);
        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

/// Keeps a scoped subscriber installed; a global one stays for the
/// process lifetime regardless.
#[derive(Debug)]
#[must_use = "dropping the guard uninstalls a scoped subscriber"]
pub struct LoggerGuard {
    _scope: Option<DefaultGuard>,
}

impl LoggerBuilder {
    /// Create builder from config
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Installs the subscriber globally.
    ///
    /// # Errors
    ///
    /// [`LogError::Filter`] when the level does not parse,
    /// [`LogError::Init`] when a global subscriber already exists.
    pub fn build(self) -> LogResult<LoggerGuard> {
        self.subscriber()?
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;
        Ok(LoggerGuard { _scope: None })
    }

    /// Installs the subscriber for the current thread until the guard drops.
    ///
    /// # Errors
    ///
    /// [`LogError::Filter`] when the level does not parse.
    pub fn build_scoped(self) -> LogResult<LoggerGuard> {
        let scope = tracing::subscriber::set_default(self.subscriber()?);
        Ok(LoggerGuard {
            _scope: Some(scope),
        })
    }

    fn subscriber(&self) -> LogResult<Subscriber> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        Ok(Registry::default().with(filter).with(self.fmt_layer()))
    }

    fn fmt_layer(&self) -> FmtLayer {
        let display = &self.config.display;
        let writer = make_writer(self.config.writer);

        match self.config.format {
            Format::Pretty => finish_layer!(fmt::layer().pretty().with_writer(writer), display),
            Format::Compact => finish_layer!(fmt::layer().compact().with_writer(writer), display),
            Format::Json => finish_layer!(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(display.span_list)
                    .flatten_event(display.flatten)
                    .with_writer(writer),
                display
            ),
        }
    }
}

fn make_writer(writer: Writer) -> BoxMakeWriter {
    match writer {
        Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
        Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
    }
}
