use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stderr log encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    /// One flattened JSON object per event.
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    /// Configuration errors from the schema crate surface here.
    Warn,
    /// Accepted/rejected submissions.
    Info,
    /// One line per validation pass.
    Debug,
    /// Every failing field.
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Install the stderr subscriber so stdout carries only the report.
///
/// Targets are kept: events come from the `formguard_schema` and
/// `formguard_session` crates as well as the binary. Fails if a global
/// subscriber is already installed.
pub fn init_logging(format: LogFormat, level: LogLevel) -> Result<(), InitError> {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level.as_filter())
        .with_ansi(false)
        .with_target(true);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    }
}
