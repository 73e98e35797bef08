mod config;
mod error;
mod init;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Initializes the global tracing subscriber with the given configuration.
///
/// All output goes to stderr; stdout is reserved for generated definitions.
///
/// # Important: Local Timezone
/// `LoggerTimeZone::Local` detects the offset once, here. Call this before
/// spawning any threads, otherwise detection fails and UTC is used.
///
/// # Examples
/// ```rust
/// use fleet_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("Failed to initialize logger");
///
/// tracing::info!("Logger initialized successfully");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::logger_text(cfg),
        LoggerFormat::Json => init::logger_json(cfg),
        LoggerFormat::Journald => init::logger_journald(cfg),
    }
}
