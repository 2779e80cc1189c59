//! Logging setup.
//!
//! `RUST_LOG` wins over the configured level when it is set.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is absent (e.g. "info", "todo_core=debug")
    pub level: String,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ObservabilityError {
    #[error("invalid log filter {0:?}: {1}")]
    Filter(String, String),

    #[error("failed to install subscriber: {0}")]
    Install(String),
}

fn filter(config: &LogConfig) -> Result<EnvFilter, ObservabilityError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| ObservabilityError::Filter(config.level.clone(), e.to_string())),
    }
}

/// Install a global fmt subscriber writing to stderr (stdout belongs to the
/// rendering surface).
pub fn init(config: &LogConfig) -> Result<(), ObservabilityError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ObservabilityError::Install(e.to_string()))
}
