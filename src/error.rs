//! Error types.
//!
//! Classification errors are host integration defects: the input layer reported
//! something outside the known vocabulary. They are returned to the caller of the
//! frame hook instead of being folded into [`PointerState::None`](crate::PointerState::None).
//!
//! Listener failures are not represented here. Listeners are plain closures; a
//! panicking listener unwinds through [`TouchMonitor::update`](crate::TouchMonitor::update)
//! to the host's own boundary.

use thiserror::Error;

/// Errors raised while classifying a frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MonitorError {
    /// The input source reported a touch phase code outside `0..=4`.
    #[error("unrecognized touch phase code {code}")]
    UnrecognizedPhase { code: u8 },
}

/// Errors raised while loading a [`MonitorConfig`](crate::config::MonitorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
