//! # reel-log
//!
//! Subscriber setup for reel binaries. Libraries in the workspace only
//! emit `tracing` events; a binary picks a [`Config`] and installs it once.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> Result<(), reel_log::LogError> {
//!     let _guard = reel_log::auto_init()?;
//!
//!     reel_log::info!(schema = "application", "checking submission");
//!     Ok(())
//! }
//! ```

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::{LogError, LogResult};

pub use tracing::{debug, error, info, instrument, span, trace, warn};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Format, LogResult, auto_init, debug, error, info, init, init_with, trace, warn,
    };
    pub use tracing::{Span, field};
}

/// Picks a configuration from the environment when `REEL_LOG` or
/// `RUST_LOG` is set, otherwise the development or production preset
/// depending on the build profile.
pub fn auto_init() -> LogResult<LoggerGuard> {
    let configured = ["REEL_LOG", "RUST_LOG"]
        .iter()
        .any(|key| std::env::var_os(key).is_some());

    if configured {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with the default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with a custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
