//! Error handling for reel-log

/// Result alias for logger operations.
pub type LogResult<T> = Result<T, LogError>;

/// Error raised while installing a subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level string is not a valid `EnvFilter` directive list.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected filter.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// Unknown output format name.
    #[error("unknown log format '{0}' (expected pretty, compact or json)")]
    Format(String),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_error_names_the_filter() {
        let err = LogError::Filter {
            filter: "debug,[".into(),
            reason: "syntax error".into(),
        };
        assert_eq!(err.to_string(), "invalid filter 'debug,[': syntax error");
    }
}
