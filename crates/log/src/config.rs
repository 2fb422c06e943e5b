//! Configuration types and presets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Everything needed to install a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directives (e.g. `"info"`, `"debug,reel_form=trace"`)
    pub level: String,

    /// Output format
    pub format: Format,

    /// Output stream
    pub writer: Writer,

    /// Which parts of an event the formatter prints.
    pub display: DisplayConfig,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Single-line
    Compact,
    /// Structured JSON, one object per line
    Json,
}

/// Output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Writer {
    /// Standard error; keeps stdout free for command output
    #[default]
    Stderr,
    /// Standard output
    Stdout,
}

/// Which parts of an event the formatter prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Append `file:line` to each event.
    pub source: bool,
    /// Print the event target.
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Include the span list in JSON output
    pub span_list: bool,
    /// Flatten event fields into the JSON object
    pub flatten: bool,
}

// ============================================================================
// Implementations
// ============================================================================

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            writer: Writer::Stderr,
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Reads `REEL_LOG` (falling back to `RUST_LOG`), `REEL_LOG_FORMAT` and
    /// the `REEL_LOG_{TIME,SOURCE,COLORS}` switches from the process
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("REEL_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        // Unknown names fall back to compact rather than failing startup.
        if let Some(format) = lookup("REEL_LOG_FORMAT") {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        config.display.apply_env(&lookup);
        config
    }

    /// Pretty output at `debug`, for local runs.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// JSON lines at `info`.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration: everything, no colors, no timestamps
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Overrides the filter directives.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Overrides the output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        let switch = |key: &str| lookup(key).map(|v| v != "0" && v != "false");

        if let Some(time) = switch("REEL_LOG_TIME") {
            self.time = time;
        }
        if let Some(source) = switch("REEL_LOG_SOURCE") {
            self.source = source;
        }
        if let Some(colors) = switch("REEL_LOG_COLORS") {
            self.colors = colors;
        }
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(LogError::Format(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_env_is_default() {
        assert_eq!(Config::from_lookup(env(&[])), Config::default());
    }

    #[test]
    fn reel_log_wins_over_rust_log() {
        let config = Config::from_lookup(env(&[
            ("RUST_LOG", "warn"),
            ("REEL_LOG", "reel_form=debug"),
        ]));
        assert_eq!(config.level, "reel_form=debug");

        let config = Config::from_lookup(env(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn display_switches() {
        let config = Config::from_lookup(env(&[
            ("REEL_LOG_TIME", "0"),
            ("REEL_LOG_COLORS", "false"),
            ("REEL_LOG_SOURCE", "1"),
        ]));
        assert!(!config.display.time);
        assert!(!config.display.colors);
        assert!(config.display.source);
    }

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("JSON", Format::Json)]
    #[case("compact", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn format_from_env(#[case] raw: &str, #[case] expected: Format) {
        let config = Config::from_lookup(env(&[("REEL_LOG_FORMAT", raw)]));
        assert_eq!(config.format, expected);
    }

    #[test]
    fn unknown_format_is_an_error_when_parsed_directly() {
        assert!(matches!("xml".parse::<Format>(), Err(LogError::Format(name)) if name == "xml"));
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            level = "debug"
            format = "json"

            [display]
            time = false
            "#,
        )
        .unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.writer, Writer::Stderr);
        assert!(!config.display.time);
    }
}
