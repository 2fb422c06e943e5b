//! Character counter for length-capped text inputs.
//!
//! Counts Unicode scalar values like the length rules, so an emoji is one
//! character, not two UTF-16 units.

use std::fmt;

use serde::Serialize;

/// How close a text is to its cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterLevel {
    /// Below 70% of the cap.
    Normal,
    /// At least 70% of the cap.
    Warning,
    /// At least 90% of the cap.
    Critical,
}

impl CounterLevel {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for CounterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts chars against a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterCounter {
    max: usize,
}

/// One counter reading, rendered as `current/max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterReading {
    /// Chars in the text.
    pub current: usize,
    /// The cap.
    pub max: usize,
    /// Severity.
    pub level: CounterLevel,
}

impl CharacterCounter {
    /// Counter for a cap of `max` chars.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }

    /// The cap.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Reads `text`.
    #[must_use]
    pub fn read(&self, text: &str) -> CounterReading {
        let current = text.chars().count();
        CounterReading {
            current,
            max: self.max,
            level: self.level(current),
        }
    }

    /// Level for a given length. Thresholds compare `current / max` against
    /// 0.9 and 0.7 in integer arithmetic.
    #[must_use]
    pub fn level(&self, current: usize) -> CounterLevel {
        let scaled = current.saturating_mul(10);
        if scaled >= self.max.saturating_mul(9) {
            CounterLevel::Critical
        } else if scaled >= self.max.saturating_mul(7) {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }
}

impl fmt::Display for CounterReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, CounterLevel::Normal)]
    #[case(699, CounterLevel::Normal)]
    #[case(700, CounterLevel::Warning)]
    #[case(899, CounterLevel::Warning)]
    #[case(900, CounterLevel::Critical)]
    #[case(1000, CounterLevel::Critical)]
    #[case(1200, CounterLevel::Critical)]
    fn thresholds(#[case] current: usize, #[case] expected: CounterLevel) {
        assert_eq!(CharacterCounter::new(1000).level(current), expected);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let reading = CharacterCounter::new(10).read("şçğü");
        assert_eq!(reading.current, 4);
        assert_eq!(reading.to_string(), "4/10");
        assert_eq!(reading.level, CounterLevel::Normal);
    }

    #[test]
    fn emoji_count_once() {
        assert_eq!(CharacterCounter::new(10).read("🎬🎥").to_string(), "2/10");
    }

    #[test]
    fn zero_cap_is_always_critical() {
        assert_eq!(CharacterCounter::new(0).level(0), CounterLevel::Critical);
    }
}
