//! Mobile phone number validator and input formatter.
//!
//! Validation is region-specific. The only region shipped today is Turkey,
//! whose mobile numbers are an optional `+90` or `0` trunk prefix, the digit
//! `5`, and nine more digits. Whitespace anywhere in the input is ignored.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

static TR_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+90|0)?5[0-9]{9}$").expect("phone pattern is valid"));

// ============================================================================
// REGION
// ============================================================================

/// Numbering plan a [`Phone`] validator checks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneRegion {
    /// Turkish mobile numbers (`05XX XXX XX XX`, `+905XXXXXXXXX`).
    #[default]
    Tr,
}

impl PhoneRegion {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Tr => &TR_MOBILE,
        }
    }

    /// Human-readable sample shown in error messages.
    #[must_use]
    pub fn sample(self) -> &'static str {
        match self {
            Self::Tr => "05XX XXX XX XX",
        }
    }
}

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

crate::validator! {
    /// Validates a mobile number for a region.
    ///
    /// # Examples
    ///
    /// ```
    /// use reel_validator::validators::phone;
    /// use reel_validator::foundation::Validate;
    ///
    /// assert!(phone().validate("0532 123 45 67").is_ok());
    /// assert!(phone().validate("+905321234567").is_ok());
    /// assert!(phone().validate("1532123456").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Phone { region: PhoneRegion } for str;
    rule(self, input) { self.region.pattern().is_match(&strip_whitespace(input)) }
    error(self, input) {
        ValidationError::invalid_format(
            "phone",
            format!("Enter a valid phone number ({})", self.region.sample()),
            self.region.sample(),
        )
    }
    new() { Self { region: PhoneRegion::Tr } }
    fn phone();
}

impl Phone {
    /// Creates a validator for the given region.
    #[must_use]
    pub fn for_region(region: PhoneRegion) -> Self {
        Self { region }
    }
}

// ============================================================================
// INPUT FORMATTING
// ============================================================================

/// Reformats a partially typed phone number into `0XXX XXX XX XX` groups.
///
/// Non-digits are dropped and a leading `0` is added when missing. Groups
/// break after the 4th, 7th and 9th digit; once the last group is reached
/// at most 11 digits are kept. Input without any digit is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use reel_validator::validators::format_phone_input;
///
/// assert_eq!(format_phone_input("5321234567"), "0532 123 45 67");
/// assert_eq!(format_phone_input("0532-12"), "0532 12");
/// assert_eq!(format_phone_input("053"), "053");
/// ```
#[must_use]
pub fn format_phone_input(input: &str) -> String {
    let mut digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return input.to_owned();
    }
    if !digits.starts_with('0') {
        digits.insert(0, '0');
    }

    let len = digits.len();
    if len > 9 {
        let end = len.min(11);
        format!(
            "{} {} {} {}",
            &digits[..4],
            &digits[4..7],
            &digits[7..9],
            &digits[9..end]
        )
    } else if len > 7 {
        format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..])
    } else if len > 4 {
        format!("{} {}", &digits[..4], &digits[4..])
    } else {
        digits
    }
}
