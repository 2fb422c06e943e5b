//! String length validators
//!
//! Length is measured in Unicode scalar values on the raw input, so
//! `"Çanakkale"` counts as 9 and surrounding spaces count too. Characters
//! outside the Basic Multilingual Plane, such as most emoji, count once each
//! rather than as two UTF-16 code units the way browser `length` does. Both bounds
//! are inclusive: a value of exactly `n` chars passes `min_length(n)` and
//! `max_length(n)`.

use crate::foundation::ValidationError;

#[inline]
fn measure(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, measure(input)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { measure(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, measure(input)) }
    fn max_length(max: usize);
}
