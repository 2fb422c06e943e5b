//! Presence validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is not blank.
    ///
    /// Surrounding whitespace is ignored, so `"   "` fails just like `""`.
    pub Required for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::required() }
    fn required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_required() {
        assert!(required().validate("x").is_ok());
        assert!(required().validate("  padded  ").is_ok());
        assert!(required().validate("").is_err());
        assert!(required().validate(" \t\n").is_err());
    }
}
