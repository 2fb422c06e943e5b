//! The predicate trait.

use super::ValidationResult;

/// A pure check over a borrowed input.
///
/// `Input` is `str` for text rules and [`Value`](crate::Value) for rules that
/// must tell a checkbox apart from text, so a rule cannot be pointed at the
/// wrong kind of input.
///
/// ```rust
/// use reel_validator::foundation::{Validate, ValidationError, ValidationResult};
///
/// struct NoDigits;
///
/// impl Validate for NoDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> ValidationResult<()> {
///         if input.chars().any(|c| c.is_ascii_digit()) {
///             return Err(ValidationError::new("no_digits", "Digits are not allowed"));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(NoDigits.validate("Ada").is_ok());
/// assert!(NoDigits.validate("R2D2").is_err());
/// ```
pub trait Validate {
    type Input: ?Sized;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()>;

    /// `true` when [`validate`](Self::validate) passes.
    fn accepts(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V> Validate for &V
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &V::Input) -> ValidationResult<()> {
        V::validate(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    struct Even;

    impl Validate for Even {
        type Input = str;

        fn validate(&self, input: &str) -> ValidationResult<()> {
            if input.len() % 2 == 0 {
                Ok(())
            } else {
                Err(ValidationError::new("even", "Odd length"))
            }
        }
    }

    #[test]
    fn accepts_mirrors_validate() {
        assert!(Even.accepts("ab"));
        assert!(!Even.accepts("abc"));
    }

    #[test]
    fn references_delegate() {
        let by_ref = &Even;
        assert_eq!(by_ref.validate("a").unwrap_err().code, "even");
    }
}
