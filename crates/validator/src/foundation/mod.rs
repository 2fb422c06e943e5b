//! Core validation types and traits
//!
//! This module contains the building blocks every rule is made of:
//!
//! - **Trait**: [`Validate`], a pure predicate over a borrowed input
//! - **Error**: [`ValidationError`], a structured failure with a code,
//!   a human-readable message, an optional field name and parameters
//!
//! Validators are stateless: the same input always produces the same
//! verdict and evaluation has no side effects.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
