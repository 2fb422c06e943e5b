//! # reel-validator
//!
//! Composable, stateless validation rules for form fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use reel_validator::prelude::*;
//!
//! let rules = RuleSet::new([Rule::required(), Rule::min_length(3)]);
//!
//! // Only the first failing rule is reported.
//! let err = rules.check(&Value::text("")).unwrap_err();
//! assert_eq!(err.code, "required");
//!
//! assert!(rules.check(&Value::text("Ada")).is_ok());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and the
//!   structured [`ValidationError`](foundation::ValidationError).
//! - [`validators`]: built-in predicates (`Required`, `Email`, `Phone`,
//!   `MinLength`, `MaxLength`, `VideoUrl`, `Accepted`).
//! - [`rule`]: the serializable [`Rule`](rule::Rule) tagged variant and the
//!   ordered, first-failure [`RuleSet`](rule::RuleSet).

pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule;
pub mod validators;
pub mod value;

pub use foundation::{Validate, ValidationError};
pub use rule::{Check, Rule, RuleSet};
pub use value::Value;
