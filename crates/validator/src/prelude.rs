//! Common imports.
//!
//! ```rust
//! use reel_validator::prelude::*;
//!
//! assert!(email().validate("a@b.co").is_ok());
//! assert!(Rule::phone().check(&Value::text("05321234567")).is_ok());
//! ```

pub use crate::foundation::{Validate, ValidationError, ValidationResult};
pub use crate::rule::{Check, Rule, RuleSet};
pub use crate::validators::{
    Accepted, Email, MaxLength, MinLength, Phone, PhoneRegion, Required, VideoHost, VideoUrl,
    accepted, email, format_phone_input, max_length, min_length, phone, required, video_url,
};
pub use crate::value::Value;
