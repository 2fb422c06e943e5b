//! Built-in validators
//!
//! Ready-to-use predicates for the inputs of an application form.
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Length**: [`MinLength`], [`MaxLength`] (inclusive, counted in chars)
//! - **Format**: [`Email`], [`Phone`], [`VideoUrl`]
//! - **Checkbox**: [`Accepted`]
//!
//! # Examples
//!
//! ```rust
//! use reel_validator::foundation::Validate;
//! use reel_validator::validators::{email, phone, required};
//!
//! assert!(required().validate("  ").is_err());
//! assert!(email().validate("a@b.co").is_ok());
//! assert!(phone().validate("0532 123 45 67").is_ok());
//! ```

pub mod boolean;
pub mod content;
pub mod length;
pub mod phone;
pub mod required;

pub use boolean::{Accepted, accepted};
pub use content::{Email, VideoHost, VideoUrl, email, video_url};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use phone::{Phone, PhoneRegion, format_phone_input, phone};
pub use required::{Required, required};
