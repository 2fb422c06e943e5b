//! # reel-form
//!
//! Validated forms with a single-flight submission lifecycle.
//!
//! A [`Form`] owns named [`Field`]s, each bound to a declared input and a
//! [`RuleSet`](reel_validator::RuleSet). Submitting validates every field,
//! locks the form, hands a [`Submission`] snapshot to a [`Submitter`] and
//! reports the outcome through a [`Presenter`]. At most one submission is
//! in flight per form.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use reel_form::{Form, InputSet, MemorySubmitter, SubmitOutcome};
//! use reel_validator::Rule;
//!
//! # tokio_test_block(async {
//! let submitter = Arc::new(MemorySubmitter::new());
//! let mut form = Form::new("contact", InputSet::new().text("email"), submitter.clone());
//! form.add_field("email", [Rule::required(), Rule::email()]);
//!
//! assert_eq!(form.submit().await, SubmitOutcome::Invalid);
//!
//! form.set_value("email", "a@b.co").unwrap();
//! assert_eq!(form.submit().await, SubmitOutcome::Accepted);
//! assert_eq!(submitter.calls(), 1);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```

pub mod config;
pub mod counter;
pub mod draft;
pub mod error;
pub mod field;
pub mod form;
pub mod input;
pub mod presenter;
pub mod presets;
pub mod schema;
pub mod submitter;

pub use config::{FormConfig, Notices};
pub use counter::{CharacterCounter, CounterLevel, CounterReading};
pub use draft::DraftStore;
pub use error::{FormError, SchemaError, StorageError, SubmitError};
pub use field::Field;
pub use form::{Form, SubmissionState, SubmitOutcome};
pub use input::{InputKind, InputSet};
pub use presenter::{
    Effect, Notice, NoticeKind, NullPresenter, Presenter, RecordingPresenter, SUCCESS_DISMISS_AFTER,
};
pub use schema::{FieldSpec, FormSchema};
pub use submitter::{MemorySubmitter, Submission, Submitter};
