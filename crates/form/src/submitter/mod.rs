//! Submission port.
//!
//! A [`Submitter`] transmits a validated [`Submission`]. The form does not
//! care how: HTTP, a queue, a file. Drivers map their failures into
//! [`SubmitError`] so the form can report them without inspecting
//! transport details.

mod memory;

use async_trait::async_trait;
use indexmap::IndexMap;
use reel_validator::Value;
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

pub use memory::MemorySubmitter;

/// Snapshot of a form's values at submit time, by field name.
///
/// Text inputs contribute their string value, checkboxes their `checked`
/// state. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    values: IndexMap<String, Value>,
}

impl Submission {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Looks up a value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (k, v) in iter {
            submission.insert(k, v);
        }
        submission
    }
}

/// Transmits validated submissions.
///
/// `Ok(())` means the receiver accepted the data. Implementations must be
/// safe to share between tasks; the form holds them behind an `Arc`.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver one submission.
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}
