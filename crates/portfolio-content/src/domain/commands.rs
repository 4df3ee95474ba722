//! Commands for the content service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A contact form payload exactly as received.
///
/// This is unvalidated input: any JSON object is accepted, and no field is
/// guaranteed to exist or to have a particular type. The form usually sends
/// `name`, `email`, `subject` and `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactSubmission(pub Map<String, Value>);

impl ContactSubmission {
    /// Names of the fields present in the payload, in the order received.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns `true` if the payload has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Command to submit a contact message.
#[derive(Debug, Clone)]
pub struct SubmitContact {
    /// Correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The raw submission.
    pub submission: ContactSubmission,
}
