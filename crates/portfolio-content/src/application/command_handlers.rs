//! Command handlers for the content service.

use tracing::info;
use uuid::Uuid;

use crate::domain::commands::SubmitContact;

/// Acknowledgment returned for every contact submission.
pub const CONTACT_ACKNOWLEDGEMENT: &str = "Thank you for your message! I'll get back to you soon.";

/// Result of a handled contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    /// Correlation ID of the submission.
    pub correlation_id: Uuid,
    /// Message to show the sender.
    pub message: &'static str,
}

/// Handles the `SubmitContact` command.
///
/// Nothing is stored and nothing is sent. Only the names of the fields
/// received are logged; their values may hold personal data.
#[must_use]
pub fn handle_submit_contact(command: &SubmitContact) -> ContactReceipt {
    let fields: Vec<&str> = command.submission.field_names().collect();
    info!(
        correlation_id = %command.correlation_id,
        fields = ?fields,
        empty = command.submission.is_empty(),
        "contact submission received"
    );

    ContactReceipt {
        correlation_id: command.correlation_id,
        message: CONTACT_ACKNOWLEDGEMENT,
    }
}
