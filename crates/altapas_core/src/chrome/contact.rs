//! Contact form acknowledgement.
//!
//! Submissions are only acknowledged locally; nothing is sent anywhere.

use crate::chrome::toast::{Toast, ToastKind};
use serde::{Deserialize, Serialize};

pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Fields of the reservation/contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Metadata-only log summary; field contents never appear.
    pub fn log_summary(&self) -> String {
        format!(
            "name_len={} email_present={} phone_present={} message_len={}",
            self.name.chars().count(),
            !self.email.trim().is_empty(),
            !self.phone.trim().is_empty(),
            self.message.chars().count()
        )
    }

    /// Success toast shown after submission.
    pub fn acknowledgement(&self) -> Toast {
        Toast::new(CONTACT_ACK_MESSAGE, ToastKind::Success)
    }
}
