//! Contact form payload and submission status.

use crate::Error;
use serde::{Deserialize, Serialize};

/// Body of `POST <base-url>/contacts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trims every field and checks that all of them are present.
    pub fn validated(&self) -> Result<Self, Error> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        let message = required(&self.message, "message")?;

        if !looks_like_email(&email) {
            return Err(Error::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

// Same bar as an `<input type="email">`: something on both sides of one '@'.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Status line under the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
    Invalid(String),
}

impl ContactStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending...".to_string()),
            Self::Sent => Some("Message sent successfully!".to_string()),
            Self::Failed => Some("Failed to send message. Try again.".to_string()),
            Self::Invalid(reason) => Some(format!("Please check the form: {reason}.")),
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}
