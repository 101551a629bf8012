//! Login payload. Carries a plaintext password, so it must never be logged.

use serde::Serialize;

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Trims the email and rejects empty fields.
    pub fn new(email: &str, password: String) -> Option<Self> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return None;
        }

        Some(Self {
            email: email.to_string(),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LoginRequest;

    #[test]
    fn rejects_blank_fields() {
        assert!(LoginRequest::new(" ", "secret".to_string()).is_none());
        assert!(LoginRequest::new("me@example.com", "   ".to_string()).is_none());
    }

    #[test]
    fn trims_email_but_not_password() {
        let request = LoginRequest::new(" me@example.com ", " pw ".to_string()).expect("request");
        assert_eq!(request.email, "me@example.com");
        assert_eq!(request.password, " pw ");
    }
}
