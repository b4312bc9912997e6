//! Contact form state and validation.
//!
//! The form never delivers anything; a valid submission flips the section
//! into a confirmation state and resets after a short delay.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation errors; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    /// True when every field validated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Submission lifecycle for the simulated send.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Form is visible and editable.
    #[default]
    Editing,
    /// Submission succeeded; confirmation is visible until the timed reset.
    Sent,
}

impl ContactForm {
    /// Validate required fields and the email shape.
    #[must_use]
    pub fn validate(&self) -> ContactErrors {
        let mut errors = ContactErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_owned());
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Email is required".to_owned());
        } else if !looks_like_email(email) {
            errors.email = Some("Email is invalid".to_owned());
        }
        if self.message.trim().is_empty() {
            errors.message = Some("Message is required".to_owned());
        }
        errors
    }
}

/// Minimal shape check: local part, `@`, and a dotted domain, no spaces.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
