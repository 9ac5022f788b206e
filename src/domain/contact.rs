// src/domain/contact.rs
use std::collections::HashMap;

pub const MIN_MESSAGE_LEN: usize = 10;

/// Raw contact form input, kept verbatim so the form can be re-rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A contact form that passed validation (all fields trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// What the contact page shows below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sent,
    Invalid(Vec<FieldError>),
    Failed(String),
}

pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

impl ContactForm {
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Self {
        let field = |k: &str| pairs.get(k).cloned().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    pub fn validate(&self) -> Result<ValidContact, Vec<FieldError>> {
        let name = self.name.trim();
        let email = self.email.trim().to_lowercase();
        let subject = self.subject.trim();
        let message = self.message.trim();

        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Please tell us your name.",
            });
        }
        if !looks_like_email(&email) {
            errors.push(FieldError {
                field: "email",
                message: "Please enter a valid email address.",
            });
        }
        if message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError {
                field: "message",
                message: "Your message should be at least 10 characters.",
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidContact {
            name: name.to_string(),
            email,
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: message.to_string(),
        })
    }
}
