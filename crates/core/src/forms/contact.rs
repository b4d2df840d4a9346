//! Contact form.

use serde::{Deserialize, Serialize};

use super::{FieldErrors, MAX_TEXT_LENGTH, check_email, check_name, check_phone, non_empty};
use crate::{Email, Phone};

/// Minimum message length, in characters.
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// Raw contact form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A contact form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: Email,
    pub phone: Option<Phone>,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Validate the submitted fields.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self) -> Result<ContactRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        check_name(&mut errors, name);

        let email = check_email(&mut errors, self.email.trim());
        let phone = check_phone(&mut errors, self.phone.trim(), false);

        let message = self.message.trim();
        let message_len = message.chars().count();
        if message.is_empty() {
            errors.add("message", "Message is required");
        } else if message_len < MIN_MESSAGE_LENGTH {
            errors.add(
                "message",
                format!("Message must be at least {MIN_MESSAGE_LENGTH} characters"),
            );
        } else if message_len > MAX_TEXT_LENGTH {
            errors.add(
                "message",
                format!("Message must be at most {MAX_TEXT_LENGTH} characters"),
            );
        }

        errors.into_result(|| {
            Some(ContactRequest {
                name: name.to_string(),
                email: email?,
                phone,
                subject: non_empty(&self.subject),
                message: message.to_string(),
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm {
            name: "Dana Whitfield".to_string(),
            email: "dana@example.com".to_string(),
            phone: String::new(),
            subject: "Squeaky brakes".to_string(),
            message: "My brakes squeak when stopping at low speed.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_accepted() {
        let request = valid().validate().unwrap();
        assert_eq!(request.name, "Dana Whitfield");
        assert_eq!(request.email.as_str(), "dana@example.com");
        assert!(request.phone.is_none());
        assert_eq!(request.subject.as_deref(), Some("Squeaky brakes"));
    }

    #[test]
    fn test_empty_name_bad_email_short_message() {
        let form = ContactForm {
            name: String::new(),
            email: "x".to_string(),
            message: "hi".to_string(),
            ..ContactForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(
            errors.get("message"),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_all_empty() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["name", "email", "message"]
        );
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..valid()
        };
        assert!(form.validate().unwrap_err().has("name"));
    }

    #[test]
    fn test_inputs_trimmed() {
        let form = ContactForm {
            name: "  Dana  ".to_string(),
            email: " dana@example.com ".to_string(),
            ..valid()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Dana");
        assert_eq!(request.email.as_str(), "dana@example.com");
    }

    #[test]
    fn test_optional_phone_checked_when_present() {
        let form = ContactForm {
            phone: "12".to_string(),
            ..valid()
        };
        assert_eq!(
            form.validate().unwrap_err().get("phone"),
            Some("Please enter a valid phone number")
        );

        let form = ContactForm {
            phone: "(555) 214-8830".to_string(),
            ..valid()
        };
        assert!(form.validate().unwrap().phone.is_some());
    }

    #[test]
    fn test_deterministic() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..valid()
        };
        assert_eq!(form.validate(), form.validate());
    }
}
