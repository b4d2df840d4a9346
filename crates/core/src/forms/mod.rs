//! Contact and appointment form validation.
//!
//! Validation is pure: the same input (and the same `today` for
//! appointments) always gives the same result. Failures are reported per
//! field so they can be shown inline next to the input; they are never
//! turned into errors.

mod appointment;
mod contact;

pub use appointment::{AppointmentForm, AppointmentRequest, TIME_SLOTS, Vehicle};
pub use contact::{ContactForm, ContactRequest};

/// Validation messages keyed by form field name, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a message for `field`. Only the first message per field is kept.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.errors.push((field, message.into()));
        }
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    /// Whether `field` failed.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed field names, in form order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn into_result<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, Self> {
        if self.is_empty() {
            value().ok_or(self)
        } else {
            Err(self)
        }
    }
}

/// Maximum length of a name field.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of free-text fields.
pub const MAX_TEXT_LENGTH: usize = 2000;

fn check_name(errors: &mut FieldErrors, name: &str) {
    if name.is_empty() {
        errors.add("name", "Name is required");
    } else if name.chars().count() > MAX_NAME_LENGTH {
        errors.add(
            "name",
            format!("Name must be at most {MAX_NAME_LENGTH} characters"),
        );
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) -> Option<crate::Email> {
    if email.is_empty() {
        errors.add("email", "Email is required");
        return None;
    }
    crate::Email::parse(email)
        .map_err(|_| errors.add("email", "Please enter a valid email address"))
        .ok()
}

fn check_phone(errors: &mut FieldErrors, phone: &str, required: bool) -> Option<crate::Phone> {
    if phone.is_empty() {
        if required {
            errors.add("phone", "Phone number is required");
        }
        return None;
    }
    crate::Phone::parse(phone)
        .map_err(|_| errors.add("phone", "Please enter a valid phone number"))
        .ok()
}

/// Trimmed, with empty mapped to `None`.
fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "first");
        errors.add("email", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("first"));
    }

    #[test]
    fn test_fields_in_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.add("name", "a");
        errors.add("email", "b");
        errors.add("message", "c");
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["name", "email", "message"]
        );
        assert!(errors.has("message"));
        assert!(!errors.has("phone"));
    }

    #[test]
    fn test_name_length_limit() {
        let mut errors = FieldErrors::new();
        check_name(&mut errors, &"x".repeat(MAX_NAME_LENGTH + 1));
        assert!(errors.has("name"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" a "), Some("a".to_string()));
    }
}
