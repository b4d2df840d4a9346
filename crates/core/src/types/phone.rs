//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains something other than digits and separators.
    #[error("phone number contains an invalid character: {0:?}")]
    InvalidCharacter(char),
    /// Too few or too many digits.
    #[error("phone number must have {min}-{max} digits (got {got})")]
    DigitCount {
        /// Minimum digit count.
        min: usize,
        /// Maximum digit count.
        max: usize,
        /// Digits found.
        got: usize,
    },
}

/// A phone number as the customer typed it, with its digits checked.
///
/// Spaces, dashes, dots, parentheses and one leading `+` are accepted as
/// separators. Between 10 and 15 digits must remain.
///
/// ```
/// use gearbox_core::Phone;
///
/// assert!(Phone::parse("(555) 123-4567").is_ok());
/// assert!(Phone::parse("+44 20 7946 0958").is_ok());
/// assert!(Phone::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 10;
    /// Maximum number of digits (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other than
    /// digits and separators, or has the wrong number of digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let mut digits = 0;
        for (i, c) in s.char_indices() {
            match c {
                '0'..='9' => digits += 1,
                ' ' | '-' | '.' | '(' | ')' => {}
                '+' if i == 0 => {}
                other => return Err(PhoneError::InvalidCharacter(other)),
            }
        }

        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits) {
            return Err(PhoneError::DigitCount {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
                got: digits,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formatted_numbers() {
        assert!(Phone::parse("5551234567").is_ok());
        assert!(Phone::parse("555-123-4567").is_ok());
        assert!(Phone::parse("(555) 123-4567").is_ok());
        assert!(Phone::parse("555.123.4567").is_ok());
        assert!(Phone::parse("+1 555 123 4567").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Phone::parse(""), Err(PhoneError::Empty));
    }

    #[test]
    fn test_parse_letters() {
        assert_eq!(
            Phone::parse("555-CALL-NOW"),
            Err(PhoneError::InvalidCharacter('C'))
        );
    }

    #[test]
    fn test_plus_only_leading() {
        assert_eq!(
            Phone::parse("555+1234567"),
            Err(PhoneError::InvalidCharacter('+'))
        );
    }

    #[test]
    fn test_digit_count_bounds() {
        assert!(matches!(
            Phone::parse("123-4567"),
            Err(PhoneError::DigitCount { got: 7, .. })
        ));
        assert!(matches!(
            Phone::parse("1234567890123456"),
            Err(PhoneError::DigitCount { got: 16, .. })
        ));
    }

    #[test]
    fn test_display_keeps_punctuation() {
        let phone = Phone::parse("+1 (555) 123-4567").unwrap();
        assert_eq!(phone.to_string(), "+1 (555) 123-4567");
    }
}
