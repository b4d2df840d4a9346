//! Star rating type.

use serde::{Deserialize, Serialize};

/// Error returned for a rating outside 1-5.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rating must be between {min} and {max} (got {got})", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingError {
    /// The rejected value.
    pub got: u8,
}

/// A 1-5 star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns `RatingError` if `stars` is not in 1-5.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars >= Self::MIN && stars <= Self::MAX {
            Ok(Self(stars))
        } else {
            Err(RatingError { got: stars })
        }
    }

    /// Number of filled stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }

    /// Number of empty stars.
    #[must_use]
    pub const fn missing(self) -> u8 {
        Self::MAX - self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert_eq!(Rating::new(6), Err(RatingError { got: 6 }));
    }

    #[test]
    fn test_missing() {
        assert_eq!(Rating::new(4).unwrap().missing(), 1);
        assert_eq!(Rating::new(5).unwrap().missing(), 0);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("3").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            RatingError { got: 7 }.to_string(),
            "rating must be between 1 and 5 (got 7)"
        );
    }
}
