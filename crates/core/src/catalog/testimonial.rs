//! Customer testimonials.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::Rating;

/// A customer quote with rating and attribution.
#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub author: &'static str,
    /// Short attribution line, e.g. "2019 Honda Accord owner".
    pub role: &'static str,
    pub text: &'static str,
    pub rating: Rating,
    pub image: &'static str,
    /// Id of the service the customer had done.
    pub service: Option<&'static str>,
    pub date: Option<NaiveDate>,
}

impl Testimonial {
    /// Initials for the avatar placeholder.
    #[must_use]
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .filter(|c| c.is_alphabetic())
            .take(2)
            .collect()
    }
}
