//! Business identity, contact details and SEO defaults.

use serde::Serialize;

/// Postal address.
#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub street: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

impl Address {
    /// Single-line form, e.g. for the footer.
    #[must_use]
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.region, self.postal_code
        )
    }
}

/// Opening hours for a range of days.
#[derive(Debug, Clone, Serialize)]
pub struct OpeningHours {
    /// Display label, e.g. "Monday - Friday".
    pub days: &'static str,
    /// schema.org day range, e.g. "Mo-Fr".
    pub schema_days: &'static str,
    /// `None` when closed.
    pub opens: Option<&'static str>,
    pub closes: Option<&'static str>,
}

impl OpeningHours {
    /// "08:00 - 18:00" or "Closed".
    #[must_use]
    pub fn display(&self) -> String {
        match (self.opens, self.closes) {
            (Some(opens), Some(closes)) => format!("{opens} - {closes}"),
            _ => "Closed".to_string(),
        }
    }

    /// schema.org `openingHours` value, `None` when closed.
    #[must_use]
    pub fn schema(&self) -> Option<String> {
        Some(format!(
            "{} {}-{}",
            self.schema_days, self.opens?, self.closes?
        ))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: &'static str,
}

/// Aggregate figure shown in the stats band, e.g. "15+" / "Years in business".
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Defaults for page metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SeoDefaults {
    /// Title of the home page.
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    /// Share image path.
    pub image: &'static str,
}

/// The site configuration record.
#[derive(Debug, Clone, Serialize)]
pub struct SiteProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub founded: u16,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: Address,
    pub hours: &'static [OpeningHours],
    pub socials: &'static [SocialLink],
    pub stats: &'static [Stat],
    /// Reasons to choose the shop, shown on the about page.
    pub commitments: &'static [&'static str],
    pub seo: SeoDefaults,
}

impl SiteProfile {
    /// Phone number with separators stripped, for `tel:` links.
    #[must_use]
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}
