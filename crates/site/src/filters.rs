//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use gearbox_core::Rating;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Renders a star count as filled and empty stars, e.g. `★★★★☆`.
///
/// Values that are not a valid rating render as no stars.
///
/// Usage in templates: `{{ t.rating.stars()|stars }}`
#[askama::filter_fn]
pub fn stars(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(star_string(&value.to_string()))
}

fn star_string(value: &str) -> String {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| Rating::new(n).ok())
        .map(|rating| {
            let mut out = "★".repeat(usize::from(rating.stars()));
            out.push_str(&"☆".repeat(usize::from(rating.missing())));
            out
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_string() {
        assert_eq!(star_string("5"), "★★★★★");
        assert_eq!(star_string("3"), "★★★☆☆");
        assert_eq!(star_string("0"), "");
        assert_eq!(star_string("nope"), "");
    }
}
