//! Print catalog records as pretty JSON.

use std::io::Write;

use gearbox_core::catalog;

use crate::ExportTarget;

/// Serialize the chosen collection.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn to_json(target: ExportTarget) -> serde_json::Result<String> {
    match target {
        ExportTarget::Services => serde_json::to_string_pretty(catalog::services()),
        ExportTarget::Testimonials => serde_json::to_string_pretty(catalog::testimonials()),
        ExportTarget::Slides => serde_json::to_string_pretty(catalog::hero_slides()),
        ExportTarget::Profile => serde_json::to_string_pretty(catalog::site_profile()),
    }
}

/// Write the chosen collection to `out`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn run(target: ExportTarget, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let json = to_json(target)?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_services_export_has_every_service() {
        let value: serde_json::Value =
            serde_json::from_str(&to_json(ExportTarget::Services).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), catalog::services().len());
        assert!(items.iter().all(|s| s.get("id").is_some()));
    }

    #[test]
    fn test_profile_export_is_object() {
        let value: serde_json::Value =
            serde_json::from_str(&to_json(ExportTarget::Profile).unwrap()).unwrap();
        assert_eq!(
            value.get("name").and_then(|v| v.as_str()),
            Some(catalog::site_profile().name)
        );
    }
}
