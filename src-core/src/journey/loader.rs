use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::descriptor::{JourneyCatalog, JourneyDescriptor};

/// Embedded copy of `src-core/config/journeys.toml`.
const DEFAULT_JOURNEYS: &str = include_str!("../../config/journeys.toml");

#[derive(Deserialize)]
struct JourneyFile {
    journeys: Vec<JourneyDescriptor>,
}

/// Parse and validate journey descriptors from TOML text.
pub fn parse_journeys(content: &str) -> Result<JourneyCatalog> {
    let file: JourneyFile = toml::from_str(content).context("Invalid journeys TOML")?;
    let catalog = JourneyCatalog::new(file.journeys)?;
    Ok(catalog)
}

/// Load journey descriptors from a TOML file.
pub fn load_journeys(path: &Path) -> Result<JourneyCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read journeys at {:?}", path))?;
    parse_journeys(&content)
}

/// Journeys embedded at compile time.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug, covered by tests).
pub fn default_journeys() -> JourneyCatalog {
    parse_journeys(DEFAULT_JOURNEYS).expect("embedded journeys.toml must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::PortalStatus;
    use crate::wizard::{Step, StepPlan};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_journeys_load() {
        let catalog = default_journeys();
        let slugs: Vec<_> = catalog.journeys().iter().map(|j| j.slug.as_str()).collect();
        assert_eq!(slugs, vec!["scale-health", "integrated-offer", "insider", "virtual-clinic"]);
    }

    #[test]
    fn test_insider_is_provider_first_with_rebook() {
        let catalog = default_journeys();
        let insider = catalog.find("insider").unwrap();
        assert_eq!(insider.steps, StepPlan::concierge());
        assert!(insider.allow_rebook);
        assert!(insider.exit_capture);
        assert_eq!(insider.confirmation_heading, "VIP Booking Confirmed!");
    }

    #[test]
    fn test_scale_health_launches_offer_page() {
        let catalog = default_journeys();
        let journey = catalog.find("scale-health").unwrap();
        assert_eq!(journey.launch_path(), "/w/scale-health/offer");
        assert_eq!(journey.steps.first(), Step::Location);
        assert_eq!(journey.highlights.len(), 3);
    }

    #[test]
    fn test_virtual_clinic_is_draft() {
        let catalog = default_journeys();
        let vc = catalog.find("virtual-clinic").unwrap();
        assert_eq!(vc.status, PortalStatus::Draft);
        assert_eq!(vc.preselected().map(|p| p.name), Some("Emma Wilson, RMT"));
    }

    #[test]
    fn test_invalid_step_plan_rejected() {
        let toml = DEFAULT_JOURNEYS.replacen(
            r#"steps = ["selection", "details", "confirmed"]"#,
            r#"steps = ["details", "selection", "confirmed"]"#,
            1,
        );
        assert!(parse_journeys(&toml).is_err());
    }

    #[test]
    fn test_load_journeys_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", DEFAULT_JOURNEYS).unwrap();
        let catalog = load_journeys(file.path()).unwrap();
        assert_eq!(catalog, default_journeys());
    }
}
