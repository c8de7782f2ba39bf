use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{find_provider, ProviderRecord};
use crate::error::CoreError;
use crate::wizard::{StepPlan, Wizard};

/// Whether a journey can be launched from the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalStatus {
    Live,
    Draft,
}

impl PortalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PortalStatus::Live => "Live",
            PortalStatus::Draft => "Draft",
        }
    }

    pub fn is_launchable(&self) -> bool {
        matches!(self, PortalStatus::Live)
    }
}

/// A "how it works" card on a landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyDescriptor {
    /// URL segment under `/w/`
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub hero_heading: String,
    pub hero_body: String,
    pub hero_image: String,
    /// `#RRGGBB`
    pub accent: String,
    pub badge: String,
    #[serde(default)]
    pub steps: StepPlan,
    /// Provider id chosen before the wizard opens
    #[serde(default)]
    pub preselected_provider: Option<String>,
    /// Offer a "book another" reset on the confirmation screen
    #[serde(default)]
    pub allow_rebook: bool,
    pub confirmation_heading: String,
    #[serde(default)]
    pub show_chat: bool,
    /// Show the exit-intent email capture modal
    #[serde(default)]
    pub exit_capture: bool,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    pub portal_title: String,
    pub portal_description: String,
    /// Page the portal launches; defaults to the landing page
    #[serde(default)]
    pub entry_path: Option<String>,
    pub status: PortalStatus,
}

impl JourneyDescriptor {
    /// Landing page route.
    pub fn path(&self) -> String {
        format!("/w/{}", self.slug)
    }

    /// Route the portal's launch button goes to.
    pub fn launch_path(&self) -> String {
        self.entry_path.clone().unwrap_or_else(|| self.path())
    }

    pub fn preselected(&self) -> Option<&'static ProviderRecord> {
        self.preselected_provider.as_deref().and_then(find_provider)
    }

    /// A fresh wizard configured for this journey.
    pub fn new_wizard(&self, today: NaiveDate, session_minutes: u32) -> Wizard {
        let wizard = Wizard::new(self.steps.clone(), today).with_session_minutes(session_minutes);
        match self.preselected() {
            Some(provider) => wizard.with_provider(provider),
            None => wizard,
        }
    }

    fn validate(&self) -> Result<(), CoreError> {
        let slug_ok = !self.slug.is_empty()
            && self
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !slug_ok {
            return Err(CoreError::Journey(format!("invalid slug '{}'", self.slug)));
        }

        if !is_hex_colour(&self.accent) {
            return Err(CoreError::Journey(format!(
                "journey '{}' has invalid accent '{}'",
                self.slug, self.accent
            )));
        }

        if let Some(id) = &self.preselected_provider {
            if find_provider(id).is_none() {
                return Err(CoreError::Journey(format!(
                    "journey '{}' preselects unknown provider '{}'",
                    self.slug, id
                )));
            }
        }

        if let Some(path) = &self.entry_path {
            if !path.starts_with('/') {
                return Err(CoreError::Journey(format!(
                    "journey '{}' entry path '{}' must start with '/'",
                    self.slug, path
                )));
            }
        }
        Ok(())
    }
}

fn is_hex_colour(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// All configured journeys, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyCatalog {
    journeys: Vec<JourneyDescriptor>,
}

impl JourneyCatalog {
    pub fn new(journeys: Vec<JourneyDescriptor>) -> Result<Self, CoreError> {
        let catalog = Self { journeys };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn journeys(&self) -> &[JourneyDescriptor] {
        &self.journeys
    }

    pub fn find(&self, slug: &str) -> Option<&JourneyDescriptor> {
        self.journeys.iter().find(|j| j.slug == slug)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.journeys.is_empty() {
            return Err(CoreError::Journey("no journeys configured".to_string()));
        }
        let mut seen = HashSet::new();
        for journey in &self.journeys {
            journey.validate()?;
            if !seen.insert(journey.slug.as_str()) {
                return Err(CoreError::Journey(format!(
                    "duplicate journey slug '{}'",
                    journey.slug
                )));
            }
        }
        Ok(())
    }
}
