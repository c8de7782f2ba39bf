use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Capability, ProviderRecord};

/// How the patient wants to be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarePreference {
    Virtual,
    InPerson,
    Either,
}

impl CarePreference {
    pub const ALL: [CarePreference; 3] = [
        CarePreference::Virtual,
        CarePreference::InPerson,
        CarePreference::Either,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CarePreference::Virtual => "Virtual Care",
            CarePreference::InPerson => "In-Person",
            CarePreference::Either => "Either",
        }
    }

    /// Whether a provider can serve this preference.
    pub fn accepts(&self, provider: &ProviderRecord) -> bool {
        match self {
            CarePreference::Virtual => provider.supports(Capability::Virtual),
            CarePreference::InPerson => provider.supports(Capability::InPerson),
            CarePreference::Either => true,
        }
    }
}

/// Contact fields collected on the details step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Opt-in for SMS reminders (defaults on)
    pub sms_reminder: bool,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: None,
            sms_reminder: true,
        }
    }
}

impl Contact {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Every field the wizard accumulates. Lives only as long as the component
/// that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    /// Postal code or city, upper-cased as typed
    pub location: String,
    pub care_preference: Option<CarePreference>,
    pub selected_provider: Option<&'static ProviderRecord>,
    pub selected_date: NaiveDate,
    pub selected_time: Option<&'static str>,
    pub contact: Contact,
}

impl WizardState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            location: String::new(),
            care_preference: None,
            selected_provider: None,
            selected_date: today,
            selected_time: None,
            contact: Contact::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_provider;

    #[test]
    fn test_contact_requires_name_and_email() {
        let mut contact = Contact::default();
        assert!(!contact.is_complete());
        contact.name = "Jane Doe".to_string();
        assert!(!contact.is_complete());
        contact.email = "   ".to_string();
        assert!(!contact.is_complete());
        contact.email = "jane@example.com".to_string();
        assert!(contact.is_complete());
    }

    #[test]
    fn test_sms_reminder_defaults_on() {
        assert!(Contact::default().sms_reminder);
    }

    #[test]
    fn test_preference_accepts() {
        let emma = find_provider("3").unwrap();
        let michael = find_provider("2").unwrap();
        assert!(CarePreference::Virtual.accepts(emma));
        assert!(!CarePreference::Virtual.accepts(michael));
        assert!(CarePreference::InPerson.accepts(michael));
        assert!(CarePreference::Either.accepts(emma));
        assert!(CarePreference::Either.accepts(michael));
    }

    #[test]
    fn test_preference_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            pref: CarePreference,
        }
        let w: Wrapper = toml::from_str("pref = \"in-person\"").unwrap();
        assert_eq!(w.pref, CarePreference::InPerson);
    }
}
