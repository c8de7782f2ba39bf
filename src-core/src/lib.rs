//! Booking logic for the Scale Health prototype.
//!
//! Everything with state lives here so it can be tested on the host; the
//! Leptos frontend only renders what these types say.

pub mod auth;
pub mod calendar;
pub mod capture;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod countdown;
pub mod error;
pub mod journey;
pub mod wizard;

pub use auth::{AuthContext, LoginForm, MemorySession, SessionStore};
pub use catalog::{Capability, ProviderRecord, PROVIDERS, TIME_SLOTS};
pub use config::AppConfig;
pub use error::CoreError;
pub use journey::{JourneyCatalog, JourneyDescriptor, PortalStatus};
pub use wizard::{CarePreference, Confirmation, Contact, Step, StepPlan, Wizard, WizardState};
