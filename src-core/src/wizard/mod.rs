//! The intake/booking wizard.
//!
//! A linear state machine over a journey's [`StepPlan`]:
//!
//! ```text
//! Location ──▶ Selection ──▶ Details ──▶ Confirmed
//!  (optional)   provider,      name,       terminal
//!               date, time     email
//! ```
//!
//! Each step may only be left forward once its required fields are filled;
//! stepping back never discards anything. `Confirmed` is left only through
//! [`Wizard::reset`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use scalehealth_core::catalog::find_provider;
//! use scalehealth_core::wizard::{CarePreference, StepPlan, Wizard};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let mut wizard = Wizard::new(StepPlan::full(), today);
//!
//! wizard.set_location("m5v 2h1");
//! wizard.choose_preference(CarePreference::Virtual);
//! assert!(wizard.advance());
//!
//! wizard.select_provider(find_provider("1").unwrap());
//! assert!(wizard.select_time("10:30 AM"));
//! assert!(wizard.advance());
//!
//! wizard.update_contact(|c| {
//!     c.name = "Jane Doe".to_string();
//!     c.email = "jane@example.com".to_string();
//! });
//! let confirmation = wizard.confirm().unwrap();
//! assert_eq!(confirmation.time_label, "10:30 AM");
//! ```

mod confirmation;
mod flow;
mod state;
mod step;

pub use confirmation::Confirmation;
pub use flow::{Wizard, MIN_LOCATION_LEN};
pub use state::{CarePreference, Contact, WizardState};
pub use step::{Step, StepPlan};
