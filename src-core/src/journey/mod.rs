//! Journey descriptors: one per branded landing page.
//!
//! Every landing page renders the same wizard; a [`JourneyDescriptor`] only
//! chooses copy, imagery, accent colour, enabled steps, and which side
//! widgets appear.
//!
//! - `default_journeys()` - descriptors embedded in the binary
//! - `load_journeys(path)` - descriptors from a TOML file

mod descriptor;
mod loader;

pub use descriptor::{Highlight, JourneyCatalog, JourneyDescriptor, PortalStatus};
pub use loader::{default_journeys, load_journeys, parse_journeys};
