//! Static booking data compiled into the binary.
//!
//! - **Providers**: six sample specialists with capability tags
//! - **Time slots**: twelve half-hour labels over a morning and an afternoon shift
//!
//! Neither list tracks availability; every slot is bookable with every provider.

mod providers;
mod slots;

pub use providers::{find_provider, Capability, ProviderRecord, PROVIDERS};
pub use slots::{find_time_slot, slot_time, TIME_SLOTS};
