//! Date labels and the downloadable calendar invite.

mod format;
mod ics;

pub use format::{iso_date, long_date, ordinal, short_date};
pub use ics::{CalendarEvent, ICS_MIME_TYPE};
