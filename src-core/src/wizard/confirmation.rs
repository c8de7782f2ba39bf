use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::calendar::{iso_date, long_date, short_date, CalendarEvent};
use crate::catalog::{Capability, ProviderRecord};

use super::state::{CarePreference, Contact};

/// Read-only summary of a confirmed booking. Nothing backs it: it exists to
/// be displayed and, optionally, exported as a calendar invite.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub provider: &'static ProviderRecord,
    pub date: NaiveDate,
    pub time_label: &'static str,
    pub start: NaiveDateTime,
    pub duration: Duration,
    pub care_preference: Option<CarePreference>,
    pub location: String,
    pub contact: Contact,
}

impl Confirmation {
    /// "October 17th, 2026"
    pub fn long_date(&self) -> String {
        long_date(self.date)
    }

    /// "Saturday, October 17th"
    pub fn short_date(&self) -> String {
        short_date(self.date)
    }

    /// "October 17th, 2026 at 09:00 AM"
    pub fn headline(&self) -> String {
        format!("{} at {}", self.long_date(), self.time_label)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.start + self.duration
    }

    pub fn visit_mode(&self) -> &'static str {
        let is_virtual = match self.care_preference {
            Some(CarePreference::Virtual) => true,
            Some(CarePreference::InPerson) => false,
            Some(CarePreference::Either) | None => self.provider.supports(Capability::Virtual),
        };
        if is_virtual {
            "Video call"
        } else {
            "In clinic"
        }
    }

    pub fn calendar_event(&self) -> CalendarEvent {
        let mut description = format!(
            "{} session with {}. Booked for {} ({}).",
            self.provider.category, self.provider.name, self.contact.name, self.contact.email
        );
        if !self.location.is_empty() {
            description.push_str(&format!("\nNear {}.", self.location));
        }

        CalendarEvent {
            uid: format!(
                "{}-{}-{}@scalehealth.ca",
                self.date.format("%Y%m%d"),
                self.start.format("%H%M"),
                self.provider.id
            ),
            start: self.start,
            end: self.end(),
            summary: format!("Scale Health: session with {}", self.provider.name),
            description,
            location: self.visit_mode().to_string(),
        }
    }

    /// Calendar invite for this booking, stamped with the export time.
    pub fn to_ics(&self, stamp: DateTime<Utc>) -> String {
        self.calendar_event().to_ics(stamp)
    }

    pub fn file_name(&self) -> String {
        format!("scale-health-{}.ics", iso_date(self.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_provider;
    use chrono::{NaiveTime, TimeZone};

    fn sample(pref: Option<CarePreference>, provider_id: &str) -> Confirmation {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        Confirmation {
            provider: find_provider(provider_id).unwrap(),
            date,
            time_label: "01:30 PM",
            start: date.and_time(NaiveTime::from_hms_opt(13, 30, 0).unwrap()),
            duration: Duration::minutes(30),
            care_preference: pref,
            location: "M5V 2H1".to_string(),
            contact: Contact {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                ..Contact::default()
            },
        }
    }

    #[test]
    fn test_headline() {
        let c = sample(Some(CarePreference::Virtual), "1");
        assert_eq!(c.headline(), "October 17th, 2026 at 01:30 PM");
        assert_eq!(c.short_date(), "Saturday, October 17th");
        assert_eq!(c.file_name(), "scale-health-2026-10-17.ics");
    }

    #[test]
    fn test_visit_mode_follows_preference_then_provider() {
        assert_eq!(sample(Some(CarePreference::Virtual), "1").visit_mode(), "Video call");
        assert_eq!(sample(Some(CarePreference::InPerson), "1").visit_mode(), "In clinic");
        assert_eq!(sample(Some(CarePreference::Either), "2").visit_mode(), "In clinic");
        assert_eq!(sample(None, "3").visit_mode(), "Video call");
    }

    #[test]
    fn test_invite_covers_the_session() {
        let c = sample(Some(CarePreference::Virtual), "1");
        let stamp = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();
        let ics = c.to_ics(stamp);
        assert!(ics.contains("UID:20261017-1330-1@scalehealth.ca\r\n"));
        assert!(ics.contains("DTSTART:20261017T133000\r\n"));
        assert!(ics.contains("DTEND:20261017T140000\r\n"));
        assert!(ics.contains("LOCATION:Video call\r\n"));
        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains("Booked for Jane Doe (jane@example.com)."));
    }
}
