use chrono::{DateTime, NaiveDateTime, Utc};

pub const ICS_MIME_TYPE: &str = "text/calendar";

const PRODUCT_ID: &str = "-//Scale Health//Booking Prototype//EN";
const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
/// RFC 5545 content lines are limited to 75 octets before folding.
const MAX_LINE_OCTETS: usize = 75;

/// A single appointment rendered as a `VEVENT`.
///
/// Start and end are floating local times: the invite lands at the same
/// wall-clock time in whatever zone the patient imports it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub uid: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub summary: String,
    pub description: String,
    pub location: String,
}

impl CalendarEvent {
    /// Render a complete `VCALENDAR` document with CRLF line endings.
    pub fn to_ics(&self, stamp: DateTime<Utc>) -> String {
        let lines = [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{}", PRODUCT_ID),
            "CALSCALE:GREGORIAN".to_string(),
            "METHOD:PUBLISH".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", self.uid),
            format!("DTSTAMP:{}", stamp.format("%Y%m%dT%H%M%SZ")),
            format!("DTSTART:{}", self.start.format(LOCAL_FORMAT)),
            format!("DTEND:{}", self.end.format(LOCAL_FORMAT)),
            format!("SUMMARY:{}", escape_text(&self.summary)),
            format!("DESCRIPTION:{}", escape_text(&self.description)),
            format!("LOCATION:{}", escape_text(&self.location)),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ];

        let mut out = String::new();
        for line in &lines {
            out.push_str(&fold_line(line));
            out.push_str("\r\n");
        }
        out
    }
}

fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Split a content line into 75-octet chunks joined by CRLF + space,
/// never cutting a UTF-8 sequence.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current = 0;
    // Continuation lines spend one octet on the leading space.
    let mut limit = MAX_LINE_OCTETS;
    for c in line.chars() {
        let width = c.len_utf8();
        if current + width > limit {
            folded.push_str("\r\n ");
            current = 0;
            limit = MAX_LINE_OCTETS - 1;
        }
        folded.push(c);
        current += width;
    }
    folded
}
