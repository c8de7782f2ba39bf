use chrono::{DateTime, Local, NaiveDate, Utc};

/// The visitor's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
