use chrono::{Datelike, NaiveDate};

/// English ordinal for a day of the month: 1st, 2nd, 3rd, 4th, 11th, 22nd.
pub fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

/// "October 17th, 2026"
pub fn long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), ordinal(date.day()), date.year())
}

/// "Saturday, October 17th"
pub fn short_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%A, %B"), ordinal(date.day()))
}

/// "2026-10-17", the value format of `<input type="date">`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [
            (1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"),
            (11, "11th"), (12, "12th"), (13, "13th"),
            (21, "21st"), (22, "22nd"), (23, "23rd"), (31, "31st"),
        ];
        for (day, expected) in cases {
            assert_eq!(ordinal(day), expected);
        }
    }

    #[test]
    fn test_long_and_short_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(long_date(date), "October 17th, 2026");
        assert_eq!(short_date(date), "Saturday, October 17th");
        assert_eq!(iso_date(date), "2026-10-17");
    }
}
