use chrono::NaiveTime;

/// Bookable half-hour windows. Every label parses with `%I:%M %p`.
pub static TIME_SLOTS: &[&str] = &[
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM",
    "11:00 AM", "11:30 AM", "01:00 PM", "01:30 PM",
    "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM",
];

/// The catalog's own label for `label`, if it is a bookable slot.
pub fn find_time_slot(label: &str) -> Option<&'static str> {
    TIME_SLOTS.iter().copied().find(|slot| *slot == label)
}

/// Wall-clock start time for a slot label.
pub fn slot_time(label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(label, "%I:%M %p").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slots_parse() {
        for label in TIME_SLOTS {
            assert!(slot_time(label).is_some(), "slot '{}' should parse", label);
        }
    }

    #[test]
    fn test_slots_are_half_hour_steps_within_shifts() {
        let times: Vec<NaiveTime> = TIME_SLOTS.iter().filter_map(|l| slot_time(l)).collect();
        assert_eq!(times.len(), 12);
        for pair in times.windows(2) {
            let gap = (pair[1] - pair[0]).num_minutes();
            // 30 minutes inside a shift, 90 minutes across the lunch break
            assert!(gap == 30 || gap == 90, "unexpected gap of {} minutes", gap);
        }
    }

    #[test]
    fn test_afternoon_slot_is_pm() {
        assert_eq!(slot_time("01:30 PM"), NaiveTime::from_hms_opt(13, 30, 0));
    }

    #[test]
    fn test_find_time_slot_returns_catalog_label() {
        let owned = String::from("10:30 AM");
        assert_eq!(find_time_slot(&owned), Some("10:30 AM"));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(find_time_slot("12:00 PM"), None);
        assert!(slot_time("noon").is_none());
    }
}
