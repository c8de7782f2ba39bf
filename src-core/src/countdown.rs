/// Offer countdown shown on partner landing pages. Purely cosmetic: nothing
/// happens when it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u32,
}

impl Countdown {
    pub fn new(total_secs: u32) -> Self {
        Self {
            remaining_secs: total_secs,
        }
    }

    /// Advance by one second, stopping at zero.
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// "MM:SS"
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        assert_eq!(Countdown::new(300).label(), "05:00");
        assert_eq!(Countdown::new(61).label(), "01:01");
        assert_eq!(Countdown::new(0).label(), "00:00");
    }

    #[test]
    fn test_tick_saturates() {
        let mut c = Countdown::new(2);
        c.tick();
        assert_eq!(c.label(), "00:01");
        c.tick();
        c.tick();
        assert!(c.is_expired());
        assert_eq!(c.remaining_secs(), 0);
    }
}
