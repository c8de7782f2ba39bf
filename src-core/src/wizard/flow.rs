use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

use crate::catalog::{find_time_slot, slot_time, ProviderRecord, PROVIDERS};

use super::confirmation::Confirmation;
use super::state::{CarePreference, Contact, WizardState};
use super::step::{Step, StepPlan};

/// Shortest location accepted on the first step ("M5V" is enough).
pub const MIN_LOCATION_LEN: usize = 3;

const DEFAULT_SESSION_MINUTES: i64 = 30;

/// Slot the first-available shortcut books.
const FIRST_AVAILABLE_SLOT: &str = "09:00 AM";

/// The booking wizard: a step plan, a cursor into it, and the fields
/// collected so far.
///
/// Transitions return `bool` (or `Option`) instead of errors: an unmet guard
/// just means the presentation layer keeps its "next" button disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    plan: StepPlan,
    position: usize,
    state: WizardState,
    opened_on: NaiveDate,
    preselected: Option<&'static ProviderRecord>,
    session: Duration,
}

impl Wizard {
    /// Open a fresh wizard. `today` becomes the default and the earliest
    /// selectable date.
    pub fn new(plan: StepPlan, today: NaiveDate) -> Self {
        Self {
            plan,
            position: 0,
            state: WizardState::new(today),
            opened_on: today,
            preselected: None,
            session: Duration::minutes(DEFAULT_SESSION_MINUTES),
        }
    }

    /// Start with a provider already chosen; kept across [`Wizard::reset`].
    pub fn with_provider(mut self, provider: &'static ProviderRecord) -> Self {
        self.preselected = Some(provider);
        self.state.selected_provider = Some(provider);
        self
    }

    pub fn with_session_minutes(mut self, minutes: u32) -> Self {
        self.session = Duration::minutes(i64::from(minutes));
        self
    }

    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    pub fn step(&self) -> Step {
        // position never leaves the plan
        self.plan.get(self.position).unwrap_or(Step::Confirmed)
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn opened_on(&self) -> NaiveDate {
        self.opened_on
    }

    pub fn is_confirmed(&self) -> bool {
        self.step() == Step::Confirmed
    }

    /// Whether the fields a step requires are filled in.
    pub fn step_complete(&self, step: Step) -> bool {
        let s = &self.state;
        match step {
            Step::Location => {
                s.location.trim().chars().count() >= MIN_LOCATION_LEN && s.care_preference.is_some()
            }
            Step::Selection => s.selected_provider.is_some() && s.selected_time.is_some(),
            Step::Details => s.contact.is_complete(),
            Step::Confirmed => true,
        }
    }

    /// Guard for the "next" affordance: every step up to and including the
    /// current one must be complete.
    pub fn can_advance(&self) -> bool {
        !self.is_confirmed()
            && self.plan.steps()[..=self.position]
                .iter()
                .all(|step| self.step_complete(*step))
    }

    /// Move forward one step. On the details step this confirms the booking.
    pub fn advance(&mut self) -> bool {
        if self.step() == Step::Details {
            return self.confirm().is_some();
        }
        if !self.can_advance() {
            debug!("Advance blocked on {:?}", self.step());
            return false;
        }
        self.position += 1;
        info!("Wizard advanced to {:?}", self.step());
        true
    }

    /// Move back one step, keeping every field. Not possible from the first
    /// step or once confirmed.
    pub fn retreat(&mut self) -> bool {
        if self.position == 0 || self.is_confirmed() {
            return false;
        }
        self.position -= 1;
        info!("Wizard returned to {:?}", self.step());
        true
    }

    pub fn set_location(&mut self, text: &str) {
        if self.locked("location") {
            return;
        }
        self.state.location = text.to_uppercase();
    }

    pub fn choose_preference(&mut self, preference: CarePreference) {
        if self.locked("preference") {
            return;
        }
        self.state.care_preference = Some(preference);
    }

    pub fn select_provider(&mut self, provider: &'static ProviderRecord) {
        if self.locked("provider") {
            return;
        }
        self.state.selected_provider = Some(provider);
    }

    pub fn clear_provider(&mut self) {
        if self.locked("provider") {
            return;
        }
        self.state.selected_provider = None;
    }

    /// Pick a date. Dates before the day the wizard opened are refused.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if self.locked("date") {
            return false;
        }
        if date < self.opened_on {
            debug!("Refusing past date {} (opened {})", date, self.opened_on);
            return false;
        }
        self.state.selected_date = date;
        true
    }

    /// Pick a time slot by label. Labels outside
    /// [`TIME_SLOTS`](crate::catalog::TIME_SLOTS) are refused.
    pub fn select_time(&mut self, label: &str) -> bool {
        if self.locked("time") {
            return false;
        }
        match find_time_slot(label) {
            Some(slot) => {
                self.state.selected_time = Some(slot);
                true
            }
            None => {
                debug!("Refusing unknown time slot '{}'", label);
                false
            }
        }
    }

    pub fn update_contact(&mut self, edit: impl FnOnce(&mut Contact)) {
        if self.locked("contact") {
            return;
        }
        edit(&mut self.state.contact);
    }

    /// Book the next morning's first slot, with the best-matching provider
    /// unless one is already chosen, and move on to the details step.
    pub fn first_available(&mut self) -> bool {
        if self.step() != Step::Selection {
            return false;
        }
        let Some(tomorrow) = self.opened_on.succ_opt() else {
            return false;
        };
        if self.state.selected_provider.is_none() {
            self.state.selected_provider = self.matching_providers().first().copied();
        }
        self.state.selected_date = tomorrow;
        self.state.selected_time = Some(FIRST_AVAILABLE_SLOT);
        self.advance()
    }

    /// Finish the details step. Returns the summary on success; `None` when
    /// not on the details step or any earlier requirement is unmet.
    pub fn confirm(&mut self) -> Option<Confirmation> {
        if self.step() != Step::Details || !self.can_advance() {
            debug!("Confirm blocked on {:?}", self.step());
            return None;
        }
        let confirmation = self.summarize()?;
        self.position += 1;
        info!(
            "Booking confirmed with {} on {}",
            confirmation.provider.name,
            confirmation.headline()
        );
        Some(confirmation)
    }

    /// Summary of a confirmed booking.
    pub fn confirmation(&self) -> Option<Confirmation> {
        if !self.is_confirmed() {
            return None;
        }
        self.summarize()
    }

    /// "Book another": start over with empty fields, keeping the plan and
    /// any journey-level pre-selected provider.
    pub fn reset(&mut self, today: NaiveDate) {
        self.position = 0;
        self.opened_on = today;
        self.state = WizardState::new(today);
        self.state.selected_provider = self.preselected;
        info!("Wizard reset");
    }

    /// Providers that can serve the chosen preference, best rated first.
    pub fn matching_providers(&self) -> Vec<&'static ProviderRecord> {
        let mut matches: Vec<_> = PROVIDERS
            .iter()
            .filter(|p| self.state.care_preference.map_or(true, |pref| pref.accepts(p)))
            .collect();
        matches.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| b.reviews.cmp(&a.reviews))
        });
        matches
    }

    fn locked(&self, field: &str) -> bool {
        if self.is_confirmed() {
            debug!("Ignoring {} change after confirmation", field);
            return true;
        }
        false
    }

    fn summarize(&self) -> Option<Confirmation> {
        let s = &self.state;
        let provider = s.selected_provider?;
        let time_label = s.selected_time?;
        let start = s.selected_date.and_time(slot_time(time_label)?);
        Some(Confirmation {
            provider,
            date: s.selected_date,
            time_label,
            start,
            duration: self.session,
            care_preference: s.care_preference,
            location: s.location.clone(),
            contact: s.contact.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_provider;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn at_selection() -> Wizard {
        let mut w = Wizard::new(StepPlan::full(), today());
        w.set_location("M5V 2H1");
        w.choose_preference(CarePreference::Virtual);
        assert!(w.advance());
        w
    }

    #[test]
    fn test_new_wizard_defaults() {
        let w = Wizard::new(StepPlan::full(), today());
        assert_eq!(w.step(), Step::Location);
        assert_eq!(w.state().selected_date, today());
        assert!(w.state().selected_provider.is_none());
        assert!(!w.can_advance());
    }

    #[test]
    fn test_location_is_upper_cased() {
        let mut w = Wizard::new(StepPlan::full(), today());
        w.set_location("m5v 2h1");
        assert_eq!(w.state().location, "M5V 2H1");
    }

    #[test]
    fn test_short_location_blocks_advance() {
        let mut w = Wizard::new(StepPlan::full(), today());
        w.set_location("M5");
        w.choose_preference(CarePreference::Either);
        assert!(!w.advance());
        assert_eq!(w.step(), Step::Location);
    }

    #[test]
    fn test_retreat_on_first_step_is_noop() {
        let mut w = Wizard::new(StepPlan::full(), today());
        assert!(!w.retreat());
        assert_eq!(w.step(), Step::Location);
    }

    #[test]
    fn test_past_date_refused() {
        let mut w = at_selection();
        let yesterday = today().pred_opt().unwrap();
        assert!(!w.select_date(yesterday));
        assert_eq!(w.state().selected_date, today());

        let next_week = today() + Duration::days(7);
        assert!(w.select_date(next_week));
        assert_eq!(w.state().selected_date, next_week);
    }

    #[test]
    fn test_unknown_time_refused() {
        let mut w = at_selection();
        assert!(!w.select_time("12:15 PM"));
        assert!(w.state().selected_time.is_none());
        assert!(w.select_time("02:00 PM"));
        assert_eq!(w.state().selected_time, Some("02:00 PM"));
    }

    #[test]
    fn test_confirm_only_from_details() {
        let mut w = at_selection();
        assert!(w.confirm().is_none());
        assert_eq!(w.step(), Step::Selection);
    }

    #[test]
    fn test_matching_providers_filters_and_sorts() {
        let mut w = Wizard::new(StepPlan::full(), today());
        assert_eq!(w.matching_providers().len(), PROVIDERS.len());

        w.choose_preference(CarePreference::Virtual);
        let names: Vec<_> = w.matching_providers().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Emma Wilson, RMT", "Sarah Chen, PT", "David Kim, PT", "Lisa Patel, ND"]
        );

        w.choose_preference(CarePreference::InPerson);
        assert!(w
            .matching_providers()
            .iter()
            .all(|p| p.supports(crate::catalog::Capability::InPerson)));
    }

    #[test]
    fn test_first_available_books_tomorrow_morning() {
        let mut w = Wizard::new(StepPlan::concierge(), today());
        assert!(w.first_available());
        assert_eq!(w.step(), Step::Details);
        assert_eq!(w.state().selected_date, today().succ_opt().unwrap());
        assert_eq!(w.state().selected_time, Some("09:00 AM"));
        // No preference: best rated overall
        assert_eq!(w.state().selected_provider.map(|p| p.id), Some("3"));
    }

    #[test]
    fn test_first_available_keeps_chosen_provider() {
        let mut w = Wizard::new(StepPlan::concierge(), today());
        w.select_provider(find_provider("2").unwrap());
        assert!(w.first_available());
        assert_eq!(w.state().selected_provider.map(|p| p.id), Some("2"));
    }

    #[test]
    fn test_first_available_outside_selection_is_noop() {
        let mut w = Wizard::new(StepPlan::full(), today());
        assert!(!w.first_available());
        assert_eq!(w.step(), Step::Location);
    }

    #[test]
    fn test_preselected_provider_survives_reset() {
        let emma = find_provider("3").unwrap();
        let mut w = Wizard::new(StepPlan::concierge(), today()).with_provider(emma);
        w.clear_provider();
        assert!(w.state().selected_provider.is_none());

        let tomorrow = today().succ_opt().unwrap();
        w.reset(tomorrow);
        assert_eq!(w.state().selected_provider, Some(emma));
        assert_eq!(w.opened_on(), tomorrow);
    }

    #[test]
    fn test_session_length_sets_invite_end() {
        let mut w = Wizard::new(StepPlan::concierge(), today()).with_session_minutes(45);
        w.select_provider(find_provider("1").unwrap());
        w.select_time("11:30 AM");
        assert!(w.advance());
        w.update_contact(|c| {
            c.name = "Jane Doe".to_string();
            c.email = "jane@example.com".to_string();
        });
        let c = w.confirm().unwrap();
        assert_eq!(c.end() - c.start, Duration::minutes(45));
    }
}
