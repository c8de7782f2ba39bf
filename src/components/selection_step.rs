use chrono::NaiveDate;
use leptos::prelude::*;
use scalehealth_core::calendar::{iso_date, short_date};
use scalehealth_core::{ProviderRecord, Step, Wizard};

use crate::components::provider_card::ProviderCard;
use crate::components::time_slot_grid::TimeSlotGrid;

#[component]
pub fn SelectionStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let providers = move || wizard.with(|w| w.matching_providers());
    let selected_id = move || wizard.with(|w| w.state().selected_provider.map(|p| p.id));
    let min_date = wizard.with_untracked(|w| iso_date(w.opened_on()));
    // Concierge journeys skip the location step and offer a one-click booking.
    let concierge = wizard.with_untracked(|w| !w.plan().includes(Step::Location));

    let on_provider = Callback::new(move |provider: &'static ProviderRecord| {
        wizard.update(|w| w.select_provider(provider));
    });
    let on_time = Callback::new(move |slot: &'static str| {
        wizard.update(|w| {
            w.select_time(slot);
        });
    });
    let on_date = move |ev| {
        let value = event_target_value(&ev);
        if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            wizard.update(|w| {
                w.select_date(date);
            });
        }
    };
    let book_first_available = move |_| {
        wizard.update(|w| {
            w.first_available();
        });
    };

    view! {
        <div class="wizard-panel">
            <Show when=move || concierge>
                <div class="first-available">
                    <span>"In a hurry? Take the first opening tomorrow morning."</span>
                    <button type="button" class="btn btn-secondary" on:click=book_first_available>
                        "Book First Available"
                    </button>
                </div>
            </Show>

            <h3>"Choose a clinician"</h3>
            <div class="provider-list">
                <For
                    each=providers
                    key=|p| p.id
                    children=move |provider| {
                        let selected = Signal::derive(move || selected_id() == Some(provider.id));
                        view! { <ProviderCard provider=provider selected=selected on_select=on_provider /> }
                    }
                />
            </div>

            <h3>"Pick a date and time"</h3>
            <div class="form-group">
                <label for="visit-date">"Date"</label>
                <input
                    id="visit-date"
                    type="date"
                    class="input"
                    min=min_date
                    prop:value=move || wizard.with(|w| iso_date(w.state().selected_date))
                    on:change=on_date
                />
                <span class="status-text">
                    {move || wizard.with(|w| short_date(w.state().selected_date))}
                </span>
            </div>
            <TimeSlotGrid
                selected=Signal::derive(move || wizard.with(|w| w.state().selected_time))
                on_select=on_time
            />
        </div>
    }
}
