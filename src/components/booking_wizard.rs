use leptos::prelude::*;
use scalehealth_core::{AppConfig, Step, Wizard};

use crate::clock::today;
use crate::components::confirmation_card::ConfirmationCard;
use crate::components::details_step::DetailsStep;
use crate::components::location_step::LocationStep;
use crate::components::selection_step::SelectionStep;
use crate::timers::{millis, PendingTimer};

/// The intake and booking flow. Field state lives in the [`Wizard`]; this
/// component renders the active step and the back/next controls, and holds
/// the simulated booking delay before the confirmation appears.
#[component]
pub fn BookingWizard(
    wizard: RwSignal<Wizard>,
    #[prop(into)] confirmation_heading: String,
    #[prop(optional)] allow_rebook: bool,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let booking_delay = millis(config.booking_delay_ms);
    let booking = PendingTimer::new();
    let (submitting, set_submitting) = signal(false);

    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let progress = move || {
        wizard
            .with(|w| w.plan().progress_label(w.step()))
            .unwrap_or_default()
    };
    let at_start = move || wizard.with(|w| w.plan().index_of(w.step()) == Some(0));
    let can_advance = move || wizard.with(|w| w.can_advance());

    let on_back = move |_| {
        booking.cancel();
        set_submitting.set(false);
        wizard.update(|w| {
            w.retreat();
        });
    };
    let on_next = move |_| {
        if step.get_untracked() != Step::Details {
            wizard.update(|w| {
                w.advance();
            });
            return;
        }
        if !wizard.with_untracked(|w| w.can_advance()) {
            return;
        }
        set_submitting.set(true);
        // confirm() only acts on the details step, so a late timer can't move
        // the wizard anywhere else.
        booking.start(booking_delay, move || {
            wizard.update(|w| {
                w.confirm();
            });
            set_submitting.set(false);
        });
    };

    let on_rebook = allow_rebook.then(|| {
        Callback::new(move |_: ()| {
            wizard.update(|w| w.reset(today()));
        })
    });

    let body = move || match step.get() {
        Step::Location => view! { <LocationStep wizard=wizard /> }.into_any(),
        Step::Selection => view! { <SelectionStep wizard=wizard /> }.into_any(),
        Step::Details => view! { <DetailsStep wizard=wizard /> }.into_any(),
        Step::Confirmed => match wizard.with_untracked(|w| w.confirmation()) {
            Some(confirmation) => view! {
                <ConfirmationCard
                    confirmation=confirmation
                    heading=confirmation_heading.clone()
                    on_rebook=on_rebook
                />
            }
            .into_any(),
            None => ().into_any(),
        },
    };

    view! {
        <div class="booking-wizard">
            <style>{include_str!("booking_wizard.css")}</style>
            <Show when=move || step.get() != Step::Confirmed>
                <div class="wizard-progress">
                    <span class="wizard-progress-label">{progress}</span>
                    <span class="wizard-step-title">{move || step.get().title()}</span>
                </div>
            </Show>

            {body}

            <Show when=move || step.get() != Step::Confirmed>
                <div class="wizard-actions">
                    <Show when=move || !at_start() && !submitting.get()>
                        <button type="button" class="btn btn-secondary" on:click=on_back>
                            "Back"
                        </button>
                    </Show>
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled=move || !can_advance() || submitting.get()
                        on:click=on_next
                    >
                        {move || match (step.get(), submitting.get()) {
                            (_, true) => "Booking...",
                            (Step::Details, false) => "Confirm Booking",
                            _ => "Continue",
                        }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
