use leptos::prelude::*;
use scalehealth_core::calendar::ICS_MIME_TYPE;
use scalehealth_core::Confirmation;
use tracing::{info, warn};

use crate::clock::now_utc;
use crate::download::download_text;

#[component]
pub fn ConfirmationCard(
    confirmation: Confirmation,
    #[prop(into)] heading: String,
    /// Shown only when the journey lets visitors book again.
    #[prop(default = None)]
    on_rebook: Option<Callback<()>>,
) -> impl IntoView {
    let (status, set_status) = signal::<Option<String>>(None);

    let headline = confirmation.headline();
    let provider = confirmation.provider;
    let visit_mode = confirmation.visit_mode();
    let email = confirmation.contact.email.clone();
    let location = confirmation.location.clone();
    let has_location = !location.is_empty();
    let sms = confirmation.contact.sms_reminder && confirmation.contact.phone.is_some();

    let add_to_calendar = move |_| {
        let ics = confirmation.to_ics(now_utc());
        match download_text(&confirmation.file_name(), ICS_MIME_TYPE, &ics) {
            Ok(()) => {
                info!("Calendar invite downloaded");
                set_status.set(Some("Calendar invite downloaded".to_string()));
            }
            Err(e) => {
                warn!("Calendar download failed: {}", e);
                set_status.set(Some(format!("Could not create invite: {}", e)));
            }
        }
    };

    view! {
        <div class="confirmation-card">
            <div class="confirmation-icon">"\u{2713}"</div>
            <h3 class="confirmation-heading">{heading}</h3>
            <p class="confirmation-headline">{headline}</p>
            <dl class="confirmation-details">
                <dt>"Clinician"</dt>
                <dd>{provider.name}" \u{00b7} "{provider.category}</dd>
                <dt>"Visit"</dt>
                <dd>{visit_mode}</dd>
                <Show when=move || has_location>
                    <dt>"Location"</dt>
                    <dd>{location.clone()}</dd>
                </Show>
                <dt>"Confirmation sent to"</dt>
                <dd>{email}</dd>
            </dl>
            <Show when=move || sms>
                <p class="section-description">"We'll text you a reminder the day before."</p>
            </Show>
            <div class="confirmation-actions">
                <button class="btn btn-primary" on:click=add_to_calendar>
                    "Add to Calendar"
                </button>
                {on_rebook
                    .map(|rebook| {
                        view! {
                            <button class="btn btn-secondary" on:click=move |_| rebook.run(())>
                                "Book Another Appointment"
                            </button>
                        }
                    })}
            </div>
            <Show when=move || status.get().is_some()>
                <span class="status-text">{move || status.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
