use leptos::prelude::*;
use scalehealth_core::{AppConfig, StepPlan, Wizard};

use crate::clock::today;
use crate::components::booking_wizard::BookingWizard;

/// The booking wizard with no landing page around it.
#[component]
pub fn IntakePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let wizard = RwSignal::new(
        Wizard::new(StepPlan::full(), today()).with_session_minutes(config.session_minutes),
    );

    view! {
        <div class="page intake-page">
            <h2>"Book a Visit"</h2>
            <p class="page-description">"Tell us where you are and we'll find the right clinician."</p>
            <BookingWizard wizard=wizard confirmation_heading="Appointment Confirmed!" allow_rebook=true />
        </div>
    }
}
