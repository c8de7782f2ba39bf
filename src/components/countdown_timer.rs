use std::time::Duration;

use leptos::prelude::*;
use scalehealth_core::countdown::Countdown;
use tracing::warn;

#[component]
pub fn CountdownTimer(total_secs: u32) -> impl IntoView {
    let countdown = RwSignal::new(Countdown::new(total_secs));

    match set_interval_with_handle(
        move || countdown.update(|c| c.tick()),
        Duration::from_secs(1),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => warn!("Failed to start offer countdown"),
    }

    view! {
        <div class="countdown" class:expired=move || countdown.with(|c| c.is_expired())>
            <span class="countdown-label">"Offer ends in"</span>
            <span class="countdown-value">{move || countdown.with(|c| c.label())}</span>
        </div>
    }
}
