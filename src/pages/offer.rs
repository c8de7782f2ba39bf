use leptos::prelude::*;
use scalehealth_core::AppConfig;

use crate::components::countdown_timer::CountdownTimer;

/// Partner offer that funnels into the Scale Health landing page.
#[component]
pub fn OfferPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    view! {
        <div class="page offer-page">
            <style>{include_str!("offer.css")}</style>
            <div class="offer-card">
                <span class="offer-badge">"Exclusive Partner Offer"</span>
                <h2>"Your first assessment, on us"</h2>
                <p class="page-description">
                    "Members of our partner network get a complimentary 30-minute assessment with a Scale Health clinician, in clinic or by video."
                </p>
                <CountdownTimer total_secs=config.offer_countdown_secs />
                <ul class="offer-perks">
                    <li>"Physiotherapy, chiropractic, massage and naturopathy"</li>
                    <li>"Same-week availability"</li>
                    <li>"Direct billing to most insurers"</li>
                </ul>
                <a href="/w/scale-health" class="btn btn-primary btn-large">"Claim My Free Assessment"</a>
            </div>
        </div>
    }
}
