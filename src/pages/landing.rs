use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use scalehealth_core::{AppConfig, JourneyCatalog, JourneyDescriptor};
use tracing::info;

use crate::clock::today;
use crate::components::booking_wizard::BookingWizard;
use crate::components::chat_widget::ChatWidget;
use crate::components::exit_capture_modal::ExitCaptureModal;
use crate::pages::not_found::NotFoundPage;
use crate::theme::{apply_brand, clear_brand};

/// `/w/:slug`: the branded landing page for one journey.
#[component]
pub fn LandingPage() -> impl IntoView {
    let catalog = expect_context::<JourneyCatalog>();
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug")).unwrap_or_default();

    move || match catalog.find(&slug()).cloned() {
        Some(journey) => view! { <JourneyLanding journey=journey /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn JourneyLanding(journey: JourneyDescriptor) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    info!("Opening journey {}", journey.slug);

    apply_brand(&journey.slug, &journey.accent);
    on_cleanup(clear_brand);

    let wizard = RwSignal::new(journey.new_wizard(today(), config.session_minutes));

    let highlights = journey
        .highlights
        .iter()
        .enumerate()
        .map(|(i, h)| {
            view! {
                <div class="step">
                    <span class="step-number">{i + 1}</span>
                    <div class="step-content">
                        <strong>{h.title.clone()}</strong>
                        <p>{h.description.clone()}</p>
                    </div>
                </div>
            }
        })
        .collect_view();
    let has_highlights = !journey.highlights.is_empty();
    let offer = format!(
        "Leave your email and we'll send a $25 credit toward your first {} visit.",
        journey.title
    );

    view! {
        <div class="page landing-page">
            <style>{include_str!("landing.css")}</style>
            <section class="hero">
                <div class="hero-copy">
                    <span class="hero-badge">{journey.badge.clone()}</span>
                    <h2 class="hero-heading">{journey.hero_heading.clone()}</h2>
                    <p class="hero-tagline">{journey.tagline.clone()}</p>
                    <p class="page-description">{journey.hero_body.clone()}</p>
                </div>
                <img class="hero-image" src=journey.hero_image.clone() alt=journey.title.clone() />
            </section>

            {has_highlights
                .then(|| {
                    view! {
                        <section class="how-it-works">
                            <h3>"How It Works"</h3>
                            <div class="steps">{highlights}</div>
                        </section>
                    }
                })}

            <section class="booking-section">
                <BookingWizard
                    wizard=wizard
                    confirmation_heading=journey.confirmation_heading.clone()
                    allow_rebook=journey.allow_rebook
                />
            </section>

            {journey.show_chat.then(|| view! { <ChatWidget /> })}
            {journey.exit_capture.then(|| view! { <ExitCaptureModal offer=offer /> })}
        </div>
    }
}
