use leptos::prelude::*;
use scalehealth_core::{JourneyCatalog, JourneyDescriptor};

use crate::components::status_badge::StatusBadge;

#[component]
pub fn PortalPage() -> impl IntoView {
    let catalog = expect_context::<JourneyCatalog>();
    let cards = catalog
        .journeys()
        .iter()
        .cloned()
        .map(|journey| view! { <JourneyCard journey=journey /> })
        .collect_view();

    view! {
        <div class="page portal-page">
            <style>{include_str!("portal.css")}</style>
            <h2>"Workflow Portal"</h2>
            <p class="page-description">
                "Preview every patient journey. Live workflows are ready to share; drafts are still being built."
            </p>
            <div class="card-grid">{cards}</div>
            <div class="portal-footer">
                <a href="/w/intake" class="btn btn-secondary">"Open the Intake Wizard"</a>
            </div>
        </div>
    }
}

#[component]
fn JourneyCard(journey: JourneyDescriptor) -> impl IntoView {
    let launchable = journey.status.is_launchable();
    let launch = if launchable {
        view! { <a href=journey.launch_path() class="btn btn-primary">"Launch"</a> }.into_any()
    } else {
        view! { <button class="btn btn-primary" disabled=true>"Coming Soon"</button> }.into_any()
    };

    view! {
        <div class="card journey-card" style=format!("--card-accent: {}", journey.accent)>
            <div class="journey-card-header">
                <h3>{journey.portal_title.clone()}</h3>
                <StatusBadge status=journey.status />
            </div>
            <p>{journey.portal_description.clone()}</p>
            <span class="journey-path">{journey.path()}</span>
            {launch}
        </div>
    }
}
