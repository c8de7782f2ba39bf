use leptos::prelude::*;
use scalehealth_core::PortalStatus;

#[component]
pub fn StatusBadge(status: PortalStatus) -> impl IntoView {
    let (icon, class) = match status {
        PortalStatus::Live => ("\u{25cf}", "status-badge status-live"),
        PortalStatus::Draft => ("\u{25cb}", "status-badge status-draft"),
    };

    view! {
        <span class=class>
            <span class="status-icon">{icon}</span>
            {status.label()}
        </span>
    }
}
