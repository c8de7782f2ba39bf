use leptos::prelude::*;

use crate::session::use_auth;

#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <SiteHeader />
            <main class="content">{children()}</main>
            <footer class="site-footer">
                <p>"Scale Health \u{00b7} Clinical care, coordinated."</p>
                <p class="site-footer-note">"Prototype. No bookings are transmitted."</p>
            </footer>
        </div>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    let auth = use_auth();

    // Guarded routes react to the auth signal and redirect to /login.
    let logout = move |_| auth.logout();

    view! {
        <header class="site-header">
            <a href="/" class="site-brand">
                <span class="site-title">"Scale Health"</span>
                <span class="site-subtitle">"Care Journeys"</span>
            </a>
            <Show when=move || auth.is_authenticated()>
                <nav class="nav-list">
                    <a href="/" class="nav-link">"Portal"</a>
                    <a href="/w/intake" class="nav-link">"Book a Visit"</a>
                    <button class="btn btn-secondary nav-logout" on:click=logout>
                        "Sign out"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
