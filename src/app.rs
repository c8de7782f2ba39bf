use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;
use scalehealth_core::auth::{login_url, requested_path};
use scalehealth_core::chat::default_chat_rules;
use scalehealth_core::config::default_config;
use scalehealth_core::journey::default_journeys;
use scalehealth_core::AppConfig;
use tracing::info;

use crate::components::site_layout::SiteLayout;
use crate::pages::intake::IntakePage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::offer::OfferPage;
use crate::pages::portal::PortalPage;
use crate::session::{use_auth, AuthHandle};

#[component]
pub fn App() -> impl IntoView {
    let config = default_config();
    let auth = AuthHandle::init(&config.access_code);
    info!(
        "Scale Health starting (login required: {}, authenticated: {})",
        config.require_login,
        auth.is_authenticated()
    );

    provide_context(auth);
    provide_context(config);
    provide_context(default_journeys());
    provide_context(default_chat_rules());

    view! {
        <Router>
            <SiteLayout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/") view=|| view! { <RequireAuth><PortalPage /></RequireAuth> } />
                    <Route
                        path=path!("/w/scale-health/offer")
                        view=|| view! { <RequireAuth><OfferPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/w/scale-health/landing")
                        view=|| view! { <Redirect path="/w/scale-health" /> }
                    />
                    <Route path=path!("/scale-health") view=|| view! { <Redirect path="/w/scale-health" /> } />
                    <Route path=path!("/w/intake") view=|| view! { <RequireAuth><IntakePage /></RequireAuth> } />
                    <Route path=path!("/w/:slug") view=|| view! { <RequireAuth><LandingPage /></RequireAuth> } />
                </Routes>
            </SiteLayout>
        </Router>
    }
}

/// Renders `children` only for authenticated visitors when the access gate
/// is on; everyone else is sent to the login page with the path they asked
/// for.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let require_login = expect_context::<AppConfig>().require_login;
    let location = use_location();

    move || {
        if !require_login || auth.is_authenticated() {
            children().into_any()
        } else {
            let requested = requested_path(
                &location.pathname.get_untracked(),
                &location.search.get_untracked(),
            );
            let target = login_url(&requested);
            view! { <Redirect path=target /> }.into_any()
        }
    }
}
