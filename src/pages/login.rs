use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use scalehealth_core::auth::redirect_target;
use scalehealth_core::LoginForm;

use crate::session::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let navigate = use_navigate();
    let target = move || redirect_target(query.with(|q| q.get("from")).as_deref());

    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = false;
        form.update(|f| accepted = f.submit(|code| auth.login(code)));
        if accepted {
            navigate(
                &target(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    };

    // Already signed in: skip the form.
    if auth.is_authenticated() {
        return view! { <Redirect path=target() /> }.into_any();
    }

    view! {
        <div class="page login-page">
            <style>{include_str!("login.css")}</style>
            <form class="login-card" on:submit=on_submit>
                <h2>"Scale Health"</h2>
                <p class="page-description">"Enter the access code to preview the care journeys."</p>
                <div class="form-group">
                    <label for="access-code">"Access code"</label>
                    <input
                        id="access-code"
                        type="password"
                        class="input"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.code().to_string())
                        on:input=move |ev| {
                            let code = event_target_value(&ev);
                            form.update(|f| f.input(&code));
                        }
                    />
                </div>
                <Show when=move || form.with(|f| f.error().is_some())>
                    <p class="error-text">
                        {move || form.with(|f| f.error().unwrap_or_default().to_string())}
                    </p>
                </Show>
                <button type="submit" class="btn btn-primary">"Sign In"</button>
            </form>
        </div>
    }
    .into_any()
}
