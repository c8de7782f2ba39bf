use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h2>"Page not found"</h2>
            <p class="page-description">"That journey doesn't exist or has moved."</p>
            <a href="/" class="btn btn-primary">"Back to the Portal"</a>
        </div>
    }
}
