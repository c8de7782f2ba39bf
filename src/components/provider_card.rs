use leptos::prelude::*;
use scalehealth_core::ProviderRecord;

#[component]
pub fn ProviderCard(
    provider: &'static ProviderRecord,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_select: Callback<&'static ProviderRecord>,
) -> impl IntoView {
    let modes = provider
        .capabilities
        .iter()
        .map(|c| view! { <span class="provider-mode">{c.label()}</span> })
        .collect_view();

    view! {
        <button
            type="button"
            class="provider-card"
            class:selected=move || selected.get()
            on:click=move |_| on_select.run(provider)
        >
            <img class="provider-photo" src=provider.image alt=provider.name />
            <div class="provider-body">
                <div class="provider-card-header">
                    <span class="provider-name">{provider.name}</span>
                    <span class="provider-rating">
                        "\u{2605} "{provider.rating_label()}
                        <span class="provider-reviews">" ("{provider.reviews}")"</span>
                    </span>
                </div>
                <span class="provider-category">{provider.category}</span>
                <p class="provider-blurb">{provider.blurb}</p>
                <div class="provider-modes">{modes}</div>
            </div>
        </button>
    }
}
