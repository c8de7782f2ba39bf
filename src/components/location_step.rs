use leptos::prelude::*;
use scalehealth_core::{CarePreference, Wizard};

#[component]
pub fn LocationStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let preferences = CarePreference::ALL
        .iter()
        .map(|&pref| {
            view! {
                <button
                    type="button"
                    class="preference-option"
                    class:selected=move || wizard.with(|w| w.state().care_preference == Some(pref))
                    on:click=move |_| wizard.update(|w| w.choose_preference(pref))
                >
                    {pref.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="wizard-panel">
            <h3>"Where are you located?"</h3>
            <p class="section-description">
                "We'll match you with clinicians who serve your area."
            </p>
            <div class="form-group">
                <label for="postal-code">"Postal code"</label>
                <input
                    id="postal-code"
                    type="text"
                    class="input"
                    placeholder="M5V 2H1"
                    autocomplete="postal-code"
                    prop:value=move || wizard.with(|w| w.state().location.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        wizard.update(|w| w.set_location(&text));
                    }
                />
            </div>
            <div class="form-group">
                <label>"How would you like to be seen?"</label>
                <div class="preference-options">{preferences}</div>
            </div>
        </div>
    }
}
