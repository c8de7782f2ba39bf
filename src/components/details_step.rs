use leptos::prelude::*;
use scalehealth_core::Wizard;

#[component]
pub fn DetailsStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let contact = move || wizard.with(|w| w.state().contact.clone());

    view! {
        <div class="wizard-panel">
            <h3>"Your details"</h3>
            <p class="section-description">"We'll send your confirmation here."</p>
            <div class="form-group">
                <label for="contact-name">"Full name"</label>
                <input
                    id="contact-name"
                    type="text"
                    class="input"
                    autocomplete="name"
                    prop:value=move || contact().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.update(|w| w.update_contact(|c| c.name = value));
                    }
                />
            </div>
            <div class="form-group">
                <label for="contact-email">"Email"</label>
                <input
                    id="contact-email"
                    type="email"
                    class="input"
                    autocomplete="email"
                    prop:value=move || contact().email
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.update(|w| w.update_contact(|c| c.email = value));
                    }
                />
            </div>
            <div class="form-group">
                <label for="contact-phone">"Phone (optional)"</label>
                <input
                    id="contact-phone"
                    type="tel"
                    class="input"
                    autocomplete="tel"
                    prop:value=move || contact().phone.unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        let phone = (!value.trim().is_empty()).then_some(value);
                        wizard.update(|w| w.update_contact(|c| c.phone = phone));
                    }
                />
            </div>
            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || contact().sms_reminder
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        wizard.update(|w| w.update_contact(|c| c.sms_reminder = checked));
                    }
                />
                "Text me a reminder the day before"
            </label>
        </div>
    }
}
