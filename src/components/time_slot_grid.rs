use leptos::prelude::*;
use scalehealth_core::TIME_SLOTS;

#[component]
pub fn TimeSlotGrid(
    #[prop(into)] selected: Signal<Option<&'static str>>,
    #[prop(into)] on_select: Callback<&'static str>,
) -> impl IntoView {
    let slots = TIME_SLOTS
        .iter()
        .map(|slot| {
            let slot: &'static str = slot;
            view! {
                <button
                    type="button"
                    class="time-slot"
                    class:selected=move || selected.get() == Some(slot)
                    on:click=move |_| on_select.run(slot)
                >
                    {slot}
                </button>
            }
        })
        .collect_view();

    view! { <div class="time-slot-grid">{slots}</div> }
}
