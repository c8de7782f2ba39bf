use leptos::ev;
use leptos::prelude::*;
use scalehealth_core::capture::{CapturePhase, ExitCapture};
use scalehealth_core::AppConfig;
use tracing::info;

use crate::timers::{millis, PendingTimer};

/// Email capture shown once when the pointer leaves through the top of the
/// window.
#[component]
pub fn ExitCaptureModal(#[prop(into)] offer: String) -> impl IntoView {
    let submit_delay = millis(expect_context::<AppConfig>().capture_delay_ms);
    let capture = RwSignal::new(ExitCapture::new());
    let submit_timer = PendingTimer::new();

    let listener = window_event_listener(ev::mouseout, move |ev| {
        if ev.related_target().is_some() {
            return;
        }
        let mut opened = false;
        capture.update(|c| opened = c.pointer_left(ev.client_y()));
        if opened {
            info!("Exit capture shown");
        }
    });
    on_cleanup(move || listener.remove());

    let phase = move || capture.with(|c| c.phase());
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        capture.update(|c| started = c.submit());
        if started {
            submit_timer.start(submit_delay, move || capture.update(|c| c.complete()));
        }
    };

    view! {
        <Show when=move || capture.with(|c| c.is_open())>
            <div class="modal-backdrop">
                <style>{include_str!("exit_capture_modal.css")}</style>
                <div class="modal exit-capture">
                    <button class="modal-close" on:click=move |_| capture.update(|c| c.dismiss())>
                        "\u{00d7}"
                    </button>
                    {
                        let offer = offer.clone();
                        move || match phase() {
                            CapturePhase::Success => view! {
                                <div class="exit-capture-success">
                                    <h3>"You're on the list!"</h3>
                                    <p>"Check your inbox for your offer code."</p>
                                </div>
                            }
                            .into_any(),
                            _ => view! {
                                <h3>"Before you go..."</h3>
                                <p class="section-description">{offer.clone()}</p>
                                <form class="input-row" on:submit=on_submit>
                                    <input
                                        type="email"
                                        class="input"
                                        placeholder="you@example.com"
                                        prop:value=move || capture.with(|c| c.email().to_string())
                                        on:input=move |ev| {
                                            let email = event_target_value(&ev);
                                            capture.update(|c| c.set_email(&email));
                                        }
                                    />
                                    <button
                                        type="submit"
                                        class="btn btn-primary"
                                        disabled=move || phase() == CapturePhase::Submitting
                                    >
                                        {move || {
                                            if phase() == CapturePhase::Submitting {
                                                "Sending..."
                                            } else {
                                                "Send My Offer"
                                            }
                                        }}
                                    </button>
                                </form>
                            }
                            .into_any(),
                        }
                    }
                </div>
            </div>
        </Show>
    }
}
