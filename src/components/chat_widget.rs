use leptos::prelude::*;
use scalehealth_core::chat::{ChatRules, ChatSession, Sender};
use scalehealth_core::AppConfig;

use crate::timers::{millis, PendingTimer};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let rules = expect_context::<ChatRules>();
    let typing_delay = millis(expect_context::<AppConfig>().typing_delay_ms);
    let session = RwSignal::new(ChatSession::new(rules));
    let reply_timer = PendingTimer::new();
    let (open, set_open) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let send = move || {
        if session.with_untracked(|s| s.is_typing()) {
            return;
        }
        let text = draft.get_untracked();
        let mut reply = None;
        session.update(|s| reply = s.send(&text));
        if let Some(reply) = reply {
            set_draft.set(String::new());
            reply_timer.start(typing_delay, move || session.update(|s| s.deliver(reply)));
        }
    };

    view! {
        <div class="chat-widget">
            <style>{include_str!("chat_widget.css")}</style>
            <Show
                when=move || open.get()
                fallback=move || {
                    view! {
                        <button class="chat-launcher" on:click=move |_| set_open.set(true)>
                            "\u{1f4ac} Questions?"
                        </button>
                    }
                }
            >
                <div class="chat-panel">
                    <div class="chat-header">
                        <span>"Scale Health Assistant"</span>
                        <button class="chat-close" on:click=move |_| set_open.set(false)>
                            "\u{00d7}"
                        </button>
                    </div>
                    <div class="chat-messages">
                        <For
                            each=move || session.with(|s| s.messages().to_vec())
                            key=|m| m.id
                            children=|message| {
                                let class = match message.sender {
                                    Sender::User => "chat-message chat-user",
                                    Sender::Bot => "chat-message chat-bot",
                                };
                                view! { <div class=class>{message.text}</div> }
                            }
                        />
                        <Show when=move || session.with(|s| s.is_typing())>
                            <div class="chat-message chat-bot chat-typing">"Typing..."</div>
                        </Show>
                    </div>
                    <form
                        class="chat-input-row"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <input
                            type="text"
                            class="input"
                            placeholder="Ask about booking, pricing..."
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || session.with(|s| s.is_typing())
                        >
                            "Send"
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
