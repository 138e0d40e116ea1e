use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::controller::{Phase, WaitlistController, WaitlistSettings};
use super::firestore::FirestoreStore;
use crate::components::toast::Toast;
use crate::config;

fn user_agent() -> Option<String> {
    web_sys::window().and_then(|window| window.navigator().user_agent().ok())
}

fn waitlist_settings() -> WaitlistSettings {
    WaitlistSettings {
        base_count: config::WAITLIST_BASE_COUNT,
        source: Some(config::WAITLIST_SOURCE.to_string()),
        client_context: user_agent(),
    }
}

#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let controller = use_state(|| {
        Rc::new(WaitlistController::new(
            Rc::new(FirestoreStore::from_config()),
            waitlist_settings(),
        ))
    });
    let snapshot = use_state(|| controller.snapshot());

    {
        let controller = (*controller).clone();
        let snapshot = snapshot.clone();
        use_mount(move || {
            controller.subscribe(move |next| snapshot.set(next));
            spawn_local(async move {
                let count = controller.load_initial_count().await;
                debug!("waitlist count loaded: {}", count);
            });
        });
    }

    let oninput = {
        let controller = (*controller).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.set_input(input.value());
        })
    };

    let onsubmit = {
        let controller = (*controller).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                let raw = controller.snapshot().input;
                let outcome = controller.submit(&raw).await;
                debug!("waitlist submission finished: {:?}", outcome);
            });
        })
    };

    let on_dismiss = {
        let controller = (*controller).clone();
        Callback::from(move |_| controller.dismiss_notice())
    };

    let submitting = snapshot.phase == Phase::Submitting;

    html! {
        <div id="waitlist-section" class="waitlist-form">
            <style>
                {r#"
                    .waitlist-form {
                        max-width: 480px;
                        margin-bottom: 2.5rem;
                    }
                    .waitlist-form form {
                        display: flex;
                        gap: 0.75rem;
                        flex-wrap: wrap;
                    }
                    .waitlist-form input {
                        flex: 1;
                        min-width: 220px;
                        padding: 0.9rem 1.2rem;
                        border-radius: 999px;
                        border: 1px solid rgba(139, 92, 246, 0.4);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        font-size: 1rem;
                    }
                    .waitlist-form button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .waitlist-count {
                        color: rgba(255, 255, 255, 0.6);
                        margin-top: 1rem;
                    }
                    .waitlist-count strong {
                        color: #fff;
                    }
                "#}
            </style>
            <Toast
                notice={snapshot.notice.clone()}
                seq={snapshot.notice_seq}
                on_dismiss={on_dismiss}
            />
            <form onsubmit={onsubmit}>
                <input
                    type="email"
                    placeholder="Enter your work email"
                    aria-label="Email address"
                    value={snapshot.input.clone()}
                    oninput={oninput}
                    disabled={submitting}
                />
                <button type="submit" class="btn-primary" disabled={submitting}>
                    { if submitting { "Joining..." } else { "Join Waitlist" } }
                </button>
            </form>
            <p class="waitlist-count">
                {"Join "}<strong>{ format!("{}+", snapshot.displayed_count) }</strong>{" others already on the waitlist"}
            </p>
        </div>
    }
}
