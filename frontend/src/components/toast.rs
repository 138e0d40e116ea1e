use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::waitlist::controller::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    /// Changes with every posted notice, so an identical one restarts the timer.
    pub seq: u64,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |(_, notice): &(u64, Option<Notice>)| {
                let timeout = notice
                    .as_ref()
                    .and_then(|notice| notice.kind.duration_ms())
                    .map(|delay| Timeout::new(delay, move || on_dismiss.emit(())));
                // Dropping the timeout cancels it when the notice changes
                move || drop(timeout)
            },
            (props.seq, props.notice.clone()),
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Loading => "toast-loading",
        NoticeKind::Success => "toast-success",
        NoticeKind::Duplicate | NoticeKind::Invalid => "toast-error",
    };
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        top: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 0.9rem 1.4rem;
                        border-radius: 12px;
                        background: rgba(20, 20, 30, 0.95);
                        color: #fff;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                        z-index: 1000;
                    }
                    .toast-success { border: 1px solid rgba(52, 211, 153, 0.6); }
                    .toast-error { border: 1px solid rgba(248, 113, 113, 0.6); }
                    .toast-loading { border: 1px solid rgba(139, 92, 246, 0.6); }
                    .toast button {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        cursor: pointer;
                    }
                "#}
            </style>
            <span>{ &notice.message }</span>
            if notice.kind != NoticeKind::Loading {
                <button onclick={dismiss}>{ "✕" }</button>
            }
        </div>
    }
}
