//! Transient success/error notice.

use leptos::prelude::*;

use crate::state::form::{Notice, NoticeKind};

/// How long a notice stays up before it dismisses itself.
pub const TOAST_VISIBLE_MS: u64 = 4_000;

/// Renders the current notice and dismisses it after [`TOAST_VISIBLE_MS`].
///
/// `on_dismiss` receives the notice's sequence number; a newer notice shown
/// in the meantime is left alone by the owning form state.
#[component]
pub fn Toast(#[prop(into)] notice: Signal<Option<Notice>>, on_dismiss: Callback<u64>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_effect = alive.clone();
        Effect::new(move || {
            let Some(seq) = notice.with(|n| n.as_ref().map(|n| n.seq)) else {
                return;
            };
            let alive_task = alive_effect.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_VISIBLE_MS)).await;
                if alive_task.load(Ordering::Relaxed) {
                    on_dismiss.run(seq);
                }
            });
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        {move || {
            notice
                .get()
                .map(|n| {
                    let class = match n.kind {
                        NoticeKind::Success => "toast toast--success",
                        NoticeKind::Error => "toast toast--error",
                    };
                    let seq = n.seq;
                    view! {
                        <div class=class role="status">
                            <span class="toast__text">{n.text}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| on_dismiss.run(seq)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
