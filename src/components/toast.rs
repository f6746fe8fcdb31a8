//! Toast Component
//!
//! Non-blocking notice with auto-dismiss. Failures never block the
//! page; they surface here and fade.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

const DISMISS_AFTER_MS: u32 = 2500;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Generation counter so an older timer cannot eat a newer toast.
    let (generation, set_generation) = signal(0u32);

    Effect::new(move |_| {
        if ctx.toast.get().is_some() {
            let current = generation.get_untracked() + 1;
            set_generation.set(current);
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                if generation.get_untracked() == current {
                    ctx.clear_toast();
                }
            });
        }
    });

    view! {
        {move || ctx.toast.get().map(|message| view! {
            <div class="toast" on:click=move |_| ctx.clear_toast()>
                {message}
            </div>
        })}
    }
}
