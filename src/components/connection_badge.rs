//! Connection Badge Component
//!
//! Push-channel health indicator for the live queue view.

use leptos::prelude::*;
use queue_sync::LinkStatus;

#[component]
pub fn ConnectionBadge(#[prop(into)] status: Signal<LinkStatus>) -> impl IntoView {
    let text = move || match status.get() {
        LinkStatus::Connecting => "Connecting...",
        LinkStatus::Live => "Live Updates",
        LinkStatus::Reconnecting => "Reconnecting...",
        LinkStatus::Offline => "Offline - polling",
    };
    let class = move || match status.get() {
        LinkStatus::Live => "status-indicator online",
        LinkStatus::Offline => "status-indicator offline",
        _ => "status-indicator degraded",
    };

    view! {
        <div class=class>
            <span class="status-dot"></span>
            {text}
        </div>
    }
}
