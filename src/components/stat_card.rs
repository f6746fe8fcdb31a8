//! Stat Card Component

use leptos::prelude::*;

/// Single metric tile for the dashboard headers.
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {accent}")>
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
