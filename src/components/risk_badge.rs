//! Risk Badge Component

use leptos::prelude::*;

use crate::models::RiskLevel;

/// Colored pill for the backend-computed risk level.
#[component]
pub fn RiskBadge(level: RiskLevel) -> impl IntoView {
    view! {
        <span class=format!("risk-badge {}", level.css_class())>{level.label()}</span>
    }
}
