//! Landing Page
//!
//! Entry view without the navbar.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_intake = {
        let navigate = navigate.clone();
        move |_| navigate("/intake", Default::default())
    };
    let go_login = {
        let navigate = navigate.clone();
        move |_| navigate("/login", Default::default())
    };
    let go_dashboard = move |_| navigate("/dashboard", Default::default());

    view! {
        <div class="landing-page">
            <div class="landing-hero">
                <h1>"AI Smart Triage"</h1>
                <p class="landing-tagline">
                    "Vitals-aware patient prioritization for busy clinics."
                </p>
                <div class="landing-actions">
                    <button class="primary-btn" on:click=go_intake>"Start Intake"</button>
                    <button class="secondary-btn" on:click=go_dashboard>"Hospital Dashboard"</button>
                    <button class="secondary-btn" on:click=go_login>"Staff Sign In"</button>
                </div>
            </div>
        </div>
    }
}
