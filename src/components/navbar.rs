//! Navbar Component
//!
//! Top navigation with active-route highlight, a shortcut to the
//! signed-in role's dashboard, and logout.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::AppContext;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/intake", "Patient Intake"),
    ("/dashboard", "Dashboard"),
    ("/doctors", "Doctors"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let location = use_location();
    let navigate = use_navigate();

    let is_active = move |path: &str| location.pathname.get() == path;

    let nav_buttons = NAV_ITEMS
        .iter()
        .map(|(path, label)| {
            let navigate = navigate.clone();
            let path = *path;
            view! {
                <button
                    class=move || {
                        if is_active(path) { "nav-item nav-item-active" } else { "nav-item" }
                    }
                    on:click=move |_| navigate(path, Default::default())
                >
                    {*label}
                </button>
            }
        })
        .collect_view();

    let dash_navigate = navigate.clone();
    let logout_navigate = navigate.clone();
    let on_logout = move |_| {
        ctx.sign_out();
        logout_navigate("/login", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <div class="navbar-logo">
                    <span class="logo-title">"AI Smart Triage"</span>
                    <span class="logo-subtitle">"Healthcare Intelligence"</span>
                </div>

                <div class="navbar-menu">
                    {nav_buttons}
                    {move || match ctx.session.get() {
                        Some(session) => {
                            let dash = session.role.dashboard_path();
                            let go = {
                                let navigate = dash_navigate.clone();
                                move |_| navigate(dash, Default::default())
                            };
                            let logout = on_logout.clone();
                            view! {
                                <button
                                    class=move || {
                                        if is_active(dash) { "nav-item nav-item-active" } else { "nav-item" }
                                    }
                                    on:click=go
                                >
                                    "My Dashboard"
                                </button>
                                <button class="nav-item nav-logout" on:click=logout>
                                    "Logout"
                                </button>
                            }
                                .into_any()
                        }
                        None => {
                            let navigate = dash_navigate.clone();
                            view! {
                                <button
                                    class=move || {
                                        if is_active("/login") { "nav-item nav-item-active" } else { "nav-item" }
                                    }
                                    on:click=move |_| navigate("/login", Default::default())
                                >
                                    "Sign In"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
