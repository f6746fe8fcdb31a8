//! Triage Frontend App
//!
//! Router shell wiring pages, shared context, and the queue store.
//! The landing page renders bare; every other route sits under the
//! navbar layout.

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Navbar, Toast};
use crate::context::AppContext;
use crate::pages::{
    AdminDashboard, DoctorDashboard, DoctorsPage, IntakePage, LandingPage, LoginPage,
    OverviewPage, PatientDashboard, RecipientDashboard,
};
use crate::session::Session;
use crate::store::QueueState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (session, set_session) = signal(Session::load());
    let (toast, set_toast) = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(AppContext::new((session, set_session), (toast, set_toast)));
    provide_context(Store::new(QueueState::new()));

    view! {
        <Router>
            <Toast/>
            <Routes fallback=|| view! { <p class="not-found">"Not found."</p> }>
                <ParentRoute path=path!("/") view=Shell>
                    <Route path=path!("") view=LandingPage/>
                    <Route path=path!("login") view=LoginPage/>
                    <Route path=path!("intake") view=IntakePage/>
                    <Route path=path!("dashboard") view=OverviewPage/>
                    <Route path=path!("doctors") view=DoctorsPage/>
                    <Route path=path!("doctor-dashboard") view=DoctorDashboard/>
                    <Route path=path!("recipient-dashboard") view=RecipientDashboard/>
                    <Route path=path!("patient-dashboard") view=PatientDashboard/>
                    <Route path=path!("admin-dashboard") view=AdminDashboard/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Navbar layout; the landing route opts out.
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let show_nav = move || location.pathname.get() != "/";

    view! {
        <div class="app-container">
            <Show when=show_nav>
                <Navbar/>
            </Show>
            <main class="main-content">
                <Outlet/>
            </main>
        </div>
    }
}
