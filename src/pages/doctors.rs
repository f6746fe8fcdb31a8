//! Doctors Roster Page
//!
//! Availability listing for the medical staff on duty.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::DoctorProfile;

#[component]
pub fn DoctorsPage() -> impl IntoView {
    let navigate = use_navigate();
    let (doctors, set_doctors) = signal(Vec::<DoctorProfile>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::doctors().await {
                Ok(list) => {
                    set_doctors.set(list);
                    set_error.set(None);
                }
                Err(_) => set_error.set(Some("Failed to load doctors.".to_string())),
            }
            set_loading.set(false);
        });
    });

    let go_dashboard = move |_| navigate("/dashboard", Default::default());

    view! {
        <div class="doctors-page">
            <div class="doctors-header">
                <h1 class="page-title">"Medical Staff On-Duty"</h1>
                <p class="page-subtitle">"Real-time availability and status"</p>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="loading-state">"Loading doctors..."</div> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <div class="loading-state error">{message}</div> }.into_any();
                }
                let list = doctors.get();
                if list.is_empty() {
                    return view! { <div class="loading-state">"No doctors available."</div> }.into_any();
                }
                view! {
                    <div class="doctors-grid">
                        {list.into_iter().map(|doc| {
                            let status_class = if doc.is_available { "doc-status available" } else { "doc-status busy" };
                            let status_text = if doc.is_available { "Available Now" } else { "Currently Busy" };
                            view! {
                                <div class="doctor-card">
                                    <div class="doc-card-header">
                                        <div class="doc-info">
                                            <h3>{doc.full_name.clone()}</h3>
                                            <span class="doc-dept">
                                                {doc.department_name.clone().unwrap_or_default()}
                                            </span>
                                        </div>
                                        <div class=status_class></div>
                                    </div>
                                    <div class="doc-card-body">
                                        <p>{doc.email.clone().unwrap_or_default()}</p>
                                        <p>
                                            {doc.experience_years
                                                .map(|years| format!("{years} Years Experience"))
                                                .unwrap_or_default()}
                                        </p>
                                    </div>
                                    <div class="doc-card-footer">
                                        <span class=status_class>{status_text}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
                    .into_any()
            }}

            <div class="back-container">
                <button class="back-btn" on:click=go_dashboard>"Return to Dashboard"</button>
            </div>
        </div>
    }
}
