//! Patient Dashboard Page
//!
//! The signed-in patient's profile projection and visit history.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::RiskBadge;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::MyRecords;

#[component]
pub fn PatientDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();
    let (records, set_records) = signal::<Option<MyRecords>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::my_records().await {
                Ok(fetched) if fetched.no_record() => {
                    set_error.set(Some(
                        fetched
                            .message
                            .clone()
                            .unwrap_or_else(|| "No patient record found.".to_string()),
                    ));
                }
                Ok(fetched) => set_records.set(Some(fetched)),
                Err(ApiError::Status { status: 403, .. }) => {
                    set_error.set(Some("Authorized for Patients only.".to_string()));
                }
                Err(err) if err.is_unauthorized() => {}
                Err(_) => set_error.set(Some("Failed to load records.".to_string())),
            }
            set_loading.set(false);
        });
    });

    let on_logout = move |_| {
        ctx.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <div class="patient-page">
            <header class="page-header success">
                <h1>"My Health Portal"</h1>
                <button class="logout-btn" on:click=on_logout>"Logout"</button>
            </header>

            {move || {
                if loading.get() {
                    return view! { <div class="center-msg">"Loading your health data..."</div> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <div class="center-msg error">{message}</div> }.into_any();
                }
                let Some(records) = records.get() else {
                    return view! { <div class="center-msg">"No data."</div> }.into_any();
                };
                let visits = records.visits.clone();
                let visit_count = visits.len();
                let avg_risk = if visit_count > 0 {
                    let total: f64 = visits.iter().filter_map(|v| v.risk_score).sum();
                    format!("{:.1}", total / visit_count as f64)
                } else {
                    "0".to_string()
                };
                let profile = records.patient.clone();

                view! {
                    <div class="dashboard-container">
                        {profile.map(|profile| view! {
                            <div class="profile-card">
                                <h2>{profile.full_name.clone()}</h2>
                                <p>{format!("{}, {} years old", profile.gender, profile.age)}</p>
                                {profile.blood_pressure.clone().map(|bp| view! {
                                    <span class="meta-badge">{format!("BP: {bp}")}</span>
                                })}
                                {profile.symptoms.clone().map(|symptoms| view! {
                                    <p class="profile-note">{format!("Symptoms: {symptoms}")}</p>
                                })}
                                {profile.pre_existing_conditions.clone().map(|conditions| view! {
                                    <p class="profile-note">{format!("Conditions: {conditions}")}</p>
                                })}
                            </div>
                        })}

                        <div class="summary-row">
                            <div class="stat-card">
                                <div class="stat-value">{visit_count}</div>
                                <div class="stat-label">"Total Visits"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{avg_risk}</div>
                                <div class="stat-label">"Avg. Risk Score"</div>
                            </div>
                        </div>

                        <h3 class="section-title">"Visit History"</h3>
                        {if visits.is_empty() {
                            view! { <div class="center-msg">"No visits recorded."</div> }.into_any()
                        } else {
                            view! {
                                <div class="visits-list">
                                    {visits.into_iter().map(|visit| {
                                        let score = visit.risk_score.unwrap_or(0.0);
                                        let fill = format!("width: {}%", (score * 10.0).clamp(0.0, 100.0));
                                        view! {
                                            <div class="visit-card">
                                                <div class="visit-header-row">
                                                    <span class="meta-note">
                                                        {visit.arrival_time.clone().unwrap_or_default()}
                                                    </span>
                                                    <RiskBadge level=visit.risk_level/>
                                                </div>
                                                <h4>
                                                    {visit.dept.clone().map(|d| format!("{d} Department")).unwrap_or_default()}
                                                </h4>
                                                <div class="visit-detail-row">
                                                    <span class="status-badge pending">{visit.status.clone()}</span>
                                                </div>
                                                <div class="score-bar">
                                                    <div class=format!("score-fill {}", visit.risk_level.css_class()) style=fill></div>
                                                </div>
                                                <span class="score-text">
                                                    {format!("AI Risk Score: {score}/10")}
                                                </span>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }
                                .into_any()
                        }}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
