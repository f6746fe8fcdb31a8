//! Admin Dashboard Page
//!
//! One-shot system analytics view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::StatsSnapshot;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (stats, set_stats) = signal::<Option<StatsSnapshot>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::stats().await {
                Ok(snapshot) => set_stats.set(Some(snapshot)),
                Err(err) if err.is_unauthorized() => {}
                Err(_) => ctx.notify("Failed to load analytics."),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="admin-page">
            {move || {
                if loading.get() {
                    return view! { <div class="loading-state">"Loading Analytics..."</div> }.into_any();
                }
                match stats.get() {
                    None => view! { <div class="loading-state">"Analytics unavailable."</div> }.into_any(),
                    Some(snapshot) => {
                        let departments = snapshot.departments_by_load();
                        let recent = snapshot.recent_visits.clone();
                        view! {
                            <div class="admin-content">
                                <h1 class="page-title">"System Administration"</h1>

                                <div class="summary-row">
                                    <div class="stat-card">
                                        <div class="stat-label">"Total Visits"</div>
                                        <div class="stat-value">{snapshot.total_visits}</div>
                                    </div>
                                    <div class="stat-card">
                                        <div class="stat-label">"Departments Active"</div>
                                        <div class="stat-value">{departments.len()}</div>
                                    </div>
                                    <div class="stat-card">
                                        <div class="stat-label">"High Risk Cases"</div>
                                        <div class="stat-value">{snapshot.high_risk_count()}</div>
                                    </div>
                                </div>

                                <h3 class="section-title">"Recent Visits"</h3>
                                <ul class="activity-list">
                                    {recent.into_iter().map(|visit| view! {
                                        <li class="activity-row">
                                            <div>
                                                <h4>{format!("Status: {}", visit.status)}</h4>
                                                <p>{visit.arrival_time.clone().unwrap_or_default()}</p>
                                            </div>
                                            <span class="meta-note">
                                                {format!("{}y / {}", visit.age, visit.gender)}
                                            </span>
                                        </li>
                                    }).collect_view()}
                                </ul>

                                <h3 class="section-title">"Department Load"</h3>
                                <div class="dept-grid">
                                    {departments.into_iter().map(|(dept, count)| view! {
                                        <div class="dept-card">
                                            <h4>{dept}</h4>
                                            <div class="dept-count">{count}</div>
                                            <p>"Pending"</p>
                                        </div>
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
