//! Hospital Overview Page
//!
//! Public stats dashboard. Re-polls the snapshot on a short fixed
//! interval; a failed poll keeps the last good data on screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::StatCard;
use crate::models::StatsSnapshot;

const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

#[component]
pub fn OverviewPage() -> impl IntoView {
    let navigate = use_navigate();
    let (stats, set_stats) = signal::<Option<StatsSnapshot>>(None);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        spawn_local(async move {
            loop {
                match api::stats().await {
                    Ok(snapshot) => set_stats.set(Some(snapshot)),
                    Err(err) if err.is_unauthorized() => break,
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[STATS] fetch failed: {err}").into(),
                        );
                    }
                }
                sleep(REFRESH_INTERVAL).await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
            }
        });
    }
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let total_visits = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.total_visits.to_string())
            .unwrap_or_default()
    });
    let high_risk = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.high_risk_count().to_string())
            .unwrap_or_default()
    });
    let waiting = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.currently_waiting().to_string())
            .unwrap_or_default()
    });

    let go_intake = {
        let navigate = navigate.clone();
        move |_| navigate("/intake", Default::default())
    };
    let go_doctors = move |_| navigate("/doctors", Default::default());

    view! {
        <div class="dashboard-page">
            {move || match stats.get() {
                None => view! { <div class="loading-state">"Loading hospital stats..."</div> }.into_any(),
                Some(snapshot) => {
                    let departments = snapshot.departments_by_load();
                    let recent = snapshot.recent_visits.clone();
                    view! {
                        <div class="dashboard-container">
                            <div class="summary-row">
                                <StatCard label="Total Visits" value=total_visits/>
                                <StatCard label="High Risk Alerts" value=high_risk accent="danger"/>
                                <StatCard label="Currently Waiting" value=waiting accent="warning"/>
                            </div>

                            <div class="content-columns">
                                <section class="content-card">
                                    <h3>"Department Load"</h3>
                                    <ul class="load-list">
                                        {departments.into_iter().map(|(dept, count)| {
                                            let badge_class = if count > 5 { "load-badge danger" } else { "load-badge" };
                                            view! {
                                                <li class="load-row">
                                                    <span>{dept}</span>
                                                    <span class=badge_class>{count} " patients"</span>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                </section>

                                <section class="content-card">
                                    <h3>"Recent Triage Activity"</h3>
                                    <ul class="activity-list">
                                        {recent.into_iter().map(|visit| {
                                            let status_class = if visit.status == "Completed" {
                                                "status-badge done"
                                            } else {
                                                "status-badge pending"
                                            };
                                            view! {
                                                <li class="activity-row">
                                                    <div>
                                                        <h4>{format!("Patient ({}, Age: {})", visit.gender, visit.age)}</h4>
                                                        <p>{visit.arrival_time.clone().unwrap_or_default()}</p>
                                                    </div>
                                                    <span class=status_class>{visit.status.clone()}</span>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                </section>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="action-buttons">
                <button class="primary-btn" on:click=go_intake>"New Intake Form"</button>
                <button class="secondary-btn" on:click=go_doctors>"Manage Staff"</button>
            </div>
        </div>
    }
}
