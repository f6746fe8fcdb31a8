//! Doctor Dashboard Page
//!
//! The live queue view: snapshot + push-channel synchronization,
//! priority-ordered rendering, consultation actions, the consultation
//! report form, and the patient medical-insights panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::api::{RecordArgs, ServeAction};
use crate::components::{ConnectionBadge, RiskBadge, StatCard};
use crate::context::AppContext;
use crate::live_queue::QueueSync;
use crate::models::{average_wait_minutes, PatientInsights, QueueItem};
use crate::store::{store_replace_queue, use_queue_store, QueueStateStoreFields};

#[component]
pub fn DoctorDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_queue_store();
    let navigate = use_navigate();

    // No doctor identifier means no session worth keeping.
    let Some(doctor_id) = ctx.doctor_id() else {
        Effect::new(move |_| navigate("/login", Default::default()));
        return view! { <div class="loading-state">"Redirecting to login..."</div> }.into_any();
    };
    let doctor = StoredValue::new(doctor_id.clone());

    let sync = QueueSync::start(doctor_id, store, ctx);
    // Dropping the handle cancels the poll timer and closes the channel.
    on_cleanup(move || drop(sync));

    // The acted-on entry stays disabled until the confirming re-fetch.
    let (pending, set_pending) = signal::<Option<String>>(None);

    let entries = move || store.entries().get();
    let link = Signal::derive(move || store.link().get());

    let waiting = Signal::derive(move || entries().len().to_string());
    let critical = Signal::derive(move || {
        entries()
            .iter()
            .filter(|item| item.is_critical())
            .count()
            .to_string()
    });
    let avg_wait = Signal::derive(move || format!("{}m", average_wait_minutes(&entries())));

    let on_action = move |queue_id: String, action: ServeAction| {
        let doctor_id = doctor.get_value();
        set_pending.set(Some(queue_id.clone()));
        spawn_local(async move {
            match api::serve(&queue_id, action).await {
                Ok(()) => match api::fetch_queue(&doctor_id).await {
                    Ok(snapshot) => store_replace_queue(&store, snapshot),
                    Err(err) if err.is_unauthorized() => {}
                    Err(_) => ctx.notify("Failed to load queue."),
                },
                Err(err) if err.is_unauthorized() => {}
                Err(_) => ctx.notify(format!("Failed to {} consultation.", action.verb())),
            }
            set_pending.set(None);
        });
    };

    // Insights modal
    let (show_insights, set_show_insights) = signal(false);
    let (insights, set_insights) = signal::<Option<PatientInsights>>(None);
    let on_insights = move |patient_id: String| {
        spawn_local(async move {
            match api::patient_insights(&patient_id).await {
                Ok(data) => {
                    set_insights.set(Some(data));
                    set_show_insights.set(true);
                }
                Err(err) if err.is_unauthorized() => {}
                Err(_) => ctx.notify("Failed to load patient insights."),
            }
        });
    };

    // Consultation report modal
    let (record_visit, set_record_visit) = signal::<Option<String>>(None);
    let (diagnosis, set_diagnosis) = signal(String::new());
    let (syndrome, set_syndrome) = signal(String::new());
    let (treatment_plan, set_treatment_plan) = signal(String::new());
    let (follow_up_required, set_follow_up_required) = signal(false);
    let (follow_up_date, set_follow_up_date) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    let open_record = move |visit_id: String| {
        set_diagnosis.set(String::new());
        set_syndrome.set(String::new());
        set_treatment_plan.set(String::new());
        set_follow_up_required.set(false);
        set_follow_up_date.set(String::new());
        set_notes.set(String::new());
        set_record_visit.set(Some(visit_id));
    };

    let on_record_submit = move |_| {
        let Some(visit_id) = record_visit.get_untracked() else { return };
        let args = RecordArgs {
            doctor_id: doctor.get_value(),
            diagnosis: diagnosis.get_untracked(),
            syndrome_identified: syndrome.get_untracked(),
            treatment_plan: treatment_plan.get_untracked(),
            follow_up_required: follow_up_required.get_untracked(),
            follow_up_date: Some(follow_up_date.get_untracked()).filter(|date| !date.is_empty()),
            notes: notes.get_untracked(),
        };
        spawn_local(async move {
            match api::submit_record(&visit_id, &args).await {
                Ok(()) => set_record_visit.set(None),
                Err(err) if err.is_unauthorized() => {}
                Err(_) => ctx.notify("Failed to submit report."),
            }
        });
    };

    let active_card = move |active: QueueItem| {
        let is_pending = pending.get().as_deref() == Some(active.queue_id.as_str());
        let start_disabled = !active.can_start() || is_pending;
        let start_id = active.queue_id.clone();
        let complete_id = active.queue_id.clone();
        let record_id = active.visit_id.clone();
        let insights_id = active.patient_id.clone();

        view! {
            <div class="active-patient-card">
                <div class="active-badge">"Now Serving"</div>
                <div class="active-patient-header">
                    <h3>{active.patient_name.clone()}</h3>
                    <div class="patient-meta">
                        <span>{format!("{}y / {}", active.age, active.gender)}</span>
                        <RiskBadge level=active.risk_level/>
                        <span>{format!("{}m wait", active.waiting_minutes)}</span>
                    </div>
                </div>

                <div class="active-symptoms">
                    <span class="symptom-label">"Reported Symptoms"</span>
                    <p class="symptom-text">{format!("\"{}\"", active.symptoms)}</p>
                    <div class="active-chips">
                        {insights_id.map(|patient_id| view! {
                            <button
                                type="button"
                                class="chip chip-unselected"
                                on:click=move |_| on_insights(patient_id.clone())
                            >
                                "Medical Insights"
                            </button>
                        })}
                        <span class="chip chip-unselected">
                            {format!("Triage Score: {}", active.priority_score)}
                        </span>
                        {active.is_emergency.then(|| view! {
                            <span class="emergency-badge">"EMERGENCY"</span>
                        })}
                    </div>
                </div>

                <div class="active-actions">
                    <button
                        class="action-btn success"
                        disabled=start_disabled
                        on:click=move |_| on_action(start_id.clone(), ServeAction::Start)
                    >
                        "Start Visit"
                    </button>
                    <button
                        class="action-btn tertiary"
                        on:click=move |_| open_record(record_id.clone())
                    >
                        "Add Medical Report"
                    </button>
                    <button
                        class="action-btn outline"
                        disabled=is_pending
                        on:click=move |_| on_action(complete_id.clone(), ServeAction::Complete)
                    >
                        "Complete"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="doctor-page">
            <div class="dashboard-header">
                <div class="header-greeting">
                    <h1>"Hello, Doctor."</h1>
                    <p>
                        {js_sys::Date::new_0()
                            .to_date_string()
                            .as_string()
                            .unwrap_or_default()}
                    </p>
                </div>
                <ConnectionBadge status=link/>
            </div>

            <div class="summary-row">
                <StatCard label="Patients Waiting" value=waiting accent="blue"/>
                <StatCard label="Critical Cases" value=critical accent="orange"/>
                <StatCard label="Avg. Wait Time" value=avg_wait accent="teal"/>
            </div>

            <div class="queue-section-header">
                <h2>"Patient Queue"</h2>
                <span class="queue-subtext">"Sorted by AI Priority & Wait Time"</span>
            </div>

            {move || {
                if store.loading().get() {
                    return view! { <div class="loading-state">"Loading Queue..."</div> }.into_any();
                }
                let queue = entries();
                if queue.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>"All Caught Up!"</h3>
                            <p>"No patients in queue."</p>
                        </div>
                    }
                        .into_any();
                }

                let active = queue[0].clone();
                let upcoming: Vec<QueueItem> = queue.into_iter().skip(1).collect();
                let upcoming_count = upcoming.len();

                view! {
                    <div class="queue-container">
                        {active_card(active)}

                        {(upcoming_count > 0).then(|| view! {
                            <div class="upcoming-list">
                                <h3>{format!("Up Next ({upcoming_count})")}</h3>
                                {upcoming.into_iter().map(|item| view! {
                                    <div class="queue-card-item">
                                        <div class="queue-pos-badge">{format!("#{}", item.position)}</div>
                                        <div class="queue-card-info">
                                            <h4>{item.patient_name.clone()}</h4>
                                            <div class="queue-card-meta">
                                                <span>{format!("{}y / {}", item.age, item.gender)}</span>
                                                <span>{format!("{}m", item.waiting_minutes)}</span>
                                            </div>
                                        </div>
                                        <RiskBadge level=item.risk_level/>
                                    </div>
                                }).collect_view()}
                            </div>
                        })}
                    </div>
                }
                    .into_any()
            }}

            {move || show_insights.get().then(|| view! {
                <div class="modal-backdrop">
                    <div class="insights-modal">
                        <header class="modal-header">
                            <h2>"Patient Medical Insights"</h2>
                            <button on:click=move |_| set_show_insights.set(false)>"Close"</button>
                        </header>

                        {move || insights.get().map(|data| view! {
                            <div class="insights-container">
                                <section class="insight-card">
                                    <h3>"Summary"</h3>
                                    <p>{data.summary.clone()}</p>
                                </section>

                                {(!data.chronic_conditions.is_empty()).then(|| view! {
                                    <section class="insight-card">
                                        <h3>"Chronic Conditions"</h3>
                                        <ul>
                                            {data.chronic_conditions.iter().map(|cond| view! {
                                                <li>
                                                    <h4>{cond.condition.clone()}</h4>
                                                    <p>
                                                        {format!(
                                                            "Source: {} (Confidence: {:.0}%)",
                                                            cond.source,
                                                            cond.confidence * 100.0,
                                                        )}
                                                    </p>
                                                </li>
                                            }).collect_view()}
                                        </ul>
                                    </section>
                                })}

                                {(!data.recent_high_risk.is_empty()).then(|| view! {
                                    <section class="insight-card">
                                        <h3>"Recent High-Risk Findings"</h3>
                                        <ul>
                                            {data.recent_high_risk.iter().map(|finding| view! {
                                                <li>
                                                    <h4>{finding.finding.clone()}</h4>
                                                    <p>
                                                        {format!(
                                                            "Date: {} ({:.0}%)",
                                                            finding.date,
                                                            finding.confidence * 100.0,
                                                        )}
                                                    </p>
                                                </li>
                                            }).collect_view()}
                                        </ul>
                                    </section>
                                })}

                                {(!data.medications.is_empty()).then(|| view! {
                                    <section class="insight-card">
                                        <h3>"Current Medications"</h3>
                                        <ul>
                                            {data.medications.iter().map(|med| view! {
                                                <li>
                                                    <h4>{med.name.clone()}</h4>
                                                    <p>
                                                        {format!(
                                                            "Dosage: {} | Prescribed: {}",
                                                            med.dosage, med.prescribed_date,
                                                        )}
                                                    </p>
                                                </li>
                                            }).collect_view()}
                                        </ul>
                                    </section>
                                })}

                                {(!data.recurring_symptoms.is_empty()).then(|| {
                                    let mut recurring: Vec<(String, u32)> = data
                                        .recurring_symptoms
                                        .iter()
                                        .map(|(name, count)| (name.clone(), *count))
                                        .collect();
                                    recurring.sort_by(|a, b| b.1.cmp(&a.1));
                                    view! {
                                        <section class="insight-card">
                                            <h3>"Recurring Symptoms"</h3>
                                            <ul>
                                                {recurring.into_iter().map(|(symptom, count)| view! {
                                                    <li>
                                                        <span>{symptom}</span>
                                                        <span class="meta-note">{format!("{count} occurrences")}</span>
                                                    </li>
                                                }).collect_view()}
                                            </ul>
                                        </section>
                                    }
                                })}
                            </div>
                        })}
                    </div>
                </div>
            })}

            {move || record_visit.get().map(|_| view! {
                <div class="modal-backdrop">
                    <div class="record-modal">
                        <header class="modal-header">
                            <h2>"Consultation Report"</h2>
                            <button on:click=move |_| set_record_visit.set(None)>"Close"</button>
                        </header>

                        <label class="form-field">
                            "Diagnosis"
                            <input
                                type="text"
                                prop:value=move || diagnosis.get()
                                on:input=move |ev| set_diagnosis.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            "Syndrome Identified"
                            <input
                                type="text"
                                prop:value=move || syndrome.get()
                                on:input=move |ev| set_syndrome.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            "Treatment Plan"
                            <textarea
                                rows="3"
                                prop:value=move || treatment_plan.get()
                                on:input=move |ev| set_treatment_plan.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form-field checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || follow_up_required.get()
                                on:change=move |ev| set_follow_up_required.set(event_target_checked(&ev))
                            />
                            "Follow-up Required"
                        </label>
                        <label class="form-field">
                            "Follow-up Date (YYYY-MM-DD)"
                            <input
                                type="text"
                                prop:value=move || follow_up_date.get()
                                on:input=move |ev| set_follow_up_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            "Notes"
                            <textarea
                                rows="4"
                                prop:value=move || notes.get()
                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <button class="primary-btn" on:click=on_record_submit>"Save Report"</button>
                    </div>
                </div>
            })}
        </div>
    }
        .into_any()
}
