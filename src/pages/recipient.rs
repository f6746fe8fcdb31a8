//! Recipient (Triage Desk) Page
//!
//! Patient search, walk-in registration, and the triage check-in
//! modal with symptom autocomplete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::api::{PatientRegistrationArgs, VisitArgs};
use crate::context::AppContext;
use crate::models::{PatientSummary, RiskLevel};

#[derive(Clone, Copy, PartialEq)]
enum DeskSegment {
    Search,
    Register,
}

/// Comma list helpers shared by the register and triage forms.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

pub(crate) fn append_entry(current: &str, name: &str) -> String {
    let mut entries = split_list(current);
    if entries.iter().any(|entry| entry == name) {
        return current.to_string();
    }
    entries.push(name.to_string());
    entries.join(", ")
}

/// Systolic reading out of a "120/80" blood pressure string.
pub(crate) fn parse_systolic(blood_pressure: &str) -> u32 {
    blood_pressure
        .split('/')
        .next()
        .and_then(|part| part.trim().parse().ok())
        .unwrap_or(120)
}

#[component]
pub fn RecipientDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();

    let (segment, set_segment) = signal(DeskSegment::Search);
    let (search_text, set_search_text) = signal(String::new());
    let (results, set_results) = signal(Vec::<PatientSummary>::new());

    // Register form
    let (reg_full_name, set_reg_full_name) = signal(String::new());
    let (reg_phone, set_reg_phone) = signal(String::new());
    let (reg_age, set_reg_age) = signal(String::new());
    let (reg_gender, set_reg_gender) = signal(String::from("Male"));
    let (reg_symptoms, set_reg_symptoms) = signal(String::new());

    // Triage modal
    let (show_triage, set_show_triage) = signal(false);
    let (selected_patient, set_selected_patient) = signal::<Option<PatientSummary>>(None);
    let (triage_symptoms, set_triage_symptoms) = signal(String::new());
    let (triage_conditions, set_triage_conditions) = signal(String::new());
    let (triage_systolic, set_triage_systolic) = signal(String::from("120"));
    let (triage_heart_rate, set_triage_heart_rate) = signal(String::from("72"));
    let (triage_temperature, set_triage_temperature) = signal(String::from("37.0"));
    let (triage_visit_type, set_triage_visit_type) = signal(String::from("Walk-In"));
    let (use_preferred, set_use_preferred) = signal(true);

    // Symptom autocomplete (register form and triage modal share it)
    let (symptom_input, set_symptom_input) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());

    let run_search = move |query: String| {
        spawn_local(async move {
            match api::search_patients(&query).await {
                Ok(found) => set_results.set(found),
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[DESK] patient search failed: {err}").into(),
                    );
                }
            }
        });
    };

    // Initial result set whenever the search tab activates.
    Effect::new(move |_| {
        if segment.get() == DeskSegment::Search {
            run_search(String::new());
        }
    });

    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_search_text.set(value.clone());
        run_search(value);
    };

    let on_symptom_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_symptom_input.set(value.clone());
        if value.len() < 2 {
            set_suggestions.set(Vec::new());
            return;
        }
        spawn_local(async move {
            if let Ok(entries) = api::symptoms(Some(&value)).await {
                set_suggestions.set(entries.into_iter().map(|entry| entry.name).collect());
            }
        });
    };

    // Suggestions land in whichever form is in front.
    let add_symptom = move |name: String| {
        if show_triage.get_untracked() {
            set_triage_symptoms.update(|current| *current = append_entry(current, &name));
        } else {
            set_reg_symptoms.update(|current| *current = append_entry(current, &name));
        }
        set_symptom_input.set(String::new());
        set_suggestions.set(Vec::new());
    };

    let open_triage = move |patient: PatientSummary| {
        set_selected_patient.set(Some(patient));
        set_triage_symptoms.set(String::new());
        set_triage_conditions.set(String::new());
        set_use_preferred.set(true);
        set_show_triage.set(true);
    };

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if reg_full_name.get().trim().is_empty() {
            ctx.notify("Full name is required.");
            return;
        }
        if reg_phone.get().trim().is_empty() {
            ctx.notify("Phone number is required.");
            return;
        }
        let Ok(age) = reg_age.get().trim().parse::<u32>() else {
            ctx.notify("Age is required.");
            return;
        };
        if reg_symptoms.get().trim().is_empty() {
            ctx.notify("Please add at least one symptom.");
            return;
        }

        let args = PatientRegistrationArgs {
            full_name: reg_full_name.get(),
            age,
            gender: reg_gender.get(),
            phone_number: reg_phone.get(),
            symptoms: reg_symptoms.get(),
            blood_pressure: "120/80".to_string(),
            heart_rate: 72,
            temperature: 37.0,
            pre_existing_conditions: String::new(),
        };
        spawn_local(async move {
            match api::register_patient(&args).await {
                Ok(patient) => {
                    ctx.notify("Patient Registered!");
                    // Carry the registration vitals into the check-in.
                    set_triage_symptoms.set(reg_symptoms.get_untracked());
                    set_triage_systolic.set(parse_systolic(&args.blood_pressure).to_string());
                    set_triage_heart_rate.set(args.heart_rate.to_string());
                    set_triage_temperature.set(args.temperature.to_string());
                    set_selected_patient.set(Some(patient));
                    set_use_preferred.set(true);
                    set_show_triage.set(true);
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => ctx.notify(err.to_string()),
            }
        });
    };

    let on_triage_submit = move |_| {
        let Some(patient) = selected_patient.get() else { return };
        let symptoms = split_list(&triage_symptoms.get());
        if symptoms.is_empty() {
            ctx.notify("Please add at least one symptom.");
            return;
        }
        let args = VisitArgs {
            patient_id: Some(patient.patient_id.clone()),
            age: patient.age,
            gender: patient.gender.clone(),
            symptoms,
            systolic_bp: triage_systolic.get().trim().parse().unwrap_or(120),
            heart_rate: triage_heart_rate.get().trim().parse().unwrap_or(72),
            temperature: triage_temperature.get().trim().parse().unwrap_or(37.0),
            visit_type: triage_visit_type.get(),
            chronic_conditions: split_list(&triage_conditions.get()),
            uploaded_documents: Vec::new(),
            use_preferred_doctor: Some(use_preferred.get()),
        };
        spawn_local(async move {
            match api::create_visit(&args).await {
                Ok(outcome) => {
                    ctx.notify(format!("Visit Created! Risk: {}", outcome.risk_level.label()));
                    set_show_triage.set(false);
                    set_segment.set(DeskSegment::Search);
                    set_search_text.set(String::new());
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => ctx.notify(err.to_string()),
            }
        });
    };

    let on_logout = move |_| {
        ctx.sign_out();
        navigate("/login", Default::default());
    };

    let suggestion_list = move || {
        let list = suggestions.get();
        (!list.is_empty()).then(|| view! {
            <ul class="autocomplete-list">
                {list.into_iter().map(|name| {
                    let pick = name.clone();
                    view! {
                        <li>
                            <button type="button" on:click=move |_| add_symptom(pick.clone())>
                                {name}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        })
    };

    view! {
        <div class="recipient-page">
            <header class="page-header tertiary">
                <h1>"Triage Officer Dashboard"</h1>
                <button class="logout-btn" on:click=on_logout>"Logout"</button>
            </header>

            <div class="role-segment">
                <button
                    class=move || {
                        if segment.get() == DeskSegment::Search { "segment-btn active" } else { "segment-btn" }
                    }
                    on:click=move |_| set_segment.set(DeskSegment::Search)
                >
                    "Search Patient"
                </button>
                <button
                    class=move || {
                        if segment.get() == DeskSegment::Register { "segment-btn active" } else { "segment-btn" }
                    }
                    on:click=move |_| set_segment.set(DeskSegment::Register)
                >
                    "New Patient"
                </button>
            </div>

            {move || match segment.get() {
                DeskSegment::Search => view! {
                    <div class="search-section">
                        <input
                            type="search"
                            class="custom-search"
                            placeholder="Search by Name or Phone"
                            prop:value=move || search_text.get()
                            on:input=on_search_input
                        />
                        <h3 class="section-title">
                            {move || format!("Results ({})", results.get().len())}
                        </h3>
                        {move || {
                            let found = results.get();
                            if found.is_empty() {
                                view! { <p class="center-msg">"No patients found"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="result-list">
                                        {found.into_iter().map(|patient| {
                                            let row = patient.clone();
                                            view! {
                                                <li>
                                                    <button class="result-row" on:click=move |_| open_triage(row.clone())>
                                                        <h4>{patient.full_name.clone()}</h4>
                                                        <p>
                                                            {format!(
                                                                "{} | {}, {}y",
                                                                patient.phone_number, patient.gender, patient.age,
                                                            )}
                                                        </p>
                                                        {patient.risk_level.map(|level| {
                                                            let note_class = if level == RiskLevel::High {
                                                                "meta-note danger"
                                                            } else {
                                                                "meta-note"
                                                            };
                                                            view! {
                                                                <span class=note_class>
                                                                    {format!("Last Risk: {}", level.label())}
                                                                </span>
                                                            }
                                                        })}
                                                    </button>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                }
                    .into_any(),
                DeskSegment::Register => view! {
                    <form class="register-form" on:submit=on_register>
                        <label class="form-field">
                            "Full Name"
                            <input
                                type="text"
                                placeholder="Enter full name"
                                prop:value=move || reg_full_name.get()
                                on:input=move |ev| set_reg_full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            "Phone"
                            <input
                                type="text"
                                placeholder="91-XXXXXXXXXX"
                                prop:value=move || reg_phone.get()
                                on:input=move |ev| set_reg_phone.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="form-row">
                            <label class="form-field">
                                "Age"
                                <input
                                    type="number"
                                    prop:value=move || reg_age.get()
                                    on:input=move |ev| set_reg_age.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                "Gender"
                                <select
                                    prop:value=move || reg_gender.get()
                                    on:change=move |ev| set_reg_gender.set(event_target_value(&ev))
                                >
                                    <option value="Male">"Male"</option>
                                    <option value="Female">"Female"</option>
                                </select>
                            </label>
                        </div>

                        <label class="form-field">
                            "Symptoms"
                            <input
                                type="text"
                                placeholder="Type symptom to search..."
                                prop:value=move || symptom_input.get()
                                on:input=on_symptom_input
                            />
                        </label>
                        {suggestion_list}
                        <textarea
                            rows="3"
                            disabled
                            placeholder="Selected symptoms appear here..."
                            prop:value=move || reg_symptoms.get()
                        ></textarea>

                        <button type="submit" class="primary-btn">"Register & Triage"</button>
                    </form>
                }
                    .into_any(),
            }}

            {move || show_triage.get().then(|| view! {
                <div class="modal-backdrop">
                    <div class="triage-modal">
                        <header class="modal-header">
                            <h2>"Triage Check-In"</h2>
                            <button on:click=move |_| set_show_triage.set(false)>"Close"</button>
                        </header>

                        {move || selected_patient.get().map(|patient| view! {
                            <div class="patient-card-header">
                                <h3>{patient.full_name.clone()}</h3>
                                <p>
                                    {format!(
                                        "{}, {} years | {}",
                                        patient.gender, patient.age, patient.phone_number,
                                    )}
                                </p>
                            </div>
                        })}

                        <label class="form-field">
                            "Search Symptoms"
                            <input
                                type="text"
                                placeholder="Typing 'Fever'..."
                                prop:value=move || symptom_input.get()
                                on:input=on_symptom_input
                            />
                        </label>
                        {suggestion_list}

                        <label class="form-field">
                            "Selected Symptoms (comma separated)"
                            <textarea
                                rows="2"
                                prop:value=move || triage_symptoms.get()
                                on:input=move |ev| set_triage_symptoms.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form-field">
                            "Chronic Conditions"
                            <textarea
                                rows="2"
                                prop:value=move || triage_conditions.get()
                                on:input=move |ev| set_triage_conditions.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <div class="form-row">
                            <label class="form-field">
                                "Systolic BP"
                                <input
                                    type="number"
                                    prop:value=move || triage_systolic.get()
                                    on:input=move |ev| set_triage_systolic.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                "Heart Rate"
                                <input
                                    type="number"
                                    prop:value=move || triage_heart_rate.get()
                                    on:input=move |ev| set_triage_heart_rate.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                "Temp (\u{b0}C)"
                                <input
                                    type="number"
                                    prop:value=move || triage_temperature.get()
                                    on:input=move |ev| set_triage_temperature.set(event_target_value(&ev))
                                />
                            </label>
                        </div>

                        <label class="form-field">
                            "Visit Type"
                            <select
                                prop:value=move || triage_visit_type.get()
                                on:change=move |ev| set_triage_visit_type.set(event_target_value(&ev))
                            >
                                <option value="Walk-In">"Walk-In"</option>
                                <option value="Emergency">"Emergency"</option>
                                <option value="Follow-up">"Follow-up"</option>
                            </select>
                        </label>
                        <label class="form-field checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || use_preferred.get()
                                on:change=move |ev| set_use_preferred.set(event_target_checked(&ev))
                            />
                            "Prefer previous doctor"
                        </label>

                        <button class="success-btn" on:click=on_triage_submit>
                            "Submit & Assign Doctor"
                        </button>
                    </div>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("Fever, Cough , ,Headache"),
            vec!["Fever", "Cough", "Headache"]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_append_entry_dedupes() {
        let once = append_entry("", "Fever");
        assert_eq!(once, "Fever");
        let twice = append_entry(&once, "Cough");
        assert_eq!(twice, "Fever, Cough");
        assert_eq!(append_entry(&twice, "Fever"), twice);
    }

    #[test]
    fn test_parse_systolic() {
        assert_eq!(parse_systolic("135/90"), 135);
        assert_eq!(parse_systolic("garbage"), 120);
    }
}
