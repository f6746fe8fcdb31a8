//! Patient Intake Page
//!
//! Vitals, visit type, symptom/condition pickers, and document upload.
//! Validation happens entirely client-side; nothing leaves the page
//! until it passes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::VisitArgs;
use crate::components::ChipPicker;
use crate::context::AppContext;

/// Defaults when the master lists cannot be fetched.
const FALLBACK_SYMPTOMS: &[&str] = &[
    "Chest Pain",
    "Shortness of Breath",
    "Fever",
    "Headache",
    "Dizziness",
    "Cough",
    "Vomiting",
    "Abdominal Pain",
    "Palpitations",
    "Weakness",
    "Numbness",
    "Diarrhea",
];
const FALLBACK_CONDITIONS: &[&str] = &[
    "Hypertension",
    "Diabetes",
    "Heart Disease",
    "Asthma",
    "Chronic Kidney Disease",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct IntakeForm {
    pub age: String,
    pub gender: String,
    pub systolic_bp: String,
    pub heart_rate: String,
    pub temperature: String,
    pub visit_type: String,
    pub symptoms: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub uploaded_documents: Vec<String>,
}

/// Client-side validation; rejects bad vitals and an empty symptom
/// selection before any request is built.
pub(crate) fn validate(form: &IntakeForm) -> Result<VisitArgs, String> {
    let age: u32 = form
        .age
        .trim()
        .parse()
        .ok()
        .filter(|age| *age > 0)
        .ok_or("Please enter a valid age.")?;
    let systolic_bp: u32 = form
        .systolic_bp
        .trim()
        .parse()
        .ok()
        .filter(|bp| *bp >= 50)
        .ok_or("Please enter a valid systolic BP.")?;
    let heart_rate: u32 = form
        .heart_rate
        .trim()
        .parse()
        .ok()
        .filter(|rate| *rate >= 30)
        .ok_or("Please enter a valid heart rate.")?;
    let temperature: f64 = form
        .temperature
        .trim()
        .parse()
        .ok()
        .filter(|temp| *temp >= 30.0)
        .ok_or("Please enter a valid temperature in \u{b0}C.")?;
    if form.symptoms.is_empty() {
        return Err("Select at least one symptom.".to_string());
    }

    Ok(VisitArgs {
        patient_id: None,
        age,
        gender: form.gender.clone(),
        symptoms: form.symptoms.clone(),
        systolic_bp,
        heart_rate,
        temperature,
        visit_type: form.visit_type.clone(),
        chronic_conditions: form.chronic_conditions.clone(),
        uploaded_documents: form.uploaded_documents.clone(),
        use_preferred_doctor: None,
    })
}

#[component]
pub fn IntakePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();

    let (age, set_age) = signal(String::new());
    let (gender, set_gender) = signal(String::from("Male"));
    let (systolic_bp, set_systolic_bp) = signal(String::new());
    let (heart_rate, set_heart_rate) = signal(String::new());
    let (temperature, set_temperature) = signal(String::new());
    let (visit_type, set_visit_type) = signal(String::from("Walk-In"));

    let (symptom_options, set_symptom_options) = signal(Vec::<String>::new());
    let (condition_options, set_condition_options) = signal(Vec::<String>::new());
    let (selected_symptoms, set_selected_symptoms) = signal(Vec::<String>::new());
    let (selected_conditions, set_selected_conditions) = signal(Vec::<String>::new());

    let (uploaded_documents, set_uploaded_documents) = signal(Vec::<String>::new());
    let (uploading, set_uploading) = signal(false);

    // Master lists, with built-in fallbacks when the endpoints fail.
    Effect::new(move |_| {
        spawn_local(async move {
            let symptoms = api::symptoms(None).await;
            let conditions = api::chronic_conditions().await;

            let fetched_symptoms: Vec<String> = symptoms
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|entry| entry.name.clone())
                .collect();
            let fetched_conditions: Vec<String> = conditions
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|entry| entry.name.clone())
                .collect();

            if symptoms.is_err() || conditions.is_err() {
                ctx.notify("Failed to load symptom/condition lists. Using defaults.");
            }

            set_symptom_options.set(if fetched_symptoms.is_empty() {
                FALLBACK_SYMPTOMS.iter().map(|s| s.to_string()).collect()
            } else {
                fetched_symptoms
            });
            set_condition_options.set(if fetched_conditions.is_empty() {
                FALLBACK_CONDITIONS.iter().map(|s| s.to_string()).collect()
            } else {
                fetched_conditions
            });
        });
    });

    let on_file_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>().cloned() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_document(&file).await {
                Ok(result) => {
                    set_uploaded_documents.update(|docs| docs.push(result.file_path));

                    let detected = result.detected_conditions;
                    if !detected.symptoms.is_empty() {
                        ctx.notify(format!(
                            "Detected symptoms: {}",
                            detected.symptoms.join(", ")
                        ));
                        set_selected_symptoms.update(|selected| {
                            for symptom in detected.symptoms {
                                if !selected.contains(&symptom) {
                                    selected.push(symptom);
                                }
                            }
                        });
                    }
                    if !detected.chronic_conditions.is_empty() {
                        set_selected_conditions.update(|selected| {
                            for condition in detected.chronic_conditions {
                                if !selected.contains(&condition) {
                                    selected.push(condition);
                                }
                            }
                        });
                    }
                }
                Err(_) => ctx.notify("File upload failed."),
            }
            set_uploading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = IntakeForm {
            age: age.get(),
            gender: gender.get(),
            systolic_bp: systolic_bp.get(),
            heart_rate: heart_rate.get(),
            temperature: temperature.get(),
            visit_type: visit_type.get(),
            symptoms: selected_symptoms.get(),
            chronic_conditions: selected_conditions.get(),
            uploaded_documents: uploaded_documents.get(),
        };
        let args = match validate(&form) {
            Ok(args) => args,
            Err(message) => {
                ctx.notify(message);
                return;
            }
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_visit(&args).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(err) if err.is_unauthorized() => {}
                Err(err) => ctx.notify(err.to_string()),
            }
        });
    };

    view! {
        <div class="intake-page">
            <form class="intake-container" on:submit=on_submit>
                <div class="section-header">
                    <h2>"Patient Information"</h2>
                </div>

                <div class="form-row">
                    <label class="form-field">
                        "Age"
                        <input
                            type="number"
                            placeholder="e.g. 45"
                            prop:value=move || age.get()
                            on:input=move |ev| set_age.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Gender"
                        <select
                            prop:value=move || gender.get()
                            on:change=move |ev| set_gender.set(event_target_value(&ev))
                        >
                            <option value="Male">"Male"</option>
                            <option value="Female">"Female"</option>
                            <option value="Other">"Other"</option>
                        </select>
                    </label>
                    <label class="form-field">
                        "Systolic BP (mmHg)"
                        <input
                            type="number"
                            placeholder="e.g. 120"
                            prop:value=move || systolic_bp.get()
                            on:input=move |ev| set_systolic_bp.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Heart Rate (bpm)"
                        <input
                            type="number"
                            placeholder="e.g. 80"
                            prop:value=move || heart_rate.get()
                            on:input=move |ev| set_heart_rate.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Temperature (\u{b0}C)"
                        <input
                            type="number"
                            placeholder="e.g. 37.5"
                            prop:value=move || temperature.get()
                            on:input=move |ev| set_temperature.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="form-row">
                    <label class="form-field">
                        "Visit Type"
                        <select
                            prop:value=move || visit_type.get()
                            on:change=move |ev| set_visit_type.set(event_target_value(&ev))
                        >
                            <option value="Walk-In">"Walk-In"</option>
                            <option value="Appointment">"Appointment"</option>
                            <option value="Emergency">"Emergency"</option>
                        </select>
                    </label>
                </div>

                <div class="symptoms-section">
                    <label class="section-label">"Symptoms (click to select)"</label>
                    <ChipPicker
                        options=symptom_options
                        selected=selected_symptoms
                        set_selected=set_selected_symptoms
                    />
                </div>

                <div class="conditions-section">
                    <label class="section-label">"Pre-existing Conditions"</label>
                    <ChipPicker
                        options=condition_options
                        selected=selected_conditions
                        set_selected=set_selected_conditions
                    />
                </div>

                <div class="upload-section">
                    <label class="section-label">"Upload Health Document (EHR / EMR)"</label>
                    <input
                        type="file"
                        accept=".jpg,.png,.pdf"
                        on:change=on_file_change
                    />
                    <p class="upload-hint">
                        {move || {
                            if uploading.get() {
                                "Uploading & analyzing...".to_string()
                            } else {
                                let count = uploaded_documents.get().len();
                                if count > 0 {
                                    format!("{count} document(s) attached")
                                } else {
                                    "Supported: images (JPG, PNG), PDF".to_string()
                                }
                            }
                        }}
                    </p>
                </div>

                <button type="submit" class="run-triage-btn">"Run AI Triage"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> IntakeForm {
        IntakeForm {
            age: "45".into(),
            gender: "Female".into(),
            systolic_bp: "120".into(),
            heart_rate: "80".into(),
            temperature: "37.5".into(),
            visit_type: "Walk-In".into(),
            symptoms: vec!["Fever".into()],
            chronic_conditions: vec![],
            uploaded_documents: vec![],
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let args = validate(&valid_form()).expect("Validation failed");
        assert_eq!(args.age, 45);
        assert_eq!(args.systolic_bp, 120);
        assert_eq!(args.symptoms, vec!["Fever".to_string()]);
        assert!(args.use_preferred_doctor.is_none());
    }

    #[test]
    fn test_zero_symptoms_rejected() {
        let mut form = valid_form();
        form.symptoms.clear();
        assert_eq!(
            validate(&form).unwrap_err(),
            "Select at least one symptom."
        );
    }

    #[test]
    fn test_bad_vitals_rejected() {
        let mut form = valid_form();
        form.age = "abc".into();
        assert_eq!(validate(&form).unwrap_err(), "Please enter a valid age.");

        let mut form = valid_form();
        form.age = "0".into();
        assert_eq!(validate(&form).unwrap_err(), "Please enter a valid age.");

        let mut form = valid_form();
        form.systolic_bp = "40".into();
        assert_eq!(
            validate(&form).unwrap_err(),
            "Please enter a valid systolic BP."
        );

        let mut form = valid_form();
        form.heart_rate = "10".into();
        assert_eq!(
            validate(&form).unwrap_err(),
            "Please enter a valid heart rate."
        );

        let mut form = valid_form();
        form.temperature = "25".into();
        assert_eq!(
            validate(&form).unwrap_err(),
            "Please enter a valid temperature in \u{b0}C."
        );
    }
}
