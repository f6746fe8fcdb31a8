//! Auth Page
//!
//! Login / signup segments. On login the session is persisted and the
//! user lands on their role's dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::api::RegisterArgs;
use crate::context::AppContext;
use crate::models::Department;
use crate::session::Session;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Signup,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();

    let (mode, set_mode) = signal(AuthMode::Login);
    let (busy, set_busy) = signal(false);

    // Form state
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (role, set_role) = signal(String::from("Patient"));
    let (phone_number, set_phone_number) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (gender, set_gender) = signal(String::from("Male"));
    let (department_id, set_department_id) = signal(String::new());
    let (specialization, set_specialization) = signal(String::new());
    let (experience_years, set_experience_years) = signal(String::new());
    let (departments, set_departments) = signal(Vec::<Department>::new());

    // Departments feed the doctor signup form
    Effect::new(move |_| {
        spawn_local(async move {
            match api::departments().await {
                Ok(list) => set_departments.set(list),
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[AUTH] failed to load departments: {err}").into(),
                    );
                }
            }
        });
    });

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if mode.get() == AuthMode::Signup {
            if full_name.get().trim().is_empty() {
                ctx.notify("Full name is required.");
                return;
            }
        }
        if email.get().trim().is_empty() || password.get().trim().is_empty() {
            ctx.notify("Email and password are required.");
            return;
        }
        if mode.get() == AuthMode::Signup {
            if role.get() == "Patient"
                && (age.get().trim().is_empty() || phone_number.get().trim().is_empty())
            {
                ctx.notify("Phone number and age are required for patients.");
                return;
            }
            if role.get() == "Doctor" && department_id.get().is_empty() {
                ctx.notify("Doctor must select a department.");
                return;
            }
        }

        let navigate = submit_navigate.clone();
        set_busy.set(true);
        spawn_local(async move {
            match mode.get_untracked() {
                AuthMode::Signup => {
                    let selected_role = role.get_untracked();
                    let args = RegisterArgs {
                        email: email.get_untracked(),
                        password: password.get_untracked(),
                        full_name: full_name.get_untracked(),
                        role: selected_role.clone(),
                        phone_number: Some(phone_number.get_untracked())
                            .filter(|p| !p.is_empty()),
                        age: age.get_untracked().trim().parse().ok(),
                        gender: (selected_role == "Patient").then(|| gender.get_untracked()),
                        department_id: (selected_role == "Doctor")
                            .then(|| department_id.get_untracked()),
                        specialization: (selected_role == "Doctor")
                            .then(|| specialization.get_untracked()),
                        experience_years: (selected_role == "Doctor")
                            .then(|| experience_years.get_untracked().trim().parse().ok())
                            .flatten(),
                    };
                    match api::register(&args).await {
                        Ok(()) => {
                            ctx.notify("Account created! Please login.");
                            set_mode.set(AuthMode::Login);
                        }
                        Err(err) => ctx.notify(err.to_string()),
                    }
                }
                AuthMode::Login => {
                    match api::login(&email.get_untracked(), &password.get_untracked()).await {
                        Ok(login) => {
                            let session = Session::from_login(&login);
                            let dashboard = session.role.dashboard_path();
                            ctx.sign_in(session);
                            navigate(dashboard, Default::default());
                        }
                        Err(err) => ctx.notify(err.to_string()),
                    }
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-title">
                    {move || match mode.get() {
                        AuthMode::Login => "Welcome Back",
                        AuthMode::Signup => "Create Account",
                    }}
                </h2>

                <div class="auth-segment">
                    <button
                        class=move || {
                            if mode.get() == AuthMode::Login { "segment-btn active" } else { "segment-btn" }
                        }
                        on:click=move |_| set_mode.set(AuthMode::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class=move || {
                            if mode.get() == AuthMode::Signup { "segment-btn active" } else { "segment-btn" }
                        }
                        on:click=move |_| set_mode.set(AuthMode::Signup)
                    >
                        "Sign Up"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    {move || (mode.get() == AuthMode::Signup).then(|| view! {
                        <label class="form-field">
                            "Full Name"
                            <input
                                type="text"
                                prop:value=move || full_name.get()
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                            />
                        </label>
                    })}

                    <label class="form-field">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || (mode.get() == AuthMode::Signup).then(|| view! {
                        <label class="form-field">
                            "I am a:"
                            <select
                                prop:value=move || role.get()
                                on:change=move |ev| set_role.set(event_target_value(&ev))
                            >
                                <option value="Patient">"Patient"</option>
                                <option value="Recipient">"Triage Officer (Recipient)"</option>
                                <option value="Doctor">"Doctor"</option>
                                <option value="Admin">"Admin"</option>
                            </select>
                        </label>
                    })}

                    {move || (mode.get() == AuthMode::Signup && role.get() == "Patient").then(|| view! {
                        <label class="form-field">
                            "Phone Number"
                            <input
                                type="text"
                                prop:value=move || phone_number.get()
                                on:input=move |ev| set_phone_number.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            "Age"
                            <input
                                type="number"
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
                    })}

                    {move || (mode.get() == AuthMode::Signup && role.get() == "Doctor").then(|| view! {
                        <label class="form-field">
                            "Department"
                            <select
                                prop:value=move || department_id.get()
                                on:change=move |ev| set_department_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select department"</option>
                                <For
                                    each=move || departments.get()
                                    key=|dept| dept.department_id.clone()
                                    children=|dept| view! {
                                        <option value=dept.department_id.clone()>{dept.name.clone()}</option>
                                    }
                                />
                            </select>
                        </label>
                        <label class="form-field">
                            "Specialization"
                            <input
                                type="text"
                                prop:value=move || specialization.get()
                                on:input=move |ev| set_specialization.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            "Experience (years)"
                            <input
                                type="number"
                                prop:value=move || experience_years.get()
                                on:input=move |ev| set_experience_years.set(event_target_value(&ev))
                            />
                        </label>
                    })}

                    <button type="submit" class="auth-btn" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Please wait..."
                            } else if mode.get() == AuthMode::Login {
                                "Sign In"
                            } else {
                                "Register"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
