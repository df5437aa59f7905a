use yew::prelude::*;

use super::{FieldError, Link};
use crate::dom::{alert, input_value, textarea_value};
use crate::hooks::{use_router, use_session};
use crate::models::HospitalRegistration;
use crate::router::Route;
use crate::utils::FormErrors;
use crate::viewmodels::auth_viewmodel::validate_hospital_registration;
use crate::viewmodels::AuthViewModel;

type Setter = fn(&mut HospitalRegistration, String);

#[function_component(HospitalRegister)]
pub fn hospital_register() -> Html {
    let router = use_router();
    let session = use_session();
    let form = use_state(HospitalRegistration::default);
    let errors = use_state(FormErrors::new);
    let submitting = use_state(|| false);

    // Writes the field and drops any error shown for it
    let update = {
        let form = form.clone();
        let errors = errors.clone();
        move |field: &'static str, apply: Setter, value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
            if errors.has(field) {
                let mut cleared = (*errors).clone();
                cleared.clear(field);
                errors.set(cleared);
            }
        }
    };

    let on_input = |field: &'static str, apply: Setter| {
        let update = update.clone();
        Callback::from(move |e: InputEvent| update(field, apply, input_value(&e)))
    };

    let on_location = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            update("location", |f, v| f.location = v, textarea_value(&e))
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(invalid) = validate_hospital_registration(&form) {
                errors.set(invalid);
                return;
            }
            errors.set(FormErrors::new());
            submitting.set(true);

            let form = (*form).clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let navigate = router.navigate.clone();
            let refresh = session.refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = AuthViewModel::new().register_hospital(&form).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        refresh.emit(());
                        alert("Registration successful! Redirecting to dashboard...");
                        navigate.emit(Route::HospitalDashboard);
                    }
                    Err(invalid) => errors.set(invalid),
                }
            });
        })
    };

    let input_class = |field: &str| {
        if errors.has(field) {
            classes!("input", "input-error")
        } else {
            classes!("input")
        }
    };

    html! {
        <div class="page">
            <div class="card form-card">
                <div class="form-header">
                    <div class="form-icon hospital">{"🏥"}</div>
                    <h2>{"Hospital Registration"}</h2>
                    <p>{"Register your hospital to request blood from our donor network"}</p>
                </div>

                <form class="form" onsubmit={on_submit} novalidate=true>
                    <div class="field">
                        <label for="name">{"Hospital Name *"}</label>
                        <input id="name" type="text" name="name" class={input_class("name")}
                            placeholder="City General Hospital"
                            value={form.name.clone()} oninput={on_input("name", |f, v| f.name = v)} />
                        <FieldError errors={(*errors).clone()} field="name" />
                    </div>
                    <div class="field">
                        <label for="email">{"Email Address *"}</label>
                        <input id="email" type="email" name="email" class={input_class("email")}
                            placeholder="admin@hospital.com"
                            value={form.email.clone()} oninput={on_input("email", |f, v| f.email = v)} />
                        <FieldError errors={(*errors).clone()} field="email" />
                    </div>
                    <div class="field">
                        <label for="contactNumber">{"Phone Number *"}</label>
                        <input id="contactNumber" type="tel" name="contactNumber"
                            class={input_class("contactNumber")}
                            placeholder="+1 (555) 123-4567"
                            value={form.contact_number.clone()}
                            oninput={on_input("contactNumber", |f, v| f.contact_number = v)} />
                        <FieldError errors={(*errors).clone()} field="contactNumber" />
                    </div>
                    <div class="field">
                        <label for="licenseNumber">{"License Number"}</label>
                        <input id="licenseNumber" type="text" name="licenseNumber" class="input"
                            placeholder="Hospital license number"
                            value={form.license_number.clone()}
                            oninput={on_input("licenseNumber", |f, v| f.license_number = v)} />
                    </div>
                    <div class="field">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" name="password" class="input"
                            placeholder="Create a password"
                            value={form.password.clone()}
                            oninput={on_input("password", |f, v| f.password = v)} />
                    </div>
                    <div class="field">
                        <label for="location">{"Hospital Address *"}</label>
                        <textarea id="location" name="location" rows="3" class={input_class("location")}
                            placeholder="Street, city, state"
                            value={form.location.clone()} oninput={on_location} />
                        <FieldError errors={(*errors).clone()} field="location" />
                    </div>

                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        { if *submitting { "Registering..." } else { "Register Hospital" } }
                    </button>
                </form>

                <p class="form-footer">
                    {"Already registered? "}
                    <Link to={Route::HospitalLogin}>{"Login here"}</Link>
                </p>
            </div>
        </div>
    }
}
