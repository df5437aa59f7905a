use yew::prelude::*;

use super::{FieldError, Link};
use crate::dom::{alert, input_value};
use crate::hooks::{use_router, use_session};
use crate::models::{LoginRequest, UserType};
use crate::router::Route;
use crate::utils::FormErrors;
use crate::viewmodels::auth_viewmodel::validate_login;
use crate::viewmodels::AuthViewModel;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub role: UserType,
}

/// Donor and hospital login share one form; only copy and endpoint differ
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let role = props.role;
    let router = use_router();
    let session = use_session();

    // A donor arriving straight from sign-up gets their email pre-filled
    let notice = match role {
        UserType::Donor => session.pending_registration.clone(),
        UserType::Hospital => None,
    };
    let credentials = {
        let email = notice.as_ref().map(|r| r.email.clone()).unwrap_or_default();
        use_state(move || LoginRequest::new(email, ""))
    };
    let errors = use_state(FormErrors::new);
    let submitting = use_state(|| false);

    let on_email = {
        let credentials = credentials.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*credentials).clone();
            next.email = input_value(&e);
            credentials.set(next);
            if errors.has("email") {
                let mut cleared = (*errors).clone();
                cleared.clear("email");
                errors.set(cleared);
            }
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*credentials).clone();
            next.password = input_value(&e);
            credentials.set(next);
            if errors.has("password") {
                let mut cleared = (*errors).clone();
                cleared.clear("password");
                errors.set(cleared);
            }
        })
    };

    let on_submit = {
        let credentials = credentials.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(invalid) = validate_login(&credentials) {
                errors.set(invalid);
                return;
            }
            errors.set(FormErrors::new());
            submitting.set(true);

            let credentials = (*credentials).clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let navigate = router.navigate.clone();
            let refresh = session.refresh.clone();
            let set_pending = session.set_pending_registration.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new();
                let result = match role {
                    UserType::Donor => vm.login_donor(&credentials).await.map(|_| ()),
                    UserType::Hospital => vm.login_hospital(&credentials).await.map(|_| ()),
                };
                submitting.set(false);
                match result {
                    Ok(()) => {
                        refresh.emit(());
                        set_pending.emit(None);
                        alert("Login successful!");
                        navigate.emit(Route::dashboard_for(role));
                    }
                    Err(invalid) => errors.set(invalid),
                }
            });
        })
    };

    let (title, subtitle, register_route, register_label) = match role {
        UserType::Donor => (
            "Donor Login",
            "Access your donor dashboard",
            Route::DonorRegister,
            "Register here",
        ),
        UserType::Hospital => (
            "Hospital Login",
            "Access your hospital dashboard",
            Route::HospitalRegister,
            "Register your hospital",
        ),
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
            <div class="card form-card narrow">
                <div class="form-header">
                    <div class={classes!("form-icon", role.as_str())}>
                        { if role == UserType::Donor { "👤" } else { "🏥" } }
                    </div>
                    <h2>{title}</h2>
                    <p>{subtitle}</p>
                </div>

                if let Some(registration) = &notice {
                    <div class="notice notice-success">
                        {format!(
                            "Registration received for {}. Please log in to open your dashboard.",
                            registration.email
                        )}
                    </div>
                }

                <form class="form" onsubmit={on_submit} novalidate=true>
                    <div class="field">
                        <label for="email">{"Email Address"}</label>
                        <input id="email" type="email" name="email" class={input_class("email")}
                            placeholder="your.email@example.com"
                            value={credentials.email.clone()} oninput={on_email} />
                        <FieldError errors={(*errors).clone()} field="email" />
                    </div>
                    <div class="field">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" name="password" class={input_class("password")}
                            placeholder="Enter your password"
                            value={credentials.password.clone()} oninput={on_password} />
                        <FieldError errors={(*errors).clone()} field="password" />
                    </div>

                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        { if *submitting { "Logging in..." } else { "Login to Dashboard" } }
                    </button>
                </form>

                <p class="form-footer">
                    {"Don't have an account? "}
                    <Link to={register_route}>{register_label}</Link>
                </p>
            </div>
        </div>
    }
}
