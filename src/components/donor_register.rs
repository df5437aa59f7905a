use yew::prelude::*;

use super::Link;
use crate::dom::{alert, input_value, select_value, textarea_value};
use crate::hooks::{use_router, use_session};
use crate::models::BloodGroup;
use crate::router::Route;
use crate::viewmodels::{AuthViewModel, DonorRegisterForm};

#[function_component(DonorRegister)]
pub fn donor_register() -> Html {
    let router = use_router();
    let session = use_session();
    let form = use_state(DonorRegisterForm::default);
    let submitting = use_state(|| false);

    let on_input = |apply: fn(&mut DonorRegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
        })
    };

    let on_location = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.location = textarea_value(&e);
            form.set(next);
        })
    };

    let on_select = |apply: fn(&mut DonorRegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            apply(&mut next, select_value(&e));
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let form = (*form).clone();
            let submitting = submitting.clone();
            let navigate = router.navigate.clone();
            let set_pending = session.set_pending_registration.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = AuthViewModel::new().register_donor(&form).await;
                submitting.set(false);
                match result {
                    Ok(registration) => {
                        set_pending.emit(Some(registration));
                        navigate.emit(Route::DonorDashboard);
                    }
                    Err(message) => alert(message),
                }
            });
        })
    };

    html! {
        <div class="page">
            <div class="card form-card">
                <div class="form-header">
                    <div class="form-icon donor">{"❤"}</div>
                    <h2>{"Donor Registration"}</h2>
                    <p>{"Register to become a blood donor and save lives"}</p>
                </div>

                <form class="form" onsubmit={on_submit}>
                    <input class="input" type="text" name="name" placeholder="Full Name" required=true
                        value={form.name.clone()} oninput={on_input(|f, v| f.name = v)} />
                    <input class="input" type="number" name="age" placeholder="Age" required=true
                        value={form.age.clone()} oninput={on_input(|f, v| f.age = v)} />
                    <select class="input" name="gender" onchange={on_select(|f, v| f.gender = v)}>
                        <option value="" selected={form.gender.is_empty()}>{"Gender (optional)"}</option>
                        { for ["Male", "Female", "Other"].iter().map(|g| html! {
                            <option value={*g} selected={form.gender == *g}>{*g}</option>
                        }) }
                    </select>
                    <select class="input" name="bloodGroup" required=true
                        onchange={on_select(|f, v| f.blood_group = v)}>
                        <option value="" selected={form.blood_group.is_empty()}>{"Blood Group"}</option>
                        { for BloodGroup::ALL.iter().map(|group| html! {
                            <option value={group.as_str()} selected={form.blood_group == group.as_str()}>
                                {group.as_str()}
                            </option>
                        }) }
                    </select>
                    <input class="input" type="email" name="email" placeholder="Email" required=true
                        value={form.email.clone()} oninput={on_input(|f, v| f.email = v)} />
                    <input class="input" type="password" name="password" placeholder="Password" required=true
                        value={form.password.clone()} oninput={on_input(|f, v| f.password = v)} />
                    <input class="input" type="tel" name="contactNumber" placeholder="Contact Number" required=true
                        value={form.contact_number.clone()} oninput={on_input(|f, v| f.contact_number = v)} />
                    <textarea class="input" name="location" placeholder="Address" rows="3" required=true
                        value={form.location.clone()} oninput={on_location} />

                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        { if *submitting { "Registering..." } else { "Register" } }
                    </button>
                </form>

                <p class="form-footer">
                    {"Already registered? "}
                    <Link to={Route::DonorLogin}>{"Login here"}</Link>
                </p>
            </div>
        </div>
    }
}
