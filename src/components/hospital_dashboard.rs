use chrono::Utc;
use yew::prelude::*;

use crate::dom::{alert, input_value, select_value};
use crate::hooks::{use_router, use_session};
use crate::models::{BloodGroup, BloodRequest, UserType, VerificationStatus};
use crate::router::Route;
use crate::viewmodels::blood_request_viewmodel::{parse_request_form, MSG_REQUEST_SUBMITTED};
use crate::viewmodels::{gate, BloodRequestViewModel, Gate};

#[function_component(HospitalDashboard)]
pub fn hospital_dashboard() -> Html {
    let router = use_router();
    let session = use_session();
    let requests = use_state(|| BloodRequestViewModel::new().history());
    let blood_group = use_state(String::new);
    let quantity = use_state(String::new);
    let submitting = use_state(|| false);

    {
        let redirect = router.redirect.clone();
        use_effect_with(session.session.clone(), move |session| {
            if let Gate::Redirect(route) = gate(session, UserType::Hospital) {
                redirect.emit(route);
            }
            || ()
        });
    }

    let on_logout = {
        let logout = session.logout.clone();
        let navigate = router.navigate.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navigate.emit(Route::Home);
        })
    };

    let on_group = {
        let blood_group = blood_group.clone();
        Callback::from(move |e: Event| blood_group.set(select_value(&e)))
    };
    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| quantity.set(input_value(&e)))
    };

    let on_submit = {
        let requests = requests.clone();
        let blood_group = blood_group.clone();
        let quantity = quantity.clone();
        let submitting = submitting.clone();
        let token = session.session.hospital_token().map(str::to_string);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let request = match parse_request_form(&blood_group, &quantity) {
                Ok(request) => request,
                Err(message) => {
                    alert(message);
                    return;
                }
            };
            submitting.set(true);

            let current = (*requests).clone();
            let token = token.clone();
            let requests = requests.clone();
            let blood_group = blood_group.clone();
            let quantity = quantity.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = BloodRequestViewModel::new()
                    .submit(&current, &request, token.as_deref(), Utc::now())
                    .await;
                submitting.set(false);
                match result {
                    Ok(updated) => {
                        requests.set(updated);
                        blood_group.set(String::new());
                        quantity.set(String::new());
                        alert(MSG_REQUEST_SUBMITTED);
                    }
                    Err(message) => alert(message),
                }
            });
        })
    };

    let hospital = match gate(&session.session, UserType::Hospital) {
        Gate::Admit(admitted) => admitted.hospital,
        Gate::Redirect(_) => None,
    };
    let Some(hospital) = hospital else {
        return html! {
            <div class="page page-centered">
                <div class="spinner"></div>
                <p>{"Loading your dashboard..."}</p>
            </div>
        };
    };

    let verification = hospital.profile.verification_status;
    let badge_class = match verification {
        VerificationStatus::Verified => "badge badge-green",
        VerificationStatus::Pending => "badge badge-yellow",
    };

    html! {
        <div class="dashboard dashboard-narrow">
            <div class="card dashboard-header">
                <div class="dashboard-title">
                    <div class="avatar hospital">{"🏥"}</div>
                    <div>
                        <h1>{hospital.profile.hospital_name.clone()}</h1>
                        <span class={badge_class}>
                            { if verification == VerificationStatus::Verified { "✔ " } else { "⚠ " } }
                            {verification.badge_text()}
                        </span>
                    </div>
                </div>
                <button class="btn btn-ghost" onclick={on_logout}>{"⎋ Logout"}</button>
            </div>

            <div class="card request-card">
                <h2>{"❤ Request Blood"}</h2>
                <form class="form" onsubmit={on_submit}>
                    <div class="field">
                        <label for="bloodGroup">{"Blood Group *"}</label>
                        <select id="bloodGroup" name="bloodGroup" class="input" onchange={on_group}>
                            <option value="" selected={blood_group.is_empty()}>{"Select Blood Group"}</option>
                            { for BloodGroup::ALL.iter().map(|group| html! {
                                <option value={group.as_str()} selected={*blood_group == group.as_str()}>
                                    {group.as_str()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="field">
                        <label for="quantity">{"Quantity (Units) *"}</label>
                        <input id="quantity" type="number" min="1" name="quantity" class="input"
                            placeholder="Number of units"
                            value={(*quantity).clone()} oninput={on_quantity} />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { "Submitting..." } else { "Submit Blood Request" } }
                    </button>
                </form>
            </div>

            <div class="card">
                <h2>{"🕒 Blood Request History"}</h2>
                { request_history(&requests) }
            </div>
        </div>
    }
}

fn request_history(requests: &[BloodRequest]) -> Html {
    if requests.is_empty() {
        return html! {
            <div class="empty-state">
                <div class="empty-icon">{"❤"}</div>
                <p>{"No blood requests yet"}</p>
                <p class="text-small">{"Your submitted requests will appear here"}</p>
            </div>
        };
    }

    html! {
        <table class="table">
            <thead>
                <tr>
                    <th>{"Date"}</th>
                    <th>{"Blood Group"}</th>
                    <th>{"Quantity"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for requests.iter().map(|request| html! {
                    <tr key={request.id.clone()}>
                        <td>{request.requested_on()}</td>
                        <td class="text-red">{request.blood_group.as_str()}</td>
                        <td>{format!("{} units", request.quantity)}</td>
                        <td>
                            <span class={request.status.badge_class()}>
                                {request.status.label().to_string()}
                            </span>
                        </td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
