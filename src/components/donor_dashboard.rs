use chrono::Local;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_router, use_session};
use crate::models::UserType;
use crate::router::Route;
use crate::viewmodels::dashboard_viewmodel::{
    donation_history, format_date, member_since, next_eligible_date, DonorStats,
};
use crate::viewmodels::{gate, Gate};

#[function_component(DonorDashboard)]
pub fn donor_dashboard() -> Html {
    let router = use_router();
    let session = use_session();

    // Redirect before anything is read from the profile
    {
        let redirect = router.redirect.clone();
        use_effect_with(session.session.clone(), move |session| {
            if let Gate::Redirect(route) = gate(session, UserType::Donor) {
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

    let profile = match gate(&session.session, UserType::Donor) {
        Gate::Admit(admitted) => admitted.donor,
        Gate::Redirect(_) => None,
    };
    let Some(profile) = profile else {
        return html! {
            <div class="page page-centered">
                <div class="spinner"></div>
                <p>{"Loading your dashboard..."}</p>
            </div>
        };
    };

    let history = donation_history();
    let stats = DonorStats::from_history(&history);
    let next_eligible = next_eligible_date(
        Local::now().date_naive(),
        CONFIG.donation_interval_days,
    );

    let info = |icon: &str, label: &str, value: String| {
        html! {
            <div class="info-item">
                <span class="info-icon">{icon.to_string()}</span>
                <div>
                    <p class="info-label">{label.to_string()}</p>
                    <p class="info-value">{value}</p>
                </div>
            </div>
        }
    };

    html! {
        <div class="dashboard">
            <div class="card dashboard-header">
                <div class="dashboard-title">
                    <div class="avatar donor">{"👤"}</div>
                    <div>
                        <h1>{format!("Welcome back, {}!", profile.name)}</h1>
                        <p>{"Thank you for being a life-saver"}</p>
                    </div>
                </div>
                <button class="btn btn-ghost" onclick={on_logout}>{"⎋ Logout"}</button>
            </div>

            <div class="dashboard-grid">
                <div class="dashboard-main">
                    <div class="card">
                        <h2>{"Profile Information"}</h2>
                        <div class="info-grid">
                            {info("👤", "Full Name", profile.name.clone())}
                            {info("❤", "Blood Group", profile.blood_group.clone())}
                            {info("✉", "Email", profile.email.clone())}
                            {info("☎", "Phone", profile.contact_number.clone())}
                            {info("📍", "Address", profile.location.clone())}
                            {info("📅", "Member Since", member_since(&profile.created_at))}
                            <div class="info-item">
                                <span class="info-icon">{"⚡"}</span>
                                <div>
                                    <p class="info-label">{"Status"}</p>
                                    <span class="badge badge-green">{"ACTIVE"}</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h2>{"Recent Donation History"}</h2>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Location"}</th>
                                    <th>{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for history.iter().map(|record| html! {
                                    <tr key={record.date.to_string()}>
                                        <td>{format_date(record.date)}</td>
                                        <td>{record.location.clone()}</td>
                                        <td><span class="badge badge-green">{record.status.clone()}</span></td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>

                <aside class="dashboard-side">
                    <div class="card">
                        <h3>{"Quick Stats"}</h3>
                        <div class="stat-row">
                            <span>{"Total Donations"}</span>
                            <strong class="text-red">{stats.total_donations.to_string()}</strong>
                        </div>
                        <div class="stat-row">
                            <span>{"Lives Impacted"}</span>
                            <strong class="text-green">{format!("{}+", stats.lives_impacted)}</strong>
                        </div>
                        <div class="stat-row">
                            <span>{"Last Donation"}</span>
                            <span class="text-muted">
                                {stats.last_donation.map(format_date).unwrap_or_else(|| "-".to_string())}
                            </span>
                        </div>
                    </div>

                    <div class="card card-blue">
                        <h3>{"Next Eligible Donation"}</h3>
                        <p class="highlight">{format_date(next_eligible)}</p>
                        <p class="text-small">{"Mark your calendar to help save more lives!"}</p>
                    </div>

                    <div class="card card-yellow">
                        <h3>{"Achievement"}</h3>
                        <div class="achievement-icon">{"❤"}</div>
                        <p class="highlight">{"Life Saver"}</p>
                        <p class="text-small">
                            {format!(
                                "You've made {}+ donations and helped save multiple lives!",
                                stats.total_donations
                            )}
                        </p>
                    </div>
                </aside>
            </div>
        </div>
    }
}
