use yew::prelude::*;

use super::Link;
use crate::router::Route;

const STATS: [(&str, &str, &str); 4] = [
    ("👥", "Registered Donors", "50,000+"),
    ("❤", "Lives Saved", "25,000+"),
    ("📍", "Partner Hospitals", "500+"),
    ("⏱", "Average Response", "< 2 hours"),
];

const BENEFITS: [(&str, &str, &str); 3] = [
    (
        "🛡",
        "Safe & Secure",
        "All donations follow strict medical protocols and safety standards.",
    ),
    (
        "⏱",
        "Quick Response",
        "Emergency blood requests are matched with donors in real-time.",
    ),
    (
        "🏅",
        "Recognition",
        "Donors receive certificates and recognition for their life-saving contributions.",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="home">
            <section class="hero">
                <div class="hero-text">
                    <h1>
                        {"Save Lives Through"}
                        <span class="accent">{" Blood Donation"}</span>
                    </h1>
                    <p>
                        {"Join our community of heroes who make a difference every day. \
                          Your donation can save up to three lives and bring hope to families in need."}
                    </p>
                    <div class="hero-actions">
                        <Link to={Route::DonorRegister} class="btn btn-primary">{"Become a Donor"}</Link>
                        <Link to={Route::HospitalRegister} class="btn btn-outline">{"Hospital Registration"}</Link>
                    </div>
                </div>
                <img
                    class="hero-image"
                    src="https://images.pexels.com/photos/6823567/pexels-photo-6823567.jpeg?auto=compress&cs=tinysrgb&w=600"
                    alt="Blood donation process"
                />
            </section>

            <section class="stats">
                { for STATS.iter().map(|(icon, label, value)| html! {
                    <div class="stat">
                        <div class="stat-icon">{*icon}</div>
                        <h3>{*value}</h3>
                        <p>{*label}</p>
                    </div>
                }) }
            </section>

            <section class="awareness">
                <img
                    src="https://images.pexels.com/photos/6823559/pexels-photo-6823559.jpeg?auto=compress&cs=tinysrgb&w=600"
                    alt="Medical professionals with blood donation"
                />
                <div>
                    <h2>{"Why Blood Donation Matters"}</h2>
                    <p>
                        {"Every 2 seconds, someone in need requires blood. From accident victims \
                          to patients undergoing surgery, cancer treatment, or managing chronic \
                          conditions - your donation directly impacts lives in your community."}
                    </p>
                    <p>
                        {"Blood cannot be manufactured - it can only come from generous donors like you. \
                          With a simple 30-minute donation, you can make the difference between life and death."}
                    </p>
                    <div class="benefits">
                        { for BENEFITS.iter().map(|(icon, title, description)| html! {
                            <div class="benefit">
                                <span class="benefit-icon">{*icon}</span>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2>{"Ready to Make a Difference?"}</h2>
                <p>
                    {"Join thousands of heroes who have already made their mark. \
                      Your journey to saving lives starts here."}
                </p>
                <div class="hero-actions">
                    <Link to={Route::DonorLogin} class="btn btn-light">{"Donor Login"}</Link>
                    <Link to={Route::HospitalLogin} class="btn btn-outline-light">{"Hospital Login"}</Link>
                </div>
            </section>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page page-centered">
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link to={Route::Home} class="btn btn-primary">{"Back to Home"}</Link>
        </div>
    }
}
