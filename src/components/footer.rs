use yew::prelude::*;

use super::Link;
use crate::router::Route;
use crate::utils::APP_NAME;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-about">
                    <div class="footer-brand">
                        <span class="brand-icon">{"❤"}</span>
                        <span class="brand-name">{APP_NAME}</span>
                    </div>
                    <p>
                        {"Connecting donors with those in need. Every drop counts in saving lives \
                          and building a healthier community together."}
                    </p>
                    <div class="footer-contact">
                        <span>{"☎ +1 (555) 123-4567"}</span>
                        <span>{"✉ info@bloodlink.org"}</span>
                    </div>
                </div>
                <div class="footer-links">
                    <h3>{"Quick Links"}</h3>
                    <Link to={Route::DonorRegister}>{"Become a Donor"}</Link>
                    <Link to={Route::HospitalRegister}>{"Hospital Registration"}</Link>
                    <Link to={Route::DonorLogin}>{"Donor Login"}</Link>
                    <Link to={Route::HospitalLogin}>{"Hospital Login"}</Link>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© 2025 {}. All rights reserved.", APP_NAME)}
            </div>
        </footer>
    }
}
