use yew::prelude::*;

use super::Link;
use crate::hooks::use_router;
use crate::router::Route;
use crate::utils::APP_NAME;

const LINKS: [(Route, &str); 4] = [
    (Route::DonorRegister, "Register as Donor"),
    (Route::DonorLogin, "Donor Login"),
    (Route::HospitalRegister, "Register Hospital"),
    (Route::HospitalLogin, "Hospital Login"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let router = use_router();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let nav_class = |route: Route| {
        if router.route == route {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link to={Route::Home} class="navbar-brand">
                    <span class="brand-icon">{"❤"}</span>
                    <span class="brand-name">{APP_NAME}</span>
                </Link>

                <div class="navbar-links">
                    <Link to={Route::Home} class={nav_class(Route::Home)}>{"Home"}</Link>
                    <div class="nav-group">
                        <span class="nav-group-title">{"Donor"}</span>
                        <div class="nav-dropdown">
                            { for LINKS[..2].iter().map(|(route, label)| html! {
                                <Link to={*route} class={nav_class(*route)}>{*label}</Link>
                            }) }
                        </div>
                    </div>
                    <div class="nav-group">
                        <span class="nav-group-title">{"Hospital"}</span>
                        <div class="nav-dropdown">
                            { for LINKS[2..].iter().map(|(route, label)| html! {
                                <Link to={*route} class={nav_class(*route)}>{*label}</Link>
                            }) }
                        </div>
                    </div>
                </div>

                <button class="navbar-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="navbar-mobile">
                    <Link to={Route::Home} class={nav_class(Route::Home)} onclick={close_menu.clone()}>
                        {"Home"}
                    </Link>
                    { for LINKS.iter().map(|(route, label)| html! {
                        <Link to={*route} class={nav_class(*route)} onclick={close_menu.clone()}>
                            {*label}
                        </Link>
                    }) }
                </div>
            }
        </nav>
    }
}
