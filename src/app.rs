// ============================================================================
// APP - Raíz de la aplicación: router, sesión y página activa
// ============================================================================

use yew::prelude::*;

use crate::components::{
    DonorDashboard, DonorRegister, Footer, HomePage, HospitalDashboard, HospitalRegister,
    LoginPage, Navbar, NotFound,
};
use crate::hooks::{use_router, RouterProvider, SessionProvider};
use crate::models::UserType;
use crate::router::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::DonorRegister => html! { <DonorRegister /> },
        Route::DonorLogin => html! { <LoginPage key={UserType::Donor.as_str()} role={UserType::Donor} /> },
        Route::DonorDashboard => html! { <DonorDashboard /> },
        Route::HospitalRegister => html! { <HospitalRegister /> },
        Route::HospitalLogin => html! { <LoginPage key={UserType::Hospital.as_str()} role={UserType::Hospital} /> },
        Route::HospitalDashboard => html! { <HospitalDashboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Main)]
fn main_content() -> Html {
    let router = use_router();
    html! {
        <main class="main">{ switch(router.route) }</main>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <RouterProvider>
            <SessionProvider>
                <div class="app">
                    <Navbar />
                    <Main />
                    <Footer />
                </div>
            </SessionProvider>
        </RouterProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_routes_mount_distinct_pages() {
        let donor = switch(Route::DonorLogin);
        let hospital = switch(Route::HospitalLogin);
        assert!(donor.key().is_some());
        assert_ne!(donor.key(), hospital.key());
    }
}
