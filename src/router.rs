// ============================================================================
// ROUTER - Rutas del cliente sobre la History API
// ============================================================================

use wasm_bindgen::JsValue;

use crate::models::UserType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    DonorRegister,
    DonorLogin,
    DonorDashboard,
    HospitalRegister,
    HospitalLogin,
    HospitalDashboard,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(|c| c == '?' || c == '#').next().unwrap_or("");
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/donor/register" => Route::DonorRegister,
            "/donor/login" => Route::DonorLogin,
            "/donor/dashboard" => Route::DonorDashboard,
            "/hospital/register" => Route::HospitalRegister,
            "/hospital/login" => Route::HospitalLogin,
            "/hospital/dashboard" => Route::HospitalDashboard,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::DonorRegister => "/donor/register",
            Route::DonorLogin => "/donor/login",
            Route::DonorDashboard => "/donor/dashboard",
            Route::HospitalRegister => "/hospital/register",
            Route::HospitalLogin => "/hospital/login",
            Route::HospitalDashboard => "/hospital/dashboard",
            Route::NotFound => "/404",
        }
    }

    pub fn login_for(role: UserType) -> Self {
        match role {
            UserType::Donor => Route::DonorLogin,
            UserType::Hospital => Route::HospitalLogin,
        }
    }

    pub fn dashboard_for(role: UserType) -> Self {
        match role {
            UserType::Donor => Route::DonorDashboard,
            UserType::Hospital => Route::HospitalDashboard,
        }
    }
}

/// Route for the page the browser is currently showing
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

/// Pushes a history entry; callers update their own route state afterwards
pub fn push_route(route: Route) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let history = window.history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))?;
    window.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

/// Replaces the current entry, used by dashboard gate redirects
pub fn replace_route(route: Route) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 7] = [
        Route::Home,
        Route::DonorRegister,
        Route::DonorLogin,
        Route::DonorDashboard,
        Route::HospitalRegister,
        Route::HospitalLogin,
        Route::HospitalDashboard,
    ];

    #[test]
    fn every_route_parses_its_own_path() {
        for route in ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_query_and_fragment_are_ignored() {
        assert_eq!(Route::from_path("/donor/login/"), Route::DonorLogin);
        assert_eq!(Route::from_path("/hospital/dashboard?tab=history"), Route::HospitalDashboard);
        assert_eq!(Route::from_path("/#top"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
        assert_eq!(Route::from_path("/donor"), Route::NotFound);
    }

    #[test]
    fn role_routes() {
        assert_eq!(Route::login_for(UserType::Hospital), Route::HospitalLogin);
        assert_eq!(Route::dashboard_for(UserType::Donor), Route::DonorDashboard);
    }
}
