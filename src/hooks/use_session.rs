// ============================================================================
// USE SESSION - Contenedor único de sesión para toda la app
// ============================================================================
// Los componentes leen la sesión de aquí y nunca de localStorage. Después de
// que un viewmodel escribe en el SessionStore se llama a `refresh`.
// ============================================================================

use yew::prelude::*;

use crate::models::{DonorRegistration, Session};
use crate::state::SessionStore;
use crate::viewmodels::AuthViewModel;

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub session: Session,
    /// Registration just submitted, carried as navigation state only
    pub pending_registration: Option<DonorRegistration>,
    pub refresh: Callback<()>,
    pub logout: Callback<()>,
    pub set_pending_registration: Callback<Option<DonorRegistration>>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| SessionStore::browser().load());
    let pending_registration = use_state(|| None::<DonorRegistration>);

    let refresh = {
        let session = session.clone();
        Callback::from(move |_| {
            session.set(SessionStore::browser().load());
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            AuthViewModel::new().logout();
            session.set(Session::default());
        })
    };

    let set_pending_registration = {
        let pending_registration = pending_registration.clone();
        Callback::from(move |registration: Option<DonorRegistration>| {
            pending_registration.set(registration);
        })
    };

    let handle = SessionHandle {
        session: (*session).clone(),
        pending_registration: (*pending_registration).clone(),
        refresh,
        logout,
        set_pending_registration,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// Session handle from the nearest `SessionProvider`
#[hook]
pub fn use_session() -> SessionHandle {
    match use_context::<SessionHandle>() {
        Some(handle) => handle,
        None => {
            log::error!("❌ [SESSION] use_session() outside SessionProvider");
            SessionHandle {
                session: SessionStore::browser().load(),
                pending_registration: None,
                refresh: Callback::noop(),
                logout: Callback::noop(),
                set_pending_registration: Callback::noop(),
            }
        }
    }
}
