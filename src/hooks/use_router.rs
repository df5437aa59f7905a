// ============================================================================
// USE ROUTER - Ruta actual compartida por Context
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::router::{current_route, push_route, replace_route, Route};

#[derive(Clone, PartialEq)]
pub struct RouterHandle {
    pub route: Route,
    /// New history entry (links, post-submit navigation)
    pub navigate: Callback<Route>,
    /// Replaces the current entry (dashboard gate)
    pub redirect: Callback<Route>,
}

#[derive(Properties, PartialEq)]
pub struct RouterProviderProps {
    pub children: Children,
}

#[function_component(RouterProvider)]
pub fn router_provider(props: &RouterProviderProps) -> Html {
    let route = use_state(current_route);

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                route.set(current_route());
            });
            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "popstate",
                    listener.as_ref().unchecked_ref(),
                ) {
                    log::error!("❌ [ROUTER] Could not listen for popstate: {:?}", e);
                }
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if let Err(e) = push_route(next) {
                log::error!("❌ [ROUTER] pushState failed: {:?}", e);
            }
            log::info!("🧭 [ROUTER] -> {}", next.path());
            route.set(next);
        })
    };

    let redirect = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if let Err(e) = replace_route(next) {
                log::error!("❌ [ROUTER] replaceState failed: {:?}", e);
            }
            log::info!("↪️ [ROUTER] redirect -> {}", next.path());
            route.set(next);
        })
    };

    let handle = RouterHandle {
        route: *route,
        navigate,
        redirect,
    };

    html! {
        <ContextProvider<RouterHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<RouterHandle>>
    }
}

/// Router handle from the nearest `RouterProvider`
#[hook]
pub fn use_router() -> RouterHandle {
    match use_context::<RouterHandle>() {
        Some(handle) => handle,
        None => {
            log::error!("❌ [ROUTER] use_router() outside RouterProvider");
            RouterHandle {
                route: current_route(),
                navigate: Callback::noop(),
                redirect: Callback::noop(),
            }
        }
    }
}
