use yew::prelude::*;

use crate::hooks::use_router;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    /// Extra handler run after navigation (e.g. closing the mobile menu)
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// `<a>` that navigates through the router instead of reloading
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let router = use_router();
    let to = props.to;
    let extra = props.onclick.clone();

    let onclick = Callback::from(move |e: MouseEvent| {
        // Let ctrl/cmd-click open a new tab
        if e.ctrl_key() || e.meta_key() || e.shift_key() {
            return;
        }
        e.prevent_default();
        router.navigate.emit(to);
        if let Some(extra) = &extra {
            extra.emit(());
        }
    });

    html! {
        <a href={to.path()} class={props.class.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}
