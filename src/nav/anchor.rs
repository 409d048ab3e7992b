use yew::prelude::*;

use crate::nav::hash;
use crate::nav::scroll;
use crate::nav::state::{NavAction, NavState};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub anchor: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Internal `#anchor` link for page content. Intercepts the click so the
/// browser never performs its offset-less fragment jump: the anchor is
/// recorded in the URL, the submenu highlight updates, and the view scrolls
/// with the header offset applied, exactly like a submenu-link click.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let nav = use_context::<UseReducerHandle<NavState>>();
    let anchor = props.anchor;

    let onclick = nav.map(|nav| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let section = nav.active_section;
            nav.dispatch(NavAction::SelectLink(anchor.to_string()));
            hash::push_anchor_hash(anchor);
            scroll::scroll_to_anchor(anchor, section);
        })
    });

    html! {
        <a class={props.class.clone()} href={format!("#{}", anchor)} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
