use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::config;
use crate::nav::scroll::{self, ScrollModel};
use crate::nav::state::{NavAction, NavState};
use crate::nav::hash;
use crate::registry::Registry;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub nav: UseReducerHandle<NavState>,
}

/// Fixed header: main tabs, the per-section submenu bar, the hamburger and
/// the mobile overlay. Also owns the scroll-driven effects (submenu
/// highlight tracking, "scrolled" styling, auto-hide with pointer reveal).
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let nav = props.nav.clone();
    let scrolled = use_state_eq(|| false);
    let hidden = use_state_eq(|| false);
    let model = use_mut_ref(ScrollModel::new);
    let throttle = use_mut_ref(|| None::<Timeout>);

    // Throttled scroll pipeline. Re-attached per active section so the
    // tracker only ever measures the submenu group that is on screen.
    {
        let nav = nav.clone();
        let scrolled = scrolled.clone();
        let hidden = hidden.clone();
        let model = model.clone();
        let throttle = throttle.clone();
        let section = nav.active_section;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let nav = nav.clone();
                    let scrolled = scrolled.clone();
                    let hidden = hidden.clone();
                    let model = model.clone();
                    let timer = Timeout::new(config::SCROLL_THROTTLE_MS, move || {
                        let y = scroll::scroll_y();
                        {
                            let mut model = model.borrow_mut();
                            model.on_scroll(y);
                            scrolled.set(model.scrolled);
                            hidden.set(model.hidden);
                        }
                        let spans = scroll::collect_spans(Registry::global(), section);
                        if let Some(anchor) = scroll::anchor_spanning(&spans, y) {
                            nav.dispatch(NavAction::HighlightFromScroll(anchor.to_string()));
                        }
                    });
                    // dropping the previous timer collapses bursts of events
                    *throttle.borrow_mut() = Some(timer);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            section,
        );
    }

    // Pointer near the top of the viewport brings the navbar back.
    {
        let hidden = hidden.clone();
        let model = model.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let mouse_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    if e.client_y() <= config::MOUSE_REVEAL_BAND_PX {
                        model.borrow_mut().reveal();
                        hidden.set(false);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                document
                    .add_event_listener_with_callback(
                        "mousemove",
                        mouse_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "mousemove",
                            mouse_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // While the mobile overlay is open, a click outside both the hamburger
    // and the overlay closes it.
    {
        let nav = nav.clone();
        let open = nav.mobile_menu_open;
        use_effect_with_deps(
            move |open| {
                let document = web_sys::window().unwrap().document().unwrap();
                let mut click_callback = None;

                if *open {
                    let callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let Some(target) = target else { return };
                        let doc = web_sys::window().and_then(|w| w.document());
                        let Some(doc) = doc else { return };
                        let inside = ["hamburger", "mobileMenu"].iter().any(|id| {
                            doc.get_element_by_id(id)
                                .map(|el| el.contains(Some(&target)))
                                .unwrap_or(false)
                        });
                        if !inside {
                            nav.dispatch(NavAction::CloseMobileMenu);
                        }
                    }) as Box<dyn FnMut(MouseEvent)>);

                    document
                        .add_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    click_callback = Some(callback);
                }

                move || {
                    if let Some(callback) = click_callback {
                        document
                            .remove_event_listener_with_callback(
                                "click",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                    }
                }
            },
            open,
        );
    }

    let on_mouseenter = {
        let hidden = hidden.clone();
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            model.borrow_mut().reveal();
            hidden.set(false);
        })
    };

    let toggle_mobile = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMobileMenu);
        })
    };

    let registry = Registry::global();
    let active = nav.active_section;

    html! {
        <>
        <nav class={classes!(
                "navbar",
                (*scrolled).then(|| "scrolled"),
                (*hidden).then(|| "hidden"),
            )}
            onmouseenter={on_mouseenter}>
            <div class="nav-content">
                <a class="nav-logo" href="#operations">{"FarmSight"}</a>
                <div class="nav-tabs">
                    { for registry.sections().iter().map(|section| {
                        let id = section.id;
                        let onclick = {
                            let nav = nav.clone();
                            Callback::from(move |_: MouseEvent| {
                                nav.dispatch(NavAction::SwitchSection(id.as_str().to_string()));
                                hash::set_section_hash(id);
                            })
                        };
                        html! {
                            <button
                                class={classes!("nav-tab", (active == id).then(|| "active"))}
                                data-section={id.as_str()}
                                {onclick}>
                                { section.tab_label }
                            </button>
                        }
                    }) }
                </div>
                <button id="hamburger"
                    class={classes!("hamburger", nav.mobile_menu_open.then(|| "active"))}
                    onclick={toggle_mobile}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class="nav-submenu">
                { for registry.sections().iter().map(|section| {
                    let group_active = active == section.id;
                    html! {
                        <div class={classes!("submenu-items", group_active.then(|| "active"))}
                            data-submenu={section.id.as_str()}>
                            { for section.sub_targets.iter().map(|target| {
                                submenu_link(&nav, target.id, target.label, group_active)
                            }) }
                        </div>
                    }
                }) }
            </div>
        </nav>
        <div id="mobileMenu"
            class={classes!("mobile-menu", nav.mobile_menu_open.then(|| "active"))}>
            { for registry.sections().iter().map(|section| {
                let id = section.id;
                let shown = active == id;
                let switch = {
                    let nav = nav.clone();
                    Callback::from(move |_: MouseEvent| {
                        nav.dispatch(NavAction::SwitchSection(id.as_str().to_string()));
                        hash::set_section_hash(id);
                    })
                };
                html! {
                    <div class="mobile-section"
                        data-section={id.as_str()}
                        style={if shown { "display: block;" } else { "display: none;" }}>
                        <button class="mobile-section-title" onclick={switch}>
                            { section.tab_label }
                        </button>
                        <div class="mobile-nav-links">
                            { for section.sub_targets.iter().map(|target| {
                                submenu_link(&nav, target.id, target.label, shown)
                            }) }
                        </div>
                    </div>
                }
            }) }
        </div>
        </>
    }
}

fn submenu_link(
    nav: &UseReducerHandle<NavState>,
    anchor: &'static str,
    label: &'static str,
    group_active: bool,
) -> Html {
    let onclick = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let section = nav.active_section;
            nav.dispatch(NavAction::SelectLink(anchor.to_string()));
            hash::push_anchor_hash(anchor);
            scroll::scroll_to_anchor(anchor, section);
        })
    };
    let link_active = group_active && nav.active_link == anchor;
    html! {
        <a class={classes!("submenu-link", link_active.then(|| "active"))}
            href={format!("#{}", anchor)}
            {onclick}>
            { label }
        </a>
    }
}
