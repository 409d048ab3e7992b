use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// One-way scroll reveal: the wrapper gains "revealed" once its top edge
/// rises above the visibility threshold and never loses it again.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);
    let throttle = use_mut_ref(|| None::<Timeout>);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let done = Rc::new(Cell::new(false));

                let check = {
                    let node = node.clone();
                    let revealed = revealed.clone();
                    let done = done.clone();
                    let window = window.clone();
                    move || {
                        if done.get() {
                            return;
                        }
                        let viewport = window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        if let Some(el) = node.cast::<web_sys::Element>() {
                            let top = el.get_bounding_client_rect().top();
                            if top < viewport - config::REVEAL_VISIBLE_PX {
                                done.set(true);
                                revealed.set(true);
                            }
                        }
                    }
                };

                // elements already in view reveal without any scrolling
                check();

                let scroll_callback = {
                    let check = check.clone();
                    Closure::wrap(Box::new(move || {
                        let check = check.clone();
                        let timer = Timeout::new(config::SCROLL_THROTTLE_MS, move || check());
                        *throttle.borrow_mut() = Some(timer);
                    }) as Box<dyn FnMut()>)
                };

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
            (),
        );
    }

    html! {
        <div ref={node}
            class={classes!("reveal", (*revealed).then(|| "revealed"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
