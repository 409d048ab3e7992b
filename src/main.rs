use log::{error, info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod icons;
mod registry;

mod nav {
    pub mod anchor;
    pub mod hash;
    pub mod navbar;
    pub mod scroll;
    pub mod state;
}

mod components {
    pub mod contact;
    pub mod notification;
    pub mod pricing;
    pub mod reveal;
    pub mod solutions;
}

mod sections {
    pub mod applications;
    pub mod infrastructure;
    pub mod integration;
    pub mod operations;
}

use nav::hash;
use nav::navbar::Navbar;
use nav::state::NavState;
use registry::{Registry, SectionId};
use sections::{
    applications::Applications, infrastructure::Infrastructure, integration::Integration,
    operations::Operations,
};

#[function_component(App)]
fn app() -> Html {
    let nav = use_reducer_eq(NavState::default);
    let table_check = use_state(|| Registry::global().validate());

    // Hash deep-linking: once at startup, then on every fragment change.
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                hash::handle_hash_navigation(&nav);

                let window = web_sys::window().unwrap();
                let hash_callback = Closure::wrap(Box::new(move || {
                    hash::handle_hash_navigation(&nav);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "hashchange",
                        hash_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "hashchange",
                            hash_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // The icon library has to re-render placeholders after every swap of
    // visible content.
    use_effect_with_deps(
        |_| {
            icons::refresh();
            || ()
        },
        nav.active_section,
    );

    // Open mobile overlay locks body scroll.
    use_effect_with_deps(
        |open: &bool| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let value = if *open { "hidden" } else { "" };
                let _ = body.style().set_property("overflow", value);
            }
            || ()
        },
        nav.mobile_menu_open,
    );

    if let Err(e) = &*table_check {
        error!("section table is invalid: {}", e);
        return html! {
            <div class="error">
                <h1>{"Something went wrong"}</h1>
                <p>{"The page could not be initialized. Please try again later."}</p>
            </div>
        };
    }

    let active = nav.active_section;
    let container = |id: SectionId, inner: Html| {
        html! {
            <div id={id.container_id()}
                class={classes!("content-section", (active == id).then(|| "active"))}
                data-section={id.as_str()}>
                { inner }
            </div>
        }
    };

    html! {
        <>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        background: rgba(255, 255, 255, 0.95);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .navbar.scrolled {
                        background: rgba(255, 255, 255, 0.98);
                        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.12);
                    }
                    .navbar.hidden {
                        transform: translateY(-100%);
                    }
                    .content-section {
                        display: none;
                    }
                    .content-section.active {
                        display: block;
                    }
                    .submenu-items {
                        display: none;
                    }
                    .submenu-items.active {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .submenu-link.active {
                        font-weight: 600;
                        border-bottom: 2px solid #2563eb;
                    }
                    .nav-tab.active {
                        color: #2563eb;
                    }
                    .mobile-menu {
                        display: none;
                        position: fixed;
                        inset: 0;
                        z-index: 999;
                        background: rgba(255, 255, 255, 0.98);
                        padding-top: 5rem;
                    }
                    .mobile-menu.active {
                        display: block;
                    }
                    .notification {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        z-index: 10000;
                        color: white;
                        padding: 1rem;
                        border-radius: 8px;
                        max-width: 400px;
                    }
                    .notification-success { background: rgba(34, 197, 94, 0.95); }
                    .notification-info { background: rgba(37, 99, 235, 0.95); }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        cursor: pointer;
                        margin-left: auto;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>
            <Navbar nav={nav.clone()} />
            <ContextProvider<UseReducerHandle<NavState>> context={nav.clone()}>
                <main>
                    { container(SectionId::Operations, html! { <Operations /> }) }
                    { container(SectionId::Integration, html! { <Integration /> }) }
                    { container(SectionId::Infrastructure, html! { <Infrastructure /> }) }
                    { container(SectionId::Applications, html! { <Applications /> }) }
                </main>
            </ContextProvider<UseReducerHandle<NavState>>>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting FarmSight site");
    yew::Renderer::<App>::new().render();
}
