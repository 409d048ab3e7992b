//! Hook into the external icon library (Lucide, loaded from index.html).
//! Icon placeholders are `<i data-lucide="...">` elements; the library's
//! render entry point must run again after any subtree is swapped in, or the
//! new placeholders stay empty.

use std::cell::Cell;

use js_sys::{Function, Reflect};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

thread_local! {
    static MISSING_WARNED: Cell<bool> = Cell::new(false);
}

/// Re-renders icon placeholders. Safe to call repeatedly; if the library
/// never loaded this degrades to a single logged warning.
pub fn refresh() {
    let Some(win) = window() else { return };
    let lucide = match Reflect::get(&win, &JsValue::from_str("lucide")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => {
            MISSING_WARNED.with(|warned| {
                if !warned.replace(true) {
                    warn!("lucide is not loaded, icons will not render");
                }
            });
            return;
        }
    };
    let create_icons = Reflect::get(&lucide, &JsValue::from_str("createIcons"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    match create_icons {
        Some(f) => {
            if let Err(e) = f.call0(&lucide) {
                warn!("lucide.createIcons failed: {:?}", e);
            }
        }
        None => warn!("lucide is loaded but has no createIcons entry point"),
    }
}
