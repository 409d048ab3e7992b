use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::window;
use yew::UseReducerHandle;

use crate::config;
use crate::nav::scroll;
use crate::nav::state::{NavAction, NavState};
use crate::registry::{NavTarget, Registry, SectionId};

/// Resolves a URL fragment (with or without the leading '#') to a
/// navigation target. Empty and unknown fragments resolve to `None` and are
/// silently ignored by the caller.
pub fn resolve(registry: &Registry, fragment: &str) -> Option<NavTarget> {
    let token = fragment.strip_prefix('#').unwrap_or(fragment);
    if token.is_empty() {
        return None;
    }
    registry.resolve(token)
}

/// Reads the current fragment and reconciles the navigation state with it.
/// Runs once at startup and again on every hashchange.
pub fn handle_hash_navigation(nav: &UseReducerHandle<NavState>) {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    match resolve(Registry::global(), &hash) {
        Some(NavTarget::Section(id)) => {
            nav.dispatch(NavAction::SwitchSection(id.as_str().to_string()));
        }
        Some(NavTarget::SubTarget { section, anchor }) => {
            nav.dispatch(NavAction::SwitchSection(section.as_str().to_string()));
            nav.dispatch(NavAction::SelectLink(anchor.to_string()));
            // give the newly shown container a beat to render before scrolling
            Timeout::new(config::HASH_SCROLL_DELAY_MS, move || {
                scroll::scroll_to_anchor(anchor, section);
            })
            .forget();
        }
        None => {}
    }
}

/// Tab clicks write the section token into the fragment so the URL stays
/// shareable. The resulting hashchange re-runs `handle_hash_navigation`,
/// which is idempotent for an already-active section.
pub fn set_section_hash(id: SectionId) {
    if let Some(win) = window() {
        let _ = win.location().set_hash(id.as_str());
    }
}

/// Submenu clicks record the anchor in the URL without firing a hashchange,
/// so the click handler keeps control of highlight and scroll.
pub fn push_anchor_hash(anchor: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", anchor)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionId;

    #[test]
    fn section_fragment_is_equivalent_to_switch_section() {
        let registry = Registry::global();
        assert_eq!(
            resolve(registry, "#integration"),
            Some(NavTarget::Section(SectionId::Integration))
        );
        // with and without the '#'
        assert_eq!(resolve(registry, "integration"), resolve(registry, "#integration"));
    }

    #[test]
    fn sub_target_fragment_activates_the_owning_section() {
        assert_eq!(
            resolve(Registry::global(), "#data-security"),
            Some(NavTarget::SubTarget {
                section: SectionId::Infrastructure,
                anchor: "data-security",
            })
        );
    }

    #[test]
    fn pricing_deep_link_lands_inside_operations() {
        assert_eq!(
            resolve(Registry::global(), "#pricing"),
            Some(NavTarget::SubTarget {
                section: SectionId::Operations,
                anchor: "pricing",
            })
        );
    }

    #[test]
    fn empty_and_unknown_fragments_are_ignored() {
        let registry = Registry::global();
        assert_eq!(resolve(registry, ""), None);
        assert_eq!(resolve(registry, "#"), None);
        assert_eq!(resolve(registry, "#checkout"), None);
    }
}
