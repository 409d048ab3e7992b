use std::rc::Rc;

use log::warn;
use yew::Reducible;

use crate::registry::{Registry, SectionId};

/// The one piece of mutable shared state on the page: which section is
/// active, which submenu link inside it is highlighted, and whether the
/// mobile overlay is open. Owned by the root component via `use_reducer`;
/// every transition happens synchronously inside one reducer call, so the
/// rendered tab/submenu/content/mobile views can never disagree.
#[derive(Clone, PartialEq, Debug)]
pub struct NavState {
    pub active_section: SectionId,
    pub active_link: &'static str,
    pub mobile_menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        let registry = Registry::global();
        NavState {
            active_section: SectionId::Operations,
            active_link: registry.first_anchor(SectionId::Operations),
            mobile_menu_open: false,
        }
    }
}

pub enum NavAction {
    /// Switch the active section by its fragment token. Unknown tokens log
    /// and leave the state untouched.
    SwitchSection(String),
    /// A submenu link was clicked. The anchor must belong to the active
    /// section's group.
    SelectLink(String),
    /// Scroll tracking landed on an anchor. Scoped to the submenu highlight,
    /// never changes the active section or the mobile menu.
    HighlightFromScroll(String),
    ToggleMobileMenu,
    CloseMobileMenu,
}

impl NavState {
    /// Pure transition function; the `Reducible` impl delegates here so the
    /// state machine is testable off the DOM.
    pub fn apply(&self, registry: &Registry, action: &NavAction) -> NavState {
        let mut next = self.clone();
        match action {
            NavAction::SwitchSection(token) => match SectionId::parse(token) {
                Some(id) => {
                    next.active_section = id;
                    next.active_link = registry.first_anchor(id);
                    next.mobile_menu_open = false;
                }
                None => {
                    warn!("ignoring switch to unknown section '{}'", token);
                }
            },
            NavAction::SelectLink(anchor) => {
                match registry.anchor_in(self.active_section, anchor) {
                    Some(target) => {
                        next.active_link = target.id;
                        next.mobile_menu_open = false;
                    }
                    None => {
                        warn!(
                            "submenu link '{}' is not in the '{}' group",
                            anchor,
                            self.active_section.as_str()
                        );
                    }
                }
            }
            NavAction::HighlightFromScroll(anchor) => {
                if let Some(target) = registry.anchor_in(self.active_section, anchor) {
                    next.active_link = target.id;
                }
            }
            NavAction::ToggleMobileMenu => {
                next.mobile_menu_open = !self.mobile_menu_open;
            }
            NavAction::CloseMobileMenu => {
                next.mobile_menu_open = false;
            }
        }
        next
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        Rc::new(self.apply(Registry::global(), &action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch(state: &NavState, token: &str) -> NavState {
        state.apply(
            Registry::global(),
            &NavAction::SwitchSection(token.to_string()),
        )
    }

    #[test]
    fn defaults_to_operations_with_first_link() {
        let state = NavState::default();
        assert_eq!(state.active_section, SectionId::Operations);
        assert_eq!(state.active_link, "hero");
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn switching_activates_exactly_one_of_everything() {
        let registry = Registry::global();
        let mut state = NavState::default();
        for id in SectionId::ALL {
            state = switch(&state, id.as_str());
            // one active section and one active link imply exactly one
            // active tab, content container and submenu group in the view
            assert_eq!(state.active_section, id);
            assert_eq!(state.active_link, registry.first_anchor(id));
            assert!(!state.mobile_menu_open);
        }
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let state = NavState::default();
        assert_eq!(switch(&state, "sales"), state);
        assert_eq!(switch(&state, ""), state);
    }

    #[test]
    fn select_link_is_scoped_to_the_active_group() {
        let registry = Registry::global();
        let state = NavState::default();
        let picked = state.apply(registry, &NavAction::SelectLink("pricing".into()));
        assert_eq!(picked.active_link, "pricing");
        assert_eq!(picked.active_section, SectionId::Operations);

        // anchor from another section's group: no-op
        let foreign = state.apply(registry, &NavAction::SelectLink("data-security".into()));
        assert_eq!(foreign, state);
    }

    #[test]
    fn hero_cta_anchors_select_within_operations() {
        // the hero links route through SelectLink like submenu clicks, so
        // their targets must stay registered under operations
        let registry = Registry::global();
        let state = NavState::default();
        for anchor in ["contact", "pricing"] {
            let picked = state.apply(registry, &NavAction::SelectLink(anchor.to_string()));
            assert_eq!(picked.active_link, anchor);
            assert_eq!(picked.active_section, SectionId::Operations);
        }
    }

    #[test]
    fn scroll_highlight_never_changes_the_section() {
        let registry = Registry::global();
        let state = switch(&NavState::default(), "infrastructure");
        let tracked = state.apply(
            registry,
            &NavAction::HighlightFromScroll("data-security".into()),
        );
        assert_eq!(tracked.active_section, SectionId::Infrastructure);
        assert_eq!(tracked.active_link, "data-security");

        // anchors outside the active group leave the highlight alone
        let unmoved = state.apply(registry, &NavAction::HighlightFromScroll("pricing".into()));
        assert_eq!(unmoved, state);
    }

    #[test]
    fn switching_closes_the_mobile_menu() {
        let registry = Registry::global();
        let open = NavState::default().apply(registry, &NavAction::ToggleMobileMenu);
        assert!(open.mobile_menu_open);
        let switched = switch(&open, "applications");
        assert!(!switched.mobile_menu_open);
        let closed = open.apply(registry, &NavAction::CloseMobileMenu);
        assert!(!closed.mobile_menu_open);
    }
}
