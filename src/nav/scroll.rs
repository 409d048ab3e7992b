use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::registry::{Registry, SectionId};

/// Navbar visual state driven by the scroll offset: the "scrolled"
/// treatment past a threshold and auto-hide while scrolling down, with the
/// navbar pinned near the top of the document.
pub struct ScrollModel {
    last_y: f64,
    pub scrolled: bool,
    pub hidden: bool,
}

impl ScrollModel {
    pub fn new() -> Self {
        ScrollModel {
            last_y: 0.0,
            scrolled: false,
            hidden: false,
        }
    }

    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > config::NAVBAR_SCROLLED_AT_PX;
        if y > self.last_y && y > config::NAVBAR_HIDE_AFTER_PX {
            self.hidden = true;
        } else if y < self.last_y {
            self.hidden = false;
        }
        if y <= config::NAVBAR_PIN_NEAR_TOP_PX {
            self.hidden = false;
        }
        self.last_y = y;
    }

    /// Pointer near the top of the viewport, or hovering the navbar.
    pub fn reveal(&mut self) {
        self.hidden = false;
    }
}

/// Document-space extent of one registered anchor, already shifted by the
/// header offset.
pub struct AnchorSpan {
    pub anchor: &'static str,
    pub top: f64,
    pub bottom: f64,
}

/// Which anchor spans the scroll position. The last matching span wins, so
/// overlapping spans resolve in reading order. `None` above the first
/// anchor, which leaves the prior highlight in place.
pub fn anchor_spanning(spans: &[AnchorSpan], scroll_y: f64) -> Option<&'static str> {
    let mut current = None;
    for span in spans {
        if scroll_y >= span.top && scroll_y < span.bottom {
            current = Some(span.anchor);
        }
    }
    current
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn element_height(selector: &str) -> f64 {
    document()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Fixed-header offset: navbar height plus submenu bar height plus the
/// given padding. Missing header elements count as zero height.
pub fn header_offset(padding: f64) -> f64 {
    element_height(".navbar") + element_height(".nav-submenu") + padding
}

/// Measures the registered anchors of the active section. Anchors whose
/// elements are missing from the markup are skipped.
pub fn collect_spans(registry: &Registry, section: SectionId) -> Vec<AnchorSpan> {
    let offset = header_offset(config::TRACKING_OFFSET_PX);
    let Some(doc) = document() else { return Vec::new() };
    registry
        .section(section)
        .sub_targets
        .iter()
        .filter_map(|target| {
            doc.get_element_by_id(target.id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| {
                    let top = el.offset_top() as f64 - offset;
                    AnchorSpan {
                        anchor: target.id,
                        top,
                        bottom: top + el.offset_height() as f64,
                    }
                })
        })
        .collect()
}

/// Smooth-scrolls to an anchor with the header offset applied. A missing
/// anchor element logs and falls back to the section's own container.
pub fn scroll_to_anchor(anchor: &str, section: SectionId) {
    let Some(doc) = document() else { return };
    let target = doc.get_element_by_id(anchor).or_else(|| {
        warn!(
            "no element for anchor '{}', falling back to section '{}'",
            anchor,
            section.as_str()
        );
        doc.get_element_by_id(&section.container_id())
    });
    let Some(el) = target.and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        warn!("no scroll target at all for anchor '{}'", anchor);
        return;
    };

    let top = el.offset_top() as f64 - header_offset(config::ANCHOR_SCROLL_PADDING_PX);
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top.max(0.0));
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<AnchorSpan> {
        vec![
            AnchorSpan { anchor: "hero", top: 0.0, bottom: 400.0 },
            AnchorSpan { anchor: "features", top: 400.0, bottom: 900.0 },
            AnchorSpan { anchor: "pricing", top: 900.0, bottom: 1500.0 },
        ]
    }

    #[test]
    fn picks_the_span_under_the_scroll_position() {
        assert_eq!(anchor_spanning(&spans(), 0.0), Some("hero"));
        assert_eq!(anchor_spanning(&spans(), 450.0), Some("features"));
        assert_eq!(anchor_spanning(&spans(), 899.9), Some("features"));
        assert_eq!(anchor_spanning(&spans(), 900.0), Some("pricing"));
    }

    #[test]
    fn above_the_first_span_matches_nothing() {
        let spans = vec![AnchorSpan { anchor: "features", top: 300.0, bottom: 700.0 }];
        assert_eq!(anchor_spanning(&spans, 100.0), None);
    }

    #[test]
    fn later_spans_win_when_overlapping() {
        let spans = vec![
            AnchorSpan { anchor: "a", top: 0.0, bottom: 1000.0 },
            AnchorSpan { anchor: "b", top: 500.0, bottom: 1200.0 },
        ];
        assert_eq!(anchor_spanning(&spans, 600.0), Some("b"));
    }

    #[test]
    fn navbar_scrolled_flag_tracks_the_threshold() {
        let mut model = ScrollModel::new();
        model.on_scroll(49.0);
        assert!(!model.scrolled);
        model.on_scroll(51.0);
        assert!(model.scrolled);
        model.on_scroll(10.0);
        assert!(!model.scrolled);
    }

    #[test]
    fn navbar_hides_scrolling_down_and_returns_scrolling_up() {
        let mut model = ScrollModel::new();
        model.on_scroll(80.0);
        assert!(!model.hidden); // down, but not past the hide threshold
        model.on_scroll(250.0);
        assert!(model.hidden);
        model.on_scroll(200.0);
        assert!(!model.hidden); // any upward scroll reveals
    }

    #[test]
    fn navbar_is_pinned_near_the_top() {
        let mut model = ScrollModel::new();
        model.on_scroll(300.0);
        assert!(model.hidden);
        model.on_scroll(8.0);
        assert!(!model.hidden);
    }

    #[test]
    fn pointer_reveal_unhides() {
        let mut model = ScrollModel::new();
        model.on_scroll(300.0);
        assert!(model.hidden);
        model.reveal();
        assert!(!model.hidden);
    }
}
