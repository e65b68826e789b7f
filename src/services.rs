//! Services strip: vertical scroll through `#servicios` slides the inner
//! track sideways, and items light up as they come into view.

use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::{SiteConfig, Tuning};
use crate::dom;
use crate::error::Result;
use crate::primitives::{Progress, Rect, Viewport};

/// Section geometry as read on each scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub section_top: f64,
    pub section_height: f64,
    pub track_width: f64,
}

impl StripLayout {
    /// How far through the pinned section the page has scrolled.
    pub fn progress(&self, scroll_y: f64, viewport: Viewport) -> Progress {
        Progress::through(scroll_y - self.section_top, self.section_height - viewport.height)
    }

    /// Horizontal translation for the track, or `None` when the track fits
    /// in the viewport and there is nothing to slide.
    pub fn track_offset(&self, scroll_y: f64, viewport: Viewport) -> Option<f64> {
        let travel = self.track_width - viewport.width;
        (travel > 0.0).then(|| -(self.progress(scroll_y, viewport) * travel))
    }
}

/// Whether an item at `rect` counts as seen. Desktop measures the horizontal
/// position inside the sliding track, mobile the vertical one.
pub fn item_in_view(rect: Rect, viewport: Viewport, tuning: &Tuning) -> bool {
    if viewport.is_mobile(tuning.mobile_breakpoint) {
        rect.entered_vertically(viewport, tuning.mobile_activation)
    } else {
        rect.entered_horizontally(viewport, tuning.desktop_activation)
    }
}

struct Strip {
    window: Window,
    document: Document,
    section: HtmlElement,
    track: HtmlElement,
    config: SiteConfig,
}

impl Strip {
    fn layout(&self) -> StripLayout {
        StripLayout {
            section_top: self.section.offset_top() as f64,
            section_height: self.section.offset_height() as f64,
            track_width: self.track.scroll_width() as f64,
        }
    }

    fn on_scroll(&self) {
        let viewport = dom::viewport(&self.window);
        if viewport.is_mobile(self.config.tuning.mobile_breakpoint) {
            self.activate_visible(viewport);
            return;
        }

        let scroll_y = dom::scroll_y(&self.window);
        if let Some(x) = self.layout().track_offset(scroll_y, viewport) {
            dom::set_style(&self.track, "transform", &format!("translateX({x}px)"));
            self.activate_visible(viewport);
        }
    }

    /// Adds the active class to every item in view. Never removes it.
    fn activate_visible(&self, viewport: Viewport) {
        let Ok(items) = dom::query_all(&self.document, self.config.selectors.service_item) else {
            return;
        };
        for item in items.iter().filter(|item| self.in_view(item, viewport)) {
            dom::add_class(item, self.config.classes.item_active);
        }
    }

    fn in_view(&self, item: &Element, viewport: Viewport) -> bool {
        let rect = Rect::from_dom(&item.get_bounding_client_rect());
        item_in_view(rect, viewport, &self.config.tuning)
    }
}

/// Keeps the scroll listener alive.
pub struct ServicesDriver {
    _scroll: EventListener,
}

impl ServicesDriver {
    pub fn install(window: &Window, document: &Document, config: &SiteConfig) -> Result<Self> {
        let section = dom::by_id::<HtmlElement>(document, config.selectors.services_section_id)?;
        let track = dom::query::<HtmlElement>(document, config.selectors.track)?;

        let strip = Rc::new(Strip {
            window: window.clone(),
            document: document.clone(),
            section,
            track,
            config: config.clone(),
        });

        let on_scroll = Rc::clone(&strip);
        let scroll = EventListener::new(window, "scroll", move |_| on_scroll.on_scroll());

        strip.activate_visible(dom::viewport(window));
        Ok(Self { _scroll: scroll })
    }
}
