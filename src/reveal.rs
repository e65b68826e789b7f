//! One-shot reveal on first scroll into view

use dioxus::logger::tracing::debug;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;

/// What the observer does with one intersection record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Not on screen yet; keep watching
    Wait,
    /// Mark revealed and stop watching
    Reveal,
    /// Already revealed (a record queued before unobserve); just stop watching
    Release,
}

pub fn reveal_step(intersecting: bool, revealed: bool) -> RevealStep {
    match (intersecting, revealed) {
        (false, _) => RevealStep::Wait,
        (true, false) => RevealStep::Reveal,
        (true, true) => RevealStep::Release,
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns the observer and its callback. Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
    watched: usize,
}

impl RevealObserver {
    pub fn install(document: &Document, config: &SiteConfig) -> Result<Self> {
        let revealed = config.classes.revealed;
        let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let already = target.class_list().contains(revealed);
                match reveal_step(entry.is_intersecting(), already) {
                    RevealStep::Wait => {}
                    RevealStep::Reveal => {
                        dom::add_class(&target, revealed);
                        observer.unobserve(&target);
                    }
                    RevealStep::Release => observer.unobserve(&target),
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin("0px");
        init.set_threshold(&config.tuning.reveal_threshold.into());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let targets = dom::query_all(document, config.selectors.reveal)?;
        for el in &targets {
            dom::add_class(el, config.classes.reveal_pending);
            observer.observe(el);
        }
        debug!(count = targets.len(), "reveal observer watching");

        Ok(Self { observer, _callback: callback, watched: targets.len() })
    }

    pub fn watched(&self) -> usize {
        self.watched
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One watched element, driven the way the observer callback drives it.
    #[derive(Default)]
    struct Watched {
        reveals: u32,
        observed: bool,
    }

    impl Watched {
        fn deliver(&mut self, intersecting: bool) {
            if !self.observed {
                return;
            }
            match reveal_step(intersecting, self.reveals > 0) {
                RevealStep::Wait => {}
                RevealStep::Reveal => {
                    self.reveals += 1;
                    self.observed = false;
                }
                RevealStep::Release => self.observed = false,
            }
        }
    }

    #[test]
    fn waits_until_intersecting() {
        assert_eq!(reveal_step(false, false), RevealStep::Wait);
        assert_eq!(reveal_step(true, false), RevealStep::Reveal);
    }

    #[test]
    fn revealed_element_is_only_released() {
        assert_eq!(reveal_step(true, true), RevealStep::Release);
        assert_eq!(reveal_step(false, true), RevealStep::Wait);
    }

    #[test]
    fn reveal_happens_once_then_observation_stops() {
        let mut el = Watched { observed: true, ..Watched::default() };
        el.deliver(false);
        assert_eq!(el.reveals, 0);
        assert!(el.observed);

        el.deliver(true);
        el.deliver(false);
        el.deliver(true);
        assert_eq!(el.reveals, 1);
        assert!(!el.observed);
    }

    #[test]
    fn stale_record_after_reveal_does_not_double_mark() {
        // two records for the same element arrive in one callback batch
        let mut reveals = 0;
        let mut revealed = false;
        for intersecting in [true, true] {
            if reveal_step(intersecting, revealed) == RevealStep::Reveal {
                reveals += 1;
                revealed = true;
            }
        }
        assert_eq!(reveals, 1);
    }
}
