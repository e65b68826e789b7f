mod config;
mod cube;
mod dom;
mod error;
mod page;
mod primitives;
mod reveal;
mod services;
mod site;
mod split;
mod styles;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{Level, error};
use dioxus::prelude::*;

use config::SiteConfig;
use page::Home;
use site::Site;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    let site = use_hook(|| Rc::new(RefCell::new(None::<Site>)));

    // Markup is in the DOM once effects run; install drivers once.
    use_effect(move || {
        if site.borrow().is_some() {
            return;
        }
        match Site::install(&SiteConfig::default()) {
            Ok(installed) => *site.borrow_mut() = Some(installed),
            Err(err) => error!(%err, "page effects disabled"),
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// `?debug=1` turns on driver diagnostics.
fn log_level() -> Level {
    let flag = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("debug"));
    level_for(flag.as_deref())
}

fn level_for(debug_flag: Option<&str>) -> Level {
    if debug_flag == Some("1") { Level::DEBUG } else { Level::INFO }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = dioxus::logger::init(log_level());
    dioxus::launch(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_level() {
        assert_eq!(level_for(Some("1")), Level::DEBUG);
        assert_eq!(level_for(Some("0")), Level::INFO);
        assert_eq!(level_for(Some("")), Level::INFO);
        assert_eq!(level_for(None), Level::INFO);
    }
}
