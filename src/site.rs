//! Installs every driver against the mounted page.

use dioxus::logger::tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::cube::CubeController;
use crate::dom;
use crate::error::{Result, SiteError};
use crate::reveal::RevealObserver;
use crate::services::ServicesDriver;
use crate::split;

/// Page-lifetime handles. Dropping this detaches every listener.
pub struct Site {
    _reveal: Option<RevealObserver>,
    _services: Option<ServicesDriver>,
    _cube: Option<CubeController>,
}

impl Site {
    /// A driver whose elements are missing is skipped; the others still run.
    pub fn install(config: &SiteConfig) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;

        let reveal = optional("reveal", RevealObserver::install(&document, config));
        if let Some(reveal) = &reveal {
            debug!(elements = reveal.watched(), "reveal ready");
        }

        match split::split_page(&document, config) {
            Ok(words) => debug!(words, "text split"),
            Err(err) => warn!(%err, "text split failed"),
        }

        let services = optional("services", ServicesDriver::install(&window, &document, config));
        let cube = optional("cube", CubeController::install(&window, &document, config));

        info!(
            services = services.is_some(),
            cube = cube.is_some(),
            "site drivers installed"
        );
        Ok(Self { _reveal: reveal, _services: services, _cube: cube })
    }
}

fn optional<T>(name: &str, installed: Result<T>) -> Option<T> {
    match installed {
        Ok(driver) => Some(driver),
        Err(SiteError::MissingElement(selector)) => {
            debug!(driver = name, %selector, "element absent, driver off");
            None
        }
        Err(err) => {
            warn!(driver = name, %err, "driver failed to install");
            None
        }
    }
}
