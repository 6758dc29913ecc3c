//! vitrine-web - Browser bindings for the marketing site
//!
//! Enhances the server-rendered markup with the carousel and mobile menu
//! behavior defined in `vitrine-common`.

pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod listener;
pub mod logging;
pub mod menu;

use std::cell::RefCell;

use tracing::{debug, info, warn};
use vitrine_common::SiteConfig;

pub use carousel::Carousel;
pub use menu::MobileMenu;

/// Everything attached to the page
pub struct Site {
    pub menu: Option<MobileMenu>,
    pub carousels: Vec<Carousel>,
}

impl Site {
    pub fn init(config: &SiteConfig) -> Self {
        Self {
            menu: menu::init(config),
            carousels: carousel::init_all(config),
        }
    }
}

thread_local! {
    // Lives as long as the page
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Page entry point: load configuration, install logging, attach the menu and
/// every carousel. Calling it again does nothing.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let loaded = config::load(&document);
    logging::init(loaded.config.log_level());
    if let Some(e) = &loaded.error {
        warn!("Ignoring page configuration: {e}");
    }

    SITE.with(|site| {
        let mut site = site.borrow_mut();
        if site.is_some() {
            debug!("Already started");
            return;
        }
        let started = Site::init(&loaded.config);
        info!(
            carousels = started.carousels.len(),
            menu = started.menu.is_some(),
            "vitrine started"
        );
        *site = Some(started);
    });
}
