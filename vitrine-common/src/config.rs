use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

use crate::carousel::{CarouselOptions, DEFAULT_SETTLE_DELAY_MS};
use crate::menu::MenuLabel;
use crate::viewport::{Breakpoint, DEFAULT_BREAKPOINT_PX};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

fn default_breakpoint_px() -> u32 {
    DEFAULT_BREAKPOINT_PX
}

fn default_settle_delay_ms() -> u32 {
    DEFAULT_SETTLE_DELAY_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Site-wide settings, optionally embedded in the page as JSON.
/// Every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Widths at or below this are mobile
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,
    /// Scroll events are ignored for this long after a programmatic carousel scroll
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u32,
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub carousel: CarouselSelectors,
    pub menu: MenuSelectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint_px(),
            settle_delay_ms: default_settle_delay_ms(),
            log_level: default_log_level(),
            carousel: CarouselSelectors::default(),
            menu: MenuSelectors::default(),
        }
    }
}

/// Markup contract of a carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSelectors {
    /// Carousel roots, matched against the whole document
    pub container: String,
    /// Scrollable element holding the items, inside a root
    pub items: String,
    /// One item, inside a root
    pub item: String,
    /// Element receiving the generated pagination buttons, inside a root
    pub buttons: String,
    /// Class set on the selected pagination button
    pub active_class: String,
}

impl Default for CarouselSelectors {
    fn default() -> Self {
        Self {
            container: ".carousel".to_string(),
            items: ".carousel-items".to_string(),
            item: ".carousel-item".to_string(),
            buttons: ".carousel-bullets-controls".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Markup contract of the mobile menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSelectors {
    pub toggle: String,
    pub panel: String,
    /// Body class that blocks page scrolling while the panel is open
    pub scroll_lock_class: String,
    pub open_label: String,
    pub close_label: String,
}

impl Default for MenuSelectors {
    fn default() -> Self {
        Self {
            toggle: ".mobile-menu-toggle".to_string(),
            panel: ".nav-container".to_string(),
            scroll_lock_class: "prevent-scroll".to_string(),
            open_label: "Open mobile menu".to_string(),
            close_label: "Close mobile menu".to_string(),
        }
    }
}

impl MenuSelectors {
    pub fn label_text(&self, label: MenuLabel) -> &str {
        match label {
            MenuLabel::Open => &self.open_label,
            MenuLabel::Close => &self.close_label,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration block.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint_px == 0 {
            return Err(ConfigError::Config(
                "breakpoint_px must be greater than zero".to_string(),
            ));
        }
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Config(format!("unknown log level: {}", self.log_level)))?;

        let selectors = [
            ("carousel.container", &self.carousel.container),
            ("carousel.items", &self.carousel.items),
            ("carousel.item", &self.carousel.item),
            ("carousel.buttons", &self.carousel.buttons),
            ("carousel.active_class", &self.carousel.active_class),
            ("menu.toggle", &self.menu.toggle),
            ("menu.panel", &self.menu.panel),
            ("menu.scroll_lock_class", &self.menu.scroll_lock_class),
        ];
        for (name, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.breakpoint_px)
    }

    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            breakpoint: self.breakpoint(),
            settle_delay_ms: self.settle_delay_ms,
        }
    }

    /// Falls back to INFO when the configured level does not parse.
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

/// Parse a per-carousel `data-breakpoint` override. Zero and garbage are ignored.
pub fn parse_breakpoint_override(value: Option<&str>) -> Option<Breakpoint> {
    value
        .and_then(|v| v.trim().trim_end_matches("px").parse::<u32>().ok())
        .filter(|px| *px > 0)
        .map(Breakpoint::new)
}
