//! Configuration embedded in the page
//!
//! ```html
//! <script type="application/json" id="vitrine-config">
//!   { "breakpoint_px": 900, "menu": { "open_label": "Menu" } }
//! </script>
//! ```

use vitrine_common::{ConfigError, SiteConfig};
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "vitrine-config";

/// Configuration in effect, plus the reason the page's block was rejected, if it was.
/// The error is kept so it can be logged once logging is up.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: SiteConfig,
    pub error: Option<ConfigError>,
}

pub fn load(document: &Document) -> LoadedConfig {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    from_text(text.as_deref())
}

/// Parse the configuration block's text. Missing or blank text means defaults.
pub fn from_text(text: Option<&str>) -> LoadedConfig {
    let Some(json) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return LoadedConfig {
            config: SiteConfig::default(),
            error: None,
        };
    };

    match SiteConfig::from_json(json) {
        Ok(config) => LoadedConfig {
            config,
            error: None,
        },
        Err(e) => LoadedConfig {
            config: SiteConfig::default(),
            error: Some(e),
        },
    }
}
