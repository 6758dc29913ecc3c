//! vitrine-common - Page behavior without the browser
//!
//! Breakpoint handling, the carousel paging state machine, mobile menu
//! transitions and site configuration. The web crate feeds browser events in
//! and applies the effects that come back out.

pub mod carousel;
pub mod config;
pub mod menu;
pub mod nav_key;
pub mod settle;
pub mod viewport;

pub use carousel::{CarouselEffect, CarouselEvent, CarouselOptions, CarouselState, Measurements};
pub use config::{ConfigError, SiteConfig};
pub use menu::{MenuEffect, MenuLabel, MenuState, MenuTransition, PanelVisibility};
pub use nav_key::NavKey;
pub use settle::{SettleGuard, SettleToken};
pub use viewport::{Breakpoint, LayoutMode};
