//! Carousel paging state machine
//!
//! `CarouselState` holds the paging model for one carousel on the page. Browser
//! events are fed in as [`CarouselEvent`]s together with a [`Measurements`]
//! snapshot, and the state answers with the [`CarouselEffect`]s the DOM layer
//! has to apply. Nothing in here touches the DOM or the clock.

use tracing::trace;

use crate::nav_key::NavKey;
use crate::settle::{SettleGuard, SettleToken};
use crate::viewport::{page_count, Breakpoint, LayoutMode};

/// Expected duration of a smooth scroll between pages.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub breakpoint: Breakpoint,
    /// How long scroll events are ignored after a programmatic navigation
    pub settle_delay_ms: u32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::default(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

/// Layout values read from the DOM right before an event is dispatched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    /// `window.innerWidth`
    pub viewport_width: f64,
    /// Offset width of the scrollable items container (one page wide)
    pub container_width: f64,
    /// Current horizontal scroll offset of the items container
    pub scroll_left: f64,
}

/// Input to the carousel state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// A pagination button was clicked
    ButtonClicked(usize),
    /// The items container scrolled (user or programmatic)
    Scrolled,
    /// The window was resized. Carries the current number of items.
    Resized { item_count: usize },
    /// A navigation key was pressed inside the carousel's subtree
    KeyPressed { key: NavKey, focus_within: bool },
    /// The settle timer armed for `token` fired
    SettleElapsed(SettleToken),
}

/// Instruction for the DOM layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEffect {
    /// Discard every pagination button (and its listener) and create `count` new ones
    RenderButtons { count: usize },
    /// Mark the button for this page selected and all others unselected
    SelectPage(usize),
    /// Scroll the items container to `left`
    ScrollTo { left: f64, smooth: bool },
    /// Dispatch `SettleElapsed(token)` after `delay_ms`
    ArmSettleTimer { token: SettleToken, delay_ms: u32 },
    /// Suppress the browser's default handling of the current event
    PreventDefault,
}

/// Paging model of one carousel
#[derive(Debug)]
pub struct CarouselState {
    options: CarouselOptions,
    item_count: usize,
    layout: LayoutMode,
    total_pages: usize,
    current_page: usize,
    guard: SettleGuard,
}

impl CarouselState {
    /// Build the model for a carousel with `item_count` items.
    /// Returns None when there is nothing to page through.
    pub fn new(item_count: usize, options: CarouselOptions, viewport_width: f64) -> Option<Self> {
        if item_count == 0 {
            return None;
        }
        let layout = options.breakpoint.layout_for(viewport_width);
        Some(Self {
            options,
            item_count,
            layout,
            total_pages: page_count(item_count, layout.items_per_page()),
            current_page: 0,
            guard: SettleGuard::new(),
        })
    }

    /// Effects that bring freshly discovered markup in line with the model.
    pub fn initial_effects(&self) -> Vec<CarouselEffect> {
        vec![
            CarouselEffect::RenderButtons {
                count: self.total_pages,
            },
            CarouselEffect::SelectPage(self.current_page),
        ]
    }

    pub fn dispatch(&mut self, event: CarouselEvent, m: &Measurements) -> Vec<CarouselEffect> {
        trace!(?event, current_page = self.current_page, "carousel event");
        match event {
            CarouselEvent::ButtonClicked(page) => self.navigate(page, m.container_width),
            CarouselEvent::Scrolled => self.sync_to_scroll(m),
            CarouselEvent::Resized { item_count } => self.resize(item_count, m),
            CarouselEvent::KeyPressed { key, focus_within } => self.key(key, focus_within, m),
            CarouselEvent::SettleElapsed(token) => {
                if !self.guard.release(token) {
                    trace!(token = token.id(), "stale settle token");
                }
                Vec::new()
            }
        }
    }

    /// Scroll to `page`. Out-of-range pages are ignored.
    pub fn navigate(&mut self, page: usize, container_width: f64) -> Vec<CarouselEffect> {
        if page >= self.total_pages {
            return Vec::new();
        }

        let token = self.guard.arm();
        self.current_page = page;

        vec![
            CarouselEffect::ScrollTo {
                left: page as f64 * container_width,
                smooth: true,
            },
            CarouselEffect::SelectPage(page),
            CarouselEffect::ArmSettleTimer {
                token,
                delay_ms: self.options.settle_delay_ms,
            },
        ]
    }

    /// Reflect a user-driven scroll in the selected page without scrolling again.
    fn sync_to_scroll(&mut self, m: &Measurements) -> Vec<CarouselEffect> {
        if self.guard.is_armed() {
            return Vec::new();
        }
        if m.container_width.is_nan() || m.container_width <= 0.0 || !m.scroll_left.is_finite() {
            return Vec::new();
        }

        let nearest = (m.scroll_left / m.container_width).round();
        if nearest < 0.0 {
            return Vec::new();
        }
        let page = nearest as usize;

        if page != self.current_page && page < self.total_pages {
            self.current_page = page;
            vec![CarouselEffect::SelectPage(page)]
        } else {
            Vec::new()
        }
    }

    fn resize(&mut self, item_count: usize, m: &Measurements) -> Vec<CarouselEffect> {
        let previous_layout = self.layout;
        self.layout = self.options.breakpoint.layout_for(m.viewport_width);
        self.item_count = item_count;
        let total_pages = page_count(item_count, self.layout.items_per_page());

        if total_pages == self.total_pages && previous_layout == self.layout {
            return Vec::new();
        }

        trace!(
            from = self.total_pages,
            to = total_pages,
            layout = ?self.layout,
            "carousel repaginated"
        );
        self.total_pages = total_pages;

        let mut effects = vec![CarouselEffect::RenderButtons { count: total_pages }];
        if self.current_page >= total_pages {
            self.current_page = total_pages.saturating_sub(1);
        }
        effects.extend(self.navigate(self.current_page, m.container_width));
        effects
    }

    fn key(&mut self, key: NavKey, focus_within: bool, m: &Measurements) -> Vec<CarouselEffect> {
        if !focus_within {
            return Vec::new();
        }
        let mut effects = vec![CarouselEffect::PreventDefault];
        if let Some(page) = key.target_page(self.current_page, self.total_pages) {
            effects.extend(self.navigate(page, m.container_width));
        }
        effects
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn items_per_page(&self) -> usize {
        self.layout.items_per_page()
    }

    /// Whether a programmatic scroll is still settling
    pub fn is_settling(&self) -> bool {
        self.guard.is_armed()
    }
}
