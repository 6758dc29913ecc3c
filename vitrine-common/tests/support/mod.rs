//! In-memory stand-ins for the page markup, applying effects the same way the
//! web crate does against the DOM.

#![allow(dead_code)]

use vitrine_common::config::MenuSelectors;
use vitrine_common::menu;
use vitrine_common::{
    Breakpoint, CarouselEffect, CarouselEvent, CarouselOptions, CarouselState, MenuEffect,
    MenuState, Measurements, NavKey, PanelVisibility, SettleToken,
};

pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("vitrine_common=trace")
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeButton {
    pub role: String,
    pub label: String,
    pub selected: bool,
    pub active: bool,
    /// Which render pass created the button (and its click listener)
    pub generation: usize,
}

pub struct FakeCarousel {
    pub state: CarouselState,
    pub buttons: Vec<FakeButton>,
    pub generation: usize,
    pub item_count: usize,
    pub viewport_width: f64,
    pub container_width: f64,
    pub scroll_left: f64,
    pub pending_timers: Vec<(SettleToken, u32)>,
    pub default_prevented: bool,
}

impl FakeCarousel {
    /// Mirrors the web attach sequence: model, buttons, selection, one resize pass.
    pub fn attach(item_count: usize, viewport_width: f64) -> Option<Self> {
        let options = CarouselOptions {
            breakpoint: Breakpoint::default(),
            settle_delay_ms: 300,
        };
        let state = CarouselState::new(item_count, options, viewport_width)?;
        let mut carousel = Self {
            state,
            buttons: Vec::new(),
            generation: 0,
            item_count,
            viewport_width,
            container_width: 1000.0,
            scroll_left: 0.0,
            pending_timers: Vec::new(),
            default_prevented: false,
        };
        let effects = carousel.state.initial_effects();
        carousel.apply(effects);
        carousel.send(CarouselEvent::Resized { item_count });
        Some(carousel)
    }

    pub fn send(&mut self, event: CarouselEvent) {
        self.default_prevented = false;
        let m = Measurements {
            viewport_width: self.viewport_width,
            container_width: self.container_width,
            scroll_left: self.scroll_left,
        };
        let effects = self.state.dispatch(event, &m);
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<CarouselEffect>) {
        for effect in effects {
            match effect {
                CarouselEffect::RenderButtons { count } => {
                    self.generation += 1;
                    self.buttons = (0..count)
                        .map(|i| FakeButton {
                            role: "tab".to_string(),
                            label: format!("Page {}", i + 1),
                            selected: i == 0,
                            active: false,
                            generation: self.generation,
                        })
                        .collect();
                }
                CarouselEffect::SelectPage(page) => {
                    for (i, button) in self.buttons.iter_mut().enumerate() {
                        button.selected = i == page;
                        button.active = i == page;
                    }
                }
                CarouselEffect::ScrollTo { left, .. } => {
                    // Jump straight to the end of the animation
                    self.scroll_left = left;
                }
                CarouselEffect::ArmSettleTimer { token, delay_ms } => {
                    self.pending_timers.push((token, delay_ms));
                }
                CarouselEffect::PreventDefault => self.default_prevented = true,
            }
        }
    }

    pub fn click(&mut self, index: usize) {
        self.send(CarouselEvent::ButtonClicked(index));
    }

    pub fn user_scroll(&mut self, left: f64) {
        self.scroll_left = left;
        self.send(CarouselEvent::Scrolled);
    }

    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        let item_count = self.item_count;
        self.send(CarouselEvent::Resized { item_count });
    }

    /// Press a key by its `KeyboardEvent.key` name. Unmapped keys never reach the model.
    pub fn press(&mut self, key: &str, focus_within: bool) {
        self.default_prevented = false;
        if let Some(key) = NavKey::from_key(key) {
            self.send(CarouselEvent::KeyPressed { key, focus_within });
        }
    }

    /// Fire every pending settle timer, oldest first.
    pub fn elapse_timers(&mut self) {
        let timers: Vec<_> = self.pending_timers.drain(..).collect();
        for (token, _) in timers {
            self.send(CarouselEvent::SettleElapsed(token));
        }
    }

    pub fn selected(&self) -> Vec<usize> {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn active(&self) -> Vec<usize> {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.active)
            .map(|(i, _)| i)
            .collect()
    }
}

pub struct FakeMenu {
    pub labels: MenuSelectors,
    pub breakpoint: Breakpoint,
    pub viewport_width: f64,
    pub aria_expanded: Option<String>,
    pub aria_label: Option<String>,
    pub panel_aria_hidden: Option<String>,
    pub body_locked: bool,
    pub default_prevented: bool,
}

impl FakeMenu {
    pub fn init(viewport_width: f64) -> Self {
        let mut menu = Self {
            labels: MenuSelectors::default(),
            breakpoint: Breakpoint::default(),
            viewport_width,
            aria_expanded: None,
            aria_label: None,
            panel_aria_hidden: None,
            body_locked: false,
            default_prevented: false,
        };
        menu.resize(viewport_width);
        menu
    }

    pub fn click(&mut self) {
        self.default_prevented = false;
        let current = MenuState::from_attribute(self.aria_expanded.as_deref());
        let layout = self.breakpoint.layout_for(self.viewport_width);
        let transition = menu::toggle(current, layout);
        self.apply(transition.effects);
    }

    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        let layout = self.breakpoint.layout_for(viewport_width);
        self.apply(menu::sync_layout(layout));
    }

    fn apply(&mut self, effects: Vec<MenuEffect>) {
        for effect in effects {
            match effect {
                MenuEffect::SetState(state) => {
                    self.aria_expanded = Some(state.as_attribute().to_string())
                }
                MenuEffect::SetLabel(label) => {
                    self.aria_label = Some(self.labels.label_text(label).to_string())
                }
                MenuEffect::SetPanel(PanelVisibility::Hidden) => {
                    self.panel_aria_hidden = Some("true".to_string())
                }
                MenuEffect::SetPanel(PanelVisibility::Shown) => {
                    self.panel_aria_hidden = Some("false".to_string())
                }
                MenuEffect::SetPanel(PanelVisibility::Unmarked) => self.panel_aria_hidden = None,
                MenuEffect::SetScrollLock(locked) => self.body_locked = locked,
                MenuEffect::PreventDefault => self.default_prevented = true,
            }
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.aria_expanded.as_deref() == Some("true")
    }

    pub fn panel_hidden(&self) -> bool {
        self.panel_aria_hidden.as_deref() == Some("true")
    }
}
