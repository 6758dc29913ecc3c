//! Mobile menu controller

use std::rc::Rc;

use tracing::{debug, trace};
use web_sys::{Document, Element, Event, Window};

use vitrine_common::config::{MenuSelectors, SiteConfig};
use vitrine_common::menu::{self, MenuEffect, MenuState, PanelVisibility};
use vitrine_common::{Breakpoint, LayoutMode};

use crate::dom;
use crate::error::AttachError;
use crate::listener::EventListener;

struct MenuDom {
    window: Window,
    document: Document,
    button: Element,
    panel: Element,
    breakpoint: Breakpoint,
    selectors: MenuSelectors,
}

impl MenuDom {
    fn layout(&self) -> LayoutMode {
        self.breakpoint.layout_for(dom::viewport_width(&self.window))
    }

    fn state(&self) -> MenuState {
        MenuState::from_attribute(self.button.get_attribute("aria-expanded").as_deref())
    }

    fn apply(&self, effects: Vec<MenuEffect>, event: Option<&Event>) {
        for effect in effects {
            match effect {
                MenuEffect::SetState(state) => {
                    dom::set_attribute(&self.button, "aria-expanded", state.as_attribute())
                }
                MenuEffect::SetLabel(label) => dom::set_attribute(
                    &self.button,
                    "aria-label",
                    self.selectors.label_text(label),
                ),
                MenuEffect::SetPanel(PanelVisibility::Hidden) => {
                    dom::set_attribute(&self.panel, "aria-hidden", "true")
                }
                MenuEffect::SetPanel(PanelVisibility::Shown) => {
                    dom::set_attribute(&self.panel, "aria-hidden", "false")
                }
                MenuEffect::SetPanel(PanelVisibility::Unmarked) => {
                    dom::remove_attribute(&self.panel, "aria-hidden")
                }
                MenuEffect::SetScrollLock(locked) => match self.document.body() {
                    Some(body) => {
                        dom::toggle_class(&body, &self.selectors.scroll_lock_class, locked)
                    }
                    None => debug!(locked, "No body yet, scroll lock not applied"),
                },
                MenuEffect::PreventDefault => {
                    if let Some(event) = event {
                        event.prevent_default();
                    }
                }
            }
        }
    }

    fn sync_layout(&self) {
        let layout = self.layout();
        trace!(?layout, "Syncing menu with layout");
        self.apply(menu::sync_layout(layout), None);
    }

    fn toggle(&self, event: &Event) {
        let transition = menu::toggle(self.state(), self.layout());
        debug!(state = ?transition.state, "Menu toggled");
        self.apply(transition.effects, Some(event));
    }
}

/// The live mobile menu. Dropping it removes its listeners.
pub struct MobileMenu {
    _click: EventListener,
    _resize: EventListener,
}

/// Take control of the page's navigation menu.
///
/// Returns None if the toggle button or the panel is missing.
pub fn init(config: &SiteConfig) -> Option<MobileMenu> {
    match try_init(config) {
        Ok(menu) => Some(menu),
        Err(e) => {
            debug!("Mobile menu not initialized: {e}");
            None
        }
    }
}

fn try_init(config: &SiteConfig) -> Result<MobileMenu, AttachError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let selectors = config.menu.clone();

    let button = dom::find_in_document(&document, &selectors.toggle)?;
    let panel = dom::find_in_document(&document, &selectors.panel)?;

    let menu = Rc::new(MenuDom {
        window: window.clone(),
        document,
        button: button.clone(),
        panel,
        breakpoint: config.breakpoint(),
        selectors,
    });

    let click = {
        let menu = Rc::clone(&menu);
        EventListener::new(&button, "click", move |event| menu.toggle(&event))
    };
    let resize = {
        let menu = Rc::clone(&menu);
        EventListener::passive(&window, "resize", move |_event| menu.sync_layout())
    };

    menu.sync_layout();
    debug!(layout = ?menu.layout(), "Mobile menu initialized");

    Ok(MobileMenu {
        _click: click,
        _resize: resize,
    })
}
