//! Carousel controller
//!
//! Wires one carousel's markup to a [`CarouselState`]. Every browser event is
//! turned into a [`CarouselEvent`], dispatched with fresh [`Measurements`],
//! and the returned effects are applied to the elements.
//!
//! State is shared between listener closures as `Rc<RefCell<_>>`. Closures
//! hold a `Weak` so that dropping the [`Carousel`] handle tears everything
//! down, including any pending settle timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use tracing::{debug, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window,
};

use vitrine_common::config::{parse_breakpoint_override, CarouselSelectors, SiteConfig};
use vitrine_common::{CarouselEffect, CarouselEvent, CarouselState, Measurements, NavKey};

use crate::dom;
use crate::error::AttachError;
use crate::listener::EventListener;

/// Attribute on a carousel root that overrides the site breakpoint
const BREAKPOINT_ATTRIBUTE: &str = "data-breakpoint";

struct CarouselDom {
    window: Window,
    document: Document,
    container: Element,
    items_container: HtmlElement,
    buttons_container: Element,
    /// Pagination buttons with the page each one selects
    buttons: Vec<(usize, Element)>,
    selectors: CarouselSelectors,
}

impl CarouselDom {
    fn measure(&self) -> Measurements {
        Measurements {
            viewport_width: dom::viewport_width(&self.window),
            container_width: f64::from(self.items_container.offset_width()),
            scroll_left: f64::from(self.items_container.scroll_left()),
        }
    }

    fn item_count(&self) -> usize {
        dom::find_all(&self.container, &self.selectors.item)
            .map(|items| items.len())
            .unwrap_or(0)
    }

    fn create_button(&self, index: usize) -> Option<Element> {
        let button = match self.document.create_element("button") {
            Ok(button) => button,
            Err(e) => {
                warn!(error = ?e, "Failed to create pagination button");
                return None;
            }
        };
        dom::set_attribute(&button, "type", "button");
        dom::set_attribute(&button, "role", "tab");
        dom::set_attribute(
            &button,
            "aria-selected",
            if index == 0 { "true" } else { "false" },
        );
        dom::set_attribute(&button, "aria-label", &format!("Page {}", index + 1));

        if let Err(e) = self.buttons_container.append_child(&button) {
            warn!(error = ?e, "Failed to append pagination button");
            return None;
        }
        Some(button)
    }

    fn select(&self, page: usize) {
        for (index, button) in &self.buttons {
            let selected = *index == page;
            dom::set_attribute(button, "aria-selected", if selected { "true" } else { "false" });
            dom::toggle_class(button, &self.selectors.active_class, selected);
        }
    }

    fn scroll_to(&self, left: f64, smooth: bool) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        self.items_container.scroll_to_with_scroll_to_options(&options);
    }
}

struct Controller {
    state: CarouselState,
    dom: CarouselDom,
    button_listeners: Vec<EventListener>,
    settle_timer: Option<Timeout>,
}

impl Controller {
    fn apply(
        &mut self,
        effects: Vec<CarouselEffect>,
        this: &Weak<RefCell<Controller>>,
        event: Option<&Event>,
    ) {
        for effect in effects {
            match effect {
                CarouselEffect::RenderButtons { count } => self.render_buttons(count, this),
                CarouselEffect::SelectPage(page) => self.dom.select(page),
                CarouselEffect::ScrollTo { left, smooth } => self.dom.scroll_to(left, smooth),
                CarouselEffect::ArmSettleTimer { token, delay_ms } => {
                    let this = this.clone();
                    // Replacing the handle cancels the previous timer
                    self.settle_timer = Some(Timeout::new(delay_ms, move || {
                        if let Some(controller) = this.upgrade() {
                            dispatch(&controller, CarouselEvent::SettleElapsed(token), None);
                        }
                    }));
                }
                CarouselEffect::PreventDefault => {
                    if let Some(event) = event {
                        event.prevent_default();
                    }
                }
            }
        }
    }

    fn render_buttons(&mut self, count: usize, this: &Weak<RefCell<Controller>>) {
        // Release listeners before their elements go away
        self.button_listeners.clear();
        self.dom.buttons_container.set_inner_html("");

        let buttons = numbered(count, |index| self.dom.create_button(index));

        self.button_listeners = buttons
            .iter()
            .map(|&(index, ref button)| {
                let this = this.clone();
                EventListener::new(button, "click", move |_event| {
                    if let Some(controller) = this.upgrade() {
                        dispatch(&controller, CarouselEvent::ButtonClicked(index), None);
                    }
                })
            })
            .collect();

        debug!(count, rendered = buttons.len(), "Rendered carousel pagination");
        self.dom.buttons = buttons;
    }
}

/// `make(i)` for every `i` in `0..count`, paired with `i`. Failures are
/// skipped without shifting the indices of later entries.
fn numbered<T>(count: usize, mut make: impl FnMut(usize) -> Option<T>) -> Vec<(usize, T)> {
    (0..count)
        .filter_map(|index| make(index).map(|value| (index, value)))
        .collect()
}

/// Feed one event through the state machine and apply the result.
fn dispatch(
    controller: &Rc<RefCell<Controller>>,
    event: CarouselEvent,
    web_event: Option<&Event>,
) {
    let this = Rc::downgrade(controller);
    let Ok(mut controller) = controller.try_borrow_mut() else {
        trace!(?event, "Carousel busy, dropping event");
        return;
    };
    let measurements = controller.dom.measure();
    let effects = controller.state.dispatch(event, &measurements);
    controller.apply(effects, &this, web_event);
}

/// A live carousel. Dropping it removes every listener it installed.
pub struct Carousel {
    controller: Rc<RefCell<Controller>>,
    _listeners: Vec<EventListener>,
}

impl Carousel {
    /// Take control of the carousel rooted at `container`.
    ///
    /// Returns None when the markup is incomplete or there are no items; the
    /// reason is logged at debug level.
    pub fn attach(container: Element, config: &SiteConfig) -> Option<Self> {
        match Self::try_attach(container, config) {
            Ok(carousel) => Some(carousel),
            Err(e) => {
                debug!("Carousel not initialized: {e}");
                None
            }
        }
    }

    fn try_attach(container: Element, config: &SiteConfig) -> Result<Self, AttachError> {
        let selectors = config.carousel.clone();
        let window = dom::window()?;
        let document = dom::document(&window)?;

        let items_container = dom::find(&container, &selectors.items)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| AttachError::NotHtmlElement(selectors.items.clone()))?;
        let buttons_container = dom::find(&container, &selectors.buttons)?;
        let item_count = dom::find_all(&container, &selectors.item)?.len();

        let mut options = config.carousel_options();
        if let Some(breakpoint) =
            parse_breakpoint_override(container.get_attribute(BREAKPOINT_ATTRIBUTE).as_deref())
        {
            options.breakpoint = breakpoint;
        }

        let state = CarouselState::new(item_count, options, dom::viewport_width(&window))
            .ok_or_else(|| AttachError::NoItems(selectors.item.clone()))?;

        debug!(
            item_count,
            pages = state.total_pages(),
            layout = ?state.layout(),
            "Attaching carousel"
        );

        let controller = Rc::new(RefCell::new(Controller {
            state,
            dom: CarouselDom {
                window: window.clone(),
                document: document.clone(),
                container: container.clone(),
                items_container: items_container.clone(),
                buttons_container,
                buttons: Vec::new(),
                selectors,
            },
            button_listeners: Vec::new(),
            settle_timer: None,
        }));
        let this = Rc::downgrade(&controller);

        {
            let mut c = controller.borrow_mut();
            let effects = c.state.initial_effects();
            c.apply(effects, &this, None);
        }

        let listeners = vec![
            {
                let this = this.clone();
                EventListener::passive(&items_container, "scroll", move |_event| {
                    if let Some(controller) = this.upgrade() {
                        dispatch(&controller, CarouselEvent::Scrolled, None);
                    }
                })
            },
            {
                let this = this.clone();
                EventListener::passive(&window, "resize", move |_event| {
                    let Some(controller) = this.upgrade() else {
                        return;
                    };
                    let Ok(item_count) = controller.try_borrow().map(|c| c.dom.item_count()) else {
                        return;
                    };
                    dispatch(&controller, CarouselEvent::Resized { item_count }, None);
                })
            },
            {
                let this = this.clone();
                let root = container.clone();
                EventListener::new(&container, "keydown", move |event| {
                    let Some(key) = event
                        .dyn_ref::<KeyboardEvent>()
                        .and_then(|e| NavKey::from_key(&e.key()))
                    else {
                        return;
                    };
                    if let Some(controller) = this.upgrade() {
                        let focus_within = dom::focus_within(&document, &root);
                        dispatch(
                            &controller,
                            CarouselEvent::KeyPressed { key, focus_within },
                            Some(&event),
                        );
                    }
                })
            },
        ];

        dispatch(&controller, CarouselEvent::Resized { item_count }, None);

        Ok(Self {
            controller,
            _listeners: listeners,
        })
    }

    /// Scroll to `page`, as if its pagination button had been clicked.
    pub fn go_to(&self, page: usize) {
        dispatch(&self.controller, CarouselEvent::ButtonClicked(page), None);
    }

    pub fn current_page(&self) -> usize {
        self.controller.borrow().state.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.controller.borrow().state.total_pages()
    }
}

/// Attach every carousel in the document. Declined carousels are skipped.
pub fn init_all(config: &SiteConfig) -> Vec<Carousel> {
    let containers = dom::window()
        .and_then(|window| dom::document(&window))
        .and_then(|document| dom::find_all_in_document(&document, &config.carousel.container));

    match containers {
        Ok(containers) => {
            let found = containers.len();
            let carousels: Vec<Carousel> = containers
                .into_iter()
                .filter_map(|container| Carousel::attach(container, config))
                .collect();
            debug!(found, attached = carousels.len(), "Carousels initialized");
            carousels
        }
        Err(e) => {
            warn!("Carousel discovery failed: {e}");
            Vec::new()
        }
    }
}
