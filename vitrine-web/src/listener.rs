//! Event listeners tied to Rust ownership
//!
//! A `Closure` handed to `addEventListener` has to outlive the listener. Rather
//! than `Closure::forget()`, which leaks the closure and leaves the listener
//! attached forever, [`EventListener`] keeps the closure and removes the
//! listener when dropped:
//!
//! ```ignore
//! let listener = EventListener::new(&button, "click", move |event| { /* ... */ });
//!
//! // Listener is removed here
//! drop(listener);
//! ```
//!
//! Carousel pagination buttons rely on this: regenerating the buttons drops the
//! previous listener set before the old elements are discarded.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: &EventTarget,
        event_name: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }

    /// Like [`EventListener::new`], but registered as passive. The callback
    /// must not call `preventDefault`. Used for scroll and resize.
    pub fn passive(
        target: &EventTarget,
        event_name: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(callback));

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
