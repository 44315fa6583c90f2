//! Document `keydown` listener owned by the plugin.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use super::SharedOverlay;
use crate::error::Result;

/// Registered `keydown` listener. Dropping it unregisters the listener.
pub struct KeySubscription {
    document: Document,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeySubscription {
    /// Listen on `document` and forward key codes to `overlay`.
    ///
    /// The closure only holds a weak reference, so a freed plugin is never
    /// kept alive by the document.
    pub(crate) fn register(document: &Document, overlay: &SharedOverlay) -> Result<Self> {
        let weak_overlay = Rc::downgrade(overlay);
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(overlay) = weak_overlay.upgrade() {
                // A toggle call from JS may hold the borrow on re-entry.
                if let Ok(mut overlay) = overlay.try_borrow_mut() {
                    overlay.handle_key(event.key_code());
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

        Ok(Self {
            document: document.clone(),
            closure,
        })
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.document
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref())
            .ok();
    }
}
