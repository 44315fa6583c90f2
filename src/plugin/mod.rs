//! WASM-exported `Zoom` plugin.
//!
//! Builds a [`ZoomOverlay`] over the live document and registers the
//! document `keydown` listener automatically - no JavaScript wiring needed
//! beyond constructing the object:
//!
//! ```javascript
//! import init, { Zoom } from 'slidezoom';
//! await init();
//! const zoom = Zoom.fromHost(webslides);
//! // later, to remove the listener:
//! zoom.free();
//! ```

mod subscription;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub use subscription::KeySubscription;

use crate::config::ZoomConfig;
use crate::dom::{HostView, WebDom};
use crate::error::ZoomError;
use crate::logging;
use crate::overlay::ZoomOverlay;

pub(crate) type SharedOverlay = Rc<RefCell<ZoomOverlay<WebDom>>>;

/// Slide grid overview bound to a presentation.
#[wasm_bindgen]
pub struct Zoom {
    overlay: SharedOverlay,
    #[allow(dead_code)] // Dropping it removes the document listener
    key_subscription: KeySubscription,
}

#[wasm_bindgen]
impl Zoom {
    /// Create the overlay for `root` and its `slides`.
    ///
    /// `slides` may hold elements directly or slide objects exposing an `el`
    /// element. `config` is an optional object overriding any
    /// [`ZoomConfig`] field (camelCase keys).
    #[wasm_bindgen(constructor)]
    pub fn new(root: Element, slides: Array, config: JsValue) -> Result<Zoom, JsValue> {
        console_error_panic_hook::set_once();

        let config = parse_config(config)?;
        logging::init(config.log_level);

        let slides = slides
            .iter()
            .enumerate()
            .map(|(i, item)| slide_element(item, i))
            .collect::<Result<Vec<_>, _>>()?;

        let dom = WebDom::new()?;
        let document = dom.document().clone();
        let overlay = ZoomOverlay::build(dom, HostView::new(root, slides), config)?;
        let overlay = Rc::new(RefCell::new(overlay));

        // Registered only once the build has finished.
        let key_subscription = KeySubscription::register(&document, &overlay)?;

        Ok(Zoom {
            overlay,
            key_subscription,
        })
    }

    /// Create the overlay from a presentation object exposing `el` (root
    /// element) and `slides` (array of slide objects or elements).
    #[wasm_bindgen(js_name = "fromHost")]
    pub fn from_host(host: JsValue, config: JsValue) -> Result<Zoom, JsValue> {
        let root = Reflect::get(&host, &JsValue::from_str("el"))?
            .dyn_into::<Element>()
            .map_err(|_| ZoomError::Dom("host.el is not an element".to_string()))?;
        let slides = Reflect::get(&host, &JsValue::from_str("slides"))?;
        let slides = Array::from(&slides);
        Self::new(root, slides, config)
    }

    /// Show the slide grid.
    #[wasm_bindgen(js_name = "zoomIn")]
    pub fn zoom_in(&self) {
        self.overlay.borrow_mut().zoom_in();
    }

    /// Return to the live presentation.
    #[wasm_bindgen(js_name = "zoomOut")]
    pub fn zoom_out(&self) {
        self.overlay.borrow_mut().zoom_out();
    }

    pub fn toggle(&self) {
        self.overlay.borrow_mut().toggle();
    }

    #[wasm_bindgen(getter, js_name = "isZoomed")]
    pub fn is_zoomed(&self) -> bool {
        self.overlay.borrow().is_zoomed()
    }

    /// Overlay root element.
    #[wasm_bindgen(getter)]
    pub fn element(&self) -> Element {
        self.overlay.borrow().root().clone()
    }

    #[wasm_bindgen(getter, js_name = "slideCount")]
    pub fn slide_count(&self) -> usize {
        self.overlay.borrow().slides().len()
    }
}

fn parse_config(config: JsValue) -> Result<ZoomConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ZoomConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| ZoomError::Config(e.to_string()).into())
}

fn slide_element(item: JsValue, index: usize) -> Result<Element, JsValue> {
    if item.is_instance_of::<Element>() {
        return item
            .dyn_into::<Element>()
            .map_err(|_| ZoomError::Dom(format!("slide {index} is not an element")).into());
    }
    Reflect::get(&item, &JsValue::from_str("el"))?
        .dyn_into::<Element>()
        .map_err(|_| ZoomError::Dom(format!("slide {index} has no `el` element")).into())
}
