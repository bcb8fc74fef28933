//! Toast elements appended to `<body>`.
//!
//! Markup: `div.toast.toast-{kind}` holding `div.toast-message` and a
//! `button.toast-close`. Visibility is driven by the `show` class.

use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use wz_wishlist_core::{ToastKind, ToastSurface, ToastView};

use crate::dom;

const TOAST_SELECTOR: &str = ".toast";
const VISIBLE_CLASS: &str = "show";

pub struct BodyToastSurface;

impl BodyToastSurface {
    fn build(&self, message: &str, kind: ToastKind, on_dismiss: Box<dyn Fn()>) -> Result<Element> {
        let toast = dom::create_element("div")?;
        toast.set_class_name(&format!("toast toast-{}", kind.as_str()));

        let text = dom::create_element("div")?;
        text.set_class_name("toast-message");
        text.set_text_content(Some(message));

        let close = dom::create_element("button")?;
        close.set_class_name("toast-close");
        close.set_text_content(Some("\u{00D7}"));
        close.set_attribute("type", "button").map_err(dom::js_error)?;
        close
            .set_attribute("aria-label", "Dismiss")
            .map_err(dom::js_error)?;

        let cb = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_| on_dismiss());
        close
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(dom::js_error)?;
        cb.forget();

        toast.append_child(&text).map_err(dom::js_error)?;
        toast.append_child(&close).map_err(dom::js_error)?;

        let body = dom::document().body().context("document has no <body>")?;
        body.append_child(&toast).map_err(dom::js_error)?;
        Ok(toast)
    }
}

impl ToastSurface for BodyToastSurface {
    fn clear(&self) {
        match dom::query_all(TOAST_SELECTOR) {
            Ok(existing) => existing.iter().for_each(Element::remove),
            Err(err) => warn!("cannot query existing toasts: {:#}", err),
        }
    }

    fn mount(&self, message: &str, kind: ToastKind, on_dismiss: Box<dyn Fn()>) -> Rc<dyn ToastView> {
        match self.build(message, kind, on_dismiss) {
            Ok(element) => Rc::new(ElementToast { element: Some(element) }),
            Err(err) => {
                warn!("cannot mount toast {:?}: {:#}", message, err);
                Rc::new(ElementToast { element: None })
            }
        }
    }
}

/// `element` is `None` when mounting failed; every operation is then inert.
struct ElementToast {
    element: Option<Element>,
}

impl ToastView for ElementToast {
    fn show(&self) {
        if let Some(el) = &self.element {
            dom::add_class(el, VISIBLE_CLASS);
        }
    }

    fn hide(&self) {
        if let Some(el) = &self.element {
            dom::remove_class(el, VISIBLE_CLASS);
        }
    }

    fn remove(&self) {
        if let Some(el) = &self.element {
            el.remove();
        }
    }

    fn is_attached(&self) -> bool {
        self.element.as_ref().is_some_and(|el| el.is_connected())
    }
}
