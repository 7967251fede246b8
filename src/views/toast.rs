use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::ToastView;

/// Toast de error con botón "OK"
pub fn render_toast(toast: &ToastView, on_ok: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let message = ElementBuilder::new("span")?
        .class("toast-message")
        .text(toast.message)
        .build();
    let button = ElementBuilder::new("button")?
        .class("toast-button")
        .text(toast.button)
        .on_click(move || on_ok())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class(&format!("toast toast-{}", toast.color))
        .attr("role", "alert")?
        .child(message)?
        .child(button)?
        .build())
}
