use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

/// Toolbar con el título de la pantalla
pub fn render_header(title: &str) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?.class("toolbar-title").text(title).build();
    let toolbar = ElementBuilder::new("div")?.class("toolbar").child(title)?.build();
    Ok(ElementBuilder::new("header")?.class("app-header").child(toolbar)?.build())
}
