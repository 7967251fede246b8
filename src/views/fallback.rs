// ============================================================================
// FALLBACK VIEW - Página de error cuando falla el GPS
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};

pub fn render_fallback(lines: &[&str]) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?.class("list fallback-list").build();
    for line in lines {
        let item = ElementBuilder::new("li")?
            .class("item text-wrap")
            .text(line)
            .build();
        append_child(&list, &item)?;
    }

    Ok(ElementBuilder::new("div")?
        .id("fallback")?
        .class("fallback-page")
        .child(list)?
        .build())
}
