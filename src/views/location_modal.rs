// ============================================================================
// LOCATION MODAL VIEW - Detalle de la farmacia seleccionada
// ============================================================================
// El backdrop NO cierra el modal: sólo el botón "Chiudi"
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::utils::constants::MODAL_CLOSE_LABEL;
use crate::viewmodels::LocationDetails;

pub fn render_location_modal(
    details: &LocationDetails,
    on_close: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let title = ElementBuilder::new("h2")?.class("modal-title").text(&details.title).build();
    append_child(&content, &title)?;

    let rows = ElementBuilder::new("dl")?.class("modal-body").build();
    for row in &details.rows {
        let label = ElementBuilder::new("dt")?.text(&row.label).build();
        let value = ElementBuilder::new("dd")?.text(&row.value).build();
        append_child(&rows, &label)?;
        append_child(&rows, &value)?;
    }
    append_child(&content, &rows)?;

    let close_btn = ElementBuilder::new("button")?
        .class("button button-block")
        .text(MODAL_CLOSE_LABEL)
        .on_click(move || on_close())?
        .build();
    append_child(&content, &close_btn)?;

    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();

    Ok(ElementBuilder::new("div")?
        .id("location-modal")?
        .class("modal active")
        .attr("role", "dialog")?
        .child(overlay)?
        .child(content)?
        .build())
}
