// ============================================================================
// MAP PAGE VIEW - Contenedor de Leaflet + botón flotante de recentrar
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::utils::constants::MAP_CONTAINER_ID;

/// `container = false` mientras corre la espera de montaje
pub fn render_map_page(container: bool, on_recenter: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("map-page").build();

    if container {
        let map = ElementBuilder::new("div")?
            .id(MAP_CONTAINER_ID)?
            .class("map-container")
            .build();
        append_child(&page, &map)?;
    }

    let fab = ElementBuilder::new("button")?
        .class("fab fab-bottom-end")
        .attr("aria-label", "Centra sulla mia posizione")?
        .text("◎")
        .on_click(move || on_recenter())?
        .build();
    append_child(&page, &fab)?;

    Ok(page)
}
