use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

/// Footer con la imagen del sponsor (vacío si no hay)
pub fn render_footer(sponsor_image_url: Option<&str>) -> Result<Element, JsValue> {
    let footer = ElementBuilder::new("footer")?.class("app-footer");
    let Some(url) = sponsor_image_url else {
        return Ok(footer.build());
    };

    let image = ElementBuilder::new("img")?
        .class("sponsor")
        .attr("src", url)?
        .attr("alt", "Sponsor")?
        .attr("style", "max-width: 500px; margin: auto; display: block;")?
        .build();
    Ok(footer.child(image)?.build())
}
