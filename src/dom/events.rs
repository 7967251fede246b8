// ============================================================================
// EVENT HANDLING
// ============================================================================
// closure.forget(): el closure no se libera nunca. Sólo para elementos que
// se crean una vez por cambio de vista (app::MapScreen compara antes de
// reconstruir).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: MouseEvent| {
        e.stop_propagation();
        handler();
    }) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
