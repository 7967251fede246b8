// ============================================================================
// APP - Pantalla del mapa montada en #app
// ============================================================================
// Conecta el ViewModel con el navegador: GPS, fetch, timer y DOM
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id, replace_children, ElementBuilder};
use crate::maps::leaflet::LeafletRenderer;
use crate::services::{geolocation, ApiClient};
use crate::state::{MapStore, MapViewState};
use crate::viewmodels::{MapScreenViewModel, OverlayView, ScreenBody, ScreenView};
use crate::views::*;

type ScreenViewModel = MapScreenViewModel<LeafletRenderer>;

/// Qué hay pintado en #content (para no destruir el mapa en cada render)
#[derive(Clone, Copy, Debug, PartialEq)]
enum ContentMode {
    Empty,
    MapWaiting,
    MapWithContainer,
    Fallback,
}

pub struct MapScreen {
    vm: Rc<RefCell<ScreenViewModel>>,
    root: Element,
    content: Element,
    overlays: Element,
    footer: Element,
    content_mode: Cell<ContentMode>,
    // Lo pintado en #overlays; cada rebuild registra handlers nuevos
    shown_overlays: RefCell<Option<OverlayView>>,
    shown_sponsor: RefCell<Option<Option<String>>>,
    mount_timer: RefCell<Option<Timeout>>,
}

impl MapScreen {
    /// Crear la pantalla dentro de `#root_id` (no lanza peticiones todavía)
    pub fn new(root_id: &str) -> Result<Self, JsValue> {
        let root = get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", root_id)))?;

        let store = MapStore::new(MapViewState::new(CONFIG.map_config.default_zoom));
        let vm = MapScreenViewModel::new(LeafletRenderer::new(), store, CONFIG.map_config.clone())
            .with_sponsor_image(CONFIG.sponsor_image_url.clone());

        let view = vm.view();
        clear_children(&root);
        let page = ElementBuilder::new("div")?.class("page").build();
        let content = ElementBuilder::new("main")?.id("content")?.class("content").build();
        let overlays = ElementBuilder::new("div")?.id("overlays")?.build();
        let footer = ElementBuilder::new("div")?.id("footer-slot")?.build();

        append_child(&page, &render_header(view.title)?)?;
        append_child(&page, &content)?;
        append_child(&page, &overlays)?;
        append_child(&page, &footer)?;
        append_child(&root, &page)?;

        Ok(Self {
            vm: Rc::new(RefCell::new(vm)),
            root,
            content,
            overlays,
            footer,
            content_mode: Cell::new(ContentMode::Empty),
            shown_overlays: RefCell::new(None),
            shown_sponsor: RefCell::new(None),
            mount_timer: RefCell::new(None),
        })
    }

    /// Arranque: GPS y farmacias en paralelo. La espera de montaje empieza
    /// cuando el GPS responde.
    pub fn start(&self) {
        // Cambios del store (modal) -> re-render batcheado
        self.vm.borrow().store().subscribe(|| {
            Timeout::new(0, crate::rerender_screen).forget();
        });

        wasm_bindgen_futures::spawn_local(async {
            let result = geolocation::current_position().await;
            crate::with_screen(move |screen| {
                screen.vm.borrow_mut().handle_position(result);
                screen.schedule_mount_delay();
                screen.refresh();
            });
        });

        wasm_bindgen_futures::spawn_local(async {
            let result = ApiClient::new(&CONFIG).get_pharmacies().await;
            crate::with_screen(move |screen| {
                screen.vm.borrow_mut().handle_pharmacies(result);
                screen.refresh();
            });
        });

        self.refresh();
    }

    fn schedule_mount_delay(&self) {
        if !self.vm.borrow().needs_mount_delay() || self.mount_timer.borrow().is_some() {
            return;
        }
        let delay = self.vm.borrow().config().mount_delay_ms;
        let timer = Timeout::new(delay, || {
            crate::with_screen(|screen| {
                if screen.vm.borrow_mut().handle_mount_delay() {
                    screen.refresh();
                }
            });
        });
        *self.mount_timer.borrow_mut() = Some(timer);
    }

    /// Botón flotante de recentrar
    pub fn recenter(&self) {
        self.vm.borrow_mut().recenter();
        self.refresh();
    }

    /// Re-render registrando errores (nunca es fatal)
    pub fn refresh(&self) {
        if let Err(e) = self.render() {
            log::error!("❌ [APP] Error renderizando: {:?}", e);
        }
    }

    fn render(&self) -> Result<(), JsValue> {
        let view = self.vm.borrow().view();

        self.render_content(&view)?;
        self.render_overlays(&view)?;
        self.render_sponsor(&view)?;

        // El contenedor ya está en el DOM: Leaflet puede montarse
        if self.vm.borrow_mut().attach_map() {
            log::info!("🗺️ [APP] Mapa montado");
        }
        Ok(())
    }

    fn render_content(&self, view: &ScreenView) -> Result<(), JsValue> {
        let mode = match view.body {
            ScreenBody::Fallback { .. } => ContentMode::Fallback,
            ScreenBody::Map { container: false } => ContentMode::MapWaiting,
            ScreenBody::Map { container: true } => ContentMode::MapWithContainer,
        };
        if mode == self.content_mode.get() {
            return Ok(());
        }

        let element = match &view.body {
            ScreenBody::Fallback { lines } => render_fallback(lines)?,
            ScreenBody::Map { container } => render_map_page(*container, Rc::new(|| {
                crate::with_screen(|screen| screen.recenter());
            }))?,
        };
        replace_children(&self.content, &element)?;
        self.content_mode.set(mode);
        Ok(())
    }

    fn render_sponsor(&self, view: &ScreenView) -> Result<(), JsValue> {
        if self.shown_sponsor.borrow().as_ref() == Some(&view.sponsor_image_url) {
            return Ok(());
        }
        replace_children(&self.footer, &render_footer(view.sponsor_image_url.as_deref())?)?;
        *self.shown_sponsor.borrow_mut() = Some(view.sponsor_image_url.clone());
        Ok(())
    }

    fn render_overlays(&self, view: &ScreenView) -> Result<(), JsValue> {
        let next = view.overlays();
        if self.shown_overlays.borrow().as_ref() == Some(&next) {
            return Ok(());
        }
        clear_children(&self.overlays);
        *self.shown_overlays.borrow_mut() = Some(next);

        if let Some(details) = &view.modal {
            let modal = render_location_modal(details, Rc::new(|| {
                crate::with_screen(|screen| screen.vm.borrow().dismiss_location_modal());
            }))?;
            append_child(&self.overlays, &modal)?;
        }

        if let Some(toast) = &view.toast {
            let toast = render_toast(toast, Rc::new(|| {
                crate::with_screen(|screen| {
                    screen.vm.borrow_mut().dismiss_toast();
                    screen.refresh();
                });
            }))?;
            append_child(&self.overlays, &toast)?;
        }
        Ok(())
    }

    /// Cancelar el timer y desmontar el mapa
    pub fn tear_down(&self) {
        // Drop del Timeout = clearTimeout
        self.mount_timer.borrow_mut().take();
        self.vm.borrow_mut().tear_down();
        clear_children(&self.root);
    }
}
