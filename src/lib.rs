#![cfg(target_arch = "wasm32")]
use orbfield_core::{AmbientParticleField, FieldPreset, Palette, ThemeMode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;

use canvas::CanvasTarget;
use dom::WindowViewport;
use events::ResizeListener;
use frame::{AnimationFrames, TickSlot, WebField};

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbfield-web loaded");
    Ok(())
}

struct Mounted {
    field: Rc<RefCell<WebField>>,
    viewport: WindowViewport,
    resize: ResizeListener,
    // Keeps the frame callback alive for as long as the engine is mounted.
    _tick: TickSlot,
}

/// Animated orb background bound to one canvas.
///
/// Construct on page mount, call `start()`, and `stop()` (or `free()`) on
/// unmount. When the canvas or its 2D context is missing the handle is inert:
/// `start()` returns `false` and nothing is drawn.
#[wasm_bindgen]
pub struct OrbField {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl OrbField {
    /// `preset` is one of `"content"`, `"auth"`, `"login"`. `palette`
    /// overrides the preset colors with `"#inner/#outer, ..."` pairs.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        preset: Option<String>,
        palette: Option<String>,
    ) -> Result<OrbField, JsValue> {
        let preset = FieldPreset::from_name_or_default(
            preset.as_deref().unwrap_or(constants::DEFAULT_PRESET),
        );
        let mut config = preset.config();
        if let Some(text) = palette {
            let parsed = Palette::parse(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;
            config = config.with_palette(parsed);
        }
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mounted = match mount(canvas_id, config) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[orbfield] #{}: {:?}", canvas_id, e);
                None
            }
        };
        Ok(OrbField { mounted })
    }

    /// Start animating. Idempotent; `false` when inert or already running.
    pub fn start(&mut self) -> bool {
        let Some(m) = self.mounted.as_mut() else {
            return false;
        };
        let started = match m.field.try_borrow_mut() {
            Ok(mut f) => f.start(&m.viewport),
            Err(_) => false,
        };
        if started {
            m.resize.attach();
        }
        started
    }

    /// Cancel the pending frame and release the resize listener. Idempotent.
    pub fn stop(&mut self) -> bool {
        let Some(m) = self.mounted.as_mut() else {
            return false;
        };
        m.resize.detach();
        match m.field.try_borrow_mut() {
            Ok(mut f) => f.stop(),
            Err(_) => false,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted
            .as_ref()
            .and_then(|m| m.field.try_borrow().ok().map(|f| f.is_running()))
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn orb_count(&self) -> usize {
        self.mounted
            .as_ref()
            .and_then(|m| m.field.try_borrow().ok().map(|f| f.particles().len()))
            .unwrap_or(0)
    }
}

impl Drop for OrbField {
    fn drop(&mut self) {
        self.stop();
    }
}

fn mount(canvas_id: &str, config: orbfield_core::FieldConfig) -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let scheduler = AnimationFrames::new(window.clone(), tick.clone());
    let Some(field) = AmbientParticleField::mount(
        || CanvasTarget::acquire(canvas),
        scheduler,
        config,
        StdRng::from_entropy(),
    ) else {
        return Ok(None);
    };
    let field = Rc::new(RefCell::new(field));
    frame::install_tick(&tick, Rc::downgrade(&field));

    let viewport = WindowViewport::new(window.clone());
    let resize = {
        let field = Rc::downgrade(&field);
        let viewport = viewport.clone();
        ResizeListener::new(window, move || {
            if let Some(field) = field.upgrade() {
                if let Ok(mut f) = field.try_borrow_mut() {
                    f.resize(&viewport);
                }
            }
        })
    };
    log::info!("[orbfield] mounted on #{}", canvas_id);
    Ok(Some(Mounted {
        field,
        viewport,
        resize,
        _tick: tick,
    }))
}

/// Tint the overlay element above the canvas for light or dark theme.
#[wasm_bindgen]
pub fn apply_theme_overlay(element_id: &str, dark: bool) -> bool {
    match dom::window_document() {
        Some(document) => overlay::apply_theme(&document, element_id, ThemeMode::from_dark(dark)),
        None => false,
    }
}
