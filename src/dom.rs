use orbfield_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Live view of `window.innerWidth/innerHeight/devicePixelRatio`.
#[derive(Clone)]
pub struct WindowViewport {
    window: web::Window,
}

impl WindowViewport {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Viewport for WindowViewport {
    fn inner_size(&self) -> (f64, f64) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (width, height)
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        // Non-finite or zero ratios fall back to 1 in `SurfaceMetrics`.
        Some(self.window.device_pixel_ratio())
    }
}
