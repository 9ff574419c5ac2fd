use crate::constants::{CONTEXT_2D, FULL_CIRCLE};
use glam::DVec2;
use orbfield_core::{CanvasSurface, FieldError, GradientStop};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Orb canvas element plus its 2D context.
pub struct CanvasTarget {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasTarget {
    /// Fails with `SurfaceUnavailable` when the browser hands out no 2D context.
    pub fn acquire(canvas: web::HtmlCanvasElement) -> Result<Self, FieldError> {
        let ctx = canvas
            .get_context(CONTEXT_2D)
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(FieldError::SurfaceUnavailable)?;
        Ok(Self { canvas, ctx })
    }
}

impl CanvasSurface for CanvasTarget {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_display_size(&mut self, width: f64, height: f64) {
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", width));
        _ = style.set_property("height", &format!("{}px", height));
    }

    fn set_scale(&mut self, scale: f64) {
        _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_radial(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        let gradient =
            match self
                .ctx
                .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
            {
                Ok(g) => g,
                Err(_) => return,
            };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, FULL_CIRCLE);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx.fill();
    }
}
