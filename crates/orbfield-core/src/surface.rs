//! Drawing surface sizing.
//!
//! The backing store is kept at `logical × dpr` pixels while every draw call
//! is issued in logical (CSS pixel) coordinates. The host platform is reached
//! through two small traits so the sizing rules can be exercised without a
//! browser.

use crate::color::Rgba;
use glam::DVec2;
use smallvec::SmallVec;

/// Host queries for the current viewport.
pub trait Viewport {
    /// Logical (CSS pixel) width and height of the viewport.
    fn inner_size(&self) -> (f64, f64);
    /// `None` when the host does not report one.
    fn device_pixel_ratio(&self) -> Option<f64>;
}

/// One color stop of a radial gradient; `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

pub type GradientStops = SmallVec<[GradientStop; 3]>;

/// The canvas element together with its 2D context.
pub trait CanvasSurface {
    /// Backing-store size in device pixels. Invalidates drawn content.
    fn set_backing_size(&mut self, width: u32, height: u32);
    /// Display size in CSS pixels.
    fn set_display_size(&mut self, width: f64, height: f64);
    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f64);
    /// Clear `[0, width] × [0, height]` in logical coordinates.
    fn clear(&mut self, width: f64, height: f64);
    /// Fill the full circle at `center` with a radial gradient running from
    /// `center` (offset 0) to `radius` (offset 1).
    fn fill_radial(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]);
}

/// Snapshot of the surface geometry after a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub logical_width: f64,
    pub logical_height: f64,
    pub dpr: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceMetrics {
    /// `height_factor` stretches the canvas below the fold on scrolling pages.
    pub fn compute(viewport: (f64, f64), dpr: Option<f64>, height_factor: f64) -> Self {
        let dpr = dpr.filter(|d| d.is_finite() && *d > 0.0).unwrap_or(1.0);
        let logical_width = viewport.0.max(0.0);
        let logical_height = (viewport.1 * height_factor).max(0.0);
        Self {
            logical_width,
            logical_height,
            dpr,
            backing_width: ((logical_width * dpr) as u32).max(1),
            backing_height: ((logical_height * dpr) as u32).max(1),
        }
    }
}

pub struct ViewportSurface<C> {
    canvas: C,
    height_factor: f64,
    metrics: SurfaceMetrics,
}

impl<C: CanvasSurface> ViewportSurface<C> {
    pub fn new(canvas: C, height_factor: f64) -> Self {
        Self {
            canvas,
            height_factor,
            metrics: SurfaceMetrics::compute((0.0, 0.0), None, height_factor),
        }
    }

    /// Re-read the viewport and rebuild the backing store and transform.
    ///
    /// Safe to call repeatedly: the scale is replaced, never multiplied.
    pub fn resize<V: Viewport + ?Sized>(&mut self, viewport: &V) -> SurfaceMetrics {
        let m = SurfaceMetrics::compute(
            viewport.inner_size(),
            viewport.device_pixel_ratio(),
            self.height_factor,
        );
        self.canvas.set_backing_size(m.backing_width, m.backing_height);
        self.canvas.set_display_size(m.logical_width, m.logical_height);
        self.canvas.set_scale(m.dpr);
        self.metrics = m;
        log::debug!(
            "[surface] {:.0}x{:.0} css @ {:.2}x -> {}x{} px",
            m.logical_width,
            m.logical_height,
            m.dpr,
            m.backing_width,
            m.backing_height
        );
        m
    }

    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }
}
