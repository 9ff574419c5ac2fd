//! The animated-background engine a page mounts.
//!
//! Wires a [`ViewportSurface`], a [`ParticleSet`] and a [`RenderLoop`]
//! together. The engine never fails outward: a surface that cannot be
//! acquired simply means no engine, and no frames.

use crate::config::{DeviceClass, FieldConfig};
use crate::error::FieldError;
use crate::particle::ParticleSet;
use crate::render_loop::{FrameScheduler, RenderLoop};
use crate::surface::{CanvasSurface, SurfaceMetrics, Viewport, ViewportSurface};
use rand::Rng;

pub struct AmbientParticleField<C, S: FrameScheduler, R> {
    config: FieldConfig,
    surface: ViewportSurface<C>,
    particles: ParticleSet,
    frame_loop: RenderLoop<S>,
    rng: R,
    device: DeviceClass,
    epoch_ms: Option<f64>,
}

impl<C, S, R> AmbientParticleField<C, S, R>
where
    C: CanvasSurface,
    S: FrameScheduler,
    R: Rng,
{
    pub fn new(canvas: C, scheduler: S, config: FieldConfig, rng: R) -> Self {
        let surface = ViewportSurface::new(canvas, config.height_factor);
        Self {
            config,
            surface,
            particles: ParticleSet::default(),
            frame_loop: RenderLoop::new(scheduler),
            rng,
            device: DeviceClass::Desktop,
            epoch_ms: None,
        }
    }

    /// Build an engine from a fallible surface acquisition.
    ///
    /// A missing surface is not an error for the page: it is logged at debug
    /// level and `None` is returned.
    pub fn mount<A>(acquire: A, scheduler: S, config: FieldConfig, rng: R) -> Option<Self>
    where
        A: FnOnce() -> Result<C, FieldError>,
    {
        match acquire() {
            Ok(canvas) => Some(Self::new(canvas, scheduler, config, rng)),
            Err(e) => {
                log::debug!("[field] not mounting: {}", e);
                None
            }
        }
    }

    /// Size the surface, seed the orbs and start the loop.
    ///
    /// Returns `false` when already running.
    pub fn start<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        if self.frame_loop.is_running() {
            return false;
        }
        let m = self.surface.resize(viewport);
        self.device = self.config.device_class(m.logical_width);
        self.reseed(m);
        self.epoch_ms = None;
        let started = self.frame_loop.start();
        if started {
            log::info!(
                "[field] started: {} orbs ({:?}) on {:.0}x{:.0}",
                self.particles.len(),
                self.device,
                m.logical_width,
                m.logical_height
            );
        } else {
            self.particles.clear();
        }
        started
    }

    /// One tick: clear, update, draw, schedule the next frame.
    ///
    /// `timestamp_ms` is the host's frame timestamp; it only drives pulses.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.frame_loop.begin_frame() {
            return false;
        }
        let epoch = *self.epoch_ms.get_or_insert(timestamp_ms);
        let elapsed = (timestamp_ms - epoch).max(0.0);
        let m = self.surface.metrics();
        let canvas = self.surface.canvas_mut();
        canvas.clear(m.logical_width, m.logical_height);
        self.particles.update(m.logical_width, m.logical_height);
        self.particles.draw(canvas, elapsed);
        self.frame_loop.end_frame();
        true
    }

    /// Viewport changed. The new size is picked up by the next tick; orbs are
    /// reseeded only when the device class flips.
    pub fn resize<V: Viewport + ?Sized>(&mut self, viewport: &V) -> SurfaceMetrics {
        let m = self.surface.resize(viewport);
        if self.frame_loop.is_running() {
            let class = self.config.device_class(m.logical_width);
            if class != self.device {
                log::debug!("[field] device class {:?} -> {:?}, reseeding", self.device, class);
                self.device = class;
                self.reseed(m);
            }
        }
        m
    }

    /// Cancel the pending frame and drop the orbs. Returns `false` when
    /// already stopped.
    pub fn stop(&mut self) -> bool {
        let stopped = self.frame_loop.stop();
        self.particles.clear();
        if stopped {
            log::info!("[field] stopped after {} frames", self.frame_loop.frames());
        }
        stopped
    }

    fn reseed(&mut self, m: SurfaceMetrics) {
        let count = self.config.profile(self.device).count;
        self.particles = ParticleSet::seed(
            &mut self.rng,
            &self.config,
            count,
            m.logical_width,
            m.logical_height,
            self.device,
        );
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn metrics(&self) -> SurfaceMetrics {
        self.surface.metrics()
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn render_loop(&self) -> &RenderLoop<S> {
        &self.frame_loop
    }

    pub fn canvas(&self) -> &C {
        self.surface.canvas()
    }
}
