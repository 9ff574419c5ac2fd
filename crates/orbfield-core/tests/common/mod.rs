// Host-side fakes for the canvas, frame scheduler and viewport.

#![allow(dead_code)]
use glam::DVec2;
use orbfield_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    BackingSize(u32, u32),
    DisplaySize(f64, f64),
    Scale(f64),
    Clear(f64, f64),
    Radial {
        center: DVec2,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

/// Records every call and tracks the resulting canvas state.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    pub backing: (u32, u32),
    pub display: (f64, f64),
    pub scale: f64,
}

impl RecordingCanvas {
    pub fn radial_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Radial { .. }))
            .count()
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear(..)))
            .count()
    }
}

impl CanvasSurface for RecordingCanvas {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.calls.push(DrawCall::BackingSize(width, height));
    }

    fn set_display_size(&mut self, width: f64, height: f64) {
        self.display = (width, height);
        self.calls.push(DrawCall::DisplaySize(width, height));
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.calls.push(DrawCall::Scale(scale));
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear(width, height));
    }

    fn fill_radial(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        self.calls.push(DrawCall::Radial {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }
}

/// Host frame queue shared between a test and the scheduler it hands out.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u32,
    pub queued: Vec<u32>,
    pub requests: u32,
    pub cancels: Vec<u32>,
    pub refuse: bool,
}

#[derive(Clone, Default)]
pub struct FakeFrames {
    pub queue: Rc<RefCell<FrameQueue>>,
}

impl FakeFrames {
    pub fn refusing() -> Self {
        let frames = Self::default();
        frames.queue.borrow_mut().refuse = true;
        frames
    }

    /// Hand out the frames the host would fire now, removing them from the
    /// queue.
    pub fn take_due(&self) -> Vec<u32> {
        std::mem::take(&mut self.queue.borrow_mut().queued)
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().queued.len()
    }

    pub fn requests(&self) -> u32 {
        self.queue.borrow().requests
    }
}

impl FrameScheduler for FakeFrames {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        let mut q = self.queue.borrow_mut();
        if q.refuse {
            return None;
        }
        q.next_id += 1;
        q.requests += 1;
        let id = q.next_id;
        q.queued.push(id);
        Some(id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        let mut q = self.queue.borrow_mut();
        q.queued.retain(|h| *h != handle);
        q.cancels.push(handle);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedViewport {
    pub width: f64,
    pub height: f64,
    pub dpr: Option<f64>,
}

impl FixedViewport {
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self {
            width,
            height,
            dpr: Some(dpr),
        }
    }
}

impl Viewport for FixedViewport {
    fn inner_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.dpr
    }
}

pub type TestField = AmbientParticleField<RecordingCanvas, FakeFrames, StdRng>;

pub fn make_field(config: FieldConfig, seed: u64) -> (TestField, FakeFrames) {
    let frames = FakeFrames::default();
    let field = AmbientParticleField::new(
        RecordingCanvas::default(),
        frames.clone(),
        config,
        StdRng::seed_from_u64(seed),
    );
    (field, frames)
}

/// Fire every due frame once, the way the browser would on its next paint.
pub fn run_frames(field: &mut TestField, frames: &FakeFrames, timestamp_ms: f64) -> usize {
    let mut ticked = 0;
    for _ in frames.take_due() {
        if field.frame(timestamp_ms) {
            ticked += 1;
        }
    }
    ticked
}

pub fn in_bounds(p: &Particle, width: f64, height: f64) -> bool {
    let r = p.radius;
    p.position.x >= -r && p.position.x <= width + r && p.position.y >= -r && p.position.y <= height + r
}
