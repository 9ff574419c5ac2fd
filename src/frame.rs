use crate::canvas::CanvasTarget;
use orbfield_core::{AmbientParticleField, FrameScheduler};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebField = AmbientParticleField<CanvasTarget, AnimationFrames, StdRng>;

/// Slot holding the `requestAnimationFrame` callback. Filled once the engine
/// it drives exists.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame` for one engine.
pub struct AnimationFrames {
    window: web::Window,
    tick: TickSlot,
}

impl AnimationFrames {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for AnimationFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.tick.borrow();
        let cb = slot.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Install the per-frame callback. It only holds a weak reference so the
/// engine can be dropped while the callback sits in its slot.
pub fn install_tick(tick: &TickSlot, field: Weak<RefCell<WebField>>) {
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if let Some(field) = field.upgrade() {
            if let Ok(mut f) = field.try_borrow_mut() {
                f.frame(timestamp_ms);
            }
        }
    }) as Box<dyn FnMut(f64)>));
}
