use crate::constants::RESIZE_EVENT;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window `resize` subscription that can be attached and released.
///
/// Unlike a fire-and-forget listener, the closure is kept so the exact same
/// function can be removed again on stop.
pub struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
    attached: bool,
}

impl ResizeListener {
    pub fn new(window: web::Window, mut handler: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        Self {
            window,
            closure,
            attached: false,
        }
    }

    fn callback(&self) -> &js_sys::Function {
        self.closure.as_ref().unchecked_ref()
    }

    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = self
            .window
            .add_event_listener_with_callback(RESIZE_EVENT, self.callback())
            .is_ok();
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        _ = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, self.callback());
        self.attached = false;
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        self.detach();
    }
}
