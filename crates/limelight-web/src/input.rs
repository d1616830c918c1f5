use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Accumulated input and window state read each frame by the application.
pub struct InputState {
    /// Wheel pixels since the last frame.
    pub scroll_delta: f32,
    /// Current CSS viewport size.
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub resized: bool,
    pub debug_toggled: bool,
    pub code_toggled: bool,
}

impl InputState {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            scroll_delta: 0.0,
            viewport_width,
            viewport_height,
            resized: false,
            debug_toggled: false,
            code_toggled: false,
        }
    }

    /// Clear per-frame deltas (called after the frame consumes them).
    pub fn clear_deltas(&mut self) {
        self.scroll_delta = 0.0;
        self.resized = false;
        self.debug_toggled = false;
        self.code_toggled = false;
    }
}

/// Register wheel/resize/keyboard listeners on the window ONCE at init.
/// Closures are leaked via `.forget()` since they live for the page
/// lifetime.
pub fn register_input_listeners(window: &web_sys::Window, state: Rc<RefCell<InputState>>) {
    let target: &web_sys::EventTarget = window.as_ref();

    // wheel
    {
        let state = state.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::WheelEvent)>::new(move |e: web_sys::WheelEvent| {
                state.borrow_mut().scroll_delta += e.delta_y() as f32;
            });
        target
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
            .expect("failed to add wheel listener");
        closure.forget();
    }

    // resize
    {
        let state = state.clone();
        let window = window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut s = state.borrow_mut();
            s.viewport_width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as f32;
            s.viewport_height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as f32;
            s.resized = true;
        });
        target
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .expect("failed to add resize listener");
        closure.forget();
    }

    // keydown: panel toggles
    {
        let state = state.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                let mut s = state.borrow_mut();
                match e.key().as_str() {
                    "d" => s.debug_toggled = true,
                    "c" => s.code_toggled = true,
                    _ => {}
                }
            });
        target
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .expect("failed to add keydown listener");
        closure.forget();
    }
}
