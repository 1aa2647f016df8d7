//! Animation-frame coalescing for scroll handling.
//!
//! Scroll events arrive in bursts. Each burst collapses to at most one
//! resolve-and-apply pass per animation frame: the first event schedules a
//! frame, later events are dropped until that frame has run.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// Pending flag for a single scheduled frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Claim the next frame. Returns `false` if one is already scheduled.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as run (or abandoned).
    pub fn finish(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending
    }
}

#[cfg(feature = "csr")]
pub use browser::FrameCoalescer;

#[cfg(feature = "csr")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::FrameGate;

    /// Runs a callback on the next animation frame, once per burst.
    #[derive(Clone)]
    pub struct FrameCoalescer {
        gate: Rc<Cell<FrameGate>>,
        callback: Rc<dyn Fn()>,
    }

    impl FrameCoalescer {
        pub fn new(callback: impl Fn() + 'static) -> Self {
            Self { gate: Rc::new(Cell::new(FrameGate::default())), callback: Rc::new(callback) }
        }

        /// Schedule the callback unless a frame is already pending.
        pub fn request(&self) {
            let mut gate = self.gate.get();
            if !gate.try_schedule() {
                return;
            }
            self.gate.set(gate);

            let Some(window) = web_sys::window() else {
                self.run_now();
                return;
            };

            let gate_for_cb = Rc::clone(&self.gate);
            let callback = Rc::clone(&self.callback);
            let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
            let holder_for_cb = Rc::clone(&holder);
            let cb = Closure::wrap(Box::new(move |_ts: f64| {
                let mut gate = gate_for_cb.get();
                gate.finish();
                gate_for_cb.set(gate);
                callback();
                holder_for_cb.borrow_mut().take();
            }) as Box<dyn FnMut(f64)>);

            if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
                *holder.borrow_mut() = Some(cb);
            } else {
                self.run_now();
            }
        }

        fn run_now(&self) {
            let mut gate = self.gate.get();
            gate.finish();
            self.gate.set(gate);
            (self.callback)();
        }
    }
}
