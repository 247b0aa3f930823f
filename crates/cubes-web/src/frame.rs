use crate::events::Listeners;
use crate::SharedViz;
use cubes_core::LoopControl;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: Tick,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and drop the callback. Call outside the callback.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn schedule(tick: &Tick, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// One visualization tick; false once the loop should not be rescheduled.
fn run_frame(viz: &SharedViz) -> bool {
    let mut viz = viz.borrow_mut();
    match viz.tick() {
        Ok(LoopControl::Continue) => true,
        Ok(LoopControl::Stop) => false,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            viz.renderer_mut().reconfigure();
            true
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
            log::error!("[frame] out of GPU memory; stopping");
            viz.teardown();
            false
        }
        Err(e) => {
            log::warn!("[frame] skipped: {:?}", e);
            true
        }
    }
}

/// Run `viz` every animation frame. When the view tears itself down (e.g. out
/// of GPU memory) the loop also unsubscribes `listeners`.
pub fn start_loop(viz: SharedViz, listeners: Rc<RefCell<Listeners>>) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let token = viz.borrow().cancel_token();

    let tick_c = tick.clone();
    let raf_c = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_c.set(None);
        if token.is_cancelled() {
            return;
        }
        if run_frame(&viz) {
            schedule(&tick_c, &raf_c);
        } else if viz.borrow().is_torn_down() {
            let removed = listeners.borrow_mut().remove_all();
            log::info!("[frame] view torn down; removed {} listeners", removed);
        }
    }) as Box<dyn FnMut()>));

    schedule(&tick, &raf_id);
    FrameLoop { tick, raf_id }
}
