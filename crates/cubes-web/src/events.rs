use crate::dom;
use crate::input::{self, DragState};
use crate::SharedViz;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners registered for one mounted view, removable as a group.
#[derive(Default)]
pub struct Listeners {
    items: Vec<Listener>,
}

impl Listeners {
    /// Register `handler` for `kind` on `target`; events that are not an `E` are ignored.
    pub fn add<E: JsCast + 'static>(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("[events] could not listen for {}", kind);
            return;
        }
        self.items.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Unsubscribe everything; returns how many listeners were removed.
    pub fn remove_all(&mut self) -> usize {
        let n = self.items.len();
        for l in self.items.drain(..) {
            let _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
        n
    }
}

fn canvas_px(canvas: &web::HtmlCanvasElement, ev: &web::MouseEvent) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
        dom::device_pixel_ratio(),
    )
}

/// Wire pointer attraction, orbit drags, wheel zoom, window resize and the
/// cube count slider to `viz`.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    viz: &SharedViz,
) -> Listeners {
    let mut listeners = Listeners::default();
    let drag: Rc<RefCell<Option<DragState>>> = Rc::new(RefCell::new(None));

    // Pointer anywhere in the window steers the cubes; during a drag it also orbits.
    {
        let viz = viz.clone();
        let drag = drag.clone();
        let canvas = canvas.clone();
        listeners.add(window, "pointermove", move |ev: web::PointerEvent| {
            let (x, y) = canvas_px(&canvas, &ev);
            let mut viz = viz.borrow_mut();
            viz.pointer_moved(x, y);
            if let Some(state) = drag.borrow_mut().as_mut() {
                let (dx, dy) = state.advance(x, y);
                match state.mode {
                    input::DragMode::Rotate => viz.orbit_rotate(dx, dy),
                    input::DragMode::Pan => viz.orbit_pan(dx, dy),
                }
            }
        });
    }

    {
        let drag = drag.clone();
        let canvas_c = canvas.clone();
        listeners.add(canvas, "pointerdown", move |ev: web::PointerEvent| {
            if let Some(mode) = input::drag_mode_for_button(ev.button(), ev.shift_key()) {
                let last = canvas_px(&canvas_c, &ev);
                *drag.borrow_mut() = Some(DragState { mode, last });
                ev.prevent_default();
            }
        });
    }

    // Released anywhere, including outside the canvas
    for kind in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        listeners.add(window, kind, move |_ev: web::PointerEvent| {
            *drag.borrow_mut() = None;
        });
    }

    listeners.add(canvas, "contextmenu", |ev: web::MouseEvent| ev.prevent_default());

    {
        let viz = viz.clone();
        listeners.add(canvas, "wheel", move |ev: web::WheelEvent| {
            ev.prevent_default();
            viz.borrow_mut()
                .orbit_zoom(input::wheel_steps(ev.delta_y(), ev.delta_mode()));
        });
    }

    {
        let viz = viz.clone();
        let canvas = canvas.clone();
        listeners.add(window, "resize", move |_ev: web::Event| {
            let (w, h) = dom::sync_canvas_backing_size(&canvas);
            viz.borrow_mut().resized(w, h);
        });
    }

    if let Some(slider) = dom::slider(document) {
        let viz = viz.clone();
        let document = document.clone();
        let slider_c = slider.clone();
        listeners.add(&slider, "input", move |_ev: web::Event| {
            let shown = {
                let mut viz = viz.borrow_mut();
                viz.set_cube_count(input::slider_count(&slider_c.value()));
                viz.cube_count()
            };
            dom::show_count(&document, shown);
        });
    } else {
        log::warn!("[events] #{} not found; cube count fixed", dom::SLIDER_ID);
    }

    log::debug!("[events] {} listeners attached", listeners.len());
    listeners
}
