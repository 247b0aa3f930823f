#![cfg(target_arch = "wasm32")]
//! Browser entry point: mounts the cubes view on `#app-canvas` with WebGPU.

use cubes_core::{CubeCount, SceneConfig, ViewportState, Visualization};
use cubes_render::GpuRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;

pub(crate) type SharedViz = Rc<RefCell<Visualization<GpuRenderer<'static>>>>;

struct Mounted {
    viz: SharedViz,
    document: web::Document,
    listeners: Rc<RefCell<events::Listeners>>,
    frame: frame::FrameLoop,
    stopped: Cell<bool>,
}

impl Mounted {
    fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        self.frame.stop();
        let removed = self.listeners.borrow_mut().remove_all();
        self.viz.borrow_mut().teardown();
        log::info!("[web] stopped; removed {} listeners", removed);
    }

    /// Returns the count actually in effect, unchanged once torn down.
    fn set_cube_count(&self, count: CubeCount) -> CubeCount {
        let shown = {
            let mut viz = self.viz.borrow_mut();
            viz.set_cube_count(count);
            viz.cube_count()
        };
        dom::show_count(&self.document, shown);
        shown
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Rc<Mounted>>> = RefCell::new(None);
}

/// Handle to the mounted view for page scripts.
#[wasm_bindgen]
pub struct CubesApp {
    inner: Rc<Mounted>,
}

#[wasm_bindgen]
impl CubesApp {
    /// Stop the frame loop, remove every listener and release all cubes.
    pub fn stop(&self) {
        self.inner.stop();
    }

    /// Regenerate with `n` cubes, clamped to the slider range; returns the count in effect.
    #[wasm_bindgen(js_name = setCubeCount)]
    pub fn set_cube_count(&self, n: u32) -> u32 {
        self.inner.set_cube_count(CubeCount::clamped(n as i64)).get()
    }

    #[wasm_bindgen(getter, js_name = cubeCount)]
    pub fn cube_count(&self) -> u32 {
        self.inner.viz.borrow().cube_count().get()
    }
}

/// The view mounted at startup, once initialization has finished.
#[wasm_bindgen(js_name = currentApp)]
pub fn current_app() -> Option<CubesApp> {
    MOUNTED.with(|m| m.borrow().clone().map(|inner| CubesApp { inner }))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cubes-web starting");

    spawn_local(async move {
        match init().await {
            Ok(Some(mounted)) => MOUNTED.with(|m| *m.borrow_mut() = Some(mounted)),
            Ok(None) => {}
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<Option<Rc<Mounted>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Some(canvas_el) = document.get_element_by_id(dom::CANVAS_ID) else {
        log::warn!("[web] #{} not found; nothing mounted", dom::CANVAS_ID);
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let renderer = GpuRenderer::new(wgpu::SurfaceTarget::Canvas(canvas.clone()), width, height).await?;

    let config = SceneConfig::default();
    if let Some(slider) = dom::slider(&document) {
        dom::init_slider(&slider, config.cube_count);
    }
    dom::show_count(&document, config.cube_count);

    let viz: SharedViz = Rc::new(RefCell::new(Visualization::mount(
        renderer,
        config,
        ViewportState::new(width, height),
    )));
    let listeners = Rc::new(RefCell::new(events::wire(&window, &document, &canvas, &viz)));
    let frame = frame::start_loop(viz.clone(), listeners.clone());
    dom::hide_loading(&document);

    Ok(Some(Rc::new(Mounted {
        viz,
        document,
        listeners,
        frame,
        stopped: Cell::new(false),
    })))
}
