//! The mounted view: owns every piece of per-view state and runs one frame per tick.

use crate::camera::Camera;
use crate::config::{CubeCount, SceneConfig};
use crate::driver::{CancelToken, FrameStats, LoopControl};
use crate::factory::{release_batch, CubeFactory};
use crate::orbit::OrbitController;
use crate::render::Renderer;
use crate::scene::Scene;
use crate::tracking::{PointerState, ViewportState};
use crate::update::apply_frame;

pub struct Visualization<R: Renderer> {
    renderer: R,
    scene: Scene<R::Mesh>,
    camera: Camera,
    orbit: OrbitController,
    pointer: PointerState,
    viewport: ViewportState,
    factory: CubeFactory,
    config: SceneConfig,
    cube_count: CubeCount,
    token: CancelToken,
    stats: FrameStats,
    torn_down: bool,
}

impl<R: Renderer> Visualization<R> {
    /// Build the scene on an already-acquired renderer and generate the first batch.
    pub fn mount(mut renderer: R, config: SceneConfig, viewport: ViewportState) -> Self {
        renderer.resize(viewport.width, viewport.height);
        let mut scene = Scene::new();
        let mut factory = CubeFactory::new(config.seed);
        let cube_count = config.cube_count;
        factory.regenerate(&mut scene, &mut renderer, cube_count.get() as usize);
        log::info!(
            "[viz] mounted {}x{} with {} cubes",
            viewport.width,
            viewport.height,
            scene.len()
        );
        Self {
            camera: Camera::initial(&config, viewport.aspect()),
            orbit: OrbitController::new(config.damping),
            pointer: PointerState::CENTER,
            renderer,
            scene,
            viewport,
            factory,
            config,
            cube_count,
            token: CancelToken::new(),
            stats: FrameStats::default(),
            torn_down: false,
        }
    }

    /// One frame: cube update, camera damping, one draw call.
    ///
    /// Checks cancellation before doing any work, so no frame runs after teardown.
    pub fn tick(&mut self) -> Result<LoopControl, R::Error> {
        if self.token.is_cancelled() {
            return Ok(LoopControl::Stop);
        }
        apply_frame(self.scene.objects_mut(), self.pointer);
        self.orbit.update(&mut self.camera);
        self.renderer.draw(&self.scene, &self.camera)?;
        self.stats.record();
        Ok(LoopControl::Continue)
    }

    /// Restart the pipeline with a new batch size.
    ///
    /// The old batch is fully released, pointer and camera go back to their
    /// initial state, then `count` new cubes are generated. Returns false when
    /// nothing changed.
    pub fn set_cube_count(&mut self, count: CubeCount) -> bool {
        if self.torn_down || count == self.cube_count {
            return false;
        }
        let released = release_batch(&mut self.scene, &mut self.renderer);
        self.pointer = PointerState::CENTER;
        self.camera = Camera::initial(&self.config, self.viewport.aspect());
        self.orbit.reset();
        self.cube_count = count;
        self.factory
            .regenerate(&mut self.scene, &mut self.renderer, count.get() as usize);
        log::info!(
            "[viz] cube count {} -> {} cubes",
            released,
            self.scene.len()
        );
        true
    }

    /// Raw pointer position in pixels relative to the viewport's top-left.
    pub fn pointer_moved(&mut self, px: f32, py: f32) {
        if self.torn_down {
            return;
        }
        self.pointer = PointerState::from_pixels(px, py, &self.viewport);
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        if self.torn_down || !self.viewport.resize(width, height) {
            return;
        }
        self.camera.set_aspect(self.viewport.aspect());
        self.renderer.resize(width, height);
        log::debug!("[viz] resized to {}x{}", width, height);
    }

    pub fn orbit_rotate(&mut self, dx_px: f32, dy_px: f32) {
        if !self.torn_down {
            self.orbit.rotate(dx_px, dy_px, &self.viewport);
        }
    }

    pub fn orbit_pan(&mut self, dx_px: f32, dy_px: f32) {
        if !self.torn_down {
            self.orbit.pan(dx_px, dy_px, &self.camera, &self.viewport);
        }
    }

    pub fn orbit_zoom(&mut self, steps: f32) {
        if !self.torn_down {
            self.orbit.zoom(steps);
        }
    }

    /// Stop scheduling and release every cube's resources. Safe to call twice.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.token.cancel();
        let released = release_batch(&mut self.scene, &mut self.renderer);
        self.orbit.reset();
        self.torn_down = true;
        log::info!(
            "[viz] torn down after {} frames, released {} cubes",
            self.stats.frames(),
            released
        );
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn scene(&self) -> &Scene<R::Mesh> {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn cube_count(&self) -> CubeCount {
        self.cube_count
    }

    pub fn frames(&self) -> u64 {
        self.stats.frames()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<R: Renderer> Drop for Visualization<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
