//! Platform-free core of the interactive cubes view.
//!
//! Owns the domain (cube batches, the per-frame update rule, pointer and
//! viewport tracking, camera and orbit controller) and talks to the GPU only
//! through the [`Renderer`] trait, so both frontends and the tests share it.

pub mod camera;
pub mod config;
pub mod constants;
pub mod cube;
pub mod driver;
pub mod factory;
pub mod mesh;
pub mod orbit;
pub mod render;
pub mod scene;
pub mod tracking;
pub mod update;
pub mod visualization;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::Camera;
pub use config::{ConfigError, CubeCount, SceneConfig};
pub use constants::*;
pub use cube::Cube;
pub use driver::{CancelToken, FrameStats, LoopControl};
pub use factory::{release_batch, spherical_to_cartesian, CubeFactory};
pub use mesh::{box_geometry, BoxGeometry, MeshDesc, Vertex};
pub use orbit::OrbitController;
pub use render::Renderer;
pub use scene::{hex_to_linear, srgb_to_linear, Lights, Scene, SceneObject};
pub use tracking::{PointerState, ViewportState};
pub use update::{apply_frame, attract, clamp_radius, rotation_increment, step_cube};
pub use visualization::Visualization;
