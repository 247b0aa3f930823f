use glam::Vec3;

// Shared scene/interaction tuning constants used by both web and native frontends.

// Cube batch
pub const SPAWN_RADIUS: f32 = 10.0; // every cube starts on this sphere
pub const BOUND_RADIUS: f32 = 15.0; // hard containment sphere
pub const CUBE_SIZE_MIN: f32 = 0.5;
pub const CUBE_SIZE_SPAN: f32 = 2.0; // sizes land in [MIN, MIN + SPAN)

// Cube count slider
pub const CUBE_COUNT_MIN: u32 = 10;
pub const CUBE_COUNT_MAX: u32 = 200;
pub const CUBE_COUNT_DEFAULT: u32 = 50;

// Pointer attraction
pub const POINTER_WORLD_SCALE: f32 = 5.0; // normalized pointer -> world units
pub const ATTRACTION_SPEED: f32 = 0.01; // fraction of the gap closed per frame

// Per-frame rotation: base + (index % modulus) * step
pub const ROT_X_BASE: f32 = 0.005;
pub const ROT_X_STEP: f32 = 0.001;
pub const ROT_X_MODULUS: usize = 5;
pub const ROT_Y_BASE: f32 = 0.01;
pub const ROT_Y_STEP: f32 = 0.001;
pub const ROT_Y_MODULUS: usize = 3;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 15.0;

// Orbit controller
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // dolly scale per wheel step
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_POLAR_EPS: f32 = 1e-6;

// Lighting and materials
pub const BACKGROUND_SRGB: u32 = 0x111827;
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const SHININESS: f32 = 100.0;
pub const SPECULAR: Vec3 = Vec3::ONE; // white highlights

// Renderer
pub const MSAA_SAMPLES: u32 = 4;
