use crate::camera::Camera;
use crate::mesh::MeshDesc;
use crate::scene::Scene;

/// The drawing backend a [`crate::Visualization`] runs on.
///
/// Meshes are created and disposed explicitly: every handle returned by
/// `create_mesh` is given back through `dispose_mesh` exactly once.
pub trait Renderer {
    type Mesh;
    type Error: std::fmt::Debug;

    fn create_mesh(&mut self, desc: &MeshDesc) -> Self::Mesh;
    fn dispose_mesh(&mut self, mesh: Self::Mesh);
    /// Match the drawable surface to the viewport, in physical pixels.
    fn resize(&mut self, width: u32, height: u32);
    fn draw(&mut self, scene: &Scene<Self::Mesh>, camera: &Camera) -> Result<(), Self::Error>;
}
