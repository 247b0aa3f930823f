// Renderer double that records mesh lifetimes, surface size and draw calls.

#![allow(dead_code)]
use cubes_core::{Camera, MeshDesc, Renderer, Scene};
use std::collections::HashSet;

#[derive(Default)]
pub struct RecordingRenderer {
    next_id: u64,
    pub live: HashSet<u64>,
    pub created: usize,
    /// Most meshes alive at once.
    pub max_live: usize,
    pub disposed: usize,
    pub draws: usize,
    pub last_drawn: usize,
    pub size: (u32, u32),
    pub fail_next_draw: bool,
}

impl Renderer for RecordingRenderer {
    type Mesh = u64;
    type Error = String;

    fn create_mesh(&mut self, desc: &MeshDesc) -> u64 {
        assert!(desc.dimensions.min_element() > 0.0);
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        self.created += 1;
        self.max_live = self.max_live.max(self.live.len());
        id
    }

    fn dispose_mesh(&mut self, mesh: u64) {
        assert!(self.live.remove(&mesh), "mesh {mesh} disposed twice or unknown");
        self.disposed += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size = (width, height);
        }
    }

    fn draw(&mut self, scene: &Scene<u64>, _camera: &Camera) -> Result<(), String> {
        if self.fail_next_draw {
            self.fail_next_draw = false;
            return Err("surface lost".into());
        }
        for object in scene.objects() {
            assert!(self.live.contains(&object.mesh), "drawing a disposed mesh");
        }
        self.draws += 1;
        self.last_drawn = scene.len();
        Ok(())
    }
}
