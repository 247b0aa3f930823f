use super::pipeline::ObjectUniforms;
use cubes_core::{box_geometry, Cube, MeshDesc};
use wgpu::util::DeviceExt;

/// GPU resources of one cube: geometry buffers plus its material/transform uniforms.
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 4],
    specular: [f32; 4],
}

impl GpuMesh {
    pub(crate) fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, desc: &MeshDesc) -> Self {
        let geo = box_geometry(desc.dimensions);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vb"),
            contents: bytemuck::cast_slice(&geo.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_ib"),
            contents: bytemuck::cast_slice(&geo.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cube_uniforms"),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube_bg"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: geo.indices.len() as u32,
            uniform_buffer,
            bind_group,
            color: desc.color.extend(1.0).to_array(),
            specular: desc.specular.extend(desc.shininess).to_array(),
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, cube: &Cube) {
        let u = ObjectUniforms {
            model: cube.model_matrix().to_cols_array_2d(),
            color: self.color,
            specular: self.specular,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(1, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    /// Free geometry and material buffers now rather than when the last handle drops.
    pub(crate) fn destroy(self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}
