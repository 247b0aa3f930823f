//! wgpu implementation of the cubes [`Renderer`].
//!
//! One surface, one Blinn-Phong pipeline, a multisampled color target with a
//! depth buffer, and one [`GpuMesh`] per cube holding that cube's geometry and
//! material buffers.

use cubes_core::{Camera, MeshDesc, Renderer, Scene, MSAA_SAMPLES};

mod error;
mod helpers;
mod mesh;
mod pipeline;
mod targets;

pub use error::RenderError;
pub use mesh::GpuMesh;

use pipeline::{create_scene_resources, GlobalsUniforms, SceneResources};
use targets::RenderTargets;

pub struct GpuRenderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    scene: SceneResources,
    targets: RenderTargets,
    live_meshes: usize,
}

impl<'w> GpuRenderer<'w> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'w>>,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        let width = width.max(1);
        let height = height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;
        // Shading happens in linear space; draw through an sRGB view even when
        // the canvas only offers a non-sRGB format.
        let view_format = format.add_srgb_suffix();
        let view_formats = if view_format != format {
            vec![view_format]
        } else {
            vec![]
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats,
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = if adapter
            .get_texture_format_features(view_format)
            .flags
            .sample_count_supported(MSAA_SAMPLES)
        {
            MSAA_SAMPLES
        } else {
            1
        };
        let scene = create_scene_resources(&device, view_format, sample_count);
        let targets = RenderTargets::new(&device, width, height, view_format, sample_count);
        log::info!(
            "[gpu] {} via {:?}, format {:?}, {}x msaa",
            adapter.get_info().name,
            adapter.get_info().backend,
            view_format,
            sample_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            scene,
            targets,
            live_meshes: 0,
        })
    }

    /// Meshes created and not yet disposed.
    pub fn live_meshes(&self) -> usize {
        self.live_meshes
    }

    /// Reconfigure with the current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

impl<'w> Renderer for GpuRenderer<'w> {
    type Mesh = GpuMesh;
    type Error = wgpu::SurfaceError;

    fn create_mesh(&mut self, desc: &MeshDesc) -> GpuMesh {
        self.live_meshes += 1;
        GpuMesh::new(&self.device, &self.scene.object_layout, desc)
    }

    fn dispose_mesh(&mut self, mesh: GpuMesh) {
        self.live_meshes = self.live_meshes.saturating_sub(1);
        mesh.destroy();
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    fn draw(&mut self, scene: &Scene<GpuMesh>, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });

        let globals = GlobalsUniforms::new(camera, &scene.lights);
        self.queue
            .write_buffer(&self.scene.globals_buffer, 0, bytemuck::bytes_of(&globals));
        for object in scene.objects() {
            object.mesh.write_uniforms(&self.queue, &object.cube);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let (color_view, resolve_target) = self.targets.color_views(&view);
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(helpers::linear_clear(scene.background)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.globals_bind_group, &[]);
            for object in scene.objects() {
                object.mesh.draw(&mut rpass);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
