use super::helpers;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Offscreen attachments sized to the surface.
///
/// - `msaa_*` is the multisampled color target resolved into the swapchain
///   image; absent when the adapter cannot multisample the surface format.
/// - `depth_*` matches the color sample count.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: Option<wgpu::Texture>,
    pub(crate) msaa_view: Option<wgpu::TextureView>,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
    pub(crate) sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (depth_tex, depth_view) =
            helpers::create_attachment(device, "depth_tex", width, height, DEPTH_FORMAT, sample_count);
        let (msaa_tex, msaa_view) = if sample_count > 1 {
            let (t, v) =
                helpers::create_attachment(device, "msaa_tex", width, height, color_format, sample_count);
            (Some(t), Some(v))
        } else {
            (None, None)
        };
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_tex.destroy();
        if let Some(t) = self.msaa_tex.take() {
            t.destroy();
        }
        *self = Self::new(device, width, height, self.color_format, self.sample_count);
    }

    /// (attachment view, resolve target) for a frame drawn into `frame_view`.
    pub(crate) fn color_views<'a>(
        &'a self,
        frame_view: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &self.msaa_view {
            Some(msaa) => (msaa, Some(frame_view)),
            None => (frame_view, None),
        }
    }
}
