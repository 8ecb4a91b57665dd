//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Mesh and skybox pipelines
//! - Frame rendering of a scene graph from a camera

use std::sync::Arc;
use winit::window::Window;
use skyward_math::mat4;
use skyward_render::{
    context::{ContextError, RenderContext},
    pipeline::{FrameUniforms, MeshPipeline, SkyboxPipeline, SkyboxUniforms},
    GpuMeshCache, PerspectiveCamera, SceneGraph,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    mesh_pipeline: MeshPipeline,
    skybox_pipeline: SkyboxPipeline,
    meshes: GpuMeshCache,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut mesh_pipeline = MeshPipeline::new(&context.device, context.config.format);
        mesh_pipeline.ensure_depth_texture(
            &context.device,
            context.size.width,
            context.size.height,
        );
        let skybox_pipeline = SkyboxPipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            mesh_pipeline,
            skybox_pipeline,
            meshes: GpuMeshCache::new(),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.mesh_pipeline.ensure_depth_texture(&self.context.device, width, height);
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Width over height of the surface
    pub fn aspect_ratio(&self) -> f32 {
        self.context.aspect_ratio()
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        scene: &SceneGraph,
        camera: &PerspectiveCamera,
    ) -> Result<(), RenderError> {
        let device = &self.context.device;
        let queue = &self.context.queue;

        // Upload meshes added since the last frame
        self.meshes.sync(device, scene);

        let visible = scene.visible_meshes();
        let frame = FrameUniforms::new(
            camera.view_projection(),
            &scene.ambient,
            scene.directional_lights(),
        );
        self.mesh_pipeline.prepare(device, queue, &frame, &visible);

        match scene.background.skybox() {
            Some(images) => self.skybox_pipeline.set_images(device, queue, images),
            None => self.skybox_pipeline.clear(),
        }
        if self.skybox_pipeline.has_texture() {
            let rotation = mat4::from_quat(camera.transform.quaternion());
            self.skybox_pipeline.update_uniforms(
                queue,
                &SkyboxUniforms::new(rotation, camera.fov, camera.aspect),
            );
        }

        // Get surface texture
        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let depth_view = self
            .mesh_pipeline
            .depth_view()
            .ok_or_else(|| RenderError::Other("depth texture missing".to_string()))?;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        let [r, g, b, a] = scene.background.clear_color();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Skybox first; it neither tests nor writes depth
            self.skybox_pipeline.draw(&mut pass);
            self.mesh_pipeline.draw(&mut pass, &self.meshes, &visible);
        }

        // Submit
        queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_surface_error_mapping() {
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Lost), RenderError::SurfaceLost));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Outdated), RenderError::SurfaceLost));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::OutOfMemory), RenderError::OutOfMemory));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Timeout), RenderError::Other(_)));
    }
}
