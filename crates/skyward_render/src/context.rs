//! WGPU context management
//!
//! Owns the instance, surface, adapter, device, and queue for one window.

use std::sync::Arc;

use winit::{dpi::PhysicalSize, window::Window};

/// Errors raised while acquiring the GPU
#[derive(Debug)]
pub enum ContextError {
    /// The window surface could not be created
    Surface(wgpu::CreateSurfaceError),
    /// No adapter is compatible with the surface
    NoAdapter,
    /// The adapter refused to open a device
    Device(wgpu::RequestDeviceError),
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextError::Surface(e) => write!(f, "Failed to create surface: {}", e),
            ContextError::NoAdapter => write!(f, "No suitable GPU adapter found"),
            ContextError::Device(e) => write!(f, "Failed to create device: {}", e),
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContextError::Surface(e) => Some(e),
            ContextError::NoAdapter => None,
            ContextError::Device(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for ContextError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        ContextError::Surface(e)
    }
}

impl From<wgpu::RequestDeviceError> for ContextError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        ContextError::Device(e)
    }
}

/// GPU state bound to a window surface
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
}

impl RenderContext {
    /// Create a context with vsync enabled
    pub async fn new(window: Arc<Window>) -> Result<Self, ContextError> {
        Self::with_vsync(window, true).await
    }

    /// Create a context, choosing between vsync and immediate presentation
    pub async fn with_vsync(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Skyward Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: present_mode(vsync),
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            adapter,
            device,
            queue,
            config,
            size,
        })
    }

    /// Reconfigure the surface for a new window size
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            log::debug!("Resized surface to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Reconfigure the surface at its current size (after it was lost)
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Width divided by height of the surface
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.size.width, self.size.height)
    }
}

/// Presentation mode for the vsync setting
fn present_mode(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}

/// Aspect ratio guarded against a zero height
pub(crate) fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_mode() {
        assert_eq!(present_mode(true), wgpu::PresentMode::AutoVsync);
        assert_eq!(present_mode(false), wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn test_aspect_ratio() {
        assert!((aspect_ratio(1280, 720) - 16.0 / 9.0).abs() < 1e-6);
        // Minimized windows report zero height
        assert_eq!(aspect_ratio(800, 0), 800.0);
    }

    #[test]
    fn test_context_error_display() {
        assert_eq!(format!("{}", ContextError::NoAdapter), "No suitable GPU adapter found");
    }
}
