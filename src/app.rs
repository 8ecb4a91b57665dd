//! Windowed application
//!
//! Owns the window, renderer, and active demo, and routes winit events to them.

use std::process::ExitCode;

use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use crate::config::{AppConfig, InputConfig};
use crate::demos::{build_demo, Demo, DemoKind};
use crate::input::{InputAction, InputMapper};
use crate::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Pixels of touchpad scroll that count as one wheel line
const PIXELS_PER_LINE: f64 = 100.0;

/// Main application state
pub struct App {
    config: AppConfig,
    kind: DemoKind,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    demo: Option<Box<dyn Demo>>,
    simulation: SimulationSystem,
}

impl App {
    pub fn new(config: AppConfig, kind: DemoKind) -> Self {
        let simulation = SimulationSystem::with_max_frame_time(config.demo.max_frame_time);
        Self {
            config,
            kind,
            window: None,
            render: None,
            demo: None,
            simulation,
        }
    }

    fn cursor_captured(&self) -> bool {
        self.window.as_ref().is_some_and(|w| w.is_cursor_captured())
    }

    fn apply_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleCursor => {
                if let Some(window) = &mut self.window {
                    window.toggle_cursor();
                }
            }
            InputAction::ResetDemo => {
                if let Some(demo) = &mut self.demo {
                    demo.reset();
                }
                self.simulation.restart();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(render), Some(demo)) =
            (&mut self.window, &mut self.render, &mut self.demo)
        else {
            return;
        };

        self.simulation.update(demo.as_mut());

        if self.config.debug.status_in_title {
            window.update_title(&demo.status());
        }

        match render.render_frame(demo.scene(), demo.camera()) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::debug!("Surface lost, reconfiguring");
                render.reconfigure();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(window.window().clone(), self.config.window.vsync) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialize GPU: {}", e);
                event_loop.exit();
                return;
            }
        };

        let demo = build_demo(self.kind, &self.config, render.aspect_ratio());
        log::info!("Running {} demo", demo.name());

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.demo = Some(demo);
        self.simulation.restart();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                    if physical_size.width > 0 && physical_size.height > 0 {
                        let aspect = render.aspect_ratio();
                        if let Some(demo) = &mut self.demo {
                            demo.camera_mut().set_aspect(aspect);
                        }
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                if let Some(action) = InputMapper::map_keyboard(key, event.state, self.cursor_captured()) {
                    self.apply_action(action, event_loop);
                    return;
                }
                if let Some(demo) = &mut self.demo {
                    demo.handle_key(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(action) = InputMapper::map_mouse_button(
                    button,
                    state,
                    self.cursor_captured(),
                    self.config.input.capture_on_click,
                ) {
                    self.apply_action(action, event_loop);
                }
                if let Some(demo) = &mut self.demo {
                    demo.handle_mouse_button(button, state);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(demo) = &mut self.demo {
                    demo.handle_scroll(scroll_lines(delta));
                }
            }

            WindowEvent::Focused(false) => {
                // Drop any drag in progress; the release event never arrives
                if let Some(demo) = &mut self.demo {
                    demo.handle_mouse_button(MouseButton::Right, ElementState::Released);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            let captured = self.cursor_captured();
            let (dx, dy) = scale_mouse_delta(delta, &self.config.input);
            if let Some(demo) = &mut self.demo {
                demo.handle_mouse_motion(dx, dy, captured);
            }
        }
    }
}

/// Apply the configured scale and vertical inversion to raw mouse motion
pub fn scale_mouse_delta(delta: (f64, f64), input: &InputConfig) -> (f64, f64) {
    let scale = input.mouse_scale as f64;
    let y_sign = if input.invert_y { -1.0 } else { 1.0 };
    (delta.0 * scale, delta.1 * scale * y_sign)
}

/// Wheel delta in lines
pub fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
    }
}

/// Initialize logging; `RUST_LOG` takes precedence over the configured level
pub fn init_logging(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A second initialization (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Run the event loop until the window closes
pub fn run(config: AppConfig, kind: DemoKind) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, kind);
    event_loop.run_app(&mut app)
}

/// Load config, start logging, and run a demo
///
/// `kind` overrides the demo named in the configuration.
pub fn launch(kind: Option<DemoKind>) -> ExitCode {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.debug.log_level);
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let kind = kind.unwrap_or(config.demo.kind);
    log::info!("Starting Skyward ({} demo)", kind);

    match run(config, kind) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Event loop error: {}", e);
            ExitCode::FAILURE
        }
    }
}
