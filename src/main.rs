//! Raging Sea - an animated procedural water surface
//!
//! A large swell of crossed sine waves, roughened by octaves of noise chop,
//! shaded from a depth color to a surface color. Every wave and color
//! parameter can be tuned live from the keyboard.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use ragingsea::camera::OrbitCamera;
use ragingsea::cli::Args;
use ragingsea::clock::FrameClock;
use ragingsea::controls::{ControlCommand, ControlPanel};
use ragingsea::noise::NoiseGenerator;
use ragingsea::params::{preset, RenderConfig, WaveParameters};
use ragingsea::rendering::{RenderSystem, Uniforms};
use ragingsea::snapshot;
use ragingsea::water::{WaterSystem, WaveField};

/// Pixels of wheel travel treated as one scroll line
const PIXELS_PER_LINE: f32 = 50.0;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    water: WaterSystem,
    camera: OrbitCamera,
    panel: ControlPanel,

    // Configuration
    render_config: RenderConfig,
    wireframe: bool,

    // Input state
    shift_held: bool,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,

    // Time tracking
    clock: FrameClock,

    /// Set when GPU setup fails inside the event loop
    init_error: Option<anyhow::Error>,
}

impl App {
    fn new(render_config: RenderConfig, params: WaveParameters, noise_seed: u32) -> Self {
        let water = WaterSystem::new(&render_config, params, noise_seed);
        let camera = OrbitCamera::from_config(&render_config);

        Self {
            window: None,
            render_system: None,
            water,
            camera,
            panel: ControlPanel::new(),
            wireframe: render_config.wireframe,
            render_config,
            shift_held: false,
            dragging: false,
            last_cursor: None,
            clock: FrameClock::new(),
            init_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Raging Sea")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        self.render_config.window_width = size.width;
        self.render_config.window_height = size.height;

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.water.grid,
            self.render_config.background,
        ))
        .context("failed to initialise GPU")?;

        if self.wireframe && !render_system.supports_wireframe() {
            self.wireframe = false;
        }

        log::info!("{}", self.panel.describe(&self.water.controls));

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        let steps = if self.shift_held { 10 } else { 1 };
        let command = match key {
            KeyCode::Escape => {
                event_loop.exit();
                return;
            }
            KeyCode::ArrowUp => ControlCommand::SelectPrevious,
            KeyCode::ArrowDown => ControlCommand::SelectNext,
            KeyCode::ArrowLeft => ControlCommand::Nudge(-steps),
            KeyCode::ArrowRight => ControlCommand::Nudge(steps),
            KeyCode::KeyR => ControlCommand::Reset,
            KeyCode::KeyW => {
                self.toggle_wireframe();
                return;
            }
            KeyCode::KeyP => {
                match preset::to_json(self.water.controls.live()) {
                    Ok(json) => log::info!("current parameters:\n{}", json),
                    Err(e) => log::error!("failed to serialize parameters: {}", e),
                }
                return;
            }
            _ => return,
        };

        let message = self.panel.apply(command, &mut self.water.controls);
        log::info!("{}", message);
    }

    fn toggle_wireframe(&mut self) {
        let supported = self
            .render_system
            .as_ref()
            .is_some_and(RenderSystem::supports_wireframe);
        if !supported {
            log::warn!("wireframe is not supported on this adapter");
            return;
        }
        self.wireframe = !self.wireframe;
        log::info!("wireframe {}", if self.wireframe { "on" } else { "off" });
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.render_config.window_width = width;
        self.render_config.window_height = height;
        if let Some(render_system) = self.render_system.as_mut() {
            render_system.resize(width, height);
        }
    }

    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_ref() else {
            return;
        };

        let time_s = self.clock.elapsed_s();
        if let (_, Some(fps)) = self.clock.tick() {
            log::debug!("{:.1} fps", fps);
        }

        self.camera.update();
        self.water.update(time_s);

        render_system.update_vertices(&self.water.grid.vertices);
        render_system.update_uniforms(&Uniforms::new(
            self.camera.view_proj(&self.render_config),
            self.water.controls.live(),
        ));

        match render_system.render(self.wireframe) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                let (width, height) = (
                    self.render_config.window_width,
                    self.render_config.window_height,
                );
                self.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("skipped frame: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("{:#}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_held = modifiers.state().shift_key();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => self.handle_key(key, event_loop),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = state == ElementState::Pressed;
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let (true, Some((x, y))) = (self.dragging, self.last_cursor) {
                    self.camera
                        .rotate((position.x - x) as f32, (position.y - y) as f32);
                }
                self.last_cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                self.camera.zoom(lines);
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let render_config = args.render_config();
    let params = args
        .wave_parameters()
        .context("failed to load wave preset")?;

    if args.print_defaults {
        println!("{}", preset::to_json(&params)?);
        return Ok(());
    }

    if let Some(path) = &args.snapshot {
        let field = WaveField::new(NoiseGenerator::new(args.seed));
        snapshot::save_png(
            path,
            &field,
            &params,
            &render_config,
            args.snapshot_time,
            args.snapshot_size,
        )
        .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        return Ok(());
    }

    log::info!(
        "Raging Sea: {}x{} grid, noise seed {}",
        render_config.grid_segments,
        render_config.grid_segments,
        args.seed
    );
    log::info!("Controls:");
    log::info!("  Up/Down      - select parameter");
    log::info!("  Left/Right   - adjust (hold Shift for x10)");
    log::info!("  R            - reset parameters");
    log::info!("  W            - toggle wireframe");
    log::info!("  P            - print parameters as JSON");
    log::info!("  Mouse drag   - orbit, wheel - zoom");
    log::info!("  Esc          - quit");

    let mut app = App::new(render_config, params, args.seed);
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    match app.init_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
