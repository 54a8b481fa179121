//! Application handler: window lifecycle, message pump and frame loop

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::error::AppError;
use super::frame::{DEFAULT_CLEAR_COLOR, Frame, FrameHandler};
use super::graphics::Renderer;
use super::input::{CaptureChange, InputCollector, MessageRouter, RawInput};
use super::timer::FrameTimer;
use super::window::window_attributes_from_config;

/// Native window with input queues and a per-frame callback
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    collector: InputCollector,
    router: MessageRouter,
    pending: Vec<RawInput>,
    handler: Box<dyn FrameHandler>,
    timer: FrameTimer,
    clear_color: [f64; 3],
    captured: bool,
    error: Option<AppError>,
}

impl App {
    /// Creates an application that calls `handler` every frame
    pub fn new(config: AppConfig, handler: Box<dyn FrameHandler>) -> Self {
        info!(profile = %config.profile, handler = handler.name(), "Starting application");
        info!(window = ?config.window, input = ?config.input, "Configuration");

        // Client bounds arrive with the first Resized once the window exists
        let router = MessageRouter::from_config(&config.input, 0, 0);

        Self {
            collector: InputCollector::with_line_height(config.input.line_height_px),
            router,
            config,
            window: None,
            renderer: None,
            pending: Vec::new(),
            handler,
            timer: FrameTimer::new(),
            clear_color: DEFAULT_CLEAR_COLOR,
            captured: false,
            error: None,
        }
    }

    /// Runs the message pump until the window closes
    pub fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Input queues, for inspection outside the frame callback
    pub fn input(&self) -> &MessageRouter {
        &self.router
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: AppError) {
        error!(error = %e, "Fatal error, exiting");
        self.error = Some(e);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attributes = window_attributes_from_config(&self.config.window);
        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let size = window.inner_size();
        info!(
            window.width = size.width,
            window.height = size.height,
            "Window created successfully"
        );

        // winit's loop is synchronous; adapter and device requests are async
        let renderer = tokio::runtime::Runtime::new()?
            .block_on(Renderer::new(window.clone(), self.config.window.vsync))
            .map_err(AppError::Renderer)?;
        info!("Renderer initialized successfully");

        self.router.dispatch(RawInput::Resized {
            width: size.width,
            height: size.height,
        });
        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn apply_capture(&mut self, change: CaptureChange) {
        let captured = change == CaptureChange::Acquire;
        if captured != self.captured {
            debug!(captured, "Pointer capture changed");
            self.captured = captured;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        match renderer.render(self.clear_color) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                renderer.resize(window.inner_size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => {
                error!(error = %e, "Render error");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none()
            && let Err(e) = self.create_window(event_loop)
        {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        let delta = self.timer.mark();
        let elapsed = self.timer.elapsed().as_secs_f32();

        let mut frame = Frame::new(&mut self.router, elapsed, delta);
        frame.set_clear_color(self.clear_color);
        self.handler.frame(&mut frame);

        self.clear_color = frame.clear_color();
        if let Some(title) = frame.take_title() {
            window.set_title(&title);
        }

        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Raw input goes through the bridge first, in arrival order
        let mut pending = std::mem::take(&mut self.pending);
        self.collector.handle_window_event(&event, &mut pending);
        for raw in pending.drain(..) {
            if let Some(change) = self.router.dispatch(raw) {
                self.apply_capture(change);
            }
        }
        self.pending = pending;

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
