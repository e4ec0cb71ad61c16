//! Core application state and lifecycle.

use kurbo::Point;
use peniko::Color;
use polysketch_core::{
    Canvas, Command, DEFAULT_CURVE_STEPS, MouseButton, PointerEvent, PointerTracker,
    RawPointerEvent,
};
use polysketch_render::{RenderContext, Renderer, RendererError, VelloRenderer};
use std::sync::Arc;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use crate::ui::{UiAction, UiState, render_ui};

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] OsError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    /// Parameter steps used to sample the Bézier curve each frame.
    pub curve_steps: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PolySketch".to_string(),
            width: 1200,
            height: 1000,
            background_color: Color::from_rgba8(192, 192, 192, 255),
            curve_steps: DEFAULT_CURVE_STEPS,
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    shape_renderer: VelloRenderer,
    /// Copies the Rgba8 render target onto the surface format.
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // State
    canvas: Canvas,
    tracker: PointerTracker,
    config: AppConfig,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// Start-up failure, reported once the event loop has exited.
    failure: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            failure: None,
        }
    }

    /// Run the application until the window is closed.
    pub fn run() -> Result<(), AppError> {
        Self::new().run_with_event_loop()
    }

    fn run_with_event_loop(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        match self.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Create the window and its GPU surface.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        self.finish_init(window, surface)
    }

    /// Finish initialization after surface is created.
    fn finish_init(
        &mut self,
        window: Arc<Window>,
        surface: RenderSurface<'static>,
    ) -> Result<(), AppError> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| RendererError::InitFailed("render context missing".to_string()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;

        // Vello renders to Rgba8Unorm; the surface may be Bgra8Unorm.
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!(
            "PolySketch initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );
        log::info!("Keyboard shortcuts: {}", ShortcutRegistry::summary());

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            shape_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::new(),
            canvas: Canvas::new(),
            tracker: PointerTracker::new(),
            config: self.config.clone(),
        });

        window.request_redraw();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Window position to canvas coordinates (logical pixels).
    fn to_canvas(&self, position: PhysicalPosition<f64>) -> Point {
        let logical = position.to_logical::<f64>(self.window.scale_factor());
        Point::new(logical.x, logical.y)
    }

    /// Run a raw pointer event through the tracker into the canvas.
    fn feed(&mut self, event: RawPointerEvent) {
        let gestures = self.tracker.handle(event);
        if gestures.is_empty() {
            return;
        }
        for gesture in gestures {
            self.canvas.handle_pointer(gesture);
        }
        self.sync_ui();
        self.window.request_redraw();
    }

    fn apply(&mut self, command: Command) {
        self.canvas.apply_command(command);
        if let Command::SetMode(mode) = command {
            self.ui_state
                .mode_chosen(mode, self.canvas.selected_control_point_position());
        }
        self.sync_ui();
        self.window.request_redraw();
    }

    /// Turn a panel action into a command, reporting bad field text.
    fn dispatch(&mut self, action: UiAction) {
        match self.ui_state.command_for(&action) {
            Ok(command) => {
                self.ui_state.status = None;
                self.apply(command);
                if action == UiAction::Clear {
                    self.ui_state.report("Canvas cleared");
                }
            }
            Err(e) => {
                log::warn!("Rejected {:?}: {}", action, e);
                self.ui_state.report_error(e.to_string());
            }
        }
    }

    fn apply_shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::SetMode(mode) => self.apply(Command::SetMode(mode)),
            ShortcutAction::FinishPolygon => self.apply(Command::FinishPolygon),
            ShortcutAction::CancelDrag => {
                if self.tracker.is_pressed() {
                    let position = self.tracker.pointer_position;
                    self.tracker.cancel();
                    self.canvas.handle_pointer(PointerEvent::Release(position));
                    log::debug!("Drag cancelled");
                    self.window.request_redraw();
                }
            }
        }
    }

    /// Mirror canvas state the panel displays.
    fn sync_ui(&mut self) {
        self.ui_state.current_mode = self.canvas.mode();
        self.ui_state.has_pending_polygon = self.canvas.pending_polygon().is_some();
    }

    /// Build and present one frame: canvas scene first, egui on top.
    fn redraw(&mut self, render_cx: &vello::util::RenderContext) -> Result<(), RendererError> {
        // Run egui and get any action
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let mut ui_action = None;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            ui_action = render_ui(ctx, &mut self.ui_state);
        });
        if let Some(action) = ui_action {
            self.dispatch(action);
        }

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let ctx = RenderContext::new(&self.canvas)
            .with_scale_factor(self.window.scale_factor())
            .with_background(self.config.background_color)
            .with_curve_steps(self.config.curve_steps);
        self.shape_renderer.build_scene(&ctx);
        let base_color = self.shape_renderer.background_color(&ctx);
        let scene = self.shape_renderer.take_scene();

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a storage-bindable Rgba8Unorm target.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter.copy(
                device,
                &mut blit_encoder,
                &render_texture_view,
                &surface_view,
            );
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        // Keep the canvas underneath.
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // egui-wgpu wants a 'static pass.
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        if self.egui_ctx.has_requested_repaint() {
            self.window.request_redraw();
        }
        Ok(())
    }
}

/// Only the primary buttons reach the tracker.
fn map_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Name used by the shortcut registry for a pressed key.
fn shortcut_key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(c) => Some(c.as_str()),
        Key::Named(NamedKey::Enter) => Some("Enter"),
        Key::Named(NamedKey::Escape) => Some("Escape"),
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Start-up failed: {}", e);
            self.failure = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        // Events over the panel stay with egui.
        let egui_wants_input = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input()
            || state.egui_ctx.wants_keyboard_input();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                if let Err(e) = state.redraw(render_cx) {
                    log::warn!("Skipping frame: {}", e);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let point = state.to_canvas(position);
                // A drag that started on the canvas keeps going over the panel.
                if egui_wants_input && !state.tracker.is_pressed() {
                    state.tracker.pointer_position = point;
                    return;
                }
                state.feed(RawPointerEvent::Move { position: point });
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let Some(button) = map_button(button) else {
                    return;
                };
                let position = state.tracker.pointer_position;
                match btn_state {
                    ElementState::Pressed => {
                        if egui_wants_input {
                            return;
                        }
                        state.feed(RawPointerEvent::Down { position, button });
                    }
                    // Releases always go through so a drag cannot get stuck.
                    ElementState::Released => {
                        state.feed(RawPointerEvent::Up { position, button });
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if egui_wants_input || event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let action = shortcut_key_name(&event.logical_key).and_then(ShortcutRegistry::find);
                if let Some(action) = action {
                    state.apply_shortcut(action);
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!((config.width, config.height), (1200, 1000));
        assert_eq!(config.curve_steps, DEFAULT_CURVE_STEPS);
        let rgba = config.background_color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (192, 192, 192));
    }

    #[test]
    fn test_map_button() {
        assert_eq!(
            map_button(winit::event::MouseButton::Left),
            Some(MouseButton::Left)
        );
        assert_eq!(map_button(winit::event::MouseButton::Back), None);
    }

    #[test]
    fn test_shortcut_key_name() {
        assert_eq!(shortcut_key_name(&Key::Character("3".into())), Some("3"));
        assert_eq!(shortcut_key_name(&Key::Named(NamedKey::Enter)), Some("Enter"));
        assert_eq!(shortcut_key_name(&Key::Named(NamedKey::Tab)), None);
    }

    #[test]
    fn test_new_app_has_no_state() {
        let app = App::new();
        assert!(app.state.is_none());
        assert!(app.failure.is_none());
    }
}
