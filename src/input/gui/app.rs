//! Main GUI application loop.

use egui::Context;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::depth_control::DepthControl;
use crate::core::actions::rasterize::fill_outline::fill_outline;
use crate::core::actions::rasterize::stroke_outline::stroke_outline;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_coord::PixelCoord;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::koch::algorithm::generate_snowflake;
use crate::input::gui::depth_input::DepthInputState;
use crate::input::gui::frame_surface::FrameSurface;

/// Inset between the window edge and the snowflake's circumscribed circle.
const CANVAS_MARGIN: f64 = 32.0;

/// Application state holding the pixels framebuffer and egui context.
struct App {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    scale_factor: f64,
    /// Whether the window is focused. Can be used to reduce render rate when unfocused.
    #[allow(dead_code)]
    focused: bool,
    /// egui context for immediate mode UI.
    egui_ctx: Context,
    /// egui-winit state for input handling.
    egui_state: EguiWinitState,
    /// wgpu-backed renderer painting the egui controls over the framebuffer.
    egui_renderer: EguiRenderer,
    depth: DepthControl,
    depth_input: DepthInputState,
}

impl App {
    /// Creates a new App with a pixels surface tied to the window.
    fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        // Initialize egui
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            width: size.width,
            height: size.height,
            scale_factor,
            focused: true,
            egui_ctx,
            egui_state,
            egui_renderer,
            depth: DepthControl::new(),
            depth_input: DepthInputState::default(),
        }
    }

    /// Draws the snowflake at the current depth into the RGBA frame:
    /// surface colour, white interior, dark stroke.
    fn draw_snowflake(&mut self) {
        let pixel_rect = match PixelRect::new(
            PixelCoord { x: 0, y: 0 },
            PixelCoord {
                x: (self.width as i32) - 1,
                y: (self.height as i32) - 1,
            },
        ) {
            Ok(rect) => rect,
            Err(_) => return,
        };

        let mut surface = match FrameSurface::new(self.pixels.frame_mut(), pixel_rect) {
            Ok(surface) => surface,
            Err(e) => {
                eprintln!("Frame surface error: {e}");
                return;
            }
        };
        surface.clear(Colour::SURFACE);

        let center = Point {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.height) / 2.0,
        };
        let radius = f64::from(self.width.min(self.height)) / 2.0 - CANVAS_MARGIN;
        if radius <= 0.0 {
            // window too small for the margin, leave the cleared surface
            return;
        }

        let outline = match generate_snowflake(center, radius, self.depth.depth()) {
            Ok(outline) => outline,
            Err(e) => {
                eprintln!("Generate error: {e}");
                return;
            }
        };

        if let Err(e) = fill_outline(&outline, Colour::SNOW, &mut surface) {
            eprintln!("Fill error: {e}");
        }
        if let Err(e) = stroke_outline(&outline, Colour::STROKE, &mut surface) {
            eprintln!("Stroke error: {e}");
        }
    }

    /// Renders the snowflake frame with the egui controls layered on top.
    fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        // Skip rendering for invalid size (e.g., minimized window)
        if self.width < 2 || self.height < 2 {
            return Ok(());
        }
        self.draw_snowflake();

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives = self
                .egui_ctx
                .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: self.egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            // Upload new/changed egui textures
            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            // Update egui buffers (vertices, indices)
            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of the pixels framebuffer
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep pixels content
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            // Free textures no longer needed
            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    /// Handles window resize by recreating the pixels surface.
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
            self.pixels
                .resize_surface(width, height)
                .expect("Failed to resize surface");
            self.pixels
                .resize_buffer(width, height)
                .expect("Failed to resize buffer");
        }
    }

    /// Drains pending depth key edges into the depth control.
    ///
    /// Returns true if the depth changed and the canvas needs a redraw.
    fn apply_depth_commands(&mut self, window: &Window) -> bool {
        let commands = self.depth_input.take();
        if commands.is_empty() {
            return false;
        }

        let before = self.depth.depth();
        if commands.backward {
            self.depth.step_backward();
        }
        if commands.forward {
            self.depth.step_forward();
        }
        if commands.reset {
            self.depth.reset();
        }

        let changed = self.depth.depth() != before;
        if changed {
            window.set_title(&format!("FractalFlow: N = {}", self.depth.depth()));
        }
        changed
    }

    /// Runs the egui frame and returns the output.
    ///
    /// This gathers input from egui-winit, runs the UI logic, and returns
    /// the output which contains paint commands and platform output.
    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        run_controls_frame(&self.egui_ctx, raw_input, &mut self.depth)
    }

    /// Handles a window event, forwarding it to egui first.
    ///
    /// Returns true if egui consumed the event (e.g., click on UI element).
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }
}

/// Runs a single egui frame with the depth controls window.
///
/// Shows the "N = depth" label and the Back/Forward/Reset buttons, each
/// disabled at the matching bound. The returned output carries the paint
/// shapes for the frame; they go to the renderer in [`App::render`].
fn run_controls_frame(
    egui_ctx: &Context,
    raw_input: egui::RawInput,
    depth: &mut DepthControl,
) -> egui::FullOutput {
    egui_ctx.run(raw_input, |ctx| {
        egui::Window::new("Controls").show(ctx, |ui| {
            ui.label(format!("N = {}", depth.depth()));
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!depth.at_min(), egui::Button::new("Back"))
                    .clicked()
                {
                    depth.step_backward();
                }
                if ui
                    .add_enabled(!depth.at_max(), egui::Button::new("Forward"))
                    .clicked()
                {
                    depth.step_forward();
                }
            });
            if ui
                .add_enabled(!depth.is_initial(), egui::Button::new("Reset"))
                .clicked()
            {
                depth.reset();
            }
        });
    })
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("FractalFlow: N = 0")
            .with_inner_size(LogicalSize::new(420.0, 420.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = App::new(window, &event_loop);

    // Track whether we need to redraw
    let mut redraw_pending = true;

    event_loop
        .run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // Forward event to egui first
                    let egui_consumed = app.handle_window_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput {
                            event: key_event, ..
                        } => {
                            if !egui_consumed {
                                if let PhysicalKey::Code(key_code) = key_event.physical_key {
                                    app.depth_input.handle_key_event(key_code, key_event.state);
                                }
                                if app.apply_depth_commands(window) {
                                    redraw_pending = true;
                                }
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            // Run egui frame
                            let depth_before = app.depth.depth();
                            let egui_output = app.update_ui(window);
                            if app.depth.depth() != depth_before {
                                window
                                    .set_title(&format!("FractalFlow: N = {}", app.depth.depth()));
                                redraw_pending = true;
                            }

                            // Handle egui platform output (e.g., clipboard, cursor changes)
                            app.egui_state.handle_platform_output(
                                window,
                                egui_output.platform_output.clone(),
                            );

                            // Check if egui wants a repaint
                            if egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero())
                            {
                                redraw_pending = true;
                            }

                            // Render the frame with egui overlay
                            if let Err(e) = app.render(egui_output) {
                                eprintln!("Render error: {e}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            // Get the new physical size after scale factor change
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::Focused(focused) => {
                            app.focused = *focused;
                        }
                        _ => {
                            // For other events, request redraw if egui consumed them
                            // (indicates UI state changed)
                            if egui_consumed {
                                redraw_pending = true;
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    // Only request redraw if state changed
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}

#[cfg(test)]
mod tests {
    use super::*;

    // Areas are sized on their first frame, so run two frames and inspect
    // the second to see the settled window.
    fn settled_controls_output(depth: &mut DepthControl) -> (Context, egui::FullOutput) {
        let egui_ctx = Context::default();

        let _ = run_controls_frame(&egui_ctx, egui::RawInput::default(), depth);
        let output = run_controls_frame(&egui_ctx, egui::RawInput::default(), depth);

        (egui_ctx, output)
    }

    #[test]
    fn test_controls_frame_emits_paint_shapes() {
        let mut depth = DepthControl::new();

        let (_, output) = settled_controls_output(&mut depth);

        assert!(!output.shapes.is_empty());
    }

    #[test]
    fn test_controls_frame_shapes_tessellate_to_primitives() {
        let mut depth = DepthControl::new();

        let (egui_ctx, output) = settled_controls_output(&mut depth);
        let primitives = egui_ctx.tessellate(output.shapes, egui_ctx.pixels_per_point());

        assert!(!primitives.is_empty());
    }

    #[test]
    fn test_controls_frame_leaves_depth_unchanged_without_input() {
        let mut depth = DepthControl::new();
        depth.step_forward();

        let _ = settled_controls_output(&mut depth);

        assert_eq!(depth.depth(), 1);
    }
}
