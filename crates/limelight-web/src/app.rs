use crate::content::SiteContent;
use crate::gpu::GpuContext;
use crate::input::InputState;
use crate::overlay::Overlay;
use crate::ui::code::CodePanel;
use crate::ui::debug::DebugPanel;
use crate::ui::UiState;
use limelight_core::types::{FrameContext, TextAlign, Viewport};
use limelight_highlight::Highlighter;
use limelight_render::{BlockUniforms, CameraUniforms, Renderer};
use limelight_scene::{Scene, ScrollState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Main application struct. Owns all subsystems.
pub struct Application {
    gpu: GpuContext,
    canvas: web_sys::HtmlCanvasElement,
    scene: Scene,
    renderer: Renderer,
    scroll: ScrollState,
    overlay: Overlay,
    input: Rc<RefCell<InputState>>,
    ui_state: UiState,
    debug_panel: DebugPanel,
    code_panel: CodePanel,
    show_debug: bool,
    show_code: bool,
    dpi_scale: f32,
    start_time: f64,
    last_frame_time: f64,
}

impl Application {
    pub fn new(
        gpu: GpuContext,
        canvas: web_sys::HtmlCanvasElement,
        overlay: Overlay,
        dpi_scale: f32,
        input: Rc<RefCell<InputState>>,
        site: SiteContent,
    ) -> Self {
        let scene = Scene::new(
            site.headlines
                .iter()
                .map(|h| (h.text.clone(), h.align, h.page_offset)),
        );

        let blocks: Vec<(&str, TextAlign)> = site
            .headlines
            .iter()
            .map(|h| (h.text.as_str(), h.align))
            .collect();
        let renderer = Renderer::new(&gpu.device, gpu.surface_format, &blocks);

        let code_panel = CodePanel::new(
            Highlighter::new()
                .highlight_class(&site.code_sample.class_name, &site.code_sample.source),
        );

        let viewport_height = input.borrow().viewport_height;
        let scroll = ScrollState::new(viewport_height);
        let ui_state = UiState::new(&gpu.device, gpu.surface_format, dpi_scale);
        let debug_panel = DebugPanel::new(gpu.adapter_name.clone(), gpu.backend.clone());

        Self {
            gpu,
            canvas,
            scene,
            renderer,
            scroll,
            overlay,
            input,
            ui_state,
            debug_panel,
            code_panel,
            show_debug: false,
            show_code: false,
            dpi_scale,
            start_time: 0.0,
            last_frame_time: 0.0,
        }
    }

    /// Start the requestAnimationFrame loop.
    /// Creates the rAF closure ONCE (no closure leak per frame).
    pub fn start_loop(app: Rc<RefCell<Self>>) {
        let closure: RafClosure = Rc::new(RefCell::new(None));
        let closure_clone = closure.clone();

        let window = web_sys::window().expect("no global window");

        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let mut app_ref = app.borrow_mut();

            if app_ref.start_time == 0.0 {
                app_ref.start_time = timestamp;
            }
            let delta = timestamp - app_ref.last_frame_time;

            // Skip frame if tab was backgrounded (>100ms gap)
            if app_ref.last_frame_time > 0.0 && delta > 100.0 {
                app_ref.last_frame_time = timestamp;
                // Re-schedule without rendering
                let window = web_sys::window().expect("no global window");
                window
                    .request_animation_frame(
                        closure_clone
                            .borrow()
                            .as_ref()
                            .expect("rAF closure missing")
                            .as_ref()
                            .unchecked_ref(),
                    )
                    .expect("rAF registration failed");
                return;
            }

            app_ref.last_frame_time = timestamp;
            app_ref.debug_panel.update(delta);

            let elapsed = ((timestamp - app_ref.start_time) / 1000.0) as f32;
            app_ref.render_frame(elapsed);

            // Schedule next frame
            let window = web_sys::window().expect("no global window");
            window
                .request_animation_frame(
                    closure_clone
                        .borrow()
                        .as_ref()
                        .expect("rAF closure missing")
                        .as_ref()
                        .unchecked_ref(),
                )
                .expect("rAF registration failed");
        }) as Box<dyn FnMut(f64)>));

        // Kick off first frame
        window
            .request_animation_frame(
                closure
                    .borrow()
                    .as_ref()
                    .expect("rAF closure missing")
                    .as_ref()
                    .unchecked_ref(),
            )
            .expect("rAF registration failed");
    }

    /// Render a single frame.
    fn render_frame(&mut self, elapsed: f32) {
        // Destructure self for disjoint field borrows — avoids borrow
        // checker conflicts when the egui closure needs the panels while
        // ui_state is borrowed.
        let Application {
            gpu,
            canvas,
            scene,
            renderer,
            scroll,
            overlay,
            input,
            ui_state,
            debug_panel,
            code_panel,
            show_debug,
            show_code,
            dpi_scale,
            ..
        } = self;

        // Consume accumulated input
        let viewport = {
            let mut input = input.borrow_mut();
            if input.resized {
                let physical_w = (input.viewport_width * *dpi_scale) as u32;
                let physical_h = (input.viewport_height * *dpi_scale) as u32;
                canvas.set_width(physical_w);
                canvas.set_height(physical_h);
                gpu.resize(physical_w, physical_h);
                scroll.set_viewport_height(input.viewport_height);
            }
            if input.scroll_delta != 0.0 {
                scroll.scroll_by(input.scroll_delta);
            }
            if input.debug_toggled {
                *show_debug = !*show_debug;
            }
            if input.code_toggled {
                *show_code = !*show_code;
            }
            let viewport = Viewport::new(input.viewport_width, input.viewport_height);
            input.clear_deltas();
            viewport
        };

        // Advance the scene and DOM overlay from the shared frame context
        let progress = scroll.progress();
        let ctx = FrameContext {
            elapsed,
            scroll_progress: progress,
            viewport,
        };
        scene.update(&ctx);
        overlay.update(progress, scroll.offset_px());
        debug_panel.set_frame_info(progress, elapsed);

        // Upload this frame's uniforms
        let camera = CameraUniforms::new(
            scene.camera.view_proj(viewport.width, viewport.height),
            scene.camera.position,
        );
        let draws = scene.draw_list();
        let blocks: Vec<BlockUniforms> = draws
            .texts
            .iter()
            .map(|t| BlockUniforms::new(t.position, t.lights))
            .collect();
        renderer.prepare(&gpu.queue, camera, &blocks);

        // Get surface texture, handle Lost by reconfiguring
        let output = match gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                gpu.surface.configure(&gpu.device, &gpu.surface_config);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                return;
            }
            Err(e) => {
                log::error!("Surface error: {e:?}");
                return;
            }
        };

        let view = output.texture.create_view(&Default::default());

        // Run egui frame first (no encoder needed)
        let screen =
            ui_state.screen_descriptor(gpu.surface_config.width, gpu.surface_config.height);

        let raw_input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(
                    screen.size_in_pixels[0] as f32 / screen.pixels_per_point,
                    screen.size_in_pixels[1] as f32 / screen.pixels_per_point,
                ),
            )),
            ..Default::default()
        };

        let full_output = ui_state.ctx.run(raw_input, |ctx| {
            if *show_debug {
                debug_panel.show(ctx);
            }
            if *show_code {
                code_panel.show(ctx);
            }
        });

        let clipped_primitives = ui_state
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        // GPU work
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        // 1. Scene pass: clear to black, draw text fill then outline
        renderer.render(&mut encoder, &view);

        // 2. Upload egui textures and update buffers
        for (id, delta) in &full_output.textures_delta.set {
            ui_state
                .renderer
                .update_texture(&gpu.device, &gpu.queue, *id, delta);
        }

        ui_state.renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &clipped_primitives,
            &screen,
        );

        // 3. egui render pass with LoadOp::Load after the scene pass.
        //    forget_lifetime() shifts the encoder guard from compile-time
        //    to run-time, avoiding borrow checker conflicts between
        //    encoder and renderer lifetimes.
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui-pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            ui_state
                .renderer
                .render(&mut pass, &clipped_primitives, &screen);
        }

        // 4. Free textures after rendering
        for id in &full_output.textures_delta.free {
            ui_state.renderer.free_texture(id);
        }

        // 5. Submit and present
        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
