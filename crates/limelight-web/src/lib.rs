mod app;
mod content;
mod gpu;
mod input;
mod overlay;
pub mod ui;

use limelight_core::error::LimelightError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// WASM entry point. Sets the panic hook and initializes logging before
/// anything can fail.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger init failed");
    log::info!("limelight starting...");

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            show_error_to_user(&format!("{e}"));
        }
    });
}

/// Async initialization: load content, size the canvas, create the
/// Application, start the frame loop.
async fn run() -> Result<(), LimelightError> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    let site = content::default_content()
        .map_err(|e| LimelightError::ContentParseFailed(e.to_string()))?;
    document.set_title(&site.title);

    let canvas = document
        .get_element_by_id("limelight-canvas")
        .ok_or_else(|| LimelightError::CanvasNotFound("#limelight-canvas".into()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| LimelightError::CanvasNotFound("#limelight-canvas is not a canvas".into()))?;

    // Compute physical pixel size from DPI
    let dpi_scale = window.device_pixel_ratio() as f32;
    let css_width = canvas.client_width() as f32;
    let css_height = canvas.client_height() as f32;
    let physical_width = (css_width * dpi_scale) as u32;
    let physical_height = (css_height * dpi_scale) as u32;

    // Set canvas backing store to physical pixels
    canvas.set_width(physical_width);
    canvas.set_height(physical_height);

    log::info!(
        "Canvas: {}x{} CSS, {}x{} physical (DPI: {:.2})",
        css_width,
        css_height,
        physical_width,
        physical_height,
        dpi_scale
    );

    // Register window listeners ONCE; their closures live for the page
    let input_state = Rc::new(RefCell::new(input::InputState::new(css_width, css_height)));
    input::register_input_listeners(&window, input_state.clone());

    let gpu_ctx = gpu::init_gpu(canvas.clone(), physical_width, physical_height).await?;
    let overlay = overlay::Overlay::new(&document);
    let application =
        app::Application::new(gpu_ctx, canvas, overlay, dpi_scale, input_state, site);
    app::Application::start_loop(Rc::new(RefCell::new(application)));

    Ok(())
}

/// Show a user-visible error, not just a console line.
fn show_error_to_user(msg: &str) {
    log::error!("{msg}");
    let window = web_sys::window().expect("no global window");
    let _ = window.alert_with_message(&format!("limelight error: {msg}"));
}
