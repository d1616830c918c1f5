use limelight_core::math::fade_opacity;
use wasm_bindgen::JsCast;

/// HTML nodes composited above the canvas, looked up once at init.
///
/// The scroll hint fades out as the user starts scrolling; the content
/// container (about/contact sections) translates with the page. A missing
/// node disables its effect instead of failing startup.
pub struct Overlay {
    hint: Option<web_sys::HtmlElement>,
    content: Option<web_sys::HtmlElement>,
}

impl Overlay {
    pub fn new(document: &web_sys::Document) -> Self {
        let get = |id: &str| {
            let found = document
                .get_element_by_id(id)
                .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
            if found.is_none() {
                log::warn!("overlay element #{id} missing; effect disabled");
            }
            found
        };
        Self {
            hint: get("scroll-hint"),
            content: get("overlay-content"),
        }
    }

    /// Per-frame style writes, driven by the scroll signals only.
    pub fn update(&self, progress: f32, scroll_px: f32) {
        if let Some(hint) = &self.hint {
            let _ = hint
                .style()
                .set_property("opacity", &fade_opacity(progress).to_string());
        }
        if let Some(content) = &self.content {
            let _ = content
                .style()
                .set_property("transform", &format!("translateY({}px)", -scroll_px));
        }
    }
}
