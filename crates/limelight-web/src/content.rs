use limelight_core::types::TextAlign;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to parse content RON: {0}")]
    ParseError(String),
}

/// One headline block in the 3D scene.
#[derive(Debug, Clone, Deserialize)]
pub struct Headline {
    pub text: String,
    pub align: TextAlign,
    /// Vertical position in viewport heights; negative is further down
    /// the scroll.
    pub page_offset: f32,
}

/// A code block for the writing panel, in the markdown convention the
/// highlighter accepts.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeSample {
    pub class_name: String,
    pub source: String,
}

/// Everything the page displays that is not markup.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub title: String,
    pub headlines: Vec<Headline>,
    pub code_sample: CodeSample,
}

/// Parse a content RON string.
pub fn load_content_from_str(ron_str: &str) -> Result<SiteContent, ContentError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| ContentError::ParseError(e.to_string()))
}

/// The content baked into the binary at build time.
pub fn default_content() -> Result<SiteContent, ContentError> {
    load_content_from_str(include_str!("../../../data/content.ron"))
}
