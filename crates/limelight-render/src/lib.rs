pub mod font;
pub mod lighting;
pub mod renderer;
pub mod text_mesh;

pub use lighting::{BlockUniforms, CameraUniforms, GpuPointLight};
pub use renderer::{Renderer, MAX_TEXT_BLOCKS};
pub use text_mesh::{build_text_mesh, TextMesh, TextVertex};
