pub mod camera;
pub mod lit_text;
pub mod scene;
pub mod scroll;

pub use camera::Camera;
pub use lit_text::{LightRig, LitText};
pub use scene::{DrawList, Scene, TextDraw};
pub use scroll::ScrollState;
