//! WebGPU rendering module
//!
//! CPU-built triangle lists with flat colors. Scene composition happens
//! in world coordinates; the pipeline maps to NDC at upload.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{HudInfo, build_frame};
pub use vertex::Vertex;
