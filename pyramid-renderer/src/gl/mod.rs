mod buffer;
mod context;
mod device;
mod program;
mod pyramid;
#[cfg(test)]
pub(crate) mod testing;

pub use context::RenderContext;
pub use device::GlDevice;
pub(crate) use program::ShaderProgram;
pub use program::{ShaderError, ShaderStage};
pub use pyramid::{PyramidRenderer, SceneConfig};

pub(crate) type GL = web_sys::WebGl2RenderingContext;
