mod app;
mod controls;
mod error;
mod gl;
mod scene;

pub(crate) mod js;

#[cfg(feature = "js-api")]
pub mod wasm;

pub use pyramid_data::{Mat4, Mesh};

pub use crate::{
    app::PyramidApp,
    controls::{Axis, RotationControls},
    error::Error,
    gl::{GlDevice, PyramidRenderer, RenderContext, SceneConfig, ShaderError, ShaderStage},
    scene::{Scene, SceneBuilder},
};
