mod mat4;
mod mesh;

pub use mat4::Mat4;
pub use mesh::{Mesh, MeshError, COLOR_COMPONENTS, POSITION_COMPONENTS};
