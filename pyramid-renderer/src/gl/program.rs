use std::fmt::{self, Display};

use crate::gl::{GlDevice, GL};

/// Shader compilation and linking failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The context refused to allocate a program object.
    #[error("Shader program creation failed")]
    ProgramCreation,

    /// The context refused to allocate a shader object.
    #[error("Failed to create {0} shader")]
    ShaderCreation(ShaderStage),

    /// A shader stage failed to compile; `log` is the compiler info log.
    #[error("Failed compiling {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },

    /// The compiled stages could not be linked into a program.
    #[error("Failed linking shader program: {0}")]
    Link(String),
}

/// Pipeline stage of a shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

impl From<ShaderStage> for u32 {
    fn from(stage: ShaderStage) -> u32 {
        match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}

/// A successfully linked shader program.
///
/// There is no partially-built state: [`ShaderProgram::create`] either returns
/// a program that is ready for `use_program`, or an error and no handle.
#[derive(Debug)]
pub(crate) struct ShaderProgram<D: GlDevice> {
    pub(crate) program: D::Program,
}

impl<D: GlDevice> ShaderProgram<D> {
    /// Compiles both stages and links them into a program.
    ///
    /// Every GL object created along the way is deleted again when any step
    /// fails. The intermediate shader objects are always deleted once linking
    /// has been attempted.
    pub(crate) fn create(
        gl: &D,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ShaderError> {
        let program = gl.create_program().ok_or(ShaderError::ProgramCreation)?;

        match link_program(gl, &program, vertex_source, fragment_source) {
            Ok(()) => Ok(ShaderProgram { program }),
            Err(e) => {
                gl.delete_program(&program);
                Err(e)
            },
        }
    }

    /// Use the shader program.
    pub(crate) fn use_program(&self, gl: &D) {
        gl.use_program(&self.program);
    }

    /// Releases the program object.
    pub(crate) fn delete(self, gl: &D) {
        gl.delete_program(&self.program);
    }
}

fn link_program<D: GlDevice>(
    gl: &D,
    program: &D::Program,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<(), ShaderError> {
    let vertex_shader = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
    let fragment_shader = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
        Ok(shader) => shader,
        Err(e) => {
            gl.delete_shader(&vertex_shader);
            return Err(e);
        },
    };

    gl.attach_shader(program, &vertex_shader);
    gl.attach_shader(program, &fragment_shader);
    gl.link_program(program);

    // delete shaders (no longer needed after linking)
    gl.delete_shader(&vertex_shader);
    gl.delete_shader(&fragment_shader);

    check_link_status(gl, program)
}

fn compile_shader<D: GlDevice>(
    gl: &D,
    stage: ShaderStage,
    source: &str,
) -> Result<D::Shader, ShaderError> {
    let shader = gl.create_shader(stage.into()).ok_or(ShaderError::ShaderCreation(stage))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl.shader_compile_status(&shader) {
        Ok(shader)
    } else {
        let log = gl.shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(&shader);
        Err(ShaderError::Compile { stage, log })
    }
}

fn check_link_status<D: GlDevice>(gl: &D, program: &D::Program) -> Result<(), ShaderError> {
    if gl.program_link_status(program) {
        Ok(())
    } else {
        let log = gl.program_info_log(program).unwrap_or_default();
        Err(ShaderError::Link(log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::testing::{GlCall, RecordingDevice};

    const VALID_VERT: &str = "void main() { gl_Position = vec4(0.0); }";
    const VALID_FRAG: &str = "void main() { }";
    const MALFORMED: &str = "void mian() {";

    #[test]
    fn test_create_links_program_and_deletes_shaders() {
        let gl = RecordingDevice::new(640, 480);
        let shader = ShaderProgram::create(&gl, VALID_VERT, VALID_FRAG).unwrap();

        let calls = gl.calls();
        assert_eq!(calls[0], GlCall::CreateProgram(shader.program));
        assert!(calls.contains(&GlCall::LinkProgram(shader.program)));

        let created: Vec<u32> = gl.created_shaders();
        assert_eq!(created.len(), 2);
        for id in created {
            assert!(calls.contains(&GlCall::AttachShader { program: shader.program, shader: id }));
            assert!(calls.contains(&GlCall::DeleteShader(id)));
        }
        assert!(!calls.contains(&GlCall::DeleteProgram(shader.program)));
    }

    #[test]
    fn test_vertex_compile_failure_reports_stage_and_log() {
        let gl = RecordingDevice::new(640, 480);
        let err = ShaderProgram::create(&gl, MALFORMED, VALID_FRAG).unwrap_err();

        match err {
            ShaderError::Compile { stage, log } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(log.contains("main"), "log: {log}");
            },
            e => panic!("unexpected error: {e:?}"),
        }

        // fragment stage is never attempted; program is released
        assert_eq!(gl.created_shaders().len(), 1);
        assert!(gl.calls().iter().any(|c| matches!(c, GlCall::DeleteProgram(_))));
        assert!(!gl.calls().iter().any(|c| matches!(c, GlCall::LinkProgram(_))));
    }

    #[test]
    fn test_fragment_compile_failure_releases_vertex_shader() {
        let gl = RecordingDevice::new(640, 480);
        let err = ShaderProgram::create(&gl, VALID_VERT, MALFORMED).unwrap_err();

        assert!(matches!(err, ShaderError::Compile { stage: ShaderStage::Fragment, .. }));

        let calls = gl.calls();
        for id in gl.created_shaders() {
            assert!(calls.contains(&GlCall::DeleteShader(id)), "shader {id} leaked");
        }
    }

    #[test]
    fn test_link_failure() {
        let gl = RecordingDevice::new(640, 480).failing_link();
        let err = ShaderProgram::create(&gl, VALID_VERT, VALID_FRAG).unwrap_err();

        assert_eq!(err, ShaderError::Link(RecordingDevice::LINK_ERROR_LOG.to_string()));
        assert!(gl.calls().iter().any(|c| matches!(c, GlCall::DeleteProgram(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = ShaderError::Compile { stage: ShaderStage::Fragment, log: "bad".into() };
        assert_eq!(err.to_string(), "Failed compiling fragment shader: bad");
        assert_eq!(ShaderError::Link("x".into()).to_string(), "Failed linking shader program: x");
    }
}
