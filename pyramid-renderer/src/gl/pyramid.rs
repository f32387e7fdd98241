use pyramid_data::{Mat4, Mesh, COLOR_COMPONENTS, POSITION_COMPONENTS};

use crate::{
    error::Error,
    gl::{
        buffer::{create_static_buffer, enable_vertex_attrib},
        GlDevice, ShaderProgram, GL,
    },
};

/// Camera and frame parameters used by [`PyramidRenderer::draw_scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// How far the pyramid is pushed away from the camera along -Z.
    pub camera_distance: f32,
    /// RGBA color the color buffer is cleared to.
    pub clear_color: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            field_of_view: 45.0,
            near: 0.1,
            far: 100.0,
            camera_distance: 2.0,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Linked program together with its resolved attribute and uniform locations.
#[derive(Debug)]
pub(crate) struct ProgramInfo<D: GlDevice> {
    shader: ShaderProgram<D>,
    vertex_position: u32,
    vertex_color: u32,
    projection_matrix: D::UniformLocation,
    model_view_matrix: D::UniformLocation,
}

impl<D: GlDevice> ProgramInfo<D> {
    const VERTEX_POSITION: &'static str = "aVertexPosition";
    const VERTEX_COLOR: &'static str = "aVertexColor";
    const PROJECTION_MATRIX: &'static str = "uProjectionMatrix";
    const MODEL_VIEW_MATRIX: &'static str = "uModelViewMatrix";

    /// Resolves all locations; the program is deleted if any is missing.
    fn new(gl: &D, shader: ShaderProgram<D>) -> Result<Self, Error> {
        match Self::locations(gl, &shader.program) {
            Ok((vertex_position, vertex_color, projection_matrix, model_view_matrix)) => Ok(Self {
                shader,
                vertex_position,
                vertex_color,
                projection_matrix,
                model_view_matrix,
            }),
            Err(e) => {
                shader.delete(gl);
                Err(e)
            },
        }
    }

    #[allow(clippy::type_complexity)]
    fn locations(
        gl: &D,
        program: &D::Program,
    ) -> Result<(u32, u32, D::UniformLocation, D::UniformLocation), Error> {
        let attrib = |name: &str| {
            gl.attrib_location(program, name).ok_or_else(|| Error::attrib_location_failed(name))
        };
        let uniform = |name: &str| {
            gl.uniform_location(program, name).ok_or_else(|| Error::uniform_location_failed(name))
        };

        Ok((
            attrib(Self::VERTEX_POSITION)?,
            attrib(Self::VERTEX_COLOR)?,
            uniform(Self::PROJECTION_MATRIX)?,
            uniform(Self::MODEL_VIEW_MATRIX)?,
        ))
    }

    fn delete(self, gl: &D) {
        self.shader.delete(gl);
    }
}

/// Static geometry uploaded once at construction.
#[derive(Debug)]
struct PyramidBuffers<D: GlDevice> {
    positions: D::Buffer,
    colors: D::Buffer,
    vertex_count: i32,
}

impl<D: GlDevice> PyramidBuffers<D> {
    /// Uploads both attribute streams; nothing stays allocated on failure.
    fn new(gl: &D, mesh: &Mesh) -> Result<Self, Error> {
        let positions = create_static_buffer(gl, mesh.positions(), "position")?;
        let colors = match create_static_buffer(gl, mesh.colors(), "color") {
            Ok(colors) => colors,
            Err(e) => {
                gl.delete_buffer(&positions);
                return Err(e);
            },
        };

        Ok(Self {
            positions,
            colors,
            vertex_count: mesh.vertex_count() as i32,
        })
    }
}

#[derive(Debug)]
enum RendererState<D: GlDevice> {
    Ready {
        program_info: ProgramInfo<D>,
        buffers: PyramidBuffers<D>,
    },
    /// Initialization failed; the renderer can never draw.
    Broken(Error),
}

/// Renders a single colored pyramid.
///
/// The renderer is either ready or permanently broken; which one is decided
/// by [`PyramidRenderer::new`] and never changes. Rotation angles are not
/// stored here: every [`PyramidRenderer::draw_scene`] call builds its
/// transforms from the angles it is given.
#[derive(Debug)]
pub struct PyramidRenderer<D: GlDevice> {
    gl: D,
    config: SceneConfig,
    state: RendererState<D>,
}

impl<D: GlDevice> PyramidRenderer<D> {
    pub const VERTEX_GLSL: &'static str = include_str!("../shaders/pyramid.vert");
    pub const FRAGMENT_GLSL: &'static str = include_str!("../shaders/pyramid.frag");

    /// Compiles the pyramid shaders and uploads the pyramid geometry.
    ///
    /// Never fails: if the program cannot be built the renderer is returned
    /// in a broken state, see [`PyramidRenderer::is_ready`].
    pub fn new(gl: D) -> Self {
        Self::with_config(gl, SceneConfig::default())
    }

    /// Like [`PyramidRenderer::new`], with custom camera parameters.
    pub fn with_config(gl: D, config: SceneConfig) -> Self {
        Self::with_shaders(gl, config, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)
    }

    pub(crate) fn with_shaders(
        gl: D,
        config: SceneConfig,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Self {
        let state = match Self::init(&gl, vertex_source, fragment_source) {
            Ok((program_info, buffers)) => {
                log::info!("pyramid renderer ready: {} vertices", buffers.vertex_count);
                RendererState::Ready { program_info, buffers }
            },
            Err(e) => {
                log::error!("pyramid renderer disabled: {e}");
                RendererState::Broken(e)
            },
        };

        Self { gl, config, state }
    }

    fn init(
        gl: &D,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<(ProgramInfo<D>, PyramidBuffers<D>), Error> {
        let shader = ShaderProgram::create(gl, vertex_source, fragment_source)?;
        let program_info = ProgramInfo::new(gl, shader)?;

        match PyramidBuffers::new(gl, &Mesh::PYRAMID) {
            Ok(buffers) => Ok((program_info, buffers)),
            Err(e) => {
                program_info.delete(gl);
                Err(e)
            },
        }
    }

    /// Draws one frame with the pyramid rotated by the given angles, in
    /// degrees, about the X, Y and Z axes.
    ///
    /// Angles are used as given; keeping them in range is up to the caller.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - the renderer is broken; no GL calls are made
    pub fn draw_scene(&self, angle_x: f32, angle_y: f32, angle_z: f32) -> Result<(), Error> {
        let (program_info, buffers) = match &self.state {
            RendererState::Ready { program_info, buffers } => (program_info, buffers),
            RendererState::Broken(_) => return Err(Error::NotInitialized),
        };

        let gl = &self.gl;

        let [r, g, b, a] = self.config.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear_depth(1.0);
        gl.enable(GL::DEPTH_TEST);
        gl.depth_func(GL::LEQUAL); // near things obscure far things
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let projection = self.projection();
        let model_view = self.model_view(angle_x, angle_y, angle_z);

        enable_vertex_attrib(
            gl,
            &buffers.positions,
            program_info.vertex_position,
            POSITION_COMPONENTS as i32,
        );
        enable_vertex_attrib(
            gl,
            &buffers.colors,
            program_info.vertex_color,
            COLOR_COMPONENTS as i32,
        );

        program_info.shader.use_program(gl);

        gl.uniform_matrix4fv(&program_info.projection_matrix, false, projection.as_slice());
        gl.uniform_matrix4fv(&program_info.model_view_matrix, false, model_view.as_slice());

        gl.draw_arrays(GL::TRIANGLES, 0, buffers.vertex_count);

        Ok(())
    }

    /// Perspective projection for the current canvas size.
    ///
    /// A zero canvas width or height is treated as 1 to keep the aspect
    /// ratio finite and positive.
    pub fn projection(&self) -> Mat4 {
        let (width, height) = self.gl.canvas_size();
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let SceneConfig { field_of_view, near, far, .. } = self.config;

        Mat4::perspective(field_of_view, aspect, near, far)
    }

    /// Rotates about X, then Y, then Z, then pushes the pyramid away from the
    /// camera. The push happens in the rotated frame.
    pub fn model_view(&self, angle_x: f32, angle_y: f32, angle_z: f32) -> Mat4 {
        Mat4::identity()
            .rotate(angle_x, 1.0, 0.0, 0.0)
            .rotate(angle_y, 0.0, 1.0, 0.0)
            .rotate(angle_z, 0.0, 0.0, 1.0)
            .translate(0.0, 0.0, -self.config.camera_distance)
    }

    /// Returns `true` if shaders compiled and buffers were created.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, RendererState::Ready { .. })
    }

    /// Returns why initialization failed, if it did.
    pub fn failure(&self) -> Option<&Error> {
        match &self.state {
            RendererState::Broken(e) => Some(e),
            RendererState::Ready { .. } => None,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Returns the device this renderer draws with.
    pub fn device(&self) -> &D {
        &self.gl
    }
}
