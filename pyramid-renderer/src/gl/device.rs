use std::fmt::Debug;

/// The subset of the WebGL2 API used to compile shaders, upload geometry and
/// draw a frame.
///
/// Methods mirror their `WebGl2RenderingContext` counterparts and take GL enum
/// values (`GL::ARRAY_BUFFER`, `GL::TRIANGLES`, ...) unchanged. Object handles
/// are associated types so that the renderer can be driven by something other
/// than a browser context.
pub trait GlDevice {
    type Shader: Debug;
    type Program: Debug;
    type Buffer: Debug;
    type UniformLocation: Debug;

    // shaders
    fn create_shader(&self, shader_type: u32) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    // programs
    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: &Self::Program);

    /// Returns `None` when the program has no active attribute named `name`.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;

    // buffers and vertex attributes
    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn delete_buffer(&self, buffer: &Self::Buffer);
    fn bind_buffer(&self, target: u32, buffer: Option<&Self::Buffer>);
    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32);
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        type_: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);

    fn uniform_matrix4fv(&self, location: &Self::UniformLocation, transpose: bool, data: &[f32]);

    // frame state
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear_depth(&self, depth: f32);
    fn enable(&self, capability: u32);
    fn depth_func(&self, func: u32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);

    /// Size of the drawing surface in pixels, as `(width, height)`.
    fn canvas_size(&self) -> (i32, i32);
}
