use web_sys::{HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::{
    error::Error,
    gl::{GlDevice, GL},
    js,
};

/// Owns a canvas and the WebGL2 context acquired from it.
///
/// This is the [`GlDevice`] used in the browser; every method forwards to the
/// corresponding `WebGl2RenderingContext` call.
#[derive(Debug)]
pub struct RenderContext {
    gl: web_sys::WebGl2RenderingContext,
    canvas: HtmlCanvasElement,
}

impl RenderContext {
    /// Creates a context by querying for a canvas element.
    ///
    /// # Parameters
    /// * `canvas_id` - CSS selector for the canvas element (e.g., "canvas" or "#my-canvas")
    ///
    /// # Errors
    /// * `Error::Initialization` - canvas element not found
    /// * `Error::ContextUnavailable` - WebGL2 not supported by the canvas
    pub fn create(canvas_id: &str) -> Result<Self, Error> {
        let canvas = js::get_canvas_by_id(canvas_id)?;
        Self::create_with_canvas(canvas)
    }

    /// Creates a context from an existing canvas element.
    pub fn create_with_canvas(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let (width, height) = (canvas.width(), canvas.height());
        let gl = js::get_webgl2_context(&canvas)?;
        log::info!("acquired WebGL2 context for {width}x{height} canvas");

        let context = Self { gl, canvas };
        context.gl.viewport(0, 0, width as i32, height as i32);
        Ok(context)
    }

    /// Resizes the canvas and updates the viewport to match.
    pub fn resize(&self, width: i32, height: i32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.gl.viewport(0, 0, width, height);
    }

    /// Returns a reference to the WebGL2 rendering context.
    pub fn gl(&self) -> &GL {
        &self.gl
    }

    /// Returns a reference to the canvas.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl GlDevice for RenderContext {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, shader_type: u32) -> Option<WebGlShader> {
        self.gl.create_shader(shader_type)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.gl.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.gl.delete_shader(Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.gl
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.gl.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.gl.delete_program(Some(program));
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        // -1 when the attribute is not active
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        self.gl.create_buffer()
    }

    fn delete_buffer(&self, buffer: &WebGlBuffer) {
        self.gl.delete_buffer(Some(buffer));
    }

    fn bind_buffer(&self, target: u32, buffer: Option<&WebGlBuffer>) {
        self.gl.bind_buffer(target, buffer);
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        // the view must not outlive `data`, and nothing may allocate on the
        // wasm heap while it is alive
        unsafe {
            let view = js_sys::Float32Array::view(data);
            self.gl.buffer_data_with_array_buffer_view(target, &view, usage);
        }
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        type_: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.gl.vertex_attrib_pointer_with_i32(index, size, type_, normalized, stride, offset);
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.gl.enable_vertex_attrib_array(index);
    }

    fn uniform_matrix4fv(&self, location: &WebGlUniformLocation, transpose: bool, data: &[f32]) {
        self.gl.uniform_matrix4fv_with_f32_array(Some(location), transpose, data);
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
    }

    fn clear_depth(&self, depth: f32) {
        self.gl.clear_depth(depth);
    }

    fn enable(&self, capability: u32) {
        self.gl.enable(capability);
    }

    fn depth_func(&self, func: u32) {
        self.gl.depth_func(func);
    }

    fn clear(&self, mask: u32) {
        self.gl.clear(mask);
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.gl.draw_arrays(mode, first, count);
    }

    fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }
}
