//! A [`GlDevice`] that records calls instead of talking to a GPU.

use std::cell::{Cell, RefCell};

use pyramid_data::Mat4;

use crate::gl::GlDevice;

/// A recorded, state-changing GL call. Handles are plain integer ids.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    CreateShader { shader: u32, shader_type: u32 },
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(u32),
    CreateBuffer(u32),
    DeleteBuffer(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, data: Vec<f32>, usage: u32 },
    VertexAttribPointer {
        index: u32,
        size: i32,
        type_: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    UniformMatrix4fv { location: String, transpose: bool, data: Vec<f32> },
    ClearColor([f32; 4]),
    ClearDepth(f32),
    Enable(u32),
    DepthFunc(u32),
    Clear(u32),
    DrawArrays { mode: u32, first: i32, count: i32 },
}

/// Recording device.
///
/// A shader compiles when its source contains `void main`; attributes and
/// uniforms exist when their name appears in any shader source.
#[derive(Debug)]
pub(crate) struct RecordingDevice {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    sources: RefCell<Vec<(u32, String)>>,
    attributes: RefCell<Vec<String>>,
    canvas_size: (i32, i32),
    fail_link: bool,
    fail_buffers: bool,
    buffer_budget: Option<usize>,
    missing_uniform: Option<&'static str>,
}

impl RecordingDevice {
    pub(crate) const LINK_ERROR_LOG: &'static str = "error: varying vColor not written";

    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            sources: RefCell::new(Vec::new()),
            attributes: RefCell::new(Vec::new()),
            canvas_size: (width, height),
            fail_link: false,
            fail_buffers: false,
            buffer_budget: None,
            missing_uniform: None,
        }
    }

    pub(crate) fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub(crate) fn failing_buffers(mut self) -> Self {
        self.fail_buffers = true;
        self
    }

    /// Lets the first `count` buffer allocations succeed; later ones fail.
    pub(crate) fn with_buffer_budget(mut self, count: usize) -> Self {
        self.buffer_budget = Some(count);
        self
    }

    pub(crate) fn without_uniform(mut self, name: &'static str) -> Self {
        self.missing_uniform = Some(name);
        self
    }

    pub(crate) fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn created_shaders(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                GlCall::CreateShader { shader, .. } => Some(*shader),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn draw_calls(&self) -> Vec<GlCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, GlCall::DrawArrays { .. }))
            .cloned()
            .collect()
    }

    /// The most recent matrix uploaded to the uniform named `name`.
    pub(crate) fn uniform_matrix(&self, name: &str) -> Option<Mat4> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            GlCall::UniformMatrix4fv { location, data, .. } if location == name => {
                let mut m = [0.0; 16];
                m.copy_from_slice(data);
                Some(Mat4::from_cols_array(m))
            },
            _ => None,
        })
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn source(&self, shader: u32) -> Option<String> {
        self.sources
            .borrow()
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, source)| source.clone())
    }

    fn declared(&self, name: &str) -> bool {
        self.sources.borrow().iter().any(|(_, source)| source.contains(name))
    }
}

impl GlDevice for RecordingDevice {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn create_shader(&self, shader_type: u32) -> Option<u32> {
        let shader = self.next_id();
        self.record(GlCall::CreateShader { shader, shader_type });
        Some(shader)
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.sources.borrow_mut().push((*shader, source.to_string()));
        self.record(GlCall::ShaderSource(*shader));
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(GlCall::CompileShader(*shader));
    }

    fn shader_compile_status(&self, shader: &u32) -> bool {
        self.source(*shader).is_some_and(|s| s.contains("void main"))
    }

    fn shader_info_log(&self, shader: &u32) -> Option<String> {
        if self.shader_compile_status(shader) {
            Some(String::new())
        } else {
            Some("ERROR: 0:1: 'main' : function not defined".to_string())
        }
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(GlCall::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let program = self.next_id();
        self.record(GlCall::CreateProgram(program));
        Some(program)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.record(GlCall::AttachShader { program: *program, shader: *shader });
    }

    fn link_program(&self, program: &u32) {
        self.record(GlCall::LinkProgram(*program));
    }

    fn program_link_status(&self, _program: &u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        Some(if self.fail_link { Self::LINK_ERROR_LOG.to_string() } else { String::new() })
    }

    fn delete_program(&self, program: &u32) {
        self.record(GlCall::DeleteProgram(*program));
    }

    fn use_program(&self, program: &u32) {
        self.record(GlCall::UseProgram(*program));
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> Option<u32> {
        if !self.declared(name) {
            return None;
        }

        let mut attributes = self.attributes.borrow_mut();
        let index = match attributes.iter().position(|a| a == name) {
            Some(index) => index,
            None => {
                attributes.push(name.to_string());
                attributes.len() - 1
            },
        };
        Some(index as u32)
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<String> {
        let missing = self.missing_uniform == Some(name);
        (self.declared(name) && !missing).then(|| name.to_string())
    }

    fn create_buffer(&self) -> Option<u32> {
        let created = self
            .calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, GlCall::CreateBuffer(_)))
            .count();
        if self.fail_buffers || self.buffer_budget.is_some_and(|budget| created >= budget) {
            return None;
        }

        let buffer = self.next_id();
        self.record(GlCall::CreateBuffer(buffer));
        Some(buffer)
    }

    fn delete_buffer(&self, buffer: &u32) {
        self.record(GlCall::DeleteBuffer(*buffer));
    }

    fn bind_buffer(&self, target: u32, buffer: Option<&u32>) {
        self.record(GlCall::BindBuffer { target, buffer: buffer.copied() });
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        self.record(GlCall::BufferData { target, data: data.to_vec(), usage });
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
        self.record(GlCall::VertexAttribPointer { index, size, type_, normalized, stride, offset });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn uniform_matrix4fv(&self, location: &String, transpose: bool, data: &[f32]) {
        self.record(GlCall::UniformMatrix4fv {
            location: location.clone(),
            transpose,
            data: data.to_vec(),
        });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor([r, g, b, a]));
    }

    fn clear_depth(&self, depth: f32) {
        self.record(GlCall::ClearDepth(depth));
    }

    fn enable(&self, capability: u32) {
        self.record(GlCall::Enable(capability));
    }

    fn depth_func(&self, func: u32) {
        self.record(GlCall::DepthFunc(func));
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn canvas_size(&self) -> (i32, i32) {
        self.canvas_size
    }
}
