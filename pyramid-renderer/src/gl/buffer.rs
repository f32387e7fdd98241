use crate::{
    error::Error,
    gl::{GlDevice, GL},
};

/// Creates an `ARRAY_BUFFER` and fills it once with `data`.
///
/// The buffer is left bound to `ARRAY_BUFFER`.
pub(super) fn create_static_buffer<D: GlDevice>(
    gl: &D,
    data: &[f32],
    label: &str,
) -> Result<D::Buffer, Error> {
    let buffer = gl.create_buffer().ok_or(Error::buffer_creation_failed(label))?;

    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_f32(GL::ARRAY_BUFFER, data, GL::STATIC_DRAW);

    Ok(buffer)
}

/// Points the attribute at `index` to tightly packed `f32` components in
/// `buffer`, starting at offset 0, and enables it.
pub(super) fn enable_vertex_attrib<D: GlDevice>(
    gl: &D,
    buffer: &D::Buffer,
    index: u32,
    components: i32,
) {
    // stride 0: inferred from component count and type
    const STRIDE: i32 = 0;
    const OFFSET: i32 = 0;

    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.vertex_attrib_pointer(index, components, GL::FLOAT, false, STRIDE, OFFSET);
    gl.enable_vertex_attrib_array(index);
}
