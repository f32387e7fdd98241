/// Components per vertex position (x, y, z).
pub const POSITION_COMPONENTS: usize = 3;
/// Components per vertex color (r, g, b, a).
pub const COLOR_COMPONENTS: usize = 4;

const PURPLE: [f32; 4] = [0.3, 0.0, 0.3, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Four triangular faces; the apex is shared by the three side faces.
#[rustfmt::skip]
const PYRAMID_POSITIONS: [f32; 36] = [
     0.5, -0.25,  0.25, // 1
     0.0,  0.25,  0.00, // 2 (apex)
    -0.5, -0.25,  0.25, // 3

    -0.5, -0.25,  0.25, // 3
     0.0,  0.25,  0.00, // 2
     0.0, -0.25, -0.50, // 4

     0.0, -0.25, -0.50, // 4
     0.0,  0.25,  0.00, // 2
     0.5, -0.25,  0.25, // 1

     0.0, -0.25, -0.50, // 4
     0.5, -0.25,  0.25, // 1
    -0.5, -0.25,  0.25, // 3 (base)
];

const PYRAMID_COLORS: [f32; 48] = face_colors([PURPLE, RED, GREEN, BLUE]);

/// Expands one color per face into one color per vertex.
const fn face_colors(faces: [[f32; 4]; 4]) -> [f32; 48] {
    let mut colors = [0.0; 48];
    let mut i = 0;
    while i < 48 {
        let face = i / (3 * COLOR_COMPONENTS);
        colors[i] = faces[face][i % COLOR_COMPONENTS];
        i += 1;
    }
    colors
}

/// Error returned when position and color data do not describe the same
/// set of vertices.
#[derive(Debug, PartialEq, Eq)]
pub struct MeshError {
    pub message: &'static str,
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid mesh: {}", self.message)
    }
}

impl std::error::Error for MeshError {}

/// Non-indexed triangle list with a color per vertex.
///
/// Vertex `i`'s position is `positions[i*3..i*3+3]` and its color is
/// `colors[i*4..i*4+4]`; both slices always describe the same vertex count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh<'a> {
    positions: &'a [f32],
    colors: &'a [f32],
}

impl<'a> Mesh<'a> {
    pub fn new(positions: &'a [f32], colors: &'a [f32]) -> Result<Self, MeshError> {
        if positions.len() % POSITION_COMPONENTS != 0 {
            return Err(MeshError { message: "position data is not a multiple of 3" });
        }
        if colors.len() % COLOR_COMPONENTS != 0 {
            return Err(MeshError { message: "color data is not a multiple of 4" });
        }

        let vertex_count = positions.len() / POSITION_COMPONENTS;
        if vertex_count != colors.len() / COLOR_COMPONENTS {
            return Err(MeshError { message: "vertex and color counts differ" });
        }
        if vertex_count % 3 != 0 {
            return Err(MeshError { message: "vertex count is not a whole number of triangles" });
        }

        Ok(Self { positions, colors })
    }

    pub fn positions(&self) -> &'a [f32] {
        self.positions
    }

    pub fn colors(&self) -> &'a [f32] {
        self.colors
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_COMPONENTS
    }
}

impl Mesh<'static> {
    /// The four-faced pyramid: one solid color per face (purple, red, green,
    /// blue), 12 vertices in total.
    pub const PYRAMID: Mesh<'static> = Mesh {
        positions: &PYRAMID_POSITIONS,
        colors: &PYRAMID_COLORS,
    };
}
