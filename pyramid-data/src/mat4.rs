use std::ops::Mul;

/// A 4x4 transformation matrix stored in column-major order.
///
/// Element `(row, col)` lives at `data[col * 4 + row]`, which is the layout
/// expected by `uniformMatrix4fv` with `transpose = false`.
///
/// `Mat4` is a value type: composing operations consume the matrix and return
/// the composed result, so transforms are built by chaining:
///
/// ```rust
/// use pyramid_data::Mat4;
///
/// let model_view = Mat4::identity()
///     .rotate(30.0, 1.0, 0.0, 0.0)
///     .rotate(45.0, 0.0, 1.0, 0.0)
///     .translate(0.0, 0.0, -2.0);
///
/// assert_eq!(model_view.get(3, 3), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    #[rustfmt::skip]
    pub const IDENTITY: Mat4 = Mat4 {
        data: [
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from 16 column-major values.
    pub fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Symmetric-frustum perspective projection.
    ///
    /// # Parameters
    /// * `fov_degrees` - vertical field of view, in `(0, 180)`
    /// * `aspect` - viewport width divided by height, `> 0`
    /// * `near`, `far` - clip plane distances, `0 < near < far`
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        debug_assert!(fov_degrees > 0.0 && fov_degrees < 180.0, "fov: {fov_degrees}");
        debug_assert!(aspect > 0.0, "aspect: {aspect}");
        debug_assert!(near > 0.0 && near < far, "near: {near}, far: {far}");

        let f = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
        let range_inv = 1.0 / (near - far);

        let mut result = Self { data: [0.0; 16] };
        let data = &mut result.data;

        data[0] = f / aspect;
        data[5] = f;
        data[10] = (far + near) * range_inv;
        data[11] = -1.0;
        data[14] = 2.0 * far * near * range_inv;

        result
    }

    /// Rotation of `angle_degrees` about the axis `(x, y, z)`.
    ///
    /// The axis must be a unit vector. It is not normalized: a non-unit axis
    /// produces a combined rotation and scale.
    pub fn rotation(angle_degrees: f32, x: f32, y: f32, z: f32) -> Self {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        let t = 1.0 - c;

        #[rustfmt::skip]
        let data = [
            x * x * t + c,     y * x * t + z * s, z * x * t - y * s, 0.0,
            x * y * t - z * s, y * y * t + c,     z * y * t + x * s, 0.0,
            x * z * t + y * s, y * z * t - x * s, z * z * t + c,     0.0,
            0.0,               0.0,               0.0,               1.0,
        ];

        Self { data }
    }

    pub fn translation(dx: f32, dy: f32, dz: f32) -> Self {
        let mut result = Self::identity();
        result.data[12] = dx;
        result.data[13] = dy;
        result.data[14] = dz;
        result
    }

    /// Composes a rotation onto this matrix: `self × R(angle, axis)`.
    ///
    /// See [`Mat4::rotation`] for the axis precondition.
    pub fn rotate(self, angle_degrees: f32, x: f32, y: f32, z: f32) -> Self {
        self * Self::rotation(angle_degrees, x, y, z)
    }

    /// Composes a translation onto this matrix: `self × T(dx, dy, dz)`.
    ///
    /// The translation is applied in the frame established by any rotations
    /// composed before it.
    pub fn translate(self, dx: f32, dy: f32, dz: f32) -> Self {
        self * Self::translation(dx, dy, dz)
    }

    /// Column-major product `self × rhs`.
    pub fn mul_mat4(&self, rhs: &Mat4) -> Mat4 {
        let (a, b) = (&self.data, &rhs.data);
        let mut data = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                data[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
            }
        }

        Mat4 { data }
    }

    /// Transforms a homogeneous column vector.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, value) in out.iter_mut().enumerate() {
            *value = (0..4).map(|k| self.data[k * 4 + row] * v[k]).sum();
        }
        out
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    pub fn approx_eq(&self, other: &Mat4, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.mul_mat4(&rhs)
    }
}
