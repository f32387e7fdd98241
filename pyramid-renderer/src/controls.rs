/// Rotation axis controlled by one of the rotate buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Button caption, e.g. "Rotate X".
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "Rotate X",
            Axis::Y => "Rotate Y",
            Axis::Z => "Rotate Z",
        }
    }
}

/// Accumulated rotation angles, in degrees, one per axis.
///
/// Each [`RotationControls::rotate`] adds a fixed step to one angle. An angle
/// that exceeds 360 after the step is reset to 0; an angle of exactly 360 is
/// kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationControls {
    angles: [f32; 3],
    step: f32,
}

impl RotationControls {
    pub const DEFAULT_STEP: f32 = 10.0;
    const FULL_TURN: f32 = 360.0;

    pub fn new(step: f32) -> Self {
        Self { angles: [0.0; 3], step }
    }

    /// Advances the angle of `axis` by one step and returns all three angles.
    pub fn rotate(&mut self, axis: Axis) -> [f32; 3] {
        let angle = &mut self.angles[axis.index()];
        *angle += self.step;
        if *angle > Self::FULL_TURN {
            *angle = 0.0;
        }

        self.angles
    }

    /// Current `[x, y, z]` angles.
    pub fn angles(&self) -> [f32; 3] {
        self.angles
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for RotationControls {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}
