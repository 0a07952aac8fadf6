use crate::coords::Vec2;

/// Orthographic 2D camera.
///
/// `size` is the half-height of the view volume in world units, matching the
/// usual orthographic-size convention; the half-width follows from the output
/// aspect ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub size: f32,
}

impl Camera {
    #[inline]
    pub const fn new(position: Vec2, size: f32) -> Self {
        Self { position, size }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            size: 5.0,
        }
    }
}
