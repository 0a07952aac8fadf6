use super::Vec2;

/// Affine 2D transform decomposed as translation + rotation + scale.
///
/// `transform_point` applies scale first, then rotation, then translation,
/// matching the usual scene-graph TRS convention.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2 {
    pub translation: Vec2,
    /// Counter-clockwise rotation in radians.
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform2 {
    pub const IDENTITY: Self = Self {
        translation: Vec2::zero(),
        rotation: 0.0,
        scale: Vec2::splat(1.0),
    };

    #[inline]
    pub const fn new(translation: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    #[inline]
    pub const fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            rotation: 0.0,
            scale: Vec2::splat(1.0),
        }
    }

    /// Maps a local-space point to world space.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let scaled = Vec2::new(p.x * self.scale.x, p.y * self.scale.y);
        let (sin, cos) = self.rotation.sin_cos();
        let rotated = Vec2::new(
            scaled.x * cos - scaled.y * sin,
            scaled.x * sin + scaled.y * cos,
        );
        rotated + self.translation
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
