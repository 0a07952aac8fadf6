/// Linear RGB color triple.
///
/// Components are conventionally in `[0, 1]` but are carried unclamped; the
/// shader decides how to interpret out-of-range values.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

/// Surface response parameters for the ray tracer.
///
/// Authoring conventions (not enforced, values pass through as-is):
/// - `roughness` in `[0, 1]`: 0 = mirror, 1 = fully diffuse
/// - `transmission` in `[0, 1]`: fraction of rays passing through
/// - `emission` >= 0: unitless radiance multiplier
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RayMaterial {
    pub roughness: f32,
    pub transmission: f32,
    pub emission: f32,
    pub color: Rgb,
}

impl RayMaterial {
    #[inline]
    pub const fn new(roughness: f32, transmission: f32, emission: f32, color: Rgb) -> Self {
        Self {
            roughness,
            transmission,
            emission,
            color,
        }
    }

    /// Diffuse non-emissive surface of the given color.
    #[inline]
    pub const fn diffuse(color: Rgb) -> Self {
        Self::new(1.0, 0.0, 0.0, color)
    }
}
