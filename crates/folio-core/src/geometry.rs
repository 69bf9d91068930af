//! Logical geometry of drawing surfaces.

/// A width and height, in logical units or backing pixels depending on use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero (nothing has been laid out yet).
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Scale a logical size into backing pixels.
    pub fn scaled(&self, density: PixelDensity) -> Size {
        Size {
            width: (self.width as f32 * density.x).round() as u32,
            height: (self.height as f32 * density.y).round() as u32,
        }
    }
}

/// Ratio of backing pixels to logical units, per axis.
///
/// Terminal cells are roughly twice as tall as they are wide, so surfaces
/// that pack several dots into a cell have different densities per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelDensity {
    pub x: f32,
    pub y: f32,
}

impl PixelDensity {
    pub const ONE: PixelDensity = PixelDensity { x: 1.0, y: 1.0 };

    /// A braille glyph holds a 2x4 grid of dots.
    pub const BRAILLE: PixelDensity = PixelDensity { x: 2.0, y: 4.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for PixelDensity {
    fn default() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_by_braille_density() {
        let size = Size::new(80, 12).scaled(PixelDensity::BRAILLE);
        assert_eq!(size, Size::new(160, 48));
    }

    #[test]
    fn test_empty_size() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }
}
