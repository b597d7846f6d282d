//! CPU-side material description.
//!
//! A material is three colours — ambient, diffuse, specular — matching the
//! record layout the renderer uploads to its storage buffer.  Only the
//! ambient term is sampled by the built-in flat shader; the other two are
//! carried so the GPU layout stays stable when richer shading lands.

use crate::color::Color;

/// Authoring-time material record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDescriptor {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl MaterialDescriptor {
    pub const fn new(ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// A material whose three terms are all `color`.
    ///
    /// Handy for the flat shader, where only the ambient term is visible
    /// anyway.
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color, color)
    }
}

impl Default for MaterialDescriptor {
    fn default() -> Self {
        Self::uniform(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_fills_all_terms() {
        let m = MaterialDescriptor::uniform(Color::CYAN);
        assert_eq!(m.ambient, Color::CYAN);
        assert_eq!(m.diffuse, Color::CYAN);
        assert_eq!(m.specular, Color::CYAN);
    }
}
