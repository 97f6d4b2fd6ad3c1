//! Layout coordinates.

use serde::{Deserialize, Serialize};

/// A point in layout space.
///
/// `x` grows to the right, `y` grows upwards, and smaller `z` is closer to
/// the viewer (cards stacked later sit at lower `z`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ZERO: Position = Position::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Offset by the given deltas.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let p = Position::new(1.0, 2.0, 3.0).offset(0.5, -1.0, -0.25);
        assert_eq!(p, Position::new(1.5, 1.0, 2.75));
    }
}
