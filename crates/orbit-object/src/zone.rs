//! Excluded zones: boxes a rendered position must stay out of

use orbit_base::Position;
use serde::{Deserialize, Serialize};

/// A named axis-aligned box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedZone {
    name: String,
    min_corner: [f64; 3],
    max_corner: [f64; 3],
}

impl ExcludedZone {
    pub fn new(name: impl Into<String>, min_corner: [f64; 3], max_corner: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            min_corner,
            max_corner,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn min_corner(&self) -> [f64; 3] {
        self.min_corner
    }

    #[inline]
    pub fn max_corner(&self) -> [f64; 3] {
        self.max_corner
    }

    /// Inclusive containment test in cartesian space
    pub fn contains(&self, position: &Position) -> bool {
        let c = position.to_cartesian();
        let p = [c.x, c.y, c.z];
        (0..3).all(|axis| self.min_corner[axis] <= p[axis] && p[axis] <= self.max_corner[axis])
    }
}
