//! 3D position and orientation types
//!
//! Positions are a tagged polar/cartesian union: renderer metadata keeps
//! whichever representation the author supplied, and only converts when an
//! operation demands it.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use crate::params::ParameterSet;

/// Cartesian coordinates
///
/// X is left/right (positive = right), Y is front/back (positive = front),
/// Z is up/down (positive = up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartesianPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from origin
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Polar coordinates
///
/// Azimuth and elevation are in degrees: azimuth 0 = front, positive =
/// right; elevation positive = up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarPosition {
    pub azimuth: f64,
    pub elevation: f64,
    pub distance: f64,
}

impl PolarPosition {
    pub fn new(azimuth: f64, elevation: f64, distance: f64) -> Self {
        Self {
            azimuth,
            elevation,
            distance,
        }
    }
}

/// 3D position, either polar or cartesian
///
/// The JSON shape is the bare coordinate object of whichever variant is
/// held (`{"azimuth":..,"elevation":..,"distance":..}` or
/// `{"x":..,"y":..,"z":..}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Polar(PolarPosition),
    Cartesian(CartesianPosition),
}

impl Position {
    /// Cartesian position
    pub fn cartesian(x: f64, y: f64, z: f64) -> Self {
        Self::Cartesian(CartesianPosition::new(x, y, z))
    }

    /// Polar position (azimuth/elevation in degrees)
    pub fn polar(azimuth: f64, elevation: f64, distance: f64) -> Self {
        Self::Polar(PolarPosition::new(azimuth, elevation, distance))
    }

    /// Cartesian origin
    pub fn origin() -> Self {
        Self::cartesian(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn is_polar(&self) -> bool {
        matches!(self, Self::Polar(_))
    }

    /// Convert to cartesian coordinates
    pub fn to_cartesian(&self) -> CartesianPosition {
        match *self {
            Self::Cartesian(c) => c,
            Self::Polar(p) => {
                let az = p.azimuth.to_radians();
                let el = p.elevation.to_radians();
                let cos_el = el.cos();
                CartesianPosition::new(
                    p.distance * az.sin() * cos_el,
                    p.distance * az.cos() * cos_el,
                    p.distance * el.sin(),
                )
            }
        }
    }

    /// Convert to polar coordinates
    pub fn to_polar(&self) -> PolarPosition {
        match *self {
            Self::Polar(p) => p,
            Self::Cartesian(c) => {
                let distance = c.magnitude();
                if distance < 1e-10 {
                    return PolarPosition::default();
                }
                PolarPosition::new(
                    c.x.atan2(c.y).to_degrees(),
                    (c.z / distance).asin().to_degrees(),
                    distance,
                )
            }
        }
    }

    /// Same point, cartesian representation
    pub fn as_cartesian(&self) -> Self {
        Self::Cartesian(self.to_cartesian())
    }

    /// Same point, polar representation
    pub fn as_polar(&self) -> Self {
        Self::Polar(self.to_polar())
    }

    /// Raw components in this position's own coordinate system
    ///
    /// Polar: `[azimuth, elevation, distance]`; cartesian: `[x, y, z]`.
    pub fn components(&self) -> [f64; 3] {
        match *self {
            Self::Polar(p) => [p.azimuth, p.elevation, p.distance],
            Self::Cartesian(c) => [c.x, c.y, c.z],
        }
    }

    /// Add an offset component-wise in this position's own coordinate system
    pub fn offset(&self, by: [f64; 3]) -> Self {
        match *self {
            Self::Polar(p) => Self::polar(p.azimuth + by[0], p.elevation + by[1], p.distance + by[2]),
            Self::Cartesian(c) => Self::cartesian(c.x + by[0], c.y + by[1], c.z + by[2]),
        }
    }

    /// Component-wise difference from `origin`, in this position's own
    /// coordinate system
    pub fn delta_from(&self, origin: &Position) -> [f64; 3] {
        match *self {
            Self::Polar(p) => {
                let o = origin.to_polar();
                [
                    p.azimuth - o.azimuth,
                    p.elevation - o.elevation,
                    p.distance - o.distance,
                ]
            }
            Self::Cartesian(c) => {
                let o = origin.to_cartesian();
                [c.x - o.x, c.y - o.y, c.z - o.z]
            }
        }
    }

    /// Rotate about the origin, preserving representation
    pub fn rotated(&self, rotation: &Quaternion) -> Self {
        let c = self.to_cartesian();
        let [x, y, z] = rotation.rotate([c.x, c.y, c.z]);
        let rotated = Self::cartesian(x, y, z);
        if self.is_polar() {
            rotated.as_polar()
        } else {
            rotated
        }
    }

    /// Flatten into a parameter set as rendered text values
    pub fn to_parameter_set(&self) -> ParameterSet {
        let mut set = ParameterSet::new();
        set.set("polar", if self.is_polar() { "true" } else { "false" });
        let [a, b, c] = self.components();
        let keys = if self.is_polar() {
            ["azimuth", "elevation", "distance"]
        } else {
            ["x", "y", "z"]
        };
        set.set(keys[0], a.to_string());
        set.set(keys[1], b.to_string());
        set.set(keys[2], c.to_string());
        set
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl Add for Position {
    type Output = Self;

    /// Component-wise when both operands share a representation, otherwise
    /// the cartesian sum
    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Polar(a), Self::Polar(b)) => Self::polar(
                a.azimuth + b.azimuth,
                a.elevation + b.elevation,
                a.distance + b.distance,
            ),
            _ => {
                let a = self.to_cartesian();
                let b = rhs.to_cartesian();
                Self::cartesian(a.x + b.x, a.y + b.y, a.z + b.z)
            }
        }
    }
}

impl Mul<f64> for Position {
    type Output = Self;

    /// Scale about the origin: all cartesian components, or polar distance
    fn mul(self, rhs: f64) -> Self {
        match self {
            Self::Polar(p) => Self::polar(p.azimuth, p.elevation, p.distance * rhs),
            Self::Cartesian(c) => Self::cartesian(c.x * rhs, c.y * rhs, c.z * rhs),
        }
    }
}

/// Rotation quaternion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle_deg` degrees about `axis` (need not be normalized)
    pub fn from_axis_angle(angle_deg: f64, axis: [f64; 3]) -> Self {
        let mag = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        if mag < 1e-10 {
            return Self::IDENTITY;
        }
        let half = angle_deg.to_radians() * 0.5;
        let s = half.sin() / mag;
        Self::new(half.cos(), axis[0] * s, axis[1] * s, axis[2] * s)
    }

    /// Rotate a free vector
    pub fn rotate(&self, v: [f64; 3]) -> [f64; 3] {
        // v' = v + 2w(q x v) + 2(q x (q x v))
        let q = [self.x, self.y, self.z];
        let t = [
            2.0 * (q[1] * v[2] - q[2] * v[1]),
            2.0 * (q[2] * v[0] - q[0] * v[2]),
            2.0 * (q[0] * v[1] - q[1] * v[0]),
        ];
        [
            v[0] + self.w * t[0] + (q[1] * t[2] - q[2] * t[1]),
            v[1] + self.w * t[1] + (q[2] * t[0] - q[0] * t[2]),
            v[2] + self.w * t[2] + (q[0] * t[1] - q[1] * t[0]),
        ]
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Combined rotation/scale/translation operator for positions
///
/// Applied as rotate, then scale, then translate, in cartesian space; the
/// result is always a cartesian position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionTransform {
    pub rotation: Quaternion,
    pub scale: f64,
    pub translation: CartesianPosition,
}

impl PositionTransform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn with_rotation(mut self, rotation: Quaternion) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_translation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.translation = CartesianPosition::new(x, y, z);
        self
    }

    /// Transform a position
    pub fn apply(&self, position: &Position) -> Position {
        let c = position.to_cartesian();
        let [x, y, z] = self.rotation.rotate([c.x, c.y, c.z]);
        Position::cartesian(
            x * self.scale + self.translation.x,
            y * self.scale + self.translation.y,
            z * self.scale + self.translation.z,
        )
    }
}

impl Default for PositionTransform {
    fn default() -> Self {
        Self {
            rotation: Quaternion::IDENTITY,
            scale: 1.0,
            translation: CartesianPosition::default(),
        }
    }
}
