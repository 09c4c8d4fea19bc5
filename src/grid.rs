use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// An integer cell coordinate on the lawn.
///
/// Positions are plain values: adding two of them yields a new one and nothing is
/// ever mutated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(IVec2);

impl Position {
    pub const ORIGIN: Self = Self(IVec2::ZERO);

    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    /// Returns both components as `(x, y)`.
    pub fn coordinates(&self) -> (i32, i32) {
        (self.0.x, self.0.y)
    }

    /// Componentwise sum, or `None` if either component leaves the `i32` range.
    pub fn checked_add(self, rhs: Position) -> Option<Position> {
        Some(Self::new(
            self.0.x.checked_add(rhs.0.x)?,
            self.0.y.checked_add(rhs.0.y)?,
        ))
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position(self.0 + rhs.0)
    }
}

/// An axis-aligned rectangle of cells a mower may be confined to.
///
/// Bounds are inclusive on both ends. They are taken as given: a grid whose minimum
/// exceeds its maximum on either axis simply contains no cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Grid {
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// A grid whose lower-left corner is the origin.
    pub fn from_upper_corner(x_max: i32, y_max: i32) -> Self {
        Self::new(0, 0, x_max, y_max)
    }

    /// Returns `true` when `position` lies inside the closed bounds.
    pub fn is_inbound(&self, position: Position) -> bool {
        let (x, y) = position.coordinates();
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}
