//! Mower state and the operations that drive it.

use crate::grid::{Grid, Position};
use crate::interpreter::PathInterpreter;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Compass heading of a mower.
///
/// The discriminants are the clockwise ordinals used by the rotation algebra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    N = 0,
    E = 1,
    S = 2,
    W = 3,
}

impl Heading {
    /// All headings in clockwise order, indexed by ordinal.
    pub const ALL: [Heading; 4] = [Heading::N, Heading::E, Heading::S, Heading::W];

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Maps any integer onto a heading, wrapping modulo 4 (negative values included).
    pub fn from_ordinal(ordinal: i32) -> Self {
        Self::ALL[ordinal.rem_euclid(4) as usize]
    }

    /// Returns the heading reached after applying `rotation`.
    pub fn rotate(self, rotation: Rotation) -> Self {
        Self::from_ordinal(self.ordinal() + rotation.delta())
    }

    /// Unit displacement of one forward step.
    pub fn step_vector(self) -> Position {
        match self {
            Heading::N => Position::new(0, 1),
            Heading::E => Position::new(1, 0),
            Heading::S => Position::new(0, -1),
            Heading::W => Position::new(-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        Self::from_ordinal(self.ordinal() + 2)
    }

    pub fn name(self) -> &'static str {
        match self {
            Heading::N => "N",
            Heading::E => "E",
            Heading::S => "S",
            Heading::W => "W",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heading {0:?}, expected one of N, E, S, W")]
pub struct ParseHeadingError(pub String);

impl FromStr for Heading {
    type Err = ParseHeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Heading::N),
            "E" => Ok(Heading::E),
            "S" => Ok(Heading::S),
            "W" => Ok(Heading::W),
            other => Err(ParseHeadingError(other.to_string())),
        }
    }
}

/// A quarter turn in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Counter-clockwise (`G`).
    Left,
    /// Clockwise (`D`).
    Right,
}

impl Rotation {
    /// Signed change applied to the heading ordinal.
    pub fn delta(self) -> i32 {
        match self {
            Rotation::Left => -1,
            Rotation::Right => 1,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Rotation::Left => Rotation::Right,
            Rotation::Right => Rotation::Left,
        }
    }
}

/// Failures of grid association and of movement without a grid.
///
/// None of them alters the mower; it stays usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridPlacementError {
    #[error("position not in grid")]
    PositionNotInGrid,
    #[error("already associated")]
    AlreadyAssociated,
    #[error("no grid associated")]
    NoGridAssociated,
}

/// Whether a mower has been bound to a grid yet.
///
/// The only transition is `Unbound -> Bound`, performed by [`Mower::associate_to_grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridLink<'g> {
    #[default]
    Unbound,
    Bound(&'g Grid),
}

/// Operations a path symbol can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MowerOp {
    /// Turn in place (`G` / `D`).
    Rotate(Rotation),
    /// Step one cell forward if the target cell is on the grid (`A`).
    Advance,
    /// No-op; the symbol has no registered meaning.
    Ignore,
}

/// A mower: a position, a heading and at most one grid for its whole lifetime.
///
/// While bound, the position is always inside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mower<'g> {
    position: Position,
    heading: Heading,
    link: GridLink<'g>,
}

impl<'g> Mower<'g> {
    /// Creates an unbound mower.
    pub fn new(position: Position, heading: Heading) -> Self {
        Self {
            position,
            heading,
            link: GridLink::Unbound,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn grid(&self) -> Option<&'g Grid> {
        match self.link {
            GridLink::Unbound => None,
            GridLink::Bound(grid) => Some(grid),
        }
    }

    pub fn link(&self) -> GridLink<'g> {
        self.link
    }

    /// Moves the mower without any bounds check.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        self.heading = self.heading.rotate(rotation);
    }

    /// Binds the mower to `grid` for the rest of its life.
    ///
    /// Fails if the mower is already bound (whatever `grid` is) or if its current
    /// position is outside `grid`.
    pub fn associate_to_grid(&mut self, grid: &'g Grid) -> Result<(), GridPlacementError> {
        if let GridLink::Bound(_) = self.link {
            return Err(GridPlacementError::AlreadyAssociated);
        }
        if !grid.is_inbound(self.position) {
            return Err(GridPlacementError::PositionNotInGrid);
        }
        debug!("mower at {} bound to grid {:?}", self, grid);
        self.link = GridLink::Bound(grid);
        Ok(())
    }

    /// Steps one cell along the current heading.
    ///
    /// A step that would leave the grid is dropped without error.
    pub fn advance(&mut self) -> Result<(), GridPlacementError> {
        let GridLink::Bound(grid) = self.link else {
            return Err(GridPlacementError::NoGridAssociated);
        };
        match self.position.checked_add(self.heading.step_vector()) {
            Some(candidate) if grid.is_inbound(candidate) => self.position = candidate,
            _ => trace!("advance from {} blocked by grid edge", self),
        }
        Ok(())
    }

    /// Runs `path` with the standard `G`/`D`/`A` symbols. Other characters are skipped.
    pub fn execute_path(&mut self, path: &str) -> Result<(), GridPlacementError> {
        PathInterpreter::standard().run(self, path)
    }

    /// Applies a single operation.
    pub fn apply(&mut self, op: MowerOp) -> Result<(), GridPlacementError> {
        match op {
            MowerOp::Rotate(rotation) => self.rotate(rotation),
            MowerOp::Advance => self.advance()?,
            MowerOp::Ignore => {}
        }
        Ok(())
    }
}

impl fmt::Display for Mower<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.position.coordinates();
        write!(f, "{} {} {}", x, y, self.heading)
    }
}
