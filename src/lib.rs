//! # grid-mower
//!
//! Directional agents ("mowers") moving on a bounded integer grid.
//!
//! A [`Mower`] carries a [`Position`] and a [`Heading`]. Once bound to a [`Grid`] it can
//! be driven by an instruction string through a [`PathInterpreter`]: `G` turns left,
//! `D` turns right, `A` advances one cell. Advancing off the edge of the grid is
//! silently ignored.
//!
//! The [`script`] module parses the classic multi-mower script format and runs every
//! mower of the script against one shared grid.

pub mod grid;
pub mod interpreter;
pub mod mower;
pub mod script;

pub use grid::*;
pub use interpreter::*;
pub use mower::*;
pub use script::{MowerProgram, MowerReport, RunConfig, RunError, Script, ScriptError};
