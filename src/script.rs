//! Mower scripts: parsing and batch execution.
//!
//! A script is a grid line followed by one `x y H` placement line and one path line
//! per mower:
//!
//! ```text
//! 5 5
//! 1 2 N
//! GAGAGAGAA
//! 3 3 E
//! AADAADADDA
//! ```
//!
//! The grid line holds either the upper corner (`x_max y_max`, lower corner at the
//! origin) or all four bounds (`x_min y_min x_max y_max`). Blank lines are skipped.

use crate::grid::{Grid, Position};
use crate::mower::{GridPlacementError, Heading, Mower, ParseHeadingError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while reading a script. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("script is empty")]
    Empty,
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: &'static str,
        found: usize,
    },
    #[error("line {line}: invalid integer {value:?}")]
    InvalidInteger { line: usize, value: String },
    #[error("line {line}: {source}")]
    Heading {
        line: usize,
        source: ParseHeadingError,
    },
    #[error("line {line}: placement has no path line")]
    MissingPath { line: usize },
}

/// A mower that failed while the batch was set to stop on the first error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("mower {index}: {source}")]
pub struct RunError {
    pub index: usize,
    pub source: GridPlacementError,
}

/// How the batch runner reacts to a failing mower.
#[derive(Clone, Debug, Default)]
pub struct RunConfig {
    /// Abort the batch on the first failure instead of reporting it and moving on.
    pub stop_on_error: bool,
}

/// Starting state and instructions of one mower.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MowerProgram {
    pub start: Position,
    pub heading: Heading,
    pub path: String,
}

/// Final state of one mower of a batch, or the reason it failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MowerReport {
    pub index: usize,
    pub outcome: Result<(Position, Heading), GridPlacementError>,
}

impl fmt::Display for MowerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Ok((position, heading)) => {
                let (x, y) = position.coordinates();
                write!(f, "{x} {y} {heading}")
            }
            Err(e) => write!(f, "error: {e}"),
        }
    }
}

/// A parsed script: one shared grid and the mowers to run on it, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub grid: Grid,
    pub mowers: Vec<MowerProgram>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (line, header) = lines.next().ok_or(ScriptError::Empty)?;
        let bounds = parse_integers(line, header)?;
        let grid = match bounds[..] {
            [x_max, y_max] => Grid::from_upper_corner(x_max, y_max),
            [x_min, y_min, x_max, y_max] => Grid::new(x_min, y_min, x_max, y_max),
            _ => {
                return Err(ScriptError::FieldCount {
                    line,
                    expected: "2 or 4",
                    found: bounds.len(),
                });
            }
        };

        let mut mowers = Vec::new();
        while let Some((line, placement)) = lines.next() {
            let (start, heading) = parse_placement(line, placement)?;
            let (_, path) = lines.next().ok_or(ScriptError::MissingPath { line })?;
            mowers.push(MowerProgram {
                start,
                heading,
                path: path.to_string(),
            });
        }

        Ok(Self { grid, mowers })
    }

    /// Runs every mower in order, each on a fresh [`Mower`] bound to the script's grid.
    ///
    /// Mowers do not see each other. With [`RunConfig::stop_on_error`] the first
    /// failure aborts the batch; otherwise it is recorded in that mower's report.
    pub fn run(&self, config: &RunConfig) -> Result<Vec<MowerReport>, RunError> {
        debug!(
            "running {} mower(s) on grid {:?}",
            self.mowers.len(),
            self.grid
        );
        let mut reports = Vec::with_capacity(self.mowers.len());

        for (index, program) in self.mowers.iter().enumerate() {
            let outcome = run_program(&self.grid, program);
            if let Err(source) = outcome {
                warn!("mower {index} failed: {source}");
                if config.stop_on_error {
                    return Err(RunError { index, source });
                }
            }
            reports.push(MowerReport { index, outcome });
        }

        Ok(reports)
    }
}

fn run_program(
    grid: &Grid,
    program: &MowerProgram,
) -> Result<(Position, Heading), GridPlacementError> {
    let mut mower = Mower::new(program.start, program.heading);
    mower.associate_to_grid(grid)?;
    mower.execute_path(&program.path)?;
    Ok((mower.position(), mower.heading()))
}

fn parse_integer(line: usize, field: &str) -> Result<i32, ScriptError> {
    field.parse().map_err(|_| ScriptError::InvalidInteger {
        line,
        value: field.to_string(),
    })
}

fn parse_integers(line: usize, text: &str) -> Result<Vec<i32>, ScriptError> {
    text.split_whitespace()
        .map(|field| parse_integer(line, field))
        .collect()
}

fn parse_placement(line: usize, text: &str) -> Result<(Position, Heading), ScriptError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [x, y, heading] = fields[..] else {
        return Err(ScriptError::FieldCount {
            line,
            expected: "3",
            found: fields.len(),
        });
    };
    let start = Position::new(parse_integer(line, x)?, parse_integer(line, y)?);
    let heading = heading
        .parse()
        .map_err(|source| ScriptError::Heading { line, source })?;
    Ok((start, heading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_field_grid_line() {
        let script = Script::parse("-2 -1 3 4\n0 0 S\nA\n").unwrap();
        assert_eq!(script.grid, Grid::new(-2, -1, 3, 4));
        assert_eq!(script.mowers.len(), 1);
    }

    #[test]
    fn blank_lines_and_padding_are_skipped() {
        let script = Script::parse("\n  5 5 \n\n 1 2 N\n\n GAGA \n").unwrap();
        assert_eq!(
            script.mowers,
            vec![MowerProgram {
                start: Position::new(1, 2),
                heading: Heading::N,
                path: "GAGA".to_string(),
            }]
        );
    }

    #[test]
    fn rejects_bad_lines() {
        assert_eq!(Script::parse("  \n"), Err(ScriptError::Empty));
        assert_eq!(
            Script::parse("5 5 5\n"),
            Err(ScriptError::FieldCount {
                line: 1,
                expected: "2 or 4",
                found: 3
            })
        );
        assert_eq!(
            Script::parse("5 x\n"),
            Err(ScriptError::InvalidInteger {
                line: 1,
                value: "x".to_string()
            })
        );
        assert_eq!(
            Script::parse("5 5\n1 2 Q\nA\n"),
            Err(ScriptError::Heading {
                line: 2,
                source: ParseHeadingError("Q".to_string())
            })
        );
        assert_eq!(
            Script::parse("5 5\n1 2 N\nA\n3 3 E\n"),
            Err(ScriptError::MissingPath { line: 4 })
        );
    }
}
