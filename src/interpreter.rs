//! Interpreter that drives a [`Mower`] from an instruction string.
//!
//! The entry point is [`PathInterpreter`]. Register symbol-to-operation mappings via
//! [`PathInterpreter::set_op`] or [`PathInterpreter::populate_standard_symbols`], then
//! call [`PathInterpreter::run`] with a mower and a path.

use crate::mower::{GridPlacementError, Mower, MowerOp, Rotation};
use log::trace;
use std::collections::HashMap;

/// Maps path symbols to mower operations.
#[derive(Clone, Debug, Default)]
pub struct PathInterpreter {
    op_map: HashMap<char, MowerOp>,
}

impl PathInterpreter {
    /// Creates an interpreter with an empty symbol map. Every symbol is ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// An interpreter with the standard symbols already registered.
    pub fn standard() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Assigns a single [`MowerOp`] to a symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: MowerOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional symbols:
    ///
    /// | symbol | operation      |
    /// |--------|----------------|
    /// | `G`    | rotate left    |
    /// | `D`    | rotate right   |
    /// | `A`    | advance        |
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('G', MowerOp::Rotate(Rotation::Left)),
            ('D', MowerOp::Rotate(Rotation::Right)),
            ('A', MowerOp::Advance),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Resolves a symbol; unmapped symbols resolve to [`MowerOp::Ignore`].
    pub fn op_for(&self, symbol: char) -> MowerOp {
        self.op_map.get(&symbol).copied().unwrap_or(MowerOp::Ignore)
    }

    /// Walks every symbol of `path` in order and applies it to `mower`.
    ///
    /// Stops at the first failing operation, which can only be an advance on an
    /// unbound mower. Operations applied before the failure are kept.
    pub fn run(&self, mower: &mut Mower<'_>, path: &str) -> Result<(), GridPlacementError> {
        for symbol in path.chars() {
            let op = self.op_for(symbol);
            trace!("{symbol:?} -> {op:?}");
            mower.apply(op)?;
        }
        Ok(())
    }
}
