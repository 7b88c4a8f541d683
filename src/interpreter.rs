//! Interpreter that walks an expanded symbol string and emits [`Segment`]s.
//!
//! The entry point is [`TurtleInterpreter`]. Build it for a direction count
//! (or straight from a [`Grammar`]), optionally remap symbols with
//! [`TurtleInterpreter::set_op`], then call [`TurtleInterpreter::interpret`]
//! with any [`SegmentSink`].

use crate::error::{FractalError, Result};
use crate::grammar::Grammar;
use crate::segment::{Segment, SegmentSink};
use crate::turtle::{DirectionTable, TurtleOp, TurtleState};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Distance covered by every `F` and `f`.
    pub step_length: f32,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self { step_length: 1.0 }
    }
}

/// Summary of a completed walk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleReport {
    /// Number of segments handed to the sink.
    pub segments: usize,
    /// Number of pen-up moves (`f`).
    pub moves: usize,
    /// Deepest branch nesting reached.
    pub max_depth: usize,
    /// Pose after the last symbol.
    pub final_state: TurtleState,
    /// Bounding box `(min, max)` of every position the turtle occupied,
    /// including the origin.
    pub extent: (Vec2, Vec2),
}

/// Interprets L-System output as planar turtle commands.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    directions: DirectionTable,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter for `direction_count` headings with the standard
    /// symbols registered.
    pub fn new(direction_count: usize, config: TurtleConfig) -> Result<Self> {
        if direction_count == 0 {
            return Err(FractalError::InvalidDirectionCount(0));
        }
        let mut interpreter = Self {
            op_map: HashMap::new(),
            directions: DirectionTable::new(direction_count),
            config,
        };
        interpreter.populate_standard_symbols();
        Ok(interpreter)
    }

    /// Creates an interpreter using the grammar's direction count.
    pub fn for_grammar(grammar: &Grammar, config: TurtleConfig) -> Result<Self> {
        Self::new(grammar.direction_count, config)
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    ///
    /// Symbols missing from `map` are treated as [`TurtleOp::Ignore`].
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional mappings: `F f + - | [ ]`.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::Draw),
            ('f', TurtleOp::Move),
            ('+', TurtleOp::TurnRight),
            ('-', TurtleOp::TurnLeft),
            ('|', TurtleOp::TurnAround),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Operation bound to `symbol`, [`TurtleOp::Ignore`] when unmapped.
    pub fn op(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Number of discrete headings.
    pub fn direction_count(&self) -> usize {
        self.directions.len()
    }

    /// The configuration this interpreter walks with.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Walks `commands` once, left to right, sending one [`Segment`] to `sink`
    /// for every draw operation.
    ///
    /// The turtle starts at the origin with heading 0 and an empty branch
    /// stack; nothing carries over between calls.
    ///
    /// # Errors
    ///
    /// [`FractalError::StackUnderflow`] on a pop with nothing pushed, and
    /// [`FractalError::Sink`] if the sink fails. Either stops the walk
    /// immediately; segments already emitted stay with the sink.
    pub fn interpret<S>(&self, commands: &str, sink: &mut S) -> Result<TurtleReport>
    where
        S: SegmentSink + ?Sized,
    {
        let n = self.directions.len();
        let step = self.config.step_length;

        let mut turtle = TurtleState::default();
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut report = TurtleReport {
            segments: 0,
            moves: 0,
            max_depth: 0,
            final_state: turtle,
            extent: (Vec2::ZERO, Vec2::ZERO),
        };

        for (index, symbol) in commands.chars().enumerate() {
            match self.op(symbol) {
                op @ (TurtleOp::Draw | TurtleOp::Move) => {
                    let start = turtle.position;
                    turtle.position += self.directions.unit(turtle.heading) * step;
                    report.extent.0 = report.extent.0.min(turtle.position);
                    report.extent.1 = report.extent.1.max(turtle.position);

                    if op == TurtleOp::Draw {
                        sink.emit(Segment::new(start, turtle.position))?;
                        report.segments += 1;
                    } else {
                        report.moves += 1;
                    }
                }
                TurtleOp::TurnRight => turtle.turn_right(n),
                TurtleOp::TurnLeft => turtle.turn_left(n),
                TurtleOp::TurnAround => turtle.turn_around(n),
                TurtleOp::Push => {
                    stack.push(turtle);
                    report.max_depth = report.max_depth.max(stack.len());
                }
                TurtleOp::Pop => {
                    turtle = stack.pop().ok_or(FractalError::StackUnderflow { index })?;
                }
                TurtleOp::Ignore => {}
            }
        }

        report.final_state = turtle;
        debug!(
            segments = report.segments,
            moves = report.moves,
            max_depth = report.max_depth,
            unclosed = stack.len(),
            "turtle walk complete"
        );
        Ok(report)
    }
}
