//! Turtle state and operations for planar line interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// The pose of the drawing turtle.
///
/// Snapshots of this struct are what `[` pushes and `]` restores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Index into the [`DirectionTable`], always in `[0, direction_count)`.
    /// Heading 0 points along `+X`, increasing headings turn counter-clockwise.
    pub heading: usize,

    /// Current position of the pen.
    pub position: Vec2,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            heading: 0,
            position: Vec2::ZERO,
        }
    }
}

impl TurtleState {
    /// Turns clockwise by one angular quantum (`+`).
    pub fn turn_right(&mut self, direction_count: usize) {
        self.heading = (self.heading + direction_count - 1) % direction_count;
    }

    /// Turns counter-clockwise by one angular quantum (`-`).
    pub fn turn_left(&mut self, direction_count: usize) {
        self.heading = (self.heading + 1) % direction_count;
    }

    /// Turns by half the headings (`|`).
    ///
    /// With an odd `direction_count` this lands one quantum short of 180 degrees.
    pub fn turn_around(&mut self, direction_count: usize) {
        self.heading = (self.heading + direction_count / 2) % direction_count;
    }
}

/// Unit vectors for every heading, computed once per interpreter.
#[derive(Clone, Debug)]
pub struct DirectionTable {
    units: Vec<Vec2>,
}

impl DirectionTable {
    /// Builds the table for `direction_count` evenly spaced headings.
    ///
    /// `direction_count` must be at least 1.
    pub fn new(direction_count: usize) -> Self {
        let n = direction_count as f32;
        let units = (0..direction_count)
            .map(|i| {
                let angle = 2.0 * PI * i as f32 / n;
                Vec2::new(angle.cos(), angle.sin())
            })
            .collect();
        Self { units }
    }

    /// Number of headings in the table.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit vector for `heading`. Panics if `heading` is out of range.
    pub fn unit(&self, heading: usize) -> Vec2 {
        self.units[heading]
    }

    /// Angular quantum in degrees.
    pub fn quantum_degrees(&self) -> f32 {
        360.0 / self.units.len() as f32
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move one step forward and emit a segment (`F`).
    Draw,
    /// Move one step forward without drawing (`f`).
    Move,
    /// Turn clockwise by one quantum (`+`).
    TurnRight,
    /// Turn counter-clockwise by one quantum (`-`).
    TurnLeft,
    /// Turn by half the headings (`|`).
    TurnAround,
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op: symbol has no registered meaning.
    Ignore,
}
