//! Segments produced by the turtle and the sinks that consume them.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::io;

/// A straight line drawn by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Coordinates in `(x0, y0, x1, y1)` order.
    pub fn coords(&self) -> [f32; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }

    /// Vector from `start` to `end`.
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Consumer of segments, called once per `F` in walk order.
///
/// Sinks are fed eagerly, so a streaming sink sees every segment produced
/// before a failure.
pub trait SegmentSink {
    /// Accepts the next segment of the walk.
    fn emit(&mut self, segment: Segment) -> io::Result<()>;
}

/// Collects segments in memory.
impl SegmentSink for Vec<Segment> {
    fn emit(&mut self, segment: Segment) -> io::Result<()> {
        self.push(segment);
        Ok(())
    }
}

/// Discards every segment. Useful when only the [`TurtleReport`](crate::TurtleReport) matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SegmentSink for NullSink {
    fn emit(&mut self, _segment: Segment) -> io::Result<()> {
        Ok(())
    }
}
