//! # turtle-fractals
//!
//! Expands Lindenmayer-system grammars and interprets the result with a planar
//! turtle, producing plain line segments for whatever renderer sits downstream.
//!
//! It keeps the *Genotype* (grammar and rewriting) apart from the *Phenotype*
//! (the walk): a [`Grammar`] is expanded with [`expand`], and the expanded string
//! is walked by a [`TurtleInterpreter`] that streams each [`Segment`] into a
//! [`SegmentSink`] such as a [`MatlabWriter`] or a plain `Vec<Segment>`.

pub mod error;
pub mod expander;
pub mod grammar;
pub mod interpreter;
pub mod plot;
pub mod segment;
pub mod turtle;

pub use error::*;
pub use expander::*;
pub use grammar::*;
pub use interpreter::*;
pub use plot::*;
pub use segment::*;
pub use turtle::*;
