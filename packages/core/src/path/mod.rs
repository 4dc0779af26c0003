//! Dotted path compilation
//!
//! Splits a raw path on `.` and turns each segment into a [`Step`] on demand.

pub mod compiler;
pub mod step;

pub use compiler::{PathCompiler, compile};
pub use step::Step;
