//! Tree resolution
//!
//! Walks a decoded document along compiled steps.

pub mod engine;
pub mod node;

pub use engine::{Resolver, resolve};
pub use node::NodeKind;
