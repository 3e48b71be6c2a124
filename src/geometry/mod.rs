//! Geometry of the workspace.
//!
//! The beaker is a read-only input supplied by the layout; tools test their
//! positions against it to decide whether they are in solution.

mod beaker;
mod bounds;

pub use beaker::Beaker;
pub use bounds::Bounds;
