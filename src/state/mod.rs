//! Settled state of the simulation, as plain serializable data.

mod snapshot;

pub use snapshot::{SolutionSnapshot, SpeciesReading};
