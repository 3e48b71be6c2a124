//! Configuration module for loading simulation parameters.
//!
//! Physical constants and tool layout are read once into an immutable
//! [`Parameters`] value that is handed to every component by reference.

mod parameters;

pub use parameters::{
    BeakerParameters, ChemistryParameters, ConductivityParameters, MagnifierParameters,
    Parameters, PhMeterParameters, PhPaperParameters,
};
