//! Equilibrium chemistry of aqueous solutions.
//!
//! Supports exactly five solutions: pure water, strong and weak acids,
//! strong and weak bases. All concentrations come from closed-form
//! solutions of the mass-action law (no iterative solving):
//!
//! | Kind        | [H3O+]                              |
//! |-------------|-------------------------------------|
//! | Water       | sqrt(Kw)                            |
//! | Strong acid | c                                   |
//! | Weak acid   | (-Ka + sqrt(Ka² + 4·Ka·c)) / 2       |
//! | Strong base | Kw / c                              |
//! | Weak base   | Kw / [OH-], [OH-] solved as above   |

mod error;
mod kind;
mod registry;
mod solution;
pub mod solutions;
mod species;

pub use error::{ChemistryError, ChemistryResult};
pub use kind::{Quantity, SolutionKind};
pub use registry::SolutionRegistry;
pub use solution::AqueousSolution;
pub use solutions::{Equilibrium, SpeciesConcentrations};
pub use species::Species;
