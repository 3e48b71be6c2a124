//! Acid-Base Solutions - equilibrium model of aqueous acids and bases
//!
//! This library computes closed-form species concentrations and pH for
//! water, strong and weak acids, and strong and weak bases, and keeps the
//! derived readings of the measuring tools (pH meter, pH paper,
//! conductivity tester, concentration graph, molecule magnifier)
//! consistent with whichever solution is selected.

pub mod chemistry;
pub mod config;
pub mod geometry;
pub mod magnifier;
pub mod model;
pub mod reactive;
pub mod state;
pub mod tools;

pub use chemistry::{
    AqueousSolution, ChemistryError, ChemistryResult, SolutionKind, SolutionRegistry, Species,
};
pub use config::Parameters;
pub use geometry::Beaker;
pub use magnifier::{Magnifier, MoleculeCountScaler, ViewMode};
pub use model::{ActiveSolutionRouter, CustomSolutionModel, SolutionsModel, Workspace};
pub use reactive::{ReactiveValue, ReadOnlyValue};
pub use state::SolutionSnapshot;
pub use tools::{ConcentrationGraph, ConductivityTester, PhMeter, PhPaper, ToolMode};
