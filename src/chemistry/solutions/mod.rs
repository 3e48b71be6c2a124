//! Closed-form equilibrium for each solution kind.
//!
//! Every kind is an independent zero-sized type implementing [`Equilibrium`].
//! Dispatch goes through the [`SolutionKind`] enum, so adding a kind is a
//! compile error until every `match` below handles it.
//!
//! Conventions shared by all formula sets:
//! - `Kw = [H3O+][OH-]`
//! - solute is the undissociated acid/base (HA, B, MOH), product is the ion
//!   it releases (A-, BH+, M+)
//! - `[H2O] = W - (water consumed making the product)`

mod strong_acid;
mod strong_base;
mod water;
mod weak_acid;
mod weak_base;

pub use strong_acid::StrongAcid;
pub use strong_base::StrongBase;
pub use water::Water;
pub use weak_acid::WeakAcid;
pub use weak_base::WeakBase;

use serde::{Deserialize, Serialize};

use super::{SolutionKind, Species};
use crate::config::ChemistryParameters;

/// Concentrations of every role a species can play, in mol/L.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeciesConcentrations {
    /// Undissociated solute: HA, B or MOH
    pub solute: f64,
    /// Dissociation product: A-, BH+ or M+
    pub product: f64,
    pub h3o: f64,
    pub oh: f64,
    pub h2o: f64,
}

impl SpeciesConcentrations {
    /// `-log10([H3O+])`, not clamped.
    pub fn ph(&self) -> f64 {
        -self.h3o.log10()
    }

    /// Concentration of `species` under its role in a solution.
    pub fn of(&self, species: Species) -> f64 {
        match species {
            Species::H2O => self.h2o,
            Species::H3O => self.h3o,
            Species::OH => self.oh,
            Species::HA | Species::B | Species::MOH => self.solute,
            Species::A | Species::BH | Species::M => self.product,
        }
    }
}

/// Closed-form equilibrium of one solution kind.
pub trait Equilibrium {
    const KIND: SolutionKind;

    /// Species shown for this kind, in display order.
    const SPECIES: &'static [Species];

    /// Solve for all concentrations given the strength (Ka, Kb or sentinel)
    /// and the initial solute concentration.
    fn solve(strength: f64, concentration: f64, constants: &ChemistryParameters)
        -> SpeciesConcentrations;

    /// Whether this kind accepts `strength`.
    fn is_valid_strength(strength: f64, constants: &ChemistryParameters) -> bool;
}

/// Positive root of `x² + K·x - K·c = 0`, the ion concentration released by a
/// weak acid or base with constant `K` and initial concentration `c`.
///
/// Equal to `(-K + sqrt(K² + 4·K·c)) / 2`, rearranged so that large `K`
/// does not cancel against the square root.
pub(crate) fn weak_dissociation(k: f64, c: f64) -> f64 {
    let discriminant = (k * k + 4.0 * k * c).sqrt();
    if k + discriminant == 0.0 {
        return 0.0;
    }
    2.0 * k * c / (k + discriminant)
}

/// Solve the equilibrium of `kind`.
pub fn solve(
    kind: SolutionKind,
    strength: f64,
    concentration: f64,
    constants: &ChemistryParameters,
) -> SpeciesConcentrations {
    match kind {
        SolutionKind::Water => Water::solve(strength, concentration, constants),
        SolutionKind::StrongAcid => StrongAcid::solve(strength, concentration, constants),
        SolutionKind::WeakAcid => WeakAcid::solve(strength, concentration, constants),
        SolutionKind::StrongBase => StrongBase::solve(strength, concentration, constants),
        SolutionKind::WeakBase => WeakBase::solve(strength, concentration, constants),
    }
}

/// Species shown for `kind`, in display order.
pub fn species_of(kind: SolutionKind) -> &'static [Species] {
    match kind {
        SolutionKind::Water => Water::SPECIES,
        SolutionKind::StrongAcid => StrongAcid::SPECIES,
        SolutionKind::WeakAcid => WeakAcid::SPECIES,
        SolutionKind::StrongBase => StrongBase::SPECIES,
        SolutionKind::WeakBase => WeakBase::SPECIES,
    }
}

/// Whether `kind` accepts `strength`.
pub fn is_valid_strength(kind: SolutionKind, strength: f64, constants: &ChemistryParameters) -> bool {
    match kind {
        SolutionKind::Water => Water::is_valid_strength(strength, constants),
        SolutionKind::StrongAcid => StrongAcid::is_valid_strength(strength, constants),
        SolutionKind::WeakAcid => WeakAcid::is_valid_strength(strength, constants),
        SolutionKind::StrongBase => StrongBase::is_valid_strength(strength, constants),
        SolutionKind::WeakBase => WeakBase::is_valid_strength(strength, constants),
    }
}
