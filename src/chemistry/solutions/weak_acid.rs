//! Weak acid in equilibrium: HA + H2O <-> A- + H3O+.

use super::{weak_dissociation, Equilibrium, SpeciesConcentrations};
use crate::chemistry::{SolutionKind, Species};
use crate::config::ChemistryParameters;

/// Solves `Ka = [H3O+][A-] / [HA]` with `[A-] = [H3O+]` and `[HA] = c - [H3O+]`.
pub struct WeakAcid;

impl Equilibrium for WeakAcid {
    const KIND: SolutionKind = SolutionKind::WeakAcid;
    const SPECIES: &'static [Species] = &[Species::HA, Species::H2O, Species::A, Species::H3O];

    fn solve(ka: f64, c: f64, constants: &ChemistryParameters) -> SpeciesConcentrations {
        let h3o = weak_dissociation(ka, c);
        let product = h3o;
        SpeciesConcentrations {
            solute: (c - h3o).max(0.0),
            product,
            h3o,
            oh: constants.water_equilibrium_constant / h3o,
            h2o: constants.water_concentration - product,
        }
    }

    fn is_valid_strength(strength: f64, constants: &ChemistryParameters) -> bool {
        constants.is_weak_strength(strength)
    }
}
