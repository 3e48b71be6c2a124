//! Weak base in equilibrium: B + H2O <-> BH+ + OH-.

use super::{weak_dissociation, Equilibrium, SpeciesConcentrations};
use crate::chemistry::{SolutionKind, Species};
use crate::config::ChemistryParameters;

/// Mirror of the weak acid with Kb: `[BH+] = [OH-]`, `[B] = c - [OH-]`.
pub struct WeakBase;

impl Equilibrium for WeakBase {
    const KIND: SolutionKind = SolutionKind::WeakBase;
    const SPECIES: &'static [Species] = &[Species::B, Species::H2O, Species::BH, Species::OH];

    fn solve(kb: f64, c: f64, constants: &ChemistryParameters) -> SpeciesConcentrations {
        let oh = weak_dissociation(kb, c);
        let product = oh;
        SpeciesConcentrations {
            solute: (c - oh).max(0.0),
            product,
            h3o: constants.water_equilibrium_constant / oh,
            oh,
            // Water consumption is tracked through BH+ only
            h2o: constants.water_concentration - product,
        }
    }

    fn is_valid_strength(strength: f64, constants: &ChemistryParameters) -> bool {
        constants.is_weak_strength(strength)
    }
}
