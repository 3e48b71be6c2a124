//! Strong acid, fully dissociated: HA + H2O -> A- + H3O+.

use super::{Equilibrium, SpeciesConcentrations};
use crate::chemistry::{SolutionKind, Species};
use crate::config::ChemistryParameters;

pub struct StrongAcid;

impl Equilibrium for StrongAcid {
    const KIND: SolutionKind = SolutionKind::StrongAcid;
    const SPECIES: &'static [Species] = &[Species::HA, Species::H2O, Species::A, Species::H3O];

    fn solve(_strength: f64, c: f64, constants: &ChemistryParameters) -> SpeciesConcentrations {
        // [HA] = 0, [A-] = [H3O+] = c
        let product = c;
        let h3o = c;
        SpeciesConcentrations {
            solute: 0.0,
            product,
            h3o,
            oh: constants.water_equilibrium_constant / h3o,
            h2o: constants.water_concentration - product,
        }
    }

    fn is_valid_strength(strength: f64, constants: &ChemistryParameters) -> bool {
        constants.is_strong_strength(strength)
    }
}
