//! Strong base, fully dissociated: MOH -> M+ + OH-.

use super::{Equilibrium, SpeciesConcentrations};
use crate::chemistry::{SolutionKind, Species};
use crate::config::ChemistryParameters;

pub struct StrongBase;

impl Equilibrium for StrongBase {
    const KIND: SolutionKind = SolutionKind::StrongBase;
    const SPECIES: &'static [Species] = &[Species::MOH, Species::M, Species::OH];

    fn solve(_strength: f64, c: f64, constants: &ChemistryParameters) -> SpeciesConcentrations {
        // [MOH] = 0, [M+] = [OH-] = c; no water is consumed
        let oh = c;
        SpeciesConcentrations {
            solute: 0.0,
            product: c,
            h3o: constants.water_equilibrium_constant / oh,
            oh,
            h2o: constants.water_concentration,
        }
    }

    fn is_valid_strength(strength: f64, constants: &ChemistryParameters) -> bool {
        constants.is_strong_strength(strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_dissociation() {
        let constants = ChemistryParameters::default();
        for c in [1e-3, 1e-2, 0.1, 1.0] {
            let conc = StrongBase::solve(constants.strong_strength, c, &constants);
            assert_eq!(conc.solute, 0.0);
            assert_eq!(conc.product, c);
            assert_eq!(conc.oh, c);
        }
    }

    #[test]
    fn test_ph_of_centimolar_base() {
        let constants = ChemistryParameters::default();
        let conc = StrongBase::solve(constants.strong_strength, 1e-2, &constants);
        assert!((conc.ph() - 12.0).abs() < 1e-9, "pH should be 12: {}", conc.ph());
    }
}
