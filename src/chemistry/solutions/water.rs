//! Pure water, no solute.

use super::{Equilibrium, SpeciesConcentrations};
use crate::chemistry::{SolutionKind, Species};
use crate::config::ChemistryParameters;

/// Self-ionization of water: `[H3O+] = [OH-] = sqrt(Kw)`.
pub struct Water;

impl Equilibrium for Water {
    const KIND: SolutionKind = SolutionKind::Water;
    const SPECIES: &'static [Species] = &[Species::H2O, Species::H3O, Species::OH];

    fn solve(_strength: f64, _concentration: f64, constants: &ChemistryParameters) -> SpeciesConcentrations {
        let h3o = constants.water_equilibrium_constant.sqrt();
        SpeciesConcentrations {
            solute: 0.0,
            product: 0.0,
            h3o,
            oh: h3o,
            h2o: constants.water_concentration,
        }
    }

    /// Water has no strength to set.
    fn is_valid_strength(_strength: f64, _constants: &ChemistryParameters) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_ph() {
        let conc = Water::solve(0.0, 0.0, &ChemistryParameters::default());
        assert_eq!(conc.ph(), 7.0);
        assert_eq!(conc.h3o, conc.oh);
    }

    #[test]
    fn test_solvent_concentration() {
        let conc = Water::solve(0.0, 0.0, &ChemistryParameters::default());
        assert!((conc.h2o - 55.6).abs() < 1e-12);
        assert_eq!(conc.solute, 0.0);
        assert_eq!(conc.product, 0.0);
    }

    #[test]
    fn test_rejects_every_strength() {
        let constants = ChemistryParameters::default();
        for strength in [0.0, 1e-7, 1e2, constants.strong_strength] {
            assert!(!Water::is_valid_strength(strength, &constants));
        }
    }
}
