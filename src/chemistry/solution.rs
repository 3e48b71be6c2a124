//! Species concentration model of a single aqueous solution.

use super::solutions::{self, SpeciesConcentrations};
use super::{ChemistryError, ChemistryResult, Quantity, SolutionKind, Species};
use crate::config::ChemistryParameters;
use crate::reactive::{ReactiveValue, ReadOnlyValue};

/// One solution kind with its tunable strength and concentration.
///
/// Concentrations are recomputed on demand from the current inputs. The pH is
/// additionally published through an observable value, refreshed by every
/// accepted mutation, so the router can forward it.
///
/// # Example
/// ```
/// use acid_base_solutions::chemistry::{AqueousSolution, SolutionKind, Species};
/// use acid_base_solutions::config::ChemistryParameters;
///
/// let constants = ChemistryParameters::default();
/// let acid = AqueousSolution::new(SolutionKind::WeakAcid, &constants);
///
/// // Defaults: c = 1e-2 mol/L, Ka = 1e-7
/// assert!((acid.ph() - 4.5).abs() < 1e-2);
///
/// acid.set_concentration(0.1).unwrap();
/// assert!(acid.concentration_of(Species::HA).unwrap() > 0.09);
///
/// // Outside the weak range: rejected, previous value kept
/// assert!(acid.set_strength(1e3).is_err());
/// assert_eq!(acid.strength(), 1e-7);
/// ```
#[derive(Debug)]
pub struct AqueousSolution {
    kind: SolutionKind,
    constants: ChemistryParameters,
    strength: ReactiveValue<f64>,
    concentration: ReactiveValue<f64>,
    ph: ReactiveValue<f64>,
}

impl AqueousSolution {
    /// Create a solution with the default inputs of `kind`.
    pub fn new(kind: SolutionKind, constants: &ChemistryParameters) -> Self {
        let (strength, concentration) = match kind {
            SolutionKind::Water => (0.0, 0.0),
            SolutionKind::StrongAcid | SolutionKind::StrongBase => {
                (constants.strong_strength, constants.concentration_default)
            }
            SolutionKind::WeakAcid | SolutionKind::WeakBase => {
                (constants.weak_strength_default, constants.concentration_default)
            }
        };
        let ph = solutions::solve(kind, strength, concentration, constants).ph();

        Self {
            kind,
            constants: *constants,
            strength: ReactiveValue::new(strength),
            concentration: ReactiveValue::new(concentration),
            ph: ReactiveValue::new(ph),
        }
    }

    pub fn kind(&self) -> SolutionKind {
        self.kind
    }

    /// Species this solution exposes, in display order.
    pub fn species(&self) -> &'static [Species] {
        solutions::species_of(self.kind)
    }

    /// Current Ka/Kb (or the strong sentinel; 0 for water).
    pub fn strength(&self) -> f64 {
        self.strength.get()
    }

    /// Current initial solute concentration (0 for water).
    pub fn concentration(&self) -> f64 {
        self.concentration.get()
    }

    /// Observable strength.
    pub fn strength_value(&self) -> ReadOnlyValue<f64> {
        self.strength.read_only()
    }

    /// Observable concentration.
    pub fn concentration_value(&self) -> ReadOnlyValue<f64> {
        self.concentration.read_only()
    }

    /// Observable pH, refreshed after every accepted mutation.
    pub fn ph_value(&self) -> ReadOnlyValue<f64> {
        self.ph.read_only()
    }

    /// All concentrations at the current inputs.
    pub fn concentrations(&self) -> SpeciesConcentrations {
        solutions::solve(
            self.kind,
            self.strength.get(),
            self.concentration.get(),
            &self.constants,
        )
    }

    /// Concentration of `species`, or `None` if this solution does not contain it.
    pub fn concentration_of(&self, species: Species) -> Option<f64> {
        self.species()
            .contains(&species)
            .then(|| self.concentrations().of(species))
    }

    pub fn h3o_concentration(&self) -> f64 {
        self.concentrations().h3o
    }

    pub fn oh_concentration(&self) -> f64 {
        self.concentrations().oh
    }

    pub fn h2o_concentration(&self) -> f64 {
        self.concentrations().h2o
    }

    /// `-log10([H3O+])`, computed from the current inputs.
    pub fn ph(&self) -> f64 {
        self.concentrations().ph()
    }

    /// Whether this kind accepts `strength`.
    pub fn is_valid_strength(&self, strength: f64) -> bool {
        solutions::is_valid_strength(self.kind, strength, &self.constants)
    }

    /// Whether this kind accepts `concentration`. Water accepts none.
    pub fn is_valid_concentration(&self, concentration: f64) -> bool {
        self.kind != SolutionKind::Water && self.constants.is_valid_concentration(concentration)
    }

    /// Set Ka/Kb. Rejected values leave the solution untouched.
    pub fn set_strength(&self, strength: f64) -> ChemistryResult<()> {
        if self.kind == SolutionKind::Water {
            return Err(self.immutable(Quantity::Strength));
        }
        if !self.is_valid_strength(strength) {
            let expected = if self.kind.is_weak() {
                format!(
                    "weak range ({:e}, {:e}]",
                    self.constants.weak_strength_min, self.constants.weak_strength_max
                )
            } else {
                format!("strong range (> {:e})", self.constants.weak_strength_max)
            };
            return Err(self.violation(Quantity::Strength, strength, expected));
        }

        if self.strength.set(strength) {
            log::debug!("{} strength set to {:e}", self.kind, strength);
            self.refresh_ph();
        }
        Ok(())
    }

    /// Set the initial solute concentration. Rejected values leave the solution untouched.
    pub fn set_concentration(&self, concentration: f64) -> ChemistryResult<()> {
        if self.kind == SolutionKind::Water {
            return Err(self.immutable(Quantity::Concentration));
        }
        if !self.is_valid_concentration(concentration) {
            let expected = format!(
                "[{:e}, {:e}] mol/L",
                self.constants.concentration_min, self.constants.concentration_max
            );
            return Err(self.violation(Quantity::Concentration, concentration, expected));
        }

        if self.concentration.set(concentration) {
            log::debug!("{} concentration set to {:e}", self.kind, concentration);
            self.refresh_ph();
        }
        Ok(())
    }

    /// Restore the default strength and concentration.
    pub fn reset(&self) {
        self.strength.reset();
        self.concentration.reset();
        self.refresh_ph();
    }

    fn refresh_ph(&self) {
        self.ph.set(self.ph());
    }

    fn immutable(&self, quantity: Quantity) -> ChemistryError {
        log::warn!("rejected {} change on {}", quantity, self.kind);
        ChemistryError::ImmutableQuantity {
            kind: self.kind,
            quantity,
        }
    }

    fn violation(&self, quantity: Quantity, value: f64, expected: String) -> ChemistryError {
        log::warn!("rejected {} {:e} on {}", quantity, value, self.kind);
        ChemistryError::DomainViolation {
            kind: self.kind,
            quantity,
            value,
            expected,
        }
    }
}
