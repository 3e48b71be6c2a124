//! Custom solution mode: the user composes a solute from toggles and sliders.
//!
//! Water is not available. Acid/base and weak/strong toggles pick one of the
//! four solute kinds, and a single concentration (and, for weak kinds, a
//! single strength) is shared by whichever kind is selected. The beaker,
//! tools and magnifier are the same [`Workspace`] the general screen uses.

use std::rc::Rc;

use crate::chemistry::{ChemistryError, ChemistryResult, Quantity, SolutionKind, SolutionRegistry};
use crate::config::{ChemistryParameters, Parameters};
use crate::magnifier::{LayerChange, ViewMode};
use crate::reactive::{ReactiveValue, ReadOnlyValue};
use crate::state::SolutionSnapshot;
use crate::tools::ToolMode;

use super::{ActiveSolutionRouter, Workspace};

/// Custom solution controls routed onto the four solute models.
pub struct CustomSolutionModel {
    constants: ChemistryParameters,
    router: ActiveSolutionRouter,
    workspace: Workspace,
    is_acid: ReactiveValue<bool>,
    is_weak: ReactiveValue<bool>,
    concentration: ReactiveValue<f64>,
    strength: ReactiveValue<f64>,
}

impl CustomSolutionModel {
    /// Start with a weak acid at the default concentration and strength.
    pub fn new(params: &Parameters) -> ChemistryResult<Self> {
        Self::build(params, None)
    }

    /// Like [`new`](Self::new) with reproducible molecule placement.
    pub fn with_seed(params: &Parameters, seed: u64) -> ChemistryResult<Self> {
        Self::build(params, Some(seed))
    }

    fn build(params: &Parameters, seed: Option<u64>) -> ChemistryResult<Self> {
        params.validate()?;

        let constants = &params.chemistry;
        let registry = Rc::new(SolutionRegistry::custom(constants));
        let router = ActiveSolutionRouter::new(registry, SolutionKind::WeakAcid)?;
        let workspace = Workspace::new(params, &router, seed);
        log::info!("custom solution model ready ({} solutes)", router.registry().len());

        let mut model = Self {
            constants: *constants,
            router,
            workspace,
            is_acid: ReactiveValue::new(true),
            is_weak: ReactiveValue::new(true),
            concentration: ReactiveValue::new(constants.concentration_default),
            strength: ReactiveValue::new(constants.weak_strength_default),
        };
        model.apply_inputs()?;
        Ok(model)
    }

    pub fn router(&self) -> &ActiveSolutionRouter {
        &self.router
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Tools and modes, for dragging the paper and probes.
    pub fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub fn selected_kind(&self) -> SolutionKind {
        self.router.selected_kind()
    }

    pub fn ph(&self) -> f64 {
        self.router.ph()
    }

    pub fn is_acid(&self) -> bool {
        self.is_acid.get()
    }

    pub fn is_weak(&self) -> bool {
        self.is_weak.get()
    }

    pub fn concentration(&self) -> f64 {
        self.concentration.get()
    }

    /// Strength applied while a weak kind is selected.
    pub fn strength(&self) -> f64 {
        self.strength.get()
    }

    pub fn is_acid_value(&self) -> ReadOnlyValue<bool> {
        self.is_acid.read_only()
    }

    pub fn is_weak_value(&self) -> ReadOnlyValue<bool> {
        self.is_weak.read_only()
    }

    pub fn concentration_value(&self) -> ReadOnlyValue<f64> {
        self.concentration.read_only()
    }

    pub fn strength_value(&self) -> ReadOnlyValue<f64> {
        self.strength.read_only()
    }

    pub fn set_is_acid(&mut self, is_acid: bool) -> ChemistryResult<()> {
        if self.is_acid.set(is_acid) {
            self.apply_inputs()?;
        }
        Ok(())
    }

    pub fn set_is_weak(&mut self, is_weak: bool) -> ChemistryResult<()> {
        if self.is_weak.set(is_weak) {
            self.apply_inputs()?;
        }
        Ok(())
    }

    pub fn set_concentration(&mut self, concentration: f64) -> ChemistryResult<()> {
        if !self.constants.is_valid_concentration(concentration) {
            return Err(self.violation(
                Quantity::Concentration,
                concentration,
                format!(
                    "[{:e}, {:e}] mol/L",
                    self.constants.concentration_min, self.constants.concentration_max
                ),
            ));
        }
        if self.concentration.set(concentration) {
            self.apply_inputs()?;
        }
        Ok(())
    }

    /// Set the weak strength. Accepted while a strong kind is selected and
    /// applied once a weak kind is chosen.
    pub fn set_strength(&mut self, strength: f64) -> ChemistryResult<()> {
        if !self.constants.is_weak_strength(strength) {
            return Err(self.violation(
                Quantity::Strength,
                strength,
                format!(
                    "weak range ({:e}, {:e}]",
                    self.constants.weak_strength_min, self.constants.weak_strength_max
                ),
            ));
        }
        if self.strength.set(strength) {
            self.apply_inputs()?;
        }
        Ok(())
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.workspace.set_view_mode(mode);
    }

    pub fn set_tool_mode(&mut self, mode: ToolMode) {
        self.workspace.set_tool_mode(mode);
    }

    pub fn set_show_solvent(&mut self, show: bool) {
        self.workspace.set_show_solvent(show);
    }

    /// Advance time-driven behavior by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.workspace.step(dt);
    }

    /// Molecule visibility flips since the last call.
    pub fn take_molecule_changes(&mut self) -> Vec<LayerChange> {
        self.workspace.take_molecule_changes()
    }

    pub fn snapshot(&self) -> SolutionSnapshot {
        self.workspace.snapshot(&self.router)
    }

    /// Restore every control, every solute model and every tool.
    pub fn reset(&mut self) -> ChemistryResult<()> {
        self.is_acid.reset();
        self.is_weak.reset();
        self.concentration.reset();
        self.strength.reset();
        self.router.reset();
        self.workspace.reset();
        self.apply_inputs()
    }

    /// Push the controls into the selected model, then route to it.
    fn apply_inputs(&mut self) -> ChemistryResult<()> {
        let kind = SolutionKind::from_toggles(self.is_acid.get(), self.is_weak.get());
        let solution = self.router.registry().try_get(kind)?;
        solution.set_concentration(self.concentration.get())?;
        if kind.is_weak() {
            solution.set_strength(self.strength.get())?;
        }
        self.router.set_kind(kind)?;
        self.router.notify_strength_or_concentration_changed();
        self.workspace.refresh_magnifier();
        Ok(())
    }

    fn violation(&self, quantity: Quantity, value: f64, expected: String) -> ChemistryError {
        log::warn!("rejected custom {} {:e}", quantity, value);
        ChemistryError::DomainViolation {
            kind: self.router.selected_kind(),
            quantity,
            value,
            expected,
        }
    }
}
