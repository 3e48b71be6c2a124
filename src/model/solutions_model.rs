//! Top-level model of the solutions workspace.
//!
//! Owns the five solutions (through the router), the beaker and every tool,
//! and is the only place where user input enters the system. Every mutator
//! validates first, so a rejected call changes nothing.

use std::rc::Rc;

use crate::chemistry::{AqueousSolution, ChemistryResult, SolutionKind, SolutionRegistry};
use crate::config::Parameters;
use crate::geometry::Beaker;
use crate::magnifier::{LayerChange, Magnifier, ViewMode};
use crate::reactive::ReadOnlyValue;
use crate::state::SolutionSnapshot;
use crate::tools::{ConcentrationGraph, ConductivityTester, PhMeter, PhPaper, ToolMode};

use super::{ActiveSolutionRouter, Workspace};

/// General-mode model: water and the four solutes.
pub struct SolutionsModel {
    params: Parameters,
    router: ActiveSolutionRouter,
    workspace: Workspace,
}

impl SolutionsModel {
    /// Build the workspace with water selected.
    pub fn new(params: &Parameters) -> ChemistryResult<Self> {
        Self::build(params, None)
    }

    /// Like [`new`](Self::new) with reproducible molecule placement.
    pub fn with_seed(params: &Parameters, seed: u64) -> ChemistryResult<Self> {
        Self::build(params, Some(seed))
    }

    fn build(params: &Parameters, seed: Option<u64>) -> ChemistryResult<Self> {
        params.validate()?;

        let registry = Rc::new(SolutionRegistry::general(&params.chemistry));
        let router = ActiveSolutionRouter::new(registry, SolutionKind::Water)?;
        let workspace = Workspace::new(params, &router, seed);
        log::info!("solutions model ready: {} solutions", router.registry().len());

        Ok(Self {
            params: params.clone(),
            router,
            workspace,
        })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn beaker(&self) -> &Beaker {
        self.workspace.beaker()
    }

    pub fn router(&self) -> &ActiveSolutionRouter {
        &self.router
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// The selected solution.
    pub fn solution(&self) -> &AqueousSolution {
        self.router.active()
    }

    pub fn solution_kind(&self) -> SolutionKind {
        self.router.selected_kind()
    }

    pub fn ph(&self) -> f64 {
        self.router.ph()
    }

    pub fn ph_value(&self) -> ReadOnlyValue<f64> {
        self.router.ph_value()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.workspace.view_mode()
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.workspace.tool_mode()
    }

    pub fn ph_meter(&self) -> &PhMeter {
        self.workspace.ph_meter()
    }

    pub fn ph_paper(&self) -> &PhPaper {
        self.workspace.ph_paper()
    }

    /// Mutable access for dragging and animating the paper.
    pub fn ph_paper_mut(&mut self) -> &mut PhPaper {
        self.workspace.ph_paper_mut()
    }

    pub fn conductivity(&self) -> &ConductivityTester {
        self.workspace.conductivity()
    }

    pub fn graph(&self) -> &ConcentrationGraph {
        self.workspace.graph()
    }

    pub fn magnifier(&self) -> &Magnifier {
        self.workspace.magnifier()
    }

    pub fn set_solution_kind(&mut self, kind: SolutionKind) -> ChemistryResult<()> {
        self.router.set_kind(kind)?;
        self.workspace.refresh_magnifier();
        Ok(())
    }

    /// Set the concentration of the selected solution.
    pub fn set_concentration(&mut self, concentration: f64) -> ChemistryResult<()> {
        self.router.active().set_concentration(concentration)?;
        self.router.notify_strength_or_concentration_changed();
        self.workspace.refresh_magnifier();
        Ok(())
    }

    /// Set the strength of the selected solution.
    pub fn set_strength(&mut self, strength: f64) -> ChemistryResult<()> {
        self.router.active().set_strength(strength)?;
        self.router.notify_strength_or_concentration_changed();
        self.workspace.refresh_magnifier();
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

    /// Restore every solution, tool and mode to its constructed state.
    pub fn reset(&mut self) {
        self.router.reset();
        self.workspace.reset();
        log::debug!("solutions model reset");
    }

    /// Current value of every derived quantity.
    pub fn snapshot(&self) -> SolutionSnapshot {
        self.workspace.snapshot(&self.router)
    }

    /// Drop the paper straight down to the bottom of the beaker.
    pub fn dip_ph_paper(&mut self) {
        self.workspace.dip_ph_paper();
    }

    /// Lower the meter probe and both conductivity probes to the bottom of their range.
    pub fn dip_probes(&mut self) {
        self.workspace.dip_probes();
    }
}
