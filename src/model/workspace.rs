//! Beaker, tools and magnifier shared by both solution screens.
//!
//! A workspace observes a router's selected kind and routed pH; it never
//! touches the solutions themselves. Both [`SolutionsModel`] and
//! [`CustomSolutionModel`] own one next to their router.
//!
//! [`SolutionsModel`]: super::SolutionsModel
//! [`CustomSolutionModel`]: super::CustomSolutionModel

use std::rc::Rc;

use glam::Vec2;

use crate::config::Parameters;
use crate::geometry::Beaker;
use crate::magnifier::{LayerChange, Magnifier, ViewMode};
use crate::reactive::ReactiveValue;
use crate::state::{SolutionSnapshot, SpeciesReading};
use crate::tools::{ConcentrationGraph, ConductivityTester, PhMeter, PhPaper, ToolMode};

use super::ActiveSolutionRouter;

/// The measuring tools and display modes wired to one router.
pub struct Workspace {
    beaker: Beaker,
    view_mode: ReactiveValue<ViewMode>,
    tool_mode: ReactiveValue<ToolMode>,
    ph_meter: PhMeter,
    ph_paper: PhPaper,
    conductivity: ConductivityTester,
    graph: ConcentrationGraph,
    magnifier: Magnifier,
    molecule_changes: Vec<LayerChange>,
}

impl Workspace {
    /// Wire every tool to `router`. `seed` fixes molecule placement.
    pub fn new(params: &Parameters, router: &ActiveSolutionRouter, seed: Option<u64>) -> Self {
        let beaker = Beaker::from_parameters(&params.beaker);
        let registry = router.registry();
        let view_mode = ReactiveValue::new(ViewMode::default());
        let tool_mode = ReactiveValue::new(ToolMode::default());

        let ph_meter = PhMeter::new(beaker, &params.ph_meter, router.ph_value());
        let ph_paper = PhPaper::new(
            beaker,
            &params.ph_paper,
            router.selected_kind_value(),
            router.ph_value(),
        );
        let conductivity = ConductivityTester::new(
            beaker,
            &params.conductivity,
            &params.chemistry,
            router.ph_value(),
        );
        let graph = ConcentrationGraph::new(
            beaker,
            Rc::clone(registry),
            router.selected_kind_value(),
            router.ph_value(),
        );
        let magnifier = match seed {
            Some(seed) => Magnifier::with_seed(
                beaker,
                &params.magnifier,
                Rc::clone(registry),
                router.selected_kind_value(),
                view_mode.read_only(),
                tool_mode.read_only(),
                seed,
            ),
            None => Magnifier::new(
                beaker,
                &params.magnifier,
                Rc::clone(registry),
                router.selected_kind_value(),
                view_mode.read_only(),
                tool_mode.read_only(),
            ),
        };

        log::debug!(
            "workspace wired: beaker {}x{} at ({}, {})",
            beaker.width(),
            beaker.height(),
            beaker.position.x,
            beaker.position.y
        );

        let mut workspace = Self {
            beaker,
            view_mode,
            tool_mode,
            ph_meter,
            ph_paper,
            conductivity,
            graph,
            magnifier,
            molecule_changes: Vec::new(),
        };
        workspace.refresh_magnifier();
        workspace
    }

    pub fn beaker(&self) -> &Beaker {
        &self.beaker
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.get()
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.tool_mode.get()
    }

    pub fn ph_meter(&self) -> &PhMeter {
        &self.ph_meter
    }

    pub fn ph_paper(&self) -> &PhPaper {
        &self.ph_paper
    }

    pub fn ph_paper_mut(&mut self) -> &mut PhPaper {
        &mut self.ph_paper
    }

    pub fn conductivity(&self) -> &ConductivityTester {
        &self.conductivity
    }

    pub fn graph(&self) -> &ConcentrationGraph {
        &self.graph
    }

    pub fn magnifier(&self) -> &Magnifier {
        &self.magnifier
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode.set(mode) {
            self.refresh_magnifier();
        }
    }

    pub fn set_tool_mode(&mut self, mode: ToolMode) {
        if self.tool_mode.set(mode) {
            self.refresh_magnifier();
        }
    }

    pub fn set_show_solvent(&mut self, show: bool) {
        self.magnifier.set_show_solvent(show);
        self.refresh_magnifier();
    }

    /// Advance time-driven behavior by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.ph_paper.advance(dt);
    }

    /// Molecule visibility flips since the last call.
    pub fn take_molecule_changes(&mut self) -> Vec<LayerChange> {
        std::mem::take(&mut self.molecule_changes)
    }

    /// Bring the magnifier up to date and queue its changes.
    pub fn refresh_magnifier(&mut self) {
        let changes = self.magnifier.refresh();
        self.molecule_changes.extend(changes);
    }

    /// Restore modes and tools. Call after the router has been reset.
    pub fn reset(&mut self) {
        self.view_mode.reset();
        self.tool_mode.reset();
        self.ph_meter.reset();
        self.ph_paper.reset();
        self.conductivity.reset();
        let changes = self.magnifier.reset();
        self.molecule_changes.extend(changes);
    }

    /// Current reading of every tool for the router's selected solution.
    pub fn snapshot(&self, router: &ActiveSolutionRouter) -> SolutionSnapshot {
        let solution = router.active();
        let concentrations = solution.concentrations();
        let species = solution
            .species()
            .iter()
            .map(|&species| SpeciesReading {
                species,
                concentration: concentrations.of(species),
                molecules: self.magnifier.layer(species).count(),
            })
            .collect();

        SolutionSnapshot {
            kind: solution.kind(),
            ph: router.ph(),
            concentration: solution.concentration(),
            strength: solution.strength(),
            species,
            meter_reading: self.ph_meter.reading(),
            brightness: self.conductivity.brightness(),
            lit_brightness: self.conductivity.lit_brightness(),
            indicator_height: self.ph_paper.indicator_height(),
            paper_position: self.ph_paper.position(),
        }
    }

    /// Drop the paper straight down to the bottom of the beaker.
    pub fn dip_ph_paper(&mut self) {
        let x = self.ph_paper.position().x;
        self.ph_paper.update_position(Vec2::new(x, self.beaker.bottom()));
    }

    /// Lower the meter probe and both conductivity probes to the bottom of their range.
    pub fn dip_probes(&mut self) {
        self.ph_meter.move_to(self.ph_meter.drag_range().1);
        let depth = self.conductivity.drag_range().1;
        self.conductivity.move_positive_probe(depth);
        self.conductivity.move_negative_probe(depth);
    }
}
