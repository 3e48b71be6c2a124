//! Magnifying glass showing the molecules in solution.
//!
//! The magnifier is visible only in the molecules view, and never together
//! with the conductivity tester (the lens would hide the bulb circuit).
//! Its layers are refreshed only while visible; each layer remembers the
//! count it last showed, so the first refresh after it reappears emits the
//! whole accumulated change.

mod molecules;

pub use molecules::{
    concentration_from_slider, slider_value, MoleculeCountScaler, MoleculeLayer, VisibilityDiff,
};

use std::rc::Rc;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::chemistry::{Species, SolutionKind, SolutionRegistry};
use crate::config::MagnifierParameters;
use crate::geometry::Beaker;
use crate::reactive::{ObserverId, ReactiveValue, ReadOnlyValue};
use crate::tools::ToolMode;

/// How the beaker contents are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Molecules,
    Equilibrium,
    Liquid,
}

/// Whether the magnifier is shown for the given modes.
pub fn is_magnifier_visible(view: ViewMode, tool: ToolMode) -> bool {
    view == ViewMode::Molecules && tool != ToolMode::Conductivity
}

/// One layer's visibility change produced by a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerChange {
    pub species: Species,
    pub diff: VisibilityDiff,
}

/// Magnifier model: lens geometry and one molecule layer per species.
pub struct Magnifier {
    radius: f32,
    center: Vec2,
    scaler: MoleculeCountScaler,
    layers: Vec<MoleculeLayer>,
    registry: Rc<SolutionRegistry>,
    selected: ReadOnlyValue<SolutionKind>,
    view_mode: ReadOnlyValue<ViewMode>,
    tool_mode: ReadOnlyValue<ToolMode>,
    visible: ReactiveValue<bool>,
    show_solvent: bool,
    default_show_solvent: bool,
    observers: [ObserverId; 2],
}

impl Magnifier {
    /// Create a magnifier with molecule positions drawn from entropy.
    pub fn new(
        beaker: Beaker,
        params: &MagnifierParameters,
        registry: Rc<SolutionRegistry>,
        selected: ReadOnlyValue<SolutionKind>,
        view_mode: ReadOnlyValue<ViewMode>,
        tool_mode: ReadOnlyValue<ToolMode>,
    ) -> Self {
        Self::with_rng(
            beaker,
            params,
            registry,
            selected,
            view_mode,
            tool_mode,
            &mut StdRng::from_entropy(),
        )
    }

    /// Create a magnifier with reproducible molecule positions.
    pub fn with_seed(
        beaker: Beaker,
        params: &MagnifierParameters,
        registry: Rc<SolutionRegistry>,
        selected: ReadOnlyValue<SolutionKind>,
        view_mode: ReadOnlyValue<ViewMode>,
        tool_mode: ReadOnlyValue<ToolMode>,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            beaker,
            params,
            registry,
            selected,
            view_mode,
            tool_mode,
            &mut StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        beaker: Beaker,
        params: &MagnifierParameters,
        registry: Rc<SolutionRegistry>,
        selected: ReadOnlyValue<SolutionKind>,
        view_mode: ReadOnlyValue<ViewMode>,
        tool_mode: ReadOnlyValue<ToolMode>,
        rng: &mut StdRng,
    ) -> Self {
        let radius = beaker.height() / 2.15;
        let layers = Species::ALL
            .iter()
            .map(|&species| {
                let mut layer = MoleculeLayer::new(species, params.max_molecules);
                layer.scatter(radius, rng);
                layer
            })
            .collect();

        let visible = ReactiveValue::new(is_magnifier_visible(view_mode.get(), tool_mode.get()));
        let observers = {
            let (on_view, tool) = (visible.clone(), tool_mode.clone());
            let view_observer = view_mode.subscribe(move |view, _| {
                on_view.set(is_magnifier_visible(*view, tool.get()));
            });
            let (on_tool, view) = (visible.clone(), view_mode.clone());
            let tool_observer = tool_mode.subscribe(move |tool, _| {
                on_tool.set(is_magnifier_visible(view.get(), *tool));
            });
            [view_observer, tool_observer]
        };

        Self {
            radius,
            center: beaker.position + Vec2::new(0.0, -beaker.height() / 2.0),
            scaler: MoleculeCountScaler::new(params),
            layers,
            registry,
            selected,
            view_mode,
            tool_mode,
            visible,
            show_solvent: params.show_solvent,
            default_show_solvent: params.show_solvent,
            observers,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Lens center, half way down the beaker.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn visible_value(&self) -> ReadOnlyValue<bool> {
        self.visible.read_only()
    }

    pub fn shows_solvent(&self) -> bool {
        self.show_solvent
    }

    /// Show or hide the water molecules. Takes effect on the next refresh.
    pub fn set_show_solvent(&mut self, show: bool) {
        self.show_solvent = show;
    }

    pub fn scaler(&self) -> &MoleculeCountScaler {
        &self.scaler
    }

    pub fn layers(&self) -> &[MoleculeLayer] {
        &self.layers
    }

    pub fn layer(&self, species: Species) -> &MoleculeLayer {
        &self.layers[species.index()]
    }

    /// Count each layer should show for the selected solution.
    pub fn target_count(&self, species: Species) -> usize {
        if species == Species::H2O && !self.show_solvent {
            return 0;
        }
        let concentration = self
            .registry
            .try_get(self.selected.get())
            .ok()
            .and_then(|solution| solution.concentration_of(species))
            .unwrap_or(0.0);
        self.scaler.count(concentration)
    }

    /// Bring every layer up to date with the selected solution.
    ///
    /// Returns the visibility flips applied, or nothing while hidden.
    pub fn refresh(&mut self) -> Vec<LayerChange> {
        if !self.visible.get() {
            return Vec::new();
        }
        let targets: Vec<usize> = Species::ALL
            .iter()
            .map(|&species| self.target_count(species))
            .collect();

        self.layers
            .iter_mut()
            .zip(targets)
            .filter_map(|(layer, target)| {
                layer.set_count(target).map(|diff| LayerChange {
                    species: layer.species(),
                    diff,
                })
            })
            .collect()
    }

    /// Restore the solvent toggle and bring the layers up to date.
    ///
    /// Layers keep the count they last showed, so the returned changes carry
    /// a view from what it currently draws to the reset state.
    pub fn reset(&mut self) -> Vec<LayerChange> {
        self.show_solvent = self.default_show_solvent;
        self.refresh()
    }
}

impl Drop for Magnifier {
    fn drop(&mut self) {
        self.view_mode.unsubscribe(self.observers[0]);
        self.tool_mode.unsubscribe(self.observers[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChemistryParameters;

    struct Fixture {
        kind: ReactiveValue<SolutionKind>,
        view: ReactiveValue<ViewMode>,
        tool: ReactiveValue<ToolMode>,
        magnifier: Magnifier,
    }

    fn fixture(kind: SolutionKind) -> Fixture {
        let registry = Rc::new(SolutionRegistry::general(&ChemistryParameters::default()));
        let kind = ReactiveValue::new(kind);
        let view = ReactiveValue::new(ViewMode::Molecules);
        let tool = ReactiveValue::new(ToolMode::PhMeter);
        let magnifier = Magnifier::with_seed(
            Beaker::default(),
            &MagnifierParameters::default(),
            registry,
            kind.read_only(),
            view.read_only(),
            tool.read_only(),
            42,
        );
        Fixture {
            kind,
            view,
            tool,
            magnifier,
        }
    }

    #[test]
    fn test_visibility_rule() {
        assert!(is_magnifier_visible(ViewMode::Molecules, ToolMode::PhPaper));
        assert!(!is_magnifier_visible(ViewMode::Molecules, ToolMode::Conductivity));
        assert!(!is_magnifier_visible(ViewMode::Liquid, ToolMode::PhMeter));
    }

    #[test]
    fn test_visibility_follows_modes() {
        let f = fixture(SolutionKind::Water);
        assert!(f.magnifier.is_visible());
        f.tool.set(ToolMode::Conductivity);
        assert!(!f.magnifier.is_visible());
        f.tool.set(ToolMode::PhPaper);
        f.view.set(ViewMode::Equilibrium);
        assert!(!f.magnifier.is_visible());
    }

    #[test]
    fn test_lens_geometry() {
        let f = fixture(SolutionKind::Water);
        assert!((f.magnifier.radius() - 270.0 / 2.15).abs() < 1e-3);
        assert_eq!(f.magnifier.center(), Vec2::new(230.0, 275.0));
    }

    #[test]
    fn test_water_refresh() {
        let mut f = fixture(SolutionKind::Water);
        assert!(!f.magnifier.shows_solvent());
        let changes = f.magnifier.refresh();
        let species: Vec<_> = changes.iter().map(|change| change.species).collect();
        assert_eq!(species, vec![Species::H3O, Species::OH]);
        assert_eq!(f.magnifier.layer(Species::H3O).count(), 2);
        assert_eq!(f.magnifier.layer(Species::H2O).count(), 0);
        assert_eq!(f.magnifier.layer(Species::HA).count(), 0);
        assert!(f.magnifier.refresh().is_empty());
    }

    #[test]
    fn test_switch_hides_missing_species() {
        let mut f = fixture(SolutionKind::StrongAcid);
        f.magnifier.refresh();
        assert!(f.magnifier.layer(Species::A).count() > 0);

        f.kind.set(SolutionKind::StrongBase);
        let changes = f.magnifier.refresh();
        let a = changes
            .iter()
            .find(|change| change.species == Species::A)
            .unwrap();
        assert!(!a.diff.visible);
        assert_eq!(f.magnifier.layer(Species::A).count(), 0);
        assert!(f.magnifier.layer(Species::M).count() > 0);
    }

    #[test]
    fn test_hidden_magnifier_defers_changes() {
        let mut f = fixture(SolutionKind::Water);
        f.magnifier.refresh();
        f.view.set(ViewMode::Liquid);
        f.kind.set(SolutionKind::StrongAcid);
        assert!(f.magnifier.refresh().is_empty());
        assert_eq!(f.magnifier.layer(Species::A).count(), 0);

        f.view.set(ViewMode::Molecules);
        let changes = f.magnifier.refresh();
        assert!(changes.iter().any(|change| change.species == Species::A));
    }

    #[test]
    fn test_solvent_toggle() {
        let mut f = fixture(SolutionKind::Water);
        f.magnifier.refresh();
        f.magnifier.set_show_solvent(true);
        f.magnifier.refresh();
        assert_eq!(f.magnifier.layer(Species::H2O).count(), 50);

        f.magnifier.set_show_solvent(false);
        f.magnifier.refresh();
        assert_eq!(f.magnifier.layer(Species::H2O).count(), 0);
    }

    #[test]
    fn test_reset_emits_changes_back_to_default() {
        let mut f = fixture(SolutionKind::StrongAcid);
        f.magnifier.set_show_solvent(true);
        f.magnifier.refresh();
        assert!(f.magnifier.layer(Species::A).count() > 0);

        f.kind.set(SolutionKind::Water);
        let changes = f.magnifier.reset();
        let hidden: Vec<_> = changes
            .iter()
            .filter(|change| !change.diff.visible)
            .map(|change| change.species)
            .collect();
        assert!(hidden.contains(&Species::A));
        assert!(hidden.contains(&Species::H2O));
        assert_eq!(f.magnifier.layer(Species::A).count(), 0);
        assert_eq!(f.magnifier.layer(Species::H2O).count(), 0);
        assert!(!f.magnifier.shows_solvent());
    }

    #[test]
    fn test_drop_releases_observers() {
        let f = fixture(SolutionKind::Water);
        let Fixture { view, tool, magnifier, .. } = f;
        drop(magnifier);
        assert_eq!(view.observer_count(), 0);
        assert_eq!(tool.observer_count(), 0);
    }
}
