//! Bar graph of species concentrations on a log scale.

use std::rc::Rc;

use glam::Vec2;
use serde::Serialize;

use crate::chemistry::{Species, SolutionKind, SolutionRegistry};
use crate::geometry::Beaker;
use crate::reactive::{ObserverId, ReactiveValue, ReadOnlyValue};

/// Lowest concentration on the axis, as a power of ten.
const AXIS_MIN_EXPONENT: i32 = -8;
/// Number of labelled ticks, 1e-8 through 1e2.
const TICK_COUNT: usize = 11;

/// One bar of the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphBar {
    pub species: Species,
    /// mol/L
    pub concentration: f64,
    /// Bar height in view units
    pub height: f32,
}

#[derive(Debug, Clone, Copy)]
struct Axis {
    height: f32,
    tick_spacing: f32,
}

impl Axis {
    fn bar_height(&self, concentration: f64) -> f32 {
        if concentration.is_nan() || concentration <= 0.0 {
            return 0.0;
        }
        let decades = concentration.log10() - f64::from(AXIS_MIN_EXPONENT);
        let height = decades as f32 * self.tick_spacing;
        height.max(0.0).min(self.height)
    }

    fn bars(&self, registry: &SolutionRegistry, kind: SolutionKind) -> Vec<GraphBar> {
        let Ok(solution) = registry.try_get(kind) else {
            return Vec::new();
        };
        let concentrations = solution.concentrations();
        solution
            .species()
            .iter()
            .map(|&species| {
                let concentration = concentrations.of(species);
                GraphBar {
                    species,
                    concentration,
                    height: self.bar_height(concentration),
                }
            })
            .collect()
    }
}

/// Concentration graph drawn over the beaker.
pub struct ConcentrationGraph {
    width: f32,
    origin: Vec2,
    axis: Axis,
    bars: ReactiveValue<Vec<GraphBar>>,
    selected: ReadOnlyValue<SolutionKind>,
    ph: ReadOnlyValue<f64>,
    observers: [ObserverId; 2],
}

impl ConcentrationGraph {
    pub fn new(
        beaker: Beaker,
        registry: Rc<SolutionRegistry>,
        selected: ReadOnlyValue<SolutionKind>,
        ph: ReadOnlyValue<f64>,
    ) -> Self {
        let width = 0.5 * beaker.width();
        let height = 0.9 * beaker.height();
        let origin = beaker.position
            + Vec2::new(
                (width - beaker.width()) / 2.0,
                -(beaker.height() + height) / 2.0,
            );
        let axis = Axis {
            height,
            tick_spacing: height / (TICK_COUNT - 1) as f32 - 1.0,
        };
        let bars = ReactiveValue::new(axis.bars(&registry, selected.get()));

        // Every concentration change moves the pH, so kind and pH cover all updates
        let refresh: Rc<dyn Fn()> = {
            let bars = bars.clone();
            let selected = selected.clone();
            Rc::new(move || {
                bars.set(axis.bars(&registry, selected.get()));
            })
        };
        let on_kind = Rc::clone(&refresh);
        let observers = [
            selected.subscribe(move |_, _| on_kind()),
            ph.subscribe(move |_, _| refresh()),
        ];

        Self {
            width,
            origin,
            axis,
            bars,
            selected,
            ph,
            observers,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.axis.height
    }

    /// Upper-left corner.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Distance between adjacent decade ticks.
    pub fn tick_spacing(&self) -> f32 {
        self.axis.tick_spacing
    }

    /// Tick concentrations from the bottom of the axis up.
    pub fn ticks(&self) -> impl Iterator<Item = f64> {
        (0..TICK_COUNT as i32).map(|i| 10f64.powi(AXIS_MIN_EXPONENT + i))
    }

    /// Height of a bar for `concentration`, in `[0, height]`.
    pub fn bar_height(&self, concentration: f64) -> f32 {
        self.axis.bar_height(concentration)
    }

    /// Bars for the selected solution, in its species order.
    pub fn bars(&self) -> Vec<GraphBar> {
        self.bars.get()
    }

    pub fn bars_value(&self) -> ReadOnlyValue<Vec<GraphBar>> {
        self.bars.read_only()
    }
}

impl Drop for ConcentrationGraph {
    fn drop(&mut self) {
        self.selected.unsubscribe(self.observers[0]);
        self.ph.unsubscribe(self.observers[1]);
    }
}
