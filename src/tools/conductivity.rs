//! Conductivity tester: a light bulb wired to two probes.
//!
//! The bulb lights only when both probe tips are in the liquid, closing the
//! circuit. Its brightness grows with distance of the pH from neutral, since
//! more ions in solution carry more current.

use glam::Vec2;

use crate::config::{ChemistryParameters, ConductivityParameters};
use crate::geometry::Beaker;
use crate::reactive::{ObserverId, ReactiveValue, ReadOnlyValue};

/// Bulb brightness in `[0, 1]` for a solution of pH `ph`.
///
/// Neutral water gives `neutral_brightness`; the extremes of the pH scale give 1.
pub fn brightness_for_ph(
    ph: f64,
    params: &ConductivityParameters,
    constants: &ChemistryParameters,
) -> f64 {
    let neutral = params.neutral_ph;
    let distance = if ph < neutral {
        (neutral - ph) / (neutral - constants.ph_min)
    } else {
        (ph - neutral) / (constants.ph_max - neutral)
    };
    let brightness = params.neutral_brightness + (1.0 - params.neutral_brightness) * distance;
    if brightness.is_nan() {
        return 0.0;
    }
    brightness.max(0.0).min(1.0)
}

/// Conductivity tester with independently movable probes.
pub struct ConductivityTester {
    beaker: Beaker,
    positive_probe: ReactiveValue<Vec2>,
    negative_probe: ReactiveValue<Vec2>,
    brightness: ReactiveValue<f64>,
    ph: ReadOnlyValue<f64>,
    ph_observer: ObserverId,
    min_y: f32,
    max_y: f32,
}

impl ConductivityTester {
    pub fn new(
        beaker: Beaker,
        params: &ConductivityParameters,
        constants: &ChemistryParameters,
        ph: ReadOnlyValue<f64>,
    ) -> Self {
        let y = beaker.top() + params.start_offset_y;
        let center = beaker.position.x;

        let brightness = ReactiveValue::new(brightness_for_ph(ph.get(), params, constants));
        let ph_observer = {
            let brightness = brightness.clone();
            let params = *params;
            let constants = *constants;
            ph.subscribe(move |new_ph, _| {
                brightness.set(brightness_for_ph(*new_ph, &params, &constants));
            })
        };

        Self {
            beaker,
            positive_probe: ReactiveValue::new(Vec2::new(center - params.probe_spacing, y)),
            negative_probe: ReactiveValue::new(Vec2::new(center + params.probe_spacing, y)),
            brightness,
            ph,
            ph_observer,
            min_y: beaker.top() + params.drag_min_offset,
            max_y: beaker.top() + params.drag_max_offset,
        }
    }

    /// Brightness the bulb would have with the circuit closed.
    pub fn brightness(&self) -> f64 {
        self.brightness.get()
    }

    pub fn brightness_value(&self) -> ReadOnlyValue<f64> {
        self.brightness.read_only()
    }

    pub fn positive_probe(&self) -> Vec2 {
        self.positive_probe.get()
    }

    pub fn negative_probe(&self) -> Vec2 {
        self.negative_probe.get()
    }

    pub fn positive_probe_value(&self) -> ReadOnlyValue<Vec2> {
        self.positive_probe.read_only()
    }

    pub fn negative_probe_value(&self) -> ReadOnlyValue<Vec2> {
        self.negative_probe.read_only()
    }

    pub fn drag_range(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    pub fn move_positive_probe(&self, y: f32) {
        self.move_probe(&self.positive_probe, y);
    }

    pub fn move_negative_probe(&self, y: f32) {
        self.move_probe(&self.negative_probe, y);
    }

    /// Whether both probe tips are in the liquid.
    pub fn is_circuit_closed(&self) -> bool {
        self.beaker.contains_point(self.positive_probe.get())
            && self.beaker.contains_point(self.negative_probe.get())
    }

    /// Actual bulb brightness: 0 with an open circuit.
    pub fn lit_brightness(&self) -> f64 {
        if self.is_circuit_closed() {
            self.brightness.get()
        } else {
            0.0
        }
    }

    /// Return the probes to their start positions. Brightness keeps following pH.
    pub fn reset(&self) {
        self.positive_probe.reset();
        self.negative_probe.reset();
    }

    fn move_probe(&self, probe: &ReactiveValue<Vec2>, y: f32) {
        let x = probe.get().x;
        probe.set(Vec2::new(x, y.max(self.min_y).min(self.max_y)));
    }
}

impl Drop for ConductivityTester {
    fn drop(&mut self) {
        self.ph.unsubscribe(self.ph_observer);
    }
}
