//! pH meter with a probe that moves vertically into the beaker.

use glam::Vec2;

use crate::config::PhMeterParameters;
use crate::geometry::Beaker;
use crate::reactive::{ReactiveValue, ReadOnlyValue};

/// pH meter. Reads the routed pH while its probe tip is in the liquid.
pub struct PhMeter {
    beaker: Beaker,
    tip: ReactiveValue<Vec2>,
    ph: ReadOnlyValue<f64>,
    min_y: f32,
    max_y: f32,
}

impl PhMeter {
    pub fn new(beaker: Beaker, params: &PhMeterParameters, ph: ReadOnlyValue<f64>) -> Self {
        let tip = Vec2::new(
            beaker.right() + params.start_offset_x,
            beaker.top() + params.start_offset_y,
        );
        Self {
            beaker,
            tip: ReactiveValue::new(tip),
            ph,
            min_y: beaker.top() + params.drag_min_offset,
            max_y: beaker.top() + params.drag_max_offset,
        }
    }

    /// Probe tip position.
    pub fn tip(&self) -> Vec2 {
        self.tip.get()
    }

    pub fn tip_value(&self) -> ReadOnlyValue<Vec2> {
        self.tip.read_only()
    }

    /// Vertical range the probe may be dragged over.
    pub fn drag_range(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    pub fn in_solution(&self) -> bool {
        self.beaker.contains_point(self.tip.get())
    }

    /// pH shown on the display, if the probe is in the liquid.
    pub fn reading(&self) -> Option<f64> {
        self.in_solution().then(|| self.ph.get())
    }

    /// Move the probe vertically, clamped to the drag range.
    pub fn move_to(&self, y: f32) {
        let x = self.tip.get().x;
        self.tip.set(Vec2::new(x, y.max(self.min_y).min(self.max_y)));
    }

    pub fn reset(&self) {
        self.tip.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter(ph: &ReactiveValue<f64>) -> PhMeter {
        PhMeter::new(Beaker::default(), &PhMeterParameters::default(), ph.read_only())
    }

    #[test]
    fn test_no_reading_out_of_solution() {
        let ph = ReactiveValue::new(7.0);
        let meter = meter(&ph);
        assert!(!meter.in_solution());
        assert_eq!(meter.reading(), None);
    }

    #[test]
    fn test_reading_follows_ph() {
        let ph = ReactiveValue::new(7.0);
        let meter = meter(&ph);
        meter.move_to(200.0);
        assert_eq!(meter.reading(), Some(7.0));
        ph.set(2.0);
        assert_eq!(meter.reading(), Some(2.0));
    }

    #[test]
    fn test_move_is_clamped() {
        let ph = ReactiveValue::new(7.0);
        let meter = meter(&ph);
        meter.move_to(10_000.0);
        assert_eq!(meter.tip().y, 140.0 + 70.0);
        meter.move_to(-10_000.0);
        assert_eq!(meter.tip().y, 140.0 - 15.0);
    }

    #[test]
    fn test_reset() {
        let ph = ReactiveValue::new(7.0);
        let meter = meter(&ph);
        let start = meter.tip();
        meter.move_to(190.0);
        meter.reset();
        assert_eq!(meter.tip(), start);
    }
}
