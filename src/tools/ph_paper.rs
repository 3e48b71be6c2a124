//! pH paper: an indicator strip that colors while dipped in solution.
//!
//! Origin is the bottom-center of the paper. The colored portion (indicator)
//! grows upward from the bottom and never shrinks while the color is valid:
//! pulling the paper out keeps its color. Selecting another solution or any
//! pH change invalidates the color, so the indicator restarts at 0 and is
//! immediately recomputed for the paper's current depth.
//!
//! While not dragged, a fully submerged paper floats up at constant speed
//! until only part of it remains below the surface.

use glam::Vec2;

use crate::chemistry::SolutionKind;
use crate::config::PhPaperParameters;
use crate::geometry::{Beaker, Bounds};
use crate::reactive::{ObserverId, ReactiveValue, ReadOnlyValue};

/// Immutable geometry needed to recompute the indicator.
#[derive(Debug, Clone, Copy)]
struct IndicatorRule {
    beaker: Beaker,
    paper_size: Vec2,
    margin: f32,
}

impl IndicatorRule {
    fn paper_bounds(&self, position: Vec2) -> Bounds {
        Bounds::from_bottom_center(position, self.paper_size)
    }

    fn is_immersed(&self, position: Vec2) -> bool {
        self.paper_bounds(position).intersects(&self.beaker.bounds())
    }

    /// Grow the indicator to the immersion depth; never shrinks it.
    fn update(&self, position: Vec2, indicator_height: &ReactiveValue<f32>) {
        if self.is_immersed(position) {
            let current = indicator_height.get();
            let wetted = position.y - self.beaker.top() + self.margin;
            indicator_height.set(wetted.max(current).min(self.paper_size.y));
        }
    }
}

/// Model of the pH paper.
pub struct PhPaper {
    rule: IndicatorRule,
    params: PhPaperParameters,
    drag_bounds: Bounds,
    position: ReactiveValue<Vec2>,
    indicator_height: ReactiveValue<f32>,
    ph: ReadOnlyValue<f64>,
    selected: ReadOnlyValue<SolutionKind>,
    kind_observer: ObserverId,
    ph_observer: ObserverId,
    dragging: bool,
    floating: bool,
}

impl PhPaper {
    /// Create the paper beside the beaker and watch the selected solution and its pH.
    pub fn new(
        beaker: Beaker,
        params: &PhPaperParameters,
        selected: ReadOnlyValue<SolutionKind>,
        ph: ReadOnlyValue<f64>,
    ) -> Self {
        let rule = IndicatorRule {
            beaker,
            paper_size: Vec2::new(params.width, params.height),
            margin: params.immersion_margin,
        };
        let drag_bounds = Bounds::new(
            beaker.left() + params.width / 2.0,
            beaker.top() - params.drag_headroom,
            beaker.right() - params.width / 2.0,
            beaker.bottom(),
        );
        let position = ReactiveValue::new(Vec2::new(
            beaker.right() + params.start_offset_x,
            beaker.top() + params.start_offset_y,
        ));
        let indicator_height = ReactiveValue::new(0.0_f32);

        // Color restarts whenever the solution or its pH changes
        let reset_indicator = {
            let position = position.clone();
            let indicator_height = indicator_height.clone();
            move || {
                indicator_height.set(0.0);
                rule.update(position.get(), &indicator_height);
            }
        };
        let on_kind = reset_indicator.clone();
        let kind_observer = selected.subscribe(move |_, _| on_kind());
        let ph_observer = ph.subscribe(move |_, _| reset_indicator());

        {
            let indicator_height = indicator_height.clone();
            position.subscribe(move |new, _| rule.update(*new, &indicator_height));
        }

        Self {
            rule,
            params: *params,
            drag_bounds,
            position,
            indicator_height,
            ph,
            selected,
            kind_observer,
            ph_observer,
            dragging: false,
            floating: false,
        }
    }

    /// Bottom-center of the paper.
    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    pub fn position_value(&self) -> ReadOnlyValue<Vec2> {
        self.position.read_only()
    }

    /// Height of the colored portion, in `[0, paper height]`.
    pub fn indicator_height(&self) -> f32 {
        self.indicator_height.get()
    }

    pub fn indicator_height_value(&self) -> ReadOnlyValue<f32> {
        self.indicator_height.read_only()
    }

    /// pH the indicator color represents.
    pub fn ph(&self) -> f64 {
        self.ph.get()
    }

    pub fn size(&self) -> Vec2 {
        self.rule.paper_size
    }

    /// y of the top edge.
    pub fn top(&self) -> f32 {
        self.position.get().y - self.rule.paper_size.y
    }

    pub fn bounds(&self) -> Bounds {
        self.rule.paper_bounds(self.position.get())
    }

    pub fn drag_bounds(&self) -> Bounds {
        self.drag_bounds
    }

    /// Whether any part of the paper is in the liquid.
    pub fn is_immersed(&self) -> bool {
        self.rule.is_immersed(self.position.get())
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the float animation is running.
    pub fn is_floating(&self) -> bool {
        self.floating
    }

    /// Move the paper, constrained to the drag bounds.
    pub fn update_position(&self, position: Vec2) {
        self.position.set(self.drag_bounds.clamp_point(position));
    }

    /// Begin a user drag; cancels floating.
    pub fn start_drag(&mut self) {
        self.dragging = true;
        self.floating = false;
    }

    /// Drag to `position`, constrained to the drag bounds.
    pub fn drag_to(&mut self, position: Vec2) {
        self.dragging = true;
        self.floating = false;
        self.update_position(position);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Advance the float animation by `dt` seconds (negative treated as 0).
    pub fn advance(&mut self, dt: f32) {
        if self.dragging {
            self.floating = false;
            return;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let position = self.position.get();
        let beaker_top = self.rule.beaker.top();
        let rest_y = beaker_top + self.params.float_depth_fraction * self.rule.paper_size.y;
        let fully_submerged = self.top() > beaker_top;

        if (self.floating && position.y > rest_y) || fully_submerged {
            if !self.floating {
                log::debug!("pH paper floating up from y={:.1}", position.y);
            }
            self.floating = true;
            let y = (position.y - dt * self.params.float_speed).max(rest_y);
            self.position.set(Vec2::new(position.x, y));
            if y <= rest_y {
                log::debug!("pH paper came to rest at y={:.1}", y);
                self.floating = false;
            }
        }
    }

    /// Dry paper back at its starting spot.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.floating = false;
        self.indicator_height.reset();
        self.position.reset();
    }
}

impl Drop for PhPaper {
    fn drop(&mut self) {
        self.selected.unsubscribe(self.kind_observer);
        self.ph.unsubscribe(self.ph_observer);
    }
}
