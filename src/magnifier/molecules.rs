//! Molecule populations shown inside the magnifier.
//!
//! Concentrations span ten orders of magnitude, so the visible population
//! grows logarithmically:
//!
//! ```text
//! count(c) = round(base_dots · base_factor^log10(c / base_c))
//! base_factor = (max / base_dots)^(ln 10 / ln(1 / base_c))
//! ```
//!
//! With the defaults, `base_c` (1e-7, [H3O+] of pure water) shows 2
//! molecules and 1 mol/L reaches the cap of 50.

use std::ops::Range;

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::chemistry::Species;
use crate::config::MagnifierParameters;

/// Maps concentrations to molecule counts.
#[derive(Debug, Clone, Copy)]
pub struct MoleculeCountScaler {
    base_dots: usize,
    max_molecules: usize,
    base_concentration: f64,
    base_factor: f64,
}

impl MoleculeCountScaler {
    pub fn new(params: &MagnifierParameters) -> Self {
        let base_factor = (params.max_molecules as f64 / params.base_dots as f64)
            .powf(std::f64::consts::LN_10 / (1.0 / params.base_concentration).ln());
        Self {
            base_dots: params.base_dots,
            max_molecules: params.max_molecules,
            base_concentration: params.base_concentration,
            base_factor,
        }
    }

    pub fn max_molecules(&self) -> usize {
        self.max_molecules
    }

    /// Number of molecules shown for `concentration`, capped at the maximum.
    ///
    /// Zero, negative and NaN concentrations show nothing.
    pub fn count(&self, concentration: f64) -> usize {
        if concentration.is_nan() || concentration <= 0.0 {
            return 0;
        }
        let raise = (concentration / self.base_concentration).ln() / std::f64::consts::LN_10;
        let count = (self.base_dots as f64 * self.base_factor.powf(raise)).round();
        if count >= self.max_molecules as f64 {
            self.max_molecules
        } else {
            count as usize
        }
    }

    /// Entries that must flip to go from `previous` to `new` visible molecules.
    pub fn diff(previous: usize, new: usize) -> VisibilityDiff {
        VisibilityDiff {
            from: previous.min(new),
            to: previous.max(new),
            visible: new > previous,
        }
    }
}

/// Half-open index range `[from, to)` whose visibility becomes `visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibilityDiff {
    pub from: usize,
    pub to: usize,
    pub visible: bool,
}

impl VisibilityDiff {
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// Fixed pool of molecules of one species; the first `count` are visible.
#[derive(Debug, Clone)]
pub struct MoleculeLayer {
    species: Species,
    count: usize,
    visible: Vec<bool>,
    positions: Vec<Vec2>,
}

impl MoleculeLayer {
    /// Pool of `capacity` hidden molecules.
    pub fn new(species: Species, capacity: usize) -> Self {
        Self {
            species,
            count: 0,
            visible: vec![false; capacity],
            positions: vec![Vec2::ZERO; capacity],
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// Number of visible molecules.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.visible.len()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Offsets from the magnifier center of every pooled molecule.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Show exactly `count` molecules, flipping only the changed entries.
    ///
    /// Returns `None` when the count is unchanged.
    pub fn set_count(&mut self, count: usize) -> Option<VisibilityDiff> {
        let count = count.min(self.capacity());
        if count == self.count {
            return None;
        }
        let diff = MoleculeCountScaler::diff(self.count, count);
        for visible in &mut self.visible[diff.range()] {
            *visible = diff.visible;
        }
        self.count = count;
        Some(diff)
    }

    /// Place every molecule uniformly in angle and radius inside `radius`.
    pub fn scatter<R: Rng>(&mut self, radius: f32, rng: &mut R) {
        for position in &mut self.positions {
            let r = radius * rng.gen::<f32>();
            let angle = std::f32::consts::TAU * rng.gen::<f32>();
            *position = Vec2::new(r * angle.sin(), r * angle.cos());
        }
    }
}

/// Slider position for a concentration (log10).
pub fn slider_value(concentration: f64) -> f64 {
    concentration.log10()
}

/// Concentration for a slider position, rounded to 10 decimal places.
pub fn concentration_from_slider(value: f64) -> f64 {
    let concentration = 10f64.powf(value);
    (concentration * 1e10).round() / 1e10
}
