//! Serializable read-out of every derived quantity.
//!
//! A snapshot is taken after the model has settled and holds plain values
//! only, so it can be printed, logged or compared in tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::chemistry::{SolutionKind, Species};

/// Concentration of one species in the selected solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesReading {
    pub species: Species,
    /// mol/L
    pub concentration: f64,
    /// Molecules visible in the magnifier
    pub molecules: usize,
}

/// Everything a view would display at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionSnapshot {
    pub kind: SolutionKind,
    pub ph: f64,
    /// Initial solute concentration; 0 for water
    pub concentration: f64,
    /// Ka or Kb; the strong sentinel for strong kinds, 0 for water
    pub strength: f64,
    /// Species in the solution's display order
    pub species: Vec<SpeciesReading>,
    /// `None` while the meter probe is out of the liquid
    pub meter_reading: Option<f64>,
    /// Bulb brightness with the circuit closed
    pub brightness: f64,
    /// Brightness actually shown, 0 with an open circuit
    pub lit_brightness: f64,
    pub indicator_height: f32,
    pub paper_position: Vec2,
}

impl SolutionSnapshot {
    /// Concentration of `species`, if the solution contains it.
    pub fn concentration_of(&self, species: Species) -> Option<f64> {
        self.species
            .iter()
            .find(|reading| reading.species == species)
            .map(|reading| reading.concentration)
    }

    /// Human-readable summary, one quantity per line.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("solution:      {}", self.kind)];
        lines.push(format!("pH:            {:.3}", self.ph));
        if self.kind != SolutionKind::Water {
            lines.push(format!("concentration: {:e} mol/L", self.concentration));
            lines.push(format!("strength:      {:e}", self.strength));
        }
        for reading in &self.species {
            lines.push(format!(
                "  [{:<5}] {:>12.4e} mol/L  ({} molecules)",
                reading.species.formula(),
                reading.concentration,
                reading.molecules
            ));
        }
        lines.push(match self.meter_reading {
            Some(ph) => format!("pH meter:      {:.2}", ph),
            None => "pH meter:      --".to_string(),
        });
        lines.push(format!(
            "bulb:          {:.3} (lit {:.3})",
            self.brightness, self.lit_brightness
        ));
        lines.push(format!(
            "pH paper:      indicator {:.1} at ({:.1}, {:.1})",
            self.indicator_height, self.paper_position.x, self.paper_position.y
        ));
        lines.join("\n")
    }
}
