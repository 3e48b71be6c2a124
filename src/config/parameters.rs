//! Parameter structures for the solution model and its tools.
//!
//! Chemistry constants follow standard textbook values at 25 °C; layout
//! values are in view units with +y pointing down into the beaker.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

use crate::chemistry::{ChemistryError, ChemistryResult};

const PARAMETERS_FILE: &str = "data/parameters/simulation.json";

/// Top-level parameters container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Equilibrium constants and valid input domains
    pub chemistry: ChemistryParameters,
    /// Beaker placement
    pub beaker: BeakerParameters,
    /// pH paper geometry and float animation
    pub ph_paper: PhPaperParameters,
    /// pH meter probe placement
    pub ph_meter: PhMeterParameters,
    /// Conductivity tester brightness curve and probes
    pub conductivity: ConductivityParameters,
    /// Molecule population scale
    pub magnifier: MagnifierParameters,
}

impl Parameters {
    /// Load parameters from the default file, or use defaults if it doesn't exist
    pub fn load_or_default() -> Self {
        load_json_or_default(PARAMETERS_FILE, "simulation")
    }

    /// Load parameters from `simulation.json` inside a specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        load_json_or_default(dir.as_ref().join("simulation.json"), "simulation")
    }

    /// Check that every section is internally consistent.
    pub fn validate(&self) -> ChemistryResult<()> {
        self.chemistry.validate()?;

        let positive = [
            ("beaker.width", self.beaker.width),
            ("beaker.height", self.beaker.height),
            ("ph_paper.width", self.ph_paper.width),
            ("ph_paper.height", self.ph_paper.height),
            ("ph_paper.float_speed", self.ph_paper.float_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ChemistryError::InvalidParameters(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.magnifier.base_dots == 0 || self.magnifier.max_molecules < self.magnifier.base_dots {
            return Err(ChemistryError::InvalidParameters(format!(
                "magnifier needs 0 < base_dots <= max_molecules, got {} and {}",
                self.magnifier.base_dots, self.magnifier.max_molecules
            )));
        }
        if !(self.magnifier.base_concentration > 0.0 && self.magnifier.base_concentration < 1.0) {
            return Err(ChemistryError::InvalidParameters(format!(
                "magnifier.base_concentration must lie in (0, 1), got {}",
                self.magnifier.base_concentration
            )));
        }

        Ok(())
    }
}

/// Read a JSON section, falling back to defaults on a missing or broken file.
fn load_json_or_default<T, P>(path: P, label: &str) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(params) => {
                log::info!("Loaded {} parameters from {:?}", label, path.as_ref());
                params
            }
            Err(e) => {
                log::warn!("Failed to parse {} parameters: {}, using defaults", label, e);
                T::default()
            }
        },
        Err(_) => {
            log::info!("{} parameters file not found, using defaults", label);
            T::default()
        }
    }
}

/// Equilibrium constants and input domains
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemistryParameters {
    /// Kw = [H3O+][OH-] at 25 °C
    pub water_equilibrium_constant: f64,
    /// Concentration of water acting as the solvent (mol/L)
    pub water_concentration: f64,
    /// Initial solute concentration range (mol/L)
    pub concentration_min: f64,
    pub concentration_max: f64,
    pub concentration_default: f64,
    /// Weak Ka/Kb range. The lower bound itself is excluded.
    pub weak_strength_min: f64,
    pub weak_strength_max: f64,
    pub weak_strength_default: f64,
    /// Sentinel used for fully dissociated solutes, above the weak maximum
    pub strong_strength: f64,
    /// Display range of the pH scale
    pub ph_min: f64,
    pub ph_max: f64,
}

impl ChemistryParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        load_json_or_default(path, "chemistry")
    }

    /// Whether `value` lies in the closed concentration range.
    pub fn is_valid_concentration(&self, value: f64) -> bool {
        value >= self.concentration_min && value <= self.concentration_max
    }

    /// Whether `value` lies in the weak strength range `(min, max]`.
    pub fn is_weak_strength(&self, value: f64) -> bool {
        value > self.weak_strength_min && value <= self.weak_strength_max
    }

    /// Whether `value` denotes a fully dissociated solute.
    pub fn is_strong_strength(&self, value: f64) -> bool {
        value > self.weak_strength_max
    }

    fn validate(&self) -> ChemistryResult<()> {
        let ordered = [
            (
                "concentration",
                self.concentration_min,
                self.concentration_default,
                self.concentration_max,
            ),
            (
                "weak strength",
                self.weak_strength_min,
                self.weak_strength_default,
                self.weak_strength_max,
            ),
        ];
        for (name, min, default, max) in ordered {
            if !(min > 0.0 && min <= default && default <= max) {
                return Err(ChemistryError::InvalidParameters(format!(
                    "{name} range must satisfy 0 < min <= default <= max, got {min} / {default} / {max}"
                )));
            }
        }
        if !self.is_strong_strength(self.strong_strength) {
            return Err(ChemistryError::InvalidParameters(format!(
                "strong strength {} must exceed weak maximum {}",
                self.strong_strength, self.weak_strength_max
            )));
        }
        if !(self.water_equilibrium_constant > 0.0 && self.water_concentration > 0.0) {
            return Err(ChemistryError::InvalidParameters(
                "water constants must be positive".to_string(),
            ));
        }
        if !(self.ph_min < self.ph_max) {
            return Err(ChemistryError::InvalidParameters(format!(
                "pH range is empty: {} .. {}",
                self.ph_min, self.ph_max
            )));
        }
        Ok(())
    }
}

impl Default for ChemistryParameters {
    fn default() -> Self {
        let weak_strength_max = 1e2;
        Self {
            water_equilibrium_constant: 1e-14,
            water_concentration: 55.6,

            concentration_min: 1e-3,
            concentration_max: 1.0,
            concentration_default: 1e-2,

            weak_strength_min: 1e-10,
            weak_strength_max,
            weak_strength_default: 1e-7,

            // Arbitrary, only needs to sit above the weak range
            strong_strength: weak_strength_max + 1.0,

            ph_min: 0.0,
            ph_max: 14.0,
        }
    }
}

/// Beaker placement, origin at the bottom-center of the beaker
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BeakerParameters {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for BeakerParameters {
    fn default() -> Self {
        Self {
            x: 230.0,
            y: 410.0,
            width: 360.0,
            height: 270.0,
        }
    }
}

/// pH paper geometry and float animation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PhPaperParameters {
    pub width: f32,
    pub height: f32,
    /// Extra indicator height gained past the liquid surface
    pub immersion_margin: f32,
    /// Float speed while fully submerged (units/s)
    pub float_speed: f32,
    /// Fraction of the paper height left below the surface when floating stops
    pub float_depth_fraction: f32,
    /// How far above the beaker the paper may be dragged
    pub drag_headroom: f32,
    /// Initial bottom-center relative to (beaker.right, beaker.top)
    pub start_offset_x: f32,
    pub start_offset_y: f32,
}

impl Default for PhPaperParameters {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 110.0,
            immersion_margin: 5.0,
            float_speed: 250.0,
            float_depth_fraction: 0.6,
            drag_headroom: 20.0,
            start_offset_x: -60.0,
            start_offset_y: -10.0,
        }
    }
}

/// pH meter probe placement, relative to the beaker top
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PhMeterParameters {
    pub drag_min_offset: f32,
    pub drag_max_offset: f32,
    /// Initial probe tip relative to (beaker.right, beaker.top)
    pub start_offset_x: f32,
    pub start_offset_y: f32,
}

impl Default for PhMeterParameters {
    fn default() -> Self {
        Self {
            drag_min_offset: -15.0,
            drag_max_offset: 70.0,
            start_offset_x: -65.0,
            start_offset_y: -5.0,
        }
    }
}

/// Conductivity tester brightness curve and probe placement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ConductivityParameters {
    pub neutral_ph: f64,
    /// Bulb brightness of pure water
    pub neutral_brightness: f64,
    /// Horizontal distance of each probe from the beaker center
    pub probe_spacing: f32,
    /// Probe drag range relative to the beaker top
    pub drag_min_offset: f32,
    pub drag_max_offset: f32,
    /// Initial probe tip height relative to the beaker top
    pub start_offset_y: f32,
}

impl Default for ConductivityParameters {
    fn default() -> Self {
        Self {
            neutral_ph: 7.0,
            neutral_brightness: 0.05,
            probe_spacing: 65.0,
            drag_min_offset: -20.0,
            drag_max_offset: 50.0,
            start_offset_y: -10.0,
        }
    }
}

/// Molecule population scale for the magnifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnifierParameters {
    pub max_molecules: usize,
    pub base_dots: usize,
    /// Concentration that maps to `base_dots`; [H3O+] of pure water
    pub base_concentration: f64,
    /// Whether water molecules are drawn before the user asks for them
    pub show_solvent: bool,
}

impl Default for MagnifierParameters {
    fn default() -> Self {
        Self {
            max_molecules: 50,
            base_dots: 2,
            base_concentration: 1e-7,
            show_solvent: false,
        }
    }
}
