//! Measuring tools that read the selected solution.
//!
//! Each tool watches the router's observable kind and pH and exposes its own
//! derived observable quantities for a view layer to draw.

mod conductivity;
mod graph;
mod ph_meter;
mod ph_paper;

pub use conductivity::{brightness_for_ph, ConductivityTester};
pub use graph::{ConcentrationGraph, GraphBar};
pub use ph_meter::PhMeter;
pub use ph_paper::PhPaper;

use serde::{Deserialize, Serialize};

/// Tool currently in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolMode {
    #[default]
    PhMeter,
    PhPaper,
    Conductivity,
}
