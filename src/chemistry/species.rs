//! Chemical species tracked across all solutions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A distinct chemical entity whose concentration the model reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Water (solvent)
    H2O,
    /// Hydronium
    H3O,
    /// Hydroxide
    OH,
    /// Undissociated acid
    HA,
    /// Conjugate base of the acid
    A,
    /// Weak base
    B,
    /// Conjugate acid of the weak base
    BH,
    /// Metal cation of a strong base
    M,
    /// Undissociated strong base
    MOH,
}

impl Species {
    pub const COUNT: usize = 9;

    pub const ALL: [Species; Self::COUNT] = [
        Species::H2O,
        Species::H3O,
        Species::OH,
        Species::HA,
        Species::A,
        Species::B,
        Species::BH,
        Species::M,
        Species::MOH,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Species::H2O => 0,
            Species::H3O => 1,
            Species::OH => 2,
            Species::HA => 3,
            Species::A => 4,
            Species::B => 5,
            Species::BH => 6,
            Species::M => 7,
            Species::MOH => 8,
        }
    }

    /// Formula with charge, as drawn on the graph axis.
    pub fn formula(self) -> &'static str {
        match self {
            Species::H2O => "H2O",
            Species::H3O => "H3O+",
            Species::OH => "OH-",
            Species::HA => "HA",
            Species::A => "A-",
            Species::B => "B",
            Species::BH => "BH+",
            Species::M => "M+",
            Species::MOH => "MOH",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}
