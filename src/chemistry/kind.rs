//! Solution kinds and the tunable quantities they expose.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five aqueous solutions the model supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionKind {
    Water,
    StrongAcid,
    WeakAcid,
    StrongBase,
    WeakBase,
}

impl SolutionKind {
    pub const COUNT: usize = 5;

    pub const ALL: [SolutionKind; Self::COUNT] = [
        SolutionKind::Water,
        SolutionKind::StrongAcid,
        SolutionKind::WeakAcid,
        SolutionKind::StrongBase,
        SolutionKind::WeakBase,
    ];

    /// Kinds available when the user builds their own solution.
    pub const SOLUTES: [SolutionKind; 4] = [
        SolutionKind::StrongAcid,
        SolutionKind::WeakAcid,
        SolutionKind::StrongBase,
        SolutionKind::WeakBase,
    ];

    /// Dense index, stable for the lifetime of the enum.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SolutionKind::Water => 0,
            SolutionKind::StrongAcid => 1,
            SolutionKind::WeakAcid => 2,
            SolutionKind::StrongBase => 3,
            SolutionKind::WeakBase => 4,
        }
    }

    /// Solute kind selected by the acid/base and weak/strong toggles.
    pub fn from_toggles(is_acid: bool, is_weak: bool) -> Self {
        match (is_acid, is_weak) {
            (true, true) => SolutionKind::WeakAcid,
            (true, false) => SolutionKind::StrongAcid,
            (false, true) => SolutionKind::WeakBase,
            (false, false) => SolutionKind::StrongBase,
        }
    }

    pub fn is_acid(self) -> bool {
        matches!(self, SolutionKind::StrongAcid | SolutionKind::WeakAcid)
    }

    pub fn is_base(self) -> bool {
        matches!(self, SolutionKind::StrongBase | SolutionKind::WeakBase)
    }

    pub fn is_weak(self) -> bool {
        matches!(self, SolutionKind::WeakAcid | SolutionKind::WeakBase)
    }

    pub fn is_strong(self) -> bool {
        matches!(self, SolutionKind::StrongAcid | SolutionKind::StrongBase)
    }

    /// Command-line identifier, also used by `Display` and `FromStr`.
    ///
    /// Serialized snapshots use serde's snake_case form (`weak_base`) instead.
    pub fn name(self) -> &'static str {
        match self {
            SolutionKind::Water => "water",
            SolutionKind::StrongAcid => "strong-acid",
            SolutionKind::WeakAcid => "weak-acid",
            SolutionKind::StrongBase => "strong-base",
            SolutionKind::WeakBase => "weak-base",
        }
    }
}

impl fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolutionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        SolutionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown solution '{}', expected one of: water, strong-acid, weak-acid, strong-base, weak-base",
                    s
                )
            })
    }
}

/// User-tunable input of a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Initial solute concentration (mol/L)
    Concentration,
    /// Ka or Kb, or the strong sentinel
    Strength,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Concentration => f.write_str("concentration"),
            Quantity::Strength => f.write_str("strength"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (i, kind) in SolutionKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_toggle_mapping() {
        assert_eq!(SolutionKind::from_toggles(true, true), SolutionKind::WeakAcid);
        assert_eq!(SolutionKind::from_toggles(true, false), SolutionKind::StrongAcid);
        assert_eq!(SolutionKind::from_toggles(false, true), SolutionKind::WeakBase);
        assert_eq!(SolutionKind::from_toggles(false, false), SolutionKind::StrongBase);
    }

    #[test]
    fn test_parse_names() {
        for kind in SolutionKind::ALL {
            assert_eq!(kind.name().parse::<SolutionKind>(), Ok(kind));
        }
        assert_eq!("Weak_Acid".parse::<SolutionKind>(), Ok(SolutionKind::WeakAcid));
        assert!("vinegar".parse::<SolutionKind>().is_err());
    }

    #[test]
    fn test_serialized_form_differs_from_name() {
        let kind = SolutionKind::WeakBase;
        assert_eq!(kind.name(), "weak-base");
        assert_eq!(kind.to_string(), "weak-base");
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"weak_base\"");
        assert_eq!(serde_json::from_str::<SolutionKind>("\"weak_base\"").unwrap(), kind);
    }

    #[test]
    fn test_water_is_neither_acid_nor_base() {
        let water = SolutionKind::Water;
        assert!(!water.is_acid() && !water.is_base());
        assert!(!water.is_weak() && !water.is_strong());
    }
}
