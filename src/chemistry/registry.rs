//! Fixed-size map from solution kind to its model instance.

use super::{AqueousSolution, ChemistryError, ChemistryResult, SolutionKind};
use crate::config::ChemistryParameters;

/// Owns one [`AqueousSolution`] per available kind.
///
/// Slots are indexed by [`SolutionKind::index`]; a registry built for the
/// custom-solution mode simply leaves the water slot empty.
#[derive(Debug)]
pub struct SolutionRegistry {
    solutions: [Option<AqueousSolution>; SolutionKind::COUNT],
}

impl SolutionRegistry {
    /// Registry holding exactly `kinds` (duplicates are ignored).
    pub fn new(kinds: &[SolutionKind], constants: &ChemistryParameters) -> Self {
        let mut solutions: [Option<AqueousSolution>; SolutionKind::COUNT] = Default::default();
        for &kind in kinds {
            if solutions[kind.index()].is_none() {
                solutions[kind.index()] = Some(AqueousSolution::new(kind, constants));
            }
        }
        let registry = Self { solutions };
        log::info!("Solution registry created with {} solution(s)", registry.len());
        registry
    }

    /// All five kinds.
    pub fn general(constants: &ChemistryParameters) -> Self {
        Self::new(&SolutionKind::ALL, constants)
    }

    /// The four solute kinds, without water.
    pub fn custom(constants: &ChemistryParameters) -> Self {
        Self::new(&SolutionKind::SOLUTES, constants)
    }

    /// Solution for `kind`.
    ///
    /// # Panics
    /// If the registry was built without `kind`. Callers validate with
    /// [`contains`](Self::contains) or use [`try_get`](Self::try_get).
    pub fn get(&self, kind: SolutionKind) -> &AqueousSolution {
        match self.solutions[kind.index()].as_ref() {
            Some(solution) => solution,
            None => panic!("solution kind {kind} is not registered"),
        }
    }

    /// Solution for `kind`, or [`ChemistryError::UnknownKind`].
    pub fn try_get(&self, kind: SolutionKind) -> ChemistryResult<&AqueousSolution> {
        self.solutions[kind.index()]
            .as_ref()
            .ok_or(ChemistryError::UnknownKind(kind))
    }

    pub fn contains(&self, kind: SolutionKind) -> bool {
        self.solutions[kind.index()].is_some()
    }

    /// Registered kinds in enumeration order.
    pub fn kinds(&self) -> impl Iterator<Item = SolutionKind> + '_ {
        self.iter().map(AqueousSolution::kind)
    }

    /// Registered solutions in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &AqueousSolution> {
        self.solutions.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Restore every solution's default inputs.
    pub fn reset_all(&self) {
        for solution in self.iter() {
            solution.reset();
        }
    }
}
