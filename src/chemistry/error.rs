//! Error type for model mutations and lookups.

use thiserror::Error;

use super::{Quantity, SolutionKind};

/// Result type for chemistry operations.
pub type ChemistryResult<T> = Result<T, ChemistryError>;

/// Errors raised synchronously to the caller. Nothing is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChemistryError {
    /// Value outside the domain accepted by the solution kind
    #[error("{quantity} {value:e} is outside {expected} for {kind}")]
    DomainViolation {
        kind: SolutionKind,
        quantity: Quantity,
        value: f64,
        expected: String,
    },
    /// Water accepts no strength and has a fixed concentration
    #[error("{quantity} of {kind} is fixed and cannot be set")]
    ImmutableQuantity { kind: SolutionKind, quantity: Quantity },
    /// Lookup of a kind this registry was not built with
    #[error("solution kind {0} is not available in this model")]
    UnknownKind(SolutionKind),
    /// Inconsistent configuration
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_violation_message_names_value_and_range() {
        let err = ChemistryError::DomainViolation {
            kind: SolutionKind::WeakAcid,
            quantity: Quantity::Strength,
            value: 1e3,
            expected: "(1e-10, 1e2]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "strength 1e3 is outside (1e-10, 1e2] for weak-acid"
        );
    }

    #[test]
    fn test_immutable_message() {
        let err = ChemistryError::ImmutableQuantity {
            kind: SolutionKind::Water,
            quantity: Quantity::Concentration,
        };
        assert_eq!(
            err.to_string(),
            "concentration of water is fixed and cannot be set"
        );
    }
}
