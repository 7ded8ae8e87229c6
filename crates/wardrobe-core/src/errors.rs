//! Error types for the wardrobe engine.
//!
//! Solver operations never fail; these describe states that break the
//! layout invariants, as reported by the checker or by snapshot validation.

use thiserror::Error;

use crate::types::{DividerId, DividerKind, Wall};

/// A broken layout invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("columns {left} and {right} are {gap:.4}m apart, minimum is {required:.4}m")]
    ColumnSpacing {
        left: DividerId,
        right: DividerId,
        gap: f64,
        required: f64,
    },

    #[error("column {id} is {gap:.4}m from the {wall} wall, minimum is {required:.4}m")]
    ColumnWall {
        id: DividerId,
        wall: Wall,
        gap: f64,
        required: f64,
    },

    #[error("shelves {below} and {above} are {gap:.4}m apart, minimum is {required:.4}m")]
    ShelfSpacing {
        below: DividerId,
        above: DividerId,
        gap: f64,
        required: f64,
    },

    #[error("shelf {id} is {gap:.4}m from the {wall} wall, minimum is {required:.4}m")]
    ShelfWall {
        id: DividerId,
        wall: Wall,
        gap: f64,
        required: f64,
    },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: DividerKind, id: DividerId },

    #[error("{field} is not finite")]
    NonFiniteValue { field: String },

    #[error("{field} is negative: {value}")]
    NegativeValue { field: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = InvariantViolation::ColumnWall {
            id: DividerId(3),
            wall: Wall::Right,
            gap: 0.01,
            required: 0.06,
        };
        assert_eq!(
            err.to_string(),
            "column #3 is 0.0100m from the right wall, minimum is 0.0600m"
        );

        let err = InvariantViolation::DuplicateId {
            kind: DividerKind::Shelf,
            id: DividerId(2),
        };
        assert_eq!(err.to_string(), "duplicate shelf id #2");
    }
}
