//! Invariant checker for module layouts.

use std::collections::HashSet;

use wardrobe_core::{DividerId, DividerKind, InvariantViolation, ModuleState, SolverConfig, Wall};

use crate::cavity::inner_cavity;

/// Absolute slack allowed when comparing clearances, in meters.
pub const TOLERANCE: f64 = 1e-9;

fn finite(field: impl Into<String>, value: f64) -> Result<(), InvariantViolation> {
    if !value.is_finite() {
        return Err(InvariantViolation::NonFiniteValue {
            field: field.into(),
        });
    }
    if value < 0.0 {
        return Err(InvariantViolation::NegativeValue {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

fn unique(kind: DividerKind, ids: impl Iterator<Item = DividerId>) -> Result<(), InvariantViolation> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(InvariantViolation::DuplicateId { kind, id });
        }
    }
    Ok(())
}

/// Check every layout invariant, reporting the first violation found.
///
/// Scalars are checked first (finite, non-negative), then id uniqueness,
/// then column and shelf clearances in coordinate order.
pub fn check_invariants(state: &ModuleState, config: &SolverConfig) -> Result<(), InvariantViolation> {
    let d = state.dimensions;
    finite("width", d.width)?;
    finite("height", d.height)?;
    finite("depth", d.depth)?;
    finite("frame thickness", state.frame_thickness)?;
    finite("column thickness", state.column_thickness)?;
    finite("shelf thickness", state.shelf_thickness)?;
    for c in &state.columns {
        finite(format!("column {} x", c.id), c.x)?;
        finite(format!("column {} width", c.id), c.width)?;
    }
    for s in &state.shelves {
        finite(format!("shelf {} y", s.id), s.y)?;
    }

    unique(DividerKind::Column, state.columns.iter().map(|c| c.id))?;
    unique(DividerKind::Shelf, state.shelves.iter().map(|s| s.id))?;

    let cavity = inner_cavity(state.dimensions, state.frame_thickness);

    let spacing = config.min_spacing.columns;
    let mut columns = state.columns.clone();
    columns.sort_by(|a, b| a.x.total_cmp(&b.x));
    if let (Some(first), Some(last)) = (columns.first(), columns.last()) {
        let gap = first.x - cavity.left;
        if gap < spacing - TOLERANCE {
            return Err(InvariantViolation::ColumnWall {
                id: first.id,
                wall: Wall::Left,
                gap,
                required: spacing,
            });
        }
        let gap = cavity.right - last.right();
        if gap < spacing - TOLERANCE {
            return Err(InvariantViolation::ColumnWall {
                id: last.id,
                wall: Wall::Right,
                gap,
                required: spacing,
            });
        }
    }
    for pair in columns.windows(2) {
        let gap = pair[1].x - pair[0].right();
        if gap < spacing - TOLERANCE {
            return Err(InvariantViolation::ColumnSpacing {
                left: pair[0].id,
                right: pair[1].id,
                gap,
                required: spacing,
            });
        }
    }

    let spacing = config.min_spacing.shelves;
    let t = state.shelf_thickness;
    let mut shelves = state.shelves.clone();
    shelves.sort_by(|a, b| a.y.total_cmp(&b.y));
    if let (Some(first), Some(last)) = (shelves.first(), shelves.last()) {
        let gap = first.bottom(t) - cavity.bottom;
        if gap < spacing - TOLERANCE {
            return Err(InvariantViolation::ShelfWall {
                id: first.id,
                wall: Wall::Bottom,
                gap,
                required: spacing,
            });
        }
        let gap = cavity.top - last.top(t);
        if gap < spacing - TOLERANCE {
            return Err(InvariantViolation::ShelfWall {
                id: last.id,
                wall: Wall::Top,
                gap,
                required: spacing,
            });
        }
    }
    for pair in shelves.windows(2) {
        let gap = pair[1].y - pair[0].y - t;
        if gap < spacing - TOLERANCE {
            return Err(InvariantViolation::ShelfSpacing {
                below: pair[0].id,
                above: pair[1].id,
                gap,
                required: spacing,
            });
        }
    }

    Ok(())
}
