//! The snapshot document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wardrobe_core::{Column, Dimensions, DividerKind, InvariantViolation, ModuleState, Shelf};
use wardrobe_layout::LayoutSolver;

use crate::SnapshotError;

/// Version tag written into every snapshot.
pub const SNAPSHOT_VERSION: &str = "1";

/// Serializable copy of a module's geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: String,
    pub dimensions: Dimensions,
    pub columns: Vec<Column>,
    pub shelves: Vec<Shelf>,
    pub column_thickness: f64,
    pub shelf_thickness: f64,
    pub frame_thickness: f64,
}

fn check_scalar(field: impl Into<String>, value: f64) -> Result<(), InvariantViolation> {
    if !value.is_finite() {
        Err(InvariantViolation::NonFiniteValue { field: field.into() })
    } else if value < 0.0 {
        Err(InvariantViolation::NegativeValue {
            field: field.into(),
            value,
        })
    } else {
        Ok(())
    }
}

impl Snapshot {
    /// Capture the geometry of a module.
    pub fn capture(state: &ModuleState) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            dimensions: state.dimensions,
            columns: state.columns.clone(),
            shelves: state.shelves.clone(),
            column_thickness: state.column_thickness,
            shelf_thickness: state.shelf_thickness,
            frame_thickness: state.frame_thickness,
        }
    }

    /// Parse a snapshot from JSON. The content is not validated until
    /// [`restore`](Self::restore).
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the version tag, that every scalar is finite and non-negative,
    /// and that no two dividers of one kind share an id.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version.clone(),
                expected: SNAPSHOT_VERSION,
            });
        }

        check_scalar("width", self.dimensions.width)?;
        check_scalar("height", self.dimensions.height)?;
        check_scalar("depth", self.dimensions.depth)?;
        check_scalar("column thickness", self.column_thickness)?;
        check_scalar("shelf thickness", self.shelf_thickness)?;
        check_scalar("frame thickness", self.frame_thickness)?;

        let mut seen = HashSet::new();
        for column in &self.columns {
            check_scalar(format!("column {} x", column.id), column.x)?;
            check_scalar(format!("column {} width", column.id), column.width)?;
            if !seen.insert(column.id) {
                return Err(InvariantViolation::DuplicateId {
                    kind: DividerKind::Column,
                    id: column.id,
                }
                .into());
            }
        }

        seen.clear();
        for shelf in &self.shelves {
            check_scalar(format!("shelf {} y", shelf.id), shelf.y)?;
            if !seen.insert(shelf.id) {
                return Err(InvariantViolation::DuplicateId {
                    kind: DividerKind::Shelf,
                    id: shelf.id,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Rebuild a module state.
    ///
    /// Thicknesses are clamped into the solver's ranges, divider ids are
    /// kept, and the result is normalized so it satisfies every invariant.
    #[tracing::instrument(level = "debug", skip_all, fields(
        columns = self.columns.len(),
        shelves = self.shelves.len(),
    ))]
    pub fn restore(&self, solver: &LayoutSolver) -> Result<ModuleState, SnapshotError> {
        self.validate()?;

        let config = solver.config();
        let state = ModuleState::new(self.dimensions)
            .with_frame_thickness(config.frame_thickness.clamp(self.frame_thickness))
            .with_column_thickness(config.column_thickness.clamp(self.column_thickness))
            .with_shelf_thickness(config.shelf_thickness.clamp(self.shelf_thickness))
            .with_columns(self.columns.iter().copied())
            .with_shelves(self.shelves.iter().copied());

        let restored = solver.normalize(&state);
        if restored != state {
            debug!("snapshot geometry adjusted while restoring");
        }
        Ok(restored)
    }
}
