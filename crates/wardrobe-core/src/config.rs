//! Solver configuration.

use crate::types::DividerKind;

/// Thickness given to new modules for frame, columns, and shelves.
pub const DEFAULT_THICKNESS: f64 = 0.02;

/// Default minimum clearances, in meters.
pub const MIN_SPACING: MinSpacing = MinSpacing {
    columns: 0.06,
    shelves: 0.04,
};

/// Minimum clearance between adjacent dividers, and between a divider and
/// the cavity wall it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinSpacing {
    pub columns: f64,
    pub shelves: f64,
}

impl MinSpacing {
    pub const fn new(columns: f64, shelves: f64) -> Self {
        Self { columns, shelves }
    }

    /// Spacing for one kind of divider.
    pub fn for_kind(&self, kind: DividerKind) -> f64 {
        match kind {
            DividerKind::Column => self.columns,
            DividerKind::Shelf => self.shelves,
        }
    }
}

impl Default for MinSpacing {
    fn default() -> Self {
        MIN_SPACING
    }
}

/// Inclusive range a thickness is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThicknessRange {
    pub min: f64,
    pub max: f64,
}

impl ThicknessRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a value into the range. NaN resolves to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.min(self.max).max(self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Configuration shared by every solver operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SolverConfig {
    /// Minimum clearances
    pub min_spacing: MinSpacing,
    /// Allowed column widths
    pub column_thickness: ThicknessRange,
    /// Allowed shelf thickness
    pub shelf_thickness: ThicknessRange,
    /// Allowed frame thickness
    pub frame_thickness: ThicknessRange,
    /// Left edge used when a column is added without a position
    pub default_column_x: f64,
    /// Center used when a shelf is added without a position
    pub default_shelf_y: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_spacing: MIN_SPACING,
            column_thickness: ThicknessRange::new(0.01, 0.08),
            shelf_thickness: ThicknessRange::new(0.01, 0.06),
            frame_thickness: ThicknessRange::new(0.005, 0.06),
            default_column_x: 0.3,
            default_shelf_y: 0.4,
        }
    }
}

impl SolverConfig {
    pub fn with_min_spacing(mut self, min_spacing: MinSpacing) -> Self {
        self.min_spacing = min_spacing;
        self
    }

    pub fn with_column_thickness_range(mut self, range: ThicknessRange) -> Self {
        self.column_thickness = range;
        self
    }

    pub fn with_shelf_thickness_range(mut self, range: ThicknessRange) -> Self {
        self.shelf_thickness = range;
        self
    }

    pub fn with_frame_thickness_range(mut self, range: ThicknessRange) -> Self {
        self.frame_thickness = range;
        self
    }

    pub fn with_default_column_x(mut self, x: f64) -> Self {
        self.default_column_x = x;
        self
    }

    pub fn with_default_shelf_y(mut self, y: f64) -> Self {
        self.default_shelf_y = y;
        self
    }
}
