//! Geometric value types for wardrobe modules.
//!
//! All lengths are in meters. Divider coordinates share the frame of the
//! outer box, so the cavity's left wall sits at `x = frame_thickness`.

use std::fmt;

use crate::config::DEFAULT_THICKNESS;

/// Opaque identifier for a column or shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DividerId(pub u64);

impl fmt::Display for DividerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two kinds of divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DividerKind {
    /// Vertical divider, positioned along x
    Column,
    /// Horizontal divider, positioned along y
    Shelf,
}

impl fmt::Display for DividerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DividerKind::Column => f.write_str("column"),
            DividerKind::Shelf => f.write_str("shelf"),
        }
    }
}

/// A wall of the cavity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Left,
    Right,
    Bottom,
    Top,
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Wall::Left => "left",
            Wall::Right => "right",
            Wall::Bottom => "bottom",
            Wall::Top => "top",
        };
        f.write_str(name)
    }
}

/// Outer bounding box of a module.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self { width, height, depth }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(1.8, 2.2, 0.6)
    }
}

/// A partial change to [`Dimensions`]. Missing fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DimensionsUpdate {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
}

impl DimensionsUpdate {
    /// Update every axis at once.
    pub fn all(dimensions: Dimensions) -> Self {
        Self {
            width: Some(dimensions.width),
            height: Some(dimensions.height),
            depth: Some(dimensions.depth),
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// A vertical divider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub id: DividerId,
    /// Left edge
    pub x: f64,
    pub width: f64,
}

impl Column {
    pub fn new(id: DividerId, x: f64, width: f64) -> Self {
        Self { id, x, width }
    }

    /// Right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Center x coordinate.
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// A horizontal divider. Thickness is shared, see [`ModuleState::shelf_thickness`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shelf {
    pub id: DividerId,
    /// Center
    pub y: f64,
}

impl Shelf {
    pub fn new(id: DividerId, y: f64) -> Self {
        Self { id, y }
    }

    /// Lower face for the given shelf thickness.
    pub fn bottom(&self, thickness: f64) -> f64 {
        self.y - thickness / 2.0
    }

    /// Upper face for the given shelf thickness.
    pub fn top(&self, thickness: f64) -> f64 {
        self.y + thickness / 2.0
    }
}

/// The complete geometric state of one module.
///
/// Treated as a value: solver operations take a reference and return a new
/// state. Columns and shelves are kept sorted by coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleState {
    pub dimensions: Dimensions,
    pub columns: Vec<Column>,
    pub shelves: Vec<Shelf>,
    /// Width given to columns created by even distribution
    pub column_thickness: f64,
    pub shelf_thickness: f64,
    pub frame_thickness: f64,
    /// Next id handed out by `allocate_id`
    next_id: u64,
}

impl Default for ModuleState {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl ModuleState {
    /// Create an empty module with default thicknesses.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            columns: Vec::new(),
            shelves: Vec::new(),
            column_thickness: DEFAULT_THICKNESS,
            shelf_thickness: DEFAULT_THICKNESS,
            frame_thickness: DEFAULT_THICKNESS,
            next_id: 1,
        }
    }

    /// Replace the columns, keeping their ids.
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns = columns.into_iter().collect();
        self.reserve_ids();
        self.sort_columns();
        self
    }

    /// Replace the shelves, keeping their ids.
    pub fn with_shelves(mut self, shelves: impl IntoIterator<Item = Shelf>) -> Self {
        self.shelves = shelves.into_iter().collect();
        self.reserve_ids();
        self.sort_shelves();
        self
    }

    pub fn with_column_thickness(mut self, thickness: f64) -> Self {
        self.column_thickness = thickness;
        self
    }

    pub fn with_shelf_thickness(mut self, thickness: f64) -> Self {
        self.shelf_thickness = thickness;
        self
    }

    pub fn with_frame_thickness(mut self, thickness: f64) -> Self {
        self.frame_thickness = thickness;
        self
    }

    /// Hand out a fresh id, unique within this state's lineage.
    pub fn allocate_id(&mut self) -> DividerId {
        let id = DividerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Get a column by ID.
    pub fn column(&self, id: DividerId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Get a shelf by ID.
    pub fn shelf(&self, id: DividerId) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.id == id)
    }

    /// Sum of all column widths.
    pub fn total_column_width(&self) -> f64 {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Stable sort of columns by left edge.
    pub fn sort_columns(&mut self) {
        self.columns.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// Stable sort of shelves by center.
    pub fn sort_shelves(&mut self) {
        self.shelves.sort_by(|a, b| a.y.total_cmp(&b.y));
    }

    // Keep the counter ahead of every id already present.
    fn reserve_ids(&mut self) {
        let highest = self
            .columns
            .iter()
            .map(|c| c.id.0)
            .chain(self.shelves.iter().map(|s| s.id.0))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(highest.saturating_add(1));
    }
}
