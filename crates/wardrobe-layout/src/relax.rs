//! Two-pass clamp along one axis.
//!
//! Columns and shelves are both reduced to [`Slot`]s: a stored coordinate
//! plus the distance from it to each face. For a column the coordinate is
//! its left edge (lead 0, trail = width); for a shelf it is the center
//! (lead = trail = half thickness). Slots must be sorted by position.

use smallvec::SmallVec;
use wardrobe_core::{Column, DividerKind, MinSpacing, ModuleState, Shelf};

use crate::cavity::{clamp, inner_cavity, Cavity};

/// One divider projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Slot {
    /// Stored coordinate
    pub pos: f64,
    /// Distance from `pos` back to the near face
    pub lead: f64,
    /// Distance from `pos` forward to the far face
    pub trail: f64,
}

impl Slot {
    pub fn column(column: &Column) -> Self {
        Self {
            pos: column.x,
            lead: 0.0,
            trail: column.width,
        }
    }

    pub fn shelf(shelf: &Shelf, thickness: f64) -> Self {
        let half = thickness / 2.0;
        Self {
            pos: shelf.y,
            lead: half,
            trail: half,
        }
    }
}

/// Wall positions and the clearance required at walls and between slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Track {
    pub near: f64,
    pub far: f64,
    pub spacing: f64,
}

impl Track {
    pub fn horizontal(cavity: &Cavity, spacing: f64) -> Self {
        Self {
            near: cavity.left,
            far: cavity.right,
            spacing,
        }
    }

    pub fn vertical(cavity: &Cavity, spacing: f64) -> Self {
        Self {
            near: cavity.bottom,
            far: cavity.top,
            spacing,
        }
    }

    /// Lowest legal position for `slot` sitting above `below` (or the near wall).
    pub fn min_position(&self, below: Option<&Slot>, slot: &Slot) -> f64 {
        match below {
            Some(b) => b.pos + b.trail + self.spacing + slot.lead,
            None => self.near + self.spacing + slot.lead,
        }
    }

    /// Highest legal position for `slot` sitting below `above` (or the far wall).
    pub fn max_position(&self, above: Option<&Slot>, slot: &Slot) -> f64 {
        match above {
            Some(a) => a.pos - a.lead - slot.trail - self.spacing,
            None => self.far - slot.trail - self.spacing,
        }
    }
}

/// Restore the spacing invariants over sorted slots.
///
/// The forward pass packs slots away from the near wall, letting the lower
/// bound win. The backward pass then pulls them back from the far wall,
/// letting the upper bound win, using forward-clamped lower neighbors and
/// backward-clamped upper neighbors. When the slots fit in the track at all,
/// the result satisfies every wall and neighbor constraint.
pub(crate) fn two_pass_clamp(track: &Track, slots: &mut [Slot]) {
    for i in 0..slots.len() {
        let slot = slots[i];
        let below = if i > 0 { Some(slots[i - 1]) } else { None };
        let lo = track.min_position(below.as_ref(), &slot);
        let hi = track.max_position(None, &slot);
        slots[i].pos = clamp(slot.pos, lo, hi);
    }

    for i in (0..slots.len()).rev() {
        let slot = slots[i];
        let below = if i > 0 { Some(slots[i - 1]) } else { None };
        let above = slots.get(i + 1).copied();
        let lo = track.min_position(below.as_ref(), &slot);
        let hi = track.max_position(above.as_ref(), &slot);
        slots[i].pos = slot.pos.max(lo).min(hi);
    }
}

/// Two-pass clamp over columns sorted by `x`.
pub(crate) fn relax_columns(columns: &mut [Column], cavity: &Cavity, spacing: f64) {
    let mut slots: SmallVec<[Slot; 16]> = columns.iter().map(Slot::column).collect();
    two_pass_clamp(&Track::horizontal(cavity, spacing), &mut slots);
    for (column, slot) in columns.iter_mut().zip(&slots) {
        column.x = slot.pos;
    }
}

/// Two-pass clamp over shelves sorted by `y`.
pub(crate) fn relax_shelves(shelves: &mut [Shelf], thickness: f64, cavity: &Cavity, spacing: f64) {
    let mut slots: SmallVec<[Slot; 16]> = shelves
        .iter()
        .map(|s| Slot::shelf(s, thickness))
        .collect();
    two_pass_clamp(&Track::vertical(cavity, spacing), &mut slots);
    for (shelf, slot) in shelves.iter_mut().zip(&slots) {
        shelf.y = slot.pos;
    }
}

/// Sort both divider lists and clamp them into the current cavity.
pub(crate) fn relax_state(state: &mut ModuleState, spacing: &MinSpacing) {
    state.sort_columns();
    state.sort_shelves();
    let cavity = inner_cavity(state.dimensions, state.frame_thickness);
    relax_columns(&mut state.columns, &cavity, spacing.for_kind(DividerKind::Column));
    relax_shelves(
        &mut state.shelves,
        state.shelf_thickness,
        &cavity,
        spacing.for_kind(DividerKind::Shelf),
    );
}

/// Smallest outer width that fits the current columns.
pub(crate) fn min_feasible_width(state: &ModuleState, spacing: &MinSpacing) -> f64 {
    2.0 * state.frame_thickness.max(0.0)
        + spacing.columns * (state.columns.len() + 1) as f64
        + state.total_column_width()
}

/// Smallest outer height that fits the current shelves.
pub(crate) fn min_feasible_height(state: &ModuleState, spacing: &MinSpacing) -> f64 {
    let count = state.shelves.len() as f64;
    2.0 * state.frame_thickness.max(0.0)
        + spacing.shelves * (count + 1.0)
        + state.shelf_thickness * count
}
