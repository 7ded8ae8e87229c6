//! Single-divider edits: move, insert, remove.

use tracing::debug;
use wardrobe_core::{Column, DividerId, ModuleState, Shelf};

use crate::cavity::{clamp, inner_cavity};
use crate::distribute::usable_width;
use crate::relax::{Slot, Track};
use crate::LayoutSolver;

/// Clamp `requested` for the slot at `index` between its sorted neighbors.
fn clamp_between(track: &Track, slots: &[Slot], index: usize, requested: f64) -> f64 {
    let slot = &slots[index];
    let below = index.checked_sub(1).map(|i| &slots[i]);
    let above = slots.get(index + 1);
    let lo = track.min_position(below, slot);
    let hi = track.max_position(above, slot);
    clamp(requested, lo, hi)
}

impl LayoutSolver {
    /// Move one column toward `x`, stopping at its neighbors and the walls.
    ///
    /// Only the moved column changes. Unknown ids leave the state unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(id = %id, x = x))]
    pub fn move_column(&self, state: &ModuleState, id: DividerId, x: f64) -> ModuleState {
        let mut next = state.clone();
        next.sort_columns();
        let Some(index) = next.columns.iter().position(|c| c.id == id) else {
            debug!("unknown column");
            return state.clone();
        };

        let cavity = inner_cavity(next.dimensions, next.frame_thickness);
        let track = Track::horizontal(&cavity, self.config().min_spacing.columns);
        let slots: Vec<Slot> = next.columns.iter().map(Slot::column).collect();
        next.columns[index].x = clamp_between(&track, &slots, index, x);
        next
    }

    /// Move one shelf toward `y`, stopping at its neighbors and the walls.
    ///
    /// Neighbor clearance is measured face to face, so adjacent centers end
    /// up at least one thickness plus the spacing apart.
    #[tracing::instrument(level = "debug", skip_all, fields(id = %id, y = y))]
    pub fn move_shelf(&self, state: &ModuleState, id: DividerId, y: f64) -> ModuleState {
        let mut next = state.clone();
        next.sort_shelves();
        let Some(index) = next.shelves.iter().position(|s| s.id == id) else {
            debug!("unknown shelf");
            return state.clone();
        };

        let cavity = inner_cavity(next.dimensions, next.frame_thickness);
        let track = Track::vertical(&cavity, self.config().min_spacing.shelves);
        let thickness = next.shelf_thickness;
        let slots: Vec<Slot> = next
            .shelves
            .iter()
            .map(|s| Slot::shelf(s, thickness))
            .collect();
        next.shelves[index].y = clamp_between(&track, &slots, index, y);
        next
    }

    /// Insert a column and return the new state with its id.
    ///
    /// Defaults: the configured insert position and the module's column
    /// thickness, which also replaces a width that is not finite and
    /// positive. The position is not clamped; call [`normalize`] or any
    /// re-clamping operation to bring it into a valid position.
    ///
    /// [`normalize`]: LayoutSolver::normalize
    pub fn add_column(
        &self,
        state: &ModuleState,
        x: Option<f64>,
        width: Option<f64>,
    ) -> (ModuleState, DividerId) {
        let mut next = state.clone();
        let id = next.allocate_id();
        let x = x.unwrap_or(self.config().default_column_x);
        let width = usable_width(width).unwrap_or(next.column_thickness);
        debug!(id = %id, x, width, "adding column");
        next.columns.push(Column::new(id, x, width));
        next.sort_columns();
        (next, id)
    }

    /// Insert a shelf and return the new state with its id. Not clamped.
    pub fn add_shelf(&self, state: &ModuleState, y: Option<f64>) -> (ModuleState, DividerId) {
        let mut next = state.clone();
        let id = next.allocate_id();
        let y = y.unwrap_or(self.config().default_shelf_y);
        debug!(id = %id, y, "adding shelf");
        next.shelves.push(Shelf::new(id, y));
        next.sort_shelves();
        (next, id)
    }

    /// Remove a column. Unknown ids leave the state unchanged.
    pub fn remove_column(&self, state: &ModuleState, id: DividerId) -> ModuleState {
        let mut next = state.clone();
        next.columns.retain(|c| c.id != id);
        next
    }

    /// Remove a shelf. Unknown ids leave the state unchanged.
    pub fn remove_shelf(&self, state: &ModuleState, id: DividerId) -> ModuleState {
        let mut next = state.clone();
        next.shelves.retain(|s| s.id != id);
        next
    }
}
