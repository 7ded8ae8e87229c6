//! The solver entry point.
//!
//! Every operation takes the current [`ModuleState`] by reference and
//! returns the next one. Operations never fail: out-of-range requests are
//! clamped to the nearest feasible value.

use tracing::debug;
use wardrobe_core::{ModuleState, SolverConfig};

use crate::action::LayoutAction;
use crate::relax::{min_feasible_height, min_feasible_width, relax_state};

/// Maintains divider layouts for one configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutSolver {
    config: SolverConfig,
}

impl LayoutSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Sort, fit the outer size, and two-pass clamp both kinds of divider.
    ///
    /// Brings freshly inserted dividers back into a valid arrangement.
    /// A state that already satisfies every invariant is returned unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(
        columns = state.columns.len(),
        shelves = state.shelves.len(),
    ))]
    pub fn normalize(&self, state: &ModuleState) -> ModuleState {
        let mut next = state.clone();
        self.fit_outer_size(&mut next);
        relax_state(&mut next, &self.config.min_spacing);
        next
    }

    /// Apply one action.
    pub fn apply(&self, state: &ModuleState, action: &LayoutAction) -> ModuleState {
        match *action {
            LayoutAction::Resize(update) => self.resize(state, update),
            LayoutAction::DistributeColumns { count, width } => {
                self.distribute_columns_evenly(state, count, width)
            }
            LayoutAction::DistributeShelves { count } => self.distribute_shelves_evenly(state, count),
            LayoutAction::MoveColumn { id, x } => self.move_column(state, id, x),
            LayoutAction::MoveShelf { id, y } => self.move_shelf(state, id, y),
            LayoutAction::AddColumn { x, width } => self.add_column(state, x, width).0,
            LayoutAction::AddShelf { y } => self.add_shelf(state, y).0,
            LayoutAction::RemoveColumn { id } => self.remove_column(state, id),
            LayoutAction::RemoveShelf { id } => self.remove_shelf(state, id),
            LayoutAction::SetColumnThickness { value } => self.set_column_thickness(state, value),
            LayoutAction::SetShelfThickness { value } => self.set_shelf_thickness(state, value),
            LayoutAction::SetFrameThickness { value } => self.set_frame_thickness(state, value),
            LayoutAction::Normalize => self.normalize(state),
        }
    }

    /// Raise the outer width and height to what the current dividers need.
    pub(crate) fn fit_outer_size(&self, state: &mut ModuleState) {
        let spacing = &self.config.min_spacing;
        let min_width = min_feasible_width(state, spacing);
        let min_height = min_feasible_height(state, spacing);
        if state.dimensions.width < min_width {
            debug!(from = state.dimensions.width, to = min_width, "raising width to fit columns");
            state.dimensions.width = min_width;
        }
        if state.dimensions.height < min_height {
            debug!(from = state.dimensions.height, to = min_height, "raising height to fit shelves");
            state.dimensions.height = min_height;
        }
    }
}
