//! Outer resize with proportional divider scaling.

use tracing::debug;
use wardrobe_core::{DimensionsUpdate, ModuleState};

use crate::relax::{min_feasible_height, min_feasible_width, relax_state};
use crate::LayoutSolver;

/// Requested value if usable, otherwise the current one.
fn requested(value: Option<f64>, current: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            debug!(requested = v, kept = current, "ignoring unusable dimension");
            current
        }
        None => current,
    }
}

fn scale_factor(target: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        target / previous
    } else {
        1.0
    }
}

impl LayoutSolver {
    /// Resize the outer box, scaling divider positions proportionally.
    ///
    /// The width and height never drop below what the current dividers need.
    /// Depth passes through unscaled. Divider widths and shelf thickness are
    /// unchanged; positions are two-pass clamped into the new cavity.
    #[tracing::instrument(level = "debug", skip_all, fields(
        width = ?update.width,
        height = ?update.height,
        depth = ?update.depth,
    ))]
    pub fn resize(&self, state: &ModuleState, update: DimensionsUpdate) -> ModuleState {
        let spacing = &self.config().min_spacing;
        let previous = state.dimensions;

        let mut target_width = requested(update.width, previous.width);
        let mut target_height = requested(update.height, previous.height);
        let target_depth = requested(update.depth, previous.depth);

        let min_width = min_feasible_width(state, spacing);
        let min_height = min_feasible_height(state, spacing);
        if target_width < min_width {
            debug!(requested = target_width, min_width, "width below feasible minimum");
            target_width = min_width;
        }
        if target_height < min_height {
            debug!(requested = target_height, min_height, "height below feasible minimum");
            target_height = min_height;
        }

        let scale_x = scale_factor(target_width, previous.width);
        let scale_y = scale_factor(target_height, previous.height);

        let mut next = state.clone();
        next.dimensions.width = target_width;
        next.dimensions.height = target_height;
        next.dimensions.depth = target_depth;
        for column in &mut next.columns {
            column.x *= scale_x;
        }
        for shelf in &mut next.shelves {
            shelf.y *= scale_y;
        }

        relax_state(&mut next, spacing);
        next
    }
}
