//! Count-based even distribution.

use tracing::debug;
use wardrobe_core::{Column, ModuleState, Shelf};

use crate::cavity::inner_cavity;
use crate::LayoutSolver;

/// An evenly spaced run of equal-width dividers along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EvenRun {
    count: usize,
    gap: f64,
}

impl EvenRun {
    /// Fit up to `desired` dividers of `extent` into `length` with `spacing`.
    fn plan(desired: usize, length: f64, extent: f64, spacing: f64) -> Self {
        let pitch = extent + spacing;
        let max_count = if pitch > 0.0 {
            let fit = ((length - spacing) / pitch).floor() - 1.0;
            if fit > 0.0 {
                fit as usize
            } else {
                0
            }
        } else {
            desired
        };
        let count = desired.min(max_count);
        if count < desired {
            debug!(desired, max_count, "capping divider count to available space");
        }
        let gap = if count == 0 {
            0.0
        } else {
            spacing.max((length - count as f64 * extent) / (count + 1) as f64)
        };
        Self { count, gap }
    }

    /// Near face of divider `i`, measured from `origin`.
    fn near_face(&self, origin: f64, extent: f64, i: usize) -> f64 {
        origin + self.gap * (i + 1) as f64 + extent * i as f64
    }
}

pub(crate) fn usable_width(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite() && *w > 0.0)
}

impl LayoutSolver {
    /// Replace all columns with `count` evenly spaced ones.
    ///
    /// The width is `width` if given, else the first existing column's
    /// width, else the module's column thickness. The count is silently
    /// capped to what the minimum spacing allows. All ids are fresh.
    #[tracing::instrument(level = "debug", skip_all, fields(count = count, width = ?width))]
    pub fn distribute_columns_evenly(
        &self,
        state: &ModuleState,
        count: usize,
        width: Option<f64>,
    ) -> ModuleState {
        let spacing = self.config().min_spacing.columns;
        let cavity = inner_cavity(state.dimensions, state.frame_thickness);
        let column_width = usable_width(width)
            .or_else(|| state.columns.first().map(|c| c.width))
            .unwrap_or(state.column_thickness);

        let run = EvenRun::plan(count, cavity.inner_width, column_width, spacing);
        let mut next = state.clone();
        let columns: Vec<Column> = (0..run.count)
            .map(|i| {
                let x = run.near_face(cavity.left, column_width, i);
                Column::new(next.allocate_id(), x, column_width)
            })
            .collect();
        next.columns = columns;
        next
    }

    /// Replace all shelves with `count` evenly spaced ones.
    ///
    /// Uses the shared shelf thickness; shelves are stored by center.
    #[tracing::instrument(level = "debug", skip_all, fields(count = count))]
    pub fn distribute_shelves_evenly(&self, state: &ModuleState, count: usize) -> ModuleState {
        let spacing = self.config().min_spacing.shelves;
        let cavity = inner_cavity(state.dimensions, state.frame_thickness);
        let thickness = state.shelf_thickness;

        let run = EvenRun::plan(count, cavity.inner_height, thickness, spacing);
        let mut next = state.clone();
        let shelves: Vec<Shelf> = (0..run.count)
            .map(|i| {
                let y = run.near_face(cavity.bottom, thickness, i) + thickness / 2.0;
                Shelf::new(next.allocate_id(), y)
            })
            .collect();
        next.shelves = shelves;
        next
    }
}
