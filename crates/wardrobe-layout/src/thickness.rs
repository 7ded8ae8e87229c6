//! Thickness changes and the re-clamp they trigger.

use tracing::debug;
use wardrobe_core::{ModuleState, ThicknessRange};

use crate::cavity::inner_cavity;
use crate::relax::{relax_columns, relax_shelves};
use crate::LayoutSolver;

fn clamp_thickness(name: &'static str, range: &ThicknessRange, value: f64) -> f64 {
    let clamped = range.clamp(value);
    if !range.contains(value) {
        debug!(name, requested = value, clamped, "thickness out of range");
    }
    clamped
}

impl LayoutSolver {
    /// Set the width of every column, keeping each column's center.
    ///
    /// Columns are then two-pass clamped. If they no longer fit, the outer
    /// width grows to the smallest size that holds them.
    #[tracing::instrument(level = "debug", skip_all, fields(value = value))]
    pub fn set_column_thickness(&self, state: &ModuleState, value: f64) -> ModuleState {
        let t = clamp_thickness("column", &self.config().column_thickness, value);
        let mut next = state.clone();
        next.column_thickness = t;
        for column in &mut next.columns {
            let center = column.center();
            column.x = center - t / 2.0;
            column.width = t;
        }
        next.sort_columns();
        self.fit_outer_size(&mut next);

        let cavity = inner_cavity(next.dimensions, next.frame_thickness);
        relax_columns(&mut next.columns, &cavity, self.config().min_spacing.columns);
        next
    }

    /// Set the shared shelf thickness. Centers stay put unless a wall or
    /// neighbor forces them to move.
    #[tracing::instrument(level = "debug", skip_all, fields(value = value))]
    pub fn set_shelf_thickness(&self, state: &ModuleState, value: f64) -> ModuleState {
        let t = clamp_thickness("shelf", &self.config().shelf_thickness, value);
        let mut next = state.clone();
        next.shelf_thickness = t;
        next.sort_shelves();
        self.fit_outer_size(&mut next);

        let cavity = inner_cavity(next.dimensions, next.frame_thickness);
        relax_shelves(&mut next.shelves, t, &cavity, self.config().min_spacing.shelves);
        next
    }

    /// Set the frame thickness and re-clamp both kinds of divider into the
    /// resulting cavity.
    #[tracing::instrument(level = "debug", skip_all, fields(value = value))]
    pub fn set_frame_thickness(&self, state: &ModuleState, value: f64) -> ModuleState {
        let t = clamp_thickness("frame", &self.config().frame_thickness, value);
        let mut next = state.clone();
        next.frame_thickness = t;
        self.normalize(&next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check_invariants;
    use wardrobe_core::{presets, Column, Dimensions, DividerId, Shelf};

    #[test]
    fn test_column_thickness_keeps_center() {
        let solver = LayoutSolver::default();
        let state = ModuleState::new(Dimensions::new(1.0, 2.0, 0.6))
            .with_columns([Column::new(DividerId(1), 0.5, 0.02)]);
        let next = solver.set_column_thickness(&state, 0.04);
        assert!((next.columns[0].x - 0.49).abs() < 1e-9);
        assert!((next.columns[0].center() - 0.51).abs() < 1e-9);
        assert_eq!(next.columns[0].width, 0.04);
        assert_eq!(next.column_thickness, 0.04);
    }

    #[test]
    fn test_column_thickness_reclamps_neighbors() {
        let solver = LayoutSolver::default();
        let state = ModuleState::new(Dimensions::new(1.0, 2.0, 0.6)).with_columns([
            Column::new(DividerId(1), 0.2, 0.02),
            Column::new(DividerId(2), 0.28, 0.02),
        ]);
        let next = solver.set_column_thickness(&state, 0.08);
        assert!(check_invariants(&next, solver.config()).is_ok());
        assert!(next.columns[1].x >= next.columns[0].right() + 0.06 - 1e-9);
    }

    #[test]
    fn test_thickness_values_are_clamped() {
        let solver = LayoutSolver::default();
        let state = presets::wardrobe();
        assert_eq!(solver.set_column_thickness(&state, 1.0).column_thickness, 0.08);
        assert_eq!(solver.set_shelf_thickness(&state, 0.0).shelf_thickness, 0.01);
        assert_eq!(solver.set_frame_thickness(&state, 0.001).frame_thickness, 0.005);
        assert_eq!(solver.set_frame_thickness(&state, f64::NAN).frame_thickness, 0.005);
    }

    #[test]
    fn test_shelf_thickness_reclamps() {
        let solver = LayoutSolver::default();
        let state = ModuleState::new(Dimensions::new(1.0, 1.0, 0.6)).with_shelves([
            Shelf::new(DividerId(1), 0.07),
            Shelf::new(DividerId(2), 0.5),
        ]);
        let next = solver.set_shelf_thickness(&state, 0.06);
        // 0.02 frame + 0.04 spacing + 0.03 half
        assert!((next.shelves[0].y - 0.09).abs() < 1e-9);
        assert_eq!(next.shelves[1].y, 0.5);
        assert!(check_invariants(&next, solver.config()).is_ok());
    }

    #[test]
    fn test_frame_thickness_reclamps_both_axes() {
        let solver = LayoutSolver::default();
        let state = ModuleState::new(Dimensions::new(1.0, 1.0, 0.6))
            .with_columns([Column::new(DividerId(1), 0.08, 0.02)])
            .with_shelves([Shelf::new(DividerId(2), 0.93)]);
        let next = solver.set_frame_thickness(&state, 0.06);
        // 0.06 + 0.06
        assert!((next.columns[0].x - 0.12).abs() < 1e-9);
        // 0.94 - 0.04 - 0.01
        assert!((next.shelves[0].y - 0.89).abs() < 1e-9);
        assert!(check_invariants(&next, solver.config()).is_ok());
    }

    #[test]
    fn test_thicker_columns_grow_tight_module() {
        let solver = LayoutSolver::default();
        let state = solver.distribute_columns_evenly(&ModuleState::default(), 20, None);
        let tight = solver.resize(&state, wardrobe_core::DimensionsUpdate::default().with_width(0.0));
        let next = solver.set_column_thickness(&tight, 0.08);
        assert!(next.dimensions.width > tight.dimensions.width);
        assert!(check_invariants(&next, solver.config()).is_ok());
    }
}
