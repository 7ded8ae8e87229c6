//! Ready-made module layouts.

use crate::types::{Column, Dimensions, ModuleState, Shelf};

/// An empty module with default dimensions and thicknesses.
pub fn empty() -> ModuleState {
    ModuleState::default()
}

/// The standard three-column wardrobe: 3.2m wide, two shelves.
pub fn wardrobe() -> ModuleState {
    let mut state = ModuleState::new(Dimensions::new(3.2, 2.4, 0.65));
    let columns: Vec<Column> = [0.8, 1.6, 2.4]
        .into_iter()
        .map(|x| Column::new(state.allocate_id(), x, 0.02))
        .collect();
    let shelves: Vec<Shelf> = [0.35, 1.1]
        .into_iter()
        .map(|y| Shelf::new(state.allocate_id(), y))
        .collect();
    state.with_columns(columns).with_shelves(shelves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wardrobe_preset() {
        let state = wardrobe();
        assert_eq!(state.columns.len(), 3);
        assert_eq!(state.shelves.len(), 2);
        assert!((state.dimensions.width - 3.2).abs() < 1e-12);

        let mut ids: Vec<_> = state
            .columns
            .iter()
            .map(|c| c.id)
            .chain(state.shelves.iter().map(|s| s.id))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_empty_preset() {
        let state = empty();
        assert!(state.columns.is_empty());
        assert!(state.shelves.is_empty());
        assert!((state.dimensions.height - 2.2).abs() < 1e-12);
    }
}
