//! Solver operations as data.

use wardrobe_core::{DimensionsUpdate, DividerId};

/// A single edit to a module layout, applied with [`LayoutSolver::apply`].
///
/// [`LayoutSolver::apply`]: crate::LayoutSolver::apply
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum LayoutAction {
    /// Change any subset of the outer dimensions
    Resize(DimensionsUpdate),
    /// Replace all columns with an evenly spaced set
    DistributeColumns { count: usize, width: Option<f64> },
    /// Replace all shelves with an evenly spaced set
    DistributeShelves { count: usize },
    MoveColumn { id: DividerId, x: f64 },
    MoveShelf { id: DividerId, y: f64 },
    AddColumn { x: Option<f64>, width: Option<f64> },
    AddShelf { y: Option<f64> },
    RemoveColumn { id: DividerId },
    RemoveShelf { id: DividerId },
    SetColumnThickness { value: f64 },
    SetShelfThickness { value: f64 },
    SetFrameThickness { value: f64 },
    /// Re-clamp everything without changing any input
    Normalize,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_action_json() {
        let action: LayoutAction =
            serde_json::from_str(r#"{"type":"moveColumn","id":3,"x":0.5}"#).unwrap();
        assert_eq!(
            action,
            LayoutAction::MoveColumn {
                id: DividerId(3),
                x: 0.5
            }
        );

        let json = serde_json::to_string(&LayoutAction::Normalize).unwrap();
        assert_eq!(json, r#"{"type":"normalize"}"#);
    }
}
