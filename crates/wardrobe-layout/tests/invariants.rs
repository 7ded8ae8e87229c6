//! Property tests: every solver operation leaves a valid layout behind.

use proptest::prelude::*;
use wardrobe_core::{Dimensions, DimensionsUpdate, ModuleState};
use wardrobe_layout::{check_invariants, LayoutAction, LayoutSolver};

/// An edit that picks its target by position, so it can be generated
/// without knowing the ids in play.
#[derive(Debug, Clone)]
enum Op {
    Resize { width: Option<f64>, height: Option<f64> },
    DistributeColumns { count: usize, width: Option<f64> },
    DistributeShelves { count: usize },
    MoveColumn { index: usize, x: f64 },
    MoveShelf { index: usize, y: f64 },
    RemoveColumn { index: usize },
    RemoveShelf { index: usize },
    AddColumnThenNormalize { x: f64, width: f64 },
    AddShelfThenNormalize { y: f64 },
    ColumnThickness(f64),
    ShelfThickness(f64),
    FrameThickness(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (prop::option::of(0.0..5.0f64), prop::option::of(0.0..4.0f64))
            .prop_map(|(width, height)| Op::Resize { width, height }),
        (0usize..25, prop::option::of(0.005..0.1f64))
            .prop_map(|(count, width)| Op::DistributeColumns { count, width }),
        (0usize..25).prop_map(|count| Op::DistributeShelves { count }),
        (0usize..30, -1.0..6.0f64).prop_map(|(index, x)| Op::MoveColumn { index, x }),
        (0usize..30, -1.0..5.0f64).prop_map(|(index, y)| Op::MoveShelf { index, y }),
        (0usize..30).prop_map(|index| Op::RemoveColumn { index }),
        (0usize..30).prop_map(|index| Op::RemoveShelf { index }),
        (-1.0..6.0f64, 0.005..0.1f64).prop_map(|(x, width)| Op::AddColumnThenNormalize { x, width }),
        (-1.0..5.0f64).prop_map(|y| Op::AddShelfThenNormalize { y }),
        (-0.1..0.2f64).prop_map(Op::ColumnThickness),
        (-0.1..0.2f64).prop_map(Op::ShelfThickness),
        (-0.1..0.2f64).prop_map(Op::FrameThickness),
    ]
}

fn run(solver: &LayoutSolver, state: &ModuleState, op: &Op) -> ModuleState {
    let action = match *op {
        Op::Resize { width, height } => LayoutAction::Resize(DimensionsUpdate {
            width,
            height,
            depth: None,
        }),
        Op::DistributeColumns { count, width } => LayoutAction::DistributeColumns { count, width },
        Op::DistributeShelves { count } => LayoutAction::DistributeShelves { count },
        Op::MoveColumn { index, x } => match state.columns.get(index) {
            Some(c) => LayoutAction::MoveColumn { id: c.id, x },
            None => return state.clone(),
        },
        Op::MoveShelf { index, y } => match state.shelves.get(index) {
            Some(s) => LayoutAction::MoveShelf { id: s.id, y },
            None => return state.clone(),
        },
        Op::RemoveColumn { index } => match state.columns.get(index) {
            Some(c) => LayoutAction::RemoveColumn { id: c.id },
            None => return state.clone(),
        },
        Op::RemoveShelf { index } => match state.shelves.get(index) {
            Some(s) => LayoutAction::RemoveShelf { id: s.id },
            None => return state.clone(),
        },
        Op::AddColumnThenNormalize { x, width } => {
            let (next, _) = solver.add_column(state, Some(x), Some(width));
            return solver.normalize(&next);
        }
        Op::AddShelfThenNormalize { y } => {
            let (next, _) = solver.add_shelf(state, Some(y));
            return solver.normalize(&next);
        }
        Op::ColumnThickness(value) => LayoutAction::SetColumnThickness { value },
        Op::ShelfThickness(value) => LayoutAction::SetShelfThickness { value },
        Op::FrameThickness(value) => LayoutAction::SetFrameThickness { value },
    };
    solver.apply(state, &action)
}

fn initial() -> impl Strategy<Value = ModuleState> {
    (0.3..4.0f64, 0.3..3.0f64, 0.2..1.0f64, 0usize..8, 0usize..8).prop_map(
        |(width, height, depth, columns, shelves)| {
            let solver = LayoutSolver::default();
            let state = ModuleState::new(Dimensions::new(width, height, depth));
            let state = solver.distribute_columns_evenly(&state, columns, None);
            solver.distribute_shelves_evenly(&state, shelves)
        },
    )
}

fn assert_close(a: &ModuleState, b: &ModuleState) {
    assert_eq!(a.columns.len(), b.columns.len());
    assert_eq!(a.shelves.len(), b.shelves.len());
    for (x, y) in a.columns.iter().zip(&b.columns) {
        assert_eq!(x.id, y.id);
        assert!((x.x - y.x).abs() < 1e-9, "column {} drifted: {} vs {}", x.id, x.x, y.x);
    }
    for (x, y) in a.shelves.iter().zip(&b.shelves) {
        assert_eq!(x.id, y.id);
        assert!((x.y - y.y).abs() < 1e-9, "shelf {} drifted: {} vs {}", x.id, x.y, y.y);
    }
    assert!((a.dimensions.width - b.dimensions.width).abs() < 1e-9);
    assert!((a.dimensions.height - b.dimensions.height).abs() < 1e-9);
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(
        start in initial(),
        ops in prop::collection::vec(op(), 1..40),
    ) {
        let solver = LayoutSolver::default();
        prop_assert!(check_invariants(&start, solver.config()).is_ok());

        let mut state = start;
        for op in &ops {
            state = run(&solver, &state, op);
            if let Err(violation) = check_invariants(&state, solver.config()) {
                return Err(TestCaseError::fail(format!("after {op:?}: {violation}")));
            }
        }
    }

    #[test]
    fn reclamp_is_idempotent(
        start in initial(),
        ops in prop::collection::vec(op(), 0..20),
    ) {
        let solver = LayoutSolver::default();
        let mut state = start;
        for op in &ops {
            state = run(&solver, &state, op);
        }
        let once = solver.normalize(&state);
        let twice = solver.normalize(&once);
        prop_assert_eq!(&once, &twice);
        assert_close(&state, &once);
    }

    #[test]
    fn resize_without_dividers_is_exact(width in 0.1..10.0f64) {
        let solver = LayoutSolver::default();
        let state = ModuleState::new(Dimensions::new(width, 2.0, 0.6));
        let next = solver.resize(&state, DimensionsUpdate::default().with_width(2.0 * width));
        prop_assert_eq!(next.dimensions.width, 2.0 * width);
        prop_assert!(next.columns.is_empty());
        prop_assert!(next.shelves.is_empty());
    }

    #[test]
    fn move_touches_only_the_moved_column(
        start in initial(),
        pick in 0usize..8,
        x in -1.0..5.0f64,
    ) {
        let solver = LayoutSolver::default();
        prop_assume!(!start.columns.is_empty());
        let index = pick % start.columns.len();
        let id = start.columns[index].id;
        let next = solver.move_column(&start, id, x);
        for (before, after) in start.columns.iter().zip(&next.columns) {
            if before.id != id {
                prop_assert_eq!(before, after);
            }
        }
        prop_assert_eq!(&next.shelves, &start.shelves);
        prop_assert!(check_invariants(&next, solver.config()).is_ok());
    }
}
