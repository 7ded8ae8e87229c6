//! Divider layout solver for wardrobe modules.
//!
//! Keeps columns (vertical dividers) and shelves (horizontal dividers)
//! correctly spaced inside a module's cavity as the module is resized,
//! divider thicknesses change, or single dividers are dragged.
//!
//! # Architecture
//!
//! 1. **Cavity**: the interior left after subtracting the frame
//! 2. **Two-pass clamp**: forward then backward sweep restoring spacing along one axis
//! 3. **Operations**: resize, even distribution, move/add/remove, thickness changes
//! 4. **Store**: an owned, observable state that applies [`LayoutAction`]s
//!
//! Every operation is total. Requests that cannot be honored are clamped to
//! the nearest feasible value instead of being rejected.
//!
//! # Example
//!
//! ```
//! use wardrobe_core::{presets, DimensionsUpdate};
//! use wardrobe_layout::{check_invariants, LayoutSolver};
//!
//! let solver = LayoutSolver::default();
//! let state = presets::wardrobe();
//! let state = solver.resize(&state, DimensionsUpdate::default().with_width(2.4));
//! let state = solver.distribute_shelves_evenly(&state, 4);
//!
//! assert!(check_invariants(&state, solver.config()).is_ok());
//! ```

mod action;
mod cavity;
mod check;
mod distribute;
mod edit;
mod relax;
mod resize;
mod solver;
mod store;
mod thickness;

pub use action::LayoutAction;
pub use cavity::{clamp, inner_cavity, Cavity};
pub use check::{check_invariants, TOLERANCE};
pub use solver::LayoutSolver;
pub use store::{ModuleStore, SubscriptionId};
