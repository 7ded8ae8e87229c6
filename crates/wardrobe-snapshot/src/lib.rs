//! Versioned JSON snapshots of wardrobe module geometry.
//!
//! A [`Snapshot`] captures dimensions, dividers, and thicknesses so a host
//! can save a layout and bring it back later. Restoring validates the data
//! and runs it through the solver, so a restored state always satisfies the
//! layout invariants even if the stored one did not.
//!
//! # Example
//!
//! ```
//! use wardrobe_core::presets;
//! use wardrobe_layout::LayoutSolver;
//! use wardrobe_snapshot::Snapshot;
//!
//! let state = presets::wardrobe();
//! let json = Snapshot::capture(&state).to_json()?;
//!
//! let restored = Snapshot::from_json(&json)?.restore(&LayoutSolver::default())?;
//! assert_eq!(restored.columns, state.columns);
//! # Ok::<(), wardrobe_snapshot::SnapshotError>(())
//! ```

mod error;
mod snapshot;

pub use error::SnapshotError;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
