//! Owned, observable module state.
//!
//! [`ModuleStore`] is the imperative shell around the solver: it holds the
//! current state, runs actions through a [`LayoutSolver`], and tells
//! subscribers when the state actually changed. It has a single writer;
//! hosts that share it must serialize access themselves.

use std::fmt;

use tracing::trace;
use wardrobe_core::{DividerId, ModuleState};

use crate::action::LayoutAction;
use crate::LayoutSolver;

/// Handle returned by [`ModuleStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ModuleState)>;

/// A module state plus the solver that edits it.
pub struct ModuleStore {
    solver: LayoutSolver,
    state: ModuleState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for ModuleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleStore")
            .field("solver", &self.solver)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ModuleStore {
    /// Create a store. The initial state is normalized.
    pub fn new(solver: LayoutSolver, state: ModuleState) -> Self {
        let state = solver.normalize(&state);
        Self {
            solver,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &ModuleState {
        &self.state
    }

    /// Get the solver.
    pub fn solver(&self) -> &LayoutSolver {
        &self.solver
    }

    /// Apply an action. Returns whether the state changed.
    pub fn dispatch(&mut self, action: LayoutAction) -> bool {
        let next = self.solver.apply(&self.state, &action);
        self.commit(next)
    }

    /// Insert a column and return its id.
    pub fn add_column(&mut self, x: Option<f64>, width: Option<f64>) -> DividerId {
        let (next, id) = self.solver.add_column(&self.state, x, width);
        self.commit(next);
        id
    }

    /// Insert a shelf and return its id.
    pub fn add_shelf(&mut self, y: Option<f64>) -> DividerId {
        let (next, id) = self.solver.add_shelf(&self.state, y);
        self.commit(next);
        id
    }

    /// Swap in a whole new state, e.g. one restored from a snapshot.
    pub fn replace(&mut self, state: ModuleState) -> bool {
        let next = self.solver.normalize(&state);
        self.commit(next)
    }

    /// Register a listener, called after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&ModuleState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, next: ModuleState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        trace!(listeners = self.listeners.len(), "state changed");
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        true
    }
}
