//! In-process gesture controller
//!
//! Tracks which blockers currently hold a block so the host can decide
//! whether background input should be swallowed.

use crate::controller::{Blocker, GestureController, GestureScope};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
struct GateState {
    next_blocker: u64,
    active: HashMap<u64, GestureScope>,
}

/// Shared gesture gate. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct GestureGate {
    state: Arc<Mutex<GateState>>,
}

impl GestureGate {
    /// A gate with no blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any blocker currently holds a block.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        !self.state.lock().active.is_empty()
    }

    /// Number of blockers currently holding a block.
    #[must_use]
    pub fn active_blocks(&self) -> usize {
        self.state.lock().active.len()
    }
}

impl GestureController for GestureGate {
    fn create_blocker(&self, scope: GestureScope) -> Box<dyn Blocker> {
        let id = {
            let mut state = self.state.lock();
            state.next_blocker += 1;
            state.next_blocker
        };
        Box::new(GateBlocker {
            id,
            scope,
            gate: Arc::clone(&self.state),
            blocked: false,
            destroyed: false,
        })
    }
}

#[derive(Debug)]
struct GateBlocker {
    id: u64,
    scope: GestureScope,
    gate: Arc<Mutex<GateState>>,
    blocked: bool,
    destroyed: bool,
}

impl Blocker for GateBlocker {
    fn block(&mut self) {
        if self.destroyed || self.blocked {
            return;
        }
        self.gate.lock().active.insert(self.id, self.scope);
        self.blocked = true;
        debug!(blocker = self.id, "Gesture block acquired");
    }

    fn unblock(&mut self) {
        if !self.blocked {
            return;
        }
        self.gate.lock().active.remove(&self.id);
        self.blocked = false;
        debug!(blocker = self.id, "Gesture block released");
    }

    fn destroy(&mut self) {
        self.unblock();
        self.destroyed = true;
    }

    fn is_blocked(&self) -> bool {
        self.blocked
    }
}

impl Drop for GateBlocker {
    fn drop(&mut self) {
        self.unblock();
    }
}
