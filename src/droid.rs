//! The damaged maintenance droid that blocks a tunnel exit.

use log::debug;

/// A stateful blocker: starts out blocking and transitions once, and only
/// once, to repaired. The transition is not reversible.
#[derive(Debug, Clone)]
pub struct MaintenanceDroid {
    blocking: bool,
}

impl MaintenanceDroid {
    /// A freshly encountered droid is damaged and blocking.
    pub fn new() -> Self {
        MaintenanceDroid { blocking: true }
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    /// Repairing an already-repaired droid is a no-op.
    pub fn repair(&mut self) {
        if self.blocking {
            debug!("droid repaired, no longer blocking");
        }
        self.blocking = false;
    }
}
