//! Obstacle pool component.

use serde::{Deserialize, Serialize};

/// One recyclable hazard. `slot` is the obstacle's stable index in the
/// pool, assigned at population and never changed - recycling moves the
/// entity, it never respawns it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub slot: usize,
}
