//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod common;
mod obstacle;
mod player;

pub use common::*;
pub use obstacle::*;
pub use player::*;
