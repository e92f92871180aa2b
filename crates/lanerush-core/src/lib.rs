//! LaneRush Core - Runner Simulation Engine
//!
//! An ECS-based simulation of a three-lane endless runner: one player
//! avatar steered inside a clamped corridor, a fixed pool of obstacles
//! recycled front-to-back as the world scrolls, and a score that grows
//! with distance survived.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System via `hecs`:
//! - **Entities**: the runner and each pooled obstacle
//! - **Components**: pure data (Position, PlayerBody, CrouchPose, Obstacle)
//! - **Systems**: kinematics and the obstacle field, free functions over the world
//!
//! Hosts never mutate simulation state directly: key transitions go
//! through the [`input::InputLatch`], which the engine polls once per
//! [`engine::RunnerSim::update`]. Each update returns the observable
//! frame state for the presentation layer to render.
//!
//! # Example
//!
//! ```rust,no_run
//! use lanerush_core::prelude::*;
//!
//! let mut sim = RunnerSim::new(Tuning::default());
//! sim.input.set_held(HeldKey::Right, true);
//! sim.input.trigger(Action::Jump);
//!
//! loop {
//!     let frame = sim.update(1.0 / 60.0); // 60 FPS
//!     if frame.game_over {
//!         break;
//!     }
//! }
//! ```

pub mod components;
pub mod engine;
pub mod generation;
pub mod input;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::{FrameState, PlayerView, RunnerSim, Status};
    pub use crate::input::{Action, HeldKey, InputLatch};
    pub use lanerush_logic::tuning::Tuning;
}
