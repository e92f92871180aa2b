//! Pure simulation math for LaneRush.
//!
//! This crate contains all gameplay math that is independent of any
//! ECS, random source, or host framework. Functions take plain data and
//! return results, making them unit-testable and portable between the
//! simulation engine, the headless harness, and any future host.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`collision`] | Axis-aligned hit volume test against the runner's torso |
//! | [`constants`] | Corridor geometry, lane layout, spawn ranges, reference rates |
//! | [`kinematics`] | Steering axes, vertical integration, dash decay, crouch easing |
//! | [`lanes`] | Discrete lane offsets and spawn/recycle depth placement |
//! | [`tuning`] | Runtime tuning data model with validation sweep |

pub mod collision;
pub mod constants;
pub mod kinematics;
pub mod lanes;
pub mod tuning;
