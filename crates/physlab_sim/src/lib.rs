//! Scenario steppers for physlab
//!
//! This crate provides the kinematic core of the classroom lab, one module
//! per scenario screen:
//! - Vector composition workbench (static, no clock)
//! - Inclined plane with single-force and coupled-counterweight modes
//! - Coupled boxes pulled across level ground
//! - Vertical spring under Hooke's law
//! - Simple pendulum on selectable celestial bodies
//! - Loop-the-loop energy track
//!
//! Every stepper is pure over (state, params, Δt): no I/O, no clocks of its
//! own. The run lifecycle is shared through [`RunStatus`].

pub mod gravity;
pub mod incline;
pub mod pendulum;
pub mod pulley;
pub mod spring;
pub mod status;
pub mod track;
pub mod vectors;

// Re-export commonly used types
pub use gravity::GravityEnvironment;
pub use incline::{InclineMode, InclineParams, InclineReadout, InclineSim, InclineState};
pub use pendulum::{PendulumParams, PendulumReadout, PendulumSim, PendulumState};
pub use pulley::{PulleyParams, PulleyReadout, PulleySim, PulleyState};
pub use spring::{SpringMaterial, SpringParams, SpringReadout, SpringSim, SpringState};
pub use status::{RunStatus, StopReason};
pub use track::{TrackParams, TrackPoint, TrackReadout, TrackSegment, TrackSim, TrackState};
pub use vectors::{DisplayMode, PolarVector, VectorParams, VectorReadout, VectorWorkbench};
