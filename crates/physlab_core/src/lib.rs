//! Core state for the physics lab
//!
//! This crate ties the scenario simulations into a single classroom lab:
//!
//! - [`ScreenKind`] - The six scenario screens
//! - [`SimSession`] - One screen's simulation behind a uniform command surface
//! - [`Lab`] - All six sessions plus the active-screen cursor
//! - [`QuizSheet`] - Multiple-choice quiz state with scoring
//! - [`formative_sheet`] / [`final_sheet`] - The built-in question banks

mod screen;
mod session;
mod lab;
mod quiz;
mod banks;

pub use screen::ScreenKind;
pub use session::{SessionError, SessionParams, SessionReadout, SimSession};
pub use lab::Lab;
pub use quiz::{QuizError, QuizQuestion, QuizSheet};
pub use banks::{final_sheet, formative_sheet, passed, FINAL_PASS_MARK};

// Re-export commonly used types from physlab_sim for convenience
pub use physlab_sim::{
    GravityEnvironment, InclineParams, PendulumParams, PulleyParams, RunStatus, SpringParams,
    StopReason, TrackParams, VectorParams,
};

// Re-export the plane vector type for convenient access through physlab_core
pub use physlab_math::Vec2;
