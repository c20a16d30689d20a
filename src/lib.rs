//! physlab - classroom mechanics simulations with quizzes and a chat tutor
//!
//! This facade ties the member crates together for an embedding
//! presentation layer:
//!
//! - [`Lab`] - the six scenario sessions with active-screen routing
//! - [`Tutor`] - chat tutor whose `ask` never errors
//! - [`AppConfig`] - layered file/env configuration
//! - [`init_logging`] - `env_logger` setup honoring `[debug].log_level`

pub mod config;

pub use config::{AppConfig, ConfigError, DebugConfig, SimulationConfig, TutorConfig};

// Re-export the lab surface
pub use physlab_core::{
    final_sheet, formative_sheet, passed, Lab, QuizError, QuizQuestion, QuizSheet, ScreenKind,
    SessionError, SessionParams, SessionReadout, SimSession, FINAL_PASS_MARK,
};

// Re-export the scenario types surfaced through session params and readouts
pub use physlab_sim::{
    DisplayMode, GravityEnvironment, InclineMode, InclineParams, InclineReadout, InclineSim,
    PendulumParams, PendulumReadout, PendulumSim, PolarVector, PulleyParams, PulleyReadout,
    PulleySim, RunStatus, SpringMaterial, SpringParams, SpringReadout, SpringSim, StopReason,
    TrackParams, TrackPoint, TrackReadout, TrackSegment, TrackSim, VectorParams, VectorReadout,
    VectorWorkbench,
};

// Re-export the tutor surface
pub use physlab_tutor::{
    system_instruction, GeminiBackend, Tutor, TutorBackend, TutorError, TutorPrompt,
    FALLBACK_BUSY, FALLBACK_NO_CREDENTIAL, FALLBACK_RETRY,
};

pub use physlab_math::Vec2;

/// Initialize `env_logger` from `[debug].log_level`; `RUST_LOG` still
/// overrides, and repeat calls are no-ops
pub fn init_logging(config: &AppConfig) {
    let _ = env_logger::Builder::new()
        .parse_filters(&config.debug.log_level)
        .parse_default_env()
        .try_init();
}
