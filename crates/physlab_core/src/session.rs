//! One owned simulation per scenario screen
//!
//! [`SimSession`] wraps the scenario steppers behind a uniform command
//! surface so the lab can route play/pause/reset and parameter edits
//! without caring which screen is active. Terminal transitions are logged
//! here; the steppers themselves stay silent.

use physlab_sim::{
    InclineParams, InclineReadout, InclineSim, PendulumParams, PendulumReadout, PendulumSim,
    PulleyParams, PulleyReadout, PulleySim, RunStatus, SpringParams, SpringReadout, SpringSim,
    TrackParams, TrackReadout, TrackSim, VectorParams, VectorReadout, VectorWorkbench,
};
use serde::{Deserialize, Serialize};

use crate::screen::ScreenKind;

/// Scenario-tagged parameter bundle for [`SimSession::set_params`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionParams {
    Vectors(VectorParams),
    Incline(InclineParams),
    Pulley(PulleyParams),
    Spring(SpringParams),
    Pendulum(PendulumParams),
    Energy(TrackParams),
}

impl SessionParams {
    /// The screen these parameters belong to
    pub fn screen(&self) -> ScreenKind {
        match self {
            SessionParams::Vectors(_) => ScreenKind::Vectors,
            SessionParams::Incline(_) => ScreenKind::Incline,
            SessionParams::Pulley(_) => ScreenKind::Pulley,
            SessionParams::Spring(_) => ScreenKind::Spring,
            SessionParams::Pendulum(_) => ScreenKind::Pendulum,
            SessionParams::Energy(_) => ScreenKind::Energy,
        }
    }
}

/// Scenario-tagged readout bundle
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum SessionReadout {
    Vectors(VectorReadout),
    Incline(InclineReadout),
    Pulley(PulleyReadout),
    Spring(SpringReadout),
    Pendulum(PendulumReadout),
    Energy(TrackReadout),
}

/// Rejected session operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Parameters tagged for one screen handed to another
    ParamsMismatch {
        session: ScreenKind,
        params: ScreenKind,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::ParamsMismatch { session, params } => {
                write!(f, "{params} parameters handed to the {session} session")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A screen's owned simulation
#[derive(Clone, Debug, PartialEq)]
pub enum SimSession {
    Vectors(VectorWorkbench),
    Incline(InclineSim),
    Pulley(PulleySim),
    Spring(SpringSim),
    Pendulum(PendulumSim),
    Energy(TrackSim),
}

impl SimSession {
    /// Fresh session with default parameters for a screen
    pub fn for_screen(screen: ScreenKind) -> Self {
        match screen {
            ScreenKind::Vectors => SimSession::Vectors(VectorWorkbench::default()),
            ScreenKind::Incline => SimSession::Incline(InclineSim::default()),
            ScreenKind::Pulley => SimSession::Pulley(PulleySim::default()),
            ScreenKind::Spring => SimSession::Spring(SpringSim::default()),
            ScreenKind::Pendulum => SimSession::Pendulum(PendulumSim::default()),
            ScreenKind::Energy => SimSession::Energy(TrackSim::default()),
        }
    }

    pub fn screen(&self) -> ScreenKind {
        match self {
            SimSession::Vectors(_) => ScreenKind::Vectors,
            SimSession::Incline(_) => ScreenKind::Incline,
            SimSession::Pulley(_) => ScreenKind::Pulley,
            SimSession::Spring(_) => ScreenKind::Spring,
            SimSession::Pendulum(_) => ScreenKind::Pendulum,
            SimSession::Energy(_) => ScreenKind::Energy,
        }
    }

    /// The vector workbench never runs a clock, so it reads as `Idle`
    pub fn status(&self) -> RunStatus {
        match self {
            SimSession::Vectors(_) => RunStatus::Idle,
            SimSession::Incline(sim) => sim.status(),
            SimSession::Pulley(sim) => sim.status(),
            SimSession::Spring(sim) => sim.status(),
            SimSession::Pendulum(sim) => sim.status(),
            SimSession::Energy(sim) => sim.status(),
        }
    }

    pub fn run(&mut self) {
        match self {
            SimSession::Vectors(_) => {}
            SimSession::Incline(sim) => sim.run(),
            SimSession::Pulley(sim) => sim.run(),
            SimSession::Spring(sim) => sim.run(),
            SimSession::Pendulum(sim) => sim.run(),
            SimSession::Energy(sim) => sim.run(),
        }
    }

    pub fn pause(&mut self) {
        match self {
            SimSession::Vectors(_) => {}
            SimSession::Incline(sim) => sim.pause(),
            SimSession::Pulley(sim) => sim.pause(),
            SimSession::Spring(sim) => sim.pause(),
            SimSession::Pendulum(sim) => sim.pause(),
            SimSession::Energy(sim) => sim.pause(),
        }
    }

    pub fn toggle(&mut self) {
        match self {
            SimSession::Vectors(_) => {}
            SimSession::Incline(sim) => sim.toggle(),
            SimSession::Pulley(sim) => sim.toggle(),
            SimSession::Spring(sim) => sim.toggle(),
            SimSession::Pendulum(sim) => sim.toggle(),
            SimSession::Energy(sim) => sim.toggle(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            SimSession::Vectors(_) => {}
            SimSession::Incline(sim) => sim.reset(),
            SimSession::Pulley(sim) => sim.reset(),
            SimSession::Spring(sim) => sim.reset(),
            SimSession::Pendulum(sim) => sim.reset(),
            SimSession::Energy(sim) => sim.reset(),
        }
    }

    /// Replace the parameters; running scenarios start over
    pub fn set_params(&mut self, params: SessionParams) -> Result<(), SessionError> {
        match (self, params) {
            (SimSession::Vectors(sim), SessionParams::Vectors(p)) => sim.set_params(p),
            (SimSession::Incline(sim), SessionParams::Incline(p)) => sim.set_params(p),
            (SimSession::Pulley(sim), SessionParams::Pulley(p)) => sim.set_params(p),
            (SimSession::Spring(sim), SessionParams::Spring(p)) => sim.set_params(p),
            (SimSession::Pendulum(sim), SessionParams::Pendulum(p)) => sim.set_params(p),
            (SimSession::Energy(sim), SessionParams::Energy(p)) => sim.set_params(p),
            (session, params) => {
                return Err(SessionError::ParamsMismatch {
                    session: session.screen(),
                    params: params.screen(),
                })
            }
        }
        Ok(())
    }

    /// Advance the simulation clock, logging terminal transitions
    pub fn tick(&mut self, dt: f32) {
        let before = self.status();
        match self {
            SimSession::Vectors(_) => {}
            SimSession::Incline(sim) => sim.tick(dt),
            SimSession::Pulley(sim) => sim.tick(dt),
            SimSession::Spring(sim) => sim.tick(dt),
            SimSession::Pendulum(sim) => sim.tick(dt),
            SimSession::Energy(sim) => sim.tick(dt),
        }
        let after = self.status();
        if before != after {
            match after {
                RunStatus::Succeeded => {
                    log::info!("{} run completed", self.screen());
                }
                RunStatus::Failed(reason) => {
                    log::warn!("{} run failed: {reason}", self.screen());
                }
                _ => {}
            }
        }
    }

    pub fn readout(&self) -> SessionReadout {
        match self {
            SimSession::Vectors(sim) => SessionReadout::Vectors(sim.readout()),
            SimSession::Incline(sim) => SessionReadout::Incline(sim.readout()),
            SimSession::Pulley(sim) => SessionReadout::Pulley(sim.readout()),
            SimSession::Spring(sim) => SessionReadout::Spring(sim.readout()),
            SimSession::Pendulum(sim) => SessionReadout::Pendulum(sim.readout()),
            SimSession::Energy(sim) => SessionReadout::Energy(sim.readout()),
        }
    }

    // --- Typed access to the underlying simulations ---

    pub fn vectors(&self) -> Option<&VectorWorkbench> {
        match self {
            SimSession::Vectors(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn vectors_mut(&mut self) -> Option<&mut VectorWorkbench> {
        match self {
            SimSession::Vectors(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn incline(&self) -> Option<&InclineSim> {
        match self {
            SimSession::Incline(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn incline_mut(&mut self) -> Option<&mut InclineSim> {
        match self {
            SimSession::Incline(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn pulley(&self) -> Option<&PulleySim> {
        match self {
            SimSession::Pulley(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn pulley_mut(&mut self) -> Option<&mut PulleySim> {
        match self {
            SimSession::Pulley(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn spring(&self) -> Option<&SpringSim> {
        match self {
            SimSession::Spring(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn spring_mut(&mut self) -> Option<&mut SpringSim> {
        match self {
            SimSession::Spring(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn pendulum(&self) -> Option<&PendulumSim> {
        match self {
            SimSession::Pendulum(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn pendulum_mut(&mut self) -> Option<&mut PendulumSim> {
        match self {
            SimSession::Pendulum(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn energy(&self) -> Option<&TrackSim> {
        match self {
            SimSession::Energy(sim) => Some(sim),
            _ => None,
        }
    }

    pub fn energy_mut(&mut self) -> Option<&mut TrackSim> {
        match self {
            SimSession::Energy(sim) => Some(sim),
            _ => None,
        }
    }
}
