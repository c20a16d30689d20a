//! Inclined-plane scenario
//!
//! A block on a ramp, driven either by an external force along the slope or
//! by a hanging counterweight over an apex pulley. Friction follows the
//! school model: kinetic friction opposes motion, static friction pins the
//! block below the breakaway threshold.

use physlab_math::deg_to_rad;
use serde::{Deserialize, Serialize};

use crate::status::RunStatus;

/// Gravity used by this scenario in m/s²
pub const GRAVITY: f32 = 9.81;

/// Below this speed the block counts as standing still
const STICTION_VELOCITY: f32 = 0.01;
/// Conversion from physical displacement in metres to track progress
const PROGRESS_SCALE: f32 = 0.2;
/// Visible extent of the ramp in progress units; positive is up the slope
const PROGRESS_MIN: f32 = -0.8;
const PROGRESS_MAX: f32 = 1.2;

/// What drives the block along the slope
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InclineMode {
    /// An external force in newtons pulls the block up the slope
    Single { applied_force: f32 },
    /// A hanging mass in kilograms pulls the cord over the apex pulley
    Coupled { hanging_mass: f32 },
}

/// Ramp geometry, masses and friction
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InclineParams {
    /// Block mass m1 in kg
    pub mass: f32,
    /// Coefficient of friction between block and ramp
    pub friction: f32,
    /// Ramp angle in degrees
    pub angle_deg: f32,
    pub mode: InclineMode,
}

impl Default for InclineParams {
    fn default() -> Self {
        Self {
            mass: 20.0,
            friction: 0.15,
            angle_deg: 30.0,
            mode: InclineMode::Single { applied_force: 0.0 },
        }
    }
}

impl InclineParams {
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass.clamp(1.0, 50.0);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.clamp(0.0, 1.0);
        self
    }

    pub fn with_angle_deg(mut self, angle_deg: f32) -> Self {
        self.angle_deg = angle_deg.clamp(5.0, 60.0);
        self
    }

    /// Switch to single mode with the given applied force in newtons
    pub fn with_applied_force(mut self, force: f32) -> Self {
        self.mode = InclineMode::Single {
            applied_force: force.clamp(0.0, 500.0),
        };
        self
    }

    /// Switch to coupled mode with the given hanging mass in kilograms
    pub fn with_hanging_mass(mut self, mass: f32) -> Self {
        self.mode = InclineMode::Coupled {
            hanging_mass: mass.clamp(0.0, 50.0),
        };
        self
    }

    /// Weight component along the slope, m1·g·sin θ
    pub fn weight_parallel(&self) -> f32 {
        self.mass * GRAVITY * deg_to_rad(self.angle_deg).sin()
    }

    /// Weight component into the slope, m1·g·cos θ
    pub fn weight_normal(&self) -> f32 {
        self.mass * GRAVITY * deg_to_rad(self.angle_deg).cos()
    }

    /// Largest friction force the contact can exert
    pub fn friction_max(&self) -> f32 {
        self.friction * self.weight_normal()
    }

    /// Net force pushing the block up the slope, before friction
    pub fn drive_force(&self) -> f32 {
        let pull = match self.mode {
            InclineMode::Single { applied_force } => applied_force,
            InclineMode::Coupled { hanging_mass } => hanging_mass * GRAVITY,
        };
        pull - self.weight_parallel()
    }

    /// Mass the drive force has to accelerate
    pub fn total_mass(&self) -> f32 {
        match self.mode {
            InclineMode::Single { .. } => self.mass,
            InclineMode::Coupled { hanging_mass } => self.mass + hanging_mass,
        }
    }
}

/// Mutable record advanced by the stepper
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InclineState {
    /// Position along the ramp in track units; positive is up the slope
    pub progress: f32,
    /// Speed along the slope in m/s; positive is up the slope
    pub velocity: f32,
    /// Simulated seconds since the run started
    pub elapsed: f32,
    /// Heat shed to friction so far, in joules
    pub dissipated: f32,
}

impl InclineState {
    /// Physical displacement along the slope in metres
    pub fn displacement(&self) -> f32 {
        self.progress / PROGRESS_SCALE
    }
}

/// Forces and energies for the current instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InclineReadout {
    /// m/s² along the slope; positive is up
    pub acceleration: f32,
    /// Cord tension in newtons; zero in single mode
    pub tension: f32,
    pub weight_parallel: f32,
    pub weight_normal: f32,
    pub normal_force: f32,
    pub friction_max: f32,
    pub kinetic_energy: f32,
    /// Relative to the starting position; coupled mode subtracts the
    /// counterweight's descent
    pub potential_energy: f32,
    pub dissipated_energy: f32,
}

/// Acceleration under the current friction regime
fn slope_acceleration(params: &InclineParams, velocity: f32) -> f32 {
    let drive = params.drive_force();
    let f_max = params.friction_max();
    let m_total = params.total_mass();
    if velocity.abs() > STICTION_VELOCITY {
        // Kinetic friction opposes the motion
        let dir = if velocity > 0.0 { 1.0 } else { -1.0 };
        (drive - dir * f_max) / m_total
    } else if drive.abs() > f_max {
        // Breakaway: static friction opposes the drive
        (drive - drive.signum() * f_max) / m_total
    } else {
        0.0
    }
}

/// Inclined-plane stepper
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InclineSim {
    params: InclineParams,
    state: InclineState,
    status: RunStatus,
}

impl InclineSim {
    pub fn new(params: InclineParams) -> Self {
        Self {
            params,
            state: InclineState::default(),
            status: RunStatus::Idle,
        }
    }

    pub fn params(&self) -> &InclineParams {
        &self.params
    }

    pub fn state(&self) -> &InclineState {
        &self.state
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn run(&mut self) {
        self.status = self.status.on_run();
    }

    pub fn pause(&mut self) {
        self.status = self.status.on_pause();
    }

    pub fn toggle(&mut self) {
        self.status = self.status.on_toggle();
    }

    /// Back to rest at the starting position
    pub fn reset(&mut self) {
        self.state = InclineState::default();
        self.status = RunStatus::Idle;
    }

    /// Replace all parameters; the run starts over
    pub fn set_params(&mut self, params: InclineParams) {
        self.params = params;
        self.reset();
    }

    /// Advance one step of `dt` seconds while running
    pub fn tick(&mut self, dt: f32) {
        if !self.status.is_running() {
            return;
        }
        let v = self.state.velocity;
        let accel = slope_acceleration(&self.params, v);
        let mut new_v = v + accel * dt;
        // Static friction holds the block once it would cross zero speed
        if v != 0.0
            && new_v.signum() != v.signum()
            && self.params.drive_force().abs() <= self.params.friction_max()
        {
            new_v = 0.0;
        }
        self.state.velocity = new_v;
        self.state.elapsed += dt;
        self.state.dissipated += self.params.friction_max() * (new_v * dt).abs();

        let next = self.state.progress + new_v * dt * PROGRESS_SCALE;
        if next > PROGRESS_MAX || next < PROGRESS_MIN {
            // Ran off the visible ramp; hold the last in-range position
            self.status = RunStatus::Succeeded;
        } else {
            self.state.progress = next;
        }
    }

    pub fn readout(&self) -> InclineReadout {
        let params = &self.params;
        let accel = slope_acceleration(params, self.state.velocity);
        let tension = match params.mode {
            InclineMode::Coupled { hanging_mass } => hanging_mass * (GRAVITY - accel),
            InclineMode::Single { .. } => 0.0,
        };
        let displacement = self.state.displacement();
        let height_gain = displacement * deg_to_rad(params.angle_deg).sin();
        let mut potential = params.mass * GRAVITY * height_gain;
        if let InclineMode::Coupled { hanging_mass } = params.mode {
            // The counterweight descends by the cord length the block climbs
            potential -= hanging_mass * GRAVITY * displacement;
        }
        InclineReadout {
            acceleration: accel,
            tension,
            weight_parallel: params.weight_parallel(),
            weight_normal: params.weight_normal(),
            normal_force: params.weight_normal(),
            friction_max: params.friction_max(),
            kinetic_energy: 0.5 * params.total_mass() * self.state.velocity * self.state.velocity,
            potential_energy: potential,
            dissipated_energy: self.state.dissipated,
        }
    }
}
