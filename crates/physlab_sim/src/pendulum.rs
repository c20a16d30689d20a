//! Simple-pendulum scenario
//!
//! Small-angle closed form on a selectable celestial body: the angle follows
//! θ(t) = θ₀·cos(ω·t) with ω = √(g/L). The stepper only advances elapsed
//! time; every displayed quantity derives from it.

use std::f32::consts::PI;

use physlab_math::{deg_to_rad, rad_to_deg};
use serde::{Deserialize, Serialize};

use crate::gravity::GravityEnvironment;
use crate::status::RunStatus;

/// Cord length, bob mass and release angle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendulumParams {
    /// Bob mass in kg
    pub mass: f32,
    /// Cord length in metres
    pub length: f32,
    /// Release angle in degrees
    pub initial_angle_deg: f32,
    /// Surface gravity in m/s², usually from a [`GravityEnvironment`]
    pub gravity: f32,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            mass: 2.0,
            length: 1.5,
            initial_angle_deg: 30.0,
            gravity: GravityEnvironment::EARTH.g,
        }
    }
}

impl PendulumParams {
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass.clamp(0.5, 10.0);
        self
    }

    pub fn with_length(mut self, length: f32) -> Self {
        self.length = length.clamp(0.5, 2.5);
        self
    }

    pub fn with_initial_angle_deg(mut self, angle_deg: f32) -> Self {
        self.initial_angle_deg = angle_deg.clamp(5.0, 60.0);
        self
    }

    /// Take gravity from an environment preset
    pub fn with_environment(mut self, environment: GravityEnvironment) -> Self {
        self.gravity = environment.g;
        self
    }

    /// Natural angular frequency √(g/L)
    pub fn angular_frequency(&self) -> f32 {
        (self.gravity / self.length).sqrt()
    }

    /// Swing period 2π√(L/g)
    pub fn period(&self) -> f32 {
        2.0 * PI * (self.length / self.gravity).sqrt()
    }

    pub fn frequency(&self) -> f32 {
        1.0 / self.period()
    }

    /// Bob weight in newtons
    pub fn weight(&self) -> f32 {
        self.mass * self.gravity
    }

    /// Swing angle in radians at time `t`
    fn angle_rad_at(&self, t: f32) -> f32 {
        deg_to_rad(self.initial_angle_deg) * (self.angular_frequency() * t).cos()
    }
}

/// Mutable record advanced by the stepper
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PendulumState {
    /// Simulated seconds since the run started
    pub elapsed: f32,
}

/// Angle and force breakdown for the current instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PendulumReadout {
    /// Current swing angle in degrees
    pub angle_deg: f32,
    /// θ̇ in rad/s
    pub angular_velocity: f32,
    pub weight: f32,
    /// Tangential weight component W·sin θ, the restoring force
    pub restoring_force: f32,
    /// Radial weight component W·cos θ
    pub radial_force: f32,
    /// Cord tension with the centripetal top-up
    pub tension: f32,
    pub period: f32,
    pub frequency: f32,
}

/// Simple-pendulum stepper; motion is closed-form over elapsed time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendulumSim {
    params: PendulumParams,
    state: PendulumState,
    status: RunStatus,
}

impl PendulumSim {
    pub fn new(params: PendulumParams) -> Self {
        Self {
            params,
            state: PendulumState::default(),
            status: RunStatus::Idle,
        }
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    pub fn state(&self) -> &PendulumState {
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

    /// Back to the release angle
    pub fn reset(&mut self) {
        self.state = PendulumState::default();
        self.status = RunStatus::Idle;
    }

    /// Replace all parameters; the run starts over
    pub fn set_params(&mut self, params: PendulumParams) {
        self.params = params;
        self.reset();
    }

    /// Advance elapsed time while running; no terminal condition
    pub fn tick(&mut self, dt: f32) {
        if !self.status.is_running() {
            return;
        }
        self.state.elapsed += dt;
    }

    pub fn readout(&self) -> PendulumReadout {
        let params = &self.params;
        let omega = params.angular_frequency();
        let amplitude_rad = deg_to_rad(params.initial_angle_deg);
        let angle_rad = params.angle_rad_at(self.state.elapsed);
        let weight = params.weight();
        let radial = weight * angle_rad.cos();
        // School-level tension: radial weight plus a constant centripetal
        // top-up sized from the release amplitude
        let centripetal = params.mass * (omega * amplitude_rad).powi(2) * params.length;
        PendulumReadout {
            angle_deg: rad_to_deg(angle_rad),
            angular_velocity: -amplitude_rad * omega * (omega * self.state.elapsed).sin(),
            weight,
            restoring_force: weight * angle_rad.sin(),
            radial_force: radial,
            tension: radial + centripetal,
            period: params.period(),
            frequency: params.frequency(),
        }
    }
}
