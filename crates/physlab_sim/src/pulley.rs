//! Coupled-boxes scenario
//!
//! Two boxes on level ground joined by a cord, pulled by an external force
//! on the lead box. The pair moves as one rigid unit: either the force beats
//! the combined friction or nothing moves at all.

use serde::{Deserialize, Serialize};

use crate::status::RunStatus;

/// Gravity used by this scenario in m/s²
pub const GRAVITY: f32 = 9.81;

/// Conversion from physical displacement in metres to scene units
const SCENE_SCALE: f32 = 40.0;
/// Scene x coordinate where the run ends
const TRACK_END: f32 = 250.0;

/// Masses, friction and the pulling force
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PulleyParams {
    /// Follower box mass in kg; the cord tension drags it along
    pub follower_mass: f32,
    /// Lead box mass in kg; the external force acts here
    pub lead_mass: f32,
    /// Coefficient of friction between boxes and ground
    pub friction: f32,
    /// External force on the lead box in newtons
    pub applied_force: f32,
}

impl Default for PulleyParams {
    fn default() -> Self {
        Self {
            follower_mass: 25.0,
            lead_mass: 15.0,
            friction: 0.15,
            applied_force: 150.0,
        }
    }
}

impl PulleyParams {
    pub fn with_follower_mass(mut self, mass: f32) -> Self {
        self.follower_mass = mass.clamp(1.0, 50.0);
        self
    }

    pub fn with_lead_mass(mut self, mass: f32) -> Self {
        self.lead_mass = mass.clamp(1.0, 50.0);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.clamp(0.0, 0.8);
        self
    }

    pub fn with_applied_force(mut self, force: f32) -> Self {
        self.applied_force = force.clamp(0.0, 300.0);
        self
    }

    pub fn total_mass(&self) -> f32 {
        self.follower_mass + self.lead_mass
    }

    /// Combined friction force on both boxes
    pub fn friction_max(&self) -> f32 {
        self.friction * self.total_mass() * GRAVITY
    }

    /// Shared acceleration of the pair; zero below the friction threshold
    pub fn acceleration(&self) -> f32 {
        if self.applied_force > self.friction_max() {
            (self.applied_force - self.friction_max()) / self.total_mass()
        } else {
            0.0
        }
    }

    /// Cord tension: what it takes to drag the follower box
    pub fn tension(&self) -> f32 {
        self.follower_mass * self.acceleration() + self.friction * self.follower_mass * GRAVITY
    }
}

/// Mutable record advanced by the stepper
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PulleyState {
    /// Shared position in scene units, 0 at the start
    pub position: f32,
    /// Shared speed in m/s
    pub velocity: f32,
    /// Simulated seconds since the run started
    pub elapsed: f32,
    /// Heat shed to friction so far, in joules
    pub dissipated: f32,
}

/// Forces and energies for the current instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PulleyReadout {
    pub acceleration: f32,
    pub tension: f32,
    pub friction_max: f32,
    pub kinetic_energy: f32,
    pub dissipated_energy: f32,
}

/// Coupled-boxes stepper
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PulleySim {
    params: PulleyParams,
    state: PulleyState,
    status: RunStatus,
}

impl PulleySim {
    pub fn new(params: PulleyParams) -> Self {
        Self {
            params,
            state: PulleyState::default(),
            status: RunStatus::Idle,
        }
    }

    pub fn params(&self) -> &PulleyParams {
        &self.params
    }

    pub fn state(&self) -> &PulleyState {
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
        self.state = PulleyState::default();
        self.status = RunStatus::Idle;
    }

    /// Replace all parameters; the run starts over
    pub fn set_params(&mut self, params: PulleyParams) {
        self.params = params;
        self.reset();
    }

    /// Advance one step of `dt` seconds while running
    pub fn tick(&mut self, dt: f32) {
        if !self.status.is_running() {
            return;
        }
        let new_v = self.state.velocity + self.params.acceleration() * dt;
        self.state.velocity = new_v;
        self.state.elapsed += dt;
        self.state.dissipated += self.params.friction_max() * (new_v * dt).abs();

        let next = self.state.position + new_v * SCENE_SCALE * dt;
        if next > TRACK_END {
            // End of the visible track; hold the last in-range position
            self.status = RunStatus::Succeeded;
        } else {
            self.state.position = next;
        }
    }

    pub fn readout(&self) -> PulleyReadout {
        let params = &self.params;
        PulleyReadout {
            acceleration: params.acceleration(),
            tension: params.tension(),
            friction_max: params.friction_max(),
            kinetic_energy: 0.5 * params.total_mass() * self.state.velocity * self.state.velocity,
            dissipated_energy: self.state.dissipated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_default_forces() {
        let params = PulleyParams::default();
        // f_max = 0.15 · 40 kg · 9.81
        assert!((params.friction_max() - 58.86).abs() < 0.01);
        // a = (150 − 58.86) / 40
        assert!((params.acceleration() - 2.2785).abs() < 0.001);
        // T = 25·a + 0.15·25·9.81
        assert!((params.tension() - 93.75).abs() < 0.05);
    }

    #[test]
    fn test_force_below_friction_means_no_motion() {
        let mut sim = PulleySim::new(PulleyParams::default().with_applied_force(50.0));
        sim.run();
        for _ in 0..120 {
            sim.tick(DT);
        }
        assert_eq!(sim.params().acceleration(), 0.0);
        assert_eq!(sim.state().velocity, 0.0);
        assert_eq!(sim.state().position, 0.0);
        assert_eq!(sim.state().dissipated, 0.0, "static friction does no work");
    }

    #[test]
    fn test_boxes_accelerate_above_threshold() {
        let mut sim = PulleySim::new(PulleyParams::default());
        sim.run();
        for _ in 0..30 {
            sim.tick(DT);
        }
        assert!(sim.state().velocity > 0.0);
        assert!(sim.state().position > 0.0);
        assert!(sim.state().dissipated > 0.0);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut sim = PulleySim::new(PulleyParams::default());
        sim.tick(DT);
        assert_eq!(*sim.state(), PulleyState::default());
        sim.run();
        sim.pause();
        sim.tick(DT);
        assert_eq!(*sim.state(), PulleyState::default());
    }

    #[test]
    fn test_track_end_completes_the_run() {
        let mut sim = PulleySim::new(PulleyParams::default().with_applied_force(300.0));
        sim.run();
        let mut ticks = 0;
        while !sim.status().is_terminal() && ticks < 4000 {
            sim.tick(DT);
            ticks += 1;
        }
        assert_eq!(sim.status(), RunStatus::Succeeded);
        assert!(sim.state().position <= TRACK_END);
        let frozen = *sim.state();
        sim.tick(DT);
        assert_eq!(*sim.state(), frozen, "terminal state must hold");
    }

    #[test]
    fn test_set_params_resets_the_run() {
        let mut sim = PulleySim::new(PulleyParams::default());
        sim.run();
        for _ in 0..30 {
            sim.tick(DT);
        }
        sim.set_params(PulleyParams::default().with_friction(0.5));
        assert_eq!(sim.status(), RunStatus::Idle);
        assert_eq!(*sim.state(), PulleyState::default());
    }

    #[test]
    fn test_builder_clamps_to_slider_ranges() {
        let params = PulleyParams::default()
            .with_follower_mass(0.0)
            .with_lead_mass(100.0)
            .with_friction(2.0)
            .with_applied_force(-5.0);
        assert_eq!(params.follower_mass, 1.0);
        assert_eq!(params.lead_mass, 50.0);
        assert_eq!(params.friction, 0.8);
        assert_eq!(params.applied_force, 0.0);
    }
}
