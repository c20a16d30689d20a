//! Vertical-spring scenario (Hooke's law)
//!
//! A spring hangs from a fixture with an optional mass on its end. The
//! equilibrium extension comes straight from k·x = m·g; a run superimposes a
//! fixed-amplitude oscillation about that point, evaluated in closed form
//! from elapsed time.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::status::RunStatus;

/// Gravity used by this scenario in m/s²
pub const GRAVITY: f32 = 9.81;

/// Oscillation amplitude in metres
pub const AMPLITUDE: f32 = 0.05;

/// A named spring stock and its stiffness
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringMaterial {
    pub name: &'static str,
    /// Spring constant in N/m
    pub stiffness: f32,
}

impl SpringMaterial {
    /// Soft
    pub const PLASTIC: Self = Self {
        name: "Plastic",
        stiffness: 150.0,
    };

    /// Medium
    pub const STEEL: Self = Self {
        name: "Steel",
        stiffness: 400.0,
    };

    /// Stiff
    pub const INDUSTRIAL: Self = Self {
        name: "Industrial",
        stiffness: 850.0,
    };

    /// All selectable materials, in display order
    pub const ALL: [Self; 3] = [Self::PLASTIC, Self::STEEL, Self::INDUSTRIAL];
}

/// Spring constant and the hung mass
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    /// Spring constant in N/m
    pub stiffness: f32,
    /// Hung mass in kg; zero leaves the spring unloaded
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SpringMaterial::STEEL.stiffness,
            mass: 0.0,
        }
    }
}

impl SpringParams {
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness.clamp(50.0, 1000.0);
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass.clamp(0.0, 10.0);
        self
    }

    /// Take the spring constant from a material preset
    pub fn with_material(mut self, material: SpringMaterial) -> Self {
        self.stiffness = material.stiffness;
        self
    }

    /// Weight of the hung mass in newtons
    pub fn weight(&self) -> f32 {
        self.mass * GRAVITY
    }

    /// Rest extension where the spring carries the weight, m·g/k
    pub fn equilibrium_extension(&self) -> f32 {
        if self.mass > 0.0 {
            self.weight() / self.stiffness
        } else {
            0.0
        }
    }

    /// Natural angular frequency √(k/m); zero when unloaded
    pub fn angular_frequency(&self) -> f32 {
        if self.mass > 0.0 {
            (self.stiffness / self.mass).sqrt()
        } else {
            0.0
        }
    }

    /// Oscillation period 2π/ω; zero when unloaded
    pub fn period(&self) -> f32 {
        let omega = self.angular_frequency();
        if omega > 0.0 {
            TAU / omega
        } else {
            0.0
        }
    }
}

/// Mutable record advanced by the stepper
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpringState {
    /// Simulated seconds since the run started
    pub elapsed: f32,
}

/// Extension, speed and force for the current instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpringReadout {
    pub weight: f32,
    pub equilibrium_extension: f32,
    /// Current extension from the unloaded end, in metres
    pub displacement: f32,
    /// Rate of change of the extension, in m/s
    pub velocity: f32,
    /// Restoring force k·x in newtons
    pub spring_force: f32,
    pub period: f32,
}

/// Vertical-spring stepper; motion is closed-form over elapsed time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringSim {
    params: SpringParams,
    state: SpringState,
    status: RunStatus,
}

impl SpringSim {
    pub fn new(params: SpringParams) -> Self {
        Self {
            params,
            state: SpringState::default(),
            status: RunStatus::Idle,
        }
    }

    pub fn params(&self) -> &SpringParams {
        &self.params
    }

    pub fn state(&self) -> &SpringState {
        &self.state
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Start or resume the oscillation; ignored while the spring is unloaded
    pub fn run(&mut self) {
        if self.params.mass <= 0.0 {
            return;
        }
        self.status = self.status.on_run();
    }

    pub fn pause(&mut self) {
        self.status = self.status.on_pause();
    }

    pub fn toggle(&mut self) {
        if self.params.mass <= 0.0 {
            return;
        }
        self.status = self.status.on_toggle();
    }

    /// Back to rest at the equilibrium extension
    pub fn reset(&mut self) {
        self.state = SpringState::default();
        self.status = RunStatus::Idle;
    }

    /// Replace all parameters; the run starts over
    pub fn set_params(&mut self, params: SpringParams) {
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

    pub fn readout(&self) -> SpringReadout {
        let params = &self.params;
        let omega = params.angular_frequency();
        let phase = omega * self.state.elapsed;
        let displacement = params.equilibrium_extension() + AMPLITUDE * phase.sin();
        SpringReadout {
            weight: params.weight(),
            equilibrium_extension: params.equilibrium_extension(),
            displacement,
            velocity: AMPLITUDE * omega * phase.cos(),
            spring_force: params.stiffness * displacement,
            period: params.period(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_equilibrium_balances_weight() {
        for mass in [0.5_f32, 2.0, 4.0, 10.0] {
            for material in SpringMaterial::ALL {
                let params = SpringParams::default()
                    .with_material(material)
                    .with_mass(mass);
                let x = params.equilibrium_extension();
                assert_close(params.stiffness * x, params.weight(), 1e-3);
            }
        }
    }

    #[test]
    fn test_unloaded_spring_has_no_extension() {
        let params = SpringParams::default();
        assert_eq!(params.equilibrium_extension(), 0.0);
        assert_eq!(params.angular_frequency(), 0.0);
        assert_eq!(params.period(), 0.0);
    }

    #[test]
    fn test_run_requires_a_mass() {
        let mut sim = SpringSim::new(SpringParams::default());
        sim.run();
        assert_eq!(sim.status(), RunStatus::Idle, "nothing to oscillate");
        sim.toggle();
        assert_eq!(sim.status(), RunStatus::Idle);

        sim.set_params(SpringParams::default().with_mass(2.0));
        sim.run();
        assert_eq!(sim.status(), RunStatus::Running);
    }

    #[test]
    fn test_oscillation_about_equilibrium() {
        let params = SpringParams::default().with_mass(4.0);
        let mut sim = SpringSim::new(params);
        sim.run();
        // A quarter period lands on the upper turning point
        let quarter = params.period() / 4.0;
        let steps = 1000;
        for _ in 0..steps {
            sim.tick(quarter / steps as f32);
        }
        let readout = sim.readout();
        assert_close(
            readout.displacement,
            params.equilibrium_extension() + AMPLITUDE,
            1e-3,
        );
        assert_close(readout.velocity, 0.0, 1e-2);
    }

    #[test]
    fn test_pause_freezes_the_phase() {
        let mut sim = SpringSim::new(SpringParams::default().with_mass(2.0));
        sim.run();
        for _ in 0..30 {
            sim.tick(1.0 / 60.0);
        }
        sim.pause();
        let frozen = sim.readout();
        sim.tick(1.0 / 60.0);
        assert_eq!(sim.readout(), frozen);
    }

    #[test]
    fn test_material_presets() {
        assert_eq!(SpringMaterial::PLASTIC.stiffness, 150.0);
        assert_eq!(SpringMaterial::STEEL.stiffness, 400.0);
        assert_eq!(SpringMaterial::INDUSTRIAL.stiffness, 850.0);
        let params = SpringParams::default().with_material(SpringMaterial::INDUSTRIAL);
        assert_eq!(params.stiffness, 850.0);
    }

    #[test]
    fn test_stiffer_spring_stretches_less() {
        let soft = SpringParams::default()
            .with_material(SpringMaterial::PLASTIC)
            .with_mass(4.0);
        let stiff = SpringParams::default()
            .with_material(SpringMaterial::INDUSTRIAL)
            .with_mass(4.0);
        assert!(stiff.equilibrium_extension() < soft.equilibrium_extension());
    }
}
