//! Loop-the-loop energy track
//!
//! A cart released from a ramp runs through a circular loop and out to the
//! finish. Motion is driven by an energy budget rather than by forces: the
//! release height fixes the total, friction drains it into heat, and the
//! cart's speed at any point falls out of what is left. The run fails when
//! the cart is too slow to hold the rail in the upper half of the loop.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::status::{RunStatus, StopReason};

/// Gravity used by this scenario in m/s²
pub const GRAVITY: f32 = 9.8;
/// Cart mass in kg
pub const CART_MASS: f32 = 1.0;

/// Coefficient of friction between cart and rail
const FRICTION_COEFF: f32 = 0.07;
/// Heat deposited per unit progress at μ = 1, in joules
const HEAT_PER_PROGRESS: f32 = 600.0;
/// Progress gained per second while running
const PROGRESS_RATE: f32 = 0.18;
/// A run counts as complete from this progress on
const COMPLETION_THRESHOLD: f32 = 0.99;

// Scene geometry; y grows downward
const GROUND_Y: f32 = 380.0;
const START_X: f32 = 80.0;
const RAMP_END_X: f32 = 250.0;
const LOOP_CENTER_X: f32 = 420.0;
const RUNOUT_LENGTH: f32 = 400.0;

/// Which stretch of the track a point lies on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TrackSegment {
    Ramp,
    Approach,
    Loop,
    Runout,
}

/// A point on the track in scene coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrackPoint {
    pub x: f32,
    pub y: f32,
    pub segment: TrackSegment,
}

impl TrackPoint {
    /// Height above the ground line, never negative
    pub fn height(&self) -> f32 {
        (GROUND_Y - self.y).max(0.0)
    }
}

/// Release height, loop radius and the friction toggle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackParams {
    /// Release height above the ground in scene units
    pub release_height: f32,
    /// Loop radius in scene units
    pub loop_radius: f32,
    pub friction_enabled: bool,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            release_height: 350.0,
            loop_radius: 60.0,
            friction_enabled: true,
        }
    }
}

impl TrackParams {
    pub fn with_release_height(mut self, height: f32) -> Self {
        self.release_height = height.clamp(150.0, 360.0);
        self
    }

    pub fn with_loop_radius(mut self, radius: f32) -> Self {
        self.loop_radius = radius.clamp(40.0, 90.0);
        self
    }

    pub fn with_friction(mut self, enabled: bool) -> Self {
        self.friction_enabled = enabled;
        self
    }

    /// Total energy budget fixed at release
    pub fn initial_energy(&self) -> f32 {
        self.release_height * GRAVITY * CART_MASS
    }

    /// Slowest speed that still holds the rail at the top of the loop
    pub fn min_loop_speed(&self) -> f32 {
        (GRAVITY * self.loop_radius).sqrt()
    }

    /// Frictionless release height needed to clear the loop, 2.5·R
    pub fn min_clear_height(&self) -> f32 {
        2.5 * self.loop_radius
    }

    /// Track point for a progress value, expected in [0, 1]
    pub fn point_at(&self, progress: f32) -> TrackPoint {
        let h = self.release_height;
        let r = self.loop_radius;
        if progress < 0.25 {
            let t = progress / 0.25;
            TrackPoint {
                x: START_X + t * (RAMP_END_X - START_X),
                y: (GROUND_Y - h) + t * h,
                segment: TrackSegment::Ramp,
            }
        } else if progress < 0.35 {
            let t = (progress - 0.25) / 0.1;
            TrackPoint {
                x: RAMP_END_X + t * (LOOP_CENTER_X - RAMP_END_X),
                y: GROUND_Y,
                segment: TrackSegment::Approach,
            }
        } else if progress < 0.75 {
            let t = (progress - 0.35) / 0.4;
            let angle = PI / 2.0 - t * 2.0 * PI;
            TrackPoint {
                x: LOOP_CENTER_X + r * angle.cos(),
                y: (GROUND_Y - r) + r * angle.sin(),
                segment: TrackSegment::Loop,
            }
        } else {
            let t = (progress - 0.75) / 0.25;
            TrackPoint {
                x: LOOP_CENTER_X + t * RUNOUT_LENGTH,
                y: GROUND_Y,
                segment: TrackSegment::Runout,
            }
        }
    }
}

/// Mutable record advanced by the stepper
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackState {
    /// Position along the track in [0, 1]
    pub progress: f32,
    /// Heat accumulated by friction so far, in joules
    pub thermal: f32,
    /// Simulated seconds since the run started
    pub elapsed: f32,
}

/// Energy split and position for the current instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrackReadout {
    pub progress: f32,
    pub position: TrackPoint,
    pub speed: f32,
    pub kinetic_energy: f32,
    pub potential_energy: f32,
    pub thermal_energy: f32,
    /// Ek + Ep + Eth; stays at the initial budget
    pub total_energy: f32,
    pub min_loop_speed: f32,
}

struct EnergySplit {
    potential: f32,
    kinetic: f32,
    speed: f32,
}

/// Budget split at a track point given the heat already shed
fn energy_split(params: &TrackParams, point: &TrackPoint, thermal: f32) -> EnergySplit {
    let potential = point.height() * GRAVITY * CART_MASS;
    let kinetic = (params.initial_energy() - potential - thermal).max(0.0);
    EnergySplit {
        potential,
        kinetic,
        speed: (2.0 * kinetic / CART_MASS).sqrt(),
    }
}

/// Energy-track stepper
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackSim {
    params: TrackParams,
    state: TrackState,
    status: RunStatus,
}

impl TrackSim {
    pub fn new(params: TrackParams) -> Self {
        Self {
            params,
            state: TrackState::default(),
            status: RunStatus::Idle,
        }
    }

    pub fn params(&self) -> &TrackParams {
        &self.params
    }

    pub fn state(&self) -> &TrackState {
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

    /// Back to the release point with the full energy budget
    pub fn reset(&mut self) {
        self.state = TrackState::default();
        self.status = RunStatus::Idle;
    }

    /// Replace all parameters; the run starts over
    pub fn set_params(&mut self, params: TrackParams) {
        self.params = params;
        self.reset();
    }

    /// Live friction toggle. Turning friction on restarts the run; turning
    /// it off keeps the run going and lets the accumulated heat drop on the
    /// next step.
    pub fn set_friction(&mut self, enabled: bool) {
        if enabled && !self.params.friction_enabled {
            self.params.friction_enabled = true;
            self.reset();
        } else {
            self.params.friction_enabled = enabled;
        }
    }

    /// Advance one step of `dt` seconds while running
    pub fn tick(&mut self, dt: f32) {
        if !self.status.is_running() {
            return;
        }
        let step = PROGRESS_RATE * dt;
        let candidate = (self.state.progress + step).min(1.0);
        let thermal = if self.params.friction_enabled {
            self.state.thermal + FRICTION_COEFF * HEAT_PER_PROGRESS * step
        } else {
            0.0
        };
        let point = self.params.point_at(candidate);
        let split = energy_split(&self.params, &point, thermal);

        // Above the loop centre the rail can only push inward; too slow and
        // the cart leaves it. The failed step is discarded so the readout
        // holds the last good position.
        let above_centre = point.y < GROUND_Y - self.params.loop_radius;
        if point.segment == TrackSegment::Loop
            && above_centre
            && split.speed < self.params.min_loop_speed()
        {
            self.status = RunStatus::Failed(StopReason::InsufficientSpeed);
            return;
        }

        self.state.progress = candidate;
        self.state.thermal = thermal;
        self.state.elapsed += dt;
        if candidate >= COMPLETION_THRESHOLD {
            self.status = RunStatus::Succeeded;
        }
    }

    pub fn readout(&self) -> TrackReadout {
        let point = self.params.point_at(self.state.progress);
        let split = energy_split(&self.params, &point, self.state.thermal);
        TrackReadout {
            progress: self.state.progress,
            position: point,
            speed: split.speed,
            kinetic_energy: split.kinetic,
            potential_energy: split.potential,
            thermal_energy: self.state.thermal,
            total_energy: split.kinetic + split.potential + self.state.thermal,
            min_loop_speed: self.params.min_loop_speed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn run_to_terminal(sim: &mut TrackSim) -> u32 {
        sim.run();
        let mut ticks = 0;
        while !sim.status().is_terminal() && ticks < 4000 {
            sim.tick(DT);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_track_geometry_landmarks() {
        let params = TrackParams::default();
        let start = params.point_at(0.0);
        assert_eq!(start.segment, TrackSegment::Ramp);
        assert_close(start.x, 80.0, 1e-3);
        assert_close(start.height(), 350.0, 1e-3);

        let foot = params.point_at(0.25);
        assert_eq!(foot.segment, TrackSegment::Approach);
        assert_close(foot.height(), 0.0, 1e-3);

        let loop_bottom = params.point_at(0.35);
        assert_eq!(loop_bottom.segment, TrackSegment::Loop);
        assert_close(loop_bottom.x, 420.0, 1e-3);
        assert_close(loop_bottom.height(), 0.0, 1e-3);

        let loop_top = params.point_at(0.55);
        assert_eq!(loop_top.segment, TrackSegment::Loop);
        assert_close(loop_top.x, 420.0, 1e-3);
        assert_close(loop_top.height(), 2.0 * params.loop_radius, 1e-3);

        let finish = params.point_at(1.0);
        assert_eq!(finish.segment, TrackSegment::Runout);
        assert_close(finish.height(), 0.0, 1e-3);
    }

    #[test]
    fn test_reset_holds_the_full_budget() {
        let sim = TrackSim::new(TrackParams::default());
        let readout = sim.readout();
        assert_close(readout.potential_energy, sim.params().initial_energy(), 1e-3);
        assert_eq!(readout.kinetic_energy, 0.0);
        assert_eq!(readout.speed, 0.0);
        assert_eq!(readout.thermal_energy, 0.0);
    }

    #[test]
    fn test_frictionless_run_conserves_energy() {
        let mut sim = TrackSim::new(TrackParams::default().with_friction(false));
        sim.run();
        let budget = sim.params().initial_energy();
        for _ in 0..400 {
            sim.tick(DT);
            let readout = sim.readout();
            assert_close(
                readout.kinetic_energy + readout.potential_energy,
                budget,
                0.5,
            );
            assert_eq!(readout.thermal_energy, 0.0);
            if sim.status().is_terminal() {
                break;
            }
        }
        assert_eq!(sim.status(), RunStatus::Succeeded);
    }

    #[test]
    fn test_default_run_completes_with_heat() {
        let mut sim = TrackSim::new(TrackParams::default());
        run_to_terminal(&mut sim);
        assert_eq!(sim.status(), RunStatus::Succeeded);
        let readout = sim.readout();
        // μ · 600 · p across the whole track
        assert_close(readout.thermal_energy, 0.07 * 600.0 * readout.progress, 0.1);
        assert!(readout.speed > 0.0, "the cart should roll through the finish");
    }

    #[test]
    fn test_low_release_fails_in_the_loop() {
        // 170 is well under the 225 needed to clear a radius-90 loop
        let params = TrackParams::default()
            .with_release_height(170.0)
            .with_loop_radius(90.0)
            .with_friction(false);
        let mut sim = TrackSim::new(params);
        run_to_terminal(&mut sim);
        assert_eq!(
            sim.status(),
            RunStatus::Failed(StopReason::InsufficientSpeed)
        );
        let readout = sim.readout();
        assert_eq!(readout.position.segment, TrackSegment::Loop);
        assert!(
            readout.position.height() > params.loop_radius,
            "the cart must have let go above the loop centre"
        );
        // The failed step never lands
        let frozen = *sim.state();
        sim.tick(DT);
        assert_eq!(*sim.state(), frozen);
    }

    #[test]
    fn test_high_release_clears_the_loop() {
        let params = TrackParams::default()
            .with_release_height(330.0)
            .with_loop_radius(90.0)
            .with_friction(false);
        let mut sim = TrackSim::new(params);
        run_to_terminal(&mut sim);
        assert_eq!(sim.status(), RunStatus::Succeeded);
    }

    #[test]
    fn test_min_clear_height_scales_with_radius() {
        assert_close(
            TrackParams::default().with_loop_radius(60.0).min_clear_height(),
            150.0,
            1e-3,
        );
        assert_close(
            TrackParams::default().with_loop_radius(90.0).min_clear_height(),
            225.0,
            1e-3,
        );
    }

    #[test]
    fn test_disabling_friction_drops_accumulated_heat() {
        let mut sim = TrackSim::new(TrackParams::default());
        sim.run();
        for _ in 0..60 {
            sim.tick(DT);
        }
        assert!(sim.state().thermal > 0.0);
        sim.set_friction(false);
        assert_eq!(sim.status(), RunStatus::Running, "the run keeps going");
        sim.tick(DT);
        assert_eq!(sim.state().thermal, 0.0);
    }

    #[test]
    fn test_enabling_friction_restarts_the_run() {
        let mut sim = TrackSim::new(TrackParams::default().with_friction(false));
        sim.run();
        for _ in 0..60 {
            sim.tick(DT);
        }
        assert!(sim.state().progress > 0.0);
        sim.set_friction(true);
        assert_eq!(sim.status(), RunStatus::Idle);
        assert_eq!(sim.state().progress, 0.0);
        assert!(sim.params().friction_enabled);
    }

    #[test]
    fn test_builder_clamps_to_slider_ranges() {
        let params = TrackParams::default()
            .with_release_height(1000.0)
            .with_loop_radius(10.0);
        assert_eq!(params.release_height, 360.0);
        assert_eq!(params.loop_radius, 40.0);
    }
}
