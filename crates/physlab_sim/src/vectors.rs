//! Vector composition workbench
//!
//! The only scenario without a clock: readouts are resolved directly from
//! the current parameters, so there is no run status and `tick` is a no-op
//! at the session layer.

use physlab_math::Vec2;
use serde::{Deserialize, Serialize};

/// Magnitude slider range in newtons
const MAGNITUDE_RANGE: (f32, f32) = (0.0, 180.0);
/// Direction slider range in degrees, counterclockwise from +x
const DIRECTION_RANGE: (f32, f32) = (0.0, 360.0);

/// A force given as magnitude and direction
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolarVector {
    /// Magnitude in newtons
    pub magnitude: f32,
    /// Direction in degrees, counterclockwise from +x
    pub direction_deg: f32,
}

impl PolarVector {
    pub fn new(magnitude: f32, direction_deg: f32) -> Self {
        Self {
            magnitude: magnitude.clamp(MAGNITUDE_RANGE.0, MAGNITUDE_RANGE.1),
            direction_deg: direction_deg.clamp(DIRECTION_RANGE.0, DIRECTION_RANGE.1),
        }
    }

    /// Resolve into Cartesian components
    pub fn to_vec2(self) -> Vec2 {
        Vec2::from_polar(self.magnitude, self.direction_deg)
    }
}

/// Which force the resultant readout reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Only vector A
    #[default]
    Individual,
    /// The sum A + B
    Sum,
}

/// Workbench parameters: two polar forces and the display mode
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorParams {
    pub a: PolarVector,
    pub b: PolarVector,
    pub mode: DisplayMode,
}

impl Default for VectorParams {
    fn default() -> Self {
        Self {
            a: PolarVector::new(100.0, 45.0),
            b: PolarVector::new(80.0, 120.0),
            mode: DisplayMode::Individual,
        }
    }
}

impl VectorParams {
    pub fn with_a(mut self, magnitude: f32, direction_deg: f32) -> Self {
        self.a = PolarVector::new(magnitude, direction_deg);
        self
    }

    pub fn with_b(mut self, magnitude: f32, direction_deg: f32) -> Self {
        self.b = PolarVector::new(magnitude, direction_deg);
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Resolved components and the resultant for the current parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VectorReadout {
    pub a: Vec2,
    pub b: Vec2,
    pub resultant: Vec2,
    /// |resultant| in newtons
    pub magnitude: f32,
    /// atan2 direction of the resultant in degrees, in (-180, 180]
    pub direction_deg: f32,
}

/// Stateless host for the vector scenario
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VectorWorkbench {
    params: VectorParams,
}

impl VectorWorkbench {
    pub fn new(params: VectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &VectorParams {
        &self.params
    }

    pub fn set_params(&mut self, params: VectorParams) {
        self.params = params;
    }

    pub fn readout(&self) -> VectorReadout {
        let a = self.params.a.to_vec2();
        let b = self.params.b.to_vec2();
        let resultant = match self.params.mode {
            DisplayMode::Individual => a,
            DisplayMode::Sum => a + b,
        };
        VectorReadout {
            a,
            b,
            resultant,
            magnitude: resultant.length(),
            direction_deg: resultant.angle_deg(),
        }
    }
}
