//! Gravity presets for the pendulum scenario

/// A named celestial body and its surface gravity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityEnvironment {
    pub name: &'static str,
    /// Surface gravity in m/s²
    pub g: f32,
}

impl GravityEnvironment {
    pub const EARTH: Self = Self {
        name: "Earth",
        g: 9.81,
    };

    pub const MOON: Self = Self {
        name: "Moon",
        g: 1.62,
    };

    pub const MARS: Self = Self {
        name: "Mars",
        g: 3.71,
    };

    pub const JUPITER: Self = Self {
        name: "Jupiter",
        g: 24.79,
    };

    /// All selectable environments, in display order
    pub const ALL: [Self; 4] = [Self::EARTH, Self::MOON, Self::MARS, Self::JUPITER];
}

impl Default for GravityEnvironment {
    fn default() -> Self {
        Self::EARTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        assert_eq!(GravityEnvironment::EARTH.g, 9.81);
        assert_eq!(GravityEnvironment::MOON.g, 1.62);
        assert_eq!(GravityEnvironment::MARS.g, 3.71);
        assert_eq!(GravityEnvironment::JUPITER.g, 24.79);
    }

    #[test]
    fn test_all_lists_every_environment() {
        assert_eq!(GravityEnvironment::ALL.len(), 4);
        assert_eq!(GravityEnvironment::ALL[0], GravityEnvironment::EARTH);
        for env in GravityEnvironment::ALL {
            assert!(env.g > 0.0, "{} must pull downward", env.name);
        }
    }
}
