//! Scenario screen enumeration

use serde::{Deserialize, Serialize};

/// One scenario screen of the lab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenKind {
    Vectors,
    Incline,
    Pulley,
    Spring,
    Pendulum,
    Energy,
}

impl ScreenKind {
    /// All screens in display order
    pub const ALL: [ScreenKind; 6] = [
        ScreenKind::Vectors,
        ScreenKind::Incline,
        ScreenKind::Pulley,
        ScreenKind::Spring,
        ScreenKind::Pendulum,
        ScreenKind::Energy,
    ];

    /// Title shown to students
    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::Vectors => "Vector Workbench",
            ScreenKind::Incline => "Inclined Plane",
            ScreenKind::Pulley => "Coupled Boxes",
            ScreenKind::Spring => "Hooke's Law",
            ScreenKind::Pendulum => "Simple Pendulum",
            ScreenKind::Energy => "Energy Track",
        }
    }

    /// Position in [`ScreenKind::ALL`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, screen) in ScreenKind::ALL.into_iter().enumerate() {
            assert_eq!(screen.index(), i, "{screen} is out of order");
        }
    }

    #[test]
    fn test_titles_are_unique() {
        for a in ScreenKind::ALL {
            for b in ScreenKind::ALL {
                if a != b {
                    assert_ne!(a.title(), b.title());
                }
            }
        }
    }
}
