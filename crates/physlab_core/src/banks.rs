//! Built-in question banks
//!
//! One short formative bank per scenario screen and the ten-question final
//! on energy conservation. Banks hand out fresh [`QuizSheet`]s, so every
//! attempt starts blank.

use crate::quiz::{QuizQuestion, QuizSheet};
use crate::screen::ScreenKind;

/// Minimum final-quiz score that counts as a pass
pub const FINAL_PASS_MARK: usize = 7;

/// Whether a final-quiz score meets the pass mark
pub fn passed(score: usize) -> bool {
    score >= FINAL_PASS_MARK
}

fn q(prompt: &str, options: [&str; 4], answer: usize) -> QuizQuestion {
    QuizQuestion::new(prompt, options.into_iter().map(String::from).collect(), answer)
}

/// The short formative quiz shown on a scenario screen
pub fn formative_sheet(screen: ScreenKind) -> QuizSheet {
    QuizSheet::new(match screen {
        ScreenKind::Vectors => vec![
            q(
                "What is the horizontal (x) component of a 100 N vector at 0°?",
                ["0 N", "100 N", "50 N", "100·sin(0°) N"],
                1,
            ),
            q(
                "A vector with components (+, −) lies in which quadrant?",
                ["I", "II", "III", "IV"],
                3,
            ),
            q(
                "Which theorem gives the magnitude of the resultant R?",
                ["Thales", "Pythagoras", "Euclid", "Bernoulli"],
                1,
            ),
            q(
                "Two perpendicular vectors of 3 N and 4 N add up to a resultant of:",
                ["7 N", "1 N", "5 N", "12 N"],
                2,
            ),
        ],
        ScreenKind::Incline => vec![
            q(
                "Which force is perpendicular to the surface of an inclined plane?",
                ["Weight", "Normal", "Friction", "Tension"],
                1,
            ),
            q(
                "With no friction, a block on a 30° incline slides down at:",
                ["g", "g·sin(30°)", "g·cos(30°)", "Zero"],
                1,
            ),
            q(
                "In the coupled system, if m2·g exceeds m1·g·sin(θ) plus friction, the system:",
                [
                    "Lowers m1 (m2 rises)",
                    "Raises m1 (m2 drops)",
                    "Stays at rest",
                    "Explodes",
                ],
                1,
            ),
            q(
                "If the block moves up the slope, which way does friction point?",
                ["Up the slope", "Down the slope", "Along the normal", "There is none"],
                1,
            ),
        ],
        ScreenKind::Pulley => vec![
            q(
                "Which force joins the two boxes in the horizontal system?",
                ["Weight", "Normal", "Tension", "Gravity"],
                2,
            ),
            q(
                "If the applied force doubles, the acceleration:",
                [
                    "Always doubles",
                    "Depends on the net friction",
                    "Does not change",
                    "Decreases",
                ],
                1,
            ),
            q(
                "The total friction force equals:",
                ["μ·m1·g", "μ·m2·g", "μ·(m1+m2)·g", "The applied force"],
                2,
            ),
            q(
                "If the acceleration is zero, the applied force is:",
                [
                    "Greater than friction",
                    "Less than or equal to friction",
                    "Infinite",
                    "Zero",
                ],
                1,
            ),
        ],
        ScreenKind::Spring => vec![
            q(
                "Keeping the same mass, what happens to the extension x on an Industrial spring?",
                ["It grows", "It shrinks", "It stays the same", "It doubles"],
                1,
            ),
            q(
                "With the spring unloaded (m = 0), the elastic force equals:",
                ["m·g", "k·x", "Zero (0 N)", "Infinity"],
                2,
            ),
            q(
                "The slope of the force-versus-extension graph is:",
                ["The mass", "The constant k", "Gravity", "The energy"],
                1,
            ),
            q(
                "A 400 N/m spring loaded with 4 kg (about 40 N) stretches:",
                ["10 cm", "40 cm", "100 cm", "5 cm"],
                0,
            ),
        ],
        ScreenKind::Pendulum => vec![
            q(
                "How does the bob's mass affect the period of a pendulum?",
                ["Increases it", "Decreases it", "It has no effect", "Doubles it"],
                2,
            ),
            q(
                "If the cord gets longer, the period:",
                ["Increases", "Decreases", "Stays the same", "Becomes zero"],
                0,
            ),
            q(
                "On which of these bodies does a pendulum swing slowest (longest period)?",
                ["Jupiter", "Earth", "Moon", "Mars"],
                2,
            ),
            q(
                "The force that brings the pendulum back to the centre is:",
                [
                    "The tension",
                    "The tangential weight component",
                    "The mass",
                    "Inertia",
                ],
                1,
            ),
            q(
                "At the lowest point of the swing, the tension is:",
                ["Minimum", "Maximum", "Zero", "Equal to the weight alone"],
                1,
            ),
        ],
        ScreenKind::Energy => vec![
            q(
                "The minimum speed to hold the rail at the top of a loop of radius R satisfies:",
                ["v² = g·R", "v = g·R", "v² = 2·g·R", "v = R/g"],
                0,
            ),
            q(
                "Released from below the minimum height, the cart will:",
                [
                    "Complete the loop slowly",
                    "Leave the rail in the upper half",
                    "Speed up at the top",
                    "Stop exactly at the top",
                ],
                1,
            ),
            q(
                "With friction enabled, the thermal energy along the track:",
                ["Shrinks", "Stays zero", "Grows with distance travelled", "Oscillates"],
                2,
            ),
            q(
                "At the top of the loop, the potential energy relative to the ground is:",
                ["Zero", "m·g·R", "m·g·2R", "Equal to the kinetic energy"],
                2,
            ),
        ],
    })
}

/// The ten-question final on energy conservation
pub fn final_sheet() -> QuizSheet {
    QuizSheet::new(vec![
        q(
            "What does the principle of conservation of energy state?",
            [
                "Energy is created",
                "Energy only transforms",
                "Energy always decreases",
                "Energy equals weight",
            ],
            1,
        ),
        q(
            "The energy a body has because of its height is:",
            ["Kinetic", "Thermal", "Potential", "Electric"],
            2,
        ),
        q(
            "Friction converts mechanical energy into:",
            ["More speed", "Gravity", "Heat (thermal)", "Potential"],
            2,
        ),
        q(
            "The SI unit of energy is the:",
            ["Newton", "Watt", "Joule", "Pascal"],
            2,
        ),
        q(
            "At the bottom of the ramp (no friction), the kinetic energy is:",
            ["Zero", "Minimum", "Maximum", "Negative"],
            2,
        ),
        q(
            "If you double the release height, the initial potential energy:",
            ["Stays the same", "Doubles", "Shrinks", "Becomes zero"],
            1,
        ),
        q(
            "The sum Ek + Ep is known as:",
            ["Work", "Power", "Mechanical energy", "Thermal energy"],
            2,
        ),
        q(
            "To complete a loop of radius R successfully you need:",
            ["High friction", "Enough height", "Zero gravity", "Low speed"],
            1,
        ),
        q(
            "When the cart is stopped by friction, the total energy:",
            ["Disappears", "Turns into heat", "Increases", "Keeps its form"],
            1,
        ),
        q(
            "The correct formula for kinetic energy is:",
            ["m·g·h", "m·v", "½·m·v²", "F·d"],
            2,
        ),
    ])
}
