//! Lab state shared across all scenario screens
//!
//! The lab owns one [`SimSession`] per screen so switching screens never
//! discards progress: a paused incline run survives a detour through the
//! quiz or the pendulum. Only the active session's clock advances.

use crate::screen::ScreenKind;
use crate::session::{SessionError, SessionParams, SessionReadout, SimSession};

/// All six scenario sessions plus the active-screen cursor
#[derive(Clone, Debug, PartialEq)]
pub struct Lab {
    sessions: [SimSession; 6],
    active: ScreenKind,
}

impl Default for Lab {
    fn default() -> Self {
        Self::new()
    }
}

impl Lab {
    /// Every session starts at its scenario defaults, with vectors active
    pub fn new() -> Self {
        Self {
            sessions: ScreenKind::ALL.map(SimSession::for_screen),
            active: ScreenKind::Vectors,
        }
    }

    // --- Screen selection ---

    pub fn active_screen(&self) -> ScreenKind {
        self.active
    }

    /// Switch screens; the outgoing session keeps its state untouched
    pub fn activate(&mut self, screen: ScreenKind) {
        if self.active != screen {
            log::info!("switching to the {screen} screen");
            self.active = screen;
        }
    }

    // --- Session access ---

    pub fn session(&self, screen: ScreenKind) -> &SimSession {
        &self.sessions[screen.index()]
    }

    pub fn session_mut(&mut self, screen: ScreenKind) -> &mut SimSession {
        &mut self.sessions[screen.index()]
    }

    pub fn active_session(&self) -> &SimSession {
        self.session(self.active)
    }

    pub fn active_session_mut(&mut self) -> &mut SimSession {
        self.session_mut(self.active)
    }

    // --- Commands routed to the active session ---

    pub fn run(&mut self) {
        self.active_session_mut().run();
    }

    pub fn pause(&mut self) {
        self.active_session_mut().pause();
    }

    pub fn toggle(&mut self) {
        self.active_session_mut().toggle();
    }

    pub fn reset(&mut self) {
        self.active_session_mut().reset();
    }

    /// Parameters are routed by their tag, not the active screen
    pub fn set_params(&mut self, params: SessionParams) -> Result<(), SessionError> {
        self.session_mut(params.screen()).set_params(params)
    }

    /// Advance the active session if it is running; background sessions hold
    pub fn tick(&mut self, dt: f32) {
        let session = self.active_session_mut();
        if session.status().is_running() {
            session.tick(dt);
        }
    }

    pub fn readout(&self) -> SessionReadout {
        self.active_session().readout()
    }

    /// One-line situation summary handed to the chat tutor
    pub fn tutor_context(&self) -> String {
        format!(
            "The student is currently viewing the {} module. Help them with related theory and calculations.",
            self.active
        )
    }
}
