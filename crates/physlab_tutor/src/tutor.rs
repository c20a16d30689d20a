//! The student-facing ask() surface
//!
//! `ask` never returns an error: every failure becomes one of three fixed
//! classroom-friendly strings so the chat panel always has something to show.

use crate::backend::{GeminiBackend, TutorBackend, TutorError, TutorPrompt};
use crate::persona;

/// Shown when no API key is configured
pub const FALLBACK_NO_CREDENTIAL: &str = "Hello! The tutoring service is not connected yet. \
Ask your teacher to add the lab's API key. Meanwhile, keep exploring the simulations!";

/// Shown on rate limiting
pub const FALLBACK_BUSY: &str = "Hi! A lot of scientists are asking questions right now and \
the lab is a little crowded. Please wait a minute and ask me again. I have plenty to teach you!";

/// Shown on any other failure
pub const FALLBACK_RETRY: &str = "Hello! I hit a small technical snag while working through \
your question, but don't be discouraged. Could you ask me again? I'm here to support your learning!";

/// Chat tutor over a pluggable transport
pub struct Tutor<B: TutorBackend> {
    backend: B,
}

impl Tutor<GeminiBackend> {
    /// Tutor over the hosted endpoint with default model settings
    pub fn gemini(api_key: Option<String>) -> Self {
        Self::new(GeminiBackend::new(api_key))
    }
}

impl<B: TutorBackend> Tutor<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask the tutor; `context` describes the active screen, if any.
    ///
    /// Failures are logged and replaced by a fallback string, so the
    /// returned text is always printable as-is.
    pub fn ask(&self, message: &str, context: Option<&str>) -> String {
        let prompt = TutorPrompt {
            system_instruction: persona::system_instruction(context),
            message: message.to_string(),
        };
        match self.backend.generate(&prompt) {
            Ok(text) => text,
            Err(error) => {
                log::warn!("tutor request failed: {error}");
                Self::fallback_for(&error).to_string()
            }
        }
    }

    fn fallback_for(error: &TutorError) -> &'static str {
        match error {
            TutorError::MissingCredential => FALLBACK_NO_CREDENTIAL,
            TutorError::RateLimited => FALLBACK_BUSY,
            TutorError::Http(_) | TutorError::Transport(_) | TutorError::EmptyResponse => {
                FALLBACK_RETRY
            }
        }
    }
}
