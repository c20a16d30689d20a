//! Chat tutor for the physics lab
//!
//! This crate wraps the hosted generative-language endpoint behind a
//! classroom-safe surface:
//!
//! - [`Tutor`] - `ask(message, context)` that never errors
//! - [`TutorBackend`] - transport seam so tests can script responses
//! - [`GeminiBackend`] - blocking REST client for `generateContent`
//! - [`system_instruction`] - the fixed persona with context interpolated

mod persona;
mod backend;
mod tutor;

pub use persona::{system_instruction, DEFAULT_CONTEXT};
pub use backend::{GeminiBackend, TutorBackend, TutorError, TutorPrompt};
pub use tutor::{Tutor, FALLBACK_BUSY, FALLBACK_NO_CREDENTIAL, FALLBACK_RETRY};
