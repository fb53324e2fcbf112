//! Submission lifecycle for one classification input mode.
//!
//! The upload and URL flows each own an independent [`ClassifySession`]; the two
//! never share state. A session moves through an explicit state machine instead
//! of loosely coupled loading/result/error flags:
//!
//! ```text
//! Idle -> PreviewReady -> Submitting -> Succeeded
//!                                    -> Failed
//! ```
//!
//! Submitting is only legal from `PreviewReady`, which is what lets a frontend
//! disable its submit control everywhere else. Completion events are only legal
//! while a request is in flight, so a stale response can never clobber a session
//! the user has already moved past.

use super::entity::Classification;
use thiserror::Error;

/// Where a single input mode currently is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No input chosen yet.
    Idle,
    /// An input is selected and previewable; submission is allowed.
    PreviewReady,
    /// Exactly one request is in flight.
    Submitting,
    /// The last request produced a classification.
    Succeeded(Classification),
    /// The last request surfaced an error message.
    Failed(String),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::PreviewReady => "PreviewReady",
            Self::Submitting => "Submitting",
            Self::Succeeded(_) => "Succeeded",
            Self::Failed(_) => "Failed",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("illegal transition: {event} while {from}")]
pub struct InvalidTransition {
    pub from: &'static str,
    pub event: &'static str,
}

/// State machine for one input mode (upload or URL).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifySession {
    state: SessionState,
}

impl Default for ClassifySession {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifySession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self.state, SessionState::PreviewReady)
    }

    /// A new input was chosen. Discards any previous result or error.
    ///
    /// # Errors
    ///
    /// Illegal while a request is in flight.
    pub fn input_selected(&mut self) -> Result<(), InvalidTransition> {
        match self.state {
            SessionState::Submitting => Err(self.rejected("input_selected")),
            _ => {
                self.state = SessionState::PreviewReady;
                Ok(())
            }
        }
    }

    /// The selected input was cleared.
    ///
    /// # Errors
    ///
    /// Illegal while a request is in flight.
    pub fn input_cleared(&mut self) -> Result<(), InvalidTransition> {
        match self.state {
            SessionState::Submitting => Err(self.rejected("input_cleared")),
            _ => {
                self.state = SessionState::Idle;
                Ok(())
            }
        }
    }

    /// The user submitted the selected input.
    ///
    /// # Errors
    ///
    /// Only legal from `PreviewReady`.
    pub fn submit(&mut self) -> Result<(), InvalidTransition> {
        match self.state {
            SessionState::PreviewReady => {
                self.state = SessionState::Submitting;
                Ok(())
            }
            _ => Err(self.rejected("submit")),
        }
    }

    /// The in-flight request returned a classification.
    ///
    /// # Errors
    ///
    /// Only legal from `Submitting`.
    pub fn complete(&mut self, result: Classification) -> Result<(), InvalidTransition> {
        match self.state {
            SessionState::Submitting => {
                self.state = SessionState::Succeeded(result);
                Ok(())
            }
            _ => Err(self.rejected("complete")),
        }
    }

    /// The in-flight request failed with a user-visible message.
    ///
    /// # Errors
    ///
    /// Only legal from `Submitting`.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), InvalidTransition> {
        match self.state {
            SessionState::Submitting => {
                self.state = SessionState::Failed(message.into());
                Ok(())
            }
            _ => Err(self.rejected("fail")),
        }
    }

    fn rejected(&self, event: &'static str) -> InvalidTransition {
        InvalidTransition {
            from: self.state.name(),
            event,
        }
    }
}
