use crate::mode::AtmosphereMode;

/// Errors surfaced to callers of the crossfade controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    /// The mode has no entry in the configured table. This is a wiring bug,
    /// not a runtime condition.
    #[error("no sensory config registered for mode {0}")]
    InvalidMode(AtmosphereMode),
    #[error("controller has been disposed")]
    Disposed,
}

/// The runtime refused to start playback (autoplay policy, missing gesture).
///
/// Recovered inside the controller; never returned from its public methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("playback rejected: {reason}")]
pub struct PlaybackRejected {
    pub reason: String,
}

impl PlaybackRejected {
    pub fn new<T: Into<String>>(reason: T) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown atmosphere mode {0:?}")]
pub struct ParseModeError(pub String);
