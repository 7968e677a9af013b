use crate::error::PlaybackRejected;
use std::time::Duration;

/// Identifies one playback start request. Resolutions carrying an older
/// ticket than the one the controller is waiting on are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayTicket(pub u64);

/// The single audio output owned by the controller.
pub trait AudioSink {
    fn set_looping(&mut self, looping: bool);
    fn set_volume(&mut self, volume: f64);
    fn set_source(&mut self, url: &str);

    /// Ask the runtime to begin playback.
    ///
    /// An `Err` is a synchronous refusal. `Ok` means the request is in
    /// flight and its outcome will be reported to
    /// [`AudioCrossfadeController::playback_settled`](crate::controller::AudioCrossfadeController::playback_settled)
    /// with the same ticket.
    fn play(&mut self, ticket: PlayTicket) -> Result<(), PlaybackRejected>;
    fn pause(&mut self);
    fn release(&mut self);
}

/// The repeating tick task that drives fades.
///
/// `start` replaces any running task, so at most one is ever live.
pub trait FadeTimer {
    fn start(&mut self, interval: Duration);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}
