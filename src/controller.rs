//! Crossfading playback of the ambient atmosphere tracks.
//!
//! The controller owns the only audio output and the only fade tick task.
//! Every mode change either tops the current track back up to the listening
//! volume or fades it to silence, swaps the source while silent, starts
//! playback and fades the new track in. Nothing is audible until `start`
//! has been called from a user gesture.

use crate::constants::VOLUME_MIN;
use crate::error::{ControllerError, PlaybackRejected};
use crate::fade::{clamp_volume, step_volume, Continuation, Fade, FadeSettings, FadeStep};
use crate::mode::{AtmosphereMode, ModeTable};
use crate::sink::{AudioSink, FadeTimer, PlayTicket};

/// Observable position in the crossfade cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Volume is stable at 0 or at the listening volume.
    Idle,
    FadingOut,
    /// Source swapped, waiting for the runtime to confirm playback.
    Swapping,
    FadingIn,
    Disposed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub current_url: Option<String>,
    pub pending_url: Option<String>,
    pub volume: f64,
    pub is_playing: bool,
    pub started: bool,
    pub active_fade_target: Option<f64>,
}

pub struct AudioCrossfadeController<S: AudioSink, T: FadeTimer> {
    sink: S,
    timer: T,
    table: ModeTable,
    settings: FadeSettings,
    desired: AtmosphereMode,
    current_url: Option<String>,
    volume: f64,
    playing: bool,
    started: bool,
    initialized: bool,
    disposed: bool,
    fade: Option<Fade>,
    in_flight: Option<PlayTicket>,
    next_ticket: u64,
}

impl<S: AudioSink, T: FadeTimer> AudioCrossfadeController<S, T> {
    pub fn new(sink: S, timer: T, table: ModeTable, settings: FadeSettings) -> Self {
        let desired = table.initial_mode();
        Self {
            sink,
            timer,
            table,
            settings: settings.sanitized(),
            desired,
            current_url: None,
            volume: VOLUME_MIN,
            playing: false,
            started: false,
            initialized: false,
            disposed: false,
            fade: None,
            in_flight: None,
            next_ticket: 0,
        }
    }

    /// Configure the output: loop forever, start silent.
    pub fn initialize(&mut self) {
        if self.initialized || self.disposed {
            return;
        }
        self.sink.set_looping(true);
        self.apply_volume(VOLUME_MIN);
        self.initialized = true;
        log::debug!("[audio] output initialized");
    }

    pub fn request_mode(&mut self, mode: AtmosphereMode) -> Result<(), ControllerError> {
        if self.disposed {
            return Err(ControllerError::Disposed);
        }
        let url = match self.table.audio_url(mode) {
            Some(url) => url.to_owned(),
            None => {
                log::error!("[audio] mode {} missing from sensory config table", mode);
                return Err(ControllerError::InvalidMode(mode));
            }
        };
        self.initialize();
        if self.desired != mode {
            log::info!("[audio] mode {} -> {}", self.desired, mode);
        }
        self.desired = mode;
        if !self.started {
            log::debug!("[audio] {} pending until the start gesture", mode);
            return Ok(());
        }
        self.converge(url);
        Ok(())
    }

    /// Gesture gate. Only the first call has any effect.
    pub fn start(&mut self) {
        if self.started || self.disposed {
            return;
        }
        self.initialize();
        self.started = true;
        log::info!("[gesture] audio unlocked, applying {}", self.desired);
        match self.table.audio_url(self.desired) {
            Some(url) => {
                let url = url.to_owned();
                self.converge(url);
            }
            None => log::error!(
                "[audio] initial mode {} missing from sensory config table",
                self.desired
            ),
        }
    }

    /// One fade tick. Ignored when no fade is running.
    pub fn tick(&mut self) {
        if self.disposed {
            return;
        }
        let target = match self.fade.as_mut() {
            Some(fade) => {
                fade.ticks += 1;
                fade.target
            }
            None => return,
        };
        match step_volume(self.volume, target, self.settings.step) {
            FadeStep::Moving(v) => self.apply_volume(v),
            FadeStep::Arrived(v) => {
                self.apply_volume(v);
                self.timer.stop();
                if let Some(fade) = self.fade.take() {
                    log::debug!(
                        "[fade] reached {:.2} after {} ticks ({:?})",
                        v,
                        fade.ticks,
                        fade.started_at.elapsed()
                    );
                    if let Continuation::SwapAndPlay { url } = fade.then {
                        self.swap_and_play(url);
                    }
                }
            }
        }
    }

    /// Report how a playback start issued through [`AudioSink::play`] ended.
    pub fn playback_settled(&mut self, ticket: PlayTicket, result: Result<(), PlaybackRejected>) {
        if self.disposed || self.in_flight != Some(ticket) {
            log::debug!("[audio] ignoring stale playback result {:?}", ticket);
            return;
        }
        self.in_flight = None;
        match result {
            Err(e) => self.playback_failed(e),
            Ok(()) => {
                self.playing = true;
                // The latest request wins over the one that issued this start.
                match self.table.audio_url(self.desired) {
                    Some(url) => {
                        let url = url.to_owned();
                        self.converge(url);
                    }
                    None => self.fade_to_target(),
                }
            }
        }
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel_fade();
        self.in_flight = None;
        self.sink.pause();
        self.sink.release();
        self.playing = false;
        self.current_url = None;
        self.volume = VOLUME_MIN;
        self.disposed = true;
        log::info!("[audio] disposed");
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_url: self.current_url.clone(),
            pending_url: self.table.audio_url(self.desired).map(str::to_owned),
            volume: self.volume,
            is_playing: self.playing,
            started: self.started,
            active_fade_target: self.fade.as_ref().map(|f| f.target),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.disposed {
            return Phase::Disposed;
        }
        if self.in_flight.is_some() {
            return Phase::Swapping;
        }
        match self.fade.as_ref().map(|f| &f.then) {
            Some(Continuation::SwapAndPlay { .. }) => Phase::FadingOut,
            Some(Continuation::Settle) => Phase::FadingIn,
            None => Phase::Idle,
        }
    }

    pub fn desired_mode(&self) -> AtmosphereMode {
        self.desired
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    fn converge(&mut self, url: String) {
        if let Some(ticket) = self.in_flight {
            // A start cannot be recalled; the result handler re-evaluates.
            log::debug!("[audio] {:?} in flight, deferring {}", ticket, url);
            return;
        }
        if self.current_url.as_deref() == Some(url.as_str()) {
            if self.playing {
                self.fade_to_target();
            } else {
                self.cancel_fade();
                self.begin_playback();
            }
            return;
        }
        self.fade_out_then_swap(url);
    }

    fn fade_to_target(&mut self) {
        let target = self.settings.target_volume;
        match &self.fade {
            Some(f) if f.then == Continuation::Settle && f.target == target => return,
            None if self.volume == target => return,
            _ => {}
        }
        self.start_fade(target, Continuation::Settle);
    }

    fn fade_out_then_swap(&mut self, url: String) {
        if self.volume <= VOLUME_MIN {
            self.cancel_fade();
            self.swap_and_play(url);
            return;
        }
        self.start_fade(VOLUME_MIN, Continuation::SwapAndPlay { url });
    }

    fn start_fade(&mut self, target: f64, then: Continuation) {
        self.timer.stop();
        let interval = match then {
            Continuation::Settle => self.settings.fade_in_interval,
            Continuation::SwapAndPlay { .. } => self.settings.fade_out_interval,
        };
        log::debug!(
            "[fade] {:.2} -> {:.2} (at most {} ticks)",
            self.volume,
            target,
            self.settings.max_ticks(target - self.volume)
        );
        self.fade = Some(Fade::new(target, then));
        self.timer.start(interval);
    }

    fn cancel_fade(&mut self) {
        self.timer.stop();
        self.fade = None;
    }

    fn swap_and_play(&mut self, url: String) {
        debug_assert!(self.volume <= VOLUME_MIN, "source swapped while audible");
        self.sink.pause();
        self.playing = false;
        if self.current_url.as_deref() != Some(url.as_str()) {
            self.sink.set_source(&url);
            self.current_url = Some(url);
        }
        self.begin_playback();
    }

    fn begin_playback(&mut self) {
        let ticket = PlayTicket(self.next_ticket);
        self.next_ticket += 1;
        match self.sink.play(ticket) {
            Ok(()) => self.in_flight = Some(ticket),
            Err(e) => self.playback_failed(e),
        }
    }

    fn playback_failed(&mut self, e: PlaybackRejected) {
        log::warn!("audio play failed (user interaction needed first): {}", e);
        self.cancel_fade();
        self.playing = false;
        self.apply_volume(VOLUME_MIN);
    }

    fn apply_volume(&mut self, volume: f64) {
        self.volume = clamp_volume(volume);
        self.sink.set_volume(self.volume);
    }
}
