// Test doubles for the audio output and the fade tick task.
#![allow(dead_code)]

use resonant_sphere::{
    AudioCrossfadeController, AudioSink, FadeSettings, FadeTimer, ModeTable, PendingPlays,
    PlayTicket, PlaybackRejected, Settled, Spawner,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

pub type PlayOutcome = Result<(), PlaybackRejected>;

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub looping: bool,
    pub volume: f64,
    pub volume_history: Vec<f64>,
    pub source: Option<String>,
    /// (source, volume) at every source change
    pub source_changes: Vec<(String, f64)>,
    pub plays: Vec<PlayTicket>,
    pub pauses: usize,
    pub released: bool,
    pub reject_sync: bool,
    /// Accepted starts resolve to a rejection later on.
    pub reject_async: bool,
    /// Accepted starts not yet handed out through `take_in_flight`.
    pub pending: Vec<(PlayTicket, PlayOutcome)>,
}

impl RecordingSink {
    pub fn last_play(&self) -> PlayTicket {
        *self.plays.last().expect("no play issued")
    }
}

impl AudioSink for RecordingSink {
    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
        self.volume_history.push(volume);
    }

    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.source_changes.push((url.to_string(), self.volume));
    }

    fn play(&mut self, ticket: PlayTicket) -> Result<(), PlaybackRejected> {
        self.plays.push(ticket);
        if self.reject_sync {
            return Err(PlaybackRejected::new("NotAllowedError"));
        }
        let outcome = if self.reject_async {
            Err(PlaybackRejected::new("NotAllowedError"))
        } else {
            Ok(())
        };
        self.pending.push((ticket, outcome));
        Ok(())
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }

    fn release(&mut self) {
        self.released = true;
        self.source = None;
    }
}

impl PendingPlays for RecordingSink {
    type Outcome = PlayOutcome;

    fn take_in_flight(&mut self) -> Vec<(PlayTicket, PlayOutcome)> {
        std::mem::take(&mut self.pending)
    }
}

/// Holds spawned starts until the test resolves them, oldest first.
#[derive(Clone, Default)]
pub struct QueuedSpawner {
    queue: Rc<RefCell<VecDeque<(PlayOutcome, Settled)>>>,
}

impl QueuedSpawner {
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn run_next(&self) -> bool {
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some((outcome, done)) => {
                done(outcome);
                true
            }
            None => false,
        }
    }

    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl Spawner<PlayOutcome> for QueuedSpawner {
    fn spawn(&self, outcome: PlayOutcome, done: Settled) {
        self.queue.borrow_mut().push_back((outcome, done));
    }
}

/// Resolves every start before `spawn` returns.
#[derive(Clone, Copy, Default)]
pub struct ImmediateSpawner;

impl Spawner<PlayOutcome> for ImmediateSpawner {
    fn spawn(&self, outcome: PlayOutcome, done: Settled) {
        done(outcome);
    }
}

#[derive(Debug, Default)]
pub struct ManualTimer {
    pub running: bool,
    pub interval: Option<Duration>,
    pub starts: usize,
    pub stops: usize,
    /// `start` calls made while a task was still live
    pub overlapping_starts: usize,
}

impl FadeTimer for ManualTimer {
    fn start(&mut self, interval: Duration) {
        if self.running {
            self.overlapping_starts += 1;
        }
        self.running = true;
        self.interval = Some(interval);
        self.starts += 1;
    }

    fn stop(&mut self) {
        if self.running {
            self.stops += 1;
        }
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

pub type TestController = AudioCrossfadeController<RecordingSink, ManualTimer>;

pub fn controller() -> TestController {
    controller_with(RecordingSink::default())
}

pub fn controller_with(sink: RecordingSink) -> TestController {
    AudioCrossfadeController::new(
        sink,
        ManualTimer::default(),
        ModeTable::default(),
        FadeSettings::default(),
    )
}

/// Tick while the fade task is live, returning how many ticks ran.
pub fn run_fade(c: &mut TestController, limit: u32) -> u32 {
    let mut ticks = 0;
    while c.timer().is_running() && ticks < limit {
        c.tick();
        ticks += 1;
    }
    ticks
}

pub fn settle_ok(c: &mut TestController) {
    let ticket = c.sink().last_play();
    c.playback_settled(ticket, Ok(()));
}
