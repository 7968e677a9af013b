//! Routes asynchronous playback starts back into the controller.
//!
//! Every operation borrows the controller, runs, releases the borrow and
//! then hands whatever play starts the sink parked to a [`Spawner`]. When a
//! start resolves, its result is fed to `playback_settled` under the ticket
//! it was issued with, and any start that settle issues is pumped the same
//! way.

use crate::controller::AudioCrossfadeController;
use crate::error::{ControllerError, PlaybackRejected};
use crate::mode::AtmosphereMode;
use crate::sink::{AudioSink, FadeTimer, PlayTicket};
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

/// A sink whose `play` parks an outcome to be awaited elsewhere.
pub trait PendingPlays {
    type Outcome: 'static;

    /// Play starts issued since the last call, oldest first.
    fn take_in_flight(&mut self) -> Vec<(PlayTicket, Self::Outcome)>;
}

pub type Settled = Box<dyn FnOnce(Result<(), PlaybackRejected>)>;

/// Waits on an outcome and calls `done` with its result, later.
pub trait Spawner<O> {
    fn spawn(&self, outcome: O, done: Settled);
}

type Shared<S, T> = Rc<RefCell<AudioCrossfadeController<S, T>>>;

pub struct PlaybackPump<S, T, P>
where
    S: AudioSink + PendingPlays + 'static,
    T: FadeTimer + 'static,
    P: Spawner<S::Outcome> + 'static,
{
    inner: Shared<S, T>,
    spawner: Rc<P>,
}

impl<S, T, P> Clone for PlaybackPump<S, T, P>
where
    S: AudioSink + PendingPlays + 'static,
    T: FadeTimer + 'static,
    P: Spawner<S::Outcome> + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            spawner: self.spawner.clone(),
        }
    }
}

/// Non-owning handle, for callbacks the controller itself owns (its timer).
pub struct WeakPump<S, T, P>
where
    S: AudioSink + PendingPlays + 'static,
    T: FadeTimer + 'static,
    P: Spawner<S::Outcome> + 'static,
{
    inner: Weak<RefCell<AudioCrossfadeController<S, T>>>,
    spawner: Rc<P>,
}

impl<S, T, P> WeakPump<S, T, P>
where
    S: AudioSink + PendingPlays + 'static,
    T: FadeTimer + 'static,
    P: Spawner<S::Outcome> + 'static,
{
    pub fn upgrade(&self) -> Option<PlaybackPump<S, T, P>> {
        Some(PlaybackPump {
            inner: self.inner.upgrade()?,
            spawner: self.spawner.clone(),
        })
    }
}

impl<S, T, P> PlaybackPump<S, T, P>
where
    S: AudioSink + PendingPlays + 'static,
    T: FadeTimer + 'static,
    P: Spawner<S::Outcome> + 'static,
{
    pub fn new(controller: AudioCrossfadeController<S, T>, spawner: P) -> Self {
        Self {
            inner: Rc::new(RefCell::new(controller)),
            spawner: Rc::new(spawner),
        }
    }

    /// Build a controller whose parts need a handle back to the pump.
    pub fn new_cyclic(
        spawner: P,
        build: impl FnOnce(WeakPump<S, T, P>) -> AudioCrossfadeController<S, T>,
    ) -> Self {
        let spawner = Rc::new(spawner);
        let inner = Rc::new_cyclic(|weak| {
            RefCell::new(build(WeakPump {
                inner: weak.clone(),
                spawner: spawner.clone(),
            }))
        });
        Self { inner, spawner }
    }

    pub fn controller(&self) -> Ref<'_, AudioCrossfadeController<S, T>> {
        self.inner.borrow()
    }

    pub fn initialize(&self) {
        self.inner.borrow_mut().initialize();
        pump_pending(&self.inner, &self.spawner);
    }

    pub fn request_mode(&self, mode: AtmosphereMode) -> Result<(), ControllerError> {
        let out = self.inner.borrow_mut().request_mode(mode);
        pump_pending(&self.inner, &self.spawner);
        out
    }

    pub fn start(&self) {
        self.inner.borrow_mut().start();
        pump_pending(&self.inner, &self.spawner);
    }

    pub fn tick(&self) {
        self.inner.borrow_mut().tick();
        pump_pending(&self.inner, &self.spawner);
    }

    pub fn dispose(&self) {
        self.inner.borrow_mut().dispose();
        pump_pending(&self.inner, &self.spawner);
    }

    pub fn is_started(&self) -> bool {
        self.inner.borrow().is_started()
    }

    pub fn desired_mode(&self) -> AtmosphereMode {
        self.inner.borrow().desired_mode()
    }
}

fn pump_pending<S, T, P>(inner: &Shared<S, T>, spawner: &Rc<P>)
where
    S: AudioSink + PendingPlays + 'static,
    T: FadeTimer + 'static,
    P: Spawner<S::Outcome> + 'static,
{
    let pending = inner.borrow_mut().sink_mut().take_in_flight();
    for (ticket, outcome) in pending {
        let weak = Rc::downgrade(inner);
        let spawner_for_settle = spawner.clone();
        spawner.spawn(
            outcome,
            Box::new(move |result| match weak.upgrade() {
                Some(inner) => settle(&inner, &spawner_for_settle, ticket, result),
                None => log::debug!("[audio] controller gone, dropping {:?}", ticket),
            }),
        );
    }
}

fn settle<S, T, P>(
    inner: &Shared<S, T>,
    spawner: &Rc<P>,
    ticket: PlayTicket,
    result: Result<(), PlaybackRejected>,
) where
    S: AudioSink + PendingPlays + 'static,
    T: FadeTimer + 'static,
    P: Spawner<S::Outcome> + 'static,
{
    inner.borrow_mut().playback_settled(ticket, result);
    pump_pending(inner, spawner);
}
