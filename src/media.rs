use crate::error::PlaybackRejected;
use crate::pump::{PendingPlays, Settled, Spawner};
use crate::sink::{AudioSink, FadeTimer, PlayTicket};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `HtmlAudioElement` behind the [`AudioSink`] seam.
///
/// Play promises are parked here until the pump drains and awaits them.
pub struct HtmlAudioSink {
    element: web::HtmlAudioElement,
    in_flight: Vec<(PlayTicket, js_sys::Promise)>,
}

impl HtmlAudioSink {
    pub fn new() -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            element,
            in_flight: Vec::new(),
        })
    }
}

impl PendingPlays for HtmlAudioSink {
    type Outcome = js_sys::Promise;

    fn take_in_flight(&mut self) -> Vec<(PlayTicket, js_sys::Promise)> {
        std::mem::take(&mut self.in_flight)
    }
}

/// Awaits play promises on the browser event loop.
pub struct JsSpawner;

impl Spawner<js_sys::Promise> for JsSpawner {
    fn spawn(&self, outcome: js_sys::Promise, done: Settled) {
        spawn_local(async move {
            let result = JsFuture::from(outcome)
                .await
                .map(|_| ())
                .map_err(|e| PlaybackRejected::new(format!("{:?}", e)));
            done(result);
        });
    }
}

impl AudioSink for HtmlAudioSink {
    fn set_looping(&mut self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn set_source(&mut self, url: &str) {
        self.element.set_src(url);
    }

    fn play(&mut self, ticket: PlayTicket) -> Result<(), PlaybackRejected> {
        let promise = self
            .element
            .play()
            .map_err(|e| PlaybackRejected::new(format!("{:?}", e)))?;
        self.in_flight.push((ticket, promise));
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] pause error: {:?}", e);
        }
    }

    fn release(&mut self) {
        self.in_flight.clear();
        _ = self.element.remove_attribute("src");
        self.element.load();
    }
}

/// `setInterval` handle behind the [`FadeTimer`] seam.
pub struct IntervalTimer {
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl IntervalTimer {
    pub fn new(on_tick: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>),
            handle: None,
        }
    }
}

impl FadeTimer for IntervalTimer {
    fn start(&mut self, interval: Duration) {
        self.stop();
        let Some(window) = web::window() else {
            log::error!("[fade] no window to schedule ticks on");
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            i32::try_from(interval.as_millis()).unwrap_or(i32::MAX),
        ) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("[fade] setInterval error: {:?}", e),
        }
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
