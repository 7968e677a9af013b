//! Ambient atmosphere audio for the resonant sphere page.
//!
//! The crossfade state machine and its configuration are plain Rust and
//! build on any target; the browser wiring below is compiled for wasm only.

pub mod constants;
pub mod controller;
pub mod error;
pub mod fade;
pub mod mode;
pub mod pump;
pub mod sink;

pub use controller::{AudioCrossfadeController, Phase, PlaybackState};
pub use error::{ControllerError, ParseModeError, PlaybackRejected};
pub use fade::FadeSettings;
pub use mode::{AtmosphereMode, ModeTable, SensoryConfig, VisualParams};
pub use pump::{PendingPlays, PlaybackPump, Settled, Spawner, WeakPump};
pub use sink::{AudioSink, FadeTimer, PlayTicket};

#[cfg(target_arch = "wasm32")]
mod ambient;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod media;
#[cfg(target_arch = "wasm32")]
mod overlay;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::ambient;
    use crate::{dom, events, overlay, FadeSettings, ModeTable};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("resonant-sphere starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        let audio = ambient::ambient_audio(ModeTable::default(), FadeSettings::default())?;
        events::mark_active_mode(&document, audio.desired_mode());

        events::wire_mode_dock(&document, &audio);
        events::wire_mode_keys(&document, &audio);
        events::wire_start_gesture(&document, &audio);
        overlay::set_visible(&document, true);

        let audio_unload = audio.clone();
        dom::listen(&window, "pagehide", move |ev: web::PageTransitionEvent| {
            // A persisted page goes into the back/forward cache and comes back live.
            if !ev.persisted() {
                audio_unload.dispose();
            }
        });
        Ok(())
    }
}
