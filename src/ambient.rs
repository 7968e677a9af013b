use crate::controller::AudioCrossfadeController;
use crate::fade::FadeSettings;
use crate::media::{HtmlAudioSink, IntervalTimer, JsSpawner};
use crate::mode::ModeTable;
use crate::pump::PlaybackPump;

/// The page's crossfade controller, shared into every event listener.
pub type AmbientAudio = PlaybackPump<HtmlAudioSink, IntervalTimer, JsSpawner>;

/// The interval callback holds only a weak handle, so dropping the last
/// listener clone tears everything down.
pub fn ambient_audio(table: ModeTable, settings: FadeSettings) -> anyhow::Result<AmbientAudio> {
    let sink = HtmlAudioSink::new()?;
    let audio = PlaybackPump::new_cyclic(JsSpawner, move |weak| {
        let timer = IntervalTimer::new(move || {
            if let Some(audio) = weak.upgrade() {
                audio.tick();
            }
        });
        AudioCrossfadeController::new(sink, timer, table, settings)
    });
    audio.initialize();
    Ok(audio)
}
