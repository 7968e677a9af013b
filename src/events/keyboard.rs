use super::pointer::mark_active_mode;
use crate::ambient::AmbientAudio;
use crate::dom;
use crate::mode::AtmosphereMode;
use web_sys as web;

pub fn wire_mode_keys(document: &web::Document, audio: &AmbientAudio) {
    let Some(window) = web::window() else {
        return;
    };
    let audio = audio.clone();
    let doc = document.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        let Some(mode) = AtmosphereMode::for_key(&ev.key()) else {
            return;
        };
        match audio.request_mode(mode) {
            Ok(()) => {
                log::info!("[keys] {}", mode);
                mark_active_mode(&doc, mode);
            }
            Err(e) => log::error!("[keys] {}", e),
        }
    });
}
