use crate::ambient::AmbientAudio;
use crate::constants::{ACTIVE_CLASS, MODE_ATTRIBUTE, MODE_BUTTON_SELECTOR};
use crate::dom;
use crate::mode::AtmosphereMode;
use crate::overlay;
use web_sys as web;

/// First click anywhere unlocks audio and dismisses the start overlay.
pub fn wire_start_gesture(document: &web::Document, audio: &AmbientAudio) {
    let audio = audio.clone();
    let doc = document.clone();
    dom::listen(document, "click", move |_ev: web::MouseEvent| {
        if audio.is_started() {
            return;
        }
        log::info!("[gesture] start");
        audio.start();
        overlay::set_visible(&doc, false);
    });
}

/// Dock buttons carry their mode in `data-mode`.
pub fn wire_mode_dock(document: &web::Document, audio: &AmbientAudio) {
    for button in dom::query_all(document, MODE_BUTTON_SELECTOR) {
        let Some(raw) = button.get_attribute(MODE_ATTRIBUTE) else {
            continue;
        };
        let mode: AtmosphereMode = match raw.parse() {
            Ok(m) => m,
            Err(e) => {
                log::error!("[dock] {}", e);
                continue;
            }
        };
        let audio = audio.clone();
        let doc = document.clone();
        dom::listen(&button, "click", move |_ev: web::MouseEvent| {
            if let Err(e) = audio.request_mode(mode) {
                log::error!("[dock] {}", e);
                return;
            }
            mark_active_mode(&doc, mode);
        });
    }
}

pub fn mark_active_mode(document: &web::Document, mode: AtmosphereMode) {
    for button in dom::query_all(document, MODE_BUTTON_SELECTOR) {
        let is_active = button
            .get_attribute(MODE_ATTRIBUTE)
            .and_then(|raw| raw.parse::<AtmosphereMode>().ok())
            == Some(mode);
        _ = button.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
    }
}
