mod keyboard;
mod pointer;

pub use keyboard::wire_mode_keys;
pub use pointer::{mark_active_mode, wire_mode_dock, wire_start_gesture};
