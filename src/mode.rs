use crate::constants::*;
use crate::error::ParseModeError;
use fnv::FnvHashMap;
use std::fmt;
use std::str::FromStr;

/// Named ambient sound profile selectable from the dock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtmosphereMode {
    Silence,
    Wind,
    Ocean,
}

impl AtmosphereMode {
    pub const ALL: [AtmosphereMode; 3] = [
        AtmosphereMode::Silence,
        AtmosphereMode::Wind,
        AtmosphereMode::Ocean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AtmosphereMode::Silence => "SILENCE",
            AtmosphereMode::Wind => "WIND",
            AtmosphereMode::Ocean => "OCEAN",
        }
    }

    /// Number-row shortcut for each mode.
    #[inline]
    pub fn for_key(key: &str) -> Option<AtmosphereMode> {
        match key {
            "1" => Some(AtmosphereMode::Silence),
            "2" => Some(AtmosphereMode::Wind),
            "3" => Some(AtmosphereMode::Ocean),
            _ => None,
        }
    }
}

impl fmt::Display for AtmosphereMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtmosphereMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AtmosphereMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualParams {
    pub color: &'static str,
    pub distort: f32,
    pub speed: f32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for VisualParams {
    fn default() -> Self {
        Self {
            color: BASE_COLOR,
            distort: BASE_DISTORT,
            speed: BASE_SPEED,
            roughness: BASE_ROUGHNESS,
            metalness: BASE_METALNESS,
        }
    }
}

/// Immutable per-mode record. Only `audio_url` matters to playback.
#[derive(Clone, Debug, PartialEq)]
pub struct SensoryConfig {
    pub audio_url: String,
    pub visual: VisualParams,
}

impl SensoryConfig {
    pub fn new<T: Into<String>>(audio_url: T) -> Self {
        Self {
            audio_url: audio_url.into(),
            visual: VisualParams::default(),
        }
    }
}

/// Lookup table from mode to its sensory config.
#[derive(Clone, Debug)]
pub struct ModeTable {
    configs: FnvHashMap<AtmosphereMode, SensoryConfig>,
    initial: AtmosphereMode,
}

impl ModeTable {
    /// Table with no entries. `initial` is the mode assumed before any request.
    pub fn empty(initial: AtmosphereMode) -> Self {
        Self {
            configs: FnvHashMap::default(),
            initial,
        }
    }

    pub fn insert(&mut self, mode: AtmosphereMode, config: SensoryConfig) -> &mut Self {
        self.configs.insert(mode, config);
        self
    }

    pub fn get(&self, mode: AtmosphereMode) -> Option<&SensoryConfig> {
        self.configs.get(&mode)
    }

    pub fn audio_url(&self, mode: AtmosphereMode) -> Option<&str> {
        self.get(mode).map(|c| c.audio_url.as_str())
    }

    pub fn initial_mode(&self) -> AtmosphereMode {
        self.initial
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        let mut table = ModeTable::empty(AtmosphereMode::Silence);
        table
            .insert(AtmosphereMode::Silence, SensoryConfig::new(SILENCE_AUDIO_URL))
            .insert(AtmosphereMode::Wind, SensoryConfig::new(WIND_AUDIO_URL))
            .insert(AtmosphereMode::Ocean, SensoryConfig::new(OCEAN_AUDIO_URL));
        table
    }
}
