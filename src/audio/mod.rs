//! Audio boundary
//!
//! The simulation only emits [`SoundCue`] events. Sinks receive them
//! fire-and-forget; a sink that plays nothing is as valid as one that does.

use std::path::PathBuf;

use crate::render::assets::AssetResolver;
use crate::simulation::events::{SimulationEvent, SoundCue};

/// Receives audio cues
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Drops every cue
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Resolves each cue to its sound file and logs it
///
/// Stands in for a playback backend in the text frontends.
pub struct LoggingAudio<R: AssetResolver> {
    assets: R,
    played: usize,
}

impl<R: AssetResolver> LoggingAudio<R> {
    pub fn new(assets: R) -> Self {
        Self { assets, played: 0 }
    }

    /// Cues that resolved to a sound file
    pub fn played(&self) -> usize {
        self.played
    }

    fn resolve(&mut self, cue: SoundCue) -> Option<PathBuf> {
        self.assets.sound(cue.asset_name())
    }
}

impl<R: AssetResolver> AudioSink for LoggingAudio<R> {
    fn play(&mut self, cue: SoundCue) {
        match self.resolve(cue) {
            Some(path) => {
                self.played += 1;
                tracing::debug!("Playing {:?} from {:?}", cue, path);
            }
            None => tracing::trace!("No sound for {:?}", cue),
        }
    }
}

/// Forward every sound cue in `events` to `sink`, in order
pub fn dispatch(events: &[SimulationEvent], sink: &mut dyn AudioSink) -> usize {
    let mut count = 0;
    for cue in events.iter().filter_map(SimulationEvent::sound) {
        sink.play(cue);
        count += 1;
    }
    count
}
