//! Per-second tick sound.
//!
//! [`TickGate`] decides when a second has passed; [`TickSound`] decides which
//! cue plays and makes sure cues never overlap. Cues are fire-and-forget:
//! starting one must not block the caller.

use std::fmt::Display;

/// A short playable sound.
///
/// Dropping a cue releases whatever resource backs it.
pub trait AudioCue {
    fn is_playing(&self) -> bool;
    fn start(&mut self);
    fn stop(&mut self);
    /// `volume` is in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);
}

/// Fires once for every distinct second value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickGate {
    last: Option<u8>,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `second`; `true` when it differs from the previous one.
    pub fn advance(&mut self, second: u8) -> bool {
        let changed = self.last != Some(second);
        self.last = Some(second);
        changed
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Holds at most one cue.
#[derive(Debug)]
pub struct CueSlot<C> {
    cue: Option<C>,
}

impl<C> Default for CueSlot<C> {
    fn default() -> Self {
        Self { cue: None }
    }
}

impl<C: AudioCue> CueSlot<C> {
    pub fn new(cue: Option<C>) -> Self {
        Self { cue }
    }

    /// Stops and drops the current cue, then stores `cue`.
    pub fn replace(&mut self, cue: Option<C>) {
        if let Some(mut old) = self.cue.take() {
            old.stop();
            drop(old);
        }
        self.cue = cue;
    }

    /// Replaces the cue with the result of `open`.
    ///
    /// On failure the slot is left empty and playback is silently skipped
    /// from then on.
    pub fn acquire<E, F>(&mut self, open: F) -> bool
    where
        E: Display,
        F: FnOnce() -> Result<C, E>,
    {
        match open() {
            Ok(cue) => {
                self.replace(Some(cue));
                true
            }
            Err(err) => {
                log::warn!("audio cue unavailable, ticking silently: {err}");
                self.replace(None);
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cue.is_none()
    }

    pub fn is_playing(&self) -> bool {
        self.cue.as_ref().is_some_and(AudioCue::is_playing)
    }

    pub fn start(&mut self) -> bool {
        match self.cue.as_mut() {
            Some(cue) => {
                cue.start();
                true
            }
            None => false,
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        if let Some(cue) = self.cue.as_mut() {
            cue.set_volume(volume);
        }
    }

    pub fn get(&self) -> Option<&C> {
        self.cue.as_ref()
    }
}

/// A primary tick cue and an optional alternate (tock) cue.
///
/// With an alternate present, even seconds play the alternate and odd seconds
/// the primary.
#[derive(Debug)]
pub struct TickSound<C> {
    primary: CueSlot<C>,
    alternate: CueSlot<C>,
}

impl<C> Default for TickSound<C> {
    fn default() -> Self {
        Self { primary: CueSlot::default(), alternate: CueSlot::default() }
    }
}

impl<C: AudioCue> TickSound<C> {
    pub fn new(primary: Option<C>, alternate: Option<C>) -> Self {
        Self { primary: CueSlot::new(primary), alternate: CueSlot::new(alternate) }
    }

    pub fn primary_mut(&mut self) -> &mut CueSlot<C> {
        &mut self.primary
    }

    pub fn alternate_mut(&mut self) -> &mut CueSlot<C> {
        &mut self.alternate
    }

    pub fn is_playing(&self) -> bool {
        self.primary.is_playing() || self.alternate.is_playing()
    }

    /// Starts the cue for `second` unless one is still playing.
    ///
    /// Returns whether a cue was started.
    pub fn play(&mut self, second: u8) -> bool {
        if self.is_playing() {
            return false;
        }
        if second % 2 == 0 && !self.alternate.is_empty() {
            self.alternate.start()
        } else {
            self.primary.start()
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.primary.set_volume(volume);
        self.alternate.set_volume(volume);
    }
}
