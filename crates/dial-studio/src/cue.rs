use std::fmt;
use std::io::{self, IsTerminal, Write};

use dial_face::{AudioCue, TickSound};

/// Which half of the tick-tock pair a bell plays.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tone {
    Tick,
    Tock,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Tick => "tick",
            Tone::Tock => "tock",
        })
    }
}

/// Tick cue that rings the terminal bell on stderr.
///
/// The bell has no duration, so the cue is never reported as playing. The
/// terminal decides how loud the bell is: any volume above zero rings it and
/// zero mutes it.
#[derive(Debug)]
pub struct BellCue {
    tone: Tone,
    volume: f32,
    rung: u64,
}

impl BellCue {
    /// Fails when stderr is not attached to a terminal.
    pub fn open(tone: Tone) -> io::Result<Self> {
        if !io::stderr().is_terminal() {
            return Err(io::Error::other(format!("{tone} bell: stderr is not a terminal")));
        }
        Ok(Self::muted(tone))
    }

    fn muted(tone: Tone) -> Self {
        Self { tone, volume: 0.0, rung: 0 }
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Number of times the bell was actually rung.
    pub fn rung(&self) -> u64 {
        self.rung
    }

    fn audible(&self) -> bool {
        self.volume > 0.0
    }
}

impl AudioCue for BellCue {
    fn is_playing(&self) -> bool {
        false
    }

    fn start(&mut self) {
        if !self.audible() {
            return;
        }
        let mut err = io::stderr().lock();
        if let Err(e) = err.write_all(b"\x07").and_then(|()| err.flush()) {
            log::debug!("terminal bell failed: {e}");
            return;
        }
        self.rung += 1;
        log::trace!("{} bell", self.tone);
    }

    fn stop(&mut self) {}

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

/// Opens a tick bell for the primary slot and a tock bell for the alternate,
/// leaving slots that already hold a cue alone.
pub fn fill_empty_slots<F>(sound: &mut TickSound<BellCue>, open: F)
where
    F: Fn(Tone) -> io::Result<BellCue>,
{
    if sound.primary_mut().is_empty() {
        sound.primary_mut().acquire(|| open(Tone::Tick));
    }
    if sound.alternate_mut().is_empty() {
        sound.alternate_mut().acquire(|| open(Tone::Tock));
    }
}
