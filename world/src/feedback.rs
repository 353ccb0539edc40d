//! Time-sliced feedback: melody playback and the win/lose LED flash.

use wumpus_core::{LedColor, Melody, Note, LED_FLASH_TICKS};

/// Progress through a melody, one note per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Playback {
    melody: Melody,
    step: usize,
}

/// What a playback tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlaybackStep {
    /// The next note to sound.
    Play(Note),
    /// Every note has been played.
    Finished,
}

impl Playback {
    pub(crate) const fn new(melody: Melody) -> Self {
        Self { melody, step: 0 }
    }

    pub(crate) const fn melody(&self) -> Melody {
        self.melody
    }

    pub(crate) fn advance(&mut self) -> PlaybackStep {
        match self.melody.notes().get(self.step) {
            Some(&note) => {
                self.step += 1;
                PlaybackStep::Play(note)
            }
            None => PlaybackStep::Finished,
        }
    }
}

/// Countdown of the LED shown after a game ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LedFlash {
    color: LedColor,
    remaining: u8,
}

impl LedFlash {
    pub(crate) const fn new(color: LedColor) -> Self {
        Self {
            color,
            remaining: LED_FLASH_TICKS,
        }
    }

    pub(crate) const fn color(&self) -> LedColor {
        self.color
    }

    /// Consumes one tick and reports whether the flash just ended.
    pub(crate) fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}
