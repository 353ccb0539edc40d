use std::{collections::BTreeMap, io::Write, time::Duration};

use anyhow::{Context, Result};
use wumpus_core::{DisplayZone, Indicator, LedColor, Note, IDLE_TICK_HZ};
use wumpus_face::Host;

/// Host that renders the segment display as a line of text.
#[derive(Debug)]
pub(crate) struct TerminalHost<W> {
    out: W,
    zones: BTreeMap<DisplayZone, String>,
    wumpus_mode: bool,
    sound: bool,
    tick_hz: u8,
    dirty: bool,
}

impl<W: Write> TerminalHost<W> {
    pub(crate) fn new(out: W) -> Self {
        let zones = DisplayZone::ALL
            .into_iter()
            .map(|zone| (zone, " ".repeat(zone.width())))
            .collect();
        Self {
            out,
            zones,
            wumpus_mode: false,
            sound: false,
            tick_hz: IDLE_TICK_HZ,
            dirty: false,
        }
    }

    /// Interval between ticks at the most recently requested rate.
    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / u32::from(self.tick_hz.max(1))
    }

    /// Prints the display when any zone changed since the last call.
    pub(crate) fn present(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;
        let line = self.display_line();
        writeln!(self.out, "{line}").context("failed to write display line")
    }

    pub(crate) fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    fn display_line(&self) -> String {
        let zone = |zone: DisplayZone| self.zones.get(&zone).map_or("", String::as_str);
        let lamp = |lit: bool, label: &'static str| if lit { label } else { "  " };
        format!(
            "[{} {}] {}:{} {}  {} {}",
            zone(DisplayZone::Top),
            zone(DisplayZone::TopRight),
            zone(DisplayZone::Hours),
            zone(DisplayZone::Minutes),
            zone(DisplayZone::Seconds),
            lamp(self.wumpus_mode, "W!"),
            lamp(self.sound, "♪"),
        )
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Host for TerminalHost<W> {
    fn request_tick_rate(&mut self, hz: u8) -> Result<()> {
        self.tick_hz = hz;
        Ok(())
    }

    fn play_note(&mut self, note: Note, duration: Duration) -> Result<()> {
        writeln!(
            self.out,
            "  ♪ {} {:.0} Hz for {} ms",
            note.name(),
            note.frequency_hz(),
            duration.as_millis()
        )
        .context("failed to write note")
    }

    fn stop_buzzer(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_indicator(&mut self, indicator: Indicator, lit: bool) -> Result<()> {
        match indicator {
            Indicator::WumpusMode => self.wumpus_mode = lit,
            Indicator::Sound => self.sound = lit,
        }
        self.dirty = true;
        Ok(())
    }

    fn display_text(&mut self, zone: DisplayZone, text: &str) -> Result<()> {
        let _ = self.zones.insert(zone, text.to_owned());
        self.dirty = true;
        Ok(())
    }

    fn set_led(&mut self, color: LedColor) -> Result<()> {
        let label = match color {
            LedColor::Green => "green",
            LedColor::Red => "red",
        };
        writeln!(self.out, "  LED {label}").context("failed to write led state")
    }

    fn led_off(&mut self) -> Result<()> {
        writeln!(self.out, "  LED off").context("failed to write led state")
    }
}
