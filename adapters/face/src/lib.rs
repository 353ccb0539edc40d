#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Watch-face adapter for Hunt the Wumpus.
//!
//! [`WumpusFace`] exposes the four lifecycle hooks a watch firmware calls
//! (setup, activate, loop, resign). It translates host events into world
//! commands and routes the resulting world events to the [`Host`] primitives,
//! rewriting only the display zones whose text changed.

use std::time::Duration;

use anyhow::Result as AnyResult;
use thiserror::Error;
use wumpus_core::{
    Button, Command, DisplayZone, Event, Indicator, LedColor, Note, Press, RandomSource,
};
use wumpus_system_presentation::Presenter;
use wumpus_world::{self as world, query, World};

/// Hardware primitives the face drives.
///
/// Every primitive may fail when the host is backed by real I/O.
pub trait Host {
    /// Changes how often the host delivers tick events.
    fn request_tick_rate(&mut self, hz: u8) -> AnyResult<()>;

    /// Sounds a single note for the provided duration.
    fn play_note(&mut self, note: Note, duration: Duration) -> AnyResult<()>;

    /// Silences the buzzer immediately.
    fn stop_buzzer(&mut self) -> AnyResult<()>;

    /// Lights or clears one of the status indicators.
    fn set_indicator(&mut self, indicator: Indicator, lit: bool) -> AnyResult<()>;

    /// Writes text into a display zone.
    fn display_text(&mut self, zone: DisplayZone, text: &str) -> AnyResult<()>;

    /// Turns the LED on in the provided colour.
    fn set_led(&mut self, color: LedColor) -> AnyResult<()>;

    /// Turns the LED off.
    fn led_off(&mut self) -> AnyResult<()>;
}

/// Input delivered by the host while the face is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceEvent {
    /// Periodic tick at the most recently requested rate.
    Tick,
    /// A button was released after a short or a long press.
    Button {
        /// Button that was pressed.
        button: Button,
        /// Duration class of the press.
        press: Press,
    },
}

impl FaceEvent {
    /// Convenience constructor for a short press.
    #[must_use]
    pub const fn short(button: Button) -> Self {
        Self::Button {
            button,
            press: Press::Short,
        }
    }

    /// Convenience constructor for a long press.
    #[must_use]
    pub const fn long(button: Button) -> Self {
        Self::Button {
            button,
            press: Press::Long,
        }
    }

    const fn command(self) -> Command {
        match self {
            Self::Tick => Command::Tick,
            Self::Button { button, press } => Command::from_press(button, press),
        }
    }
}

/// Errors reported by the face lifecycle hooks.
#[derive(Debug, Error)]
pub enum FaceError {
    /// An event arrived before the face was activated.
    #[error("wumpus face has not been activated")]
    NotActivated,
    /// A host primitive failed.
    #[error("host primitive failed: {0}")]
    Host(#[from] anyhow::Error),
}

/// Hunt the Wumpus watch face.
#[derive(Debug, Default)]
pub struct WumpusFace {
    world: Option<World>,
    presenter: Presenter,
    events: Vec<Event>,
}

impl WumpusFace {
    /// Allocates the face; no game exists until [`WumpusFace::activate`].
    #[must_use]
    pub fn setup() -> Self {
        Self::default()
    }

    /// Starts a fresh game and pushes its initial state to the host.
    pub fn activate<H, R>(&mut self, host: &mut H, rng: &mut R) -> Result<(), FaceError>
    where
        H: Host + ?Sized,
        R: RandomSource + ?Sized,
    {
        match self.world.as_mut() {
            Some(world) => world.restart(rng),
            None => self.world = Some(World::new(rng)),
        }
        let world = self.world.as_mut().ok_or(FaceError::NotActivated)?;
        tracing::debug!(
            player_room = query::player_room(world).number(),
            "wumpus face activated"
        );
        self.presenter.invalidate();
        world::apply(world, Command::Activate, rng, &mut self.events);
        self.flush(host)
    }

    /// Processes one host event and reports whether the face should stay resident.
    pub fn handle<H, R>(
        &mut self,
        event: FaceEvent,
        host: &mut H,
        rng: &mut R,
    ) -> Result<bool, FaceError>
    where
        H: Host + ?Sized,
        R: RandomSource + ?Sized,
    {
        let world = self.world.as_mut().ok_or(FaceError::NotActivated)?;
        world::apply(world, event.command(), rng, &mut self.events);
        self.flush(host)?;
        Ok(query::stays_resident(world_ref(&self.world)?))
    }

    /// Silences the face when another face takes over the display.
    pub fn resign<H>(&mut self, host: &mut H) -> Result<(), FaceError>
    where
        H: Host + ?Sized,
    {
        tracing::debug!("wumpus face resigned");
        host.stop_buzzer()?;
        host.led_off()?;
        Ok(())
    }

    /// Game currently running, if the face has been activated.
    #[must_use]
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Delivers pending world events and changed zones to the host.
    ///
    /// On failure the undelivered events stay queued and the display is
    /// redrawn in full on the next flush.
    fn flush<H>(&mut self, host: &mut H) -> Result<(), FaceError>
    where
        H: Host + ?Sized,
    {
        let result = self.deliver(host);
        if result.is_err() {
            self.presenter.invalidate();
        }
        result
    }

    fn deliver<H>(&mut self, host: &mut H) -> Result<(), FaceError>
    where
        H: Host + ?Sized,
    {
        let mut pending = std::mem::take(&mut self.events).into_iter();
        while let Some(event) = pending.next() {
            tracing::trace!(?event, "world event");
            if let Err(error) = self.route(&event, host) {
                self.events.push(event);
                self.events.extend(pending);
                return Err(error);
            }
        }

        let world = world_ref(&self.world)?;
        for update in self.presenter.present(&query::snapshot(world)) {
            host.display_text(update.zone, &update.text)?;
        }
        Ok(())
    }

    fn route<H>(&mut self, event: &Event, host: &mut H) -> Result<(), FaceError>
    where
        H: Host + ?Sized,
    {
        match *event {
            Event::TickRateRequested { hz } => host.request_tick_rate(hz)?,
            Event::NotePlayed { note, duration } => host.play_note(note, duration)?,
            Event::IndicatorChanged { indicator, lit } => host.set_indicator(indicator, lit)?,
            Event::LedChanged { color: Some(color) } => host.set_led(color)?,
            Event::LedChanged { color: None } => host.led_off()?,
            Event::GameStarted { .. } => self.presenter.invalidate(),
            _ => {}
        }
        Ok(())
    }
}

fn world_ref(world: &Option<World>) -> Result<&World, FaceError> {
    world.as_ref().ok_or(FaceError::NotActivated)
}
