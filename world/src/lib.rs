#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game state management for Hunt the Wumpus.
//!
//! The [`World`] owns everything a single game needs: the player's room, the
//! hazard layout, the quiver, the input phase, and the countdowns of the
//! asynchronous feedback sequences. It only changes through [`apply`], which
//! executes one [`Command`] to completion and reports what happened as
//! [`Event`] values.

mod feedback;
mod input;
mod layout;
mod random;
mod sequencer;
mod shot;
mod wumpus;

use wumpus_core::{
    Command, DeathCause, Event, Hazard, Indicator, LedColor, Melody, NeighborSlot, Note, Phase,
    RandomSource, RoomId, ARROW_COUNT, BEEP_DURATION, IDLE_TICK_HZ, MELODY_TICK_HZ,
    TRANSPORT_TICKS,
};

use crate::{
    feedback::{LedFlash, Playback},
    layout::random_room,
    shot::ShotDraft,
};

pub use layout::HazardLayout;
pub use random::SeededRandom;
pub use shot::{fire, ShotOutcome};
pub use wumpus::{wumpus_flee, wumpus_move, WumpusMove, WUMPUS_MOVE_THRESHOLD};

/// Represents the authoritative state of one game.
#[derive(Clone, Debug)]
pub struct World {
    player_room: RoomId,
    hazards: HazardLayout,
    arrows_remaining: u8,
    phase: Phase,
    selection: Option<NeighborSlot>,
    shot: ShotDraft,
    transport: Option<Transport>,
    playback: Option<Playback>,
    led: Option<LedFlash>,
    blink: Blink,
    warnings: WarningCycle,
    death_cause: Option<DeathCause>,
    wumpus_active: bool,
    sound_on: bool,
}

impl World {
    /// Creates a brand-new game with a random starting room and hazard layout.
    #[must_use]
    pub fn new<R>(rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let player_room = random_room(rng);
        let hazards = HazardLayout::generate(player_room, rng);
        Self::from_layout(player_room, hazards)
    }

    /// Creates a game with an explicit starting room and hazard layout.
    ///
    /// Useful for replays and scripted scenarios.
    #[must_use]
    pub fn from_layout(player_room: RoomId, hazards: HazardLayout) -> Self {
        Self {
            player_room,
            hazards,
            arrows_remaining: ARROW_COUNT,
            phase: Phase::Shoot,
            selection: None,
            shot: ShotDraft::new(),
            transport: None,
            playback: None,
            led: None,
            blink: Blink::default(),
            warnings: WarningCycle::default(),
            death_cause: None,
            wumpus_active: false,
            sound_on: true,
        }
    }

    /// Discards the current game and generates a new one in place.
    ///
    /// Both mode toggles return to their defaults: stationary Wumpus, sound on.
    pub fn restart<R>(&mut self, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        *self = Self::new(rng);
    }

    fn set_phase(&mut self, phase: Phase, out_events: &mut Vec<Event>) {
        if self.phase == phase {
            return;
        }
        tracing::debug!(from = ?self.phase, to = ?phase, "phase changed");
        out_events.push(Event::PhaseChanged {
            from: self.phase,
            to: phase,
        });
        self.phase = phase;
    }

    fn accepts_short_press(&self) -> bool {
        !self.phase.is_terminal()
            && self.phase != Phase::BatTransport
            && self.playback.is_none()
            && self.led.is_none()
    }

    fn accepts_long_press(&self) -> bool {
        !self.phase.is_terminal()
    }

    fn announce_start(&self, out_events: &mut Vec<Event>) {
        tracing::info!(player_room = self.player_room.number(), "new game");
        out_events.push(Event::GameStarted {
            player_room: self.player_room,
        });
        out_events.push(Event::IndicatorChanged {
            indicator: Indicator::WumpusMode,
            lit: self.wumpus_active,
        });
        out_events.push(Event::IndicatorChanged {
            indicator: Indicator::Sound,
            lit: self.sound_on,
        });
    }

    /// Starts a melody unless sound is off or another melody is playing.
    fn request_melody(&mut self, melody: Melody, out_events: &mut Vec<Event>) -> bool {
        if !self.sound_on || self.playback.is_some() {
            return false;
        }
        self.playback = Some(Playback::new(melody));
        out_events.push(Event::MelodyStarted { melody });
        out_events.push(Event::TickRateRequested { hz: MELODY_TICK_HZ });
        true
    }

    fn beep(&self, note: Note, out_events: &mut Vec<Event>) {
        if self.sound_on {
            out_events.push(Event::NotePlayed {
                note,
                duration: BEEP_DURATION,
            });
        }
    }

    fn arm_led(&mut self, color: LedColor, out_events: &mut Vec<Event>) {
        self.led = Some(LedFlash::new(color));
        out_events.push(Event::LedChanged { color: Some(color) });
    }

    fn begin_transport<R>(&mut self, rng: &mut R, out_events: &mut Vec<Event>)
    where
        R: RandomSource + ?Sized,
    {
        let destination = self.hazards.safe_room(rng);
        self.transport = Some(Transport {
            destination,
            ticks_remaining: TRANSPORT_TICKS,
        });
        self.set_phase(Phase::BatTransport, out_events);
        out_events.push(Event::BatSnatched { destination });
        let _ = self.request_melody(Melody::Bats, out_events);
    }

    fn die(&mut self, cause: DeathCause, out_events: &mut Vec<Event>) {
        tracing::info!(?cause, room = self.player_room.number(), "player died");
        self.transport = None;
        self.death_cause = Some(cause);
        self.set_phase(Phase::Died, out_events);
        out_events.push(Event::PlayerDied { cause });
        if !self.request_melody(Melody::Lose, out_events) {
            self.arm_led(LedColor::Red, out_events);
        }
    }

    fn win(&mut self, room: RoomId, out_events: &mut Vec<Event>) {
        tracing::info!(room = room.number(), "wumpus slain");
        self.transport = None;
        self.set_phase(Phase::Won, out_events);
        out_events.push(Event::WumpusSlain { room });
        if !self.request_melody(Melody::Win, out_events) {
            self.arm_led(LedColor::Green, out_events);
        }
    }

    fn enter_room_with(&mut self, hazard: Option<Hazard>, out_events: &mut Vec<Event>) -> bool {
        match hazard {
            Some(Hazard::Wumpus) => {
                self.die(DeathCause::Wumpus, out_events);
                false
            }
            Some(Hazard::Pitfall) => {
                self.die(DeathCause::Pitfall, out_events);
                false
            }
            Some(Hazard::Bat) | None => true,
        }
    }
}

/// Moves the player through the selected tunnel and reports the hazard found there.
///
/// With no selection the player stays put and no hazard is reported. The
/// consequences of the hazard are left to the caller.
pub fn resolve_move(world: &mut World, selection: Option<NeighborSlot>) -> Option<Hazard> {
    let slot = selection?;
    world.player_room = world.player_room.neighbor(slot);
    world.hazards.hazard_at(world.player_room)
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Short button presses are ignored while the game is over, while a bat
/// carries the player, and while a melody or the LED flash runs. Mode toggles
/// are ignored only once the game is over.
pub fn apply<R>(world: &mut World, command: Command, rng: &mut R, out_events: &mut Vec<Event>)
where
    R: RandomSource + ?Sized,
{
    match command {
        Command::Activate => {
            out_events.push(Event::TickRateRequested { hz: IDLE_TICK_HZ });
            world.announce_start(out_events);
            let _ = world.request_melody(Melody::Startup, out_events);
            sequencer::refresh_warnings(world, out_events);
        }
        Command::Tick => sequencer::tick(world, rng, out_events),
        Command::Cycle => {
            if world.accepts_short_press() {
                input::cycle(world, out_events);
            }
        }
        Command::Confirm => {
            if world.accepts_short_press() {
                input::confirm(world, rng, out_events);
            }
        }
        Command::ToggleWumpusMode => {
            if world.accepts_long_press() {
                input::toggle_wumpus_mode(world, out_events);
            }
        }
        Command::ToggleSound => {
            if world.accepts_long_press() {
                input::toggle_sound(world, out_events);
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use wumpus_core::{GameSnapshot, Hazard, Phase, RoomId, TransportView};

    use super::{HazardLayout, World};

    /// Captures a read-only snapshot for presentation.
    #[must_use]
    pub fn snapshot(world: &World) -> GameSnapshot {
        GameSnapshot {
            player_room: world.player_room,
            phase: world.phase,
            arrows_remaining: world.arrows_remaining,
            selection: world.selection,
            shot: world.shot.view(),
            warning: world.warnings.shown,
            death_cause: world.death_cause,
            action_visible: world.blink.action_visible,
            digits_visible: world.blink.digits_visible,
            wumpus_active: world.wumpus_active,
            sound_on: world.sound_on,
            melody: world.playback.map(|playback| playback.melody()),
            led: world.led.map(|flash| flash.color()),
            transport: world.transport.map(|transport| TransportView {
                destination: transport.destination,
                ticks_remaining: transport.ticks_remaining,
            }),
        }
    }

    /// Room the player occupies.
    #[must_use]
    pub fn player_room(world: &World) -> RoomId {
        world.player_room
    }

    /// Current phase of the input state machine.
    #[must_use]
    pub fn phase(world: &World) -> Phase {
        world.phase
    }

    /// Arrows left in the quiver.
    #[must_use]
    pub fn arrows_remaining(world: &World) -> u8 {
        world.arrows_remaining
    }

    /// Hazard occupying the provided room, if any.
    #[must_use]
    pub fn hazard_at(world: &World, room: RoomId) -> Option<Hazard> {
        world.hazards.hazard_at(room)
    }

    /// Provides read-only access to the full hazard layout.
    #[must_use]
    pub fn hazards(world: &World) -> &HazardLayout {
        &world.hazards
    }

    /// Rooms of the arrow path confirmed so far.
    #[must_use]
    pub fn shot_path(world: &World) -> &[RoomId] {
        world.shot.path()
    }

    /// Reports whether short button presses are currently processed.
    #[must_use]
    pub fn accepts_input(world: &World) -> bool {
        world.accepts_short_press()
    }

    /// Reports whether the face should stay the active display.
    #[must_use]
    pub fn stays_resident(world: &World) -> bool {
        snapshot(world).stays_resident()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Transport {
    destination: RoomId,
    ticks_remaining: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Blink {
    action_visible: bool,
    digits_visible: bool,
}

impl Default for Blink {
    fn default() -> Self {
        Self {
            action_visible: true,
            digits_visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct WarningCycle {
    cursor: usize,
    shown: Option<Hazard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(value: u8) -> RoomId {
        RoomId::new(value).expect("valid room")
    }

    #[test]
    fn resolve_move_without_selection_stays_put() {
        let mut world = World::from_layout(room(0), HazardLayout::empty());
        assert_eq!(resolve_move(&mut world, None), None);
        assert_eq!(query::player_room(&world), room(0));
    }

    #[test]
    fn resolve_move_reports_hazard_in_destination() {
        let hazards = HazardLayout::empty().with_hazard(room(4), Hazard::Pitfall);
        let mut world = World::from_layout(room(0), hazards);
        let hazard = resolve_move(&mut world, Some(NeighborSlot::Second));
        assert_eq!(hazard, Some(Hazard::Pitfall));
        assert_eq!(query::player_room(&world), room(4));
    }

    #[test]
    fn fresh_world_starts_in_shoot_phase_with_full_quiver() {
        let mut rng = SeededRandom::from_seed(1);
        let world = World::new(&mut rng);
        let snapshot = query::snapshot(&world);
        assert_eq!(snapshot.phase, Phase::Shoot);
        assert_eq!(snapshot.arrows_remaining, ARROW_COUNT);
        assert!(!snapshot.wumpus_active);
        assert!(snapshot.sound_on);
        assert!(snapshot.stays_resident());
    }

    #[test]
    fn mode_toggles_are_ignored_after_game_ends() {
        let mut rng = SeededRandom::from_seed(1);
        let hazards = HazardLayout::empty().with_hazard(room(4), Hazard::Pitfall);
        let mut world = World::from_layout(room(0), hazards);
        let mut events = Vec::new();
        world.die(DeathCause::Pitfall, &mut events);
        events.clear();
        apply(&mut world, Command::ToggleSound, &mut rng, &mut events);
        apply(&mut world, Command::ToggleWumpusMode, &mut rng, &mut events);
        assert!(events.is_empty());
        assert!(query::snapshot(&world).sound_on);
    }
}
