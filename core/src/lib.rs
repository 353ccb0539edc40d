#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Hunt the Wumpus engine.
//!
//! This crate defines the message surface that connects hosts, the
//! authoritative world, and pure systems. Hosts translate button presses and
//! scheduler ticks into [`Command`] values, the world executes those commands
//! via its `apply` entry point, and then broadcasts [`Event`] values that the
//! host turns into tones, indicator changes, and LED updates. Read-only
//! [`GameSnapshot`] values feed the presentation layer.
//!
//! The cave itself is static data: twenty rooms laid out on the vertices of a
//! dodecahedron, each connected to exactly three others.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of rooms in the cave.
pub const ROOM_COUNT: usize = 20;
/// Number of tunnels leaving every room.
pub const NEIGHBOR_COUNT: usize = 3;
/// Number of bottomless pits placed at generation time.
pub const PIT_COUNT: usize = 2;
/// Number of super bats placed at generation time.
pub const BAT_COUNT: usize = 2;
/// Arrows available at the start of every game.
pub const ARROW_COUNT: u8 = 5;
/// Longest arrow flight, in rooms, the player may declare.
pub const MAX_SHOT_DISTANCE: u8 = 5;
/// Ticks a bat spends carrying the player before dropping them.
pub const TRANSPORT_TICKS: u8 = 4;
/// Ticks the win/lose LED stays lit before a new game begins.
pub const LED_FLASH_TICKS: u8 = 3;
/// Tick rate requested while no melody plays.
pub const IDLE_TICK_HZ: u8 = 4;
/// Tick rate requested for smooth melody playback.
pub const MELODY_TICK_HZ: u8 = 8;
/// Length of every melody note.
pub const NOTE_DURATION: Duration = Duration::from_millis(120);
/// Length of the confirmation beep played by the mode toggles.
pub const BEEP_DURATION: Duration = Duration::from_millis(50);
/// Label shown in the top display zone while the face is active.
pub const TITLE_LABEL: &str = "WMPUS";

const CAVE: [[u8; NEIGHBOR_COUNT]; ROOM_COUNT] = [
    [1, 4, 7],
    [0, 2, 9],
    [1, 3, 11],
    [2, 4, 13],
    [0, 3, 5],
    [4, 6, 14],
    [5, 7, 16],
    [0, 6, 8],
    [7, 9, 17],
    [1, 8, 10],
    [9, 11, 18],
    [2, 10, 12],
    [11, 13, 19],
    [3, 12, 14],
    [5, 13, 15],
    [14, 16, 19],
    [6, 15, 17],
    [8, 16, 18],
    [10, 17, 19],
    [12, 15, 18],
];

/// Uniform integer generator consumed by the engine.
///
/// This is the only nondeterministic input of the game. Implementations must
/// return a value in `0..bound`; callers never pass a zero bound.
pub trait RandomSource {
    /// Draws a uniformly distributed integer in `0..bound`.
    fn below(&mut self, bound: u32) -> u32;
}

/// Identifier of a single cave room in the range `0..20`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct RoomId(u8);

impl RoomId {
    /// Room zero, the first row of the cave table.
    pub const FIRST: RoomId = Self(0);

    /// Creates a room identifier, returning `None` when the value lies outside the cave.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < ROOM_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a room identifier from a zero-based table index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::new)
    }

    /// Retrieves the zero-based numeric representation of the room.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Zero-based index suitable for addressing per-room tables.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// One-based room number shown to the player.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.0 + 1
    }

    /// Iterates over every room of the cave in ascending order.
    pub fn all() -> impl Iterator<Item = RoomId> {
        (0..ROOM_COUNT as u8).map(Self)
    }

    /// Returns the three rooms connected to this one, in tunnel order.
    #[must_use]
    pub const fn neighbors(self) -> [RoomId; NEIGHBOR_COUNT] {
        let row = CAVE[self.0 as usize];
        [Self(row[0]), Self(row[1]), Self(row[2])]
    }

    /// Returns the room reached through the provided tunnel.
    #[must_use]
    pub const fn neighbor(self, slot: NeighborSlot) -> RoomId {
        self.neighbors()[slot.index()]
    }

    /// Reports whether a tunnel connects this room to `other`.
    #[must_use]
    pub fn is_adjacent(self, other: RoomId) -> bool {
        self.neighbors().contains(&other)
    }

    /// Next room in numeric order, wrapping from the last room to the first.
    #[must_use]
    pub const fn next_wrapping(self) -> RoomId {
        if self.0 as usize + 1 >= ROOM_COUNT {
            Self(0)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl TryFrom<u8> for RoomId {
    type Error = InvalidRoom;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidRoom { value })
    }
}

impl From<RoomId> for u8 {
    fn from(room: RoomId) -> Self {
        room.0
    }
}

/// Error raised when a numeric value does not name a cave room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("room {value} is outside the cave of 20 rooms")]
pub struct InvalidRoom {
    /// Value that failed validation.
    pub value: u8,
}

/// One of the three tunnels leaving a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighborSlot {
    /// First tunnel in cave-table order.
    First,
    /// Second tunnel in cave-table order.
    Second,
    /// Third tunnel in cave-table order.
    Third,
}

impl NeighborSlot {
    /// Every tunnel in cave-table order.
    pub const ALL: [NeighborSlot; NEIGHBOR_COUNT] = [Self::First, Self::Second, Self::Third];

    /// Index of the tunnel within a room's neighbor triple.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// Maps a neighbor index back to its tunnel.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            _ => None,
        }
    }

    /// Advances a room selector: no selection, then each tunnel, then back to no selection.
    #[must_use]
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::First),
            Some(Self::First) => Some(Self::Second),
            Some(Self::Second) => Some(Self::Third),
            Some(Self::Third) => None,
        }
    }
}

/// Occupant of a cave room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hazard {
    /// The Wumpus. Entering its room is fatal; shooting it wins the game.
    Wumpus,
    /// A super bat that carries the player to a random safe room.
    Bat,
    /// A bottomless pit. Entering it is fatal.
    Pitfall,
}

/// Reason the player's game ended in death.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// Walked into the Wumpus, or the Wumpus walked into the player.
    Wumpus,
    /// Fell into a bottomless pit.
    Pitfall,
    /// Shot themselves or ran out of arrows.
    Arrow,
}

impl DeathCause {
    /// Death caused by entering a room with the provided hazard, if it is lethal.
    #[must_use]
    pub const fn from_hazard(hazard: Hazard) -> Option<Self> {
        match hazard {
            Hazard::Wumpus => Some(Self::Wumpus),
            Hazard::Pitfall => Some(Self::Pitfall),
            Hazard::Bat => None,
        }
    }
}

/// Current state of the input state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// "SHOT" is offered as the next action.
    Shoot,
    /// The player is declaring how many rooms the arrow flies through.
    ShootDistance,
    /// The player is picking the rooms of the arrow's path.
    ShootPath,
    /// "GO" is offered as the next action.
    Go,
    /// The player is picking the tunnel to walk through.
    ChoosingRoom,
    /// A bat is carrying the player.
    BatTransport,
    /// The game ended with the player's death.
    Died,
    /// The game ended with the Wumpus slain.
    Won,
}

impl Phase {
    /// Reports whether the phase ends the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Died | Self::Won)
    }
}

/// Named pitches used by the game's melodies and beeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    /// A3.
    A3,
    /// B3.
    B3,
    /// C4.
    C4,
    /// D4.
    D4,
    /// E4.
    E4,
    /// F4.
    F4,
    /// F♯4 / G♭4.
    FSharp4,
    /// G4.
    G4,
    /// G♯4 / A♭4.
    GSharp4,
    /// A4.
    A4,
    /// A♯4 / B♭4.
    ASharp4,
    /// B4.
    B4,
    /// C5.
    C5,
    /// E5.
    E5,
    /// G5.
    G5,
    /// C6.
    C6,
    /// B6.
    B6,
    /// C7.
    C7,
}

impl Note {
    /// Scientific pitch name of the note.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A3 => "A3",
            Self::B3 => "B3",
            Self::C4 => "C4",
            Self::D4 => "D4",
            Self::E4 => "E4",
            Self::F4 => "F4",
            Self::FSharp4 => "F#4",
            Self::G4 => "G4",
            Self::GSharp4 => "G#4",
            Self::A4 => "A4",
            Self::ASharp4 => "A#4",
            Self::B4 => "B4",
            Self::C5 => "C5",
            Self::E5 => "E5",
            Self::G5 => "G5",
            Self::C6 => "C6",
            Self::B6 => "B6",
            Self::C7 => "C7",
        }
    }

    /// Equal-tempered frequency in hertz (A4 = 440 Hz).
    #[must_use]
    pub const fn frequency_hz(self) -> f32 {
        match self {
            Self::A3 => 220.00,
            Self::B3 => 246.94,
            Self::C4 => 261.63,
            Self::D4 => 293.66,
            Self::E4 => 329.63,
            Self::F4 => 349.23,
            Self::FSharp4 => 369.99,
            Self::G4 => 392.00,
            Self::GSharp4 => 415.30,
            Self::A4 => 440.00,
            Self::ASharp4 => 466.16,
            Self::B4 => 493.88,
            Self::C5 => 523.25,
            Self::E5 => 659.25,
            Self::G5 => 783.99,
            Self::C6 => 1_046.50,
            Self::B6 => 1_975.53,
            Self::C7 => 2_093.00,
        }
    }
}

/// Short tunes played as asynchronous feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Melody {
    /// "Hall of the Mountain King" opening, played on activation.
    Startup,
    /// Ascending arpeggio played after slaying the Wumpus.
    Win,
    /// Descending chromatic run played after dying.
    Lose,
    /// Bat flutter played when bats are near or carrying the player.
    Bats,
}

impl Melody {
    /// Notes of the melody in playback order.
    #[must_use]
    pub const fn notes(self) -> &'static [Note] {
        match self {
            Self::Startup => &[
                Note::A3,
                Note::B3,
                Note::C4,
                Note::D4,
                Note::E4,
                Note::D4,
                Note::C4,
            ],
            Self::Win => &[
                Note::C4,
                Note::E4,
                Note::G4,
                Note::C5,
                Note::E5,
                Note::G5,
                Note::C6,
            ],
            Self::Lose => &[
                Note::B4,
                Note::ASharp4,
                Note::A4,
                Note::GSharp4,
                Note::G4,
                Note::FSharp4,
                Note::F4,
            ],
            Self::Bats => &[Note::C7, Note::B6, Note::C7, Note::B6],
        }
    }
}

/// Colours the feedback LED can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedColor {
    /// Shown after a win.
    Green,
    /// Shown after a death.
    Red,
}

/// Binary indicators reflecting the two mode toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Lit while the Wumpus roams after every action.
    WumpusMode,
    /// Lit while sound is enabled.
    Sound,
}

/// Named text zones of the segment display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DisplayZone {
    /// Title label across the top.
    Top,
    /// Two-digit room number in the top-right corner.
    TopRight,
    /// Two characters in the hours position.
    Hours,
    /// Two characters in the minutes position.
    Minutes,
    /// Two characters in the seconds position.
    Seconds,
}

impl DisplayZone {
    /// Every zone in display order.
    pub const ALL: [DisplayZone; 5] = [
        Self::Top,
        Self::TopRight,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// Number of characters the zone can show.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Top => 5,
            Self::TopRight | Self::Hours | Self::Minutes | Self::Seconds => 2,
        }
    }
}

/// Physical buttons available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Top-left button: cycles selections, long press toggles the Wumpus mode.
    Cycle,
    /// Top-right button: confirms selections, long press toggles sound.
    Confirm,
}

/// Duration class of a button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Press {
    /// Released before the long-press threshold.
    Short,
    /// Held past the long-press threshold.
    Long,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Announces that the face became active: tick rate, indicators, startup tune, warnings.
    Activate,
    /// Advances the asynchronous feedback sequences by one scheduler tick.
    Tick,
    /// Advances the selector of the current phase without committing.
    Cycle,
    /// Commits the current phase.
    Confirm,
    /// Switches between the stationary and the active Wumpus.
    ToggleWumpusMode,
    /// Switches sound on or off.
    ToggleSound,
}

impl Command {
    /// Maps a button press onto the command it triggers.
    #[must_use]
    pub const fn from_press(button: Button, press: Press) -> Self {
        match (button, press) {
            (Button::Cycle, Press::Short) => Self::Cycle,
            (Button::Cycle, Press::Long) => Self::ToggleWumpusMode,
            (Button::Confirm, Press::Short) => Self::Confirm,
            (Button::Confirm, Press::Long) => Self::ToggleSound,
        }
    }
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Requests that the host scheduler switch to a new tick rate.
    TickRateRequested {
        /// Requested ticks per second.
        hz: u8,
    },
    /// Requests that the host buzzer play a note.
    NotePlayed {
        /// Pitch to play.
        note: Note,
        /// How long the note sounds.
        duration: Duration,
    },
    /// Reports that an indicator must be set or cleared.
    IndicatorChanged {
        /// Indicator affected by the change.
        indicator: Indicator,
        /// Whether the indicator is now lit.
        lit: bool,
    },
    /// Reports that the LED must show a colour, or turn off when `None`.
    LedChanged {
        /// Colour to show, if any.
        color: Option<LedColor>,
    },
    /// Confirms that a brand-new game was generated.
    GameStarted {
        /// Room the player starts in.
        player_room: RoomId,
    },
    /// Announces a transition of the input state machine.
    PhaseChanged {
        /// Phase before the transition.
        from: Phase,
        /// Phase after the transition.
        to: Phase,
    },
    /// Confirms that the player walked through a tunnel.
    PlayerMoved {
        /// Room the player left.
        from: RoomId,
        /// Room the player entered.
        to: RoomId,
    },
    /// Reports that a bat grabbed the player.
    BatSnatched {
        /// Room the bat will drop the player in.
        destination: RoomId,
    },
    /// Reports that a bat released the player.
    PlayerDropped {
        /// Room the player landed in.
        room: RoomId,
    },
    /// Reports that an arrow strayed from the chosen path.
    ArrowDeflected {
        /// Zero-based path slot that was redirected.
        slot: usize,
        /// Room the player chose for the slot.
        chosen: RoomId,
        /// Room the arrow actually flew into.
        actual: RoomId,
    },
    /// Reports that an arrow killed a bat.
    BatShot {
        /// Room the bat occupied.
        room: RoomId,
    },
    /// Reports that an arrow missed everything it could kill.
    ArrowMissed {
        /// Arrows left in the quiver.
        arrows_remaining: u8,
    },
    /// Reports that the Wumpus changed rooms.
    WumpusMoved {
        /// Room the Wumpus left.
        from: RoomId,
        /// Room the Wumpus entered.
        to: RoomId,
    },
    /// Reports that the warning cycle now shows a different hazard.
    WarningShown {
        /// Hazard sensed in an adjacent room, or `None` when nothing is near.
        hazard: Option<Hazard>,
    },
    /// Reports that the player died.
    PlayerDied {
        /// What killed the player.
        cause: DeathCause,
    },
    /// Reports that an arrow slew the Wumpus.
    WumpusSlain {
        /// Room the Wumpus occupied.
        room: RoomId,
    },
    /// Confirms that melody playback began.
    MelodyStarted {
        /// Melody that started.
        melody: Melody,
    },
    /// Confirms that melody playback finished.
    MelodyFinished {
        /// Melody that finished.
        melody: Melody,
    },
}

/// Read-only view of the arrow path being composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotDraftView {
    /// Declared number of rooms the arrow flies through (1 to 5).
    pub distance: u8,
    /// Number of path rooms confirmed so far.
    pub confirmed: u8,
    /// Room currently offered for the next path slot.
    pub candidate: RoomId,
}

/// Read-only view of an in-progress bat transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportView {
    /// Room the bat will drop the player in.
    pub destination: RoomId,
    /// Ticks left before the drop.
    pub ticks_remaining: u8,
}

/// Immutable representation of the game state used for presentation.
///
/// The hazard layout is deliberately absent: the player only ever learns
/// about hazards through [`GameSnapshot::warning`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Room the player occupies.
    pub player_room: RoomId,
    /// Current phase of the input state machine.
    pub phase: Phase,
    /// Arrows left in the quiver.
    pub arrows_remaining: u8,
    /// Tunnel highlighted while choosing a room, `None` meaning "stay put".
    pub selection: Option<NeighborSlot>,
    /// Arrow path being composed.
    pub shot: ShotDraftView,
    /// Hazard currently shown by the adjacent-hazard warning cycle.
    pub warning: Option<Hazard>,
    /// Cause of death once the game ended in [`Phase::Died`].
    pub death_cause: Option<DeathCause>,
    /// Blink state of the action label.
    pub action_visible: bool,
    /// Blink state of the selected-room digits.
    pub digits_visible: bool,
    /// Whether the Wumpus roams after every action.
    pub wumpus_active: bool,
    /// Whether sound is enabled.
    pub sound_on: bool,
    /// Melody currently playing, if any.
    pub melody: Option<Melody>,
    /// Colour of the win/lose LED flash while it runs.
    pub led: Option<LedColor>,
    /// Bat transport in progress, if any.
    pub transport: Option<TransportView>,
}

impl GameSnapshot {
    /// Room the player would walk into if the current selection were confirmed.
    #[must_use]
    pub fn selected_room(&self) -> RoomId {
        self.selection
            .map_or(self.player_room, |slot| self.player_room.neighbor(slot))
    }

    /// Reports whether the face should stay the active display.
    ///
    /// Hosts may time-share the display while a melody or the LED flash runs.
    #[must_use]
    pub const fn stays_resident(&self) -> bool {
        self.melody.is_none() && self.led.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn every_room_has_three_distinct_neighbors() {
        for room in RoomId::all() {
            let [a, b, c] = room.neighbors();
            assert!(a != b && b != c && a != c, "room {room:?} repeats a tunnel");
            assert!(!room.is_adjacent(room), "room {room:?} connects to itself");
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        for room in RoomId::all() {
            for neighbor in room.neighbors() {
                assert!(
                    neighbor.neighbors().contains(&room),
                    "{neighbor:?} does not lead back to {room:?}"
                );
            }
        }
    }

    #[test]
    fn room_construction_rejects_values_outside_cave() {
        assert_eq!(RoomId::new(19).map(|room| room.get()), Some(19));
        assert!(RoomId::new(20).is_none());
        assert_eq!(RoomId::try_from(42), Err(InvalidRoom { value: 42 }));
        assert!(RoomId::from_index(usize::MAX).is_none());
    }

    #[test]
    fn next_wrapping_visits_every_room() {
        let mut room = RoomId::new(0).expect("room 0");
        for _ in 0..ROOM_COUNT {
            room = room.next_wrapping();
        }
        assert_eq!(room.get(), 0);
        assert_eq!(RoomId::new(19).expect("room 19").next_wrapping().get(), 0);
    }

    #[test]
    fn neighbor_selector_cycles_through_stay_put() {
        let mut selection = None;
        let mut visited = Vec::new();
        for _ in 0..4 {
            selection = NeighborSlot::cycle(selection);
            visited.push(selection);
        }
        assert_eq!(
            visited,
            vec![
                Some(NeighborSlot::First),
                Some(NeighborSlot::Second),
                Some(NeighborSlot::Third),
                None
            ]
        );
    }

    #[test]
    fn melodies_have_expected_lengths() {
        assert_eq!(Melody::Startup.notes().len(), 7);
        assert_eq!(Melody::Win.notes().len(), 7);
        assert_eq!(Melody::Lose.notes().len(), 7);
        assert_eq!(Melody::Bats.notes().len(), 4);
    }

    #[test]
    fn button_presses_map_to_commands() {
        assert_eq!(Command::from_press(Button::Cycle, Press::Short), Command::Cycle);
        assert_eq!(
            Command::from_press(Button::Cycle, Press::Long),
            Command::ToggleWumpusMode
        );
        assert_eq!(Command::from_press(Button::Confirm, Press::Short), Command::Confirm);
        assert_eq!(
            Command::from_press(Button::Confirm, Press::Long),
            Command::ToggleSound
        );
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn event_round_trips_through_bincode() {
        assert_round_trip(&Event::ArrowDeflected {
            slot: 2,
            chosen: RoomId::new(3).expect("room 3"),
            actual: RoomId::new(12).expect("room 12"),
        });
    }

    #[test]
    fn room_deserialization_rejects_out_of_range_values() {
        let bytes = bincode::serialize(&25_u8).expect("serialize");
        assert!(bincode::deserialize::<RoomId>(&bytes).is_err());
    }
}
