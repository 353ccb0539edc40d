//! Arrow path composition and resolution.

use wumpus_core::{
    Event, Hazard, RandomSource, RoomId, ShotDraftView, MAX_SHOT_DISTANCE,
};

use crate::layout::{random_neighbor, HazardLayout};

const PATH_CAPACITY: usize = MAX_SHOT_DISTANCE as usize;

/// Result of releasing an arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The arrow flew its whole path without killing the Wumpus.
    Miss,
    /// The arrow killed the Wumpus.
    Slain {
        /// Room where the Wumpus was struck.
        room: RoomId,
    },
    /// The arrow flew back into the shooter's room.
    SelfHit {
        /// Room of the shooter.
        room: RoomId,
    },
    /// The quiver was empty when the shot was attempted.
    OutOfArrows,
}

/// Arrow path being composed one slot at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ShotDraft {
    distance: u8,
    path: [RoomId; PATH_CAPACITY],
    confirmed: u8,
    candidate: RoomId,
}

impl ShotDraft {
    pub(crate) const fn new() -> Self {
        Self {
            distance: 1,
            path: [RoomId::FIRST; PATH_CAPACITY],
            confirmed: 0,
            candidate: RoomId::FIRST,
        }
    }

    /// Starts declaring a new shot at the shortest distance.
    pub(crate) fn begin(&mut self) {
        self.distance = 1;
        self.confirmed = 0;
    }

    pub(crate) fn cycle_distance(&mut self) {
        self.distance = if self.distance >= MAX_SHOT_DISTANCE {
            1
        } else {
            self.distance + 1
        };
    }

    /// Starts picking rooms, offering `first` for slot zero.
    pub(crate) fn begin_path(&mut self, first: RoomId) {
        self.confirmed = 0;
        self.candidate = first;
    }

    pub(crate) fn cycle_candidate(&mut self) {
        self.candidate = self.candidate.next_wrapping();
    }

    /// Records the candidate in the next slot and reports whether the path is complete.
    pub(crate) fn confirm_candidate(&mut self) -> bool {
        let slot = usize::from(self.confirmed);
        if slot < PATH_CAPACITY && self.confirmed < self.distance {
            self.path[slot] = self.candidate;
            self.confirmed += 1;
        }
        self.candidate = RoomId::FIRST;
        self.confirmed >= self.distance
    }

    /// Confirmed slots, never longer than the declared distance.
    pub(crate) fn path(&self) -> &[RoomId] {
        let len = usize::from(self.confirmed.min(self.distance)).min(PATH_CAPACITY);
        &self.path[..len]
    }

    pub(crate) const fn view(&self) -> ShotDraftView {
        ShotDraftView {
            distance: self.distance,
            confirmed: self.confirmed,
            candidate: self.candidate,
        }
    }
}

/// Releases an arrow along `path`.
///
/// One arrow is taken from the quiver first; with the quiver empty the shot
/// fails before any room is visited. Each slot after the first must be
/// connected to the room the arrow actually reached before it, otherwise the
/// arrow is deflected into a random neighbor of that room. Bats in the path are
/// killed and the arrow keeps flying.
pub fn fire<R>(
    hazards: &mut HazardLayout,
    player_room: RoomId,
    arrows_remaining: &mut u8,
    path: &[RoomId],
    rng: &mut R,
    out_events: &mut Vec<Event>,
) -> ShotOutcome
where
    R: RandomSource + ?Sized,
{
    let Some(left) = arrows_remaining.checked_sub(1) else {
        return ShotOutcome::OutOfArrows;
    };
    *arrows_remaining = left;

    let mut previous: Option<RoomId> = None;
    for (slot, &chosen) in path.iter().take(PATH_CAPACITY).enumerate() {
        let room = match previous {
            Some(from) if !is_connected(from, chosen) => {
                let actual = deflect(from, rng);
                tracing::debug!(
                    slot,
                    chosen = chosen.number(),
                    actual = actual.number(),
                    "crooked arrow"
                );
                out_events.push(Event::ArrowDeflected {
                    slot,
                    chosen,
                    actual,
                });
                actual
            }
            _ => chosen,
        };

        if room == player_room {
            return ShotOutcome::SelfHit { room };
        }

        match hazards.hazard_at(room) {
            Some(Hazard::Bat) => {
                hazards.clear(room);
                out_events.push(Event::BatShot { room });
            }
            Some(Hazard::Wumpus) => return ShotOutcome::Slain { room },
            Some(Hazard::Pitfall) | None => {}
        }

        previous = Some(room);
    }

    ShotOutcome::Miss
}

fn is_connected(from: RoomId, to: RoomId) -> bool {
    let mut found = false;
    for neighbor in from.neighbors() {
        if neighbor == to {
            found = true;
            break;
        }
    }
    found
}

fn deflect<R>(from: RoomId, rng: &mut R) -> RoomId
where
    R: RandomSource + ?Sized,
{
    random_neighbor(from, rng)
}
