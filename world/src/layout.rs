//! Hazard placement across the cave.

use wumpus_core::{Hazard, RandomSource, RoomId, NEIGHBOR_COUNT, ROOM_COUNT};

const PLACEMENT_ORDER: [Hazard; 5] = [
    Hazard::Pitfall,
    Hazard::Pitfall,
    Hazard::Bat,
    Hazard::Bat,
    Hazard::Wumpus,
];

/// Occupant of every cave room.
///
/// A freshly generated layout holds exactly one Wumpus, two bats and two pits.
/// During play bats may be shot and the Wumpus relocates, but there is never
/// more than one Wumpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HazardLayout {
    cells: [Option<Hazard>; ROOM_COUNT],
}

impl HazardLayout {
    /// Creates a cave without any hazards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; ROOM_COUNT],
        }
    }

    /// Populates a cave around the player's starting room.
    ///
    /// Pits are placed first, then bats, then the Wumpus. Each placement draws
    /// rooms until one is neither the player's room nor already occupied.
    #[must_use]
    pub fn generate<R>(player_room: RoomId, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let mut layout = Self::empty();
        for hazard in PLACEMENT_ORDER {
            let room = layout.unique_empty_room(player_room, rng);
            layout.set(room, hazard);
        }
        layout
    }

    /// Returns a copy of the layout with `hazard` placed in `room`.
    ///
    /// Intended for scripted scenarios; the caller is responsible for keeping
    /// a single Wumpus in the cave.
    #[must_use]
    pub fn with_hazard(mut self, room: RoomId, hazard: Hazard) -> Self {
        self.set(room, hazard);
        self
    }

    /// Hazard occupying the provided room, if any.
    #[must_use]
    pub fn hazard_at(&self, room: RoomId) -> Option<Hazard> {
        self.cells[room.index()]
    }

    /// Room currently holding the Wumpus.
    #[must_use]
    pub fn wumpus_room(&self) -> Option<RoomId> {
        self.iter()
            .find(|(_, hazard)| *hazard == Some(Hazard::Wumpus))
            .map(|(room, _)| room)
    }

    /// Number of rooms holding the provided hazard.
    #[must_use]
    pub fn count(&self, hazard: Hazard) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(hazard))
            .count()
    }

    /// Iterates over every room and its occupant in ascending room order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, Option<Hazard>)> + '_ {
        RoomId::all().map(move |room| (room, self.hazard_at(room)))
    }

    /// Draws a room that holds neither the Wumpus nor a pit.
    ///
    /// Bat rooms and the player's own room qualify, so a bat may drop the
    /// player straight into another bat.
    pub fn safe_room<R>(&self, rng: &mut R) -> RoomId
    where
        R: RandomSource + ?Sized,
    {
        loop {
            let room = random_room(rng);
            if !matches!(
                self.hazard_at(room),
                Some(Hazard::Wumpus | Hazard::Pitfall)
            ) {
                return room;
            }
        }
    }

    pub(crate) fn set(&mut self, room: RoomId, hazard: Hazard) {
        self.cells[room.index()] = Some(hazard);
    }

    pub(crate) fn clear(&mut self, room: RoomId) {
        self.cells[room.index()] = None;
    }

    fn unique_empty_room<R>(&self, player_room: RoomId, rng: &mut R) -> RoomId
    where
        R: RandomSource + ?Sized,
    {
        loop {
            let room = random_room(rng);
            if room != player_room && self.hazard_at(room).is_none() {
                return room;
            }
        }
    }
}

impl Default for HazardLayout {
    fn default() -> Self {
        Self::empty()
    }
}

pub(crate) fn random_room<R>(rng: &mut R) -> RoomId
where
    R: RandomSource + ?Sized,
{
    let index = rng.below(ROOM_COUNT as u32) as usize % ROOM_COUNT;
    RoomId::from_index(index).unwrap_or(RoomId::FIRST)
}

pub(crate) fn random_neighbor<R>(room: RoomId, rng: &mut R) -> RoomId
where
    R: RandomSource + ?Sized,
{
    let index = rng.below(NEIGHBOR_COUNT as u32) as usize % NEIGHBOR_COUNT;
    room.neighbors()[index]
}
