//! Wumpus relocation policies.

use wumpus_core::{Hazard, RandomSource, RoomId};

use crate::layout::{random_neighbor, HazardLayout};

/// Active-mode draws in `0..100` above this value make the Wumpus move (24% of draws).
pub const WUMPUS_MOVE_THRESHOLD: u32 = 75;

/// Describes a single relocation of the Wumpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WumpusMove {
    /// Room the Wumpus left.
    pub from: RoomId,
    /// Room the Wumpus entered.
    pub to: RoomId,
}

/// Moves the Wumpus into a uniformly chosen neighbor of its room.
///
/// Whatever occupied the destination is trampled. Returns `None` only when
/// the cave has no Wumpus. Callers must check whether the Wumpus landed on
/// the player.
pub fn wumpus_flee<R>(hazards: &mut HazardLayout, rng: &mut R) -> Option<WumpusMove>
where
    R: RandomSource + ?Sized,
{
    let from = hazards.wumpus_room()?;
    let to = random_neighbor(from, rng);
    hazards.clear(from);
    hazards.set(to, Hazard::Wumpus);
    tracing::debug!(from = from.number(), to = to.number(), "wumpus relocated");
    Some(WumpusMove { from, to })
}

/// Active-mode roaming: flees with a 24% chance, otherwise stays put.
pub fn wumpus_move<R>(hazards: &mut HazardLayout, rng: &mut R) -> Option<WumpusMove>
where
    R: RandomSource + ?Sized,
{
    if rng.below(100) > WUMPUS_MOVE_THRESHOLD {
        wumpus_flee(hazards, rng)
    } else {
        None
    }
}
