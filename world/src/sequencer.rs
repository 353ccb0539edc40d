//! Per-tick scheduling of melodies, the LED flash, bat transport and idle blinking.

use wumpus_core::{
    Event, Hazard, LedColor, Melody, Phase, RandomSource, IDLE_TICK_HZ, NEIGHBOR_COUNT,
    NOTE_DURATION,
};

use crate::{feedback::PlaybackStep, World};

/// Advances the world by one tick, running only the first branch that applies.
pub(crate) fn tick<R>(world: &mut World, rng: &mut R, out_events: &mut Vec<Event>)
where
    R: RandomSource + ?Sized,
{
    if world.playback.is_some() {
        play_melody(world, out_events);
    } else if world.led.is_some() {
        count_down_led(world, rng, out_events);
    } else if world.phase == Phase::BatTransport {
        carry_player(world, rng, out_events);
    } else if !world.phase.is_terminal() {
        if world.phase == Phase::ChoosingRoom {
            world.blink.digits_visible = !world.blink.digits_visible;
        } else {
            world.blink.action_visible = !world.blink.action_visible;
        }
        refresh_warnings(world, out_events);
    }
}

/// Shows the next hazard adjacent to the player, clearing the warning when none is near.
pub(crate) fn refresh_warnings(world: &mut World, out_events: &mut Vec<Event>) {
    let mut nearby = [None; NEIGHBOR_COUNT];
    let mut count = 0;
    for neighbor in world.player_room.neighbors() {
        if let Some(hazard) = world.hazards.hazard_at(neighbor) {
            nearby[count] = Some(hazard);
            count += 1;
        }
    }

    let shown = if count == 0 {
        world.warnings.cursor = 0;
        None
    } else {
        let index = world.warnings.cursor % count;
        world.warnings.cursor = (index + 1) % count;
        nearby[index]
    };

    if shown == Some(Hazard::Bat) {
        let _ = world.request_melody(Melody::Bats, out_events);
    }
    if shown != world.warnings.shown {
        world.warnings.shown = shown;
        out_events.push(Event::WarningShown { hazard: shown });
    }
}

fn play_melody(world: &mut World, out_events: &mut Vec<Event>) {
    let Some(playback) = world.playback.as_mut() else {
        return;
    };
    match playback.advance() {
        PlaybackStep::Play(note) => {
            if world.sound_on {
                out_events.push(Event::NotePlayed {
                    note,
                    duration: NOTE_DURATION,
                });
            }
        }
        PlaybackStep::Finished => {
            let melody = playback.melody();
            world.playback = None;
            out_events.push(Event::MelodyFinished { melody });
            out_events.push(Event::TickRateRequested { hz: IDLE_TICK_HZ });
            let color = match melody {
                Melody::Win => Some(LedColor::Green),
                Melody::Lose => Some(LedColor::Red),
                Melody::Startup | Melody::Bats => None,
            };
            if let (Some(color), None) = (color, world.led) {
                world.arm_led(color, out_events);
            }
        }
    }
}

fn count_down_led<R>(world: &mut World, rng: &mut R, out_events: &mut Vec<Event>)
where
    R: RandomSource + ?Sized,
{
    let Some(flash) = world.led.as_mut() else {
        return;
    };
    if !flash.tick() {
        return;
    }
    out_events.push(Event::LedChanged { color: None });
    world.restart(rng);
    world.announce_start(out_events);
    refresh_warnings(world, out_events);
}

fn carry_player<R>(world: &mut World, rng: &mut R, out_events: &mut Vec<Event>)
where
    R: RandomSource + ?Sized,
{
    let Some(transport) = world.transport.as_mut() else {
        world.set_phase(Phase::Go, out_events);
        return;
    };
    transport.ticks_remaining = transport.ticks_remaining.saturating_sub(1);
    if transport.ticks_remaining > 0 {
        return;
    }

    let destination = transport.destination;
    world.transport = None;
    let from = world.player_room;
    world.player_room = destination;
    tracing::debug!(
        from = from.number(),
        to = destination.number(),
        "bat dropped player"
    );
    out_events.push(Event::PlayerDropped { room: destination });

    // The Wumpus may have roamed onto the destination during the flight; that is fatal.
    let hazard = world.hazards.hazard_at(destination);
    if hazard == Some(Hazard::Bat) {
        world.begin_transport(rng, out_events);
    } else if world.enter_room_with(hazard, out_events) {
        world.blink.action_visible = true;
        world.set_phase(Phase::Go, out_events);
        refresh_warnings(world, out_events);
    }
}

#[cfg(test)]
mod tests {
    use wumpus_core::{RoomId, TRANSPORT_TICKS};

    use crate::{query, HazardLayout, SeededRandom};

    use super::*;

    fn room(value: u8) -> RoomId {
        RoomId::new(value).expect("valid room")
    }

    #[test]
    fn warnings_cycle_through_adjacent_hazards() {
        let hazards = HazardLayout::empty()
            .with_hazard(room(4), Hazard::Pitfall)
            .with_hazard(room(7), Hazard::Wumpus);
        let mut world = World::from_layout(room(0), hazards);
        let mut events = Vec::new();
        let mut shown = Vec::new();
        for _ in 0..4 {
            refresh_warnings(&mut world, &mut events);
            shown.push(query::snapshot(&world).warning);
        }
        assert_eq!(
            shown,
            vec![
                Some(Hazard::Pitfall),
                Some(Hazard::Wumpus),
                Some(Hazard::Pitfall),
                Some(Hazard::Wumpus)
            ]
        );
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn no_adjacent_hazard_clears_warning() {
        let mut world = World::from_layout(room(0), HazardLayout::empty());
        let mut events = Vec::new();
        refresh_warnings(&mut world, &mut events);
        assert_eq!(query::snapshot(&world).warning, None);
        assert!(events.is_empty());
    }

    #[test]
    fn adjacent_bat_requests_bat_melody() {
        let hazards = HazardLayout::empty().with_hazard(room(1), Hazard::Bat);
        let mut world = World::from_layout(room(0), hazards);
        let mut events = Vec::new();
        refresh_warnings(&mut world, &mut events);
        assert!(events.contains(&Event::MelodyStarted {
            melody: Melody::Bats
        }));
        assert_eq!(query::snapshot(&world).melody, Some(Melody::Bats));
    }

    #[test]
    fn idle_tick_toggles_action_blink() {
        let mut world = World::from_layout(room(0), HazardLayout::empty());
        let mut rng = SeededRandom::from_seed(2);
        let mut events = Vec::new();
        tick(&mut world, &mut rng, &mut events);
        assert!(!query::snapshot(&world).action_visible);
        tick(&mut world, &mut rng, &mut events);
        assert!(query::snapshot(&world).action_visible);
    }

    #[test]
    fn transport_drops_player_after_countdown() {
        let mut world = World::from_layout(room(0), HazardLayout::empty());
        let mut rng = SeededRandom::from_seed(2);
        let mut events = Vec::new();
        world.sound_on = false;
        world.begin_transport(&mut rng, &mut events);
        let destination = query::snapshot(&world)
            .transport
            .expect("transport armed")
            .destination;

        for _ in 1..TRANSPORT_TICKS {
            tick(&mut world, &mut rng, &mut events);
            assert_eq!(query::phase(&world), Phase::BatTransport);
        }
        tick(&mut world, &mut rng, &mut events);
        assert_eq!(query::phase(&world), Phase::Go);
        assert_eq!(query::player_room(&world), destination);
        assert!(events.contains(&Event::PlayerDropped { room: destination }));
    }
}
