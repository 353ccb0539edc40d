//! Button handling for the input state machine.

use wumpus_core::{DeathCause, Event, Hazard, Note, Phase, RandomSource};

use crate::{
    fire, resolve_move, sequencer, wumpus_flee, wumpus_move, ShotOutcome, World, WumpusMove,
};

pub(crate) fn cycle(world: &mut World, out_events: &mut Vec<Event>) {
    match world.phase {
        Phase::Shoot => {
            world.set_phase(Phase::Go, out_events);
            world.blink.action_visible = true;
        }
        Phase::Go => {
            world.set_phase(Phase::Shoot, out_events);
            world.blink.action_visible = true;
        }
        Phase::ShootDistance => {
            world.shot.cycle_distance();
            world.blink.action_visible = true;
        }
        Phase::ShootPath => {
            world.shot.cycle_candidate();
            world.blink.action_visible = true;
        }
        Phase::ChoosingRoom => {
            world.selection = wumpus_core::NeighborSlot::cycle(world.selection);
            world.blink.digits_visible = true;
        }
        Phase::BatTransport | Phase::Died | Phase::Won => {}
    }
}

pub(crate) fn confirm<R>(world: &mut World, rng: &mut R, out_events: &mut Vec<Event>)
where
    R: RandomSource + ?Sized,
{
    match world.phase {
        Phase::Go => {
            world.selection = None;
            world.blink.digits_visible = true;
            world.set_phase(Phase::ChoosingRoom, out_events);
        }
        Phase::Shoot => {
            world.shot.begin();
            world.blink.action_visible = true;
            world.set_phase(Phase::ShootDistance, out_events);
        }
        Phase::ShootDistance => {
            let [first, ..] = world.player_room.neighbors();
            world.shot.begin_path(first);
            world.blink.action_visible = true;
            world.set_phase(Phase::ShootPath, out_events);
        }
        Phase::ShootPath => {
            world.blink.action_visible = true;
            if world.shot.confirm_candidate() {
                release_arrow(world, rng, out_events);
            }
        }
        Phase::ChoosingRoom => enter_selected_room(world, rng, out_events),
        Phase::BatTransport | Phase::Died | Phase::Won => return,
    }

    if world.wumpus_active && !world.phase.is_terminal() {
        let moved = wumpus_move(&mut world.hazards, rng);
        settle_wumpus(world, moved, out_events);
    }
}

pub(crate) fn toggle_wumpus_mode(world: &mut World, out_events: &mut Vec<Event>) {
    world.wumpus_active = !world.wumpus_active;
    tracing::debug!(active = world.wumpus_active, "wumpus mode toggled");
    out_events.push(Event::IndicatorChanged {
        indicator: wumpus_core::Indicator::WumpusMode,
        lit: world.wumpus_active,
    });
    world.beep(Note::C6, out_events);
}

pub(crate) fn toggle_sound(world: &mut World, out_events: &mut Vec<Event>) {
    world.sound_on = !world.sound_on;
    tracing::debug!(sound_on = world.sound_on, "sound toggled");
    out_events.push(Event::IndicatorChanged {
        indicator: wumpus_core::Indicator::Sound,
        lit: world.sound_on,
    });
    world.beep(Note::C5, out_events);
}

fn release_arrow<R>(world: &mut World, rng: &mut R, out_events: &mut Vec<Event>)
where
    R: RandomSource + ?Sized,
{
    let outcome = fire(
        &mut world.hazards,
        world.player_room,
        &mut world.arrows_remaining,
        world.shot.path(),
        rng,
        out_events,
    );
    tracing::debug!(?outcome, arrows = world.arrows_remaining, "arrow released");

    match outcome {
        ShotOutcome::Miss => {
            out_events.push(Event::ArrowMissed {
                arrows_remaining: world.arrows_remaining,
            });
            world.blink.action_visible = true;
            world.set_phase(Phase::Shoot, out_events);
            if !world.wumpus_active {
                let moved = wumpus_flee(&mut world.hazards, rng);
                settle_wumpus(world, moved, out_events);
            }
        }
        ShotOutcome::Slain { room } => world.win(room, out_events),
        ShotOutcome::SelfHit { .. } | ShotOutcome::OutOfArrows => {
            world.die(DeathCause::Arrow, out_events);
        }
    }
}

fn enter_selected_room<R>(world: &mut World, rng: &mut R, out_events: &mut Vec<Event>)
where
    R: RandomSource + ?Sized,
{
    let from = world.player_room;
    let selection = world.selection.take();
    let hazard = resolve_move(world, selection);
    if world.player_room != from {
        tracing::debug!(
            from = from.number(),
            to = world.player_room.number(),
            "player moved"
        );
        out_events.push(Event::PlayerMoved {
            from,
            to: world.player_room,
        });
    }

    if hazard == Some(Hazard::Bat) {
        world.begin_transport(rng, out_events);
    } else if world.enter_room_with(hazard, out_events) {
        world.blink.action_visible = true;
        world.set_phase(Phase::Go, out_events);
        sequencer::refresh_warnings(world, out_events);
    }
}

/// Reports a relocation and kills the player if the Wumpus walked into them.
fn settle_wumpus(world: &mut World, moved: Option<WumpusMove>, out_events: &mut Vec<Event>) {
    let Some(WumpusMove { from, to }) = moved else {
        return;
    };
    out_events.push(Event::WumpusMoved { from, to });
    if to == world.player_room {
        world.die(DeathCause::Wumpus, out_events);
    }
}
