use wumpus_core::{Command, DisplayZone, Hazard, RandomSource, RoomId};
use wumpus_system_presentation::{render, Frame, Presenter};
use wumpus_world::{self as world, query, HazardLayout, SeededRandom, World};

fn room(value: u8) -> RoomId {
    RoomId::new(value).expect("valid room")
}

fn drive(world: &mut World, commands: &[Command], rng: &mut dyn RandomSource) {
    let mut events = Vec::new();
    for &command in commands {
        world::apply(world, command, rng, &mut events);
    }
}

fn frame(world: &World) -> Frame {
    render(&query::snapshot(world))
}

fn middle(frame: &Frame) -> (String, String) {
    (
        frame.text(DisplayZone::Hours).to_owned(),
        frame.text(DisplayZone::Minutes).to_owned(),
    )
}

fn pair(hours: &str, minutes: &str) -> (String, String) {
    (hours.to_owned(), minutes.to_owned())
}

fn quiet_cave() -> World {
    let hazards = HazardLayout::empty()
        .with_hazard(room(4), Hazard::Pitfall)
        .with_hazard(room(19), Hazard::Wumpus);
    World::from_layout(room(0), hazards)
}

#[test]
fn action_labels_follow_the_phase() {
    let mut world = quiet_cave();
    let mut rng = SeededRandom::from_seed(3);

    assert_eq!(middle(&frame(&world)), pair("SH", "OT"));
    drive(&mut world, &[Command::Cycle], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("GO", "  "));
    drive(&mut world, &[Command::Cycle, Command::Confirm], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("rn", "1 "));
    drive(&mut world, &[Command::Cycle, Command::Cycle], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("rn", "3 "));
    drive(&mut world, &[Command::Confirm], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("r1", "2 "));
    drive(&mut world, &[Command::Confirm], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("r2", "1 "));
}

#[test]
fn blinking_clears_action_zones() {
    let mut world = quiet_cave();
    let mut rng = SeededRandom::from_seed(3);

    drive(&mut world, &[Command::Tick], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("  ", "  "));

    drive(&mut world, &[Command::Tick, Command::Confirm, Command::Tick], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("rn", "  "));
}

#[test]
fn choices_made_while_blanked_are_shown_at_once() {
    let mut world = quiet_cave();
    let mut rng = SeededRandom::from_seed(3);

    drive(&mut world, &[Command::Confirm, Command::Tick], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("rn", "  "));
    drive(&mut world, &[Command::Cycle], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("rn", "2 "));

    drive(&mut world, &[Command::Confirm, Command::Tick], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("r1", "  "));
    drive(&mut world, &[Command::Cycle], &mut rng);
    assert_eq!(middle(&frame(&world)), pair("r1", "3 "));
}

#[test]
fn adjacent_hazard_is_shown_in_seconds_zone() {
    let mut world = quiet_cave();
    let mut rng = SeededRandom::from_seed(3);
    drive(&mut world, &[Command::Tick], &mut rng);
    assert_eq!(frame(&world).text(DisplayZone::Seconds), "Pt");
}

#[test]
fn falling_into_pit_shows_death_banner() {
    let mut world = quiet_cave();
    let mut rng = SeededRandom::from_seed(3);
    drive(
        &mut world,
        &[
            Command::Cycle,
            Command::Confirm,
            Command::Cycle,
            Command::Cycle,
            Command::Confirm,
        ],
        &mut rng,
    );

    let frame = frame(&world);
    assert_eq!(middle(&frame), pair("DI", "ED"));
    assert_eq!(frame.text(DisplayZone::Seconds), "Pt");
    assert_eq!(frame.text(DisplayZone::TopRight), " 5");
    assert_eq!(frame.text(DisplayZone::Top), "WMPUS");
}

#[test]
fn slaying_the_wumpus_shows_great() {
    let hazards = HazardLayout::empty().with_hazard(room(1), Hazard::Wumpus);
    let mut world = World::from_layout(room(0), hazards);
    let mut rng = SeededRandom::from_seed(3);
    drive(
        &mut world,
        &[Command::Confirm, Command::Confirm, Command::Confirm],
        &mut rng,
    );

    let frame = frame(&world);
    assert_eq!(middle(&frame), pair("Gr", "ea"));
    assert_eq!(frame.text(DisplayZone::Seconds), "t ");
}

#[test]
fn bat_transport_shows_bat_label() {
    let hazards = HazardLayout::empty().with_hazard(room(7), Hazard::Bat);
    let mut world = World::from_layout(room(0), hazards);
    let mut rng = SeededRandom::from_seed(3);
    drive(
        &mut world,
        &[
            Command::Cycle,
            Command::Confirm,
            Command::Cycle,
            Command::Cycle,
            Command::Cycle,
            Command::Confirm,
        ],
        &mut rng,
    );
    assert_eq!(middle(&frame(&world)), pair("BA", "T "));
}

#[test]
fn presenter_rewrites_only_changed_zones() {
    let mut world = quiet_cave();
    let mut rng = SeededRandom::from_seed(3);
    let mut presenter = Presenter::default();

    let first = presenter.present(&query::snapshot(&world));
    assert_eq!(first.len(), DisplayZone::ALL.len());
    assert!(presenter.present(&query::snapshot(&world)).is_empty());

    drive(&mut world, &[Command::Cycle], &mut rng);
    let zones: Vec<_> = presenter
        .present(&query::snapshot(&world))
        .into_iter()
        .map(|update| update.zone)
        .collect();
    assert_eq!(zones, vec![DisplayZone::Hours, DisplayZone::Minutes]);

    presenter.invalidate();
    assert_eq!(
        presenter.present(&query::snapshot(&world)).len(),
        DisplayZone::ALL.len()
    );
}
