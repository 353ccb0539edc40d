#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure presentation system that projects game snapshots onto the segment display.
//!
//! The display is split into five zones (see [`DisplayZone`]). [`render`]
//! produces the full text of every zone for a snapshot and [`Presenter`]
//! remembers the previous frame so adapters only rewrite zones that changed.

use wumpus_core::{DeathCause, DisplayZone, GameSnapshot, Hazard, Phase, RoomId, TITLE_LABEL};

const BLANK: &str = "  ";

/// Text shown in every display zone for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    zones: [String; DisplayZone::ALL.len()],
}

impl Frame {
    /// Creates a frame with every zone blank except the title.
    #[must_use]
    pub fn titled() -> Self {
        let mut frame = Self {
            zones: Default::default(),
        };
        for zone in DisplayZone::ALL {
            frame.set(zone, blank(zone));
        }
        frame.set(DisplayZone::Top, TITLE_LABEL.to_owned());
        frame
    }

    /// Text written into the provided zone.
    #[must_use]
    pub fn text(&self, zone: DisplayZone) -> &str {
        &self.zones[slot(zone)]
    }

    /// Iterates over every zone in display order.
    pub fn zones(&self) -> impl Iterator<Item = (DisplayZone, &str)> + '_ {
        DisplayZone::ALL
            .into_iter()
            .map(move |zone| (zone, self.text(zone)))
    }

    /// Zones whose text differs from `previous`; every zone when there is no previous frame.
    #[must_use]
    pub fn changes_since(&self, previous: Option<&Frame>) -> Vec<ZoneUpdate> {
        self.zones()
            .filter(|(zone, text)| previous.map_or(true, |frame| frame.text(*zone) != *text))
            .map(|(zone, text)| ZoneUpdate {
                zone,
                text: text.to_owned(),
            })
            .collect()
    }

    fn set(&mut self, zone: DisplayZone, text: String) {
        self.zones[slot(zone)] = text;
    }
}

/// New text for a single display zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneUpdate {
    /// Zone to rewrite.
    pub zone: DisplayZone,
    /// Text to show, padded to the zone width.
    pub text: String,
}

/// Remembers the last frame written so only changed zones are reported.
#[derive(Debug, Default)]
pub struct Presenter {
    last: Option<Frame>,
}

impl Presenter {
    /// Renders the snapshot and returns the zones that must be rewritten.
    pub fn present(&mut self, snapshot: &GameSnapshot) -> Vec<ZoneUpdate> {
        let frame = render(snapshot);
        let updates = frame.changes_since(self.last.as_ref());
        self.last = Some(frame);
        updates
    }

    /// Forgets the last frame so the next call rewrites every zone.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Frame most recently presented.
    #[must_use]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }
}

/// Projects a snapshot onto the five display zones.
#[must_use]
pub fn render(snapshot: &GameSnapshot) -> Frame {
    let mut frame = Frame::titled();
    frame.set(DisplayZone::TopRight, room_digits(snapshot));

    let (hours, minutes) = action_label(snapshot);
    frame.set(DisplayZone::Hours, hours);
    frame.set(DisplayZone::Minutes, minutes);

    let seconds = match snapshot.phase {
        Phase::Died => snapshot.death_cause.map_or(BLANK, death_code),
        Phase::Won => "t ",
        _ => hazard_code(snapshot.warning),
    };
    frame.set(DisplayZone::Seconds, seconds.to_owned());
    frame
}

/// Two-character code of an adjacent hazard warning.
#[must_use]
pub const fn hazard_code(hazard: Option<Hazard>) -> &'static str {
    match hazard {
        Some(Hazard::Wumpus) => "UU",
        Some(Hazard::Bat) => "Bt",
        Some(Hazard::Pitfall) => "Pt",
        None => BLANK,
    }
}

/// Two-character code shown next to the death banner.
#[must_use]
pub const fn death_code(cause: DeathCause) -> &'static str {
    match cause {
        DeathCause::Wumpus => "UU",
        DeathCause::Pitfall => "Pt",
        DeathCause::Arrow => "Ar",
    }
}

fn room_digits(snapshot: &GameSnapshot) -> String {
    if snapshot.phase == Phase::ChoosingRoom {
        if snapshot.digits_visible {
            room_number(snapshot.selected_room())
        } else {
            BLANK.to_owned()
        }
    } else {
        room_number(snapshot.player_room)
    }
}

fn room_number(room: RoomId) -> String {
    format!("{:>2}", room.number())
}

fn action_label(snapshot: &GameSnapshot) -> (String, String) {
    let visible = snapshot.action_visible;
    let pair = |hours: &str, minutes: &str| (hours.to_owned(), minutes.to_owned());
    match snapshot.phase {
        Phase::Shoot if visible => pair("SH", "OT"),
        Phase::Go if visible => pair("GO", BLANK),
        Phase::Shoot | Phase::Go => pair(BLANK, BLANK),
        Phase::ShootDistance => {
            let minutes = if visible {
                format!("{:<2}", snapshot.shot.distance)
            } else {
                BLANK.to_owned()
            };
            ("rn".to_owned(), minutes)
        }
        Phase::ShootPath => {
            let minutes = if visible {
                format!("{:<2}", snapshot.shot.candidate.number())
            } else {
                BLANK.to_owned()
            };
            (format!("r{}", snapshot.shot.confirmed + 1), minutes)
        }
        Phase::ChoosingRoom => pair("GO", BLANK),
        Phase::BatTransport => pair("BA", "T "),
        Phase::Died => pair("DI", "ED"),
        Phase::Won => pair("Gr", "ea"),
    }
}

fn blank(zone: DisplayZone) -> String {
    " ".repeat(zone.width())
}

const fn slot(zone: DisplayZone) -> usize {
    match zone {
        DisplayZone::Top => 0,
        DisplayZone::TopRight => 1,
        DisplayZone::Hours => 2,
        DisplayZone::Minutes => 3,
        DisplayZone::Seconds => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::{NeighborSlot, ShotDraftView};

    fn snapshot(phase: Phase) -> GameSnapshot {
        GameSnapshot {
            player_room: RoomId::FIRST,
            phase,
            arrows_remaining: 5,
            selection: None,
            shot: ShotDraftView {
                distance: 1,
                confirmed: 0,
                candidate: RoomId::FIRST,
            },
            warning: None,
            death_cause: None,
            action_visible: true,
            digits_visible: true,
            wumpus_active: false,
            sound_on: true,
            melody: None,
            led: None,
            transport: None,
        }
    }

    #[test]
    fn titled_frame_pads_every_zone() {
        let frame = Frame::titled();
        for (zone, text) in frame.zones() {
            assert_eq!(text.len(), zone.width(), "zone {zone:?}");
        }
        assert_eq!(frame.text(DisplayZone::Top), "WMPUS");
    }

    #[test]
    fn rooms_are_shown_one_based_and_right_aligned() {
        let mut state = snapshot(Phase::Shoot);
        assert_eq!(render(&state).text(DisplayZone::TopRight), " 1");
        state.player_room = RoomId::new(19).expect("room");
        assert_eq!(render(&state).text(DisplayZone::TopRight), "20");
    }

    #[test]
    fn choosing_room_blinks_selected_digits() {
        let mut state = snapshot(Phase::ChoosingRoom);
        state.selection = Some(NeighborSlot::Third);
        assert_eq!(render(&state).text(DisplayZone::TopRight), " 8");
        state.digits_visible = false;
        assert_eq!(render(&state).text(DisplayZone::TopRight), "  ");
    }

    #[test]
    fn changes_since_reports_only_differing_zones() {
        let first = render(&snapshot(Phase::Shoot));
        let second = render(&snapshot(Phase::Go));
        let updates = second.changes_since(Some(&first));
        assert_eq!(
            updates,
            vec![
                ZoneUpdate {
                    zone: DisplayZone::Hours,
                    text: "GO".to_owned()
                },
                ZoneUpdate {
                    zone: DisplayZone::Minutes,
                    text: "  ".to_owned()
                },
            ]
        );
        assert_eq!(first.changes_since(None).len(), DisplayZone::ALL.len());
    }
}
