use anyhow::{bail, Result};
use wumpus_core::Button;
use wumpus_face::FaceEvent;

/// Action requested by one key of the input script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Event(FaceEvent),
    Quit,
}

/// Parses a key script: `a`/`A` short/long cycle, `b`/`B` short/long confirm,
/// `.` tick, `q` quit. Whitespace is ignored.
pub(crate) fn parse_keys(script: &str) -> Result<Vec<KeyAction>> {
    let mut actions = Vec::with_capacity(script.len());
    for (offset, key) in script.char_indices() {
        let action = match key {
            'a' => KeyAction::Event(FaceEvent::short(Button::Cycle)),
            'A' => KeyAction::Event(FaceEvent::long(Button::Cycle)),
            'b' => KeyAction::Event(FaceEvent::short(Button::Confirm)),
            'B' => KeyAction::Event(FaceEvent::long(Button::Confirm)),
            '.' => KeyAction::Event(FaceEvent::Tick),
            'q' => KeyAction::Quit,
            key if key.is_whitespace() => continue,
            other => bail!("unknown key `{other}` at offset {offset}"),
        };
        actions.push(action);
    }
    Ok(actions)
}
