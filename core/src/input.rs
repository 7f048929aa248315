//! Held-input state and its translation into a [`ControlIntent`].
//!
//! The device layer (keyboard, pointer) is an external collaborator.
//! It records what is held here and asks for the resulting intent; the
//! engine only ever sees the intent.

use crate::intent::ControlIntent;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Named directional keys.
/// Arrows drive thrust, WASD drives a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up:    bool,
    pub down:  bool,
    pub left:  bool,
    pub right: bool,
    pub w:     bool,
    pub a:     bool,
    pub s:     bool,
    pub d:     bool,
}

impl HeldKeys {
    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Up    => &mut self.up,
            Key::Down  => &mut self.down,
            Key::Left  => &mut self.left,
            Key::Right => &mut self.right,
            Key::W     => &mut self.w,
            Key::A     => &mut self.a,
            Key::S     => &mut self.s,
            Key::D     => &mut self.d,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right || self.w || self.a || self.s || self.d
    }
}

/// Everything the input layer currently holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub keys: HeldKeys,
    /// World-space pointer position while the pointer is pressed.
    pub pointer: Option<DVec2>,
}

/// First held key of a pair wins: `first` gives +1, `second` gives -1.
fn axis(first: bool, second: bool) -> f64 {
    if first {
        1.0
    } else if second {
        -1.0
    } else {
        0.0
    }
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        *self.keys.slot(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.keys.slot(key) = false;
    }

    /// Pointer pressed or dragged to `point`.
    pub fn pointer_at(&mut self, point: DVec2) {
        self.pointer = Some(point);
    }

    pub fn pointer_up(&mut self) {
        self.pointer = None;
    }

    /// True while anything is held.
    pub fn is_active(&self) -> bool {
        self.pointer.is_some() || self.keys.any()
    }

    /// Translate held input into an intent.
    ///
    /// A held pointer orbits the pointer; otherwise arrow keys give thrust,
    /// otherwise WASD gives a heading (screen coordinates, W is -y).
    pub fn intent(&self) -> ControlIntent {
        if let Some(p) = self.pointer {
            return ControlIntent::Orbit { x: p.x, y: p.y };
        }

        let main = axis(self.keys.up, self.keys.down);
        let side = axis(self.keys.left, self.keys.right);
        if main != 0.0 || side != 0.0 {
            return ControlIntent::Thrust { main, side };
        }

        // A and W are checked before D and S.
        let x = if self.keys.a { -1.0 } else if self.keys.d { 1.0 } else { 0.0 };
        let y = if self.keys.w { -1.0 } else if self.keys.s { 1.0 } else { 0.0 };
        if x != 0.0 || y != 0.0 {
            return ControlIntent::Direction { x, y };
        }

        ControlIntent::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_held_is_idle() {
        let input = InputState::default();
        assert!(!input.is_active());
        assert_eq!(input.intent(), ControlIntent::Idle);
    }

    #[test]
    fn arrows_give_thrust() {
        let mut input = InputState::default();
        input.press(Key::Up);
        input.press(Key::Right);
        assert_eq!(input.intent(), ControlIntent::Thrust { main: 1.0, side: -1.0 });

        input.release(Key::Up);
        input.release(Key::Right);
        input.press(Key::Down);
        assert_eq!(input.intent(), ControlIntent::Thrust { main: -1.0, side: 0.0 });
    }

    #[test]
    fn wasd_gives_a_heading() {
        let mut input = InputState::default();
        input.press(Key::W);
        assert_eq!(input.intent(), ControlIntent::Direction { x: 0.0, y: -1.0 });

        input.press(Key::A);
        assert_eq!(input.intent(), ControlIntent::Direction { x: -1.0, y: -1.0 });
    }

    #[test]
    fn pointer_overrides_keys() {
        let mut input = InputState::default();
        input.press(Key::Up);
        input.pointer_at(DVec2::new(10.0, -20.0));
        assert_eq!(input.intent(), ControlIntent::Orbit { x: 10.0, y: -20.0 });

        input.pointer_up();
        assert_eq!(input.intent(), ControlIntent::Thrust { main: 1.0, side: 0.0 });
    }

    #[test]
    fn arrows_beat_wasd() {
        let mut input = InputState::default();
        input.press(Key::D);
        input.press(Key::Left);
        assert_eq!(input.intent(), ControlIntent::Thrust { main: 0.0, side: 1.0 });
    }

    #[test]
    fn opposite_keys_resolve_to_the_first_of_each_pair() {
        let mut input = InputState::default();
        input.press(Key::A);
        input.press(Key::D);
        input.press(Key::W);
        input.press(Key::S);
        assert_eq!(input.intent(), ControlIntent::Direction { x: -1.0, y: -1.0 });

        input.release(Key::A);
        input.release(Key::W);
        assert_eq!(input.intent(), ControlIntent::Direction { x: 1.0, y: 1.0 });

        input.press(Key::Up);
        input.press(Key::Down);
        input.press(Key::Left);
        input.press(Key::Right);
        assert_eq!(input.intent(), ControlIntent::Thrust { main: 1.0, side: 1.0 });
    }
}
