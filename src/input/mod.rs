use macroquad::prelude::*;

use crate::application::{Command, Simulation};
use crate::domain::Preset;

/// Keyboard bindings, polled once per frame
pub const KEY_BINDINGS: [(KeyCode, Command); 6] = [
    (KeyCode::Space, Command::TogglePause),
    (KeyCode::G, Command::ToggleGrid),
    (KeyCode::N, Command::Step),
    (KeyCode::Right, Command::Step),
    (KeyCode::C, Command::Reset(Preset::Empty)),
    (KeyCode::S, Command::Reset(Preset::StableSquares)),
];

/// Commands whose key went down since the last frame
pub fn pressed_commands() -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

/// Process keyboard input functionally
pub fn process_keyboard_input(simulation: Simulation) -> Simulation {
    pressed_commands().into_iter().fold(simulation, Simulation::apply)
}
