//! Key bindings.

use crossterm::event::KeyCode;
use strictly_river::{Entity, SecretKey};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Board or put ashore an entity.
    Toggle(Entity),
    /// Row across.
    Cross,
    /// Start over.
    Reset,
    /// Watch the scripted solution (once unlocked).
    ShowSolution,
    /// Leave the game.
    Quit,
}

/// Maps a key to a player command.
///
/// Digits 1-6 pick entities in [`Entity::ALL`] order.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Enter => Some(Command::Cross),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            digit @ '1'..='6' => digit
                .to_digit(10)
                .and_then(|d| Entity::ALL.get(d as usize - 1))
                .map(|entity| Command::Toggle(*entity)),
            ' ' | 'c' => Some(Command::Cross),
            'r' => Some(Command::Reset),
            's' => Some(Command::ShowSolution),
            'q' => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Maps a key to what the secret-sequence detector sees.
pub fn secret_key_for(key: KeyCode) -> Option<SecretKey> {
    match key {
        KeyCode::Up => Some(SecretKey::Up),
        KeyCode::Down => Some(SecretKey::Down),
        KeyCode::Left => Some(SecretKey::Left),
        KeyCode::Right => Some(SecretKey::Right),
        KeyCode::Char(c) => Some(SecretKey::char(c)),
        _ => None,
    }
}

/// Key label shown next to an entity.
pub fn entity_key(entity: Entity) -> usize {
    entity.index() + 1
}
