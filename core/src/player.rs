use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::TileIndex;

/// One of the two seats at the table. Player one always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    position: Option<TileIndex>,
    is_first_player: bool,
    is_computer: bool,
    name: String,
}

impl Player {
    pub fn human(id: PlayerId) -> Self {
        Self {
            position: None,
            is_first_player: id == PlayerId::One,
            is_computer: false,
            name: alloc::format!("{id}"),
        }
    }

    pub fn computer(id: PlayerId) -> Self {
        Self {
            position: None,
            is_first_player: id == PlayerId::One,
            is_computer: true,
            name: String::from("Computer"),
        }
    }

    /// `None` until the player has been placed.
    pub fn position(&self) -> Option<TileIndex> {
        self.position
    }

    pub fn is_first_player(&self) -> bool {
        self.is_first_player
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_position(&mut self, position: TileIndex) {
        self.position = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_alternates() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other().other(), PlayerId::Two);
    }

    #[test]
    fn default_names() {
        assert_eq!(Player::human(PlayerId::One).name(), "Player 1");
        assert_eq!(Player::human(PlayerId::Two).name(), "Player 2");
        assert_eq!(Player::computer(PlayerId::Two).name(), "Computer");
    }

    #[test]
    fn new_players_are_unplaced() {
        let player = Player::computer(PlayerId::Two);
        assert_eq!(player.position(), None);
        assert!(player.is_computer());
        assert!(!player.is_first_player());
    }
}
