use serde::{Deserialize, Serialize};

use crate::TileColor;

/// A single grid square. The color is fixed at setup; `disabled` only ever goes from `false` to `true`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    color: TileColor,
    disabled: bool,
}

impl Tile {
    pub const fn new(color: TileColor) -> Self {
        Self {
            color,
            disabled: false,
        }
    }

    pub const fn color(self) -> TileColor {
        self.color
    }

    pub const fn is_disabled(self) -> bool {
        self.disabled
    }

    pub(crate) fn disable(&mut self) {
        self.disabled = true;
    }
}
