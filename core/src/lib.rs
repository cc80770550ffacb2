#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use player::*;
pub use tile::*;
pub use types::*;

mod computer;
mod engine;
mod error;
mod generator;
mod player;
mod tile;
mod types;

/// Destinations reachable from a tile, at most one per direction.
pub type Moves = SmallVec<[TileIndex; 4]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans sharing a device.
    Hotseat,
    /// Player two is controlled by the engine.
    Computer,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord2,
    pub tile_types: TileColor,
    pub disabled_tiles: Vec<TileIndex>,
    /// Reject player one's placement on disabled tiles too. Off by default, where any tile is accepted.
    pub strict_first_placement: bool,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (6, 5);
    pub const DEFAULT_TILE_TYPES: TileColor = 10;
    pub const DEFAULT_DISABLED_TILES: [TileIndex; 5] = [0, 2, 3, 4, 25];

    /// Config with the given shape and no pre-disabled tiles.
    pub fn new(size: Coord2, tile_types: TileColor) -> Self {
        Self {
            size,
            tile_types,
            disabled_tiles: Vec::new(),
            strict_first_placement: false,
        }
    }

    pub fn with_disabled_tiles(mut self, disabled_tiles: &[TileIndex]) -> Self {
        self.disabled_tiles = disabled_tiles.to_vec();
        self
    }

    pub fn with_strict_first_placement(mut self, strict: bool) -> Self {
        self.strict_first_placement = strict;
        self
    }

    pub const fn total_tiles(&self) -> TileIndex {
        mult(self.size.0, self.size.1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.tile_types == 0 {
            return Err(GameError::InvalidTileTypes);
        }
        if self
            .disabled_tiles
            .iter()
            .any(|&index| index >= self.total_tiles())
        {
            return Err(GameError::InvalidCoords);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_TILE_TYPES)
            .with_disabled_tiles(&Self::DEFAULT_DISABLED_TILES)
    }
}

/// The colored grid. Shape and colors are fixed once built; tiles can only be disabled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    tiles: Array2<Tile>,
    size: Coord2,
}

#[derive(Deserialize)]
struct BoardData {
    tiles: Array2<Tile>,
    size: Coord2,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    fn try_from(BoardData { tiles, size }: BoardData) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if tiles.shape() != size.to_nd_index() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { tiles, size })
    }
}

impl Board {
    /// Builds a board from row-major tile colors, then disables `disabled`.
    pub fn from_colors(size: Coord2, colors: &[TileColor], disabled: &[TileIndex]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let tiles: Vec<Tile> = colors.iter().copied().map(Tile::new).collect();
        let tiles = Array2::from_shape_vec(size.to_nd_index(), tiles)
            .map_err(|_| GameError::InvalidBoardShape)?;

        let mut board = Self { tiles, size };
        for &index in disabled {
            board.disable(index)?;
        }
        Ok(board)
    }

    /// `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_tiles(&self) -> TileIndex {
        mult(self.size.0, self.size.1)
    }

    pub fn contains(&self, index: TileIndex) -> bool {
        index < self.total_tiles()
    }

    pub fn validate_index(&self, index: TileIndex) -> Result<TileIndex> {
        if self.contains(index) {
            Ok(index)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn coords_of(&self, index: TileIndex) -> Result<Coord2> {
        let index = self.validate_index(index)?;
        let cols = TileIndex::from(self.size.1);
        // both parts are bounded by the board shape, which fits in `Coord`
        Ok(((index / cols) as Coord, (index % cols) as Coord))
    }

    pub fn index_of(&self, (row, col): Coord2) -> TileIndex {
        TileIndex::from(row) * TileIndex::from(self.size.1) + TileIndex::from(col)
    }

    pub fn tile(&self, index: TileIndex) -> Option<Tile> {
        let coords = self.coords_of(index).ok()?;
        self.tile_at(coords)
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    /// Whether `index` is on the board and not disabled.
    pub fn is_open(&self, index: TileIndex) -> bool {
        self.tile(index).is_some_and(|tile| !tile.is_disabled())
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = (TileIndex, Tile)> + '_ {
        (0..self.total_tiles()).zip(self.tiles.iter().copied())
    }

    /// The nearest open tile in each direction from `index`, scanned right, left, up, down.
    pub fn legal_moves(&self, index: TileIndex) -> Moves {
        self.reachable(index, None)
    }

    /// Like [`Board::legal_moves`], but treats `vacated` as already disabled.
    pub fn legal_moves_excluding(&self, index: TileIndex, vacated: TileIndex) -> Moves {
        self.reachable(index, Some(vacated))
    }

    fn reachable(&self, index: TileIndex, vacated: Option<TileIndex>) -> Moves {
        let Ok(origin) = self.coords_of(index) else {
            return Moves::new();
        };

        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                RayIter::new(origin, direction, self.size)
                    .map(|coords| self.index_of(coords))
                    .find(|&pos| Some(pos) != vacated && !self[pos].is_disabled())
            })
            .collect()
    }

    pub(crate) fn disable(&mut self, index: TileIndex) -> Result<()> {
        let coords = self.coords_of(index)?;
        self.tiles[coords.to_nd_index()].disable();
        Ok(())
    }
}

impl Index<TileIndex> for Board {
    type Output = Tile;

    fn index(&self, index: TileIndex) -> &Self::Output {
        let cols = TileIndex::from(self.size.1);
        &self.tiles[[usize::from(index / cols), usize::from(index % cols)]]
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}
