use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Linear tile index, `row * cols + col`. Also used for tile counts.
pub type TileIndex = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Color type of a tile, `0..tile_types`.
pub type TileColor = u8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> TileIndex {
    let a = a as TileIndex;
    let b = b as TileIndex;
    a.saturating_mul(b)
}

/// Cardinal scan directions, in the order moves are generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// `(row, col)` displacement of a single step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
        }
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Walks from `origin` (exclusive) in one direction until the board edge.
#[derive(Debug)]
pub struct RayIter {
    current: Coord2,
    delta: (isize, isize),
    bounds: Coord2,
}

impl RayIter {
    pub fn new(origin: Coord2, direction: Direction, bounds: Coord2) -> Self {
        Self {
            current: origin,
            delta: direction.delta(),
            bounds,
        }
    }
}

impl Iterator for RayIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let next = apply_delta(self.current, self.delta, self.bounds)?;
        self.current = next;
        Some(next)
    }
}
