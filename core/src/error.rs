use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("Board needs at least one tile type")]
    InvalidTileTypes,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("No start space left for the computer player")]
    NoStartSpace,
    #[error("Player has not been placed on the board")]
    PlayerNotPlaced,
    #[error("Computer player has no legal move")]
    ComputerTrapped,
    #[error("Game is not over yet")]
    GameNotOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
