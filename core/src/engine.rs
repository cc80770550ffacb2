use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    PlacePiece,
    TurnPlayer,
    GameOver,
}

impl GamePhase {
    pub const fn is_placing(self) -> bool {
        matches!(self, Self::PlacePiece)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Why the game ended, in the order the conditions are checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// Mover landed on a tile of the opponent's color.
    SameColor,
    /// Mover landed on the opponent.
    SameSpace,
    /// Opponent is left without a legal move.
    NoMoves,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerId,
    pub from: TileIndex,
    pub to: TileIndex,
}

/// Snapshot taken when the game ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverData {
    pub game_id: u32,
    pub winner: Player,
    pub loser: Player,
    pub reason: WinReason,
}

/// Told about everything the computer player does, so it can be shown.
pub trait MoveListener {
    fn on_computer_placed(&mut self, position: TileIndex);
    fn on_computer_move(&mut self, mv: Move);
}

impl MoveListener for () {
    fn on_computer_placed(&mut self, _position: TileIndex) {}
    fn on_computer_move(&mut self, _mv: Move) {}
}

impl<L: MoveListener + ?Sized> MoveListener for &mut L {
    fn on_computer_placed(&mut self, position: TileIndex) {
        (**self).on_computer_placed(position);
    }

    fn on_computer_move(&mut self, mv: Move) {
        (**self).on_computer_move(mv);
    }
}

/// Player two may not start on player one, on player one's color, on a disabled tile, or where player one can
/// reach it in one move.
pub fn is_valid_start_space(board: &Board, first: TileIndex, position: TileIndex) -> bool {
    board.is_open(position)
        && board.contains(first)
        && position != first
        && board[position].color() != board[first].color()
        && !board.legal_moves(first).contains(&position)
}

/// No tile player one can reach in one move shares the color of `position`.
pub fn is_safe_start_color(board: &Board, first: TileIndex, position: TileIndex) -> bool {
    let color = board[position].color();
    board
        .legal_moves(first)
        .iter()
        .all(|&reachable| board[reachable].color() != color)
}

/// Checks a move to `to` against an opponent standing on `opponent_at`, with `vacated` counted as disabled.
pub fn win_reason(
    board: &Board,
    to: TileIndex,
    opponent_at: TileIndex,
    vacated: TileIndex,
) -> Option<WinReason> {
    if board[to].color() == board[opponent_at].color() {
        Some(WinReason::SameColor)
    } else if to == opponent_at {
        Some(WinReason::SameSpace)
    } else if board
        .legal_moves_excluding(opponent_at, vacated)
        .is_empty()
    {
        Some(WinReason::NoMoves)
    } else {
        None
    }
}

/// One game session. Drive it with [`GameEngine::place_player`] then [`GameEngine::take_turn`].
#[derive(Clone, Debug)]
pub struct GameEngine<L = ()> {
    board: Board,
    players: [Player; 2],
    turn: PlayerId,
    phase: GamePhase,
    mode: Mode,
    strict_first_placement: bool,
    game_id: u32,
    game_over: Option<GameOverData>,
    rng: SmallRng,
    listener: L,
}

impl<L: MoveListener> GameEngine<L> {
    /// Generates a fresh board from `config`. All randomness in the session comes from `seed`.
    pub fn new(config: &GameConfig, mode: Mode, seed: u64, listener: L) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = ShuffledBoardGenerator.generate(config, &mut rng)?;
        Ok(Self::from_parts(board, mode, rng, listener)
            .with_strict_first_placement(config.strict_first_placement))
    }

    pub fn with_board(board: Board, mode: Mode, seed: u64, listener: L) -> Self {
        Self::from_parts(board, mode, SmallRng::seed_from_u64(seed), listener)
    }

    fn from_parts(board: Board, mode: Mode, mut rng: SmallRng, listener: L) -> Self {
        let second = match mode {
            Mode::Hotseat => Player::human(PlayerId::Two),
            Mode::Computer => Player::computer(PlayerId::Two),
        };
        let game_id: u32 = rng.random();
        log::info!("New {:?} game {:08x}", mode, game_id);

        Self {
            board,
            players: [Player::human(PlayerId::One), second],
            turn: PlayerId::One,
            phase: GamePhase::default(),
            mode,
            strict_first_placement: false,
            game_id,
            game_over: None,
            rng,
            listener,
        }
    }

    pub fn with_strict_first_placement(mut self, strict: bool) -> Self {
        self.strict_first_placement = strict;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> Coord2 {
        self.board.size()
    }

    pub fn tile_at(&self, row: Coord, col: Coord) -> Option<Tile> {
        self.board.tile_at((row, col))
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_at(&self, position: TileIndex) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| player.position() == Some(position))
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.turn
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    pub fn current_player_name(&self) -> &str {
        self.current_player().name()
    }

    pub fn is_first_player_turn(&self) -> bool {
        self.turn == PlayerId::One
    }

    pub fn legal_moves(&self, position: TileIndex) -> Moves {
        self.board.legal_moves(position)
    }

    pub fn win_reason(&self) -> Option<WinReason> {
        self.game_over.as_ref().map(|data| data.reason)
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn is_valid_start_space(&self, position: TileIndex) -> bool {
        self.player(PlayerId::One)
            .position()
            .is_some_and(|first| is_valid_start_space(&self.board, first, position))
    }

    /// Every tile player two could start on, empty until player one is placed.
    pub fn valid_start_positions(&self) -> impl Iterator<Item = TileIndex> + '_ {
        (0..self.board.total_tiles()).filter(|&position| self.is_valid_start_space(position))
    }

    pub fn game_over_summary(&self) -> Result<&GameOverData> {
        self.game_over.as_ref().ok_or(GameError::GameNotOver)
    }

    /// Places the current player during setup. Returns `Ok(false)` when the position is not allowed.
    ///
    /// Player one may start anywhere on the board. When player two is the computer it is placed right after, and
    /// player one stays unplaced if the computer has nowhere to go. A player one left without any move once both
    /// are placed loses by [`WinReason::NoMoves`].
    pub fn place_player(&mut self, position: TileIndex) -> Result<bool> {
        if !self.phase.is_placing() {
            log::debug!("Placement at {} rejected, game is {:?}", position, self.phase);
            return Ok(false);
        }
        if !self.board.contains(position) || self.current_player().is_computer() {
            log::debug!("Placement at {} rejected", position);
            return Ok(false);
        }

        match self.turn {
            PlayerId::One => {
                if self.strict_first_placement && !self.board.is_open(position) {
                    log::debug!("Placement at {} rejected, tile is disabled", position);
                    return Ok(false);
                }
                let computer_start = if self.player(PlayerId::Two).is_computer() {
                    Some(computer::choose_start(&self.board, position, &mut self.rng)?)
                } else {
                    None
                };

                self.players[PlayerId::One.index()].set_position(position);
                self.turn = PlayerId::Two;
                log::debug!("{} placed at {}", PlayerId::One, position);

                if let Some(start) = computer_start {
                    self.place_computer(start);
                }
                Ok(true)
            }
            PlayerId::Two => {
                if !self.is_valid_start_space(position) {
                    log::debug!("Placement at {} rejected, not a valid start space", position);
                    return Ok(false);
                }
                self.players[PlayerId::Two.index()].set_position(position);
                log::debug!("{} placed at {}", PlayerId::Two, position);
                self.start_play();
                Ok(true)
            }
        }
    }

    /// Moves the current player to `position`. Returns `Ok(None)` when the move is not legal.
    ///
    /// If the turn passes to the computer, its reply is played before returning and only reported to the listener.
    pub fn take_turn(&mut self, position: TileIndex) -> Result<Option<Move>> {
        if self.phase != GamePhase::TurnPlayer || self.current_player().is_computer() {
            log::debug!("Turn to {} rejected, game is {:?}", position, self.phase);
            return Ok(None);
        }

        let from = self.position_of(self.turn)?;
        if !self.board.legal_moves(from).contains(&position) {
            log::debug!("Turn {} -> {} rejected, not a legal move", from, position);
            return Ok(None);
        }

        let mv = self.commit_move(position)?;
        if !self.phase.is_finished() && self.current_player().is_computer() {
            self.take_computer_turn()?;
        }
        Ok(Some(mv))
    }

    fn place_computer(&mut self, position: TileIndex) {
        self.players[self.turn.index()].set_position(position);
        log::debug!("Computer placed at {}", position);
        self.listener.on_computer_placed(position);
        self.start_play();
    }

    fn take_computer_turn(&mut self) -> Result<()> {
        let from = self.position_of(self.turn)?;
        let opponent_at = self.position_of(self.turn.other())?;
        let to = computer::choose_move(&self.board, from, opponent_at, &mut self.rng)
            .ok_or(GameError::ComputerTrapped)?;
        let mv = self.commit_move(to)?;
        self.listener.on_computer_move(mv);
        Ok(())
    }

    fn commit_move(&mut self, to: TileIndex) -> Result<Move> {
        let mover = self.turn;
        let from = self.position_of(mover)?;
        let opponent_at = self.position_of(mover.other())?;

        self.board.disable(from)?;
        self.players[mover.index()].set_position(to);
        let mv = Move {
            player: mover,
            from,
            to,
        };
        log::debug!("{} moved {} -> {}", mover, from, to);

        match win_reason(&self.board, to, opponent_at, from) {
            Some(reason) => self.end_game(reason),
            None => self.turn = mover.other(),
        }
        Ok(mv)
    }

    fn start_play(&mut self) {
        self.phase = GamePhase::TurnPlayer;
        self.turn = PlayerId::One;
        log::info!("Game {:08x} started", self.game_id);

        let trapped = self
            .player(PlayerId::One)
            .position()
            .is_some_and(|first| self.board.legal_moves(first).is_empty());
        if trapped {
            self.turn = PlayerId::Two;
            self.end_game(WinReason::NoMoves);
        }
    }

    fn end_game(&mut self, reason: WinReason) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = GamePhase::GameOver;
        self.game_over = Some(GameOverData {
            game_id: self.game_id,
            winner: self.player(self.turn).clone(),
            loser: self.player(self.turn.other()).clone(),
            reason,
        });
        log::info!(
            "Game {:08x} over, {} wins by {:?}",
            self.game_id,
            self.current_player_name(),
            reason
        );
    }

    fn position_of(&self, id: PlayerId) -> Result<TileIndex> {
        self.player(id).position().ok_or(GameError::PlayerNotPlaced)
    }
}
