//! Game state and the turn/phase state machine.
//!
//! ## GameState
//!
//! Owns everything a game is made of:
//! - Current player and phase
//! - Dice, bar, points, off-board tray
//! - The dice source
//! - Errors of the latest action and the latest successful change
//!
//! ## Turn Cycle
//!
//! ```text
//!  Roll --roll(p)--> Move --move(p, list)--> Roll (other player)
//! ```
//!
//! A rejected action never mutates the game; it records a single
//! `GameError` and returns `false`.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::action::{LastChange, MoveRequest};
use super::config::GameConfig;
use super::entity::{DieId, Piece, PieceIdAllocator};
use super::error::{ErrorKind, GameError, SnapshotError};
use super::player::PlayerNumber;
use super::rng::{DiceSource, GameRng};
use super::snapshot::{ContainerSnapshot, DieSnapshot, GameSnapshot, PieceSnapshot, PointSnapshot};
use crate::board::{Bar, Location, OffBoard, Point, PointSet};
use crate::dice::{DiceSet, Die};
use crate::rules::{Move, MoveContext, MoveList};

/// Which action the current player owes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Roll,
    Move,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Roll => f.write_str("roll"),
            Phase::Move => f.write_str("move"),
        }
    }
}

/// A single game of backgammon.
///
/// Generic over the dice source so tests and replays can script rolls;
/// the default is the seeded `GameRng`.
///
/// ## Example
///
/// ```
/// use backgammon_engine::core::{GameConfig, GameState, MoveRequest, Phase, PlayerNumber};
///
/// let mut game = GameState::new(GameConfig::new().with_seed(1));
/// assert!(game.roll(PlayerNumber::ONE));
/// assert_eq!(game.current_phase(), Phase::Move);
///
/// // Player 2 cannot act yet.
/// assert!(!game.move_pieces(PlayerNumber::TWO, &[MoveRequest::new(6, 5)]));
/// assert_eq!(game.errors()[0].message(), "It is not the player's turn yet.");
/// ```
#[derive(Clone, Debug)]
pub struct GameState<R: DiceSource = GameRng> {
    current_player_number: PlayerNumber,
    current_phase: Phase,
    dice: DiceSet,
    bar: Bar,
    points: PointSet,
    off_board: OffBoard,

    /// Cause of the latest rejected action. Cleared on every action.
    errors: Vec<GameError>,

    /// Latest successful action, for host notification.
    last_change: Option<LastChange>,

    config: GameConfig,
    source: R,
}

impl GameState<GameRng> {
    /// A new game in the standard starting position, rolling with a
    /// generator seeded from `config.seed`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let source = GameRng::new(config.seed);
        Self::load(&GameSnapshot::default_layout(), source, config)
    }

    /// Restore a game from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` when the snapshot does not describe a
    /// playable position.
    pub fn from_snapshot(snapshot: &GameSnapshot, config: GameConfig) -> Result<Self, SnapshotError> {
        let source = GameRng::new(config.seed);
        Self::with_dice_source(snapshot, source, config)
    }

    /// Branch the game, forking the generator so the copy rolls
    /// independently.
    ///
    /// Takes `&mut self` because forking advances the fork counter.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        let source = self.source.fork();
        Self {
            current_player_number: self.current_player_number,
            current_phase: self.current_phase,
            dice: self.dice.clone(),
            bar: self.bar.clone(),
            points: self.points.clone(),
            off_board: self.off_board.clone(),
            errors: self.errors.clone(),
            last_change: self.last_change.clone(),
            config: self.config.clone(),
            source,
        }
    }
}

impl<R: DiceSource> GameState<R> {
    /// Restore a game from a snapshot, rolling with `source`.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` when the snapshot does not describe a
    /// playable position.
    pub fn with_dice_source(snapshot: &GameSnapshot, source: R, config: GameConfig) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        Ok(Self::load(snapshot, source, config))
    }

    /// Build the containers from an already validated snapshot.
    fn load(snapshot: &GameSnapshot, source: R, config: GameConfig) -> Self {
        let dice = DiceSet::from_dice(
            snapshot
                .dice
                .iter()
                .zip(1..)
                .map(|(die, id)| Die::new(DieId(id), die.number)),
        );

        let mut ids = PieceIdAllocator::new();
        let mut pieces = |stack: &[PieceSnapshot]| -> Vec<Piece> {
            stack.iter().map(|p| ids.piece(p.owner)).collect()
        };

        let bar = Bar::new(pieces(&snapshot.bar.pieces));
        let points = PointSet::new(
            snapshot
                .points
                .iter()
                .map(|p| Point::new(p.number, pieces(&p.pieces)))
                .collect(),
        );
        let off_board = OffBoard::new(pieces(&snapshot.off_board.pieces));

        Self {
            current_player_number: snapshot.current_player_number,
            current_phase: snapshot.current_phase,
            dice,
            bar,
            points,
            off_board,
            errors: Vec::new(),
            last_change: None,
            config,
            source,
        }
    }

    // === Actions ===

    /// Roll the dice for `player`.
    ///
    /// Returns `false` and records the cause when it is not `player`'s
    /// turn or the dice have already been rolled.
    #[instrument(skip(self))]
    pub fn roll(&mut self, player: PlayerNumber) -> bool {
        self.errors.clear();

        if let Some(kind) = self.turn_error(player, Phase::Roll) {
            return self.reject(kind);
        }

        self.dice.roll(&mut self.source);
        self.last_change = Some(LastChange::Roll {
            player_number: player,
            dice: self.dice.numbers().to_vec(),
        });
        self.step();

        true
    }

    /// Move pieces for `player` and end their turn.
    ///
    /// The list is validated as a whole before anything moves. On
    /// rejection nothing changes and the single cause is available from
    /// `errors()`. An empty list passes the turn.
    #[instrument(skip(self, requests), fields(moves = requests.len()))]
    pub fn move_pieces(&mut self, player: PlayerNumber, requests: &[MoveRequest]) -> bool {
        self.errors.clear();

        if let Some(kind) = self.turn_error(player, Phase::Move) {
            return self.reject(kind);
        }

        let list = MoveList::resolve(requests, &self.points);
        let ctx = MoveContext {
            player,
            points: &self.points,
            bar: &self.bar,
            dice: &self.dice,
        };

        if let Err(kind) = list.validate(&ctx) {
            return self.reject(kind);
        }

        for m in list.moves() {
            self.perform_move(player, m);
        }

        self.last_change = Some(LastChange::Move {
            player_number: player,
            list: requests.to_vec(),
        });
        self.step();

        true
    }

    // === Queries ===

    /// Errors of the latest action: empty after a success, one entry
    /// after a rejection.
    #[must_use]
    pub fn errors(&self) -> &[GameError] {
        &self.errors
    }

    #[must_use]
    pub fn last_change(&self) -> Option<&LastChange> {
        self.last_change.as_ref()
    }

    /// The player who has borne off all fifteen pieces, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerNumber> {
        PlayerNumber::both().find(|&player| self.off_board.all_borne_off(player))
    }

    #[must_use]
    pub fn current_player_number(&self) -> PlayerNumber {
        self.current_player_number
    }

    #[must_use]
    pub fn current_phase(&self) -> Phase {
        self.current_phase
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    #[must_use]
    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    #[must_use]
    pub fn off_board(&self) -> &OffBoard {
        &self.off_board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dice_source(&self) -> &R {
        &self.source
    }

    /// Export the position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let pieces = |stack: &[Piece]| -> Vec<PieceSnapshot> {
            stack.iter().map(|p| PieceSnapshot::new(p.owner())).collect()
        };

        GameSnapshot {
            current_player_number: self.current_player_number,
            current_phase: self.current_phase,
            dice: self
                .dice
                .dice()
                .iter()
                .map(|d| DieSnapshot::new(d.number()))
                .collect(),
            bar: ContainerSnapshot::new(pieces(self.bar.pieces())),
            points: self
                .points
                .points()
                .iter()
                .map(|p| PointSnapshot::new(p.number(), pieces(p.pieces())))
                .collect(),
            off_board: ContainerSnapshot::new(pieces(self.off_board.pieces())),
        }
    }

    // === Internals ===

    fn turn_error(&self, player: PlayerNumber, expected: Phase) -> Option<ErrorKind> {
        match (player == self.current_player_number, self.current_phase == expected) {
            (false, _) => Some(ErrorKind::NotPlayersTurn),
            (true, false) => Some(ErrorKind::WrongPhase),
            (true, true) => None,
        }
    }

    fn reject(&mut self, kind: ErrorKind) -> bool {
        debug!(?kind, "action rejected");
        self.errors.push(self.config.error(kind));
        false
    }

    /// Advance the state machine after a successful action.
    fn step(&mut self) {
        match self.current_phase {
            Phase::Roll => self.current_phase = Phase::Move,
            Phase::Move => {
                self.current_phase = Phase::Roll;
                self.dice.reset();
                if let Some(next) = self.current_player_number.opponent() {
                    self.current_player_number = next;
                }
            }
        }
    }

    /// Apply one validated move: a blot on the destination goes to the
    /// bar before the moving piece leaves its origin.
    fn perform_move(&mut self, player: PlayerNumber, m: &Move) {
        let (Some(from), Some(to)) = (m.from, m.to) else {
            return;
        };

        if let Location::Point(number) = to {
            if let Some(point) = self.points.find_by_number_mut(number) {
                if point.is_hittable(player) {
                    if let Some(hit) = point.pop() {
                        trace!(point = number, piece = %hit.id(), "hit");
                        self.bar.push(hit);
                    }
                }
            }
        }

        let moving = match from {
            Location::Point(number) => self.points.find_by_number_mut(number).and_then(Point::pop),
            Location::Bar => self.bar.pop_for_player(player),
            Location::OffBoard => None,
        };
        let Some(piece) = moving else {
            return;
        };

        match to {
            Location::Point(number) => {
                if let Some(point) = self.points.find_by_number_mut(number) {
                    point.push(piece);
                }
            }
            Location::OffBoard => {
                trace!(piece = %piece.id(), "borne off");
                self.off_board.push(piece);
            }
            Location::Bar => self.bar.push(piece),
        }
    }
}
