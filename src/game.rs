//! Game-level state: the board, the move counter, and the history.
//!
//! `GameState` is the only thing that changes the board during play. Every
//! action goes through it:
//!   - moves are validated by `crate::rules` and only then applied,
//!   - stock commands check their own preconditions first,
//!   - undo pops one history entry and applies its inverse.
//!
//! A refused action leaves the state exactly as it was.

use log::{debug, info};
use serde::Serialize;

use crate::board::Board;
use crate::card::Card;
use crate::config::RulesConfig;
use crate::deal::Dealer;
use crate::error::MoveError;
use crate::hint::find_hint;
use crate::input::{Command, Input};
use crate::moves::{HistoryEntry, Move, MoveRecord, MoveRequest};
use crate::rules;

/// Whether the game can still be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Playing,
    Won,
}

/// Result of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Completed(MoveRecord),
    /// The move put the last card on a foundation.
    GameOver,
}

/// Result of an undo request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    Reverted(HistoryEntry),
    /// History was empty.
    NoOp,
}

/// Result of any accepted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved(MoveOutcome),
    StockOpened(Card),
    StockFlushed,
    Undone(UndoOutcome),
    Hint(Option<Move>),
}

impl Outcome {
    /// Text to show the player after this outcome, if any.
    fn message(&self, move_count: u32) -> Option<String> {
        match self {
            Outcome::Moved(MoveOutcome::GameOver) => {
                Some(format!("You won in {move_count} moves!"))
            }
            Outcome::Hint(Some(mv)) => Some(format!("Hint: {mv}")),
            Outcome::Hint(None) => Some("No possible move found.".to_string()),
            Outcome::Undone(UndoOutcome::NoOp) => Some("Nothing to undo.".to_string()),
            _ => None,
        }
    }
}

/// Read-only view of a game for whoever draws it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub move_count: u32,
    pub status: GameStatus,
    pub message: Option<String>,
}

/// One game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    move_count: u32,
    history: Vec<HistoryEntry>,
    status: GameStatus,
    message: Option<String>,
    config: RulesConfig,
}

impl GameState {
    /// Start a game from a laid-out board.
    pub fn new(board: Board, config: RulesConfig) -> Self {
        let status = if board.is_won() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        GameState {
            board,
            move_count: 0,
            history: Vec::new(),
            status,
            message: None,
            config,
        }
    }

    /// Start a game from whatever `dealer` lays out.
    pub fn deal<D: Dealer>(dealer: &mut D, config: RulesConfig) -> Self {
        GameState::new(dealer.build(), config)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// The last error or hint shown to the player.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            move_count: self.move_count,
            status: self.status,
            message: self.message.clone(),
        }
    }

    fn ensure_playing(&self) -> Result<(), MoveError> {
        match self.status {
            GameStatus::Playing => Ok(()),
            GameStatus::Won => Err(MoveError::GameFinished),
        }
    }

    /// Handle one complete piece of player input.
    ///
    /// This is the boundary the front end talks to: whatever happens, the
    /// message shown in the next snapshot is updated to match.
    pub fn submit(&mut self, input: Input) -> Result<Outcome, MoveError> {
        let result = match input {
            Input::Command(cmd) => self.execute(cmd),
            Input::Move(request) => self.apply_move(&request).map(Outcome::Moved),
        };
        match &result {
            Ok(outcome) => self.message = outcome.message(self.move_count),
            Err(err) => {
                debug!("rejected {input:?}: {err:?}");
                self.message = Some(err.to_string());
            }
        }
        result
    }

    /// Run a single-letter command.
    pub fn execute(&mut self, cmd: Command) -> Result<Outcome, MoveError> {
        match cmd {
            Command::Open => self.open_stock().map(Outcome::StockOpened),
            Command::Flush => self.flush_stock().map(|()| Outcome::StockFlushed),
            Command::Hint => self.hint().map(Outcome::Hint),
            Command::Undo => self.undo_last().map(Outcome::Undone),
        }
    }

    /// Validate a move request and, if it is legal, carry it out.
    pub fn apply_move(&mut self, request: &MoveRequest) -> Result<MoveOutcome, MoveError> {
        self.ensure_playing()?;
        let mv = rules::validate(&self.board, request)?;
        let record = mv.apply(&mut self.board).ok_or(MoveError::NoCard)?;
        self.move_count += 1;

        if self.board.is_won() {
            self.status = GameStatus::Won;
            info!("game won after {} moves", self.move_count);
            return Ok(MoveOutcome::GameOver);
        }

        debug!(
            "move {}: {mv} ({} card(s), revealed: {})",
            self.move_count, record.cards_moved, record.revealed
        );
        self.history.push(HistoryEntry::Moved(record));
        Ok(MoveOutcome::Completed(record))
    }

    /// Turn over the next stock card.
    pub fn open_stock(&mut self) -> Result<Card, MoveError> {
        self.ensure_playing()?;
        if !self.board.stock.has_closed() {
            return Err(MoveError::StockAlreadyOpen);
        }
        let card = self
            .board
            .stock
            .open_next()
            .ok_or(MoveError::StockAlreadyOpen)?;
        self.move_count += 1;
        self.history.push(HistoryEntry::StockOpened);
        debug!("move {}: opened {card} from the stock", self.move_count);
        Ok(card)
    }

    /// Turn every stock card face-down again for another pass.
    ///
    /// Only allowed once every stock card has been opened.
    pub fn flush_stock(&mut self) -> Result<(), MoveError> {
        self.ensure_playing()?;
        if !self.board.stock.is_fully_open() {
            return Err(MoveError::StockNotFullyOpen);
        }
        self.board.stock.close_all();
        self.move_count += 1;
        self.history.push(HistoryEntry::StockFlushed);
        debug!("move {}: stock turned over", self.move_count);
        Ok(())
    }

    /// Take back the most recent action.
    pub fn undo_last(&mut self) -> Result<UndoOutcome, MoveError> {
        self.ensure_playing()?;
        let outcome = match self.history.pop() {
            None => UndoOutcome::NoOp,
            Some(entry) => {
                if self.revert(entry).is_none() {
                    self.history.push(entry);
                    return Err(MoveError::NoCard);
                }
                debug!("undid {entry:?}");
                UndoOutcome::Reverted(entry)
            }
        };

        if self.config.undo_costs_move {
            self.move_count += 1;
        } else if outcome != UndoOutcome::NoOp {
            self.move_count = self.move_count.saturating_sub(1);
        }
        Ok(outcome)
    }

    fn revert(&mut self, entry: HistoryEntry) -> Option<()> {
        match entry {
            HistoryEntry::StockOpened => self.board.stock.close_front().map(|_| ()),
            HistoryEntry::StockFlushed => {
                self.board.stock.reopen_all();
                Some(())
            }
            HistoryEntry::Moved(record) => record.revert(&mut self.board),
        }
    }

    /// Look for a legal move without making it.
    pub fn hint(&mut self) -> Result<Option<Move>, MoveError> {
        self.ensure_playing()?;
        let found = find_hint(&self.board);
        if found.is_some() && self.config.hint_costs_move {
            self.move_count += 1;
        }
        debug!("hint: {found:?}");
        Ok(found)
    }
}
