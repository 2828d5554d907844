//! Move representation, application and reversal.
//!
//! A player asks for a move as four raw numbers (`MoveRequest`). Once the
//! section and slot numbers have been checked it becomes a `Move` between
//! two `Slot`s. Applying a move yields a `MoveRecord`, which is what the
//! history keeps so the move can be undone exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::section::{SectionKind, Slot};

/// A move as the player typed it: 1-based section and slot numbers, not
/// yet checked against the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub section_from: i64,
    pub slot_from: i64,
    pub section_to: i64,
    pub slot_to: i64,
}

impl MoveRequest {
    pub fn new(section_from: i64, slot_from: i64, section_to: i64, slot_to: i64) -> Self {
        MoveRequest {
            section_from,
            slot_from,
            section_to,
            slot_to,
        }
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> Self {
        MoveRequest::new(
            mv.from.section.id() as i64,
            mv.from.index as i64 + 1,
            mv.to.section.id() as i64,
            mv.to.index as i64 + 1,
        )
    }
}

/// A move between two slots that exist on the board.
///
/// Whether the move is legal in the current position is a separate
/// question answered by `crate::rules::check_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Slot,
    pub to: Slot,
}

impl Move {
    pub fn new(from: Slot, to: Slot) -> Self {
        Move { from, to }
    }

    /// Apply this move to `board` in place.
    ///
    /// The move must already have passed validation. After the cards are
    /// moved, a closed card left on top of the source column is turned up.
    /// Returns `None` if either slot is off the board or there was nothing
    /// to pick up.
    pub fn apply(&self, board: &mut Board) -> Option<MoveRecord> {
        if !self.from.is_on_board() || !self.to.is_on_board() {
            return None;
        }
        let run = board.pick_up(self)?;
        let cards_moved = run.len();
        board.place(self.to, run);

        let revealed = match self.from.section {
            SectionKind::Tableau => board.columns[self.from.index].reveal_top(),
            _ => false,
        };

        Some(MoveRecord {
            mv: *self,
            cards_moved,
            revealed,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// What the history remembers about one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    /// Number of cards that travelled together.
    pub cards_moved: usize,
    /// Whether the move turned up a closed card in its source column.
    pub revealed: bool,
}

impl MoveRecord {
    /// Put the moved cards back where they came from, in their original
    /// order, and turn the card they uncovered face-down again.
    pub fn revert(&self, board: &mut Board) -> Option<()> {
        if !self.mv.from.is_on_board() {
            return None;
        }
        let run = board.take_from(self.mv.to, self.cards_moved)?;
        board.place(self.mv.from, run);

        if self.revealed && self.mv.from.section == SectionKind::Tableau {
            board.columns[self.mv.from.index].conceal_under(self.cards_moved);
        }
        Some(())
    }
}

/// One entry of the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A stock card was turned over.
    StockOpened,
    /// The stock was turned face-down for another pass.
    StockFlushed,
    /// Cards moved between slots.
    Moved(MoveRecord),
}
