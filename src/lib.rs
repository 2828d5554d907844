//! Rules engine for a Klondike-style patience game.
//!
//! The board has three sections: the stock (1), seven tableau columns (2)
//! and four foundation piles (3). `GameState` owns the board and is the
//! only way to change it; every move is checked by `rules` before it is
//! applied, and every applied action can be taken back with undo.

pub mod board;
pub mod card;
pub mod config;
pub mod deal;
pub mod display;
pub mod error;
pub mod game;
pub mod hint;
pub mod input;
pub mod moves;
pub mod rules;
pub mod section;

pub use board::Board;
pub use card::{Card, Color, Face, Rank, Suit};
pub use config::RulesConfig;
pub use deal::{Dealer, NumberedDealer, ShuffledDealer};
pub use error::{DealError, MoveError};
pub use game::{GameState, GameStatus, MoveOutcome, Outcome, Snapshot, UndoOutcome};
pub use input::{Command, EntryStep, Input, MoveEntry, Prompt};
pub use moves::{HistoryEntry, Move, MoveRecord, MoveRequest};
pub use section::{CardRun, Column, FoundationPile, SectionKind, Slot, Stock};
