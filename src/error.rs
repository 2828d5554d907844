//! Error types for the rules engine and the deal builders.
//!
//! Every `MoveError` is recoverable: it is shown to the player and the game
//! carries on from the unchanged position.

use std::error::Error;
use std::fmt;

/// Why a move or command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// Section number outside 1..=3.
    InvalidSection,
    /// Slot number outside the section's slots.
    InvalidSlot,
    /// Nothing to pick up at the source.
    NoCard,
    /// The move is not allowed at all: a hidden card, the stock as a
    /// destination, or the wrong card for an empty slot.
    InvalidMove,
    /// Same color on a tableau column.
    SameColor,
    /// Same suit on a tableau column.
    SameSuit,
    /// Different suit on a foundation pile.
    NotSameSuit,
    /// Ranks are not in sequence.
    BadSequence,
    /// Flush asked for while some stock card is still closed.
    StockNotFullyOpen,
    /// Open asked for when no closed stock card is left.
    StockAlreadyOpen,
    /// Input was neither a known command nor part of a move.
    InvalidCommand,
    /// The game is already won.
    GameFinished,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveError::InvalidSection => "That section does not exist.",
            MoveError::InvalidSlot => "That pile does not exist in this section.",
            MoveError::NoCard => "There is no card to pick up there.",
            MoveError::InvalidMove => "That move is not allowed.",
            MoveError::SameColor => "Cards of the same color cannot be stacked on a column.",
            MoveError::SameSuit => "Cards of the same suit cannot be stacked on a column.",
            MoveError::NotSameSuit => "A foundation pile only takes cards of its own suit.",
            MoveError::BadSequence => "The card ranks are out of sequence.",
            MoveError::StockNotFullyOpen => {
                "The stock cannot be turned over until every card has been opened."
            }
            MoveError::StockAlreadyOpen => {
                "Every stock card is already open. Turn the stock over with R first."
            }
            MoveError::InvalidCommand => "Unknown command.",
            MoveError::GameFinished => "The game is already won.",
        };
        f.write_str(msg)
    }
}

impl Error for MoveError {}

/// Why a deal could not be built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DealError {
    /// The game number text was empty after normalization.
    EmptyGameNumber,
    /// The game number text contained something other than digits.
    MalformedGameNumber(String),
    /// The game number is not below 52!.
    GameNumberOutOfRange,
    /// A deck handed in for numbering was not a full 52-card deck.
    NotAFullDeck,
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::EmptyGameNumber => f.write_str("empty game number"),
            DealError::MalformedGameNumber(s) => {
                write!(f, "game number contains non-digits: {s:?}")
            }
            DealError::GameNumberOutOfRange => f.write_str("game number must be below 52!"),
            DealError::NotAFullDeck => f.write_str("deck is not a permutation of 52 cards"),
        }
    }
}

impl Error for DealError {}
