//! Move legality.
//!
//! Validation runs a fixed sequence of checks and stops at the first one
//! that fails:
//!   1. both section numbers exist,
//!   2. both slot numbers exist in their sections,
//!   3. there is a card to pick up,
//!   4. the moving card and the card it lands on are face-up,
//!   5. rank order (empty slots, equal ranks, sequence),
//!   6. suit (foundations keep one suit, columns never stack a suit on itself),
//!   7. color (columns alternate red and black).
//!
//! Nothing in here mutates the board.

use crate::board::Board;
use crate::card::{Card, Rank};
use crate::error::MoveError;
use crate::moves::{Move, MoveRequest};
use crate::section::{SectionKind, Slot};

/// Check a raw request against the board.
///
/// On success the checked `Move` is returned, ready to apply.
pub fn validate(board: &Board, request: &MoveRequest) -> Result<Move, MoveError> {
    let mv = resolve(request)?;
    check_move(board, mv)?;
    Ok(mv)
}

/// Turn raw section and slot numbers into slots on the board.
pub fn resolve(request: &MoveRequest) -> Result<Move, MoveError> {
    let from_section =
        SectionKind::from_id(request.section_from).ok_or(MoveError::InvalidSection)?;
    let to_section = SectionKind::from_id(request.section_to).ok_or(MoveError::InvalidSection)?;

    let from = slot_in(from_section, request.slot_from)?;
    let to = slot_in(to_section, request.slot_to)?;
    Ok(Move::new(from, to))
}

fn slot_in(section: SectionKind, number: i64) -> Result<Slot, MoveError> {
    if number < 1 || number > section.slot_count() as i64 {
        return Err(MoveError::InvalidSlot);
    }
    Ok(Slot {
        section,
        index: (number - 1) as usize,
    })
}

/// Check a move between existing slots against the current position.
pub fn check_move(board: &Board, mv: Move) -> Result<(), MoveError> {
    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return Err(MoveError::InvalidSlot);
    }
    let card = board.source_card(&mv).ok_or(MoveError::NoCard)?;
    let target = board.top_of(mv.to);

    if !card.is_open() || target.is_some_and(|t| !t.is_open()) {
        return Err(MoveError::InvalidMove);
    }

    check_ranks(card, target, mv.to.section)?;

    if let Some(top) = target {
        check_suits(card, top, mv.to.section)?;
        check_colors(card, top, mv.to.section)?;
    }
    Ok(())
}

fn check_ranks(card: Card, target: Option<Card>, to: SectionKind) -> Result<(), MoveError> {
    match (to, target) {
        (SectionKind::Stock, _) => Err(MoveError::InvalidMove),
        (SectionKind::Tableau, None) if card.rank() == Rank::King => Ok(()),
        (SectionKind::Foundation, None) if card.rank() == Rank::Ace => Ok(()),
        (_, None) => Err(MoveError::InvalidMove),
        (_, Some(top)) if top.rank() == card.rank() => Err(MoveError::BadSequence),
        (SectionKind::Tableau, Some(top)) if builds_down(card.rank(), top.rank()) => Ok(()),
        (SectionKind::Foundation, Some(top)) if builds_up(card.rank(), top.rank()) => Ok(()),
        _ => Err(MoveError::BadSequence),
    }
}

fn check_suits(card: Card, top: Card, to: SectionKind) -> Result<(), MoveError> {
    match to {
        SectionKind::Foundation if card.suit() != top.suit() => Err(MoveError::NotSameSuit),
        SectionKind::Tableau if card.suit() == top.suit() => Err(MoveError::SameSuit),
        _ => Ok(()),
    }
}

fn check_colors(card: Card, top: Card, to: SectionKind) -> Result<(), MoveError> {
    if to == SectionKind::Tableau && card.color() == top.color() {
        return Err(MoveError::SameColor);
    }
    Ok(())
}

/// True if `card` may sit on `onto` in a tableau column: exactly one rank
/// lower, and never a King on an Ace.
pub fn builds_down(card: Rank, onto: Rank) -> bool {
    card.number() + 1 == onto.number() && !(card == Rank::King && onto == Rank::Ace)
}

/// True if `card` may go on a foundation pile whose top is `onto`.
///
/// Piles start with the Ace, continue with the Two and climb to the King,
/// after which the pile is complete.
pub fn builds_up(card: Rank, onto: Rank) -> bool {
    match onto {
        Rank::Ace => card == Rank::Two,
        Rank::King => false,
        _ => card.number() == onto.number() + 1,
    }
}
