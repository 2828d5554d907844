//! Hint search: find one legal move, trying candidates in a fixed order.
//!
//! The order is
//!   1. stock card to each column,
//!   2. stock card to each foundation,
//!   3. each column to each other column,
//!   4. each column to each foundation.
//!
//! The first candidate that passes `rules::check_move` is the hint. There
//! are at most 7 + 4 + 42 + 28 candidates, so the search is a flat scan.

use log::trace;

use crate::board::Board;
use crate::moves::Move;
use crate::rules::check_move;
use crate::section::{NUM_COLUMNS, NUM_FOUNDATIONS, Slot};

/// Upper bound on how many candidates one search looks at.
pub const MAX_CANDIDATES: usize =
    NUM_COLUMNS + NUM_FOUNDATIONS + NUM_COLUMNS * (NUM_COLUMNS - 1) + NUM_COLUMNS * NUM_FOUNDATIONS;

/// All candidate moves for the position, in search order.
///
/// Candidates are not checked for legality here. Some obviously pointless
/// ones are left out: moves out of empty columns or from a hidden stock
/// card, a column onto itself, and a fully open column into an empty one.
pub fn candidates(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(MAX_CANDIDATES);

    if board.stock.front().is_some_and(|c| c.is_open()) {
        for dst in 0..NUM_COLUMNS {
            out.push(Move::new(Slot::STOCK, Slot::column(dst)));
        }
        for f in 0..NUM_FOUNDATIONS {
            out.push(Move::new(Slot::STOCK, Slot::foundation(f)));
        }
    }

    for src in 0..NUM_COLUMNS {
        let col = &board.columns[src];
        if col.is_empty() {
            continue;
        }
        for dst in 0..NUM_COLUMNS {
            if dst == src || (col.all_open() && board.columns[dst].is_empty()) {
                continue;
            }
            out.push(Move::new(Slot::column(src), Slot::column(dst)));
        }
    }

    for src in 0..NUM_COLUMNS {
        if board.columns[src].is_empty() {
            continue;
        }
        for f in 0..NUM_FOUNDATIONS {
            out.push(Move::new(Slot::column(src), Slot::foundation(f)));
        }
    }

    out
}

/// The first legal candidate move, or `None` if there is nothing to do
/// besides working the stock.
pub fn find_hint(board: &Board) -> Option<Move> {
    candidates(board).into_iter().find(|mv| match check_move(board, *mv) {
        Ok(()) => true,
        Err(err) => {
            trace!("hint candidate {mv} rejected: {err:?}");
            false
        }
    })
}
