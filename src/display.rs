//! Human-readable rendering of a game snapshot.
//!
//! Face-down cards are shown as "XX" and face-up cards with their
//! `short_str()` rank/suit code. Sections are labelled with the numbers a
//! player types to address them (1 stock, 2 columns, 3 foundations).

use crate::board::Board;
use crate::card::Card;
use crate::game::{GameStatus, Snapshot};
use crate::section::NUM_COLUMNS;

/// Format a single card for display, either face-up or face-down.
///
/// - Face-down cards are rendered as `"XX"`.
/// - Face-up cards use `Card::short_str()` such as `"AH"`, `"7C"`, `"TD"`.
pub fn format_card_visible(card: Card) -> String {
    if card.is_open() {
        card.short_str()
    } else {
        "XX".to_string()
    }
}

/// Render the foundation row, top card of each pile.
///   - Empty pile: `[  ]`
///   - Non-empty: e.g. `[AH]`, `[7C]`, `[KD]`
pub fn render_foundations(board: &Board) -> String {
    let mut s = String::from("(3) Foundations: ");
    for pile in &board.foundations {
        match pile.top() {
            None => s.push_str("[  ] "),
            Some(card) => s.push_str(&format!("[{}] ", card.short_str())),
        }
    }
    s.trim_end().to_string()
}

/// Render the stock on a single line: the exposed front card plus how many
/// cards are still face-down behind it.
pub fn render_stock(board: &Board) -> String {
    let stock = &board.stock;
    match stock.front() {
        None => "(1) Stock: [empty]".to_string(),
        Some(front) => format!(
            "(1) Stock: [{}]  ({} open, {} closed)",
            format_card_visible(front),
            stock.open_count(),
            stock.len() - stock.open_count()
        ),
    }
}

/// Render all tableau columns as a multi-line string.
///
/// The columns are **top-justified**: the bottom cards of all columns share
/// the first row, and the playable card of each column is the lowest one
/// printed for it.
pub fn render_columns(board: &Board) -> String {
    let mut s = String::from("(2) Columns:\n      ");
    for col_idx in 0..NUM_COLUMNS {
        s.push_str(&format!(" C{} ", col_idx + 1));
    }
    s.push('\n');

    let max_height = board.columns.iter().map(|c| c.len()).max().unwrap_or(0);

    for row in 0..max_height {
        s.push_str("      ");
        for col in &board.columns {
            match col.cards().get(row) {
                None => s.push_str("    "),
                Some(&card) => s.push_str(&format!("{:>3} ", format_card_visible(card))),
            }
        }
        s.push('\n');
    }

    s
}

/// Render the whole snapshot: board, move counter and any message.
pub fn render_snapshot(snap: &Snapshot) -> String {
    let mut s = String::new();

    s.push_str(&render_foundations(&snap.board));
    s.push('\n');
    s.push_str(&render_stock(&snap.board));
    s.push_str("\n\n");
    s.push_str(&render_columns(&snap.board));
    s.push('\n');
    s.push_str(&format!("Moves: {}\n", snap.move_count));

    if snap.status == GameStatus::Won {
        s.push_str("*** Game won! ***\n");
    }
    if let Some(msg) = &snap.message {
        s.push_str(msg);
        s.push('\n');
    }
    s
}
