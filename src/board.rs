//! The physical layout of a game: stock, seven columns, four foundations.
//!
//! `Board` knows how to find the card a move would pick up and how to move
//! cards between slots. It does not know the rules; legality lives in
//! `crate::rules`, and move bookkeeping lives in `crate::game`.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::moves::Move;
use crate::section::{
    CardRun, Column, FoundationPile, NUM_COLUMNS, NUM_FOUNDATIONS, SectionKind, Slot, Stock,
};

/// All cards in play, grouped by section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub stock: Stock,
    pub columns: [Column; NUM_COLUMNS],
    pub foundations: [FoundationPile; NUM_FOUNDATIONS],
}

impl Board {
    /// A board with no cards at all. Mostly useful for building test
    /// positions by hand.
    pub fn empty() -> Self {
        Board::default()
    }

    pub fn total_cards(&self) -> usize {
        self.stock.len()
            + self.columns.iter().map(Column::len).sum::<usize>()
            + self.foundation_cards()
    }

    pub fn foundation_cards(&self) -> usize {
        self.foundations.iter().map(FoundationPile::len).sum()
    }

    /// True once every card of the deck sits on a foundation.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(FoundationPile::is_complete)
    }

    /// The card currently showing on top of a slot, if any.
    ///
    /// For the stock this is the front card.
    pub fn top_of(&self, slot: Slot) -> Option<Card> {
        match slot.section {
            SectionKind::Stock => self.stock.front(),
            SectionKind::Tableau => self.columns.get(slot.index).and_then(Column::top),
            SectionKind::Foundation => self.foundations.get(slot.index).and_then(FoundationPile::top),
        }
    }

    /// How many cards `mv` would pick up from its source.
    ///
    /// A column gives up its whole trailing open run when the run is longer
    /// than one card and the destination is another column. Everything else
    /// moves a single card.
    pub fn pickup_len(&self, mv: &Move) -> usize {
        match (mv.from.section, mv.to.section) {
            (SectionKind::Tableau, SectionKind::Tableau) => self
                .columns
                .get(mv.from.index)
                .map_or(1, |col| col.open_run_len().max(1)),
            _ => 1,
        }
    }

    /// The card whose rank, suit and color decide whether `mv` is legal:
    /// the deepest card of whatever would be picked up.
    pub fn source_card(&self, mv: &Move) -> Option<Card> {
        match mv.from.section {
            SectionKind::Tableau => {
                let col = self.columns.get(mv.from.index)?;
                if self.pickup_len(mv) > 1 {
                    col.run_base()
                } else {
                    col.top()
                }
            }
            _ => self.top_of(mv.from),
        }
    }

    /// Remove the cards `mv` moves from its source.
    pub fn pick_up(&mut self, mv: &Move) -> Option<CardRun> {
        let n = self.pickup_len(mv);
        self.take_from(mv.from, n)
    }

    /// Remove the top `n` cards of a slot, keeping their order.
    ///
    /// The stock and foundations only ever give up one card at a time.
    pub fn take_from(&mut self, slot: Slot, n: usize) -> Option<CardRun> {
        match slot.section {
            SectionKind::Stock if n == 1 => self.stock.take_front().map(CardRun::single),
            SectionKind::Tableau => self.columns.get_mut(slot.index)?.take_top(n),
            SectionKind::Foundation if n == 1 => {
                self.foundations.get_mut(slot.index)?.pop().map(CardRun::single)
            }
            _ => None,
        }
    }

    /// Put a run of cards on top of a slot. The slot must be on the board.
    pub fn place(&mut self, slot: Slot, run: CardRun) {
        match slot.section {
            SectionKind::Stock => {
                for card in run.into_vec().into_iter().rev() {
                    self.stock.put_front(card);
                }
            }
            SectionKind::Tableau => self.columns[slot.index].push_run(run),
            SectionKind::Foundation => {
                let pile = &mut self.foundations[slot.index];
                for card in run.into_vec() {
                    pile.push(card);
                }
            }
        }
    }
}
