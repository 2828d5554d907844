//! Card containers for the three board sections.
//!
//! - `Stock`: the reserve pile. Cards are turned over one at a time from
//!   the back and shown at the front.
//! - `Column`: one of the seven tableau columns. Only the trailing run of
//!   open cards can move.
//! - `FoundationPile`: one of the four single-suit completion piles.
//! - `CardRun`: a non-empty ordered group of cards in transit.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, NUM_RANKS};

/// Number of tableau columns.
pub const NUM_COLUMNS: usize = 7;
/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = 4;

/// The three sections of the board, numbered the way players enter them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Stock = 1,
    Tableau = 2,
    Foundation = 3,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Stock,
        SectionKind::Tableau,
        SectionKind::Foundation,
    ];

    /// Map a player-facing section number (1..=3) to a section.
    pub fn from_id(id: i64) -> Option<Self> {
        SectionKind::ALL.iter().copied().find(|s| s.id() as i64 == id)
    }

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// How many slots the section has.
    pub fn slot_count(self) -> usize {
        match self {
            SectionKind::Stock => 1,
            SectionKind::Tableau => NUM_COLUMNS,
            SectionKind::Foundation => NUM_FOUNDATIONS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Stock => "Stock",
            SectionKind::Tableau => "Tableau",
            SectionKind::Foundation => "Foundation",
        }
    }
}

/// One slot on the board: a section plus a 0-based index within it.
///
/// Printed 1-based, e.g. "Tableau 3".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub section: SectionKind,
    pub index: usize,
}

impl Slot {
    pub const STOCK: Slot = Slot {
        section: SectionKind::Stock,
        index: 0,
    };

    pub fn column(index: usize) -> Self {
        debug_assert!(index < NUM_COLUMNS);
        Slot {
            section: SectionKind::Tableau,
            index,
        }
    }

    pub fn foundation(index: usize) -> Self {
        debug_assert!(index < NUM_FOUNDATIONS);
        Slot {
            section: SectionKind::Foundation,
            index,
        }
    }

    /// False for a hand-built slot whose index is past the end of its
    /// section.
    pub fn is_on_board(self) -> bool {
        self.index < self.section.slot_count()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.section {
            SectionKind::Stock => f.write_str("Stock"),
            other => write!(f, "{} {}", other.name(), self.index + 1),
        }
    }
}

/// A non-empty, ordered group of cards moved as one unit.
///
/// The first card is the one that lands directly on the destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRun(Vec<Card>);

impl CardRun {
    pub fn single(card: Card) -> Self {
        CardRun(vec![card])
    }

    /// Wrap a vector of cards, or `None` if it is empty.
    pub fn from_vec(cards: Vec<Card>) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(CardRun(cards))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Card {
        self.0[0]
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.0
    }
}

/// The reserve pile.
///
/// Stored as a deque whose front (index 0) is the exposed card. Opening a
/// card takes it from the back, turns it up and puts it at the front, so
/// the stock always reads as open cards followed by closed ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock {
    cards: VecDeque<Card>,
}

impl Stock {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Stock {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The exposed card, open or not.
    pub fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    pub fn open_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_open()).count()
    }

    pub fn has_closed(&self) -> bool {
        self.cards.iter().any(|c| !c.is_open())
    }

    /// True when no card is closed. An empty stock counts as fully open.
    pub fn is_fully_open(&self) -> bool {
        self.open_count() == self.len()
    }

    /// Turn over the back card and show it at the front.
    pub fn open_next(&mut self) -> Option<Card> {
        let mut card = self.cards.pop_back()?;
        card.open();
        self.cards.push_front(card);
        Some(card)
    }

    /// Inverse of `open_next`: hide the front card again at the back.
    pub fn close_front(&mut self) -> Option<Card> {
        let mut card = self.cards.pop_front()?;
        card.close();
        self.cards.push_back(card);
        Some(card)
    }

    pub fn close_all(&mut self) {
        self.cards.iter_mut().for_each(Card::close);
    }

    pub fn reopen_all(&mut self) {
        self.cards.iter_mut().for_each(Card::open);
    }

    pub fn take_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn put_front(&mut self, card: Card) {
        self.cards.push_front(card);
    }
}

/// One tableau column, stored bottom (index 0) to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    cards: Vec<Card>,
}

impl Column {
    pub fn new(cards: Vec<Card>) -> Self {
        Column { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Length of the maximal run of open cards at the top of the column.
    pub fn open_run_len(&self) -> usize {
        self.cards.iter().rev().take_while(|c| c.is_open()).count()
    }

    /// True when the column is non-empty and every card in it is open.
    pub fn all_open(&self) -> bool {
        !self.cards.is_empty() && self.open_run_len() == self.cards.len()
    }

    /// Deepest card of the trailing open run.
    pub fn run_base(&self) -> Option<Card> {
        match self.open_run_len() {
            0 => None,
            n => Some(self.cards[self.cards.len() - n]),
        }
    }

    /// Remove the top `n` cards, keeping their order.
    pub fn take_top(&mut self, n: usize) -> Option<CardRun> {
        if n > self.cards.len() {
            return None;
        }
        let at = self.cards.len() - n;
        CardRun::from_vec(self.cards.split_off(at))
    }

    pub fn push_run(&mut self, run: CardRun) {
        self.cards.extend(run.into_vec());
    }

    /// Turn the top card up if it is closed. Returns true if it flipped.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_open() => {
                card.open();
                true
            }
            _ => false,
        }
    }

    /// Turn down the card directly beneath the top `run_len` cards, but
    /// only when it is the single open card below that run.
    ///
    /// Returns true if a card was closed.
    pub fn conceal_under(&mut self, run_len: usize) -> bool {
        if run_len >= self.cards.len() {
            return false;
        }
        let below = &self.cards[..self.cards.len() - run_len];
        let open_below = below.iter().filter(|c| c.is_open()).count();
        let idx = below.len() - 1;
        if open_below == 1 && self.cards[idx].is_open() {
            self.cards[idx].close();
            true
        } else {
            false
        }
    }
}

/// One foundation pile. An empty pile has no established suit yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoundationPile {
    cards: Vec<Card>,
}

impl FoundationPile {
    pub fn new(cards: Vec<Card>) -> Self {
        FoundationPile { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// A pile is complete once it holds a whole suit.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == NUM_RANKS as usize
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
