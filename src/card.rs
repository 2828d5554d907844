//! Card, Suit, and Rank types for a standard 52-card deck.
//!
//! - `Card` carries an immutable identity (`Suit` + `Rank`) and a mutable
//!   `Face` that flips between open and closed as the card moves around.
//! - `Rank` uses the numbers 2..=14, with the Ace as 14.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// The four suits in a standard deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// The thirteen ranks, numbered the way the rules engine compares them.
///
/// The Ace is 14. On the foundations it is the first card of a pile and
/// the Two follows it; on the tableau it sits above the King, so nothing
/// can be built on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 13
    Ace,  // 14
}

/// Red for hearts and diamonds, black for clubs and spades.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Whether a card is showing its face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Face {
    Open,
    Closed,
}

/// A playing card: identity plus face state.
///
/// Equality compares the face too, so two snapshots of a board are only
/// equal when every card is showing the same way.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face: Face,
}

impl Card {
    /// Create a new face-down card.
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card {
            suit,
            rank,
            face: Face::Closed,
        }
    }

    /// Create a new face-up card.
    #[inline]
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Card {
            suit,
            rank,
            face: Face::Open,
        }
    }

    #[inline]
    pub fn suit(self) -> Suit {
        self.suit
    }

    #[inline]
    pub fn rank(self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn face(self) -> Face {
        self.face
    }

    #[inline]
    pub fn color(self) -> Color {
        self.suit.color()
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self.face == Face::Open
    }

    /// Turn the card face-up.
    #[inline]
    pub fn open(&mut self) {
        self.face = Face::Open;
    }

    /// Turn the card face-down.
    #[inline]
    pub fn close(&mut self) {
        self.face = Face::Closed;
    }

    /// True if both cards are the same suit and rank, ignoring the face.
    #[inline]
    pub fn same_identity(self, other: Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Short string like "AH", "7C", "TD", "KS".
    pub fn short_str(self) -> String {
        format!("{}{}", self.rank.short_char(), self.suit.short_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS as usize] =
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-character representation: 'H', 'D', 'C', or 'S'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl Rank {
    /// All ranks in ascending number order (Two..Ace).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Rank number in 2..=14 (Ace=14).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn short_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Generate a standard 52-card deck in a fixed order, all face-down.
///
/// Suits follow `Suit::ALL` order, and ranks follow `Rank::ALL` order.
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CARDS_PER_DECK as usize);
    for &suit in Suit::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_numbers_run_two_to_fourteen() {
        for (i, &rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.number(), i as u8 + 2);
        }
        assert_eq!(Rank::King.number(), 13);
        assert_eq!(Rank::Ace.number(), 14);
    }

    #[test]
    fn card_colors_are_correct() {
        // Hearts & Diamonds are red
        for rank in Rank::ALL.iter().copied() {
            assert_eq!(Card::new(Suit::Hearts, rank).color(), Color::Red);
            assert_eq!(Card::new(Suit::Diamonds, rank).color(), Color::Red);
        }

        // Clubs & Spades are black
        for rank in Rank::ALL.iter().copied() {
            assert_eq!(Card::new(Suit::Clubs, rank).color(), Color::Black);
            assert_eq!(Card::new(Suit::Spades, rank).color(), Color::Black);
        }
    }

    #[test]
    fn short_str_and_display() {
        let ah = Card::new(Suit::Hearts, Rank::Ace);
        let td = Card::new(Suit::Diamonds, Rank::Ten);
        let ks = Card::new(Suit::Spades, Rank::King);
        let seven_clubs = Card::new(Suit::Clubs, Rank::Seven);

        assert_eq!(ah.short_str(), "AH");
        assert_eq!(td.short_str(), "TD");
        assert_eq!(ks.short_str(), "KS");
        assert_eq!(seven_clubs.short_str(), "7C");

        assert_eq!(format!("{ah}"), "AH");
        assert_eq!(format!("{seven_clubs}"), "7C");
    }

    #[test]
    fn faces_flip_in_place() {
        let mut c = Card::new(Suit::Spades, Rank::Five);
        assert_eq!(c.face(), Face::Closed);
        assert!(!c.is_open());

        c.open();
        assert!(c.is_open());
        assert_eq!(c, Card::face_up(Suit::Spades, Rank::Five));

        c.close();
        assert_eq!(c, Card::new(Suit::Spades, Rank::Five));
        assert!(c.same_identity(Card::face_up(Suit::Spades, Rank::Five)));
    }

    #[test]
    fn standard_deck_has_52_unique_closed_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), CARDS_PER_DECK as usize);
        assert!(deck.iter().all(|c| !c.is_open()));

        for (i, a) in deck.iter().enumerate() {
            for b in deck.iter().skip(i + 1) {
                assert!(!a.same_identity(*b), "duplicate card {a}");
            }
        }
    }
}
