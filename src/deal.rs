//! Building the starting layout.
//!
//! A `Dealer` hands the game a fresh `Board`:
//!   - seven columns holding 1..=7 cards, only the last one face-up,
//!   - the remaining 24 cards face-down in the stock,
//!   - four empty foundations.
//!
//! Two dealers are provided:
//!   - `ShuffledDealer` shuffles with `rand`, either from a `u64` seed (for
//!     reproducible games) or from OS entropy.
//!   - `NumberedDealer` turns a game number in `0 .. 52!` into a deck. Each
//!     number names exactly one ordering of `standard_deck()`, read as the
//!     factorial-base digits of the number, so every possible deal has a
//!     number and the number of a deal can be recovered with
//!     `game_number_of`.

use log::info;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Board;
use crate::card::{CARDS_PER_DECK, Card, standard_deck};
use crate::error::DealError;
use crate::section::{Column, Stock};

const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// Something that can lay out a new game.
pub trait Dealer {
    fn build(&mut self) -> Board;
}

/// Lay out a deck.
///
/// Columns are dealt left to right, taking cards from the back of `deck`.
/// Whatever is left becomes the stock in its original order, so
/// `deck[0]` is the stock's front card.
pub fn deal_layout(mut deck: Vec<Card>) -> Board {
    deck.iter_mut().for_each(Card::close);

    let mut board = Board::empty();
    for (i, column) in board.columns.iter_mut().enumerate() {
        let mut cards = Vec::with_capacity(i + 1);
        for _ in 0..=i {
            if let Some(card) = deck.pop() {
                cards.push(card);
            }
        }
        *column = Column::new(cards);
        column.reveal_top();
    }
    board.stock = Stock::new(deck);
    board
}

/// Random deals from a `StdRng`.
pub struct ShuffledDealer {
    rng: StdRng,
}

impl ShuffledDealer {
    /// Reproducible deals: the same seed always gives the same games.
    pub fn from_seed(seed: u64) -> Self {
        ShuffledDealer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        ShuffledDealer {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Dealer for ShuffledDealer {
    fn build(&mut self) -> Board {
        let mut deck = standard_deck();
        deck.shuffle(&mut self.rng);
        info!("dealt a shuffled deck");
        deal_layout(deck)
    }
}

/// Deals the deck named by a game number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberedDealer {
    number: BigUint,
}

impl NumberedDealer {
    pub fn new(number: BigUint) -> Result<Self, DealError> {
        if number >= deal_count() {
            return Err(DealError::GameNumberOutOfRange);
        }
        Ok(NumberedDealer { number })
    }

    /// Build a dealer from game number text such as `"#1,234,567"`.
    pub fn parse(s: &str) -> Result<Self, DealError> {
        NumberedDealer::new(parse_game_number(s)?)
    }

    pub fn number(&self) -> &BigUint {
        &self.number
    }
}

impl Dealer for NumberedDealer {
    fn build(&mut self) -> Board {
        info!("dealt game #{}", self.number);
        deal_layout(decode(&self.number))
    }
}

/// `k!` for every `k` in `0..=52`.
fn factorials() -> Vec<BigUint> {
    let mut out = Vec::with_capacity(DECK_LEN + 1);
    out.push(BigUint::one());
    for k in 1..=DECK_LEN {
        let next = &out[k - 1] * BigUint::from(k as u64);
        out.push(next);
    }
    out
}

/// The number of distinct deals, 52!.
pub fn deal_count() -> BigUint {
    factorials().swap_remove(DECK_LEN)
}

/// Parse game number text.
///
/// Whitespace and the separators `#`, `-`, `_`, `.` and `,` are ignored, so
/// `"#12 345"` and `"12,345"` both mean 12345.
pub fn parse_game_number(s: &str) -> Result<BigUint, DealError> {
    let cleaned: String = s
        .chars()
        .filter(|ch| !(ch.is_whitespace() || matches!(ch, '#' | '-' | '_' | '.' | ',')))
        .collect();
    if cleaned.is_empty() {
        return Err(DealError::EmptyGameNumber);
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(DealError::MalformedGameNumber(s.to_string()));
    }
    BigUint::parse_bytes(cleaned.as_bytes(), 10)
        .ok_or_else(|| DealError::MalformedGameNumber(s.to_string()))
}

/// The deck named by `number`, before dealing.
pub fn deck_from_game_number(number: &BigUint) -> Result<Vec<Card>, DealError> {
    if *number >= deal_count() {
        return Err(DealError::GameNumberOutOfRange);
    }
    Ok(decode(number))
}

/// Factorial-base decoding. Numbers past the end wrap around modulo 52!.
fn decode(number: &BigUint) -> Vec<Card> {
    let facts = factorials();
    let mut rest = number % &facts[DECK_LEN];
    let mut pool = standard_deck();
    let mut deck = Vec::with_capacity(DECK_LEN);

    for i in 0..DECK_LEN {
        let place = &facts[DECK_LEN - 1 - i];
        let digit = (&rest / place).to_usize().unwrap_or(0);
        rest %= place;
        // rest < (52 - i)! on entry, so digit < pool.len()
        deck.push(pool.remove(digit.min(pool.len() - 1)));
    }
    deck
}

/// The game number of a deck, ignoring card faces.
pub fn game_number_of(deck: &[Card]) -> Result<BigUint, DealError> {
    if deck.len() != DECK_LEN {
        return Err(DealError::NotAFullDeck);
    }
    let mut pool = standard_deck();
    let mut number = BigUint::zero();

    for (i, card) in deck.iter().enumerate() {
        let idx = pool
            .iter()
            .position(|c| c.same_identity(*card))
            .ok_or(DealError::NotAFullDeck)?;
        pool.remove(idx);
        number = number * BigUint::from((DECK_LEN - i) as u64) + BigUint::from(idx as u64);
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::NUM_FOUNDATIONS;

    /// Check that a dealt board is a proper starting layout.
    fn assert_starting_layout(board: &Board) {
        assert_eq!(board.total_cards(), DECK_LEN);
        assert_eq!(board.stock.len(), DECK_LEN - 28);
        assert_eq!(board.stock.open_count(), 0);
        for (i, col) in board.columns.iter().enumerate() {
            assert_eq!(col.len(), i + 1, "column {} has wrong height", i + 1);
            assert_eq!(col.open_run_len(), 1);
            assert!(col.top().is_some_and(|c| c.is_open()));
        }
        assert_eq!(board.foundations.len(), NUM_FOUNDATIONS);
        assert!(board.foundations.iter().all(|f| f.is_empty()));
    }

    #[test]
    fn deal_layout_is_triangular() {
        let board = deal_layout(standard_deck());
        assert_starting_layout(&board);

        // First column gets the last card of the deck.
        let deck = standard_deck();
        let mut expected = deck[DECK_LEN - 1];
        expected.open();
        assert_eq!(board.columns[0].top(), Some(expected));
        assert!(board.stock.front().is_some_and(|c| c.same_identity(deck[0])));
    }

    #[test]
    fn seeded_dealer_is_reproducible() {
        let a = ShuffledDealer::from_seed(7).build();
        let b = ShuffledDealer::from_seed(7).build();
        let c = ShuffledDealer::from_seed(8).build();
        assert_starting_layout(&a);
        assert_eq!(a, b);
        assert_ne!(a, c);

        // Successive deals from one dealer differ.
        let mut dealer = ShuffledDealer::from_seed(7);
        let first = dealer.build();
        let second = dealer.build();
        assert_ne!(first, second);
    }

    #[test]
    fn entropy_dealer_deals_a_full_layout() {
        assert_starting_layout(&ShuffledDealer::from_entropy().build());
    }

    #[test]
    fn game_number_zero_is_the_standard_order() {
        assert_eq!(deck_from_game_number(&BigUint::zero()).unwrap(), standard_deck());
    }

    #[test]
    fn last_game_number_is_the_reversed_order() {
        let last = deal_count() - BigUint::one();
        let mut reversed = standard_deck();
        reversed.reverse();
        assert_eq!(deck_from_game_number(&last).unwrap(), reversed);
        assert_eq!(
            deck_from_game_number(&deal_count()),
            Err(DealError::GameNumberOutOfRange)
        );
    }

    #[test]
    fn game_numbers_round_trip() {
        for text in ["1", "51", "52", "123456789", "80658175170943878571660636856403766975289505440883277823"] {
            let n = parse_game_number(text).unwrap();
            let deck = deck_from_game_number(&n).unwrap();
            assert_eq!(game_number_of(&deck).unwrap(), n, "round trip of {text}");
        }
    }

    #[test]
    fn game_number_of_ignores_faces_and_rejects_short_decks() {
        let mut deck = standard_deck();
        deck[3].open();
        assert_eq!(game_number_of(&deck).unwrap(), BigUint::zero());

        assert_eq!(game_number_of(&deck[..51]), Err(DealError::NotAFullDeck));

        let mut dup = standard_deck();
        dup[1] = dup[0];
        assert_eq!(game_number_of(&dup), Err(DealError::NotAFullDeck));
    }

    #[test]
    fn game_number_text_is_normalized() {
        assert_eq!(parse_game_number("#12 345").unwrap(), BigUint::from(12345u32));
        assert_eq!(parse_game_number("12,345").unwrap(), BigUint::from(12345u32));
        assert_eq!(parse_game_number("  "), Err(DealError::EmptyGameNumber));
        assert!(matches!(
            parse_game_number("12a"),
            Err(DealError::MalformedGameNumber(_))
        ));
    }

    #[test]
    fn numbered_dealer_matches_the_deck() {
        let mut dealer = NumberedDealer::parse("#987654321").unwrap();
        let board = dealer.build();
        assert_starting_layout(&board);
        let deck = deck_from_game_number(dealer.number()).unwrap();
        assert_eq!(board, deal_layout(deck));

        assert_eq!(
            NumberedDealer::new(deal_count()),
            Err(DealError::GameNumberOutOfRange)
        );
    }
}
