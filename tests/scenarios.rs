//! Hand-built positions exercising the move rules end to end through
//! `GameState::submit`.

use klondike_rules::card::standard_deck;
use klondike_rules::{
    Board, Card, Command, GameState, Input, MoveError, MoveOutcome, MoveRequest, Outcome, Rank,
    RulesConfig, Stock, Suit,
};
use serde_json::json;

fn game_from_json(board: serde_json::Value) -> GameState {
    let board: Board = serde_json::from_value(board).expect("valid board json");
    GameState::new(board, RulesConfig::default())
}

fn open(suit: &str, rank: &str) -> serde_json::Value {
    json!({ "suit": suit, "rank": rank, "face": "Open" })
}

fn closed(suit: &str, rank: &str) -> serde_json::Value {
    json!({ "suit": suit, "rank": rank, "face": "Closed" })
}

fn submit_move(game: &mut GameState, a: i64, b: i64, c: i64, d: i64) -> Result<Outcome, MoveError> {
    game.submit(Input::Move(MoveRequest::new(a, b, c, d)))
}

/// Column 2 holds a lone 5H and column 3 is topped by `six`.
fn five_onto_six(six: serde_json::Value) -> GameState {
    game_from_json(json!({
        "stock": [],
        "columns": [
            [],
            [open("Hearts", "Five")],
            [closed("Clubs", "Two"), six],
            [], [], [], []
        ],
        "foundations": [[], [], [], []]
    }))
}

#[test]
fn scenario_a_red_five_on_black_six() {
    let mut game = five_onto_six(open("Spades", "Six"));
    let outcome = submit_move(&mut game, 2, 2, 2, 3).expect("legal move");

    let Outcome::Moved(MoveOutcome::Completed(record)) = outcome else {
        panic!("unexpected outcome {outcome:?}");
    };
    assert_eq!(record.cards_moved, 1);
    assert!(game.board().columns[1].is_empty());
    assert_eq!(
        game.board().columns[2].top(),
        Some(Card::face_up(Suit::Hearts, Rank::Five))
    );
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.message(), None);
}

#[test]
fn scenario_b_red_five_on_red_six() {
    let mut game = five_onto_six(open("Diamonds", "Six"));
    let before = game.board().clone();

    assert_eq!(submit_move(&mut game, 2, 2, 2, 3), Err(MoveError::SameColor));
    assert_eq!(game.board(), &before);
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.message(), Some(MoveError::SameColor.to_string().as_str()));
}

#[test]
fn scenario_c_two_cannot_start_a_foundation() {
    let mut game = game_from_json(json!({
        "stock": [],
        "columns": [[open("Clubs", "Two")], [], [], [], [], [], []],
        "foundations": [[], [], [], []]
    }));
    assert_eq!(submit_move(&mut game, 2, 1, 3, 1), Err(MoveError::InvalidMove));

    // The Ace starts the pile and the Two follows it.
    let mut game = game_from_json(json!({
        "stock": [],
        "columns": [[open("Clubs", "Two")], [open("Clubs", "Ace")], [], [], [], [], []],
        "foundations": [[], [], [], []]
    }));
    submit_move(&mut game, 2, 2, 3, 1).expect("ace to empty foundation");
    submit_move(&mut game, 2, 1, 3, 1).expect("two onto ace");
    assert_eq!(game.board().foundations[0].len(), 2);
}

fn full_closed_stock() -> GameState {
    let mut board = Board::empty();
    board.stock = Stock::new(standard_deck());
    GameState::new(board, RulesConfig::default())
}

#[test]
fn scenario_d_flush_refused_on_closed_stock() {
    let mut game = full_closed_stock();
    assert_eq!(
        game.submit(Input::Command(Command::Flush)),
        Err(MoveError::StockNotFullyOpen)
    );
    assert_eq!(game.board().stock.open_count(), 0);
    assert_eq!(game.move_count(), 0);

    // One open card is still not enough.
    game.submit(Input::Command(Command::Open)).unwrap();
    assert_eq!(
        game.submit(Input::Command(Command::Flush)),
        Err(MoveError::StockNotFullyOpen)
    );
}

#[test]
fn scenario_e_fifty_third_open_fails() {
    let mut game = full_closed_stock();
    for i in 0..52 {
        let outcome = game.submit(Input::Command(Command::Open));
        assert!(
            matches!(outcome, Ok(Outcome::StockOpened(_))),
            "open #{} failed: {outcome:?}",
            i + 1
        );
    }
    assert_eq!(
        game.submit(Input::Command(Command::Open)),
        Err(MoveError::StockAlreadyOpen)
    );
    assert_eq!(game.move_count(), 52);

    // Now the flush goes through and the stock is back in dealt order.
    game.submit(Input::Command(Command::Flush)).unwrap();
    assert_eq!(game.board().stock, Stock::new(standard_deck()));
}

#[test]
fn multi_card_run_moves_and_reveals() {
    let mut game = game_from_json(json!({
        "stock": [],
        "columns": [
            [closed("Diamonds", "Four"), open("Spades", "Nine"), open("Hearts", "Eight"), open("Clubs", "Seven")],
            [open("Diamonds", "Ten")],
            [], [], [], [], []
        ],
        "foundations": [[], [], [], []]
    }));
    let before = game.board().clone();

    let outcome = submit_move(&mut game, 2, 1, 2, 2).unwrap();
    let Outcome::Moved(MoveOutcome::Completed(record)) = outcome else {
        panic!("unexpected outcome {outcome:?}");
    };
    assert_eq!(record.cards_moved, 3);
    assert!(record.revealed);
    assert_eq!(game.board().columns[1].len(), 4);
    assert_eq!(
        game.board().columns[0].cards(),
        &[Card::face_up(Suit::Diamonds, Rank::Four)]
    );

    game.submit(Input::Command(Command::Undo)).unwrap();
    assert_eq!(game.board(), &before);
}

/// Only the top card of a run goes to a foundation.
#[test]
fn foundation_takes_only_the_top_card_of_a_run() {
    let mut game = game_from_json(json!({
        "stock": [],
        "columns": [
            [open("Spades", "Three"), open("Hearts", "Two")],
            [], [], [], [], [], []
        ],
        "foundations": [[open("Hearts", "Ace")], [], [], []]
    }));
    submit_move(&mut game, 2, 1, 3, 1).unwrap();
    assert_eq!(game.board().columns[0].len(), 1);
    assert_eq!(game.board().foundations[0].len(), 2);
}

#[test]
fn foundation_card_can_come_back_down() {
    let mut game = game_from_json(json!({
        "stock": [],
        "columns": [[open("Spades", "Three")], [], [], [], [], [], []],
        "foundations": [[open("Hearts", "Ace"), open("Hearts", "Two")], [], [], []]
    }));
    submit_move(&mut game, 3, 1, 2, 1).unwrap();
    assert_eq!(
        game.board().columns[0].top(),
        Some(Card::face_up(Suit::Hearts, Rank::Two))
    );
    assert_eq!(game.board().foundations[0].len(), 1);
}

#[test]
fn stock_card_must_be_open_to_play() {
    let mut game = game_from_json(json!({
        "stock": [closed("Hearts", "Ace")],
        "columns": [[], [], [], [], [], [], []],
        "foundations": [[], [], [], []]
    }));
    assert_eq!(submit_move(&mut game, 1, 1, 3, 1), Err(MoveError::InvalidMove));

    game.submit(Input::Command(Command::Open)).unwrap();
    submit_move(&mut game, 1, 1, 3, 1).unwrap();
    assert!(game.board().stock.is_empty());

    // An empty stock is trivially "fully open".
    game.submit(Input::Command(Command::Flush)).unwrap();
    assert_eq!(submit_move(&mut game, 1, 1, 3, 2), Err(MoveError::NoCard));
}

#[test]
fn bad_commands_are_reported() {
    let mut game = full_closed_stock();
    let err = "x".parse::<Command>().unwrap_err();
    assert_eq!(err, MoveError::InvalidCommand);
    // The stock's front card is still face-down.
    assert_eq!(submit_move(&mut game, 1, 1, 1, 1), Err(MoveError::InvalidMove));
    assert_eq!(submit_move(&mut game, 2, 1, 1, 1), Err(MoveError::NoCard));
}
