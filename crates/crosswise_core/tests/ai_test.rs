//! Tests for the AI tiers and their tactics.

use crosswise_core::{
    Board, Coord, Difficulty, Game, Mark, Ordinal, Player, PlayerKind, Strategy, Tactic,
};

fn ai(ordinal: Ordinal, mark: Mark, difficulty: Difficulty) -> Player {
    Player::new(ordinal, mark, "AI", PlayerKind::Ai(difficulty))
}

fn choose(difficulty: Difficulty, grid: &Board, me: &Player) -> Coord {
    difficulty
        .strategy()
        .choose_move(grid, me, me.mark().opponent())
        .expect("move available")
}

/// Plays a game between two AI seats, asserting every chosen move is legal.
fn play_out(game: &mut Game) {
    while !game.game_over() {
        let me = game.next_player().expect("two players").clone();
        let PlayerKind::Ai(difficulty) = *me.kind() else {
            panic!("only AI seats expected");
        };
        let coord = choose(difficulty, game.grid(), &me);
        assert!(game.grid().is_open(coord), "{} chose {coord}", me.name());
        assert!(game.place(coord.x, coord.y).unwrap());
    }
}

#[test]
fn test_tiers_compose_tactics_in_order() {
    assert_eq!(Difficulty::Easy.tactics(), &[Tactic::FirstEmpty]);
    assert_eq!(
        Difficulty::Medium.tactics(),
        &[Tactic::Win, Tactic::Block, Tactic::FirstEmpty]
    );
    assert_eq!(
        Difficulty::Hard.tactics(),
        &[Tactic::Win, Tactic::Block, Tactic::OpeningBook, Tactic::FirstEmpty]
    );
}

#[test]
fn test_difficulty_parses_case_insensitively() {
    assert_eq!("hard".parse::<Difficulty>().ok(), Some(Difficulty::Hard));
    assert_eq!("Medium".parse::<Difficulty>().ok(), Some(Difficulty::Medium));
    assert!("impossible".parse::<Difficulty>().is_err());
}

#[test]
fn test_easy_picks_first_available_spot() {
    let mut game = Game::new();
    game.add_player(PlayerKind::Manual, Mark::X, "John").unwrap();
    let me = game
        .add_player(PlayerKind::Ai(Difficulty::Easy), Mark::O, "AI")
        .unwrap();

    game.place(0, 0).unwrap();

    assert_eq!(choose(Difficulty::Easy, game.grid(), &me), Coord::new(1, 0));
}

#[test]
fn test_easy_on_empty_grid_takes_top_left() {
    let me = ai(Ordinal::Second, Mark::O, Difficulty::Easy);
    assert_eq!(choose(Difficulty::Easy, &Board::new(), &me), Coord::new(0, 0));
}

#[test]
fn test_medium_picks_self_winning_move_if_available() {
    let mut game = Game::new();
    game.add_player(PlayerKind::Manual, Mark::X, "John").unwrap();
    let me = game
        .add_player(PlayerKind::Ai(Difficulty::Medium), Mark::O, "AI")
        .unwrap();

    // Both players one move from a column; X's extra mark is out of the way.
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2)] {
        assert!(game.place(x, y).unwrap());
    }

    assert_eq!(choose(Difficulty::Medium, game.grid(), &me), Coord::new(1, 2));
}

#[test]
fn test_medium_completes_own_row_over_blocking() {
    let grid = Board::from_rows([["X", "X", ""], ["O", "O", ""], ["", "", ""]]).unwrap();
    let me = ai(Ordinal::First, Mark::X, Difficulty::Medium);
    assert_eq!(choose(Difficulty::Medium, &grid, &me), Coord::new(2, 0));
}

#[test]
fn test_medium_wins_on_row_one() {
    let grid = Board::from_rows([["x", "x", ""], ["o", "", "o"], ["x", "", ""]]).unwrap();
    let me = ai(Ordinal::Second, Mark::O, Difficulty::Medium);
    assert_eq!(choose(Difficulty::Medium, &grid, &me), Coord::new(1, 1));
}

#[test]
fn test_medium_blocks_opponent() {
    let grid = Board::from_rows([["o", "o", ""], ["x", "", ""], ["", "", "x"]]).unwrap();
    let me = ai(Ordinal::Second, Mark::X, Difficulty::Medium);
    assert_eq!(choose(Difficulty::Medium, &grid, &me), Coord::new(2, 0));
}

#[test]
fn test_medium_falls_back_to_first_empty() {
    let grid = Board::from_rows([["x", "", ""], ["", "", ""], ["", "", ""]]).unwrap();
    let me = ai(Ordinal::Second, Mark::O, Difficulty::Medium);
    assert_eq!(choose(Difficulty::Medium, &grid, &me), Coord::new(1, 0));
}

#[test]
fn test_hard_blocks_before_opening_book() {
    // Seat 2 with no marks would take the centre, but X threatens row 0.
    let grid = Board::from_rows([["x", "x", ""], ["", "", ""], ["", "", ""]]).unwrap();
    let me = ai(Ordinal::Second, Mark::O, Difficulty::Hard);
    assert_eq!(choose(Difficulty::Hard, &grid, &me), Coord::new(2, 0));
}

#[test]
fn test_hard_first_seat_beats_easy() {
    let mut game = Game::new();
    game.add_player(PlayerKind::Ai(Difficulty::Hard), Mark::X, "Hal").unwrap();
    game.add_player(PlayerKind::Ai(Difficulty::Easy), Mark::O, "Eve").unwrap();

    play_out(&mut game);

    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Hal"));
    let expected = Board::from_rows([["x", "o", "o"], ["x", "", ""], ["x", "", ""]]).unwrap();
    assert_eq!(*game.grid(), expected);
}

#[test]
fn test_hard_second_seat_beats_easy() {
    let mut game = Game::new();
    game.add_player(PlayerKind::Ai(Difficulty::Easy), Mark::X, "Eve").unwrap();
    game.add_player(PlayerKind::Ai(Difficulty::Hard), Mark::O, "Hal").unwrap();

    play_out(&mut game);

    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Hal"));
    let expected = Board::from_rows([["x", "x", "o"], ["x", "o", ""], ["o", "", ""]]).unwrap();
    assert_eq!(*game.grid(), expected);
}

#[test]
fn test_every_tier_pairing_finishes_with_legal_moves() {
    use strum::IntoEnumIterator;

    for first in Difficulty::iter() {
        for second in Difficulty::iter() {
            let mut game = Game::new();
            game.add_player(PlayerKind::Ai(first), Mark::X, "A").unwrap();
            game.add_player(PlayerKind::Ai(second), Mark::O, "B").unwrap();
            play_out(&mut game);
            assert!(game.game_over(), "{first} vs {second}");
        }
    }
}

#[test]
fn test_full_board_yields_no_move() {
    let grid = Board::from_rows([["o", "x", "o"], ["x", "x", "o"], ["x", "o", "x"]]).unwrap();
    let me = ai(Ordinal::First, Mark::X, Difficulty::Hard);
    let err = Difficulty::Hard
        .strategy()
        .choose_move(&grid, &me, Mark::O)
        .unwrap_err();
    assert_eq!(err, crosswise_core::StrategyError::NoMoveAvailable);
}
