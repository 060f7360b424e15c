//! Whole games played through the public API.

use chess_core::{Color, Move, MoveRequest, Piece, PieceType, Position};
use chess_engine::{Board, Game, GameError, GameResult};

fn pos(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn play(game: &mut Game, moves: &[&str]) {
    for m in moves {
        game.make_move_uci(m)
            .unwrap_or_else(|e| panic!("{} failed: {}", m, e));
    }
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert!(game.is_in_checkmate(Color::Black));
    assert!(game.is_over());
    assert_eq!(game.result().and_then(GameResult::winner), Some(Color::White));
    assert_eq!(game.ply_count(), 7);
}

#[test]
fn castling_both_sides_in_one_game() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "d7d6", "e1g1", "c8e6", "d2d3", "d8d7",
            "b1c3", "e8c8",
        ],
    );
    let board = game.board();
    assert_eq!(board.get_piece(pos("g1")), Some(Piece::new(Color::White, PieceType::King)));
    assert_eq!(board.get_piece(pos("f1")), Some(Piece::new(Color::White, PieceType::Rook)));
    assert_eq!(board.get_piece(pos("c8")), Some(Piece::new(Color::Black, PieceType::King)));
    assert_eq!(board.get_piece(pos("d8")), Some(Piece::new(Color::Black, PieceType::Rook)));
    assert_eq!(game.castling_rights().raw(), 0);
}

#[test]
fn en_passant_window_closes() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "f7f5"]);
    assert!(game
        .valid_moves(pos("e5"))
        .unwrap()
        .contains(&Move::new(pos("e5"), pos("f6"))));

    play(&mut game, &["b1c3", "b7b6"]);
    assert!(!game
        .valid_moves(pos("e5"))
        .unwrap()
        .contains(&Move::new(pos("e5"), pos("f6"))));
}

#[test]
fn underpromotion_by_capture() {
    let mut game = Game::new();
    play(
        &mut game,
        &["h2h4", "g7g5", "h4g5", "f8g7", "g5g6", "g8f6", "g6h7", "h8g8"],
    );
    let request = MoveRequest::new("h7", "g8").with_promotion("rook");
    game.make_move_request(&request).unwrap();
    assert_eq!(
        game.board().get_piece(pos("g8")),
        Some(Piece::new(Color::White, PieceType::Rook))
    );
    assert!(game.is_in_check(Color::Black));
}

#[test]
fn failed_moves_leave_game_unchanged() {
    let mut game = Game::new();
    play(&mut game, &["e2e4"]);
    let before = game.clone();

    for bad in ["e4e5", "d7d4", "e8e7", "a1a3"] {
        assert!(game.make_move_uci(bad).is_err(), "{} accepted", bad);
    }
    assert!(matches!(
        game.make_move_uci("e7"),
        Err(GameError::Malformed(_))
    ));
    assert_eq!(game, before);
}

#[test]
fn stalemate_from_custom_board() {
    let mut board = Board::new();
    board.add_piece(pos("a8"), Some(Piece::new(Color::Black, PieceType::King)));
    board.add_piece(pos("c5"), Some(Piece::new(Color::White, PieceType::Queen)));
    board.add_piece(pos("h1"), Some(Piece::new(Color::White, PieceType::King)));

    let mut game = Game::from_board(board, Color::White);
    assert!(!game.is_over());
    play(&mut game, &["c5b6"]);
    assert!(game.is_in_stalemate(Color::Black));
    assert_eq!(game.result(), Some(GameResult::Stalemate));
    assert!(game.result().is_some_and(GameResult::is_draw));
}

#[test]
fn saved_game_keeps_en_passant_state() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "g8f6", "e4e5", "d7d5"]);

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.pawn_moved_two(), Some(pos("d5")));
    restored.make_move_uci("e5d6").unwrap();
    assert_eq!(restored.board().get_piece(pos("d5")), None);
}
