//! Properties that hold in every position reachable by legal play.

use chess_core::Color;
use chess_engine::{is_king_attacked, Game};
use proptest::prelude::*;

/// Plays a random game, picking each move by index into the legal move list.
fn playout(choices: &[usize]) -> Vec<Game> {
    let mut game = Game::new();
    let mut seen = vec![game.clone()];
    for &choice in choices {
        let moves = game.legal_moves();
        if moves.is_empty() || game.is_over() {
            break;
        }
        let m = moves[choice % moves.len()];
        game.make_move(m).unwrap();
        seen.push(game.clone());
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn legal_moves_never_leave_king_in_check(choices in prop::collection::vec(any::<usize>(), 0..30)) {
        for game in playout(&choices) {
            let mover = game.turn();
            for m in game.legal_moves() {
                let mut board = game.board().clone();
                let undo = board.do_move(m).unwrap();
                prop_assert!(!is_king_attacked(&board, mover), "{} leaves king in check", m);
                board.undo_move(m, undo);
                prop_assert_eq!(&board, game.board());
            }
        }
    }

    #[test]
    fn turns_alternate(choices in prop::collection::vec(any::<usize>(), 0..30)) {
        for game in playout(&choices) {
            let expected = if game.ply_count() % 2 == 0 { Color::White } else { Color::Black };
            prop_assert_eq!(game.turn(), expected);
            prop_assert_eq!(game.move_history().len(), game.ply_count());
        }
    }

    #[test]
    fn mate_and_stalemate_are_exclusive(choices in prop::collection::vec(any::<usize>(), 0..30)) {
        for game in playout(&choices) {
            for color in Color::ALL {
                prop_assert!(!(game.is_in_checkmate(color) && game.is_in_stalemate(color)));
                if game.is_in_checkmate(color) {
                    prop_assert!(game.is_in_check(color));
                }
            }
        }
    }

    #[test]
    fn queries_do_not_mutate(choices in prop::collection::vec(any::<usize>(), 0..30)) {
        let games = playout(&choices);
        if let Some(game) = games.last() {
            let before = game.clone();
            let _ = game.legal_moves();
            let _ = game.is_in_checkmate(Color::White);
            let _ = game.is_in_stalemate(Color::Black);
            let _ = game.outcome();
            prop_assert_eq!(game, &before);
        }
    }

    #[test]
    fn games_survive_json(choices in prop::collection::vec(any::<usize>(), 0..30)) {
        let games = playout(&choices);
        if let Some(game) = games.last() {
            let json = serde_json::to_string(game).unwrap();
            let restored: Game = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(&restored, game);
            prop_assert_eq!(restored.legal_moves(), game.legal_moves());
        }
    }
}
