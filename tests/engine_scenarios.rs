use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use board_rules::config::{LegalityMode, SessionConfig};
use board_rules::errors::ChessErrors;
use board_rules::game_state::{
    chess_types::{CastlingRights, Color, Piece, PieceKind, Square},
    game_state::GameState,
};
use board_rules::move_generation::legal_move_apply::execute_move;
use board_rules::move_generation::legal_move_checks::is_square_attacked;
use board_rules::move_generation::legal_move_generator::{generate_all_moves, generate_moves, selection};
use board_rules::move_generation::legal_move_undo::undo_move;
use board_rules::move_generation::move_generator::GeneratedMove;
use board_rules::session::session_top::ChessSession;
use board_rules::utils::random_playout::play_random_moves;

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).expect("test square should be on the board")
}

#[test]
fn e2_pawn_from_the_start() {
    let game = GameState::new_game();
    let moves: HashSet<GeneratedMove> = generate_moves(&game, sq(6, 4)).into_iter().collect();
    let expected: HashSet<GeneratedMove> = [GeneratedMove::quiet(sq(5, 4)), GeneratedMove::quiet(sq(4, 4))]
        .into_iter()
        .collect();
    assert_eq!(moves, expected);
}

#[test]
fn kingside_castling_from_a_cleared_back_rank() {
    let mut game = GameState::new_game();
    game.clear_square(sq(7, 5));
    game.clear_square(sq(7, 6));
    assert!(game.castling_rights().white_kingside);
    for col in 4..=6 {
        assert!(!is_square_attacked(&game, sq(7, col), Color::Black));
    }

    assert!(generate_moves(&game, sq(7, 4)).contains(&GeneratedMove::quiet(sq(7, 6))));

    let record = execute_move(&mut game, sq(7, 4), sq(7, 6)).expect("castling should execute");
    assert!(record.is_castling);
    assert_eq!(game.piece_at(sq(7, 6)), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(game.piece_at(sq(7, 5)), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(game.piece_at(sq(7, 4)), None);
    assert_eq!(game.piece_at(sq(7, 7)), None);
}

#[test]
fn bishop_capture_records_the_knight() {
    // Executed as given; the executor trusts its caller on geometry.
    let mut game = GameState::new_empty();
    let knight = Piece::new(Color::Black, PieceKind::Knight);
    game.place_piece(sq(5, 5), knight);
    game.place_piece(sq(7, 0), Piece::new(Color::White, PieceKind::Bishop));

    let record = execute_move(&mut game, sq(7, 0), sq(5, 5)).expect("capture should execute");

    assert_eq!(record.captured, Some(knight));
    assert_eq!(game.piece_at(sq(5, 5)), Some(Piece::new(Color::White, PieceKind::Bishop)));
    assert_eq!(game.piece_at(sq(7, 0)), None);
}

#[test]
fn every_generated_destination_is_empty_or_enemy_along_random_games() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = GameState::new_game();

    for _ in 0..12 {
        for (from, piece) in game.pieces().collect::<Vec<_>>() {
            for mv in generate_moves(&game, from) {
                if let Some(target) = game.piece_at(mv.to) {
                    assert_ne!(target.color, piece.color, "{from} lands on own piece at {}", mv.to);
                    assert!(mv.is_capture);
                } else {
                    assert!(!mv.is_capture);
                }
            }
        }
        let generator = LegalityMode::PseudoLegal.generator();
        if play_random_moves(&mut game, generator, 4, &mut rng)
            .expect("generated moves should execute")
            .is_empty()
        {
            break;
        }
    }
}

fn placement(game: &GameState) -> String {
    let position = game.get_position();
    position.split(' ').next().unwrap_or_default().to_owned()
}

#[test]
fn execute_then_undo_round_trips_from_random_positions() {
    let generator = LegalityMode::PseudoLegal.generator();

    for seed in 0..16u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new_game();
        play_random_moves(&mut game, generator, 20, &mut rng).expect("playout should succeed");
        let before = game.clone();
        let side = if before.history().len() % 2 == 0 { Color::White } else { Color::Black };

        for (from, mv) in generate_all_moves(generator, &before, side) {
            let record = execute_move(&mut game, from, mv.to).expect("generated move should execute");
            let rights_changed = game.castling_rights() != before.castling_rights();
            undo_move(&mut game);

            assert_eq!(placement(&game), placement(&before), "seed {seed}: {from}-{}", mv.to);
            if !record.is_castling && !rights_changed {
                assert_eq!(game, before, "seed {seed}: {from}-{}", mv.to);
            }
            game = before.clone();
        }
    }
}

#[test]
fn castling_undo_restores_board_but_not_rights() {
    let mut game = GameState::from_position("r3k2r/8/8/8/8/8/8/R3K2R KQkq").expect("position should parse");
    let board_before = game.get_position();

    execute_move(&mut game, sq(7, 4), sq(7, 6)).expect("castling should execute");
    undo_move(&mut game);

    let (placement_before, _) = board_before.split_once(' ').expect("position has a castling field");
    let position_after = game.get_position();
    let (placement_after, rights_after) = position_after.split_once(' ').expect("position has a castling field");
    assert_eq!(placement_after, placement_before);
    assert_eq!(rights_after, "kq");
    assert_ne!(game.castling_rights(), CastlingRights::ALL);
}

#[test]
fn selection_lists_destinations_only() {
    let game = GameState::new_game();
    let targets: HashSet<Square> = selection(&game, sq(7, 1)).into_iter().collect();
    assert_eq!(targets, [sq(5, 0), sq(5, 2)].into_iter().collect());
    assert!(selection(&game, sq(4, 4)).is_empty());
}

#[test]
fn session_refuses_unoffered_destinations_and_invalid_squares() {
    let mut session = ChessSession::new(SessionConfig::default());
    assert_eq!(
        session.play(sq(7, 0), sq(5, 0)),
        Err(ChessErrors::MoveNotSelected { from: sq(7, 0), to: sq(5, 0) })
    );
    assert_eq!(Square::new(-1, 3), Err(ChessErrors::InvalidSquare(-1, 3)));
    assert_eq!(session.game_state(), &GameState::new_game());
}

#[test]
fn independent_games_do_not_share_state() {
    let mut first = GameState::new_game();
    let second = GameState::new_game();
    execute_move(&mut first, sq(6, 4), sq(4, 4)).expect("e2-e4");
    assert_ne!(first, second);
    assert!(second.history().is_empty());
}
