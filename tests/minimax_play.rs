//! Test suite for the Tic-Tac-Toe engine
//! Validates the game-state invariants and optimal-play guarantees

use gridmind::tictactoe::{Action, Board, Cell, Player, minimax};

mod state_model {
    use super::*;

    #[test]
    fn player_alternates_under_repeated_result() {
        let mut board = Board::new();
        let mut expected = Player::X;

        for action in [
            Action::new(0, 0),
            Action::new(1, 1),
            Action::new(0, 1),
            Action::new(2, 2),
        ] {
            assert_eq!(board.player(), expected);
            board = board.make_move(action).unwrap();
            expected = expected.opponent();
        }
        assert_eq!(board.player(), expected);
    }

    #[test]
    fn first_move_places_x_and_nothing_else() {
        let board = Board::new().make_move(Action::new(0, 0)).unwrap();
        assert_eq!(board.get(0, 0), Cell::X);
        assert_eq!(
            board.cells().iter().filter(|&&c| c == Cell::Empty).count(),
            8,
            "every other cell must stay empty"
        );
    }

    #[test]
    fn upper_bound_is_validated_not_just_lower() {
        // Unsigned coordinates make negative input unrepresentable; the
        // upper bound still needs an explicit check.
        let board = Board::new();
        assert!(
            matches!(
                board.make_move(Action::new(3, 1)),
                Err(gridmind::Error::OutOfBounds { row: 3, col: 1 })
            ),
            "row past the edge must be rejected"
        );
        assert!(
            matches!(
                board.make_move(Action::new(1, 3)),
                Err(gridmind::Error::OutOfBounds { row: 1, col: 3 })
            ),
            "column past the edge must be rejected"
        );
    }

    #[test]
    fn completed_line_owner_wins() {
        let board = Board::from_string("O.X.OXX.O").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert!(board.is_terminal());
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn full_board_without_line_is_a_terminal_draw() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn board_serde_round_trip() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}

mod optimal_play {
    use super::*;

    #[test]
    fn minimax_returns_no_move_on_terminal_boards() {
        let won = Board::from_string("XXXOO....").unwrap();
        assert_eq!(minimax(&won), None);

        let full = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(minimax(&full), None);
    }

    #[test]
    fn minimax_takes_an_immediate_win() {
        // X X . with O threatening the middle row: only (0, 2) is optimal.
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn minimax_blocks_an_immediate_loss() {
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(board.player(), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn minimax_produces_a_legal_opening() {
        let board = Board::new();
        let action = minimax(&board).expect("empty board is not terminal");
        assert!(board.make_move(action).is_ok());
    }

    #[test]
    fn self_play_ends_in_a_draw() {
        let mut board = Board::new();
        while !board.is_terminal() {
            let action = minimax(&board).expect("non-terminal board must yield a move");
            board = board.make_move(action).unwrap();
        }
        assert_eq!(
            board.utility(),
            0,
            "optimal play on both sides must draw:\n{board}"
        );
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn minimax_never_loses_as_second_player_against_greedy_openings() {
        // O plays minimax against an X that always takes the first free
        // cell in row-major order; O must never lose.
        let mut board = Board::new();
        while !board.is_terminal() {
            let action = match board.player() {
                Player::X => board.actions()[0],
                Player::O => minimax(&board).expect("non-terminal board must yield a move"),
            };
            board = board.make_move(action).unwrap();
        }
        assert!(
            board.utility() <= 0,
            "minimax O should never lose, final board:\n{board}"
        );
    }
}
