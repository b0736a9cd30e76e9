//! Property-based tests for the game engine
//!
//! These tests verify:
//! - Gravity: tokens land in the lowest empty row, other columns untouched
//! - Rejected moves leave the engine unchanged
//! - Terminal states accept nothing until reset
//! - Preview agrees with the following drop and never mutates

use connect_four::error::MoveError;
use connect_four::game::{Cell, DropResult, GameEngine, GameStatus, Player, Position, COLS, ROWS};
use proptest::prelude::*;

/// 42 moves that fill the board without four in a row anywhere.
const TIE_SEQUENCE: [usize; 42] = [
    3, 4, 4, 6, 0, 3, 5, 2, 6, 5, 0, 6, 5, 0, 3, 6, 5, 6, 1, 3, 1, 3, 6, 5, 2, 0, 5, 3, 4, 4, 0,
    1, 1, 1, 0, 1, 4, 2, 4, 2, 2, 2,
];

fn empty_counts(engine: &GameEngine) -> [usize; COLS] {
    let mut counts = [0; COLS];
    for (col, count) in counts.iter_mut().enumerate() {
        *count = engine.board().empty_in_column(col);
    }
    counts
}

/// No column holds an empty cell below a token.
fn gravity_holds(engine: &GameEngine) -> bool {
    (0..COLS).all(|col| {
        (0..ROWS - 1).all(|row| {
            engine.cell(row, col) == Cell::Empty || engine.cell(row + 1, col) != Cell::Empty
        })
    })
}

/// Column choices, including some off the board.
fn moves_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(prop_oneof![9 => 0usize..COLS, 1 => COLS..COLS + 3], 0..80)
}

fn play(engine: &mut GameEngine, moves: &[usize]) {
    for &col in moves {
        engine.drop_token(col);
    }
}

// =============================================================================
// Gravity and column accounting
// =============================================================================

proptest! {
    /// Every accepted drop fills the previewed cell and only that column shrinks
    #[test]
    fn drops_obey_gravity(moves in moves_strategy()) {
        let mut engine = GameEngine::new();

        for col in moves {
            let before = engine.clone();
            let counts_before = empty_counts(&engine);
            let preview = engine.preview_column(col);

            let result = engine.drop_token(col);
            let counts_after = empty_counts(&engine);

            match result.cell() {
                Some(cell) => {
                    prop_assert_eq!(Some(cell), preview);
                    prop_assert_eq!(cell.col, col);
                    prop_assert_eq!(
                        engine.cell(cell.row, cell.col),
                        before.current_player().to_cell()
                    );
                    for c in 0..COLS {
                        let taken = usize::from(c == col);
                        prop_assert_eq!(counts_after[c], counts_before[c] - taken);
                    }
                }
                None => {
                    prop_assert_eq!(&engine, &before);
                }
            }
            prop_assert!(gravity_holds(&engine));
        }
    }

    /// A column with no empty cell rejects the drop without changing anything
    #[test]
    fn full_column_is_rejected(
        col in 0usize..COLS,
        others in prop::collection::vec(0usize..COLS, 0..4),
    ) {
        let mut engine = GameEngine::new();
        // Stacking one column alternates owners, so it never wins on its own
        play(&mut engine, &[col; ROWS]);
        prop_assert!(engine.board().is_column_full(col));
        prop_assert_eq!(engine.status(), GameStatus::Active);

        let before = engine.clone();
        prop_assert_eq!(
            engine.drop_token(col),
            DropResult::InvalidMove(MoveError::ColumnFull(col))
        );
        prop_assert_eq!(&engine, &before);

        // Still full after play moves on elsewhere
        for other in others.into_iter().filter(|&c| c != col) {
            engine.drop_token(other);
        }
        prop_assert_eq!(engine.drop_token(col).cell(), None);
    }

    /// Off-board columns are always rejected
    #[test]
    fn off_board_column_is_rejected(col in COLS..usize::MAX, moves in moves_strategy()) {
        let mut engine = GameEngine::new();
        play(&mut engine, &moves);
        let before = engine.clone();

        let expected = if engine.status().is_terminal() {
            MoveError::GameOver
        } else {
            MoveError::InvalidColumn(col)
        };
        prop_assert_eq!(engine.drop_token(col), DropResult::InvalidMove(expected));
        prop_assert_eq!(engine, before);
    }
}

// =============================================================================
// Preview, terminal states, reset
// =============================================================================

proptest! {
    /// Previewing never mutates and predicts the next drop
    #[test]
    fn preview_is_read_only(col in 0usize..COLS + 2, moves in moves_strategy()) {
        let mut engine = GameEngine::new();
        play(&mut engine, &moves);
        let before = engine.clone();

        let preview = engine.preview_column(col);
        prop_assert_eq!(&engine, &before);

        if engine.status() == GameStatus::Active {
            prop_assert_eq!(engine.drop_token(col).cell(), preview);
        }
    }

    /// After a win or tie every drop is rejected until reset
    #[test]
    fn terminal_state_blocks_moves(
        moves in moves_strategy(),
        extra in prop::collection::vec(0usize..COLS, 1..10),
    ) {
        let mut engine = GameEngine::new();
        play(&mut engine, &moves);
        if !engine.status().is_terminal() {
            return Ok(());
        }

        let before = engine.clone();
        for col in extra {
            prop_assert_eq!(
                engine.drop_token(col),
                DropResult::InvalidMove(MoveError::GameOver)
            );
        }
        prop_assert_eq!(&engine, &before);

        engine.reset();
        prop_assert!(engine.drop_token(0).cell().is_some());
    }

    /// Reset always yields a fresh game
    #[test]
    fn reset_restores_fresh_game(moves in moves_strategy()) {
        let mut engine = GameEngine::new();
        play(&mut engine, &moves);
        engine.reset();

        prop_assert_eq!(engine.status(), GameStatus::Active);
        prop_assert_eq!(engine.current_player(), Player::One);
        prop_assert!(engine.winning_cells().is_empty());
        for row in 0..ROWS {
            for col in 0..COLS {
                prop_assert_eq!(engine.cell(row, col), Cell::Empty);
            }
        }
    }

    /// A reported winning line is a straight run of the winner's tokens through the last drop
    #[test]
    fn winning_line_is_a_real_run(moves in moves_strategy()) {
        let mut engine = GameEngine::new();
        for col in moves {
            if let DropResult::Won { cell, player, winning_cells } = engine.drop_token(col) {
                prop_assert!(winning_cells.len() >= 4);
                prop_assert!(winning_cells.contains(&cell));
                for pos in &winning_cells {
                    prop_assert_eq!(engine.cell(pos.row, pos.col), player.to_cell());
                }

                let dr = winning_cells[1].row as isize - winning_cells[0].row as isize;
                let dc = winning_cells[1].col as isize - winning_cells[0].col as isize;
                for pair in winning_cells.windows(2) {
                    prop_assert_eq!(pair[1].row as isize - pair[0].row as isize, dr);
                    prop_assert_eq!(pair[1].col as isize - pair[0].col as isize, dc);
                }
                prop_assert_eq!(engine.winner(), Some(player));
                prop_assert_eq!(engine.winning_cells(), winning_cells.as_slice());
                break;
            }
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn horizontal_win_on_bottom_row() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 0, 1, 1, 2, 2]);

    let result = engine.drop_token(3);
    assert_eq!(
        result,
        DropResult::Won {
            cell: Position::new(5, 3),
            player: Player::One,
            winning_cells: vec![
                Position::new(5, 0),
                Position::new(5, 1),
                Position::new(5, 2),
                Position::new(5, 3),
            ],
        }
    );
}

#[test]
fn vertical_win_with_opponent_elsewhere() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 0, 5, 0, 6]);

    match engine.drop_token(0) {
        DropResult::Won {
            player,
            winning_cells,
            ..
        } => {
            assert_eq!(player, Player::One);
            assert!(winning_cells.iter().all(|pos| pos.col == 0));
            assert_eq!(winning_cells.len(), 4);
        }
        other => panic!("expected vertical win, got {other:?}"),
    }
}

#[test]
fn full_board_without_line_is_a_tie() {
    let mut engine = GameEngine::new();
    let (last, rest) = TIE_SEQUENCE.split_last().unwrap();
    for &col in rest {
        let result = engine.drop_token(col);
        assert!(
            matches!(result, DropResult::Continued { .. }),
            "unexpected {result:?} on column {col}"
        );
    }
    assert_eq!(engine.status(), GameStatus::Active);

    assert_eq!(
        engine.drop_token(*last),
        DropResult::Tied {
            cell: Position::new(0, 2)
        }
    );
    assert_eq!(engine.status(), GameStatus::Tie);
    assert_eq!(engine.winner(), None);
    assert!(engine.board().is_full());
    assert_eq!(engine.move_count(), 42);
    assert_eq!(engine.drop_token(3), DropResult::InvalidMove(MoveError::GameOver));
}
