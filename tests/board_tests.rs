//! Board tests - grid storage, bounds and row clearing

use blockfall::core::{pieces, Board};
use blockfall::types::{Cell, Color, BOARD_COLUMNS, BOARD_ROWS};

const ROWS: usize = BOARD_ROWS as usize;
const COLUMNS: usize = BOARD_COLUMNS as usize;

/// Fill a row except for the listed columns
fn fill_row_except(board: &mut Board, row: i8, holes: &[i8], color: Color) {
    for column in 0..BOARD_COLUMNS as i8 {
        if !holes.contains(&column) {
            board.set(row, column, Some(color));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.columns(), BOARD_COLUMNS);
    assert_eq!(board.cells().len(), ROWS * COLUMNS);

    for row in 0..BOARD_ROWS as i8 {
        for column in 0..BOARD_COLUMNS as i8 {
            assert_eq!(board.get(row, column), Some(None));
            assert!(!board.is_cell_filled(row, column));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_ROWS as i8, 0), None);
    assert_eq!(board.get(0, BOARD_COLUMNS as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(10, 5, Some(Color::Purple)));
    assert_eq!(board.get(10, 5), Some(Some(Color::Purple)));
    assert!(board.is_cell_filled(10, 5));

    assert!(board.set(10, 5, None));
    assert_eq!(board.get(10, 5), Some(None));
    assert!(!board.is_cell_filled(10, 5));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(Color::Red)));
    assert!(!board.set(0, -1, Some(Color::Red)));
    assert!(!board.set(BOARD_ROWS as i8, 0, Some(Color::Red)));
    assert!(!board.set(0, BOARD_COLUMNS as i8, Some(Color::Red)));
    assert_eq!(board, Board::new());
}

#[test]
fn test_walls_and_floor_are_filled() {
    let board = Board::new();
    for row in 0..BOARD_ROWS as i8 {
        assert!(board.is_cell_filled(row, -1));
        assert!(board.is_cell_filled(row, BOARD_COLUMNS as i8));
    }
    for column in 0..BOARD_COLUMNS as i8 {
        assert!(board.is_cell_filled(BOARD_ROWS as i8, column));
        assert!(board.is_cell_filled(-1, column));
    }
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    fill_row_except(&mut board, 21, &[9], Color::Blue);
    assert!(!board.is_row_full(21));
    assert_eq!(board.fill_count(21), 9);

    board.set(21, 9, Some(Color::Red));
    assert!(board.is_row_full(21));
    assert!(!board.is_row_full(ROWS));
}

#[test]
fn test_remove_filled_rows_without_full_rows_is_identity() {
    let mut board = Board::new();
    fill_row_except(&mut board, 21, &[4], Color::Green);
    fill_row_except(&mut board, 20, &[0, 1], Color::Yellow);
    board.set(3, 7, Some(Color::Cyan));

    let before = board.clone();
    let cleared = board.remove_filled_rows();
    assert!(cleared.is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_remove_single_row_shifts_rows_above() {
    let mut board = Board::new();
    board.fill_row(21, Color::Red);
    fill_row_except(&mut board, 20, &[3], Color::Blue);
    board.set(19, 0, Some(Color::Green));

    let row_20 = board.row(20).unwrap().to_vec();
    let row_19 = board.row(19).unwrap().to_vec();

    let cleared = board.remove_filled_rows();
    assert_eq!(cleared.as_slice(), &[21]);
    assert_eq!(board.cells().len(), ROWS * COLUMNS);
    assert_eq!(board.row(21).unwrap(), row_20.as_slice());
    assert_eq!(board.row(20).unwrap(), row_19.as_slice());
    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_remove_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row(21, Color::Red);
    board.set(20, 0, Some(Color::Cyan));
    board.fill_row(19, Color::Red);
    board.set(18, 1, Some(Color::Orange));

    let cleared = board.remove_filled_rows();
    assert_eq!(cleared.as_slice(), &[21, 19]);

    let mut expected: [[Cell; COLUMNS]; ROWS] = [[None; COLUMNS]; ROWS];
    expected[21][0] = Some(Color::Cyan);
    expected[20][1] = Some(Color::Orange);
    assert_eq!(board.to_rows(), expected);
}

#[test]
fn test_removed_rows_only_shift_rows_above_them() {
    let mut a = Board::new();
    let mut b = Board::new();
    for board in [&mut a, &mut b] {
        board.fill_row(21, Color::Red);
        board.fill_row(17, Color::Red);
        board.fill_row(12, Color::Red);
        board.set(15, 2, Some(Color::Blue));
    }
    a.remove_filled_rows();
    b.remove_filled_rows();
    b.remove_filled_rows();
    assert_eq!(a, b);
    assert_eq!(a.get(17, 2), Some(Some(Color::Blue)));
}

#[test]
fn test_lock_piece_refuses_out_of_bounds() {
    let mut board = Board::new();
    let mut i = pieces::i_piece();
    // Horizontal I sits on row 1 of its grid: row 21 + 1 is below the floor.
    i.move_to(21, 0);
    assert!(!board.lock_piece(&i));
    assert_eq!(board, Board::new());

    i.move_to(20, 0);
    assert!(board.lock_piece(&i));
    assert!(!board.is_row_full(21));
    assert_eq!(board.fill_count(21), 4);
}

#[test]
fn test_clear_empties_board() {
    let mut board = Board::new();
    board.fill_row(5, Color::Yellow);
    board.clear();
    assert_eq!(board, Board::default());
}

#[test]
#[should_panic(expected = "exactly 22 rows")]
fn test_from_rows_wrong_height_panics() {
    let rows: [[Cell; COLUMNS]; 10] = [[None; COLUMNS]; 10];
    Board::from_rows(&rows);
}
