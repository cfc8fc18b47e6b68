use super::board::Board;
use super::types::{BOARD_SIZE, Position, Side, WIN_LENGTH, WinningLine};

/// Row/column steps for horizontal, vertical, diagonal and anti-diagonal lines.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Must be called right after a stone was placed at (row, col).
pub fn check_win(board: &Board, row: usize, col: usize) -> bool {
    find_winning_line(board, row, col).is_some()
}

pub fn find_winning_line(board: &Board, row: usize, col: usize) -> Option<WinningLine> {
    if !Board::in_bounds(row, col) {
        return None;
    }
    let side = board.get(row, col).side()?;
    let origin = Position::new(row, col);

    for axis in AXES {
        let forward = count_direction(board, origin, axis, side);
        let backward = count_direction(board, origin, (-axis.0, -axis.1), side);

        if 1 + forward + backward >= WIN_LENGTH {
            let start = offset(origin, axis, -(backward as isize));
            let end = offset(origin, axis, forward as isize);
            return Some(WinningLine::new(side, start, end));
        }
    }

    None
}

/// Contiguous `side` stones on both sides of `pos` along `axis`, not counting `pos` itself.
pub fn run_length(board: &Board, pos: Position, axis: (isize, isize), side: Side) -> usize {
    count_direction(board, pos, axis, side) + count_direction(board, pos, (-axis.0, -axis.1), side)
}

fn count_direction(board: &Board, pos: Position, (dr, dc): (isize, isize), side: Side) -> usize {
    let target = side.to_cell();
    let mut count = 0;
    let mut r = pos.row as isize + dr;
    let mut c = pos.col as isize + dc;

    while r >= 0 && c >= 0 && r < BOARD_SIZE as isize && c < BOARD_SIZE as isize {
        if board.get(r as usize, c as usize) != target {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }

    count
}

fn offset(pos: Position, (dr, dc): (isize, isize), steps: isize) -> Position {
    Position::new(
        (pos.row as isize + dr * steps) as usize,
        (pos.col as isize + dc * steps) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn board_with(stones: &[(usize, usize, Side)]) -> Board {
        let mut board = Board::new();
        for &(row, col, side) in stones {
            board.place(row, col, side).unwrap();
        }
        board
    }

    /// Scans every cell and every five-cell window; used as the reference answer.
    fn has_five_through(board: &Board, row: usize, col: usize) -> bool {
        let Some(side) = board.get(row, col).side() else {
            return false;
        };
        for (dr, dc) in AXES {
            for shift in 0..WIN_LENGTH as isize {
                let start_r = row as isize - dr * shift;
                let start_c = col as isize - dc * shift;
                let all_match = (0..WIN_LENGTH as isize).all(|i| {
                    let r = start_r + dr * i;
                    let c = start_c + dc * i;
                    r >= 0
                        && c >= 0
                        && r < BOARD_SIZE as isize
                        && c < BOARD_SIZE as isize
                        && board.get(r as usize, c as usize) == side.to_cell()
                });
                if all_match {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn test_horizontal_five() {
        let board = board_with(&[
            (7, 7, Side::Black),
            (7, 8, Side::Black),
            (7, 9, Side::Black),
            (7, 10, Side::Black),
            (7, 11, Side::Black),
        ]);
        assert!(check_win(&board, 7, 11));
        assert!(check_win(&board, 7, 9));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = board_with(&[
            (3, 3, Side::White),
            (4, 3, Side::White),
            (5, 3, Side::White),
            (6, 3, Side::White),
        ]);
        assert!(!check_win(&board, 6, 3));
    }

    #[test]
    fn test_vertical_five_at_edge() {
        let board = board_with(&[
            (10, 0, Side::White),
            (11, 0, Side::White),
            (12, 0, Side::White),
            (13, 0, Side::White),
            (14, 0, Side::White),
        ]);
        assert!(check_win(&board, 14, 0));
    }

    #[test]
    fn test_diagonal_five_placed_in_middle() {
        let board = board_with(&[
            (0, 0, Side::Black),
            (1, 1, Side::Black),
            (2, 2, Side::Black),
            (3, 3, Side::Black),
            (4, 4, Side::Black),
        ]);
        assert!(check_win(&board, 2, 2));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let board = board_with(&[
            (0, 14, Side::Black),
            (1, 13, Side::Black),
            (2, 12, Side::Black),
            (3, 11, Side::Black),
            (4, 10, Side::Black),
        ]);
        assert!(check_win(&board, 4, 10));
        let line = find_winning_line(&board, 4, 10).unwrap();
        assert_eq!(line.start, Position::new(0, 14));
        assert_eq!(line.end, Position::new(4, 10));
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let board = board_with(&[
            (7, 5, Side::Black),
            (7, 6, Side::Black),
            (7, 7, Side::White),
            (7, 8, Side::Black),
            (7, 9, Side::Black),
            (7, 10, Side::Black),
        ]);
        assert!(!check_win(&board, 7, 8));
    }

    #[test]
    fn test_lines_are_not_merged_across_axes() {
        let board = board_with(&[
            (7, 5, Side::Black),
            (7, 6, Side::Black),
            (7, 7, Side::Black),
            (5, 7, Side::Black),
            (6, 7, Side::Black),
        ]);
        assert!(!check_win(&board, 7, 7));
    }

    #[test]
    fn test_overline_counts_as_win() {
        let stones: Vec<(usize, usize, Side)> = (2..9).map(|c| (0, c, Side::White)).collect();
        let board = board_with(&stones);
        assert!(check_win(&board, 0, 5));
        let line = find_winning_line(&board, 0, 5).unwrap();
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(0, 8));
    }

    #[test]
    fn test_empty_cell_is_never_a_win() {
        let board = Board::new();
        assert!(!check_win(&board, 7, 7));
        assert!(!check_win(&board, 99, 7));
    }

    #[test]
    fn test_run_length_excludes_origin() {
        let board = board_with(&[
            (7, 5, Side::Black),
            (7, 6, Side::Black),
            (7, 8, Side::Black),
            (7, 9, Side::White),
        ]);
        let pos = Position::new(7, 7);
        assert_eq!(run_length(&board, pos, (0, 1), Side::Black), 3);
        assert_eq!(run_length(&board, pos, (0, 1), Side::White), 0);
        assert_eq!(run_length(&board, pos, (1, 0), Side::Black), 0);
    }

    #[test]
    fn test_matches_window_scan_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut board = Board::new();
            let stones = rng.random_range(10..120);
            for _ in 0..stones {
                let row = rng.random_range(0..BOARD_SIZE);
                let col = rng.random_range(0..BOARD_SIZE);
                let side = if rng.random_bool(0.5) { Side::Black } else { Side::White };
                let _ = board.place(row, col, side);
            }
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    assert_eq!(check_win(&board, row, col), has_five_through(&board, row, col));
                }
            }
        }
    }
}
