use gomoku_core::games::gomoku::{BOARD_SIZE, Cell, GameStatus, GomokuGameState, Position, Side};

pub fn render_board(state: &GomokuGameState) -> String {
    let highlighted = winning_cells(state);
    let last = state.last_move().map(|mv| mv.position());

    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for (row, cells) in state.board().rows().iter().enumerate() {
        out.push_str(&format!("{:>3}", row));
        for (col, &cell) in cells.iter().enumerate() {
            let pos = Position::new(row, col);
            let symbol = if highlighted.contains(&pos) {
                '*'
            } else if Some(pos) == last {
                match cell {
                    Cell::Black => 'x',
                    Cell::White => 'o',
                    Cell::Empty => '.',
                }
            } else {
                match cell {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                }
            };
            out.push_str(&format!("{:>3}", symbol));
        }
        out.push('\n');
    }

    out.push_str(&status_line(state));
    out
}

pub fn status_line(state: &GomokuGameState) -> String {
    match state.status() {
        GameStatus::InProgress => {
            let side = state.side_to_move();
            if state.mode().computer_side() == Some(side) {
                format!("{} (computer) to move", side_name(side))
            } else {
                format!("{} to move", side_name(side))
            }
        }
        GameStatus::BlackWon | GameStatus::WhiteWon => {
            let winner = state.status().winner().map_or("Nobody", side_name);
            format!("{} wins after {} moves. 'undo' or 'reset' to continue.", winner, state.ledger().len())
        }
        GameStatus::Draw => "Draw: the board is full. 'undo' or 'reset' to continue.".to_string(),
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Black => "Black (X)",
        Side::White => "White (O)",
    }
}

fn winning_cells(state: &GomokuGameState) -> Vec<Position> {
    let Some(line) = state.winning_line() else {
        return Vec::new();
    };

    let step_row = (line.end.row as isize - line.start.row as isize).signum();
    let step_col = (line.end.col as isize - line.start.col as isize).signum();
    let mut cells = vec![line.start];
    let mut current = line.start;
    while current != line.end {
        current = Position::new(
            (current.row as isize + step_row) as usize,
            (current.col as isize + step_col) as usize,
        );
        cells.push(current);
    }
    cells
}
