use super::types::{Mark, Move};

pub const BOARD_SIZE: usize = 3;

/// Every triple that wins: rows, columns, then both diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<Mark> {
    check_win_with_line(cells).map(|(mark, _)| mark)
}

pub fn check_win_with_line(
    cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE],
) -> Option<(Mark, [Move; 3])> {
    for line in &LINES {
        let [a, b, c] = *line;
        let mark = cells[a.0][a.1];
        if mark == Mark::Empty {
            continue;
        }
        if cells[b.0][b.1] == mark && cells[c.0][c.1] == mark {
            return Some((
                mark,
                [
                    Move::new(a.0, a.1),
                    Move::new(b.0, b.1),
                    Move::new(c.0, c.1),
                ],
            ));
        }
    }
    None
}
