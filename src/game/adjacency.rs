use crate::models::Position;

/// The 8 orthogonal and diagonal offsets as (row, col) deltas.
const DIRECTIONS: [(i64, i64); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// All in-bounds neighbors of `position` on a `size` x `size` grid.
/// At most 8 results; empty only on a 1x1 grid.
pub fn neighbors(position: Position, size: usize) -> Vec<Position> {
    let size = size as i64;
    DIRECTIONS
        .iter()
        .filter_map(|(row_delta, col_delta)| {
            let row = position.row as i64 + row_delta;
            let col = position.col as i64 + col_delta;
            if row >= 0 && col >= 0 && row < size && col < size {
                Some(Position::new(row as usize, col as usize))
            } else {
                None
            }
        })
        .collect()
}

/// Check if two positions are adjacent (including diagonals)
pub fn are_adjacent(pos1: Position, pos2: Position) -> bool {
    let row_diff = (pos1.row as i64 - pos2.row as i64).abs();
    let col_diff = (pos1.col as i64 - pos2.col as i64).abs();

    row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
}
