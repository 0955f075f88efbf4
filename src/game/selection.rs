use std::collections::HashSet;

use crate::game::adjacency;
use crate::models::{Grid, Position};

/// The ordered, duplicate-free tile path of one drag gesture.
///
/// Two states: Idle (empty) and Active (one or more tiles). Moves that
/// break the path rules are silent no-ops, modeling a drag that passes
/// over a tile the gesture cannot use.
#[derive(Debug, Default)]
pub struct SelectionPath {
    tiles: Vec<Position>,
    // Mirrors `tiles` for O(1) duplicate checks.
    occupied: HashSet<Position>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// Begin a gesture at `position`. Only valid while Idle; returns false
    /// (and changes nothing) if a gesture is already in progress.
    pub fn start(&mut self, position: Position) -> bool {
        if self.is_active() {
            return false;
        }
        self.tiles.push(position);
        self.occupied.insert(position);
        true
    }

    /// Append `position` to the path. Accepted only while Active, and only
    /// when the tile is unused and adjacent to the current path head.
    pub fn extend(&mut self, position: Position, grid: &Grid) -> bool {
        let Some(last) = self.last() else {
            return false;
        };
        if !grid.contains(position)
            || self.occupied.contains(&position)
            || !adjacency::are_adjacent(last, position)
        {
            return false;
        }
        self.tiles.push(position);
        self.occupied.insert(position);
        true
    }

    /// Reset to Idle. Safe in any state; the ledger is never touched here.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.occupied.clear();
    }

    pub fn positions(&self) -> &[Position] {
        &self.tiles
    }

    pub fn last(&self) -> Option<Position> {
        self.tiles.last().copied()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.occupied.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The candidate word: path letters concatenated in selection order.
    /// Recomputed on demand, never cached.
    pub fn word(&self, grid: &Grid) -> String {
        self.tiles
            .iter()
            .filter_map(|position| grid.letter_at(*position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(vec![
            vec!['c', 'a', 'x', 'x'],
            vec!['x', 't', 'x', 'x'],
            vec!['x', 'x', 'x', 'x'],
            vec!['x', 'x', 'x', 'x'],
        ])
        .unwrap()
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut path = SelectionPath::new();
        assert!(path.start(Position::new(0, 0)));
        assert!(!path.start(Position::new(1, 1)));
        assert_eq!(path.len(), 1);
        assert_eq!(path.last(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_extend_requires_active() {
        let grid = grid();
        let mut path = SelectionPath::new();
        assert!(!path.extend(Position::new(0, 1), &grid));
        assert!(path.is_empty());
    }

    #[test]
    fn test_extend_follows_adjacency() {
        let grid = grid();
        let mut path = SelectionPath::new();
        path.start(Position::new(0, 0));
        assert!(path.extend(Position::new(0, 1), &grid));
        assert!(path.extend(Position::new(1, 1), &grid));
        assert_eq!(path.word(&grid), "CAT");
    }

    #[test]
    fn test_extend_rejects_non_neighbor() {
        let grid = grid();
        let mut path = SelectionPath::new();
        path.start(Position::new(0, 0));
        // Two cells away
        assert!(!path.extend(Position::new(0, 2), &grid));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_extend_rejects_duplicate() {
        let grid = grid();
        let mut path = SelectionPath::new();
        path.start(Position::new(0, 0));
        path.extend(Position::new(0, 1), &grid);
        assert!(!path.extend(Position::new(0, 0), &grid));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_extend_rejects_out_of_bounds() {
        let grid = grid();
        let mut path = SelectionPath::new();
        path.start(Position::new(0, 3));
        assert!(!path.extend(Position::new(0, 4), &grid));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_clear_resets_occupancy() {
        let grid = grid();
        let mut path = SelectionPath::new();
        path.start(Position::new(0, 0));
        path.extend(Position::new(0, 1), &grid);
        path.clear();
        assert!(path.is_empty());
        assert!(!path.is_active());
        // Tiles freed by the clear are selectable again
        assert!(path.start(Position::new(0, 1)));
    }

    #[test]
    fn test_single_tile_path_is_valid() {
        let grid = grid();
        let mut path = SelectionPath::new();
        path.start(Position::new(1, 1));
        assert_eq!(path.word(&grid), "T");
    }
}
