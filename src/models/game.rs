use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A grid coordinate. `row` and `col` are both in `[0, grid size)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single grid cell: a fixed coordinate and an uppercase letter,
/// immutable once the grid is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    pub letter: char,
}

/// A square board of tiles. Every in-range coordinate maps to exactly one
/// tile and the size is fixed for the lifetime of the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// Assemble a grid from pre-positioned rows. Callers guarantee the
    /// rows are square; `GridGenerator` is the usual entry point.
    pub(crate) fn from_cells(cells: Vec<Vec<Tile>>) -> Self {
        let size = cells.len();
        Self { size, cells }
    }

    /// Build a grid with fixed letters, row by row. Returns `None` when the
    /// rows are empty or not square. Intended for hosts and tests that need
    /// a known board instead of a random one.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return None;
        }

        let cells = rows
            .into_iter()
            .enumerate()
            .map(|(row, letters)| {
                letters
                    .into_iter()
                    .enumerate()
                    .map(|(col, letter)| Tile {
                        position: Position::new(row, col),
                        letter: letter.to_ascii_uppercase(),
                    })
                    .collect()
            })
            .collect();

        Some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.cells.get(position.row)?.get(position.col)
    }

    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.get(position).map(|tile| tile.letter)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.cells
    }
}

/// Classified result of submitting a selection path as a word.
/// Rejections are outcomes, not errors; nothing in the core throws.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WordOutcome {
    Accepted { word: String },
    RejectedDuplicate { word: String },
    RejectedNotAWord { word: String },
}

impl WordOutcome {
    pub fn word(&self) -> &str {
        match self {
            WordOutcome::Accepted { word }
            | WordOutcome::RejectedDuplicate { word }
            | WordOutcome::RejectedNotAWord { word } => word,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, WordOutcome::Accepted { .. })
    }
}

/// Highlight state a renderer applies to a tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TileHighlight {
    NotSelected,
    /// On the current path, and the path would be accepted if submitted now.
    SelectedValid,
    /// On the current path, but the path would be rejected if submitted now.
    SelectedInvalid,
}

/// One tile as a renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileView {
    pub letter: char,
    pub highlight: TileHighlight,
}

/// Read-only projection of session state for a renderer: consumed once per
/// tick, never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub session_id: Uuid,
    pub grid_size: usize,
    pub tiles: Vec<Vec<TileView>>,
    /// The in-progress path, in selection order.
    pub path: Vec<Position>,
    /// Letters of the in-progress path, or `None` while idle.
    pub candidate_word: Option<String>,
    /// Accepted words in submission order.
    pub submitted_words: Vec<String>,
}
