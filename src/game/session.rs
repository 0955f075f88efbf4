use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dictionary::Dictionary;
use crate::game::grid::GridGenerator;
use crate::game::ledger::WordLedger;
use crate::game::selection::SelectionPath;
use crate::game::validator::WordValidator;
use crate::models::{Grid, Position, RenderSnapshot, TileHighlight, TileView, WordOutcome};

/// Per-session knobs surfaced to the host.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub grid_size: usize,
    pub min_word_length: usize,
    /// Whether `new_game` also forgets the submitted words. Off by default:
    /// a fresh board keeps the session's word history.
    pub reset_ledger_on_new_game: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            grid_size: 4,
            min_word_length: 1,
            reset_ledger_on_new_game: false,
        }
    }
}

/// One player's game state: board, in-progress selection, and accepted
/// words, driven through the gesture API. All transitions run synchronously
/// inside the caller's event handler; nothing here blocks or suspends.
pub struct GameSession {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    settings: SessionSettings,
    grid: Grid,
    selection: SelectionPath,
    ledger: WordLedger,
    validator: WordValidator,
    dictionary: Dictionary,
    dragging: bool,
}

impl GameSession {
    /// Start a session on a freshly generated board.
    pub fn new(settings: SessionSettings, dictionary: Dictionary) -> Self {
        let grid = GridGenerator::generate(settings.grid_size);
        Self::from_parts(settings, dictionary, grid)
    }

    /// Start a session on a fixed board, for hosts and tests that control
    /// the letters.
    pub fn with_grid(mut settings: SessionSettings, dictionary: Dictionary, grid: Grid) -> Self {
        settings.grid_size = grid.size();
        Self::from_parts(settings, dictionary, grid)
    }

    fn from_parts(settings: SessionSettings, dictionary: Dictionary, grid: Grid) -> Self {
        let session = Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            validator: WordValidator::new(settings.min_word_length),
            settings,
            grid,
            selection: SelectionPath::new(),
            ledger: WordLedger::new(),
            dictionary,
            dragging: false,
        };
        tracing::info!(
            "Session {} started: {}x{} grid, {} dictionary words",
            session.session_id,
            session.grid.size(),
            session.grid.size(),
            session.dictionary.len()
        );
        session
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &SelectionPath {
        &self.selection
    }

    /// Accepted words in submission order.
    pub fn submitted_words(&self) -> impl Iterator<Item = &str> {
        self.ledger.iter()
    }

    pub fn submitted_count(&self) -> usize {
        self.ledger.len()
    }

    // --- Gesture API ---

    /// Begin a selection at `position`. No-op if the position is off the
    /// board or a gesture is already active.
    pub fn start_selection(&mut self, position: Position) {
        if self.grid.contains(position) {
            self.selection.start(position);
        }
    }

    /// Try to extend the current selection; drags over non-adjacent or
    /// already-used tiles are ignored.
    pub fn extend_selection(&mut self, position: Position) {
        self.selection.extend(position, &self.grid);
    }

    /// Submit the current selection for validation, then reset to idle
    /// regardless of outcome. Returns `None` when no selection was active.
    pub fn end_selection(&mut self) -> Option<WordOutcome> {
        if self.selection.is_empty() {
            return None;
        }

        let candidate = self.selection.word(&self.grid);
        let outcome = self
            .validator
            .validate(&candidate, &mut self.ledger, &self.dictionary);
        self.selection.clear();

        match &outcome {
            WordOutcome::Accepted { word } => {
                tracing::info!(
                    "Session {} accepted '{}' ({} words total)",
                    self.session_id,
                    word,
                    self.ledger.len()
                );
            }
            WordOutcome::RejectedDuplicate { word } => {
                tracing::debug!("Session {} rejected duplicate '{}'", self.session_id, word);
            }
            WordOutcome::RejectedNotAWord { word } => {
                tracing::debug!("Session {} rejected unknown '{}'", self.session_id, word);
            }
        }

        Some(outcome)
    }

    /// Abort the current gesture without validating. The ledger is never
    /// touched.
    pub fn cancel_selection(&mut self) {
        self.dragging = false;
        self.selection.clear();
    }

    // --- Pointer-event adapter ---

    /// Pointer pressed, optionally over a tile.
    pub fn pointer_down(&mut self, at: Option<Position>) {
        self.dragging = true;
        if let Some(position) = at {
            self.start_selection(position);
        }
    }

    /// Pointer moved while possibly held. Ignored unless a press is active.
    /// A press that began off the board starts its path on the first tile
    /// the pointer reaches.
    pub fn pointer_moved(&mut self, at: Option<Position>) {
        if !self.dragging {
            return;
        }
        let Some(position) = at else {
            return;
        };
        if self.selection.is_empty() {
            self.start_selection(position);
        } else {
            self.extend_selection(position);
        }
    }

    /// Pointer released: submit whatever was selected.
    pub fn pointer_up(&mut self) -> Option<WordOutcome> {
        self.dragging = false;
        self.end_selection()
    }

    // --- Lifecycle ---

    /// Discard the board and generate a fresh one. The selection always
    /// resets; the ledger only when configured to.
    pub fn new_game(&mut self) {
        self.grid = GridGenerator::generate(self.settings.grid_size);
        self.selection.clear();
        self.dragging = false;
        if self.settings.reset_ledger_on_new_game {
            self.ledger.clear();
        }
        tracing::info!(
            "Session {} reset with a fresh {}x{} grid ({} words kept)",
            self.session_id,
            self.grid.size(),
            self.grid.size(),
            self.ledger.len()
        );
    }

    // --- Render projection ---

    /// Pure read of the current state for a renderer. The would-be-valid
    /// probe runs against the in-progress path without committing anything.
    pub fn snapshot(&self) -> RenderSnapshot {
        let candidate_word = if self.selection.is_active() {
            Some(self.selection.word(&self.grid))
        } else {
            None
        };

        let would_be_valid = candidate_word
            .as_deref()
            .map(|word| self.validator.probe(word, &self.ledger, &self.dictionary))
            .unwrap_or(false);

        let tiles = self
            .grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|tile| TileView {
                        letter: tile.letter,
                        highlight: if !self.selection.contains(tile.position) {
                            TileHighlight::NotSelected
                        } else if would_be_valid {
                            TileHighlight::SelectedValid
                        } else {
                            TileHighlight::SelectedInvalid
                        },
                    })
                    .collect()
            })
            .collect();

        RenderSnapshot {
            session_id: self.session_id,
            grid_size: self.grid.size(),
            tiles,
            path: self.selection.positions().to_vec(),
            candidate_word,
            submitted_words: self.submitted_words().map(str::to_string).collect(),
        }
    }
}
