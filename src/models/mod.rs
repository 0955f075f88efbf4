pub mod game;

pub use game::{
    // Board types
    Grid, Position, Tile,
    // Render projection
    RenderSnapshot, TileHighlight, TileView,
    // Validation outcomes
    WordOutcome,
};
