// Game engine modules

pub mod adjacency;
pub mod grid;
pub mod ledger;
pub mod selection;
pub mod session;
pub mod validator;

pub use grid::GridGenerator;
pub use ledger::WordLedger;
pub use selection::SelectionPath;
pub use session::{GameSession, SessionSettings};
pub use validator::WordValidator;
