// Turn and phase engine for a pass-the-device "find the impostor" party game

pub mod catalog;
pub mod config;
pub mod preferences;
pub mod protocol;
pub mod reducer;
pub mod session;
pub mod state;
pub mod types;

pub use protocol::Action;
pub use reducer::{apply, apply_with_rng};
pub use session::GameSession;
pub use state::GameState;
