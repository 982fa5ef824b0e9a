mod outcome;
mod reveal;
mod roster;
mod round;
mod settings;
mod view;
mod vote;

pub use outcome::check_win_condition;
pub use roster::{create_players, default_player_name, pick_impostor_indices, shuffled_order};
pub use vote::{tally_votes, Tally};

use crate::types::*;
use serde::{Deserialize, Serialize};

/// Reasons an action leaves the state untouched.
///
/// These never escape the reducer; they exist so ignored actions can be
/// logged with a cause.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("{action} is not allowed during {phase:?}")]
    WrongPhase {
        action: &'static str,
        phase: GamePhase,
    },

    #[error("player count {0} is outside {min}..={max}", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    PlayerCountOutOfRange(usize),

    #[error("no category selected")]
    NoCategory,

    #[error("category '{0}' has no words")]
    EmptyCategory(CategoryId),

    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),

    #[error("player {0} has been eliminated")]
    PlayerEliminated(PlayerId),

    #[error("player {0} already voted this subround")]
    AlreadyVoted(PlayerId),

    #[error("player {0} cannot vote for themselves")]
    SelfVote(PlayerId),

    #[error("skipping a vote is disabled")]
    SkipVoteDisabled,

    #[error("no win condition has been met yet")]
    GameNotDecided,

    #[error("a win condition has already been met")]
    GameAlreadyDecided,
}

pub type TransitionResult = Result<GameState, Rejection>;

/// The whole game: settings, the round's roster and the phase machine.
///
/// Only the reducer produces new values of this type. Derived views
/// (current player, current voter, alive subsets) are computed on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GameState {
    pub phase: GamePhase,
    pub players: Vec<Player>,
    pub settings: GameSettings,
    /// Position within `pass_order` of the player holding the device
    pub current_player_index: usize,
    /// Roster indices in role-reveal order, reshuffled every round
    pub pass_order: Vec<usize>,
    pub secret_word: String,
    pub round: u32,
    pub vote_round: u32,
    pub last_vote_result: Option<VoteRoundResult>,
    /// Every subround result of the current round, oldest first
    pub vote_history: Vec<VoteRoundResult>,
    pub game_result: Option<GameResult>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn require_phase(
        &self,
        action: &'static str,
        allowed: &[GamePhase],
    ) -> Result<(), Rejection> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(Rejection::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    pub(crate) fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}
