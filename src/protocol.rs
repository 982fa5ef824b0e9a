use crate::types::*;
use serde::{Deserialize, Serialize};

/// Every command the UI can dispatch into the game engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Action {
    // Setup
    SetPlayerCount {
        count: usize,
    },
    SetImpostorCount {
        count: usize,
    },
    SetCategory {
        category: Category,
    },
    SetDiscussionTime {
        seconds: u32,
    },
    SetPlayerNames {
        names: Vec<String>,
    },
    SetAllowSkipVote {
        allow: bool,
    },
    SetShowTimer {
        show: bool,
    },
    StartGame,

    // Role reveal pass-around
    PlayerReady,
    PlayerSawRole,
    HideRole,
    StartDiscussion,

    // Discussion and voting
    /// Fired by the UI's discussion countdown; same as `StartVoting`
    DiscussionTimeUp,
    StartVoting,
    CastVote {
        voter_id: PlayerId,
        target: VoteTarget,
    },
    /// Tally now, counting missing votes as abstentions
    CalculateResults,
    ContinueGame,
    EndGame,

    // Between rounds
    NewRound,
    ResetGame,
}

impl Action {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetPlayerCount { .. } => "set_player_count",
            Action::SetImpostorCount { .. } => "set_impostor_count",
            Action::SetCategory { .. } => "set_category",
            Action::SetDiscussionTime { .. } => "set_discussion_time",
            Action::SetPlayerNames { .. } => "set_player_names",
            Action::SetAllowSkipVote { .. } => "set_allow_skip_vote",
            Action::SetShowTimer { .. } => "set_show_timer",
            Action::StartGame => "start_game",
            Action::PlayerReady => "player_ready",
            Action::PlayerSawRole => "player_saw_role",
            Action::HideRole => "hide_role",
            Action::StartDiscussion => "start_discussion",
            Action::DiscussionTimeUp => "discussion_time_up",
            Action::StartVoting => "start_voting",
            Action::CastVote { .. } => "cast_vote",
            Action::CalculateResults => "calculate_results",
            Action::ContinueGame => "continue_game",
            Action::EndGame => "end_game",
            Action::NewRound => "new_round",
            Action::ResetGame => "reset_game",
        }
    }
}
