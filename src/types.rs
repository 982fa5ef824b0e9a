use serde::{Deserialize, Serialize};

/// 1-based player id, stable for the lifetime of one round
pub type PlayerId = u32;
pub type CategoryId = String;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 10;
pub const MIN_IMPOSTORS: usize = 1;

/// Word shown to impostors in place of the secret word
pub const IMPOSTOR_WORD: &str = "???";

pub const DEFAULT_PLAYER_COUNT: usize = 5;
pub const DEFAULT_IMPOSTOR_COUNT: usize = 1;
pub const DEFAULT_DISCUSSION_SECONDS: u32 = 180;

/// Largest impostor count that still leaves crewmates in the majority.
pub fn max_impostors(player_count: usize) -> usize {
    (player_count.saturating_sub(1) / 3).max(MIN_IMPOSTORS)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    #[default]
    Idle,
    Passing,
    Revealing,
    Hiding,
    Discussion,
    Voting,
    VotingResults,
    Results,
}

impl GamePhase {
    /// Whether a round is in progress (roster exists and has not finished)
    pub fn is_active_round(&self) -> bool {
        !matches!(self, GamePhase::Idle | GamePhase::Results)
    }
}

/// Reference data: a themed list of candidate secret words
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub words: Vec<String>,
    #[serde(default)]
    pub is_custom: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "player_id", rename_all = "lowercase")]
pub enum VoteTarget {
    Player(PlayerId),
    Abstain,
}

impl VoteTarget {
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            VoteTarget::Player(id) => Some(*id),
            VoteTarget::Abstain => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub is_impostor: bool,
    pub secret_word: String,
    pub has_seen_role: bool,
    pub has_voted: bool,
    /// `None` until the player votes in the current subround
    pub voted_for: Option<VoteTarget>,
    pub is_eliminated: bool,
    /// Informational copy of the last tally; the tally itself is authoritative
    pub votes_received: u32,
}

impl Player {
    pub fn is_alive(&self) -> bool {
        !self.is_eliminated
    }

    /// Same player with this subround's vote bookkeeping cleared
    pub fn with_fresh_vote(&self) -> Self {
        Self {
            has_voted: false,
            voted_for: None,
            votes_received: 0,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub player_count: usize,
    pub impostor_count: usize,
    /// Seconds of discussion, 0 = unlimited
    pub discussion_time: u32,
    pub selected_category: Option<Category>,
    pub show_timer: bool,
    pub allow_skip_vote: bool,
    /// Custom names by seat index; blank entries fall back to "Player N"
    pub player_names: Vec<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            impostor_count: DEFAULT_IMPOSTOR_COUNT,
            discussion_time: DEFAULT_DISCUSSION_SECONDS,
            selected_category: None,
            show_timer: true,
            allow_skip_vote: true,
            player_names: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Crewmates,
    Impostors,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    ImpostorsEliminated,
    ImpostorMajority,
}

impl EndReason {
    pub fn winner(&self) -> Team {
        match self {
            EndReason::ImpostorsEliminated => Team::Crewmates,
            EndReason::ImpostorMajority => Team::Impostors,
        }
    }
}

/// One row of a subround tally, for an alive player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteSummary {
    pub player_id: PlayerId,
    pub player_name: String,
    pub votes_received: u32,
    pub voted_for: Option<VoteTarget>,
}

/// Outcome of one voting subround
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRoundResult {
    pub vote_round: u32,
    pub eliminated_player: Option<Player>,
    pub was_impostor: bool,
    pub is_tie: bool,
    pub vote_summary: Vec<VoteSummary>,
    pub game_ended: bool,
    pub end_reason: Option<EndReason>,
}

/// Terminal summary of a round, possibly spanning several subrounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Team,
    pub end_reason: EndReason,
    pub crewmates_win: bool,
    pub impostors_win: bool,
    pub vote_rounds: Vec<VoteRoundResult>,
    pub survivors: Vec<Player>,
    pub eliminated: Vec<Player>,
}
