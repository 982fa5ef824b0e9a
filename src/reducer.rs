//! Action dispatch
//!
//! The single entry point that turns `(state, action)` into the next state.
//! Every action is total: anything that does not apply in the current state
//! is logged and the state comes back unchanged.

use crate::protocol::Action;
use crate::state::{GameState, TransitionResult};
use rand::Rng;

/// Apply `action` using the thread-local RNG
pub fn apply(state: GameState, action: Action) -> GameState {
    apply_with_rng(state, action, &mut rand::rng())
}

/// Apply `action`, drawing any randomness (word, impostors, reveal order) from `rng`
pub fn apply_with_rng<R: Rng + ?Sized>(state: GameState, action: Action, rng: &mut R) -> GameState {
    let name = action.name();
    let before = state.phase;

    match transition(&state, action, rng) {
        Ok(next) => {
            if next.phase != before {
                tracing::debug!("{}: {:?} -> {:?}", name, before, next.phase);
            } else {
                tracing::debug!("{} applied during {:?}", name, before);
            }
            next
        }
        Err(rejection) => {
            tracing::debug!("Ignoring {}: {}", name, rejection);
            state
        }
    }
}

fn transition<R: Rng + ?Sized>(state: &GameState, action: Action, rng: &mut R) -> TransitionResult {
    match action {
        // Setup
        Action::SetPlayerCount { count } => state.set_player_count(count),
        Action::SetImpostorCount { count } => state.set_impostor_count(count),
        Action::SetCategory { category } => state.set_category(category),
        Action::SetDiscussionTime { seconds } => state.set_discussion_time(seconds),
        Action::SetPlayerNames { names } => state.set_player_names(names),
        Action::SetAllowSkipVote { allow } => state.set_allow_skip_vote(allow),
        Action::SetShowTimer { show } => state.set_show_timer(show),
        Action::StartGame => state.start_game(rng),

        // Role reveal
        Action::PlayerReady => state.player_ready(),
        Action::PlayerSawRole => state.player_saw_role(),
        Action::HideRole => state.hide_role(),
        Action::StartDiscussion => state.start_discussion(),

        // Voting
        Action::DiscussionTimeUp | Action::StartVoting => state.start_voting(),
        Action::CastVote { voter_id, target } => state.cast_vote(voter_id, target),
        Action::CalculateResults => state.calculate_results(),
        Action::ContinueGame => state.continue_game(),
        Action::EndGame => state.end_game(),

        // Between rounds
        Action::NewRound => state.new_round(rng),
        Action::ResetGame => Ok(GameState::default()),
    }
}
