use super::outcome::check_win_condition;
use super::{GameState, Rejection, TransitionResult};
use crate::types::*;

/// Vote count for one subround, computed from the roster alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub summary: Vec<VoteSummary>,
    pub max_votes: u32,
    pub is_tie: bool,
    /// The unique top vote-getter; `None` on a tie
    pub eliminated: Option<PlayerId>,
}

/// Count the votes cast by alive players for alive players.
///
/// A tie is either several players sharing the maximum or a maximum of zero.
pub fn tally_votes(players: &[Player]) -> Tally {
    let alive: Vec<&Player> = players.iter().filter(|p| p.is_alive()).collect();

    let summary: Vec<VoteSummary> = alive
        .iter()
        .map(|candidate| {
            let votes_received = alive
                .iter()
                .filter(|voter| voter.voted_for == Some(VoteTarget::Player(candidate.id)))
                .count() as u32;
            VoteSummary {
                player_id: candidate.id,
                player_name: candidate.display_name.clone(),
                votes_received,
                voted_for: candidate.voted_for,
            }
        })
        .collect();

    let max_votes = summary
        .iter()
        .map(|s| s.votes_received)
        .max()
        .unwrap_or(0);
    let leaders: Vec<PlayerId> = summary
        .iter()
        .filter(|s| s.votes_received == max_votes)
        .map(|s| s.player_id)
        .collect();

    let is_tie = max_votes == 0 || leaders.len() > 1;
    Tally {
        eliminated: if is_tie { None } else { leaders.first().copied() },
        summary,
        max_votes,
        is_tie,
    }
}

impl GameState {
    fn with_fresh_votes(&self) -> Vec<Player> {
        self.players.iter().map(Player::with_fresh_vote).collect()
    }

    /// Open a new voting subround
    pub(crate) fn start_voting(&self) -> TransitionResult {
        self.require_phase("start_voting", &[GamePhase::Discussion])?;
        Ok(GameState {
            phase: GamePhase::Voting,
            players: self.with_fresh_votes(),
            vote_round: self.vote_round + 1,
            last_vote_result: None,
            ..self.clone()
        })
    }

    /// Record one vote; the last outstanding vote triggers the tally
    pub(crate) fn cast_vote(&self, voter_id: PlayerId, target: VoteTarget) -> TransitionResult {
        self.require_phase("cast_vote", &[GamePhase::Voting])?;

        let voter = self
            .player(voter_id)
            .ok_or(Rejection::UnknownPlayer(voter_id))?;
        if voter.is_eliminated {
            return Err(Rejection::PlayerEliminated(voter_id));
        }
        if voter.has_voted {
            return Err(Rejection::AlreadyVoted(voter_id));
        }

        match target {
            VoteTarget::Abstain if !self.settings.allow_skip_vote => {
                return Err(Rejection::SkipVoteDisabled);
            }
            VoteTarget::Abstain => {}
            VoteTarget::Player(target_id) => {
                if target_id == voter_id {
                    return Err(Rejection::SelfVote(voter_id));
                }
                let suspect = self
                    .player(target_id)
                    .ok_or(Rejection::UnknownPlayer(target_id))?;
                if suspect.is_eliminated {
                    return Err(Rejection::PlayerEliminated(target_id));
                }
            }
        }

        let players = self
            .players
            .iter()
            .map(|p| {
                if p.id == voter_id {
                    Player {
                        has_voted: true,
                        voted_for: Some(target),
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();

        let next = GameState {
            players,
            ..self.clone()
        };

        if next.pending_voters().is_empty() {
            Ok(next.resolve_subround())
        } else {
            Ok(next)
        }
    }

    /// Close the subround early; whoever has not voted abstains
    pub(crate) fn calculate_results(&self) -> TransitionResult {
        self.require_phase("calculate_results", &[GamePhase::Voting])?;

        let players = self
            .players
            .iter()
            .map(|p| {
                if p.is_alive() && !p.has_voted {
                    Player {
                        has_voted: true,
                        voted_for: Some(VoteTarget::Abstain),
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();

        Ok(GameState {
            players,
            ..self.clone()
        }
        .resolve_subround())
    }

    /// Tally, eliminate and evaluate the win condition
    fn resolve_subround(&self) -> GameState {
        let tally = tally_votes(&self.players);

        let players: Vec<Player> = self
            .players
            .iter()
            .map(|p| Player {
                is_eliminated: p.is_eliminated || tally.eliminated == Some(p.id),
                votes_received: tally
                    .summary
                    .iter()
                    .find(|s| s.player_id == p.id)
                    .map(|s| s.votes_received)
                    .unwrap_or(0),
                ..p.clone()
            })
            .collect();

        let eliminated_player = tally
            .eliminated
            .and_then(|id| players.iter().find(|p| p.id == id))
            .cloned();
        let end_reason = check_win_condition(&players);

        match &eliminated_player {
            Some(player) => tracing::info!(
                "Subround {}: {} eliminated with {} vote(s) (impostor: {})",
                self.vote_round,
                player.display_name,
                tally.max_votes,
                player.is_impostor
            ),
            None => tracing::info!(
                "Subround {}: tie at {} vote(s), nobody eliminated",
                self.vote_round,
                tally.max_votes
            ),
        }
        if let Some(reason) = end_reason {
            tracing::info!("Win condition met: {:?} ({:?})", reason.winner(), reason);
        }

        let result = VoteRoundResult {
            vote_round: self.vote_round,
            was_impostor: eliminated_player.as_ref().is_some_and(|p| p.is_impostor),
            eliminated_player,
            is_tie: tally.is_tie,
            vote_summary: tally.summary,
            game_ended: end_reason.is_some(),
            end_reason,
        };

        let mut vote_history = self.vote_history.clone();
        vote_history.push(result.clone());

        GameState {
            phase: GamePhase::VotingResults,
            players,
            last_vote_result: Some(result),
            vote_history,
            ..self.clone()
        }
    }

    /// Nobody has won yet: back to discussion for another subround
    pub(crate) fn continue_game(&self) -> TransitionResult {
        self.require_phase("continue_game", &[GamePhase::VotingResults])?;
        if check_win_condition(&self.players).is_some() {
            return Err(Rejection::GameAlreadyDecided);
        }

        Ok(GameState {
            phase: GamePhase::Discussion,
            players: self.with_fresh_votes(),
            ..self.clone()
        })
    }
}
