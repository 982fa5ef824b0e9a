use super::{GameState, Rejection, TransitionResult};
use crate::types::*;

/// Evaluate the win condition from scratch over the current roster.
///
/// Crewmates win once no impostor is alive; impostors win as soon as they
/// are at least as many as the alive crewmates.
pub fn check_win_condition(players: &[Player]) -> Option<EndReason> {
    let (impostors, crewmates) = players
        .iter()
        .filter(|p| p.is_alive())
        .fold((0usize, 0usize), |(imp, crew), p| {
            if p.is_impostor {
                (imp + 1, crew)
            } else {
                (imp, crew + 1)
            }
        });

    if impostors == 0 {
        Some(EndReason::ImpostorsEliminated)
    } else if impostors >= crewmates {
        Some(EndReason::ImpostorMajority)
    } else {
        None
    }
}

impl GameState {
    /// Close the round once a side has won
    pub(crate) fn end_game(&self) -> TransitionResult {
        self.require_phase("end_game", &[GamePhase::VotingResults])?;
        let end_reason = check_win_condition(&self.players).ok_or(Rejection::GameNotDecided)?;
        let winner = end_reason.winner();

        let (eliminated, survivors): (Vec<Player>, Vec<Player>) =
            self.players.iter().cloned().partition(|p| p.is_eliminated);

        tracing::info!(
            "Round {} over after {} subround(s): {:?} win",
            self.round,
            self.vote_history.len(),
            winner
        );

        Ok(GameState {
            phase: GamePhase::Results,
            game_result: Some(GameResult {
                winner,
                end_reason,
                crewmates_win: winner == Team::Crewmates,
                impostors_win: winner == Team::Impostors,
                vote_rounds: self.vote_history.clone(),
                survivors,
                eliminated,
            }),
            ..self.clone()
        })
    }
}
