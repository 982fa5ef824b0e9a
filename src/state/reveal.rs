use super::{GameState, TransitionResult};
use crate::types::*;

impl GameState {
    /// The device reached the next player; show their role
    pub(crate) fn player_ready(&self) -> TransitionResult {
        self.require_phase("player_ready", &[GamePhase::Passing])?;
        Ok(GameState {
            phase: GamePhase::Revealing,
            ..self.clone()
        })
    }

    /// The current player has seen their role. A second acknowledgement
    /// while hiding counts as hiding it.
    pub(crate) fn player_saw_role(&self) -> TransitionResult {
        self.require_phase(
            "player_saw_role",
            &[GamePhase::Revealing, GamePhase::Hiding],
        )?;
        if self.phase == GamePhase::Hiding {
            return self.hide_role();
        }

        let seat = self.pass_order.get(self.current_player_index).copied();
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                if Some(index) == seat {
                    Player {
                        has_seen_role: true,
                        ..player.clone()
                    }
                } else {
                    player.clone()
                }
            })
            .collect();

        Ok(GameState {
            phase: GamePhase::Hiding,
            players,
            ..self.clone()
        })
    }

    /// Role is hidden again: hand the device on, or open discussion once
    /// everyone has seen theirs
    pub(crate) fn hide_role(&self) -> TransitionResult {
        self.require_phase("hide_role", &[GamePhase::Hiding])?;

        let next_index = self.current_player_index + 1;
        if next_index >= self.pass_order.len() {
            return Ok(GameState {
                phase: GamePhase::Discussion,
                current_player_index: 0,
                ..self.clone()
            });
        }

        Ok(GameState {
            phase: GamePhase::Passing,
            current_player_index: next_index,
            ..self.clone()
        })
    }

    /// Shortcut the UI may use for the last hand-off
    pub(crate) fn start_discussion(&self) -> TransitionResult {
        self.require_phase("start_discussion", &[GamePhase::Hiding])?;
        if self.current_player_index + 1 < self.pass_order.len() {
            return Err(super::Rejection::WrongPhase {
                action: "start_discussion",
                phase: self.phase,
            });
        }
        self.hide_role()
    }
}
