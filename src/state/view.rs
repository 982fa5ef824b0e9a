use super::outcome::check_win_condition;
use super::GameState;
use crate::types::*;

impl GameState {
    /// Player who should be holding the device during the role reveal
    pub fn current_player(&self) -> Option<&Player> {
        if !matches!(
            self.phase,
            GamePhase::Passing | GamePhase::Revealing | GamePhase::Hiding
        ) {
            return None;
        }
        self.pass_order
            .get(self.current_player_index)
            .and_then(|&seat| self.players.get(seat))
    }

    /// First alive player (by id) who has not voted this subround
    pub fn current_voter(&self) -> Option<&Player> {
        if self.phase != GamePhase::Voting {
            return None;
        }
        self.pending_voters().into_iter().next()
    }

    pub fn pending_voters(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.is_alive() && !p.has_voted)
            .collect()
    }

    /// Players `voter_id` may vote for: everyone alive except themselves
    pub fn vote_targets(&self, voter_id: PlayerId) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.is_alive() && p.id != voter_id)
            .collect()
    }

    pub fn impostors(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_impostor).collect()
    }

    pub fn crewmates(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_impostor).collect()
    }

    pub fn alive_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_alive()).collect()
    }

    pub fn eliminated_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_eliminated).collect()
    }

    pub fn alive_impostors(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.is_alive() && p.is_impostor)
            .collect()
    }

    pub fn alive_crewmates(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.is_alive() && !p.is_impostor)
            .collect()
    }

    /// Whether `EndGame` would be accepted right now
    pub fn has_winner(&self) -> bool {
        !self.players.is_empty() && check_win_condition(&self.players).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{animals, discussion_state, rng, voting_state};

    #[test]
    fn test_current_player_follows_pass_order() {
        let state = GameState::new()
            .set_category(animals())
            .unwrap()
            .start_game(&mut rng())
            .unwrap();

        let expected = state.players[state.pass_order[0]].id;
        assert_eq!(state.current_player().map(|p| p.id), Some(expected));

        let state = state
            .player_ready()
            .unwrap()
            .player_saw_role()
            .unwrap()
            .hide_role()
            .unwrap();
        let expected = state.players[state.pass_order[1]].id;
        assert_eq!(state.current_player().map(|p| p.id), Some(expected));
    }

    #[test]
    fn test_current_player_none_outside_reveal() {
        assert!(GameState::new().current_player().is_none());
        assert!(discussion_state(4, 1).current_player().is_none());
    }

    #[test]
    fn test_current_voter_skips_voted_and_eliminated() {
        let mut state = voting_state(5, &[3]);
        state.players[0].is_eliminated = true;
        assert_eq!(state.current_voter().map(|p| p.id), Some(2));

        let state = state.cast_vote(2, VoteTarget::Player(3)).unwrap();
        assert_eq!(state.current_voter().map(|p| p.id), Some(3));
        assert_eq!(state.pending_voters().len(), 3);
    }

    #[test]
    fn test_partitions() {
        let mut state = voting_state(6, &[2, 5]);
        state.players[1].is_eliminated = true;
        state.players[0].is_eliminated = true;

        assert_eq!(state.impostors().len(), 2);
        assert_eq!(state.crewmates().len(), 4);
        assert_eq!(state.alive_players().len(), 4);
        assert_eq!(state.eliminated_players().len(), 2);
        assert_eq!(
            state.alive_impostors().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![5]
        );
        assert_eq!(state.alive_crewmates().len(), 3);
        assert!(!state.has_winner());
    }

    #[test]
    fn test_vote_targets_exclude_self_and_eliminated() {
        let mut state = voting_state(4, &[1]);
        state.players[3].is_eliminated = true;
        let ids: Vec<_> = state.vote_targets(2).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_idle_has_no_winner() {
        assert!(!GameState::new().has_winner());
    }
}
