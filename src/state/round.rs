use super::roster::{create_players, pick_impostor_indices, shuffled_order};
use super::{GameState, Rejection, TransitionResult};
use crate::types::*;
use rand::Rng;

impl GameState {
    /// Draw a word, deal roles and shuffle the reveal order for round `round`
    fn deal_round<R: Rng + ?Sized>(&self, round: u32, rng: &mut R) -> TransitionResult {
        let category = self
            .settings
            .selected_category
            .as_ref()
            .ok_or(Rejection::NoCategory)?;
        let secret_word = category
            .random_word(rng)
            .ok_or_else(|| Rejection::EmptyCategory(category.id.clone()))?
            .to_string();

        let player_count = self.settings.player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        let impostor_count = self
            .settings
            .impostor_count
            .clamp(MIN_IMPOSTORS, max_impostors(player_count));

        let impostors = pick_impostor_indices(player_count, impostor_count, rng);
        let players = create_players(
            player_count,
            &impostors,
            &secret_word,
            &self.settings.player_names,
        );
        let pass_order = shuffled_order(player_count, rng);

        tracing::info!(
            "Dealt round {}: {} players, {} impostor(s), category '{}'",
            round,
            player_count,
            impostor_count,
            category.id
        );

        Ok(GameState {
            phase: GamePhase::Passing,
            players,
            settings: self.settings.clone(),
            current_player_index: 0,
            pass_order,
            secret_word,
            round,
            vote_round: 0,
            last_vote_result: None,
            vote_history: Vec::new(),
            game_result: None,
        })
    }

    /// Begin the first round from setup
    pub(crate) fn start_game<R: Rng + ?Sized>(&self, rng: &mut R) -> TransitionResult {
        self.require_phase("start_game", &[GamePhase::Idle, GamePhase::Results])?;
        self.deal_round(1, rng)
    }

    /// Play again with the same settings and a completely fresh roster
    pub(crate) fn new_round<R: Rng + ?Sized>(&self, rng: &mut R) -> TransitionResult {
        self.require_phase("new_round", &[GamePhase::Results])?;
        self.deal_round(self.round + 1, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{animals, discussion_state, rng};

    fn configured(players: usize, impostors: usize) -> GameState {
        GameState::new()
            .set_player_count(players)
            .unwrap()
            .set_impostor_count(impostors)
            .unwrap()
            .set_category(animals())
            .unwrap()
    }

    #[test]
    fn test_start_game_requires_category() {
        let state = GameState::new();
        assert_eq!(state.start_game(&mut rng()), Err(Rejection::NoCategory));
    }

    #[test]
    fn test_start_game_rejects_empty_category() {
        let empty = Category {
            id: "empty".into(),
            name: "Empty".into(),
            icon: "?".into(),
            words: Vec::new(),
            is_custom: true,
        };
        let state = GameState::new().set_category(empty).unwrap();
        assert_eq!(
            state.start_game(&mut rng()),
            Err(Rejection::EmptyCategory("empty".into()))
        );
    }

    #[test]
    fn test_start_game_deals_roles() {
        let mut rng = rng();
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            for k in MIN_IMPOSTORS..=max_impostors(n) {
                let state = configured(n, k).start_game(&mut rng).unwrap();

                assert_eq!(state.phase, GamePhase::Passing);
                assert_eq!(state.players.len(), n);
                assert_eq!(state.round, 1);
                assert_eq!(state.vote_round, 0);
                assert!(animals().words.contains(&state.secret_word));

                let impostors: Vec<_> = state.players.iter().filter(|p| p.is_impostor).collect();
                assert_eq!(impostors.len(), k);
                assert!(impostors.iter().all(|p| p.secret_word == IMPOSTOR_WORD));
                assert_eq!(
                    state
                        .players
                        .iter()
                        .filter(|p| p.secret_word == state.secret_word)
                        .count(),
                    n - k
                );

                let mut order = state.pass_order.clone();
                order.sort_unstable();
                assert_eq!(order, (0..n).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_start_game_rejected_mid_round() {
        let state = discussion_state(5, 1);
        assert!(matches!(
            state.start_game(&mut rng()),
            Err(Rejection::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_new_round_clears_everything() {
        let mut state = discussion_state(5, 1);
        state.phase = GamePhase::Results;
        state.vote_round = 3;
        state.players[0].is_eliminated = true;

        let next = state.new_round(&mut rng()).unwrap();
        assert_eq!(next.phase, GamePhase::Passing);
        assert_eq!(next.round, 2);
        assert_eq!(next.vote_round, 0);
        assert!(next.players.iter().all(|p| p.is_alive() && !p.has_seen_role));
        assert!(next.game_result.is_none());
        assert!(next.vote_history.is_empty());
    }

    #[test]
    fn test_new_round_only_from_results() {
        let state = discussion_state(5, 1);
        assert!(state.new_round(&mut rng()).is_err());
    }

    #[test]
    fn test_new_round_requires_category() {
        let mut state = discussion_state(5, 1);
        state.phase = GamePhase::Results;
        state.settings.selected_category = None;
        assert_eq!(state.new_round(&mut rng()), Err(Rejection::NoCategory));
    }
}
