use super::{GameState, Rejection, TransitionResult};
use crate::types::*;

impl GameState {
    fn with_settings(&self, settings: GameSettings) -> GameState {
        GameState {
            settings,
            ..self.clone()
        }
    }

    /// Change the player count, clamping impostors and resizing the name list
    pub(crate) fn set_player_count(&self, count: usize) -> TransitionResult {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(Rejection::PlayerCountOutOfRange(count));
        }

        let mut player_names = self.settings.player_names.clone();
        player_names.resize(count, String::new());

        Ok(self.with_settings(GameSettings {
            player_count: count,
            impostor_count: self
                .settings
                .impostor_count
                .clamp(MIN_IMPOSTORS, max_impostors(count)),
            player_names,
            ..self.settings.clone()
        }))
    }

    pub(crate) fn set_impostor_count(&self, count: usize) -> TransitionResult {
        let max = max_impostors(self.settings.player_count);
        Ok(self.with_settings(GameSettings {
            impostor_count: count.clamp(MIN_IMPOSTORS, max),
            ..self.settings.clone()
        }))
    }

    pub(crate) fn set_category(&self, category: Category) -> TransitionResult {
        Ok(self.with_settings(GameSettings {
            selected_category: Some(category),
            ..self.settings.clone()
        }))
    }

    pub(crate) fn set_discussion_time(&self, seconds: u32) -> TransitionResult {
        Ok(self.with_settings(GameSettings {
            discussion_time: seconds,
            ..self.settings.clone()
        }))
    }

    pub(crate) fn set_player_names(&self, names: Vec<String>) -> TransitionResult {
        let mut names = names;
        names.truncate(self.settings.player_count);
        Ok(self.with_settings(GameSettings {
            player_names: names,
            ..self.settings.clone()
        }))
    }

    pub(crate) fn set_allow_skip_vote(&self, allow: bool) -> TransitionResult {
        Ok(self.with_settings(GameSettings {
            allow_skip_vote: allow,
            ..self.settings.clone()
        }))
    }

    pub(crate) fn set_show_timer(&self, show: bool) -> TransitionResult {
        Ok(self.with_settings(GameSettings {
            show_timer: show,
            ..self.settings.clone()
        }))
    }
}
