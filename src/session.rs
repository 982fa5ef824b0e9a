//! The object a UI holds: one game state, its RNG and the language preference.

use crate::config::EngineConfig;
use crate::preferences::{Language, PreferenceError, PreferenceStore};
use crate::protocol::Action;
use crate::reducer::apply_with_rng;
use crate::state::GameState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct GameSession<R: Rng = StdRng> {
    state: GameState,
    rng: R,
    language: Language,
    store: Option<PreferenceStore>,
}

impl GameSession<StdRng> {
    /// Session configured from `config`, loading the saved language
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => {
                tracing::info!("Using fixed RNG seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        let store = PreferenceStore::new(&config.preferences_path);
        let language = store.load_or_default().language;

        Self {
            state: GameState::new(),
            rng,
            language,
            store: Some(store),
        }
    }
}

impl<R: Rng> GameSession<R> {
    /// In-memory session with no preference persistence
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
            language: Language::default(),
            store: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one action and return the resulting state
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        let state = std::mem::take(&mut self.state);
        self.state = apply_with_rng(state, action, &mut self.rng);
        &self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language and persist it; game state is untouched
    pub fn set_language(&mut self, language: Language) -> Result<(), PreferenceError> {
        if let Some(store) = &self.store {
            store.save_language(language)?;
        }
        self.language = language;
        Ok(())
    }
}
