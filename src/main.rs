use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use impostor::{catalog, config::EngineConfig, types::*, Action, GameSession};

/// Safety valve so a misbehaving loop cannot spin forever
const MAX_SUBROUNDS: u32 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impostor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env()?;
    let category = catalog::category_by_id(&config.default_category).ok_or_else(|| {
        format!("unknown category '{}'", config.default_category)
    })?;

    tracing::info!("Autoplaying one round with category '{}'", category.id);

    let mut session = GameSession::from_config(&config);
    tracing::info!("Language preference: {:?}", session.language());

    session.dispatch(Action::SetPlayerCount { count: 7 });
    session.dispatch(Action::SetImpostorCount { count: 2 });
    session.dispatch(Action::SetCategory { category });
    session.dispatch(Action::StartGame);

    while session.state().phase != GamePhase::Discussion {
        let before = session.state().clone();
        let action = match before.phase {
            GamePhase::Passing => Action::PlayerReady,
            GamePhase::Revealing => Action::PlayerSawRole,
            _ => Action::HideRole,
        };
        if session.dispatch(action) == &before {
            return Err("role reveal stalled".into());
        }
    }

    // Voters pick among the other alive players with a fixed seed
    let mut voter_rng = rand::rngs::StdRng::seed_from_u64(config.rng_seed.unwrap_or(0));

    while session.state().phase != GamePhase::Results {
        if session.state().vote_round >= MAX_SUBROUNDS {
            return Err("too many voting subrounds".into());
        }

        session.dispatch(Action::StartVoting);
        while let Some(voter_id) = session.state().current_voter().map(|p| p.id) {
            let target = session
                .state()
                .vote_targets(voter_id)
                .choose(&mut voter_rng)
                .map(|p| VoteTarget::Player(p.id))
                .unwrap_or(VoteTarget::Abstain);
            session.dispatch(Action::CastVote { voter_id, target });
        }

        if session.state().has_winner() {
            session.dispatch(Action::EndGame);
        } else {
            session.dispatch(Action::ContinueGame);
        }
    }

    if let Some(result) = &session.state().game_result {
        tracing::info!(
            "{:?} win ({:?}) after {} subround(s); survivors: {}",
            result.winner,
            result.end_reason,
            result.vote_rounds.len(),
            result
                .survivors
                .iter()
                .map(|p| p.display_name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
