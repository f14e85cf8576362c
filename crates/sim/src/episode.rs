use stickfight_shared::*;
use uuid::Uuid;

use crate::opponents::opponent_decision;
use crate::policy::agent_decision;
use crate::rng::{RandomSource, SeededRandom};
use crate::state::{round2, CombatState, AGENT, OPPONENT};

/// Simulate one complete fight against the given archetype.
///
/// Total over its input domain: always returns a full trajectory of 1 to
/// `MAX_STEPS` steps, ending early on a knockout.
pub fn simulate_episode(opponent: OpponentKind, seed: u64) -> EpisodeTrajectory {
    let config = EpisodeConfig {
        opponent,
        seed,
        ..Default::default()
    };
    let mut rng = SeededRandom::new(config.seed);
    run_episode(&config, &mut rng)
}

/// Episode loop with an injected random source, for deterministic replay
/// in tests. `config.seed` is ignored here; the caller owns the source.
pub fn run_episode(config: &EpisodeConfig, rng: &mut dyn RandomSource) -> EpisodeTrajectory {
    let mut state = CombatState::new(config.agent_start, config.opponent_start);
    let mut steps = Vec::new();
    let mut total_reward = 0.0f32;
    let mut won = false;

    for _ in 0..config.max_steps {
        let actions = [
            agent_decision(&state, rng),
            opponent_decision(config.opponent, &state, rng),
        ];
        let step = state.step(actions);
        total_reward += step.reward;
        steps.push(step);

        // Agent-defeated check first, opponent-defeated check second and
        // authoritative: a double knockout resolves in the agent's favor.
        if !state.fighters[AGENT].alive() {
            won = false;
        }
        if !state.fighters[OPPONENT].alive() {
            won = true;
        }
        if !state.fighters[AGENT].alive() || !state.fighters[OPPONENT].alive() {
            break;
        }
    }

    EpisodeTrajectory {
        episode_id: Uuid::new_v4().to_string(),
        won,
        total_reward: round2(total_reward),
        steps,
    }
}
