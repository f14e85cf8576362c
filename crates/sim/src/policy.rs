use stickfight_shared::*;

use crate::rng::RandomSource;
use crate::state::{CombatState, AGENT, OPPONENT};

/// Direction that closes the gap from `from` toward `to`.
pub(crate) fn step_toward(from: i32, to: i32) -> Action {
    if from < to {
        Action::MoveRight
    } else {
        Action::MoveLeft
    }
}

/// The agent's scripted policy, identical for every opponent archetype:
/// close when far, kick at range 2 when off cooldown, trade punches and
/// blocks at range 1.
pub fn agent_decision(state: &CombatState, rng: &mut dyn RandomSource) -> Action {
    let me = &state.fighters[AGENT];
    let them = &state.fighters[OPPONENT];
    let dist = state.distance();

    if dist > KICK_RANGE {
        step_toward(me.position, them.position)
    } else if dist == KICK_RANGE {
        // No draw is consumed while the kick is on cooldown.
        if me.can_kick(state.tick) && rng.next_f32() < AGENT_KICK_PROB {
            Action::Kick
        } else {
            Action::MoveRight
        }
    } else if rng.next_f32() < AGENT_PUNCH_PROB {
        Action::Punch
    } else {
        Action::Block
    }
}
