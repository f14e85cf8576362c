//! Scripted opponent archetypes.
//!
//! The four archetypes are branches of one pure decision function rather
//! than a trait hierarchy, keeping each rule table colocated and auditable.

use stickfight_shared::*;

use crate::policy::step_toward;
use crate::rng::RandomSource;
use crate::state::{CombatState, AGENT, OPPONENT};

/// Choose the opponent's action for this tick.
pub fn opponent_decision(
    kind: OpponentKind,
    state: &CombatState,
    rng: &mut dyn RandomSource,
) -> Action {
    let me = &state.fighters[OPPONENT];
    let them = &state.fighters[AGENT];
    let dist = state.distance();

    match kind {
        // Uniform pick over the basic actions, with KICK joining the
        // candidate set only once its cooldown has elapsed.
        OpponentKind::Random => {
            let mut candidates = vec![
                Action::Idle,
                Action::MoveLeft,
                Action::MoveRight,
                Action::Punch,
                Action::Block,
            ];
            if me.can_kick(state.tick) {
                candidates.push(Action::Kick);
            }
            let idx = (rng.next_f32() * candidates.len() as f32) as usize;
            candidates[idx.min(candidates.len() - 1)]
        }

        // Relentless pressure: always closing, always attacking in range.
        OpponentKind::Aggressive => {
            if dist > KICK_RANGE {
                step_toward(me.position, them.position)
            } else if dist == KICK_RANGE {
                if me.can_kick(state.tick) {
                    Action::Kick
                } else {
                    step_toward(me.position, them.position)
                }
            } else {
                Action::Punch
            }
        }

        // Pseudo-copy of the agent's own policy shape. An independent
        // decision tree, not a replay of the agent's actual choices.
        OpponentKind::Mirror => {
            if dist > KICK_RANGE {
                step_toward(me.position, them.position)
            } else if dist == KICK_RANGE {
                if me.can_kick(state.tick) && rng.next_f32() < MIRROR_KICK_PROB {
                    Action::Kick
                } else {
                    step_toward(me.position, them.position)
                }
            } else if rng.next_f32() < MIRROR_PUNCH_PROB {
                Action::Punch
            } else {
                Action::Block
            }
        }

        // Keeps its distance: retreats when crowded unless pinned against
        // an arena wall, otherwise turtles.
        OpponentKind::Defensive => {
            if dist < 3 {
                let away = if me.position > them.position {
                    Action::MoveRight
                } else {
                    Action::MoveLeft
                };
                let at_edge = (me.position == 0 && away == Action::MoveLeft)
                    || (me.position == ARENA_MAX && away == Action::MoveRight);
                if !at_edge && rng.next_f32() < DEFENSIVE_RETREAT_PROB {
                    away
                } else {
                    Action::Block
                }
            } else if rng.next_f32() < DEFENSIVE_IDLE_PROB {
                Action::Idle
            } else {
                Action::Block
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    #[test]
    fn test_random_excludes_kick_on_cooldown() {
        let mut state = CombatState::new(2, 8);
        state.fighters[OPPONENT].kick_ready_at = 10;
        // The highest draw selects the last candidate; with the kick
        // excluded that is BLOCK, never KICK.
        let mut rng = ScriptedRandom::new(vec![0.999]);
        assert_eq!(
            opponent_decision(OpponentKind::Random, &state, &mut rng),
            Action::Block
        );

        state.fighters[OPPONENT].kick_ready_at = 0;
        let mut rng = ScriptedRandom::new(vec![0.999]);
        assert_eq!(
            opponent_decision(OpponentKind::Random, &state, &mut rng),
            Action::Kick
        );
    }

    #[test]
    fn test_random_low_draw_is_idle() {
        let state = CombatState::new(2, 8);
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(
            opponent_decision(OpponentKind::Random, &state, &mut rng),
            Action::Idle
        );
    }

    #[test]
    fn test_aggressive_closes_then_punches() {
        let state = CombatState::new(2, 8);
        let mut rng = ScriptedRandom::new(vec![0.5]);
        assert_eq!(
            opponent_decision(OpponentKind::Aggressive, &state, &mut rng),
            Action::MoveLeft
        );

        let state = CombatState::new(4, 5);
        assert_eq!(
            opponent_decision(OpponentKind::Aggressive, &state, &mut rng),
            Action::Punch
        );
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_aggressive_kicks_at_range_two() {
        let state = CombatState::new(4, 6);
        let mut rng = ScriptedRandom::new(vec![0.5]);
        assert_eq!(
            opponent_decision(OpponentKind::Aggressive, &state, &mut rng),
            Action::Kick
        );

        let mut state = CombatState::new(4, 6);
        state.fighters[OPPONENT].kick_ready_at = 3;
        assert_eq!(
            opponent_decision(OpponentKind::Aggressive, &state, &mut rng),
            Action::MoveLeft
        );
    }

    #[test]
    fn test_mirror_approximates_agent_policy() {
        let state = CombatState::new(2, 8);
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(
            opponent_decision(OpponentKind::Mirror, &state, &mut rng),
            Action::MoveLeft
        );

        let state = CombatState::new(4, 6);
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(
            opponent_decision(OpponentKind::Mirror, &state, &mut rng),
            Action::Kick
        );

        let state = CombatState::new(4, 5);
        let mut rng = ScriptedRandom::new(vec![0.9]);
        assert_eq!(
            opponent_decision(OpponentKind::Mirror, &state, &mut rng),
            Action::Block
        );
    }

    #[test]
    fn test_defensive_retreats_when_crowded() {
        let state = CombatState::new(4, 6);
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(
            opponent_decision(OpponentKind::Defensive, &state, &mut rng),
            Action::MoveRight
        );
    }

    #[test]
    fn test_defensive_blocks_at_wall_without_drawing() {
        let state = CombatState::new(ARENA_MAX - 1, ARENA_MAX);
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(
            opponent_decision(OpponentKind::Defensive, &state, &mut rng),
            Action::Block
        );
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_defensive_waits_at_distance() {
        let state = CombatState::new(2, 8);
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(
            opponent_decision(OpponentKind::Defensive, &state, &mut rng),
            Action::Idle
        );
        let mut rng = ScriptedRandom::new(vec![0.9]);
        assert_eq!(
            opponent_decision(OpponentKind::Defensive, &state, &mut rng),
            Action::Block
        );
    }
}
