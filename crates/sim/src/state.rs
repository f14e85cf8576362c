use stickfight_shared::*;

pub const AGENT: usize = 0;
pub const OPPONENT: usize = 1;

/// One combatant's mutable state during an episode.
#[derive(Debug, Clone, Copy)]
pub struct FighterState {
    pub position: i32,
    pub hp: f32,
    /// Tick at which the next kick becomes available.
    pub kick_ready_at: u32,
}

impl FighterState {
    pub fn new(position: i32) -> Self {
        Self {
            position,
            hp: MAX_HP,
            kick_ready_at: 0,
        }
    }

    pub fn can_kick(&self, tick: u32) -> bool {
        tick >= self.kick_ready_at
    }

    pub fn alive(&self) -> bool {
        self.hp > 0.0
    }
}

/// Round to 2 decimals for stored rewards and totals.
pub fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

/// Full combat state for one episode. Index 0 is the agent, index 1 the
/// opponent; rules are symmetric, rewards are agent-centric.
#[derive(Debug, Clone)]
pub struct CombatState {
    pub fighters: [FighterState; 2],
    pub tick: u32,
}

impl CombatState {
    pub fn new(agent_start: i32, opponent_start: i32) -> Self {
        Self {
            fighters: [
                FighterState::new(agent_start.clamp(0, ARENA_MAX)),
                FighterState::new(opponent_start.clamp(0, ARENA_MAX)),
            ],
            tick: 0,
        }
    }

    pub fn distance(&self) -> i32 {
        (self.fighters[AGENT].position - self.fighters[OPPONENT].position).abs()
    }

    pub fn is_terminal(&self, max_steps: u32) -> bool {
        self.tick >= max_steps || !self.fighters[AGENT].alive() || !self.fighters[OPPONENT].alive()
    }

    /// Advance one tick: resolve movement, then both attacks simultaneously,
    /// then the agent-centric reward. Returns the snapshot for this tick.
    pub fn step(&mut self, actions: [Action; 2]) -> StepState {
        let t = self.tick;

        // Movement resolves sequentially, agent first. Each desired cell is
        // clamped to the arena and rejected if it coincides with the other
        // fighter's position at check time. The opponent therefore checks
        // against the agent's already-updated cell and can step into a cell
        // the agent just vacated; this order is part of the rules and must
        // not be replaced with a jointly consistent collision model.
        for i in 0..2 {
            let mut desired = self.fighters[i].position;
            match actions[i] {
                Action::MoveLeft => desired -= 1,
                Action::MoveRight => desired += 1,
                _ => {}
            }
            let desired = desired.clamp(0, ARENA_MAX);
            if desired != self.fighters[1 - i].position {
                self.fighters[i].position = desired;
            }
        }

        let new_dist = self.distance();
        let blocking = [actions[AGENT].is_block(), actions[OPPONENT].is_block()];

        // Both attacks resolve at post-move range before either lands, so
        // neither fighter sees the other's damage this tick.
        let mut pending = [0.0f32; 2];
        for i in 0..2 {
            let target = 1 - i;
            match actions[i] {
                Action::Punch if new_dist <= PUNCH_RANGE => {
                    pending[target] += if blocking[target] { CHIP_DAMAGE } else { PUNCH_DAMAGE };
                }
                // A kick that connects starts the attacker's cooldown; a
                // whiffed kick does not.
                Action::Kick if new_dist <= KICK_RANGE => {
                    pending[target] += if blocking[target] { CHIP_DAMAGE } else { KICK_DAMAGE };
                    self.fighters[i].kick_ready_at = t + KICK_COOLDOWN_TICKS;
                }
                _ => {}
            }
        }
        for i in 0..2 {
            self.fighters[i].hp = (self.fighters[i].hp - pending[i]).max(0.0);
        }

        let mut reward = -STEP_COST + pending[OPPONENT] - pending[AGENT];
        if (1..=2).contains(&new_dist) {
            reward += SPACING_BONUS;
        }
        if !self.fighters[OPPONENT].alive() {
            reward += KNOCKOUT_REWARD;
        }
        if !self.fighters[AGENT].alive() {
            reward -= KNOCKOUT_REWARD;
        }

        self.tick = t + 1;

        StepState {
            t,
            self_pos: self.fighters[AGENT].position,
            opp_pos: self.fighters[OPPONENT].position,
            self_hp: self.fighters[AGENT].hp,
            opp_hp: self.fighters[OPPONENT].hp,
            self_action: actions[AGENT],
            opp_action: actions[OPPONENT],
            reward: round2(reward),
            self_blocking: blocking[AGENT],
            opp_blocking: blocking[OPPONENT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CombatState::new(AGENT_SPAWN, OPPONENT_SPAWN);
        assert_eq!(state.distance(), 6);
        assert_eq!(state.fighters[AGENT].hp, MAX_HP);
        assert_eq!(state.fighters[OPPONENT].hp, MAX_HP);
        assert!(state.fighters[AGENT].can_kick(0));
        assert_eq!(state.tick, 0);
    }

    #[test]
    fn test_movement_clamps_to_arena() {
        let mut state = CombatState::new(0, ARENA_MAX);
        state.step([Action::MoveLeft, Action::MoveRight]);
        assert_eq!(state.fighters[AGENT].position, 0);
        assert_eq!(state.fighters[OPPONENT].position, ARENA_MAX);
    }

    #[test]
    fn test_move_into_occupied_cell_is_rejected() {
        let mut state = CombatState::new(4, 5);
        state.step([Action::MoveRight, Action::Idle]);
        assert_eq!(state.fighters[AGENT].position, 4);
        assert_eq!(state.fighters[OPPONENT].position, 5);
    }

    #[test]
    fn test_opponent_may_take_vacated_cell() {
        // Agent resolves first: it vacates cell 4, the opponent's check then
        // runs against the updated agent position and the move into 4 lands.
        let mut state = CombatState::new(4, 5);
        state.step([Action::MoveLeft, Action::MoveLeft]);
        assert_eq!(state.fighters[AGENT].position, 3);
        assert_eq!(state.fighters[OPPONENT].position, 4);
    }

    #[test]
    fn test_punch_in_range() {
        let mut state = CombatState::new(4, 5);
        let step = state.step([Action::Punch, Action::Idle]);
        assert_eq!(state.fighters[OPPONENT].hp, MAX_HP - PUNCH_DAMAGE);
        assert_eq!(step.reward, round2(-STEP_COST + PUNCH_DAMAGE + SPACING_BONUS));
    }

    #[test]
    fn test_punch_out_of_range_whiffs() {
        let mut state = CombatState::new(3, 5);
        state.step([Action::Punch, Action::Idle]);
        assert_eq!(state.fighters[OPPONENT].hp, MAX_HP);
    }

    #[test]
    fn test_blocked_punch_deals_chip_damage() {
        let mut state = CombatState::new(4, 5);
        state.step([Action::Punch, Action::Block]);
        assert_eq!(state.fighters[OPPONENT].hp, MAX_HP - CHIP_DAMAGE);
    }

    #[test]
    fn test_kick_damage_and_cooldown() {
        let mut state = CombatState::new(3, 5);
        let step = state.step([Action::Kick, Action::Idle]);
        assert_eq!(state.fighters[OPPONENT].hp, MAX_HP - KICK_DAMAGE);
        assert_eq!(state.fighters[AGENT].kick_ready_at, KICK_COOLDOWN_TICKS);
        assert!(!state.fighters[AGENT].can_kick(1));
        assert!(state.fighters[AGENT].can_kick(2));
        assert!(!step.self_blocking);
    }

    #[test]
    fn test_whiffed_kick_has_no_cooldown() {
        let mut state = CombatState::new(2, 8);
        state.step([Action::Kick, Action::Idle]);
        assert_eq!(state.fighters[OPPONENT].hp, MAX_HP);
        assert_eq!(state.fighters[AGENT].kick_ready_at, 0);
    }

    #[test]
    fn test_attacks_resolve_simultaneously() {
        let mut state = CombatState::new(4, 5);
        state.fighters[AGENT].hp = 10.0;
        state.fighters[OPPONENT].hp = 10.0;
        let step = state.step([Action::Punch, Action::Punch]);
        // Both punches land even though either alone would be a knockout.
        assert_eq!(state.fighters[AGENT].hp, 0.0);
        assert_eq!(state.fighters[OPPONENT].hp, 0.0);
        // Damage cancels; knockout bonuses cancel; spacing bonus applies.
        assert_eq!(step.reward, round2(-STEP_COST + SPACING_BONUS));
    }

    #[test]
    fn test_hp_floors_at_zero() {
        let mut state = CombatState::new(4, 5);
        state.fighters[OPPONENT].hp = 1.0;
        let step = state.step([Action::Punch, Action::Idle]);
        assert_eq!(state.fighters[OPPONENT].hp, 0.0);
        assert!(state.is_terminal(MAX_STEPS));
        // Pending damage, not hp delta, feeds the reward.
        assert_eq!(
            step.reward,
            round2(-STEP_COST + PUNCH_DAMAGE + SPACING_BONUS + KNOCKOUT_REWARD)
        );
    }

    #[test]
    fn test_spacing_bonus_applies_on_terminal_tick() {
        // The shaping bonus is not suppressed on a knockout tick.
        let mut state = CombatState::new(4, 5);
        state.fighters[AGENT].hp = 2.0;
        let step = state.step([Action::Idle, Action::Punch]);
        assert_eq!(
            step.reward,
            round2(-STEP_COST - PUNCH_DAMAGE + SPACING_BONUS - KNOCKOUT_REWARD)
        );
    }
}
