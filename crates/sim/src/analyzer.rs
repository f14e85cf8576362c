use serde::Serialize;
use stickfight_shared::*;

/// Aggregate metrics describing one finished fight, agent-centric.
#[derive(Debug, Clone, Serialize)]
pub struct FightMetrics {
    /// Total health the opponent lost.
    pub damage_dealt: f32,
    /// Total health the agent lost.
    pub damage_taken: f32,
    /// Attacks thrown (punches and kicks) per side.
    pub agent_attacks: u32,
    pub opponent_attacks: u32,
    /// Agent attacks that removed health / attacks thrown.
    pub hit_rate: f32,
    /// Ticks spent blocking per side.
    pub agent_blocks: u32,
    pub opponent_blocks: u32,
    /// Close (distance <= 2) to far transitions and back.
    pub engagement_count: u32,
    pub avg_distance: f32,
    /// Tick of the agent's first landed attack, if any.
    pub first_hit_tick: Option<u32>,
    /// True when the fight ended by knockout rather than the step cap.
    pub knockout: bool,
    /// Weighted composite 0-100: attack frequency, close-range time,
    /// decisiveness.
    pub aggression_score: f32,
}

/// Analyze a trajectory and compute fight metrics.
pub fn analyze(trajectory: &EpisodeTrajectory) -> FightMetrics {
    let steps = &trajectory.steps;
    if steps.is_empty() {
        return FightMetrics {
            damage_dealt: 0.0,
            damage_taken: 0.0,
            agent_attacks: 0,
            opponent_attacks: 0,
            hit_rate: 0.0,
            agent_blocks: 0,
            opponent_blocks: 0,
            engagement_count: 0,
            avg_distance: 0.0,
            first_hit_tick: None,
            knockout: false,
            aggression_score: 0.0,
        };
    }

    let mut prev_self_hp = MAX_HP;
    let mut prev_opp_hp = MAX_HP;
    let mut damage_dealt = 0.0;
    let mut damage_taken = 0.0;
    let mut agent_attacks = 0u32;
    let mut opponent_attacks = 0u32;
    let mut agent_hits = 0u32;
    let mut agent_blocks = 0u32;
    let mut opponent_blocks = 0u32;
    let mut engagement_count = 0u32;
    let mut distance_sum = 0i64;
    let mut first_hit_tick = None;
    let mut close_ticks = 0u32;
    let mut was_close = false;

    for step in steps {
        let dist = (step.self_pos - step.opp_pos).abs();
        distance_sum += dist as i64;

        let close = dist <= KICK_RANGE;
        if close {
            close_ticks += 1;
        }
        if close != was_close {
            engagement_count += 1;
            was_close = close;
        }

        if step.self_action.is_attack() {
            agent_attacks += 1;
        }
        if step.opp_action.is_attack() {
            opponent_attacks += 1;
        }
        if step.self_blocking {
            agent_blocks += 1;
        }
        if step.opp_blocking {
            opponent_blocks += 1;
        }

        let dealt = prev_opp_hp - step.opp_hp;
        if dealt > 0.0 {
            agent_hits += 1;
            if first_hit_tick.is_none() {
                first_hit_tick = Some(step.t);
            }
        }
        damage_dealt += dealt;
        damage_taken += prev_self_hp - step.self_hp;
        prev_self_hp = step.self_hp;
        prev_opp_hp = step.opp_hp;
    }

    let n = steps.len() as f32;
    let last = steps[steps.len() - 1];
    let knockout = last.self_hp == 0.0 || last.opp_hp == 0.0;
    let hit_rate = if agent_attacks > 0 {
        agent_hits as f32 / agent_attacks as f32
    } else {
        0.0
    };

    let attack_frac = (agent_attacks + opponent_attacks) as f32 / (2.0 * n);
    let close_frac = close_ticks as f32 / n;
    let aggression_score =
        (100.0 * (0.4 * attack_frac + 0.3 * close_frac + 0.3 * if knockout { 1.0 } else { 0.0 }))
            .clamp(0.0, 100.0);

    FightMetrics {
        damage_dealt,
        damage_taken,
        agent_attacks,
        opponent_attacks,
        hit_rate,
        agent_blocks,
        opponent_blocks,
        engagement_count,
        avg_distance: distance_sum as f32 / n,
        first_hit_tick,
        knockout,
        aggression_score,
    }
}
