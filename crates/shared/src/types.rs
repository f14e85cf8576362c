use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// One combatant action per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Idle,
    MoveLeft,
    MoveRight,
    Punch,
    Kick,
    Block,
}

impl Action {
    pub fn is_block(&self) -> bool {
        matches!(self, Action::Block)
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Action::Punch | Action::Kick)
    }
}

/// Scripted behavior profile governing the opponent's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    Random,
    Aggressive,
    Defensive,
    Mirror,
}

impl OpponentKind {
    pub const ALL: [OpponentKind; 4] = [
        OpponentKind::Random,
        OpponentKind::Aggressive,
        OpponentKind::Defensive,
        OpponentKind::Mirror,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OpponentKind::Random => "random",
            OpponentKind::Aggressive => "aggressive",
            OpponentKind::Defensive => "defensive",
            OpponentKind::Mirror => "mirror",
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized archetype name at a configuration boundary (CLI flag,
/// HTTP query parameter). The simulator itself only accepts the enum.
#[derive(Debug, Clone, Error)]
#[error("unknown opponent archetype '{0}' (valid: random, aggressive, defensive, mirror)")]
pub struct UnknownArchetype(pub String);

impl FromStr for OpponentKind {
    type Err = UnknownArchetype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(OpponentKind::Random),
            "aggressive" => Ok(OpponentKind::Aggressive),
            "defensive" => Ok(OpponentKind::Defensive),
            "mirror" => Ok(OpponentKind::Mirror),
            other => Err(UnknownArchetype(other.to_string())),
        }
    }
}

/// Immutable snapshot of one simulated tick, agent-centric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepState {
    pub t: u32,
    pub self_pos: i32,
    pub opp_pos: i32,
    pub self_hp: f32,
    pub opp_hp: f32,
    pub self_action: Action,
    pub opp_action: Action,
    /// Reward earned this tick, rounded to 2 decimals.
    pub reward: f32,
    pub self_blocking: bool,
    pub opp_blocking: bool,
}

/// Complete record of one simulated fight, ready for playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeTrajectory {
    pub episode_id: String,
    /// True iff the opponent was defeated as of the terminal tick.
    /// A simultaneous double knockout resolves in the agent's favor.
    pub won: bool,
    /// Rounded running sum of the per-step rewards.
    pub total_reward: f32,
    pub steps: Vec<StepState>,
}

/// Parameters for one episode. `Default` matches the reference fight:
/// agent at cell 2, opponent at cell 8, 200-tick cap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EpisodeConfig {
    pub opponent: OpponentKind,
    pub seed: u64,
    pub max_steps: u32,
    pub agent_start: i32,
    pub opponent_start: i32,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            opponent: OpponentKind::Random,
            seed: 42,
            max_steps: MAX_STEPS,
            agent_start: AGENT_SPAWN,
            opponent_start: OPPONENT_SPAWN,
        }
    }
}
