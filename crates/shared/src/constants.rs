// Arena: discrete 1-D corridor of cells 0..=ARENA_MAX
pub const ARENA_SIZE: i32 = 11;
pub const ARENA_MAX: i32 = ARENA_SIZE - 1;

// Episode
pub const MAX_STEPS: u32 = 200;
pub const AGENT_SPAWN: i32 = 2;
pub const OPPONENT_SPAWN: i32 = 8;

// Fighter
pub const MAX_HP: f32 = 100.0;

// Attacks
pub const PUNCH_RANGE: i32 = 1;
pub const KICK_RANGE: i32 = 2;
pub const PUNCH_DAMAGE: f32 = 15.0;
pub const KICK_DAMAGE: f32 = 10.0;
pub const CHIP_DAMAGE: f32 = 2.0; // damage through a block
pub const KICK_COOLDOWN_TICKS: u32 = 2;

// Reward shaping (agent-centric)
pub const STEP_COST: f32 = 0.01;
pub const SPACING_BONUS: f32 = 0.01; // paid at post-move distance 1 or 2
pub const KNOCKOUT_REWARD: f32 = 10.0;

// Decision probabilities
pub const AGENT_KICK_PROB: f32 = 0.7;
pub const AGENT_PUNCH_PROB: f32 = 0.6;
pub const MIRROR_KICK_PROB: f32 = 0.7;
pub const MIRROR_PUNCH_PROB: f32 = 0.5;
pub const DEFENSIVE_RETREAT_PROB: f32 = 0.7;
pub const DEFENSIVE_IDLE_PROB: f32 = 0.5;
