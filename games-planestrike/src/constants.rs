//! Fixed game parameters and reward values

/// Default side length of the square board
pub const BOARD_SIZE: usize = 8;

/// Smallest board on which every heading has a legal placement
pub const MIN_BOARD_SIZE: usize = 4;

/// Number of cells in the plane; fixed
pub const PLANE_SIZE: u32 = 8;

/// Default discount reported on non-terminal steps
pub const DEFAULT_DISCOUNT: f32 = 0.9;

// Rewards for each strike
pub const HIT_REWARD: f32 = 1.0;
pub const MISS_REWARD: f32 = 0.0;
pub const REPEAT_STRIKE_REWARD: f32 = -1.0;

/// Bonus for finding the whole plane within the step budget
pub const FINISHED_GAME_REWARD: f32 = 10.0;

/// Penalty for running out of steps before the plane is found
pub const UNFINISHED_GAME_REWARD: f32 = -10.0;

/// The only supported render mode
pub const HUMAN_RENDER_MODE: &str = "human";
