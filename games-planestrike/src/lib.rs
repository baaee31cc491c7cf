//! Plane Strike game implementation for the engine
//!
//! A single-player deduction game used as a reinforcement-learning
//! environment. A plane of eight cells is hidden on a square board; each
//! step strikes one cell and reveals a hit or a miss. The episode ends when
//! the whole plane is found or the strike budget runs out.

pub mod board;
pub mod config;
pub mod constants;
pub mod resolver;
pub mod session;
pub mod shape;

pub use board::{CellState, Coord, HiddenBoard, Observation, VisibleBoard};
pub use config::SessionConfig;
pub use resolver::{EpisodeStatus, Strike, StrikeResolver};
pub use session::GameSession;
pub use shape::{Heading, PlanePlacement, ShapeGenerator};
