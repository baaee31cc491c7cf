//! Core traits and types for the Plane Strike engine
//!
//! This crate provides the environment-neutral abstractions that game crates build on:
//! - `Environment`: Typed trait exposing reset/step for a single-agent episode
//! - `TimeStep`: What every reset and step hands back to the caller
//! - `BoundedSpec`: Shape and bounds of actions and observations
//! - `EnvError`: Contract violations reported by environments

pub mod typed;
pub mod time_step;
pub mod error;

// Re-export main types for convenience
pub use typed::{Environment, EngineId, Capabilities, BoundedSpec};
pub use time_step::{StepType, TimeStep};
pub use error::EnvError;
