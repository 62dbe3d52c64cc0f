//! Monty Hall - Monte Carlo simulation of the Monty Hall puzzle
//!
//! A player picks one of N doors, the host opens every losing door but one,
//! and the player keeps or switches. [`trial`] plays a single round and
//! [`simulator`] repeats it to estimate the win rate.

pub mod build_info;
pub mod error;
pub mod simulator;
pub mod trial;

pub use error::{ConfigError, InvariantViolation, Result, SimError};
