//! Single Monty Hall trial: door types and the stage pipeline.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
