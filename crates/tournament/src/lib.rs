//! Tournament Runner for isolation agents
//!
//! This crate provides infrastructure for:
//! - Playing refereed games between agents under a per-move time limit
//! - Running every test agent against a lineup of reference opponents
//! - Saving results and generating win-rate reports
//!
//! # Usage
//!
//! ```bash
//! # Run a match between two agents
//! cargo run -p tournament -- match alphabeta:custom minimax:improved:3 --games 10
//!
//! # Run the full round robin described by a config file
//! cargo run -p tournament -- run --config tournament.toml --out results.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
