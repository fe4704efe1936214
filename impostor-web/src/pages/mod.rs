pub mod config;
pub mod debate;
pub mod results;
pub mod reveal;
pub mod voting;
pub mod welcome;
