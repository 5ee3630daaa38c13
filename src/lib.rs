pub mod config;
pub mod creature;
pub mod error;
pub mod sensing;
pub mod simulation;
pub mod stats;
pub mod world;
