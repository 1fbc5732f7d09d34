pub mod collector;
pub mod config;
pub mod download;
pub mod verify;

pub use collector::{Collector, Outcome};
pub use config::Config;
