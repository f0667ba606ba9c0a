//! Headless runner for landing-planes: config loading, the real-time
//! session loop and a small autopilot that drives the command surface.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod session;
