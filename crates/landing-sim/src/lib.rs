//! Simulation engine for landing-planes.
//!
//! Owns the live aircraft set (a hecs world), runs the flight pass on a
//! periodic tick, generates aircraft in the background and exposes the
//! selection / re-orientation command surface.

pub mod aircraft;
pub mod engine;
pub mod error;
pub mod generator;
pub mod landing_site;
pub mod systems;
pub mod worker;
pub mod world_setup;

pub use aircraft::Aircraft;
pub use engine::Game;
pub use landing_core as core;
pub use landing_site::LandingSite;
