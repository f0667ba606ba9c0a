//! Core types and definitions for the landing-planes simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, categories, events, commands, snapshots, configuration and
//! constants. It has no threads and no simulation behaviour of its own.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
