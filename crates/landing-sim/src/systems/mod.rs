//! Systems that operate on the live aircraft set.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only). They push events into a caller-owned buffer; the engine
//! decides when to deliver them.

pub mod flight;
pub mod selection;
pub mod snapshot;
