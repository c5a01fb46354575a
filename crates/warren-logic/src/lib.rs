//! Pure dungeon layout generation logic for Warren.
//!
//! This crate produces the static tile layout of a level — rooms, doors,
//! and connecting corridors on an occupancy grid — independent of any
//! engine or renderer. The caller supplies a seeded random source and a
//! placement sink; the generator runs synchronously to completion and
//! exposes the resulting grid and section arena read-only.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Level configuration, dimension adjustment, validation |
//! | [`corridors`] | Random-walk corridor carving from room doors |
//! | [`doors`] | Door placement on room walls (count, sides, fallback) |
//! | [`grid`] | Occupancy grid: one-time cell claims, move queries, text dump |
//! | [`level`] | Generation pipeline orchestrator and the `Level` result |
//! | [`partition`] | Binary space partition into room-sized leaf regions |
//! | [`placement`] | Tile kinds, rotations, and the placement service boundary |
//! | [`random`] | Injected random source trait over `rand` |
//! | [`rooms`] | Room cell classification (corner/wall/door/floor) and claiming |
//! | [`section`] | Arena-stored sections and their doors |
//! | [`validate`] | Post-generation invariant checks over a finished level |

pub mod config;
pub mod corridors;
pub mod doors;
pub mod grid;
pub mod level;
pub mod partition;
pub mod placement;
pub mod random;
pub mod rooms;
pub mod section;
pub mod validate;
