//! Corridor carving: randomized walks from room doors.
//!
//! Each walk starts at a door and repeatedly tries to step one cell in
//! its current direction. A successful step claims the destination as a
//! new 1×1 hallway section and places a corridor tile; the tile is
//! straight if the cell two ahead is also free, otherwise a corner.
//! A blocked step redirects to a uniformly random direction without
//! moving. The walk completes when no axis neighbor of its position is
//! free.
//!
//! A run of redirects that never finds a step is bounded: after
//! [`MAX_REDIRECTS`] consecutive failures the walk is abandoned and its
//! position reported as an incomplete region. This is a diagnostic, not
//! an error; the rest of generation proceeds.

use serde::Serialize;

use crate::grid::LevelGrid;
use crate::placement::{Direction, PlacementSink, TileKind, TilePlacement};
use crate::random::Sampler;
use crate::section::{Door, Section};

/// Consecutive failed redirects after which a walk gives up.
pub const MAX_REDIRECTS: u32 = 64;

/// Phase of an active corridor walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// Stepping in the current direction.
    Advancing,
    /// Last step was blocked; picking a new direction in place.
    Redirecting,
    /// No axis neighbor of the position is free; the walk halts.
    Complete,
}

/// Outcome of a single door walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOutcome {
    pub cells_carved: usize,
    /// Position where the walk ran out of redirects, if it did.
    pub stalled_at: Option<(i32, i32)>,
}

/// Aggregate carving statistics for a level.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CarveStats {
    pub walks: usize,
    pub cells_carved: usize,
    /// Positions of walks abandoned at the redirect cap.
    pub incomplete: Vec<(i32, i32)>,
}

fn walk_state(grid: &LevelGrid, x: i32, z: i32) -> WalkState {
    if grid.can_move_in_x(x, z) || grid.can_move_in_z(x, z) {
        WalkState::Advancing
    } else {
        WalkState::Complete
    }
}

/// Carve a corridor starting from a door, claiming a connected path of
/// hallway cells into open space.
pub fn carve_from(
    door: Door,
    grid: &mut LevelGrid,
    sections: &mut Vec<Section>,
    sampler: &mut impl Sampler,
    sink: &mut impl PlacementSink,
) -> WalkOutcome {
    let (mut x, mut z) = (door.x, door.z);
    let mut direction = Direction::North;
    let mut redirects = 0u32;
    let mut cells_carved = 0usize;

    while walk_state(grid, x, z) != WalkState::Complete {
        let (dx, dz) = direction.delta();
        let (next_x, next_z) = (x + dx, z + dz);

        if grid.is_free(next_x, next_z) {
            // Claim the destination as a new 1×1 hallway section.
            let id = sections.len() as u32;
            sections.push(Section::hallway(id, next_x, next_z));
            grid.claim(next_x, next_z, id);

            // Straight tile while the cell two ahead is still free,
            // corner/junction otherwise.
            let kind = if grid.is_free(x + 2 * dx, z + 2 * dz) {
                TileKind::CorridorStraight
            } else {
                TileKind::CorridorCorner
            };
            sink.place(TilePlacement {
                kind,
                x: next_x,
                z: next_z,
                quarter_turns: direction.quarter_turns(),
            });

            x = next_x;
            z = next_z;
            cells_carved += 1;
            redirects = 0;
        } else {
            redirects += 1;
            if redirects > MAX_REDIRECTS {
                log::warn!(
                    "corridor walk from door ({}, {}) abandoned at ({x}, {z}) \
                     after {MAX_REDIRECTS} redirects",
                    door.x,
                    door.z
                );
                return WalkOutcome {
                    cells_carved,
                    stalled_at: Some((x, z)),
                };
            }
            direction = Direction::from_index(sampler.pick(0, 4));
        }
    }

    WalkOutcome {
        cells_carved,
        stalled_at: None,
    }
}

/// Carve corridors from every door of every room, in arena order.
pub fn carve_all(
    room_ids: &[u32],
    grid: &mut LevelGrid,
    sections: &mut Vec<Section>,
    sampler: &mut impl Sampler,
    sink: &mut impl PlacementSink,
) -> CarveStats {
    let mut stats = CarveStats::default();

    for &room_id in room_ids {
        // The walk appends hallway sections to the arena, so the door
        // list is copied out first.
        let doors = sections[room_id as usize].doors.clone();
        for door in doors {
            let outcome = carve_from(door, grid, sections, sampler, sink);
            stats.walks += 1;
            stats.cells_carved += outcome.cells_carved;
            if let Some(position) = outcome.stalled_at {
                stats.incomplete.push(position);
            }
        }
    }

    log::info!(
        "carved {} hallway cells in {} walks ({} incomplete)",
        stats.cells_carved,
        stats.walks,
        stats.incomplete.len()
    );
    stats
}
