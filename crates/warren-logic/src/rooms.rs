//! Room construction: cell classification, grid claiming, and tile
//! placement requests.
//!
//! Every cell of a room's span is classified as corner, wall (possibly
//! door), or floor. Corner rotations are keyed to which corner
//! (origin = 0 turns, then counter-clockwise); wall rotations to which
//! side (west = 0 turns, north, east, south). Floors carry no rotation.

use crate::doors::plan_doors;
use crate::grid::LevelGrid;
use crate::partition::RoomRegion;
use crate::placement::{PlacementSink, TileKind, TilePlacement};
use crate::random::Sampler;
use crate::section::Section;

/// Rotation of a corner tile at `(x, z)`, or `None` if the cell is not
/// a corner of the room.
pub fn corner_rotation(room: &Section, x: i32, z: i32) -> Option<u8> {
    if x == room.x && z == room.z {
        Some(0)
    } else if x == room.x && z == room.z_end() {
        Some(1)
    } else if x == room.x_end() && z == room.z_end() {
        Some(2)
    } else if x == room.x_end() && z == room.z {
        Some(3)
    } else {
        None
    }
}

/// Rotation of a wall tile at `(x, z)`, or `None` if the cell is not an
/// interior wall cell (corners excluded).
pub fn wall_rotation(room: &Section, x: i32, z: i32) -> Option<u8> {
    let x_interior = x > room.x && x < room.x_end();
    let z_interior = z > room.z && z < room.z_end();
    if x == room.x && z_interior {
        Some(0)
    } else if z == room.z_end() && x_interior {
        Some(1)
    } else if x == room.x_end() && z_interior {
        Some(2)
    } else if z == room.z && x_interior {
        Some(3)
    } else {
        None
    }
}

/// Build a room from a partition leaf: plan its doors, claim its span
/// into the grid, and request a tile for every cell. Returns the new
/// section's arena index.
pub fn build_room(
    region: RoomRegion,
    grid: &mut LevelGrid,
    sections: &mut Vec<Section>,
    sampler: &mut impl Sampler,
    sink: &mut impl PlacementSink,
) -> u32 {
    let id = sections.len() as u32;
    let mut room = Section::room(id, region.x, region.z, region.width, region.length);
    room.doors = plan_doors(&room, sampler);

    // Claim the full wall-inclusive span. The 1-cell leaf margin around
    // it stays free for corridor approach.
    for x in room.x..=room.x_end() {
        for z in room.z..=room.z_end() {
            if !grid.claim(x, z, id) {
                // Partition leaves are disjoint, so this indicates a
                // partitioner defect rather than an expected outcome.
                log::warn!("room {id} could not claim cell ({x}, {z})");
            }
        }
    }

    for x in room.x..=room.x_end() {
        for z in room.z..=room.z_end() {
            let (kind, quarter_turns) = if let Some(turns) = corner_rotation(&room, x, z) {
                (TileKind::Corner, turns)
            } else if let Some(turns) = wall_rotation(&room, x, z) {
                let is_door = room.doors.iter().any(|d| d.x == x && d.z == z);
                let kind = if is_door { TileKind::Door } else { TileKind::Wall };
                (kind, turns)
            } else {
                (TileKind::Floor, 0)
            };
            sink.place(TilePlacement {
                kind,
                x,
                z,
                quarter_turns,
            });
        }
    }

    log::debug!(
        "room {id}: span ({}, {})..({}, {}), {} doors",
        room.x,
        room.z,
        room.x_end(),
        room.z_end(),
        room.doors.len()
    );
    sections.push(room);
    id
}
