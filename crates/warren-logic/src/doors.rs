//! Door planning for room walls.
//!
//! Chooses a validated set of door cells on a room's walls: a random
//! candidate count drawn against the number of usable wall cells, each
//! candidate on a uniformly chosen side at a coordinate strictly
//! between that side's corners. Duplicates are skipped rather than
//! re-rolled. A room that ends up with zero surviving candidates gets
//! one forced door so every room stays reachable.

use crate::random::Sampler;
use crate::section::{Door, Section};

/// Number of wall cells able to host a door: the four sides minus their
/// shared corners. Sides narrower than 3 cells contribute nothing.
pub fn wall_cell_count(room: &Section) -> i32 {
    2 * (room.width - 2).max(0) + 2 * (room.length - 2).max(0)
}

/// The forced fallback door: one cell inward from the origin corner
/// along the first wall that has interior cells.
fn fallback_door(room: &Section) -> Door {
    if room.width >= 3 {
        Door {
            section: room.id,
            x: room.x + 1,
            z: room.z,
        }
    } else {
        // Partitioning guarantees at least one axis of 3+ cells.
        Door {
            section: room.id,
            x: room.x,
            z: room.z + 1,
        }
    }
}

/// Plan the doors for a room. Guarantees at least one door, no
/// duplicates, and no door on a corner cell.
pub fn plan_doors(room: &Section, sampler: &mut impl Sampler) -> Vec<Door> {
    let mut doors: Vec<Door> = Vec::new();
    let wall_cells = wall_cell_count(room);

    if wall_cells >= 2 {
        let candidates = sampler.pick(1, wall_cells);
        for _ in 0..candidates {
            let side = sampler.pick(0, 4);
            let (x, z) = match side {
                // South and north walls need interior x cells.
                0 if room.width >= 3 => {
                    (sampler.pick(room.x + 1, room.x_end()), room.z)
                }
                1 if room.width >= 3 => {
                    (sampler.pick(room.x + 1, room.x_end()), room.z_end())
                }
                // West and east walls need interior z cells.
                2 if room.length >= 3 => {
                    (room.x, sampler.pick(room.z + 1, room.z_end()))
                }
                3 if room.length >= 3 => {
                    (room.x_end(), sampler.pick(room.z + 1, room.z_end()))
                }
                // The chosen side has no usable wall cell.
                _ => continue,
            };
            debug_assert!(!room.is_corner(x, z));
            if doors.iter().any(|d| d.x == x && d.z == z) {
                continue;
            }
            doors.push(Door {
                section: room.id,
                x,
                z,
            });
        }
    }

    if doors.is_empty() {
        doors.push(fallback_door(room));
    }
    doors
}
