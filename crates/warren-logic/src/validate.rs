//! Post-generation invariant checks.
//!
//! Pure functions over a finished [`Level`] that return validation
//! errors instead of panicking. The harness runs them after every
//! generation; tests use them to assert the structural invariants of
//! the layout (single ownership, door placement, reachability).

use crate::grid::LevelGrid;
use crate::level::Level;
use crate::section::{Section, SectionKind};

/// A layout validation finding.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

/// Check that every occupied cell's owner exists and that the cell lies
/// inside the owner's bounding rectangle (the grid back-reference
/// invariant), and that every section fully owns its own span.
pub fn check_cell_ownership(level: &Level) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let grid = level.grid();
    let sections = level.sections();

    for z in 0..grid.length() {
        for x in 0..grid.width() {
            let Some(owner) = grid.owner(x, z) else {
                continue;
            };
            match sections.get(owner as usize) {
                None => errors.push(ValidationError {
                    category: "ownership",
                    severity: Severity::Error,
                    message: format!("cell ({x}, {z}) owned by non-existent section {owner}"),
                }),
                Some(section) if !section.contains(x, z) => errors.push(ValidationError {
                    category: "ownership",
                    severity: Severity::Error,
                    message: format!(
                        "cell ({x}, {z}) outside owning section {owner}'s rectangle"
                    ),
                }),
                Some(_) => {}
            }
        }
    }

    for section in sections {
        for x in section.x..=section.x_end() {
            for z in section.z..=section.z_end() {
                if grid.owner(x, z) != Some(section.id) {
                    errors.push(ValidationError {
                        category: "ownership",
                        severity: Severity::Error,
                        message: format!(
                            "section {} does not own its span cell ({x}, {z})",
                            section.id
                        ),
                    });
                }
            }
        }
    }
    errors
}

/// Check that every room has at least one door.
pub fn check_rooms_have_doors(rooms: &[&Section]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for room in rooms {
        if room.doors.is_empty() {
            errors.push(ValidationError {
                category: "doors",
                severity: Severity::Error,
                message: format!("room {} has no doors", room.id),
            });
        }
    }
    errors
}

/// Check that every door lies on a wall cell of its room and never on a
/// corner.
pub fn check_doors_on_walls(rooms: &[&Section]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for room in rooms {
        for door in &room.doors {
            if door.section != room.id {
                errors.push(ValidationError {
                    category: "doors",
                    severity: Severity::Error,
                    message: format!(
                        "door ({}, {}) back-references section {} instead of {}",
                        door.x, door.z, door.section, room.id
                    ),
                });
            }
            let on_x_edge = door.x == room.x || door.x == room.x_end();
            let on_z_edge = door.z == room.z || door.z == room.z_end();
            if !(on_x_edge ^ on_z_edge) || !room.contains(door.x, door.z) {
                errors.push(ValidationError {
                    category: "doors",
                    severity: Severity::Error,
                    message: format!(
                        "door ({}, {}) of room {} is not on a wall cell",
                        door.x, door.z, room.id
                    ),
                });
            }
        }
    }
    errors
}

/// Check that no section extends outside the grid.
pub fn check_sections_within_grid(
    sections: &[Section],
    grid: &LevelGrid,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for section in sections {
        if section.x < 0
            || section.z < 0
            || section.x_end() >= grid.width()
            || section.z_end() >= grid.length()
        {
            errors.push(ValidationError {
                category: "bounds",
                severity: Severity::Error,
                message: format!(
                    "section {} spans ({}, {})..({}, {}) outside the {}×{} grid",
                    section.id,
                    section.x,
                    section.z,
                    section.x_end(),
                    section.z_end(),
                    grid.width(),
                    grid.length()
                ),
            });
        }
    }
    errors
}

/// AABB test that no two rooms overlap.
pub fn check_room_overlaps(rooms: &[&Section]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            let a = rooms[i];
            let b = rooms[j];
            let overlap_x = a.x <= b.x_end() && b.x <= a.x_end();
            let overlap_z = a.z <= b.z_end() && b.z <= a.z_end();
            if overlap_x && overlap_z {
                errors.push(ValidationError {
                    category: "overlap",
                    severity: Severity::Error,
                    message: format!("rooms {} and {} overlap", a.id, b.id),
                });
            }
        }
    }
    errors
}

/// Check that every room has at least one door adjacent to a carved
/// hallway cell. A room failing this is unreachable; walks abandoned at
/// the redirect cap make it a warning rather than a hard error.
pub fn check_rooms_reach_corridors(level: &Level) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let grid = level.grid();
    let sections = level.sections();

    let is_hallway = |x: i32, z: i32| {
        grid.owner(x, z)
            .map(|id| sections[id as usize].kind == SectionKind::Hallway)
            .unwrap_or(false)
    };

    for room in level.rooms() {
        let reached = room.doors.iter().any(|door| {
            is_hallway(door.x + 1, door.z)
                || is_hallway(door.x - 1, door.z)
                || is_hallway(door.x, door.z + 1)
                || is_hallway(door.x, door.z - 1)
        });
        if !reached {
            errors.push(ValidationError {
                category: "connectivity",
                severity: Severity::Warning,
                message: format!("no door of room {} touches a corridor", room.id),
            });
        }
    }
    errors
}

/// Run every check over a finished level.
pub fn check_level(level: &Level) -> Vec<ValidationError> {
    let rooms: Vec<&Section> = level.rooms().collect();
    let mut errors = Vec::new();
    errors.extend(check_cell_ownership(level));
    errors.extend(check_rooms_have_doors(&rooms));
    errors.extend(check_doors_on_walls(&rooms));
    errors.extend(check_sections_within_grid(level.sections(), level.grid()));
    errors.extend(check_room_overlaps(&rooms));
    errors.extend(check_rooms_reach_corridors(level));
    errors
}
