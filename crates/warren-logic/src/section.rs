//! Sections — the owned regions of the grid — and their doors.
//!
//! Sections live in an indexed arena (`Vec<Section>`); grid cells and
//! doors refer to them by `u32` index, so there are no object-graph
//! cycles to manage. A section is never mutated after creation except to
//! append doors during door planning.

use serde::{Deserialize, Serialize};

/// What a section of the grid represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    /// A rectangular room with walls, corners, and at least one door.
    Room,
    /// A single carved corridor cell.
    Hallway,
}

/// A door on a room wall, consumed by the corridor carver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Arena index of the owning room.
    pub section: u32,
    pub x: i32,
    pub z: i32,
}

/// A claimed rectangular region of the grid.
///
/// `x`/`z` is the origin cell (west/south corner); `width`/`length`
/// count the cells spanned along x and z respectively. Hallway sections
/// are always 1×1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: u32,
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub length: i32,
    pub kind: SectionKind,
    pub doors: Vec<Door>,
}

impl Section {
    /// A room spanning the given cell rectangle. Doors are appended
    /// later by the door planner.
    pub fn room(id: u32, x: i32, z: i32, width: i32, length: i32) -> Self {
        Self {
            id,
            x,
            z,
            width,
            length,
            kind: SectionKind::Room,
            doors: Vec::new(),
        }
    }

    /// A 1×1 hallway cell claimed by a corridor walk.
    pub fn hallway(id: u32, x: i32, z: i32) -> Self {
        Self {
            id,
            x,
            z,
            width: 1,
            length: 1,
            kind: SectionKind::Hallway,
            doors: Vec::new(),
        }
    }

    /// Easternmost cell of the span.
    pub fn x_end(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Northernmost cell of the span.
    pub fn z_end(&self) -> i32 {
        self.z + self.length - 1
    }

    /// Whether the cell lies inside this section's bounding rectangle.
    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.x && x <= self.x_end() && z >= self.z && z <= self.z_end()
    }

    /// Whether the cell is one of the four corners of the rectangle.
    pub fn is_corner(&self, x: i32, z: i32) -> bool {
        (x == self.x || x == self.x_end()) && (z == self.z || z == self.z_end())
    }
}
