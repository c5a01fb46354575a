//! The placement service boundary.
//!
//! The generator never renders. It issues placement requests — a
//! semantic tile kind, an integer grid coordinate, and a rotation in
//! quarter turns — through the [`PlacementSink`] trait. Engine
//! integrations implement the trait; tests and the headless harness use
//! [`RecordedPlacements`]. Grid coordinates scale to world units by the
//! configured cell size (default 4.0 distance units per cell).

use serde::{Deserialize, Serialize};

/// Semantic kind of a placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Corner,
    Wall,
    Door,
    Floor,
    CorridorStraight,
    CorridorCorner,
}

/// Axis-aligned walk direction. Indices follow the corridor walk
/// convention: 0 = north (+z), 1 = east (+x), 2 = south (-z),
/// 3 = west (-x).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Direction for a uniform draw in `[0, 4)`.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    /// One-cell step along this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Rotation of a corridor tile carved while walking this direction.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// A single placement request issued by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub kind: TileKind,
    pub x: i32,
    pub z: i32,
    /// Rotation as a multiple of 90°, 0–3.
    pub quarter_turns: u8,
}

impl TilePlacement {
    /// World-space position of the tile for a given cell size.
    pub fn world_position(&self, cell_size: f32) -> (f32, f32) {
        (self.x as f32 * cell_size, self.z as f32 * cell_size)
    }

    /// Rotation in degrees.
    pub fn rotation_degrees(&self) -> f32 {
        self.quarter_turns as f32 * 90.0
    }
}

/// External collaborator that materializes placement requests.
pub trait PlacementSink {
    fn place(&mut self, tile: TilePlacement);
}

/// Sink that records every request, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordedPlacements {
    pub tiles: Vec<TilePlacement>,
}

impl RecordedPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements of one kind, in issue order.
    pub fn of_kind(&self, kind: TileKind) -> Vec<TilePlacement> {
        self.tiles.iter().copied().filter(|t| t.kind == kind).collect()
    }
}

impl PlacementSink for RecordedPlacements {
    fn place(&mut self, tile: TilePlacement) {
        self.tiles.push(tile);
    }
}

/// Sink that drops every request, for callers that only need the grid.
#[derive(Debug, Default)]
pub struct DiscardPlacements;

impl PlacementSink for DiscardPlacements {
    fn place(&mut self, _tile: TilePlacement) {}
}
