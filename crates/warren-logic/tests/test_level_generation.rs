//! Integration tests for the full level generation pipeline.
//!
//! Exercises: LevelConfig → partition → rooms/doors → corridor carving
//! → validation, end to end on the public API.

use warren_logic::config::LevelConfig;
use warren_logic::corridors::carve_all;
use warren_logic::grid::LevelGrid;
use warren_logic::level::{generate, Level};
use warren_logic::partition::{partition, Bounds, RoomRegion};
use warren_logic::placement::{DiscardPlacements, RecordedPlacements, TileKind};
use warren_logic::random::{seeded, Sampler};
use warren_logic::rooms::build_room;
use warren_logic::section::{Section, SectionKind};
use warren_logic::validate::{check_level, Severity};

// ── Helpers ────────────────────────────────────────────────────────────

fn config(width: i32, length: i32) -> LevelConfig {
    LevelConfig {
        level_width: width,
        level_length: length,
        ..LevelConfig::default()
    }
}

fn generate_level(width: i32, length: i32, seed: u64) -> Level {
    generate(&config(width, length), &mut seeded(seed), &mut DiscardPlacements)
        .expect("valid config should generate")
}

/// Stub sampler that always splits a range at its midpoint.
struct MidpointSampler;

impl Sampler for MidpointSampler {
    fn pick(&mut self, lo: i32, hi: i32) -> i32 {
        (lo + hi) / 2
    }
}

// ── Pipeline coherence ─────────────────────────────────────────────────

#[test]
fn pipeline_runs_and_validates() {
    for seed in 0..8 {
        let level = generate_level(80, 80, seed);
        let errors: Vec<_> = check_level(&level)
            .into_iter()
            .filter(|e| e.severity == Severity::Error)
            .collect();
        assert!(errors.is_empty(), "seed {seed}: {errors:?}");
    }
}

#[test]
fn deterministic_grid_dumps() {
    let a = generate_level(100, 100, 42);
    let b = generate_level(100, 100, 42);
    assert_eq!(a.dump(), b.dump());
    assert_eq!(a.sections(), b.sections());
}

#[test]
fn deterministic_placements() {
    let mut first = RecordedPlacements::new();
    let mut second = RecordedPlacements::new();
    generate(&config(60, 60), &mut seeded(7), &mut first).unwrap();
    generate(&config(60, 60), &mut seeded(7), &mut second).unwrap();
    assert_eq!(first.tiles, second.tiles);
}

#[test]
fn different_seeds_differ() {
    let a = generate_level(100, 100, 1);
    let b = generate_level(100, 100, 2);
    assert_ne!(a.dump(), b.dump());
}

#[test]
fn dimension_adjustment_is_applied() {
    let level = generate_level(11, 10, 3);
    assert_eq!(level.grid().width(), 10);
    assert_eq!(level.grid().length(), 10);
    let unchanged = generate_level(10, 10, 3);
    assert_eq!(unchanged.grid().width(), 10);
}

// ── Layout invariants ──────────────────────────────────────────────────

#[test]
fn every_occupied_cell_has_exactly_one_owner_containing_it() {
    let level = generate_level(120, 120, 9);
    let grid = level.grid();
    for z in 0..grid.length() {
        for x in 0..grid.width() {
            if let Some(id) = grid.owner(x, z) {
                assert!(
                    level.section(id).contains(x, z),
                    "cell ({x}, {z}) outside its owner's rectangle"
                );
            }
        }
    }
}

#[test]
fn every_room_has_a_door_on_a_wall() {
    let level = generate_level(120, 120, 13);
    assert!(!level.room_ids().is_empty());
    for room in level.rooms() {
        assert!(!room.doors.is_empty(), "room {} has no doors", room.id);
        for door in &room.doors {
            let on_x_edge = door.x == room.x || door.x == room.x_end();
            let on_z_edge = door.z == room.z || door.z == room.z_end();
            assert!(
                on_x_edge ^ on_z_edge,
                "door ({}, {}) of room {} not on exactly one wall",
                door.x,
                door.z,
                room.id
            );
            assert!(!room.is_corner(door.x, door.z));
        }
    }
}

#[test]
fn corridors_never_claim_room_cells() {
    let level = generate_level(100, 100, 5);
    let rooms: Vec<&Section> = level.rooms().collect();
    for hallway in level
        .sections()
        .iter()
        .filter(|s| s.kind == SectionKind::Hallway)
    {
        for room in &rooms {
            assert!(
                !room.contains(hallway.x, hallway.z),
                "hallway cell ({}, {}) inside room {}",
                hallway.x,
                hallway.z,
                room.id
            );
        }
    }
}

#[test]
fn placements_cover_all_room_cells_and_corridors() {
    let mut sink = RecordedPlacements::new();
    let level = generate(&config(60, 60), &mut seeded(19), &mut sink).unwrap();

    let room_cells: usize = level
        .rooms()
        .map(|r| (r.width * r.length) as usize)
        .sum();
    let corridor_tiles = sink.of_kind(TileKind::CorridorStraight).len()
        + sink.of_kind(TileKind::CorridorCorner).len();

    assert_eq!(sink.tiles.len(), room_cells + corridor_tiles);
    assert_eq!(corridor_tiles, level.carve_stats().cells_carved);
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn midpoint_20x20_yields_four_connected_8x8_rooms() {
    // Partition with midpoint splits, then build and carve with a real
    // seeded generator.
    let regions = partition(Bounds::of_grid(20, 20), 10, &mut MidpointSampler);
    assert_eq!(regions.len(), 4);
    for region in &regions {
        assert_eq!((region.width, region.length), (8, 8));
    }

    let mut grid = LevelGrid::new(20, 20);
    let mut sections = Vec::new();
    let mut sampler = seeded(27);
    let mut sink = DiscardPlacements;
    let room_ids: Vec<u32> = regions
        .iter()
        .map(|&r| build_room(r, &mut grid, &mut sections, &mut sampler, &mut sink))
        .collect();
    carve_all(&room_ids, &mut grid, &mut sections, &mut sampler, &mut sink);

    // Everything off the partition seam lines belongs to a room.
    let seam = |v: i32| v == 0 || v == 9 || v == 10 || v == 19;
    for x in 0..20 {
        for z in 0..20 {
            if !seam(x) && !seam(z) {
                let owner = grid.owner(x, z).expect("non-seam cell unowned");
                assert_eq!(sections[owner as usize].kind, SectionKind::Room);
            }
        }
    }

    // Each room is reachable: some door touches a carved hallway cell.
    let is_hallway = |grid: &LevelGrid, sections: &[Section], x: i32, z: i32| {
        grid.owner(x, z)
            .map(|id| sections[id as usize].kind == SectionKind::Hallway)
            .unwrap_or(false)
    };
    for &id in &room_ids {
        let reached = sections[id as usize].doors.iter().any(|d| {
            is_hallway(&grid, &sections, d.x + 1, d.z)
                || is_hallway(&grid, &sections, d.x - 1, d.z)
                || is_hallway(&grid, &sections, d.x, d.z + 1)
                || is_hallway(&grid, &sections, d.x, d.z - 1)
        });
        assert!(reached, "room {id} is not reachable from a corridor");
    }
}

#[test]
fn midpoint_12x8_splits_exactly_once_into_two_rooms() {
    let regions = partition(Bounds::of_grid(12, 8), 10, &mut MidpointSampler);
    assert_eq!(regions.len(), 2, "expected exactly 2 rooms: {regions:?}");
    assert_eq!(regions[0], RoomRegion { x: 1, z: 1, width: 4, length: 6 });
    assert_eq!(regions[1], RoomRegion { x: 7, z: 1, width: 4, length: 6 });
}

#[test]
fn dump_matches_grid_dimensions() {
    let level = generate_level(40, 20, 2);
    let dump = level.dump();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 20);
    for line in lines {
        assert_eq!(line.len(), 40);
        assert!(line.chars().all(|c| c == 'X' || c == 'o'));
    }
}
