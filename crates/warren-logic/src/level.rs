//! The generation pipeline and its result.
//!
//! Generation is single-threaded and run-to-completion: validate the
//! configuration, partition the grid into room leaves, build every
//! room (claiming cells and planning doors), then carve corridors from
//! every door. The finished [`Level`] exposes the occupancy grid and
//! section arena read-only for downstream consumers (spawn logic,
//! minimaps, debug dumps).

use crate::config::{validate_config, ConfigError, LevelConfig};
use crate::corridors::{carve_all, CarveStats};
use crate::grid::LevelGrid;
use crate::partition::{partition, Bounds};
use crate::placement::PlacementSink;
use crate::random::Sampler;
use crate::rooms::build_room;
use crate::section::{Door, Section, SectionKind};

/// A fully generated level layout.
#[derive(Debug)]
pub struct Level {
    config: LevelConfig,
    grid: LevelGrid,
    sections: Vec<Section>,
    room_ids: Vec<u32>,
    carve_stats: CarveStats,
}

impl Level {
    /// The adjusted configuration the level was generated with.
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn grid(&self) -> &LevelGrid {
        &self.grid
    }

    /// Every section in the arena, rooms and hallway cells alike.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: u32) -> &Section {
        &self.sections[id as usize]
    }

    /// Arena indices of the room sections, in build order.
    pub fn room_ids(&self) -> &[u32] {
        &self.room_ids
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Section> {
        self.room_ids.iter().map(|&id| &self.sections[id as usize])
    }

    /// Every door of every room.
    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.rooms().flat_map(|room| room.doors.iter())
    }

    pub fn carve_stats(&self) -> &CarveStats {
        &self.carve_stats
    }

    /// Textual occupancy rendering, for inspection and tests.
    pub fn dump(&self) -> String {
        self.grid.dump()
    }
}

/// Generate a level. Tile placement requests are issued through `sink`
/// as a side effect; the returned [`Level`] holds the resulting layout.
///
/// Fails only on invalid configuration. Degenerate partition leaves and
/// abandoned corridor walks are expected outcomes, reported through the
/// level's carve statistics and residual empty cells.
pub fn generate(
    config: &LevelConfig,
    sampler: &mut impl Sampler,
    sink: &mut impl PlacementSink,
) -> Result<Level, Vec<ConfigError>> {
    let errors = validate_config(config);
    if !errors.is_empty() {
        return Err(errors);
    }
    let config = config.adjusted();

    let mut grid = LevelGrid::new(config.level_width, config.level_length);
    let mut sections: Vec<Section> = Vec::new();

    let regions = partition(
        Bounds::of_grid(config.level_width, config.level_length),
        config.room_size_threshold,
        sampler,
    );
    let room_ids: Vec<u32> = regions
        .into_iter()
        .map(|region| build_room(region, &mut grid, &mut sections, sampler, sink))
        .collect();

    let carve_stats = carve_all(&room_ids, &mut grid, &mut sections, sampler, sink);

    let hallways = sections
        .iter()
        .filter(|s| s.kind == SectionKind::Hallway)
        .count();
    log::info!(
        "generated {}×{} level: {} rooms, {} hallway cells, {} cells empty",
        config.level_width,
        config.level_length,
        room_ids.len(),
        hallways,
        grid.empty_cells()
    );

    Ok(Level {
        config,
        grid,
        sections,
        room_ids,
        carve_stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::DiscardPlacements;
    use crate::random::seeded;

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let config = LevelConfig {
            level_width: 0,
            ..LevelConfig::default()
        };
        let result = generate(&config, &mut seeded(1), &mut DiscardPlacements);
        let errors = result.err().expect("generation should fail");
        assert!(errors.contains(&ConfigError::InvalidWidth(0)));
    }

    #[test]
    fn odd_dimensions_are_adjusted_in_result() {
        let config = LevelConfig {
            level_width: 41,
            level_length: 41,
            ..LevelConfig::default()
        };
        let level = generate(&config, &mut seeded(1), &mut DiscardPlacements).unwrap();
        assert_eq!(level.config().level_width, 40);
        assert_eq!(level.config().level_length, 40);
        assert_eq!(level.grid().width(), 40);
        assert_eq!(level.grid().length(), 40);
    }

    #[test]
    fn generation_produces_rooms_and_hallways() {
        let config = LevelConfig {
            level_width: 60,
            level_length: 60,
            ..LevelConfig::default()
        };
        let level = generate(&config, &mut seeded(8), &mut DiscardPlacements).unwrap();
        assert!(!level.room_ids().is_empty());
        assert!(level
            .sections()
            .iter()
            .any(|s| s.kind == SectionKind::Hallway));
        assert!(level.doors().count() >= level.room_ids().len());
    }
}
