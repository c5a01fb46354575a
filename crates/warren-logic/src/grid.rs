//! The occupancy grid.
//!
//! A fixed-size `width × length` matrix of cell owners. Each cell is
//! either empty or owned by exactly one section, identified by its arena
//! index. A claim is one-time and irreversible: once a cell is owned it
//! is never reassigned, which is what makes single-writer generation
//! safe without any locking.

/// Occupancy grid mapping cells to section indices.
#[derive(Debug, Clone)]
pub struct LevelGrid {
    width: i32,
    length: i32,
    cells: Vec<Option<u32>>,
}

impl LevelGrid {
    /// An empty grid. Dimensions must be positive (validated upstream
    /// by the level configuration).
    pub fn new(width: i32, length: i32) -> Self {
        Self {
            width,
            length,
            cells: vec![None; (width * length) as usize],
        }
    }

    /// Grid extent along x.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid extent along z.
    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn in_bounds(&self, x: i32, z: i32) -> bool {
        x >= 0 && x < self.width && z >= 0 && z < self.length
    }

    fn index(&self, x: i32, z: i32) -> usize {
        (z * self.width + x) as usize
    }

    /// Owning section index of a cell, or `None` if the cell is empty
    /// or out of bounds.
    pub fn owner(&self, x: i32, z: i32) -> Option<u32> {
        if !self.in_bounds(x, z) {
            return None;
        }
        self.cells[self.index(x, z)]
    }

    /// Whether a cell is inside the grid and unclaimed.
    pub fn is_free(&self, x: i32, z: i32) -> bool {
        self.in_bounds(x, z) && self.cells[self.index(x, z)].is_none()
    }

    /// Claim a cell for a section. Returns false — and leaves the cell
    /// untouched — if the cell is out of bounds or already owned.
    pub fn claim(&mut self, x: i32, z: i32, section: u32) -> bool {
        if !self.is_free(x, z) {
            return false;
        }
        let index = self.index(x, z);
        self.cells[index] = Some(section);
        true
    }

    /// Whether a corridor walk at this cell could step east or west.
    pub fn can_move_in_x(&self, x: i32, z: i32) -> bool {
        self.is_free(x + 1, z) || self.is_free(x - 1, z)
    }

    /// Whether a corridor walk at this cell could step north or south.
    pub fn can_move_in_z(&self, x: i32, z: i32) -> bool {
        self.is_free(x, z + 1) || self.is_free(x, z - 1)
    }

    /// Number of claimed cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of unclaimed cells.
    pub fn empty_cells(&self) -> usize {
        self.cells.len() - self.occupied_cells()
    }

    /// Textual rendering of occupancy for inspection and tests: one
    /// line per z row from 0, one character per x column from 0,
    /// 'X' for an owned cell and 'o' for an empty one.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.length) as usize);
        for z in 0..self.length {
            for x in 0..self.width {
                out.push(if self.cells[self.index(x, z)].is_some() {
                    'X'
                } else {
                    'o'
                });
            }
            out.push('\n');
        }
        out
    }
}
