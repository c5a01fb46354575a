//! Recursive binary partition of the level rectangle into room leaves.
//!
//! A rectangle whose extents are both within the room-size threshold is
//! a leaf: it is deflated by one cell on every side (reserving the
//! margin for walls and corridor approach) and emitted as a room
//! region. Larger rectangles split along their longer axis at a
//! uniformly random interior coordinate. Equal extents split along x.
//!
//! The subdivision runs on an explicit worklist rather than the call
//! stack; each split strictly shrinks the axis it divides, so the list
//! always drains.

use crate::random::Sampler;

/// Inclusive coordinate bounds of a rectangle under subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
    pub z_min: i32,
    pub z_max: i32,
}

impl Bounds {
    pub fn new(x_min: i32, x_max: i32, z_min: i32, z_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
        }
    }

    /// Bounds covering a whole grid.
    pub fn of_grid(width: i32, length: i32) -> Self {
        Self::new(0, width - 1, 0, length - 1)
    }

    fn x_extent(&self) -> i32 {
        self.x_max - self.x_min
    }

    fn z_extent(&self) -> i32 {
        self.z_max - self.z_min
    }
}

/// A deflated leaf accepted as a room region: origin cell plus cell
/// counts, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRegion {
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub length: i32,
}

/// Deflate a leaf by its 1-cell margin, or `None` when the result is
/// degenerate. A region also needs at least one axis of 3+ cells so a
/// non-corner wall cell exists to host the mandatory door.
fn deflate(leaf: Bounds) -> Option<RoomRegion> {
    let width = leaf.x_extent() - 1;
    let length = leaf.z_extent() - 1;
    if width < 2 || length < 2 {
        return None;
    }
    if width < 3 && length < 3 {
        return None;
    }
    Some(RoomRegion {
        x: leaf.x_min + 1,
        z: leaf.z_min + 1,
        width,
        length,
    })
}

/// Partition `bounds` into room regions no larger than `threshold` on
/// either axis. Degenerate leaves are dropped silently; they contribute
/// to the level's residual empty cells.
pub fn partition(bounds: Bounds, threshold: i32, sampler: &mut impl Sampler) -> Vec<RoomRegion> {
    let mut regions = Vec::new();
    let mut worklist = vec![bounds];

    while let Some(current) = worklist.pop() {
        let split_x = current.x_extent() >= current.z_extent();
        let extent = if split_x {
            current.x_extent()
        } else {
            current.z_extent()
        };

        // Leaf when within threshold, or too thin to split further.
        if (current.x_extent() <= threshold && current.z_extent() <= threshold) || extent < 2 {
            match deflate(current) {
                Some(region) => regions.push(region),
                None => log::debug!(
                    "dropping degenerate leaf ({},{})..({},{})",
                    current.x_min,
                    current.z_min,
                    current.x_max,
                    current.z_max
                ),
            }
            continue;
        }

        // Split at an interior coordinate: halves [min, r-1] and [r, max].
        let (left, right) = if split_x {
            let r = sampler.pick(current.x_min + 1, current.x_max);
            (
                Bounds::new(current.x_min, r - 1, current.z_min, current.z_max),
                Bounds::new(r, current.x_max, current.z_min, current.z_max),
            )
        } else {
            let r = sampler.pick(current.z_min + 1, current.z_max);
            (
                Bounds::new(current.x_min, current.x_max, current.z_min, r - 1),
                Bounds::new(current.x_min, current.x_max, r, current.z_max),
            )
        };
        // Depth-first, left half first.
        worklist.push(right);
        worklist.push(left);
    }

    regions
}
