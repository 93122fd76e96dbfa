//! Block-grid helpers used when placing portals and facing arrivals.

use super::Location;

/// A block position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub world: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(world: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

/// One of the six faces of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl BlockFace {
    /// Unit offset `(x, y, z)` pointing out of this face.
    pub const fn delta(self) -> (i32, i32, i32) {
        match self {
            BlockFace::North => (0, 0, -1),
            BlockFace::East => (1, 0, 0),
            BlockFace::South => (0, 0, 1),
            BlockFace::West => (-1, 0, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::Down => (0, -1, 0),
        }
    }

    /// The face pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            BlockFace::North => BlockFace::South,
            BlockFace::East => BlockFace::West,
            BlockFace::South => BlockFace::North,
            BlockFace::West => BlockFace::East,
            BlockFace::Up => BlockFace::Down,
            BlockFace::Down => BlockFace::Up,
        }
    }

    /// Yaw that looks out of a sideways face; `fallback` for up/down.
    pub fn yaw(self, fallback: f32) -> f32 {
        match self {
            BlockFace::North => 180.0,
            BlockFace::East => 270.0,
            BlockFace::South => 0.0,
            BlockFace::West => 90.0,
            BlockFace::Up | BlockFace::Down => fallback,
        }
    }

    /// Pitch that looks out of an up/down face; `fallback` for sideways.
    pub fn pitch(self, fallback: f32) -> f32 {
        match self {
            BlockFace::Up => -90.0,
            BlockFace::Down => 90.0,
            _ => fallback,
        }
    }
}

/// Centre of the box spanned by two blocks, in the first block's world.
///
/// Both blocks are included, so adjacent blocks yield the shared face
/// centre plus half a block on the other axes.
pub fn center_between(a: &BlockPos, b: &BlockPos) -> Location {
    let mid = |p: i32, q: i32| (p as f64 + q as f64 + 1.0) / 2.0;
    Location::new(a.world.clone(), mid(a.x, b.x), mid(a.y, b.y), mid(a.z, b.z))
}

impl Location {
    /// Move this location `amount` blocks out of `face`.
    #[must_use]
    pub fn offset(mut self, face: BlockFace, amount: f64) -> Self {
        let (dx, dy, dz) = face.delta();
        self.x += dx as f64 * amount;
        self.y += dy as f64 * amount;
        self.z += dz as f64 * amount;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_faces_outward() {
        assert_eq!(BlockFace::North.yaw(12.0), 180.0);
        assert_eq!(BlockFace::East.yaw(12.0), 270.0);
        assert_eq!(BlockFace::South.yaw(12.0), 0.0);
        assert_eq!(BlockFace::West.yaw(12.0), 90.0);
        assert_eq!(BlockFace::Up.yaw(12.0), 12.0);
    }

    #[test]
    fn pitch_only_for_vertical_faces() {
        assert_eq!(BlockFace::Up.pitch(5.0), -90.0);
        assert_eq!(BlockFace::Down.pitch(5.0), 90.0);
        assert_eq!(BlockFace::North.pitch(5.0), 5.0);
    }

    #[test]
    fn opposite_is_involution() {
        for face in [
            BlockFace::North,
            BlockFace::East,
            BlockFace::South,
            BlockFace::West,
            BlockFace::Up,
            BlockFace::Down,
        ] {
            assert_eq!(face.opposite().opposite(), face);
            let (x, y, z) = face.delta();
            assert_eq!(face.opposite().delta(), (-x, -y, -z));
        }
    }

    #[test]
    fn center_of_two_stacked_blocks() {
        let lower = BlockPos::new("world", 10, 64, -5);
        let upper = BlockPos::new("world", 10, 65, -5);
        let center = center_between(&lower, &upper);
        assert_eq!(center, Location::new("world", 10.5, 65.0, -4.5));
    }

    #[test]
    fn offset_moves_along_face() {
        let loc = Location::new("world", 0.5, 64.0, 0.5).offset(BlockFace::West, 0.5);
        assert_eq!(loc.x, 0.0);
        let loc = loc.offset(BlockFace::Up, 2.0);
        assert_eq!(loc.y, 66.0);
    }
}
