//! Entity handles and positions.

use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

/// Opaque handle to a movable world object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Uuid);

impl EntityId {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a host-provided uuid.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A position in a named world, with optional facing.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
}

impl Location {
    /// A location facing south and level (yaw 0, pitch 0).
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Replace the facing.
    #[must_use]
    pub fn with_facing(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// True if `other` is in the same world and inside the axis-aligned
    /// box of half-extents `radius` centred here. Bounds are inclusive.
    pub fn is_within(&self, other: &Location, radius: &Radius) -> bool {
        self.world == other.world
            && (self.x - other.x).abs() <= radius.x
            && (self.y - other.y).abs() <= radius.y
            && (self.z - other.z).abs() <= radius.z
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.1},{:.1},{:.1}",
            self.world, self.x, self.y, self.z
        )
    }
}

/// Half-extents of a search box around a location.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Radius {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Radius {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
