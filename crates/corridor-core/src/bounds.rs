//! Axis-aligned hitboxes and the face-overlap collision test.
//!
//! A hitbox is a fixed-size box centered on an entity's position (plus an
//! optional offset). Its six faces are recomputed whenever the entity
//! moves, and two boxes collide only when they overlap on all three axes.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Fixed box dimensions and center offset for an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Extent along x (corridor axis).
    pub width: f64,
    /// Extent along y (vertical).
    pub height: f64,
    /// Extent along z (lateral).
    pub depth: f64,
    /// Box center relative to the entity position.
    pub offset: Position,
}

/// The six scalar faces of a hitbox at its current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HitboxFaces {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub front: f64,
    pub back: f64,
}

/// Per-axis overlap result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOverlap {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Hitbox {
    /// A centered box. Negative dimensions are clamped to zero.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            depth: depth.max(0.0),
            offset: Position::default(),
        }
    }

    /// A cube of the given edge length.
    pub fn cube(edge: f64) -> Self {
        Self::new(edge, edge, edge)
    }

    pub fn with_offset(mut self, offset: Position) -> Self {
        self.offset = offset;
        self
    }

    /// Compute the faces for an entity positioned at `position`.
    pub fn faces_at(&self, position: &Position) -> HitboxFaces {
        let cx = position.x + self.offset.x;
        let cy = position.y + self.offset.y;
        let cz = position.z + self.offset.z;
        HitboxFaces {
            top: cy + self.height * 0.5,
            bottom: cy - self.height * 0.5,
            left: cx - self.width * 0.5,
            right: cx + self.width * 0.5,
            front: cz - self.depth * 0.5,
            back: cz + self.depth * 0.5,
        }
    }
}

impl AxisOverlap {
    /// True when the boxes intersect on every axis.
    pub fn all(&self) -> bool {
        self.x && self.y && self.z
    }
}

/// Compare two boxes face by face.
pub fn overlaps(a: &HitboxFaces, b: &HitboxFaces) -> AxisOverlap {
    AxisOverlap {
        x: a.right >= b.left && a.left <= b.right,
        y: a.top >= b.bottom && a.bottom <= b.top,
        z: a.front <= b.back && a.back >= b.front,
    }
}

/// Full AABB intersection.
pub fn collides(a: &HitboxFaces, b: &HitboxFaces) -> bool {
    overlaps(a, b).all()
}
