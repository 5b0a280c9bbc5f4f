//! Shape definitions for group editing.

mod circle;
mod group;
mod marker;
mod path;

pub use circle::Circle;
pub use group::Group;
pub use marker::Marker;
pub use path::Path;

use crate::geo::{BoundingBox, LatLng};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Identifies the top-level group a shape belongs to.
///
/// Only used for lookups by hit-testing and snapping collaborators; it never
/// implies ownership of the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerTag(pub Uuid);

impl OwnerTag {
    /// Generate a fresh tag.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OwnerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box, or `None` for a shape without any coordinates.
    fn bounds(&self) -> Option<BoundingBox>;

    /// Get the reference point used when moving or scaling this shape.
    fn center(&self) -> Option<LatLng>;

    /// Shift every coordinate by a (Δlng, Δlat) vector.
    fn translate(&mut self, delta: Vec2);

    /// Get the owner tag, if the shape has been marked.
    fn owner(&self) -> Option<OwnerTag>;

    /// Overwrite the owner tag.
    fn set_owner(&mut self, owner: OwnerTag);
}

/// Enum wrapper for all shape kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Marker),
    Path(Path),
    Circle(Circle),
    Group(Group),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Point(s) => s.id(),
            Shape::Path(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Group(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        match self {
            Shape::Point(s) => s.bounds(),
            Shape::Path(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }

    pub fn center(&self) -> Option<LatLng> {
        match self {
            Shape::Point(s) => s.center(),
            Shape::Path(s) => s.center(),
            Shape::Circle(s) => s.center(),
            Shape::Group(s) => s.center(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Point(s) => s.translate(delta),
            Shape::Path(s) => s.translate(delta),
            Shape::Circle(s) => s.translate(delta),
            Shape::Group(s) => s.translate(delta),
        }
    }

    pub fn owner(&self) -> Option<OwnerTag> {
        match self {
            Shape::Point(s) => s.owner(),
            Shape::Path(s) => s.owner(),
            Shape::Circle(s) => s.owner(),
            Shape::Group(s) => s.owner(),
        }
    }

    pub fn set_owner(&mut self, owner: OwnerTag) {
        match self {
            Shape::Point(s) => s.set_owner(owner),
            Shape::Path(s) => s.set_owner(owner),
            Shape::Circle(s) => s.set_owner(owner),
            Shape::Group(s) => s.set_owner(owner),
        }
    }

    /// Check if this shape is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group(_))
    }

    /// Get the group if this shape is a group.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Get the mutable group if this shape is a group.
    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }
}

impl From<Marker> for Shape {
    fn from(s: Marker) -> Self {
        Shape::Point(s)
    }
}

impl From<Path> for Shape {
    fn from(s: Path) -> Self {
        Shape::Path(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Group> for Shape {
    fn from(s: Group) -> Self {
        Shape::Group(s)
    }
}
