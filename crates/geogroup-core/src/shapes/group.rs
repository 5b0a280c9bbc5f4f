//! Group shape for combining multiple shapes.

use super::{OwnerTag, Shape, ShapeId, ShapeTrait};
use crate::geo::{BoundingBox, LatLng};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A group of shapes that is moved and resized as a single unit.
/// Groups can contain other groups, enabling nested hierarchies.
///
/// The bounding box is always derived from the children and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub(crate) id: ShapeId,
    /// Child shapes in display order.
    pub children: Vec<Shape>,
    #[serde(default)]
    pub(crate) owner: Option<OwnerTag>,
}

impl Group {
    /// Create a new group from a list of shapes.
    pub fn new(children: Vec<Shape>) -> Self {
        Self::with_id(Uuid::new_v4(), children)
    }

    /// Create a new group with a specific ID.
    pub fn with_id(id: ShapeId, children: Vec<Shape>) -> Self {
        Self {
            id,
            children,
            owner: None,
        }
    }

    /// Get the children of this group.
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    /// Get mutable access to children.
    pub fn children_mut(&mut self) -> &mut Vec<Shape> {
        &mut self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Find a shape by ID within this group (including nested groups).
    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        for child in &self.children {
            if child.id() == id {
                return Some(child);
            }
            if let Shape::Group(group) = child {
                if let Some(found) = group.find_shape(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Find a nested group by ID, including this group itself.
    pub fn find_group_mut(&mut self, id: ShapeId) -> Option<&mut Group> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .filter_map(Shape::as_group_mut)
            .find_map(|group| group.find_group_mut(id))
    }
}

impl ShapeTrait for Group {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Option<BoundingBox> {
        self.children
            .iter()
            .filter_map(Shape::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    fn center(&self) -> Option<LatLng> {
        self.bounds().map(|b| b.center())
    }

    fn translate(&mut self, delta: Vec2) {
        for child in &mut self.children {
            child.translate(delta);
        }
    }

    fn owner(&self) -> Option<OwnerTag> {
        self.owner
    }

    fn set_owner(&mut self, owner: OwnerTag) {
        self.owner = Some(owner);
    }
}
