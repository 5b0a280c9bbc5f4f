//! Point marker shape.

use super::{OwnerTag, ShapeId, ShapeTrait};
use crate::geo::{BoundingBox, LatLng};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single placed coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub(crate) id: ShapeId,
    /// Position of the marker.
    pub position: LatLng,
    #[serde(default)]
    pub(crate) owner: Option<OwnerTag>,
}

impl Marker {
    pub fn new(position: LatLng) -> Self {
        Self::with_id(Uuid::new_v4(), position)
    }

    pub fn with_id(id: ShapeId, position: LatLng) -> Self {
        Self {
            id,
            position,
            owner: None,
        }
    }
}

impl ShapeTrait for Marker {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_corners(self.position, self.position))
    }

    fn center(&self) -> Option<LatLng> {
        Some(self.position)
    }

    fn translate(&mut self, delta: Vec2) {
        self.position = self.position + delta;
    }

    fn owner(&self) -> Option<OwnerTag> {
        self.owner
    }

    fn set_owner(&mut self, owner: OwnerTag) {
        self.owner = Some(owner);
    }
}
