//! Circle shape.

use super::{OwnerTag, ShapeId, ShapeTrait};
use crate::geo::{BoundingBox, LatLng};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle given by its center and radius.
///
/// The radius is in the same linear unit as the coordinate space, so the
/// bounding box is the center inflated by the radius on every side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: LatLng,
    /// Radius.
    pub radius: f64,
    #[serde(default)]
    pub(crate) owner: Option<OwnerTag>,
}

impl Circle {
    pub fn new(center: LatLng, radius: f64) -> Self {
        Self::with_id(Uuid::new_v4(), center, radius)
    }

    pub fn with_id(id: ShapeId, center: LatLng, radius: f64) -> Self {
        Self {
            id,
            center,
            radius,
            owner: None,
        }
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Option<BoundingBox> {
        let r = self.radius.abs();
        Some(BoundingBox::new(
            self.center.lat + r,
            self.center.lat - r,
            self.center.lng + r,
            self.center.lng - r,
        ))
    }

    fn center(&self) -> Option<LatLng> {
        Some(self.center)
    }

    fn translate(&mut self, delta: Vec2) {
        self.center = self.center + delta;
    }

    fn owner(&self) -> Option<OwnerTag> {
        self.owner
    }

    fn set_owner(&mut self, owner: OwnerTag) {
        self.owner = Some(owner);
    }
}
