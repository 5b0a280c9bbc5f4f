//! Polyline and polygon shape.

use super::{OwnerTag, ShapeId, ShapeTrait};
use crate::geo::{BoundingBox, LatLng};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An open polyline or a (possibly holed) polygon.
///
/// Open polylines have exactly one ring and are not closed. Polygons store
/// their outer ring first, followed by any hole rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub(crate) id: ShapeId,
    /// Ordered vertex rings.
    pub rings: Vec<Vec<LatLng>>,
    /// Whether the rings are closed polygon rings.
    pub closed: bool,
    #[serde(default)]
    pub(crate) owner: Option<OwnerTag>,
}

impl Path {
    /// Create an open polyline.
    pub fn polyline(points: Vec<LatLng>) -> Self {
        Self {
            id: Uuid::new_v4(),
            rings: vec![points],
            closed: false,
            owner: None,
        }
    }

    /// Create a polygon from an outer ring and optional holes.
    pub fn polygon(rings: Vec<Vec<LatLng>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            rings,
            closed: true,
            owner: None,
        }
    }

    /// Create a polygon from a single ring.
    pub fn from_ring(ring: Vec<LatLng>) -> Self {
        Self::polygon(vec![ring])
    }

    /// Get all vertices across every ring.
    pub fn vertices(&self) -> impl Iterator<Item = &LatLng> {
        self.rings.iter().flatten()
    }

    /// Get mutable access to all vertices across every ring.
    pub fn vertices_mut(&mut self) -> impl Iterator<Item = &mut LatLng> {
        self.rings.iter_mut().flatten()
    }

    fn outer_ring(&self) -> Option<&[LatLng]> {
        self.rings.first().map(Vec::as_slice).filter(|ring| !ring.is_empty())
    }
}

/// Area-weighted centroid of a ring, `None` for zero area.
fn ring_centroid(ring: &[LatLng]) -> Option<LatLng> {
    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        let cross = a.lng * b.lat - b.lng * a.lat;
        area2 += cross;
        cx += (a.lng + b.lng) * cross;
        cy += (a.lat + b.lat) * cross;
    }
    if area2.abs() < f64::EPSILON {
        return None;
    }
    Some(LatLng::new(cy / (3.0 * area2), cx / (3.0 * area2)))
}

/// Point halfway along the polyline's length.
fn polyline_midpoint(points: &[LatLng]) -> Option<LatLng> {
    let first = *points.first()?;
    let total: f64 = points.windows(2).map(|w| w[0].distance_to(w[1])).sum();
    if total <= 0.0 {
        return Some(first);
    }

    let mut remaining = total / 2.0;
    for w in points.windows(2) {
        let segment = w[0].distance_to(w[1]);
        if segment >= remaining && segment > 0.0 {
            return Some(w[0] + (w[1] - w[0]) * (remaining / segment));
        }
        remaining -= segment;
    }
    points.last().copied()
}

impl ShapeTrait for Path {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.vertices().copied())
    }

    fn center(&self) -> Option<LatLng> {
        let ring = self.outer_ring()?;
        if self.closed {
            ring_centroid(ring).or_else(|| self.bounds().map(|b| b.center()))
        } else {
            polyline_midpoint(ring)
        }
    }

    fn translate(&mut self, delta: Vec2) {
        for vertex in self.vertices_mut() {
            *vertex = *vertex + delta;
        }
    }

    fn owner(&self) -> Option<OwnerTag> {
        self.owner
    }

    fn set_owner(&mut self, owner: OwnerTag) {
        self.owner = Some(owner);
    }
}
