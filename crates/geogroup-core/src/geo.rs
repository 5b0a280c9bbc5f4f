//! Latitude/longitude coordinates and axis-aligned bounding boxes.
//!
//! The space is flat: east/west arithmetic is plain signed subtraction and
//! never wraps around the antimeridian. Deltas are `kurbo::Vec2` values with
//! `x` carrying longitude and `y` carrying latitude.

use crate::bounds::CornerIndex;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A (latitude, longitude) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Shift this coordinate by a (Δlng, Δlat) vector.
    pub fn translate(self, delta: Vec2) -> Self {
        Self::new(self.lat + delta.y, self.lng + delta.x)
    }

    /// Planar distance in degrees.
    pub fn distance_to(self, other: LatLng) -> f64 {
        (other - self).hypot()
    }
}

impl Sub for LatLng {
    type Output = Vec2;

    fn sub(self, rhs: LatLng) -> Vec2 {
        Vec2::new(self.lng - rhs.lng, self.lat - rhs.lat)
    }
}

impl Add<Vec2> for LatLng {
    type Output = LatLng;

    fn add(self, rhs: Vec2) -> LatLng {
        self.translate(rhs)
    }
}

impl From<LatLng> for Point {
    fn from(p: LatLng) -> Self {
        Point::new(p.lng, p.lat)
    }
}

impl From<Point> for LatLng {
    fn from(p: Point) -> Self {
        LatLng::new(p.y, p.x)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        LatLng::new(lat, lng)
    }
}

/// Axis-aligned box given by its north/south/east/west extents.
///
/// Invariant: `north >= south` and `east >= west`. Use [`BoundingBox::from_corners`]
/// when the ordering of the inputs is not known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Build a box spanning two arbitrary opposite corners.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            north: a.lat.max(b.lat),
            south: a.lat.min(b.lat),
            east: a.lng.max(b.lng),
            west: a.lng.min(b.lng),
        }
    }

    /// Smallest box covering every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::from_corners(first, first);
        for p in points {
            bounds.extend(p);
        }
        Some(bounds)
    }

    /// Grow the box so it covers `p`.
    pub fn extend(&mut self, p: LatLng) {
        self.north = self.north.max(p.lat);
        self.south = self.south.min(p.lat);
        self.east = self.east.max(p.lng);
        self.west = self.west.min(p.lng);
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        Rect::from(*self).union(Rect::from(*other)).into()
    }

    pub fn center(&self) -> LatLng {
        LatLng::new((self.north + self.south) / 2.0, (self.east + self.west) / 2.0)
    }

    /// East minus west, signed.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// North minus south.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north, self.west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south, self.east)
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn corner(&self, index: CornerIndex) -> LatLng {
        match index {
            CornerIndex::NorthWest => self.north_west(),
            CornerIndex::NorthEast => self.north_east(),
            CornerIndex::SouthEast => self.south_east(),
            CornerIndex::SouthWest => self.south_west(),
        }
    }

    /// All four corners in NW, NE, SE, SW order.
    pub fn corners(&self) -> [LatLng; 4] {
        CornerIndex::ALL.map(|index| self.corner(index))
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }

    pub fn contains_bounds(&self, other: &BoundingBox) -> bool {
        self.contains(other.north_east()) && self.contains(other.south_west())
    }

    pub fn translate(&self, delta: Vec2) -> BoundingBox {
        (Rect::from(*self) + delta).into()
    }

    /// Inflate the box by `scale` in both dimensions and recenter it on `anchor`.
    pub fn scaled_about(&self, anchor: LatLng, scale: f64) -> BoundingBox {
        let half_width = self.width() * scale / 2.0;
        let half_height = self.height() * scale / 2.0;
        BoundingBox::from_corners(
            LatLng::new(anchor.lat + half_height, anchor.lng + half_width),
            LatLng::new(anchor.lat - half_height, anchor.lng - half_width),
        )
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        Rect::new(b.west, b.south, b.east, b.north)
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        BoundingBox::new(r.y1, r.y0, r.x1, r.x0)
    }
}
