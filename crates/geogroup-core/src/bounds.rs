//! Scale ratios and corner bookkeeping between an old and a new bounding box.

use crate::geo::{BoundingBox, LatLng};
use serde::{Deserialize, Serialize};

/// Relative tolerance used when deciding whether a resize kept its aspect ratio.
const UNIFORM_SCALE_TOLERANCE: f64 = 1e-9;

/// Corner of a bounding box, numbered nw=0, ne=1, se=2, sw=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerIndex {
    NorthWest = 0,
    NorthEast = 1,
    SouthEast = 2,
    SouthWest = 3,
}

impl CornerIndex {
    /// Corners in the priority order used by corner detection.
    pub const ALL: [CornerIndex; 4] = [
        CornerIndex::NorthWest,
        CornerIndex::NorthEast,
        CornerIndex::SouthEast,
        CornerIndex::SouthWest,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }
}

/// A corner held in place during a resize: which corner, and where it must end up.
///
/// The resize engine shifts the scaled group by `point - corner`, so the pinned
/// corner matches `point` up to the rounding of that shift: a few ulps of the
/// coordinates involved, not bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub point: LatLng,
    pub corner: CornerIndex,
}

impl Anchor {
    pub fn new(point: LatLng, corner: CornerIndex) -> Self {
        Self { point, corner }
    }

    /// Pin `corner` of `bounds` where it currently is.
    pub fn at(bounds: &BoundingBox, corner: CornerIndex) -> Self {
        Self::new(bounds.corner(corner), corner)
    }

    /// The same point, pinned at whichever corner of `bounds` it occupies.
    ///
    /// A drag that crosses the pinned point flips the box, moving the point to
    /// another corner. Falls back to `self` when `point` is not a corner of
    /// `bounds`.
    pub fn pinned_in(self, bounds: &BoundingBox) -> Self {
        if bounds.corner(self.corner) == self.point {
            return self;
        }
        CornerIndex::ALL
            .into_iter()
            .find(|&corner| bounds.corner(corner) == self.point)
            .map_or(self, |corner| Self::new(self.point, corner))
    }
}

/// Ratio of the new width to the old width.
///
/// Both dimensions are scaled by this single factor. A resize that changes the
/// aspect ratio is only approximated; see [`is_uniform_scale`]. The result is not
/// finite when `old` has zero width.
pub fn scale_ratio(old: &BoundingBox, new: &BoundingBox) -> f64 {
    new.width() / old.width()
}

/// Whether the height changes by the same factor as the width.
pub fn is_uniform_scale(old: &BoundingBox, new: &BoundingBox) -> bool {
    let scale = scale_ratio(old, new);
    let expected_height = old.height() * scale;
    let tolerance = UNIFORM_SCALE_TOLERANCE * new.height().abs().max(1.0);
    (expected_height - new.height()).abs() <= tolerance
}

pub fn corner_of(bounds: &BoundingBox, index: CornerIndex) -> LatLng {
    bounds.corner(index)
}

/// Corners whose coordinates are identical in both boxes, in NW, NE, SE, SW order.
pub fn shared_corners<'a>(
    old: &'a BoundingBox,
    new: &'a BoundingBox,
) -> impl Iterator<Item = CornerIndex> + 'a {
    CornerIndex::ALL
        .into_iter()
        .filter(move |&index| old.corner(index) == new.corner(index))
}

/// The single corner `old` and `new` have in common.
///
/// Returns `None` when no corner or more than one corner coincides; the
/// candidate is ambiguous in both cases.
pub fn detect_fixed_corner(old: &BoundingBox, new: &BoundingBox) -> Option<CornerIndex> {
    let mut shared = shared_corners(old, new);
    let first = shared.next()?;
    match shared.next() {
        Some(_) => None,
        None => Some(first),
    }
}
