//! Resize engine: scale a whole group to a new bounding box.
//!
//! Each direct child is re-anchored along the ray from the old group center
//! through its own center, at `scale` times its old distance from the new group
//! center. This keeps every member's angular position relative to the group.
//! The child itself is then scaled at its new anchor:
//!
//! - points move to the anchor,
//! - circles move to the anchor and multiply their radius,
//! - polylines and polygons scale every vertex about their own center and are
//!   carried over to the anchor,
//! - nested groups are inflated around the anchor by the same factor, without a
//!   pinned corner.
//!
//! Only the width ratio is applied to both dimensions. A box with a different
//! aspect ratio is approximated and reported as such in the notification.

use crate::bounds::{Anchor, is_uniform_scale, scale_ratio};
use crate::events::GroupEvent;
use crate::geo::{BoundingBox, LatLng};
use crate::shapes::{Group, Shape, ShapeTrait};
use kurbo::Vec2;

/// Scale `group` to `new_bounds`.
///
/// With an `anchor`, the group is translated after scaling so that the anchor's
/// corner of the resulting bounds sits on the anchor point. Without one the
/// group is scaled about the center of `new_bounds`.
///
/// No boundary check is made here, callers gate the resize with
/// [`crate::BoundaryValidator::can_resize`] first. Returns `None` for a group
/// without any coordinates.
pub fn resize_group(
    group: &mut Group,
    new_bounds: &BoundingBox,
    anchor: Option<Anchor>,
) -> Option<GroupEvent> {
    let old_bounds = group.bounds()?;

    let mut scale = scale_ratio(&old_bounds, new_bounds);
    if !scale.is_finite() {
        log::warn!(
            "Group {} has zero width, resizing without scaling",
            group.id()
        );
        scale = 1.0;
    }
    let approximate = !is_uniform_scale(&old_bounds, new_bounds);
    if approximate {
        log::warn!(
            "Group {} resize changes aspect ratio, applying width ratio {} to both axes",
            group.id(),
            scale
        );
    }
    log::debug!("Resizing group {} by {}", group.id(), scale);

    rescale_children(group, scale, old_bounds.center(), new_bounds.center());

    if let Some(anchor) = anchor {
        pin_corner(group, anchor);
    }

    Some(GroupEvent::Edited {
        group: group.id(),
        old_bounds,
        new_bounds: group.bounds().unwrap_or(*new_bounds),
        scale,
        approximate,
    })
}

/// Bounds that [`resize_group`] produces for a group spanning `old_bounds`.
///
/// The group is scaled by the width ratio about the center of `new_bounds` and
/// then shifted onto the anchor, so with a non-uniform request the result can
/// extend past `new_bounds`.
pub fn resized_bounds(
    old_bounds: &BoundingBox,
    new_bounds: &BoundingBox,
    anchor: Option<Anchor>,
) -> BoundingBox {
    let mut scale = scale_ratio(old_bounds, new_bounds);
    if !scale.is_finite() {
        scale = 1.0;
    }
    let scaled = old_bounds.scaled_about(new_bounds.center(), scale);
    match anchor {
        Some(anchor) => scaled.translate(anchor.point - scaled.corner(anchor.corner)),
        None => scaled,
    }
}

/// Where a child centered at `child_center` goes when the group center moves
/// from `old_center` to `new_center` and distances grow by `scale`.
pub fn scaled_sub_center(
    child_center: LatLng,
    scale: f64,
    old_center: LatLng,
    new_center: LatLng,
) -> LatLng {
    if child_center == old_center {
        return new_center;
    }
    let offset = child_center - old_center;
    let distance = offset.hypot() * scale;
    new_center + Vec2::from_angle(offset.atan2()) * distance
}

fn rescale_children(group: &mut Group, scale: f64, old_center: LatLng, new_center: LatLng) {
    for child in &mut group.children {
        let Some(child_center) = child.center() else {
            continue;
        };
        let target = scaled_sub_center(child_center, scale, old_center, new_center);
        log::trace!(
            "Child {} anchored at ({}, {})",
            child.id(),
            target.lat,
            target.lng
        );
        scale_shape(child, child_center, target, scale);
    }
}

fn scale_shape(shape: &mut Shape, center: LatLng, target: LatLng, scale: f64) {
    match shape {
        Shape::Point(marker) => marker.position = target,
        Shape::Circle(circle) => {
            circle.center = target;
            circle.radius *= scale;
        }
        Shape::Path(path) => {
            for vertex in path.vertices_mut() {
                *vertex = target + (*vertex - center) * scale;
            }
        }
        Shape::Group(group) => {
            // Inflate by the parent's factor around the anchor. Zero-width
            // sub-groups must still scale vertically.
            if let Some(bounds) = group.bounds() {
                let inflated = bounds.scaled_about(target, scale);
                rescale_children(group, scale, bounds.center(), inflated.center());
            }
        }
    }
}

/// Translate the group so `anchor.corner` of its bounds lands on `anchor.point`.
fn pin_corner(group: &mut Group, anchor: Anchor) {
    let Some(bounds) = group.bounds() else {
        return;
    };
    let drift = anchor.point - bounds.corner(anchor.corner);
    if drift != Vec2::ZERO {
        log::debug!(
            "Pinning {:?} corner of group {}, shifting by (lat {:+}, lng {:+})",
            anchor.corner,
            group.id(),
            drift.y,
            drift.x
        );
        group.translate(drift);
    }
}
