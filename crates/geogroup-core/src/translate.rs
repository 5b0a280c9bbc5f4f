//! Move engine: translate a whole group to a new center.

use crate::events::GroupEvent;
use crate::geo::LatLng;
use crate::shapes::{Group, ShapeTrait};

/// Move `group` so the center of its bounds lands on `new_center`.
///
/// Every coordinate under the group is shifted by the same delta; circle radii
/// are left alone. No boundary check is made here, callers gate the move with
/// [`crate::BoundaryValidator::can_move`] first.
///
/// Returns `None` for a group without any coordinates.
pub fn move_group(group: &mut Group, new_center: LatLng) -> Option<GroupEvent> {
    let old_center = group.center()?;
    let delta = new_center - old_center;
    log::debug!(
        "Moving group {} by (lat {:+}, lng {:+})",
        group.id(),
        delta.y,
        delta.x
    );
    group.translate(delta);
    Some(GroupEvent::Moved {
        group: group.id(),
        from: old_center,
        to: new_center,
    })
}
