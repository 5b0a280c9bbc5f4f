//! Interactive editing of one group: a move handle at the center and four
//! corner handles, gated by the boundary validator.

use crate::bounds::{Anchor, CornerIndex};
use crate::config::GroupEditConfig;
use crate::events::{EditorEvent, GroupEvent};
use crate::geo::{BoundingBox, LatLng};
use crate::record::EditRecord;
use crate::resize::{resize_group, resized_bounds};
use crate::shapes::{Group, ShapeId, ShapeTrait};
use crate::translate::move_group;
use crate::validate::BoundaryValidator;

/// Handle state and pending undo record for a group being edited.
///
/// The session does not own the group; every gesture step takes it by
/// reference so the host keeps a single source of truth.
#[derive(Debug, Clone)]
pub struct EditSession {
    group: ShapeId,
    validator: BoundaryValidator,
    move_handle: LatLng,
    corner_handles: [LatLng; 4],
    anchor: Option<Anchor>,
    pending: Option<EditRecord>,
}

impl EditSession {
    pub fn new(group: &Group, config: GroupEditConfig) -> Self {
        let mut session = Self {
            group: group.id(),
            validator: BoundaryValidator::new(config),
            move_handle: LatLng::default(),
            corner_handles: [LatLng::default(); 4],
            anchor: None,
            pending: None,
        };
        session.reposition_handles(group);
        session
    }

    pub fn group_id(&self) -> ShapeId {
        self.group
    }

    pub fn move_handle(&self) -> LatLng {
        self.move_handle
    }

    /// Corner handle positions in NW, NE, SE, SW order.
    pub fn corner_handles(&self) -> &[LatLng; 4] {
        &self.corner_handles
    }

    /// The pinned corner of the resize in progress, if any.
    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    fn max_bounds(&self) -> Option<BoundingBox> {
        self.validator.config().max_bounds
    }

    /// Start dragging the `dragged` corner handle; the opposite corner is pinned.
    pub fn begin_resize(&mut self, group: &Group, dragged: CornerIndex) {
        self.anchor = group
            .bounds()
            .map(|bounds| Anchor::at(&bounds, dragged.opposite()));
    }

    /// Drag the move handle to `new_center`.
    ///
    /// A step that would leave the outer boundary snaps the handle back to the
    /// group center and changes nothing.
    pub fn move_to(&mut self, group: &mut Group, new_center: LatLng) -> Option<EditorEvent> {
        let original_center = group.center()?;
        let admissible = self
            .max_bounds()
            .is_none_or(|max_bounds| self.validator.can_move(group, new_center, &max_bounds));
        if !admissible {
            log::debug!("Move of group {} rejected by boundary", group.id());
            self.move_handle = original_center;
            return None;
        }

        move_group(group, new_center)?;
        self.reposition_handles(group);
        let event = EditorEvent::Move {
            group: group.id(),
            original_center,
            new_center,
        };
        self.track(&event);
        Some(event)
    }

    /// Drag the active corner handle to `cursor`.
    ///
    /// Requires [`EditSession::begin_resize`] first. The requested box spans the
    /// cursor and the pinned point; the pinned corner follows the point when the
    /// cursor crosses it. The bounds the group would actually reach are checked
    /// against the outer boundary.
    pub fn resize_to(&mut self, group: &mut Group, cursor: LatLng) -> Option<EditorEvent> {
        let Some(pinned) = self.anchor else {
            log::warn!("Resize of group {} without an active corner", group.id());
            return None;
        };
        let original_bounds = group.bounds()?;
        let new_bounds = BoundingBox::from_corners(cursor, pinned.point);
        let anchor = pinned.pinned_in(&new_bounds);
        let reached = resized_bounds(&original_bounds, &new_bounds, Some(anchor));
        let admissible = self.max_bounds().is_none_or(|max_bounds| {
            self.validator
                .can_resize(group, Some(&original_bounds), &reached, &max_bounds)
        });
        if !admissible {
            log::debug!("Resize of group {} rejected", group.id());
            self.reposition_handles(group);
            return None;
        }

        resize_group(group, &new_bounds, Some(anchor))?;
        self.reposition_handles(group);
        let event = EditorEvent::Resize {
            group: group.id(),
            original_bounds,
            new_bounds,
            anchor,
        };
        self.track(&event);
        Some(event)
    }

    /// Move without gating or events, then refresh the handles.
    ///
    /// Leaves the pending record of the current gesture untouched.
    pub fn apply_move(&mut self, group: &mut Group, new_center: LatLng) -> Option<GroupEvent> {
        let event = move_group(group, new_center);
        self.reposition_handles(group);
        event
    }

    /// Resize without gating or events, then refresh the handles.
    pub fn apply_resize(
        &mut self,
        group: &mut Group,
        bounds: &BoundingBox,
        anchor: Option<Anchor>,
    ) -> Option<GroupEvent> {
        let event = resize_group(group, bounds, anchor);
        self.reposition_handles(group);
        event
    }

    /// Put the move handle on the group center and the corner handles on its corners.
    pub fn reposition_handles(&mut self, group: &Group) {
        if let Some(bounds) = group.bounds() {
            self.move_handle = bounds.center();
            self.corner_handles = bounds.corners();
        }
    }

    /// End the current gesture, returning the record of everything it changed.
    pub fn finish(&mut self) -> Option<EditRecord> {
        self.anchor = None;
        self.pending.take()
    }

    fn track(&mut self, event: &EditorEvent) {
        let absorbed = self
            .pending
            .as_mut()
            .is_some_and(|record| record.absorb(event));
        if !absorbed {
            self.pending = Some(EditRecord::from_event(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EditChange;
    use crate::shapes::{Marker, Path};

    const EPS: f64 = 1e-9;

    fn group() -> Group {
        Group::new(vec![
            Path::from_ring(vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(4.0, 0.0),
                LatLng::new(4.0, 4.0),
                LatLng::new(0.0, 4.0),
            ])
            .into(),
            Marker::new(LatLng::new(1.0, 3.0)).into(),
        ])
    }

    fn bounded() -> GroupEditConfig {
        GroupEditConfig::default().with_max_bounds(BoundingBox::new(10.0, 0.0, 10.0, 0.0))
    }

    #[test]
    fn test_handles_follow_bounds() {
        let g = group();
        let session = EditSession::new(&g, GroupEditConfig::default());
        assert_eq!(session.move_handle(), LatLng::new(2.0, 2.0));
        assert_eq!(session.corner_handles()[0], LatLng::new(4.0, 0.0));
        assert_eq!(session.corner_handles()[2], LatLng::new(0.0, 4.0));
    }

    #[test]
    fn test_move_steps_collapse_into_one_record() {
        let mut g = group();
        let mut session = EditSession::new(&g, bounded());

        assert!(session.move_to(&mut g, LatLng::new(3.0, 3.0)).is_some());
        assert!(session.move_to(&mut g, LatLng::new(5.0, 4.0)).is_some());
        assert_eq!(session.move_handle(), LatLng::new(5.0, 4.0));

        let record = session.finish().unwrap();
        assert_eq!(
            record.change,
            EditChange::Move {
                before: LatLng::new(2.0, 2.0),
                after: LatLng::new(5.0, 4.0),
            }
        );
        assert!(session.finish().is_none());
    }

    #[test]
    fn test_rejected_move_resets_handle() {
        let mut g = group();
        let mut session = EditSession::new(&g, bounded());
        let before = g.clone();

        assert!(session.move_to(&mut g, LatLng::new(9.0, 9.0)).is_none());
        assert_eq!(g, before);
        assert_eq!(session.move_handle(), LatLng::new(2.0, 2.0));
        assert!(session.finish().is_none());
    }

    #[test]
    fn test_resize_pins_opposite_corner() {
        let mut g = group();
        let mut session = EditSession::new(&g, bounded());
        session.begin_resize(&g, CornerIndex::NorthEast);
        assert_eq!(
            session.anchor(),
            Some(Anchor::new(LatLng::new(0.0, 0.0), CornerIndex::SouthWest))
        );

        let event = session.resize_to(&mut g, LatLng::new(8.0, 8.0)).unwrap();
        assert_eq!(event.edit_type(), "editfg/Resize");

        let bounds = g.bounds().unwrap();
        assert!(bounds.south.abs() < EPS && bounds.west.abs() < EPS);
        assert!((bounds.north - 8.0).abs() < EPS && (bounds.east - 8.0).abs() < EPS);
        assert!((session.corner_handles()[1].lat - 8.0).abs() < EPS);

        let record = session.finish().unwrap();
        assert!(session.anchor().is_none());
        match record.change {
            EditChange::Resize { before, after } => {
                assert_eq!(before.bounds, BoundingBox::new(4.0, 0.0, 4.0, 0.0));
                assert_eq!(after.bounds, BoundingBox::new(8.0, 0.0, 8.0, 0.0));
            }
            other => panic!("Expected resize, got {other:?}"),
        }
    }

    #[test]
    fn test_resize_rejected_outside_or_too_small() {
        let mut g = group();
        let mut session = EditSession::new(&g, bounded());
        session.begin_resize(&g, CornerIndex::NorthEast);
        let before = g.clone();

        assert!(session.resize_to(&mut g, LatLng::new(12.0, 12.0)).is_none());
        assert!(session.resize_to(&mut g, LatLng::new(0.2, 0.2)).is_none());
        assert_eq!(g, before);
    }

    #[test]
    fn test_resize_across_pinned_point_stays_inside() {
        let mut g = Group::new(vec![
            Path::from_ring(vec![
                LatLng::new(6.0, 6.0),
                LatLng::new(9.0, 6.0),
                LatLng::new(9.0, 9.0),
                LatLng::new(6.0, 9.0),
            ])
            .into(),
        ]);
        let limits = BoundingBox::new(10.0, 0.0, 10.0, 0.0);
        let mut session = EditSession::new(&g, GroupEditConfig::default().with_max_bounds(limits));
        session.begin_resize(&g, CornerIndex::NorthEast);

        let event = session.resize_to(&mut g, LatLng::new(0.0, 0.0)).unwrap();

        let bounds = g.bounds().unwrap();
        assert!(limits.contains_bounds(&bounds), "{bounds:?}");
        assert!((bounds.north - 6.0).abs() < EPS && (bounds.east - 6.0).abs() < EPS);
        assert!(bounds.south.abs() < EPS && bounds.west.abs() < EPS);
        match event {
            EditorEvent::Resize { anchor, .. } => {
                assert_eq!(anchor.corner, CornerIndex::NorthEast);
            }
            other => panic!("Expected resize, got {other:?}"),
        }
    }

    #[test]
    fn test_resize_rejected_when_result_overflows() {
        // 2 wide, 3 tall: doubling the width to reach the cursor also doubles the height.
        let mut g = Group::new(vec![
            Path::from_ring(vec![
                LatLng::new(6.0, 6.0),
                LatLng::new(9.0, 6.0),
                LatLng::new(9.0, 8.0),
                LatLng::new(6.0, 8.0),
            ])
            .into(),
        ]);
        let mut session = EditSession::new(
            &g,
            GroupEditConfig::default().with_max_bounds(BoundingBox::new(10.0, 0.0, 10.0, 0.0)),
        );
        session.begin_resize(&g, CornerIndex::NorthEast);
        let before = g.clone();

        assert!(session.resize_to(&mut g, LatLng::new(7.0, 10.0)).is_none());
        assert_eq!(g, before);
    }

    #[test]
    fn test_apply_move_keeps_pending_record() {
        let mut g = group();
        let mut session = EditSession::new(&g, bounded());

        session.apply_move(&mut g, LatLng::new(9.0, 9.0));
        assert_eq!(session.move_handle(), LatLng::new(9.0, 9.0));
        assert!(session.finish().is_none());

        session.move_to(&mut g, LatLng::new(8.0, 8.0));
        session.apply_move(&mut g, LatLng::new(2.0, 2.0));
        assert_eq!(
            session.finish().map(|record| record.change),
            Some(EditChange::Move {
                before: LatLng::new(9.0, 9.0),
                after: LatLng::new(8.0, 8.0),
            })
        );
    }

    #[test]
    fn test_resize_without_corner_is_ignored() {
        let mut g = group();
        let mut session = EditSession::new(&g, GroupEditConfig::default());
        assert!(session.resize_to(&mut g, LatLng::new(8.0, 8.0)).is_none());
    }
}
