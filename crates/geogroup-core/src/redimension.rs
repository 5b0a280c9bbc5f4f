//! Infer move-or-resize intent from an arbitrary target bounding box.

use crate::bounds::{Anchor, CornerIndex, detect_fixed_corner, scale_ratio, shared_corners};
use crate::config::GroupEditConfig;
use crate::events::GroupEvent;
use crate::geo::BoundingBox;
use crate::resize::resize_group;
use crate::shapes::{Group, ShapeTrait};
use crate::translate::move_group;

/// Forces a group to a target bounding box, choosing between the move and
/// resize engines.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedimensionCoordinator {
    config: GroupEditConfig,
}

impl RedimensionCoordinator {
    pub fn new(config: GroupEditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GroupEditConfig {
        &self.config
    }

    /// Bring `group` to `target`.
    ///
    /// A scale ratio within `redimension_move_ratio` of 1 is a pure move to the
    /// target's center. Anything else is a resize anchored on the first corner
    /// the current and target boxes share, in NW, NE, SE, SW order, or on the
    /// target's south-west corner when they share none.
    pub fn redimension(&self, group: &mut Group, target: &BoundingBox) -> Option<GroupEvent> {
        let current = group.bounds()?;
        let scale = scale_ratio(&current, target);

        if (scale - 1.0).abs() <= self.config.redimension_move_ratio {
            return move_group(group, target.center());
        }

        let corner = anchor_corner(group, &current, target);
        resize_group(group, target, Some(Anchor::at(target, corner)))
    }
}

fn anchor_corner(group: &Group, current: &BoundingBox, target: &BoundingBox) -> CornerIndex {
    if let Some(corner) = detect_fixed_corner(current, target) {
        return corner;
    }
    match shared_corners(current, target).next() {
        Some(corner) => {
            log::debug!(
                "Group {} shares several corners with its target, anchoring {:?}",
                group.id(),
                corner
            );
            corner
        }
        None => {
            log::warn!(
                "Group {} shares no corner with its target, anchoring south-west",
                group.id()
            );
            CornerIndex::SouthWest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLng;
    use crate::shapes::{Circle, Marker, Path, Shape};

    fn group() -> Group {
        Group::new(vec![
            Path::from_ring(vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(10.0, 0.0),
                LatLng::new(10.0, 10.0),
                LatLng::new(0.0, 10.0),
            ])
            .into(),
            Circle::new(LatLng::new(3.0, 3.0), 2.0).into(),
            Marker::new(LatLng::new(8.0, 8.0)).into(),
        ])
    }

    fn radius(group: &Group) -> f64 {
        match &group.children[1] {
            Shape::Circle(c) => c.radius,
            other => panic!("Expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_near_unit_scale_moves() {
        let mut g = group();
        let coordinator = RedimensionCoordinator::default();
        // Width 10.05 against 10: within 1% of the old size.
        let target = BoundingBox::new(25.0, 15.0, 30.05, 20.0);

        let event = coordinator.redimension(&mut g, &target).unwrap();

        assert!(event.is_move());
        assert!((radius(&g) - 2.0).abs() < f64::EPSILON);
        let bounds = g.bounds().unwrap();
        assert!((bounds.width() - 10.0).abs() < 1e-9);
        let center = bounds.center();
        assert!((center.lat - target.center().lat).abs() < 1e-9);
        assert!((center.lng - target.center().lng).abs() < 1e-9);
    }

    #[test]
    fn test_resize_keeps_shared_corner() {
        let mut g = group();
        let coordinator = RedimensionCoordinator::default();
        let target = BoundingBox::new(10.0, -10.0, 20.0, 0.0);

        let event = coordinator.redimension(&mut g, &target).unwrap();

        assert!(!event.is_move());
        assert!((radius(&g) - 4.0).abs() < 1e-9);
        let bounds = g.bounds().unwrap();
        assert!((bounds.north - 10.0).abs() < 1e-9);
        assert!(bounds.west.abs() < 1e-9);
        assert!((bounds.east - 20.0).abs() < 1e-9);
        assert!((bounds.south + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_several_shared_corners_pin_north_west() {
        let mut g = group();
        let coordinator = RedimensionCoordinator::default();
        // Shares NW (10, 0) and SW (0, 0) with the current 0..10 box.
        let target = BoundingBox::new(10.0, 0.0, 20.0, 0.0);

        let event = coordinator.redimension(&mut g, &target).unwrap();

        match event {
            GroupEvent::Edited { approximate, .. } => assert!(approximate),
            other => panic!("Expected edit, got {other:?}"),
        }
        let bounds = g.bounds().unwrap();
        assert!((bounds.north - 10.0).abs() < 1e-9);
        assert!(bounds.west.abs() < 1e-9);
        assert!((bounds.east - 20.0).abs() < 1e-9);
        assert!((bounds.south + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_shared_corner_anchors_south_west() {
        let mut g = group();
        let coordinator = RedimensionCoordinator::default();
        let target = BoundingBox::new(26.0, 1.0, 27.0, 2.0);

        coordinator.redimension(&mut g, &target).unwrap();

        let bounds = g.bounds().unwrap();
        assert!((bounds.south - 1.0).abs() < 1e-9);
        assert!((bounds.west - 2.0).abs() < 1e-9);
        assert!((bounds.width() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_move_ratio() {
        let mut g = group();
        let coordinator = RedimensionCoordinator::new(GroupEditConfig {
            redimension_move_ratio: 0.2,
            ..GroupEditConfig::default()
        });
        let target = BoundingBox::new(11.0, 0.0, 11.0, 0.0);

        assert!(coordinator.redimension(&mut g, &target).unwrap().is_move());
        assert!((radius(&g) - 2.0).abs() < f64::EPSILON);
    }
}
