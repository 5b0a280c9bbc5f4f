//! Admissibility checks for moves and resizes against an outer boundary.

use crate::bounds::scale_ratio;
use crate::config::GroupEditConfig;
use crate::geo::{BoundingBox, LatLng};
use crate::shapes::{Group, ShapeTrait};

/// Decides whether a candidate move or resize keeps a group inside `max_bounds`.
///
/// Rejection is not an error; callers skip the mutation and restore whatever
/// optimistic UI state they changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryValidator {
    config: GroupEditConfig,
}

impl BoundaryValidator {
    pub fn new(config: GroupEditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GroupEditConfig {
        &self.config
    }

    /// Whether moving `group` to `new_center` keeps its bounds inside `max_bounds`.
    pub fn can_move(&self, group: &Group, new_center: LatLng, max_bounds: &BoundingBox) -> bool {
        let Some(bounds) = group.bounds() else {
            return false;
        };
        let moved = bounds.translate(new_center - bounds.center());
        max_bounds.contains(moved.north_east()) && max_bounds.contains(moved.south_west())
    }

    /// Whether resizing from `old_bounds` to `new_bounds` stays inside `max_bounds`
    /// without shrinking below the minimum resize ratio.
    ///
    /// `old_bounds` defaults to the group's current bounds.
    pub fn can_resize(
        &self,
        group: &Group,
        old_bounds: Option<&BoundingBox>,
        new_bounds: &BoundingBox,
        max_bounds: &BoundingBox,
    ) -> bool {
        let contained = new_bounds
            .corners()
            .into_iter()
            .all(|corner| max_bounds.contains(corner));
        if !contained {
            return false;
        }

        let Some(old_bounds) = old_bounds.copied().or_else(|| group.bounds()) else {
            return false;
        };
        let ratio = scale_ratio(&old_bounds, new_bounds);
        if ratio < self.config.minimum_resize_ratio {
            log::debug!(
                "Rejecting resize of group {}: ratio {} below minimum {}",
                group.id(),
                ratio,
                self.config.minimum_resize_ratio
            );
            return false;
        }
        ratio.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Marker, Path};
    use crate::translate::move_group;

    fn max_bounds() -> BoundingBox {
        BoundingBox::new(20.0, 0.0, 20.0, 0.0)
    }

    fn group() -> Group {
        Group::new(vec![
            Path::from_ring(vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(10.0, 0.0),
                LatLng::new(10.0, 10.0),
                LatLng::new(0.0, 10.0),
            ])
            .into(),
            Marker::new(LatLng::new(5.0, 5.0)).into(),
        ])
    }

    #[test]
    fn test_can_move_inside() {
        let validator = BoundaryValidator::default();
        assert!(validator.can_move(&group(), LatLng::new(15.0, 15.0), &max_bounds()));
        assert!(validator.can_move(&group(), LatLng::new(5.0, 5.0), &max_bounds()));
    }

    #[test]
    fn test_can_move_rejects_escape() {
        let validator = BoundaryValidator::default();
        assert!(!validator.can_move(&group(), LatLng::new(16.0, 10.0), &max_bounds()));
        assert!(!validator.can_move(&group(), LatLng::new(10.0, 4.0), &max_bounds()));
    }

    #[test]
    fn test_move_gate_matches_containment() {
        let validator = BoundaryValidator::default();
        let limits = max_bounds();
        for lat in [-1.0, 4.0, 5.0, 9.5, 15.0, 15.5, 21.0] {
            for lng in [-1.0, 5.0, 12.0, 15.0, 16.0] {
                let center = LatLng::new(lat, lng);
                let admissible = validator.can_move(&group(), center, &limits);
                let mut moved = group();
                move_group(&mut moved, center);
                let contained = limits.contains_bounds(&moved.bounds().unwrap());
                assert_eq!(admissible, contained, "center {center:?}");
            }
        }
    }

    #[test]
    fn test_can_resize_requires_containment() {
        let validator = BoundaryValidator::default();
        let g = group();
        assert!(validator.can_resize(&g, None, &BoundingBox::new(20.0, 0.0, 20.0, 0.0), &max_bounds()));
        assert!(!validator.can_resize(&g, None, &BoundingBox::new(21.0, 0.0, 20.0, 0.0), &max_bounds()));
    }

    #[test]
    fn test_minimum_resize_floor() {
        let validator = BoundaryValidator::default();
        let g = group();
        let old = g.bounds().unwrap();
        // 1.0 / 10.0 is exactly at the floor.
        assert!(validator.can_resize(&g, Some(&old), &BoundingBox::new(1.0, 0.0, 1.0, 0.0), &max_bounds()));
        assert!(!validator.can_resize(&g, Some(&old), &BoundingBox::new(0.9, 0.0, 0.9, 0.0), &max_bounds()));

        let strict = BoundaryValidator::new(GroupEditConfig {
            minimum_resize_ratio: 0.5,
            ..GroupEditConfig::default()
        });
        assert!(!strict.can_resize(&g, Some(&old), &BoundingBox::new(4.0, 0.0, 4.0, 0.0), &max_bounds()));
        assert!(strict.can_resize(&g, Some(&old), &BoundingBox::new(5.0, 0.0, 5.0, 0.0), &max_bounds()));
    }

    #[test]
    fn test_empty_group_is_never_admissible() {
        let validator = BoundaryValidator::default();
        let empty = Group::new(Vec::new());
        assert!(!validator.can_move(&empty, LatLng::new(1.0, 1.0), &max_bounds()));
        assert!(!validator.can_resize(&empty, None, &BoundingBox::new(2.0, 0.0, 2.0, 0.0), &max_bounds()));
    }
}
