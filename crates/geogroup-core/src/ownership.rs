//! Stamp every shape under a top-level group with that group's owner tag.

use crate::shapes::{Group, OwnerTag, Shape, ShapeTrait};

/// Tag `group` and everything beneath it with `owner`, or a fresh tag when
/// `owner` is `None`. Nested groups carry the top-level tag, not their own.
///
/// Re-marking overwrites earlier tags. Returns the tag that was applied.
pub fn mark_ownership(group: &mut Group, owner: Option<OwnerTag>) -> OwnerTag {
    let owner = owner.unwrap_or_else(OwnerTag::generate);
    log::debug!("Marking group {} with owner {}", group.id(), owner);
    mark_children(group, owner);
    group.set_owner(owner);
    owner
}

fn mark_children(group: &mut Group, owner: OwnerTag) {
    for child in &mut group.children {
        child.set_owner(owner);
        if let Shape::Group(nested) = child {
            mark_children(nested, owner);
        }
    }
}

/// Visit every shape under `group`, depth first.
pub fn for_each_member(group: &Group, f: &mut impl FnMut(&Shape)) {
    for child in &group.children {
        f(child);
        if let Shape::Group(nested) = child {
            for_each_member(nested, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLng;
    use crate::shapes::{Circle, Marker, Path};

    fn nested() -> Group {
        Group::new(vec![
            Marker::new(LatLng::new(0.0, 0.0)).into(),
            Group::new(vec![
                Circle::new(LatLng::new(1.0, 1.0), 1.0).into(),
                Group::new(vec![Path::polyline(vec![LatLng::new(2.0, 2.0)]).into()]).into(),
            ])
            .into(),
        ])
    }

    fn owners(group: &Group) -> Vec<Option<OwnerTag>> {
        let mut owners = Vec::new();
        for_each_member(group, &mut |shape| owners.push(shape.owner()));
        owners
    }

    #[test]
    fn test_mark_propagates_generated_tag() {
        let mut group = nested();
        let tag = mark_ownership(&mut group, None);

        assert_eq!(group.owner(), Some(tag));
        let owners = owners(&group);
        assert_eq!(owners.len(), 5);
        assert!(owners.iter().all(|owner| *owner == Some(tag)));
    }

    #[test]
    fn test_remark_overwrites() {
        let mut group = nested();
        let first = mark_ownership(&mut group, None);
        let second = OwnerTag::generate();
        assert_ne!(first, second);

        assert_eq!(mark_ownership(&mut group, Some(second)), second);
        assert!(owners(&group).iter().all(|owner| *owner == Some(second)));
    }
}
