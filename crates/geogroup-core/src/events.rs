//! Notifications produced by the engines and the edit session.

use crate::bounds::Anchor;
use crate::geo::{BoundingBox, LatLng};
use crate::shapes::ShapeId;
use serde::{Deserialize, Serialize};

/// Tag carried by move edits, also accepted as an undo dispatch key.
pub const EDIT_TYPE_MOVE: &str = "editfg/Move";
/// Tag carried by resize edits, also accepted as an undo dispatch key.
pub const EDIT_TYPE_RESIZE: &str = "editfg/Resize";

/// Returned by the move and resize engines once a group has been mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GroupEvent {
    /// Every member was translated so the group center went from `from` to `to`.
    Moved {
        group: ShapeId,
        from: LatLng,
        to: LatLng,
    },
    /// Every member was scaled by `scale`.
    ///
    /// `approximate` is set when the requested box had a different aspect
    /// ratio than the old one; only the width ratio was applied.
    Edited {
        group: ShapeId,
        old_bounds: BoundingBox,
        new_bounds: BoundingBox,
        scale: f64,
        approximate: bool,
    },
}

impl GroupEvent {
    pub fn group(&self) -> ShapeId {
        match self {
            GroupEvent::Moved { group, .. } | GroupEvent::Edited { group, .. } => *group,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, GroupEvent::Moved { .. })
    }
}

/// Higher-level event raised by an edit session after an accepted gesture step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    Move {
        group: ShapeId,
        original_center: LatLng,
        new_center: LatLng,
    },
    Resize {
        group: ShapeId,
        original_bounds: BoundingBox,
        new_bounds: BoundingBox,
        anchor: Anchor,
    },
}

impl EditorEvent {
    pub fn group(&self) -> ShapeId {
        match self {
            EditorEvent::Move { group, .. } | EditorEvent::Resize { group, .. } => *group,
        }
    }

    /// The edit-type tag for this event.
    pub fn edit_type(&self) -> &'static str {
        match self {
            EditorEvent::Move { .. } => EDIT_TYPE_MOVE,
            EditorEvent::Resize { .. } => EDIT_TYPE_RESIZE,
        }
    }
}
