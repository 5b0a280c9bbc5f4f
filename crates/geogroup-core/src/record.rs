//! Immutable snapshots of completed moves and resizes, for the host's undo history.

use crate::bounds::Anchor;
use crate::events::{EDIT_TYPE_MOVE, EDIT_TYPE_RESIZE, EditorEvent};
use crate::geo::{BoundingBox, LatLng};
use crate::shapes::ShapeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An edit-type tag that names neither a move nor a resize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown edit type: {0}")]
pub struct EditKindError(pub String);

/// Operation kind of an edit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKind {
    Move,
    Resize,
}

impl EditKind {
    pub fn edit_type(self) -> &'static str {
        match self {
            EditKind::Move => EDIT_TYPE_MOVE,
            EditKind::Resize => EDIT_TYPE_RESIZE,
        }
    }
}

impl FromStr for EditKind {
    type Err = EditKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EDIT_TYPE_MOVE | "move" => Ok(EditKind::Move),
            EDIT_TYPE_RESIZE | "resize" => Ok(EditKind::Resize),
            other => Err(EditKindError(other.to_string())),
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.edit_type())
    }
}

/// Bounds of a group together with the corner pinned while reaching them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeState {
    pub bounds: BoundingBox,
    pub anchor: Anchor,
}

/// Before and after state of one edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EditChange {
    Move { before: LatLng, after: LatLng },
    Resize { before: ResizeState, after: ResizeState },
}

/// One completed move or resize of a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    pub group: ShapeId,
    pub change: EditChange,
}

impl EditRecord {
    pub fn moved(group: ShapeId, before: LatLng, after: LatLng) -> Self {
        Self {
            group,
            change: EditChange::Move { before, after },
        }
    }

    pub fn resized(group: ShapeId, before: ResizeState, after: ResizeState) -> Self {
        Self {
            group,
            change: EditChange::Resize { before, after },
        }
    }

    pub fn kind(&self) -> EditKind {
        match self.change {
            EditChange::Move { .. } => EditKind::Move,
            EditChange::Resize { .. } => EditKind::Resize,
        }
    }

    pub fn edit_type(&self) -> &'static str {
        self.kind().edit_type()
    }

    /// Record the change described by a single editor event.
    pub fn from_event(event: &EditorEvent) -> Self {
        match *event {
            EditorEvent::Move {
                group,
                original_center,
                new_center,
            } => Self::moved(group, original_center, new_center),
            EditorEvent::Resize {
                group,
                original_bounds,
                new_bounds,
                anchor,
            } => Self::resized(
                group,
                ResizeState {
                    bounds: original_bounds,
                    anchor,
                },
                ResizeState {
                    bounds: new_bounds,
                    anchor,
                },
            ),
        }
    }

    /// Fold a later step of the same interaction into this record, keeping the
    /// first before-state. Returns `false` if the event is of another kind or
    /// for another group.
    pub fn absorb(&mut self, event: &EditorEvent) -> bool {
        if event.group() != self.group {
            return false;
        }
        match (&mut self.change, EditRecord::from_event(event).change) {
            (EditChange::Move { after, .. }, EditChange::Move { after: latest, .. }) => {
                *after = latest;
                true
            }
            (EditChange::Resize { after, .. }, EditChange::Resize { after: latest, .. }) => {
                *after = latest;
                true
            }
            _ => false,
        }
    }
}
