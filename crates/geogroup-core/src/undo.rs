//! Undo/redo of group moves and resizes on behalf of a host editor.
//!
//! The host keeps the history stack and asks this extension to replay one
//! record at a time. Direct replay drives the engines; nested replay goes
//! through the group's active [`EditSession`] so its handles stay in sync,
//! while an [`EventBlock`] tells the host to ignore the events that replay
//! raises.

use crate::events::{EditorEvent, GroupEvent};
use crate::record::{EditChange, EditKind, EditRecord};
use crate::resize::resize_group;
use crate::session::EditSession;
use crate::shapes::{Group, ShapeId};
use crate::translate::move_group;
use std::cell::Cell;

/// Editor state the undo extension operates on.
pub trait EditHost {
    /// Look up a top-level group by id.
    fn group_mut(&mut self, id: ShapeId) -> Option<&mut Group>;

    /// The group's active edit session, if it is being edited.
    fn session_mut(&mut self, id: ShapeId) -> Option<(&mut EditSession, &mut Group)>;

    /// Called with events raised during nested replay. The block is held for
    /// the duration, so history-recording hosts should check
    /// [`EventBlock::is_blocked`] and skip them.
    fn editor_event(&mut self, _event: EditorEvent, _block: &EventBlock) {}
}

/// Re-entrancy counter that suppresses history recording while held.
#[derive(Debug, Default)]
pub struct EventBlock {
    depth: Cell<usize>,
}

impl EventBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the returned guard is dropped. Holds nest.
    pub fn hold(&self) -> EventBlockGuard<'_> {
        self.depth.set(self.depth.get() + 1);
        EventBlockGuard { block: self }
    }

    pub fn is_blocked(&self) -> bool {
        self.depth.get() > 0
    }

    pub fn depth(&self) -> usize {
        self.depth.get()
    }
}

/// Releases one hold on an [`EventBlock`] when dropped, also during unwinding.
#[must_use = "the block is released as soon as the guard is dropped"]
pub struct EventBlockGuard<'a> {
    block: &'a EventBlock,
}

impl Drop for EventBlockGuard<'_> {
    fn drop(&mut self) {
        self.block.depth.set(self.block.depth.get().saturating_sub(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Undo,
    Redo,
}

/// Replays recorded group edits.
///
/// Every entry point returns `true` when `edit_type` names a group move or
/// resize matching the record, so hosts can chain it with other handlers.
#[derive(Debug, Default)]
pub struct GroupUndoExtension {
    block: EventBlock,
}

impl GroupUndoExtension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_block(&self) -> &EventBlock {
        &self.block
    }

    pub fn events_blocked(&self) -> bool {
        self.block.is_blocked()
    }

    /// Restore the before-state of `record` through the engines.
    pub fn undo_direct(
        &self,
        host: &mut impl EditHost,
        edit_type: &str,
        record: &EditRecord,
    ) -> bool {
        self.replay_direct(host, edit_type, record, Direction::Undo)
    }

    /// Reapply the after-state of `record` through the engines.
    pub fn redo_direct(
        &self,
        host: &mut impl EditHost,
        edit_type: &str,
        record: &EditRecord,
    ) -> bool {
        self.replay_direct(host, edit_type, record, Direction::Redo)
    }

    /// Restore the before-state of `record` through the group's edit session.
    pub fn undo_nested(
        &self,
        host: &mut impl EditHost,
        edit_type: &str,
        record: &EditRecord,
    ) -> bool {
        self.replay_nested(host, edit_type, record, Direction::Undo)
    }

    /// Reapply the after-state of `record` through the group's edit session.
    pub fn redo_nested(
        &self,
        host: &mut impl EditHost,
        edit_type: &str,
        record: &EditRecord,
    ) -> bool {
        self.replay_nested(host, edit_type, record, Direction::Redo)
    }

    fn replay_direct(
        &self,
        host: &mut impl EditHost,
        edit_type: &str,
        record: &EditRecord,
        direction: Direction,
    ) -> bool {
        if !recognizes(edit_type, record) {
            return false;
        }
        replay_on_group(host, edit_type, record, direction);
        true
    }

    fn replay_nested(
        &self,
        host: &mut impl EditHost,
        edit_type: &str,
        record: &EditRecord,
        direction: Direction,
    ) -> bool {
        if !recognizes(edit_type, record) {
            return false;
        }
        let _guard = self.block.hold();

        let event = match host.session_mut(record.group) {
            Some((session, group)) => match record.change {
                EditChange::Move { before, after } => {
                    match session.apply_move(group, pick(direction, before, after)) {
                        Some(GroupEvent::Moved { group, from, to }) => Some(EditorEvent::Move {
                            group,
                            original_center: from,
                            new_center: to,
                        }),
                        _ => None,
                    }
                }
                EditChange::Resize { before, after } => {
                    let state = pick(direction, before, after);
                    match session.apply_resize(group, &state.bounds, Some(state.anchor)) {
                        Some(GroupEvent::Edited { group, old_bounds, .. }) => {
                            Some(EditorEvent::Resize {
                                group,
                                original_bounds: old_bounds,
                                new_bounds: state.bounds,
                                anchor: state.anchor,
                            })
                        }
                        _ => None,
                    }
                }
            },
            None => {
                log::debug!(
                    "No edit session for group {}, replaying {:?} directly",
                    record.group,
                    direction
                );
                replay_on_group(host, edit_type, record, direction);
                None
            }
        };

        if let Some(event) = event {
            host.editor_event(event, &self.block);
        }
        true
    }
}

fn recognizes(edit_type: &str, record: &EditRecord) -> bool {
    match edit_type.parse::<EditKind>() {
        Ok(kind) if kind == record.kind() => true,
        Ok(kind) => {
            log::warn!(
                "Edit type {} does not match {} record for group {}",
                kind,
                record.kind(),
                record.group
            );
            false
        }
        Err(_) => false,
    }
}

fn pick<T>(direction: Direction, before: T, after: T) -> T {
    match direction {
        Direction::Undo => before,
        Direction::Redo => after,
    }
}

fn replay_on_group(
    host: &mut impl EditHost,
    edit_type: &str,
    record: &EditRecord,
    direction: Direction,
) {
    match host.group_mut(record.group) {
        Some(group) => apply(group, record, direction),
        None => log::warn!(
            "Cannot replay {}: group {} not found",
            edit_type,
            record.group
        ),
    }
}

fn apply(group: &mut Group, record: &EditRecord, direction: Direction) {
    match record.change {
        EditChange::Move { before, after } => {
            move_group(group, pick(direction, before, after));
        }
        EditChange::Resize { before, after } => {
            let state = pick(direction, before, after);
            resize_group(group, &state.bounds, Some(state.anchor));
        }
    }
}
