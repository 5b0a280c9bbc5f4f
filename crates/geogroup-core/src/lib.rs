//! GeoGroup Core Library
//!
//! Moving and resizing groups of geographic shapes as single units, with
//! boundary validation, owner tagging and undo/redo replay.

pub mod bounds;
pub mod config;
pub mod events;
pub mod geo;
pub mod ownership;
pub mod record;
pub mod redimension;
pub mod resize;
pub mod session;
pub mod shapes;
pub mod translate;
pub mod undo;
pub mod validate;

pub use bounds::{Anchor, CornerIndex, detect_fixed_corner, scale_ratio};
pub use config::{ConfigError, ConfigResult, GroupEditConfig};
pub use events::{EDIT_TYPE_MOVE, EDIT_TYPE_RESIZE, EditorEvent, GroupEvent};
pub use geo::{BoundingBox, LatLng};
pub use ownership::{for_each_member, mark_ownership};
pub use record::{EditChange, EditKind, EditKindError, EditRecord, ResizeState};
pub use redimension::RedimensionCoordinator;
pub use resize::{resize_group, resized_bounds, scaled_sub_center};
pub use session::EditSession;
pub use shapes::{Circle, Group, Marker, OwnerTag, Path, Shape, ShapeId, ShapeTrait};
pub use translate::move_group;
pub use undo::{EditHost, EventBlock, EventBlockGuard, GroupUndoExtension};
pub use validate::BoundaryValidator;
