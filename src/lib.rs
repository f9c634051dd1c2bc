//! polyedit - Interactive shape-editing engine for image annotation tools
//!
//! The in-memory shape model, geometry kernel, undo history and interaction
//! state machine behind an annotation canvas. The crate is UI-agnostic: a
//! host renders the shapes, feeds pointer/keyboard events into the
//! [`Editor`] and listens for [`EditorEvent`]s through an [`EventSink`].

pub mod collection;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod event;
pub mod geometry;
pub mod marks;
pub mod shape;

pub use collection::ShapeCollection;
pub use config::EditorConfig;
pub use editor::{Editor, Hover, Key, Mode, Modifiers, PointerButton};
pub use error::ShapeError;
pub use event::{EditorEvent, EventLog, EventSink, NullSink};
pub use geometry::{ImageBounds, Point, Rect};
pub use marks::{AutoLabelMark, MarkGeometry, MarkPolarity, project_marks};
pub use shape::{Shape, ShapeId, ShapeKind};
