//! Core vocabulary types for the slash-command trigger engine.
//!
//! These types cross the seam between the engine and its host: document
//! positions and spans, screen coordinates for popup anchoring, and the
//! change events a text surface reports after each mutation.

/// Buffer change events and their origin tags.
pub mod change;
/// Document positions, trigger spans, and screen coordinates.
pub mod position;

pub use change::{Change, ChangeOrigin};
pub use position::{Position, ScreenCoords, Span};
