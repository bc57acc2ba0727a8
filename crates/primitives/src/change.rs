//! Buffer change events reported by the text surface.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Where a buffer mutation came from.
///
/// Only [`Input`](ChangeOrigin::Input) changes are scanned for trigger
/// sequences; every origin marks the document modified. Keeping programmatic
/// splices out of the scan path is what prevents the engine's own replacement
/// text from re-firing a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeOrigin {
	/// Direct user keystroke.
	Input,
	/// Batch paste.
	Paste,
	/// Undo step.
	Undo,
	/// Redo step.
	Redo,
	/// Programmatic edit, including the engine's own splices.
	Programmatic,
}

impl ChangeOrigin {
	/// True for direct user keystroke input.
	pub const fn is_input(self) -> bool {
		matches!(self, Self::Input)
	}
}

/// A single buffer mutation, as reported after it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
	/// Origin tag distinguishing keystrokes from batch/programmatic edits.
	pub origin: ChangeOrigin,
	/// Cursor position after the mutation.
	pub cursor: Position,
}

impl Change {
	/// Creates a new change event.
	pub const fn new(origin: ChangeOrigin, cursor: Position) -> Self {
		Self { origin, cursor }
	}
}
