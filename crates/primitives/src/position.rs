//! Document positions, trigger spans, and screen coordinates.

use serde::{Deserialize, Serialize};

/// Zero-based document position in line/column coordinates.
///
/// Columns count characters, not bytes, matching what a cursor-addressable
/// surface reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based character offset within the line.
	pub column: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}

	/// Position of the end of `text` when inserted at `self`.
	///
	/// Text without a newline advances the column; text with newlines lands
	/// on a later line at the column after the final newline.
	pub fn advanced_by(self, text: &str) -> Self {
		match text.rfind('\n') {
			Some(last) => Self {
				line: self.line + text.matches('\n').count(),
				column: text[last + 1..].chars().count(),
			},
			None => Self {
				line: self.line,
				column: self.column + text.chars().count(),
			},
		}
	}
}

/// Half-open document range `[start, end)` captured at trigger time.
///
/// A span is immutable once captured: trigger resolution replaces exactly
/// this range, never the live cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
	/// Inclusive start.
	pub start: Position,
	/// Exclusive end; equals the cursor at the moment of recognition.
	pub end: Position,
}

impl Span {
	/// Creates a span from explicit endpoints.
	pub const fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// Span of the `len` characters ending at `cursor`, on the cursor's line.
	///
	/// Returns `None` when the cursor column is shorter than `len`, which
	/// cannot happen for a suffix match but keeps the arithmetic honest.
	pub fn ending_at(cursor: Position, len: usize) -> Option<Self> {
		let start_column = cursor.column.checked_sub(len)?;
		Some(Self {
			start: Position::new(cursor.line, start_column),
			end: cursor,
		})
	}

	/// True when the span covers no characters.
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

/// Screen-space coordinates of a document position, as projected by the
/// surface. Used only for popup anchoring; the engine never interprets the
/// units beyond "below and left-aligned".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenCoords {
	/// Horizontal offset of the glyph's left edge.
	pub x: f64,
	/// Vertical offset of the glyph row's bottom edge.
	pub y: f64,
}

impl ScreenCoords {
	/// Creates new screen coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}
