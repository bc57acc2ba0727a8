//! Text surface seam.
//!
//! The engine never owns the host editor's document model; it talks to a
//! [`TextSurface`]. The real surface lives in the host (a rich markdown
//! widget); [`MemorySurface`] is a ropey-backed implementation for headless
//! embedding and the test suite.

use mdtrigger_primitives::{Change, ChangeOrigin, Position, ScreenCoords, Span};
use ropey::Rope;

/// Cursor-addressable text document the engine operates on.
///
/// Mutations performed through this trait are the engine's own; the surface
/// must not report them back as user input (they carry
/// [`ChangeOrigin::Programmatic`] when they are reported at all).
pub trait TextSurface {
	/// Current cursor position.
	fn cursor(&self) -> Position;

	/// Moves the cursor.
	fn set_cursor(&mut self, pos: Position);

	/// Text of one line without its trailing newline, if the line exists.
	fn line(&self, line: usize) -> Option<String>;

	/// Full document snapshot.
	fn text(&self) -> String;

	/// Replaces the whole document.
	fn set_text(&mut self, text: &str);

	/// Replaces the half-open `span` with `text`.
	fn replace_span(&mut self, span: Span, text: &str);

	/// Projects a document position to screen coordinates.
	fn screen_coords(&self, pos: Position) -> ScreenCoords;

	/// Gives editing focus back to the surface.
	fn focus(&mut self);

	/// Whether the surface currently holds editing focus.
	fn has_focus(&self) -> bool;
}

/// In-memory [`TextSurface`] backed by a rope.
///
/// Screen projection is a plain cell grid: `x` is the column, `y` is the
/// bottom edge of the glyph row, so a popup anchored at the projection lands
/// below the trigger line.
pub struct MemorySurface {
	content: Rope,
	cursor: Position,
	focused: bool,
}

impl Default for MemorySurface {
	fn default() -> Self {
		Self::new()
	}
}

impl MemorySurface {
	/// Creates an empty surface with the cursor at the origin.
	pub fn new() -> Self {
		Self {
			content: Rope::new(),
			cursor: Position::default(),
			focused: true,
		}
	}

	/// Creates a surface with initial text, cursor at the origin.
	pub fn with_text(text: &str) -> Self {
		Self {
			content: Rope::from_str(text),
			cursor: Position::default(),
			focused: true,
		}
	}

	/// Inserts `text` at the cursor with the given origin, advancing the
	/// cursor past the insertion. Returns the change event to feed into the
	/// engine.
	pub fn edit(&mut self, origin: ChangeOrigin, text: &str) -> Change {
		let at = self.char_index(self.cursor);
		self.content.insert(at, text);
		self.cursor = self.cursor.advanced_by(text);
		Change::new(origin, self.cursor)
	}

	/// Types `text` one character at a time, as a user would, returning one
	/// change event per keystroke.
	pub fn type_text(&mut self, text: &str) -> Vec<Change> {
		text.chars()
			.map(|ch| self.edit(ChangeOrigin::Input, ch.to_string().as_str()))
			.collect()
	}

	/// Pastes `text` as a single batch edit.
	pub fn paste(&mut self, text: &str) -> Change {
		self.edit(ChangeOrigin::Paste, text)
	}

	/// Replaces `span` as a programmatic edit, leaving the cursor at the end
	/// of the replacement. Returns the change event.
	pub fn splice(&mut self, span: Span, text: &str) -> Change {
		self.replace_span(span, text);
		self.cursor = span.start.advanced_by(text);
		Change::new(ChangeOrigin::Programmatic, self.cursor)
	}

	/// Char index of a position, clamped to the end of its line and to the
	/// end of the document. A stale span (from a resolved-late completion)
	/// may point past current content; clamping mirrors what cursor-based
	/// editors do with out-of-range positions.
	fn char_index(&self, pos: Position) -> usize {
		if pos.line >= self.content.len_lines() {
			return self.content.len_chars();
		}
		let line_start = self.content.line_to_char(pos.line);
		let line_len = line_text(&self.content, pos.line).map_or(0, |l| l.chars().count());
		line_start + pos.column.min(line_len)
	}
}

impl TextSurface for MemorySurface {
	fn cursor(&self) -> Position {
		self.cursor
	}

	fn set_cursor(&mut self, pos: Position) {
		self.cursor = pos;
	}

	fn line(&self, line: usize) -> Option<String> {
		line_text(&self.content, line)
	}

	fn text(&self) -> String {
		self.content.to_string()
	}

	fn set_text(&mut self, text: &str) {
		self.content = Rope::from_str(text);
		self.cursor = Position::default();
	}

	fn replace_span(&mut self, span: Span, text: &str) {
		let start = self.char_index(span.start);
		let end = self.char_index(span.end);
		self.content.remove(start..end);
		self.content.insert(start, text);
	}

	fn screen_coords(&self, pos: Position) -> ScreenCoords {
		ScreenCoords::new(pos.column as f64, (pos.line + 1) as f64)
	}

	fn focus(&mut self) {
		self.focused = true;
	}

	fn has_focus(&self) -> bool {
		self.focused
	}
}

/// Text of `line` without its trailing newline, if the rope has that line.
fn line_text(content: &Rope, line: usize) -> Option<String> {
	if line >= content.len_lines() {
		return None;
	}
	let mut text = content.line(line).to_string();
	if text.ends_with('\n') {
		text.pop();
	}
	Some(text)
}
