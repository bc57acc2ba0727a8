//! Trigger sequence detection.
//!
//! After every user keystroke the detector inspects the text of the cursor's
//! line from column 0 to the cursor and tests the fixed trigger vocabulary
//! as a suffix. Rules are checked in priority order; the first match wins.
//! Non-keystroke changes (paste, undo/redo, programmatic splices) are never
//! scanned, so the engine's own replacement text cannot re-fire a trigger.

use mdtrigger_primitives::{Change, ScreenCoords, Span};

use crate::surface::TextSurface;

/// Trigger sequence for the date popup.
pub const DATE_SEQUENCE: &str = "/date";
/// Trigger sequence for asynchronous completion.
pub const COMPLETE_SEQUENCE: &str = "/complete";

/// What a recognized trigger starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
	/// Open the date popup.
	DatePopup,
	/// Request an asynchronous completion.
	Complete,
}

/// A fixed trigger sequence and the action it starts.
///
/// Sequences are literal, case-sensitive ASCII, matched as a suffix of the
/// pre-cursor text on the current line only. No sequence may be a suffix of
/// another; if that ever changes, priority order decides the tie.
#[derive(Debug, Clone, Copy)]
pub struct TriggerRule {
	/// The literal sequence.
	pub sequence: &'static str,
	/// Action dispatched when the sequence fires.
	pub action: TriggerAction,
}

/// A recognized trigger, ready for dispatch.
///
/// Carries everything captured at the instant of recognition: the span to
/// replace later, the cursor's screen coordinates for popup anchoring, and a
/// full document snapshot for the completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Firing {
	/// Action to dispatch.
	pub action: TriggerAction,
	/// Half-open span covering the trigger sequence text.
	pub span: Span,
	/// Screen coordinates of the cursor at recognition time.
	pub anchor: ScreenCoords,
	/// Document snapshot at recognition time.
	pub document: String,
}

/// Fixed, priority-ordered set of trigger rules.
pub struct TriggerSet {
	rules: Vec<TriggerRule>,
}

impl Default for TriggerSet {
	fn default() -> Self {
		Self::new(vec![
			TriggerRule {
				sequence: DATE_SEQUENCE,
				action: TriggerAction::DatePopup,
			},
			TriggerRule {
				sequence: COMPLETE_SEQUENCE,
				action: TriggerAction::Complete,
			},
		])
	}
}

impl TriggerSet {
	/// Creates a set with an explicit rule order.
	pub fn new(rules: Vec<TriggerRule>) -> Self {
		Self { rules }
	}

	/// The rules in priority order.
	pub fn rules(&self) -> &[TriggerRule] {
		&self.rules
	}

	/// Scans one change event against the rule set.
	///
	/// Only `Input`-origin changes are considered. The scan reads a single
	/// line, so the no-match common case is O(line length), independent of
	/// document size. The document snapshot is taken only once a rule has
	/// matched.
	pub fn scan(&self, change: &Change, surface: &dyn TextSurface) -> Option<Firing> {
		if !change.origin.is_input() {
			return None;
		}
		let cursor = change.cursor;
		let line = surface.line(cursor.line)?;
		let prefix = line_prefix(&line, cursor.column);
		let rule = self.rules.iter().find(|r| prefix.ends_with(r.sequence))?;
		let span = Span::ending_at(cursor, rule.sequence.chars().count())?;
		tracing::debug!(sequence = rule.sequence, line = cursor.line, column = cursor.column, "trigger fired");
		Some(Firing {
			action: rule.action,
			span,
			anchor: surface.screen_coords(cursor),
			document: surface.text(),
		})
	}
}

/// First `column` characters of `line`; the whole line when the cursor sits
/// at or past its end.
fn line_prefix(line: &str, column: usize) -> &str {
	match line.char_indices().nth(column) {
		Some((idx, _)) => &line[..idx],
		None => line,
	}
}
