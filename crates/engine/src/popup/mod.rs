//! Date popup lifecycle.
//!
//! A single transient input widget, created lazily on first use and reused
//! for the rest of the session. Lifecycle is `Closed -> Open -> Closed` with
//! no stacking; a new trigger recognition simply rebinds the popup to the
//! new span.
//!
//! Commit and dismiss are deliberately asymmetric: Enter, a value change, or
//! a click outside both the popup and the text surface commit the current
//! value ("I'm done editing the date"), while Escape closes without touching
//! the buffer.

use chrono::Local;
use mdtrigger_primitives::{ScreenCoords, Span};

use crate::surface::TextSurface;

/// Seam to the concrete popup widget: a DOM node, a toolkit window, or a
/// recording fake in tests.
///
/// Implementations only manage presentation. All interpretation of keys,
/// clicks, and value changes stays in [`PopupController`], which replaces
/// its binding wholesale on every `show` — the widget never accumulates
/// per-session handlers.
pub trait PopupWidget {
	/// Positions the widget below and left-aligned to `anchor`.
	fn set_position(&mut self, anchor: ScreenCoords);
	/// Sets the input value.
	fn set_value(&mut self, value: &str);
	/// Current input value.
	fn value(&self) -> String;
	/// Toggles visibility. The widget outlives hide.
	fn set_visible(&mut self, visible: bool);
	/// Moves keyboard focus into the input.
	fn focus_input(&mut self);
}

/// Keys the popup responds to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKey {
	/// Commit the current value.
	Enter,
	/// Dismiss without committing.
	Escape,
}

/// Where a mouse click landed, relative to the popup and the text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
	/// Inside the popup itself.
	Popup,
	/// Inside the text surface.
	Surface,
	/// Anywhere else.
	Outside,
}

/// Externally observable popup state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PopupState {
	/// No popup is showing.
	Closed,
	/// The popup is visible, bound to the span that opened it.
	Open {
		/// Anchor it was positioned at.
		anchor: ScreenCoords,
		/// Span replaced on commit.
		span: Span,
	},
}

/// A committed popup value, already spliced into the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
	/// The span that was replaced.
	pub span: Span,
	/// The value it was replaced with.
	pub value: String,
}

#[derive(Debug, Clone, Copy)]
struct Binding {
	anchor: ScreenCoords,
	span: Span,
}

/// Single-instance controller for the date popup.
///
/// Owns the widget handle and the span binding; there is no module-level
/// popup state anywhere else. The widget is constructed by `factory` on the
/// first [`show`](Self::show) and kept for the session — later shows only
/// reposition, reseed, and re-reveal it.
pub struct PopupController<W: PopupWidget> {
	factory: Box<dyn FnMut() -> W>,
	widget: Option<W>,
	binding: Option<Binding>,
	visible: bool,
}

impl<W: PopupWidget> PopupController<W> {
	/// Creates a controller; the widget itself is not built until first use.
	pub fn new(factory: impl FnMut() -> W + 'static) -> Self {
		Self {
			factory: Box::new(factory),
			widget: None,
			binding: None,
			visible: false,
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> PopupState {
		match (self.visible, self.binding) {
			(true, Some(binding)) => PopupState::Open {
				anchor: binding.anchor,
				span: binding.span,
			},
			_ => PopupState::Closed,
		}
	}

	/// True while the popup is showing.
	pub fn is_open(&self) -> bool {
		matches!(self.state(), PopupState::Open { .. })
	}

	/// The widget handle, if it has been created.
	pub fn widget(&self) -> Option<&W> {
		self.widget.as_ref()
	}

	/// Mutable widget handle, for embeddings that forward input events into
	/// the widget (and for tests driving it directly).
	pub fn widget_mut(&mut self) -> Option<&mut W> {
		self.widget.as_mut()
	}

	/// Opens the popup at `anchor`, bound to `span`.
	///
	/// Replaces any binding from a previous show cycle, however that cycle
	/// ended — an abandoned popup never keeps a stale span alive. The input
	/// is seeded with today's date in ISO-8601 (`YYYY-MM-DD`) and focused.
	pub fn show(&mut self, anchor: ScreenCoords, span: Span) {
		if self.widget.is_none() {
			self.widget = Some((self.factory)());
		}
		let widget = self.widget.as_mut().expect("just created");
		widget.set_position(anchor);
		widget.set_value(&today_iso());
		widget.set_visible(true);
		widget.focus_input();
		self.binding = Some(Binding { anchor, span });
		self.visible = true;
		tracing::debug!(?span, "date popup shown");
	}

	/// Hides the popup without destroying the widget or its binding.
	pub fn hide(&mut self) {
		if let Some(widget) = self.widget.as_mut() {
			widget.set_visible(false);
		}
		self.visible = false;
	}

	/// Routes a key press. Enter commits, Escape dismisses; both return
	/// editing focus to the surface.
	pub fn handle_key(
		&mut self,
		key: PopupKey,
		surface: &mut dyn TextSurface,
	) -> Option<Committed> {
		if !self.visible {
			return None;
		}
		match key {
			PopupKey::Enter => self.commit(surface),
			PopupKey::Escape => {
				self.dismiss(surface);
				None
			}
		}
	}

	/// Routes a change of the input value (e.g. a date picked from the
	/// native control). Commits immediately.
	pub fn handle_value_change(&mut self, surface: &mut dyn TextSurface) -> Option<Committed> {
		if !self.visible {
			return None;
		}
		self.commit(surface)
	}

	/// Routes a mouse click. A click outside both the popup and the text
	/// surface commits the current value — "I'm done editing the date" —
	/// unless the input was cleared, in which case it only closes. Clicks
	/// inside either leave the popup open.
	pub fn handle_click(
		&mut self,
		target: ClickTarget,
		surface: &mut dyn TextSurface,
	) -> Option<Committed> {
		if !self.visible {
			return None;
		}
		match target {
			ClickTarget::Outside => {
				if self.widget.as_ref().is_some_and(|w| !w.value().is_empty()) {
					self.commit(surface)
				} else {
					self.dismiss(surface);
					None
				}
			}
			ClickTarget::Popup | ClickTarget::Surface => None,
		}
	}

	/// Replaces the bound span with the widget's value, closes, and returns
	/// focus to the surface. The splice targets the captured span, never the
	/// live cursor.
	fn commit(&mut self, surface: &mut dyn TextSurface) -> Option<Committed> {
		let binding = self.binding?;
		let value = self.widget.as_ref()?.value();
		surface.replace_span(binding.span, &value);
		surface.set_cursor(binding.span.start.advanced_by(&value));
		self.hide();
		surface.focus();
		tracing::debug!(span = ?binding.span, value, "date popup committed");
		Some(Committed {
			span: binding.span,
			value,
		})
	}

	/// Closes without committing; the trigger text stays in the document.
	fn dismiss(&mut self, surface: &mut dyn TextSurface) {
		self.hide();
		surface.focus();
		tracing::debug!("date popup dismissed");
	}
}

/// Today's date in ISO-8601 (`YYYY-MM-DD`), the default popup value.
fn today_iso() -> String {
	Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests;
