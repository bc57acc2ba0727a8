use std::cell::Cell;
use std::rc::Rc;

use mdtrigger_primitives::{Position, ScreenCoords, Span};

use super::*;
use crate::surface::MemorySurface;

#[derive(Default)]
struct FakeWidget {
	value: String,
	visible: bool,
	position: Option<ScreenCoords>,
	seeded: Vec<String>,
	focus_count: usize,
}

impl PopupWidget for FakeWidget {
	fn set_position(&mut self, anchor: ScreenCoords) {
		self.position = Some(anchor);
	}

	fn set_value(&mut self, value: &str) {
		self.value = value.to_string();
		self.seeded.push(value.to_string());
	}

	fn value(&self) -> String {
		self.value.clone()
	}

	fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	fn focus_input(&mut self) {
		self.focus_count += 1;
	}
}

fn controller() -> PopupController<FakeWidget> {
	PopupController::new(FakeWidget::default)
}

fn date_span() -> Span {
	Span::new(Position::new(0, 5), Position::new(0, 10))
}

#[test]
fn starts_closed() {
	let ctl = controller();
	assert_eq!(ctl.state(), PopupState::Closed);
	assert!(ctl.widget().is_none());
}

#[test]
fn show_builds_the_widget_once_and_reuses_it() {
	let built = Rc::new(Cell::new(0u32));
	let counter = built.clone();
	let mut ctl = PopupController::new(move || {
		counter.set(counter.get() + 1);
		FakeWidget::default()
	});
	let anchor = ScreenCoords::new(5.0, 1.0);

	ctl.show(anchor, date_span());
	ctl.hide();
	ctl.show(ScreenCoords::new(9.0, 4.0), date_span());

	assert_eq!(built.get(), 1);
	let widget = ctl.widget().unwrap();
	assert_eq!(widget.position, Some(ScreenCoords::new(9.0, 4.0)));
	assert!(widget.visible);
	assert_eq!(widget.focus_count, 2);
}

#[test]
fn show_seeds_an_iso_date_and_opens() {
	let mut ctl = controller();
	let anchor = ScreenCoords::new(10.0, 1.0);
	ctl.show(anchor, date_span());

	assert_eq!(
		ctl.state(),
		PopupState::Open {
			anchor,
			span: date_span()
		}
	);
	let seed = &ctl.widget().unwrap().value;
	// YYYY-MM-DD
	assert_eq!(seed.len(), 10);
	assert_eq!(seed.as_bytes()[4], b'-');
	assert_eq!(seed.as_bytes()[7], b'-');
}

#[test]
fn enter_commits_the_value_into_the_bound_span() {
	let mut surface = MemorySurface::with_text("note /date tail");
	surface.set_cursor(Position::new(0, 10));
	let mut ctl = controller();
	ctl.show(ScreenCoords::new(10.0, 1.0), date_span());
	ctl.widget_mut().unwrap().value = "2024-03-15".to_string();

	let done = ctl.handle_key(PopupKey::Enter, &mut surface).unwrap();
	assert_eq!(done.value, "2024-03-15");
	assert_eq!(surface.text(), "note 2024-03-15 tail");
	assert_eq!(surface.cursor(), Position::new(0, 15));
	assert_eq!(ctl.state(), PopupState::Closed);
	assert!(surface.has_focus());
}

#[test]
fn commit_targets_the_captured_span_not_the_cursor() {
	let mut surface = MemorySurface::with_text("xx /date\nmore text");
	let span = Span::new(Position::new(0, 3), Position::new(0, 8));
	let mut ctl = controller();
	ctl.show(ScreenCoords::new(8.0, 1.0), span);
	// User clicked elsewhere before committing.
	surface.set_cursor(Position::new(1, 4));
	ctl.widget_mut().unwrap().value = "2025-01-01".to_string();

	ctl.handle_value_change(&mut surface).unwrap();
	assert_eq!(surface.text(), "xx 2025-01-01\nmore text");
}

#[test]
fn escape_dismisses_without_touching_the_buffer() {
	let mut surface = MemorySurface::with_text("note /date");
	let mut ctl = controller();
	ctl.show(ScreenCoords::new(10.0, 1.0), date_span());

	assert!(ctl.handle_key(PopupKey::Escape, &mut surface).is_none());
	assert_eq!(surface.text(), "note /date");
	assert_eq!(ctl.state(), PopupState::Closed);
	assert!(!ctl.widget().unwrap().visible);
	assert!(surface.has_focus());
}

#[test]
fn outside_click_commits_but_popup_and_surface_clicks_do_not() {
	let mut surface = MemorySurface::with_text("note /date");
	let mut ctl = controller();
	ctl.show(ScreenCoords::new(10.0, 1.0), date_span());
	ctl.widget_mut().unwrap().value = "2024-06-01".to_string();

	assert!(ctl.handle_click(ClickTarget::Popup, &mut surface).is_none());
	assert!(ctl.is_open());
	assert!(
		ctl.handle_click(ClickTarget::Surface, &mut surface)
			.is_none()
	);
	assert!(ctl.is_open());

	let done = ctl
		.handle_click(ClickTarget::Outside, &mut surface)
		.unwrap();
	assert_eq!(done.value, "2024-06-01");
	assert_eq!(surface.text(), "note 2024-06-01");
	assert!(!ctl.is_open());
}

#[test]
fn outside_click_with_cleared_input_only_closes() {
	let mut surface = MemorySurface::with_text("note /date");
	let mut ctl = controller();
	ctl.show(ScreenCoords::new(10.0, 1.0), date_span());
	ctl.widget_mut().unwrap().value = String::new();

	assert!(
		ctl.handle_click(ClickTarget::Outside, &mut surface)
			.is_none()
	);
	assert_eq!(surface.text(), "note /date");
	assert!(!ctl.is_open());
}

#[test]
fn events_while_closed_are_no_ops() {
	let mut surface = MemorySurface::with_text("text");
	let mut ctl = controller();
	assert!(ctl.handle_key(PopupKey::Enter, &mut surface).is_none());
	assert!(ctl.handle_value_change(&mut surface).is_none());
	assert!(
		ctl.handle_click(ClickTarget::Outside, &mut surface)
			.is_none()
	);
	assert_eq!(surface.text(), "text");
}

#[test]
fn a_new_show_replaces_the_previous_binding() {
	let mut surface = MemorySurface::with_text("a /date b /date");
	let first = Span::new(Position::new(0, 2), Position::new(0, 7));
	let second = Span::new(Position::new(0, 10), Position::new(0, 15));
	let mut ctl = controller();

	ctl.show(ScreenCoords::new(7.0, 1.0), first);
	// Second trigger fires before the first popup resolves.
	ctl.show(ScreenCoords::new(15.0, 1.0), second);
	ctl.widget_mut().unwrap().value = "2024-12-24".to_string();

	let done = ctl.handle_key(PopupKey::Enter, &mut surface).unwrap();
	assert_eq!(done.span, second);
	assert_eq!(surface.text(), "a /date b 2024-12-24");
	// Each show seeds the input exactly once; no handler accumulation.
	assert_eq!(ctl.widget().unwrap().seeded.len(), 2);
}

#[test]
fn hide_keeps_widget_and_binding_for_the_next_show() {
	let mut ctl = controller();
	ctl.show(ScreenCoords::new(1.0, 1.0), date_span());
	ctl.hide();
	assert_eq!(ctl.state(), PopupState::Closed);
	// The widget survives; only visibility toggled.
	assert!(ctl.widget().is_some());
	assert!(!ctl.widget().unwrap().visible);
}
