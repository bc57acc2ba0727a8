//! Engine wiring: change dispatch, popup routing, host passthrough.

use std::sync::Arc;

use mdtrigger_primitives::{Change, ChangeOrigin};

use crate::completion::CompletionCoordinator;
use crate::host::{CompletionParams, HostApi};
use crate::msg::{self, CompletionDoneMsg, MsgReceiver};
use crate::popup::{ClickTarget, PopupController, PopupKey, PopupWidget};
use crate::surface::TextSurface;
use crate::trigger::{Firing, TriggerAction, TriggerSet};

mod host_ops;
mod notify;

/// The trigger engine: owns the surface handle, the trigger set, the popup
/// controller, the completion coordinator, and the receiving end of the
/// message bus.
///
/// Single-threaded and event-driven: the host calls [`handle_change`] after
/// every surface mutation, routes popup input through [`popup_key`] /
/// [`popup_value_changed`] / [`click`], and drains resolved completions
/// between events with [`drain_messages`].
///
/// [`handle_change`]: Self::handle_change
/// [`popup_key`]: Self::popup_key
/// [`popup_value_changed`]: Self::popup_value_changed
/// [`click`]: Self::click
/// [`drain_messages`]: Self::drain_messages
pub struct Engine<S: TextSurface, W: PopupWidget> {
	surface: S,
	triggers: TriggerSet,
	popup: PopupController<W>,
	completions: CompletionCoordinator,
	host: Option<Arc<dyn HostApi>>,
	rx: MsgReceiver,
}

impl<S: TextSurface, W: PopupWidget> Engine<S, W> {
	/// Creates an engine over `surface`. The popup widget is built by
	/// `popup_factory` on first use.
	pub fn new(surface: S, popup_factory: impl FnMut() -> W + 'static) -> Self {
		let (tx, rx) = msg::channel();
		Self {
			surface,
			triggers: TriggerSet::default(),
			popup: PopupController::new(popup_factory),
			completions: CompletionCoordinator::new(tx),
			host: None,
			rx,
		}
	}

	/// Overrides the completion provider tunables.
	pub fn with_completion_params(mut self, params: CompletionParams) -> Self {
		self.completions = self.completions.with_params(params);
		self
	}

	/// Attaches the host bridge. Until this is called the modification
	/// signal is skipped and completion triggers log and do nothing.
	pub fn attach_host(&mut self, host: Arc<dyn HostApi>) {
		self.host = Some(host);
	}

	/// The text surface.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Mutable surface access for the embedding's own edits. Every mutation
	/// made here must be reported back through [`handle_change`].
	///
	/// [`handle_change`]: Self::handle_change
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	/// The popup controller.
	pub fn popup(&self) -> &PopupController<W> {
		&self.popup
	}

	/// Mutable popup access, for embeddings that forward raw widget events.
	pub fn popup_mut(&mut self) -> &mut PopupController<W> {
		&mut self.popup
	}

	/// Entry point for surface change events.
	///
	/// Marks the document modified regardless of origin, then scans
	/// keystroke changes for a trigger and dispatches the first match.
	pub fn handle_change(&mut self, change: Change) {
		self.notify_modified();
		let Some(firing) = self.triggers.scan(&change, &self.surface) else {
			return;
		};
		self.dispatch(firing);
	}

	fn dispatch(&mut self, firing: Firing) {
		match firing.action {
			TriggerAction::DatePopup => self.popup.show(firing.anchor, firing.span),
			TriggerAction::Complete => {
				let Some(host) = self.host.clone() else {
					tracing::warn!("completion trigger fired with no host attached");
					return;
				};
				// Detached on purpose: no cancellation, no timeout. The
				// result comes back through the message bus.
				let _task = self.completions.request(host, firing.document, firing.span);
			}
		}
	}

	/// Routes a key press to the open popup.
	pub fn popup_key(&mut self, key: PopupKey) {
		if self.popup.handle_key(key, &mut self.surface).is_some() {
			self.report_own_splice();
		}
	}

	/// Routes a popup input value change (commits).
	pub fn popup_value_changed(&mut self) {
		if self.popup.handle_value_change(&mut self.surface).is_some() {
			self.report_own_splice();
		}
	}

	/// Routes a mouse click by target classification.
	pub fn click(&mut self, target: ClickTarget) {
		if self.popup.handle_click(target, &mut self.surface).is_some() {
			self.report_own_splice();
		}
	}

	/// Applies a resolved completion against its captured span and parks the
	/// cursor (and focus) at the insertion end.
	pub(crate) fn apply_completion(&mut self, done: CompletionDoneMsg) {
		self.surface.replace_span(done.span, &done.text);
		let end = done.span.start.advanced_by(&done.text);
		self.surface.set_cursor(end);
		self.surface.focus();
		tracing::debug!(span = ?done.span, "completion applied");
		self.report_own_splice();
	}

	/// Applies all queued messages without blocking.
	pub fn drain_messages(&mut self) {
		while let Ok(message) = self.rx.try_recv() {
			message.apply(self);
		}
	}

	/// Awaits the next message and applies it. Returns `false` once the bus
	/// is closed (all senders dropped).
	pub async fn next_message(&mut self) -> bool {
		match self.rx.recv().await {
			Some(message) => {
				message.apply(self);
				true
			}
			None => false,
		}
	}

	/// Reports one of the engine's own splices as a programmatic change:
	/// the host is still notified, but the detector never scans it.
	fn report_own_splice(&mut self) {
		let change = Change::new(ChangeOrigin::Programmatic, self.surface.cursor());
		self.handle_change(change);
	}
}
