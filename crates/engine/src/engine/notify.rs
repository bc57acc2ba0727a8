//! Modification signalling to the host.

use crate::engine::Engine;
use crate::popup::PopupWidget;
use crate::surface::TextSurface;

impl<S: TextSurface, W: PopupWidget> Engine<S, W> {
	/// Signals the host that the document is dirty.
	///
	/// Fire-and-forget and idempotent on the host side. Silently skipped
	/// while no host is attached — the bridge may come up after the first
	/// keystrokes.
	pub(crate) fn notify_modified(&self) {
		let Some(host) = &self.host else {
			tracing::debug!("host not attached, modification signal skipped");
			return;
		};
		host.mark_modified();
	}
}
