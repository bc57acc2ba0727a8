//! Host passthrough operations: save, open, quit.
//!
//! These are thin RPC forwards with the uniform failure mapping applied at
//! the boundary — log plus an [`Alert`] for the embedding to show. Nothing
//! here is retried; the editing session stays usable after any failure.

use std::sync::Arc;

use mdtrigger_primitives::{Change, ChangeOrigin};

use crate::engine::Engine;
use crate::host::{Alert, DialogOutcome, HostApi, alert_failure};
use crate::popup::PopupWidget;
use crate::surface::TextSurface;

impl<S: TextSurface, W: PopupWidget> Engine<S, W> {
	/// Saves the document through the host.
	pub async fn save(&self) -> Result<(), Alert> {
		let host = self.require_host("saving file")?;
		host.save_file(&self.surface.text())
			.await
			.map_err(|err| alert_failure("saving file", &err))
	}

	/// Saves the document to a freshly chosen file.
	pub async fn save_as(&self) -> Result<(), Alert> {
		let host = self.require_host("saving file")?;
		host.save_file_as(&self.surface.text())
			.await
			.map_err(|err| alert_failure("saving file", &err))
	}

	/// Runs the host save dialog explicitly.
	pub async fn save_dialog(&self) -> Result<DialogOutcome, Alert> {
		let host = self.require_host("saving file")?;
		host.save_file_dialog(&self.surface.text())
			.await
			.map_err(|err| alert_failure("saving file", &err))
	}

	/// Opens a document via the host dialog. On success the surface content
	/// is replaced wholesale and reported as a programmatic change; a
	/// cancelled dialog leaves the document untouched.
	///
	/// Returns whether a file was actually opened.
	pub async fn open(&mut self) -> Result<bool, Alert> {
		let host = self.require_host("opening file")?;
		let outcome = host
			.open_file_dialog()
			.await
			.map_err(|err| alert_failure("opening file", &err))?;
		if !outcome.success {
			tracing::debug!("open dialog cancelled");
			return Ok(false);
		}
		self.surface.set_text(&outcome.content);
		let change = Change::new(ChangeOrigin::Programmatic, self.surface.cursor());
		self.handle_change(change);
		Ok(true)
	}

	/// Asks the host to quit. No-op while no host is attached.
	pub fn quit(&self) {
		if let Some(host) = &self.host {
			host.quit_app();
		}
	}

	fn require_host(&self, op: &str) -> Result<Arc<dyn HostApi>, Alert> {
		self.host
			.clone()
			.ok_or_else(|| alert_failure(op, &crate::host::HostError::Unavailable))
	}
}
