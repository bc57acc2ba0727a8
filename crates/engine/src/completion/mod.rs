//! Asynchronous completion coordination.
//!
//! `/complete` hands the full document snapshot and the captured trigger
//! span to the host's completion provider on a spawned task — the only
//! suspension point in the system. The user keeps typing while the request
//! is in flight.
//!
//! Requests are never cancelled and carry no timeout. A resolved request
//! applies against the span captured at request time, even if the document
//! was heavily edited in the interim; that can look surprising but is the
//! accepted behavior, not a bug to re-validate away. Two in-flight requests
//! both apply on resolution, last-applied-wins on overlapping ranges.

use std::sync::Arc;

use mdtrigger_primitives::Span;
use tokio::task::JoinHandle;

use crate::host::{CompletionParams, HostApi};
use crate::msg::{CompletionDoneMsg, EngineMsg, MsgSender};

/// Issues completion requests and routes their results onto the message bus.
pub struct CompletionCoordinator {
	tx: MsgSender,
	params: CompletionParams,
}

impl CompletionCoordinator {
	/// Creates a coordinator sending resolutions to `tx`.
	pub fn new(tx: MsgSender) -> Self {
		Self {
			tx,
			params: CompletionParams::default(),
		}
	}

	/// Overrides the provider tunables.
	pub fn with_params(mut self, params: CompletionParams) -> Self {
		self.params = params;
		self
	}

	/// Issues one request against `host` for the captured `span`.
	///
	/// The task runs detached; the returned handle exists so tests can await
	/// a deterministic resolution point. Provider errors and empty results
	/// are logged and discarded — the buffer is left untouched and the
	/// trigger text stays in the document.
	pub fn request(
		&self,
		host: Arc<dyn HostApi>,
		document: String,
		span: Span,
	) -> JoinHandle<()> {
		let tx = self.tx.clone();
		let params = self.params.clone();
		tracing::debug!(?span, chars = document.chars().count(), "completion requested");
		tokio::spawn(async move {
			let text = match host.get_completion(&document, &params).await {
				Ok(text) => text,
				Err(err) => {
					tracing::warn!(error = %err, "completion request failed");
					return;
				}
			};
			if text.is_empty() {
				tracing::debug!("empty completion result, buffer left untouched");
				return;
			}
			// A closed receiver means the engine is gone; nothing to update.
			let _ = tx.send(EngineMsg::CompletionDone(CompletionDoneMsg { span, text }));
		})
	}
}
