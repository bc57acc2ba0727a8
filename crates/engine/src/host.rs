//! Host application interface.
//!
//! Everything beyond the text surface — file dialogs, saving, the completion
//! provider, the dirty flag, quitting — lives in the host process and is
//! reached over an RPC bridge. This module defines the contract the engine
//! expects plus the uniform failure mapping for user-facing operations.
//!
//! The bridge may not exist yet when the first keystrokes arrive; callers
//! check availability and the modification signal is silently skipped until
//! the host attaches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by host API calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// No host bridge is attached.
	#[error("host API unavailable")]
	Unavailable,
	/// The host rejected or failed the call.
	#[error("host call rejected: {0}")]
	Rejected(String),
}

/// Result payload of a save-dialog round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogOutcome {
	/// Whether the user picked a destination and the write succeeded.
	pub success: bool,
	/// Optional host-side detail (e.g. the chosen path).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// Result payload of an open-file dialog round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOutcome {
	/// Whether a file was picked and read.
	pub success: bool,
	/// File content on success, empty otherwise.
	#[serde(default)]
	pub content: String,
	/// Optional host-side detail.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// Tunables forwarded with each completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
	/// Maximum tokens the provider may generate.
	pub max_tokens: u32,
	/// Sampling temperature.
	pub temperature: f32,
	/// Stop sequences.
	pub stop: Vec<String>,
}

impl Default for CompletionParams {
	fn default() -> Self {
		Self {
			max_tokens: 2000,
			temperature: 0.7,
			stop: Vec::new(),
		}
	}
}

/// Capabilities the engine consumes from the host application.
///
/// `get_completion` is the only slow call; it maps the full document text to
/// suggested continuation text and may take arbitrarily long or fail. The
/// rest are passthrough file/window operations.
#[async_trait]
pub trait HostApi: Send + Sync {
	/// Saves `content` to the current file, or via dialog when none is set.
	async fn save_file(&self, content: &str) -> Result<(), HostError>;

	/// Saves `content` to a freshly chosen file.
	async fn save_file_as(&self, content: &str) -> Result<(), HostError>;

	/// Runs the save dialog explicitly.
	async fn save_file_dialog(&self, content: &str) -> Result<DialogOutcome, HostError>;

	/// Runs the open dialog and reads the picked file.
	async fn open_file_dialog(&self) -> Result<OpenOutcome, HostError>;

	/// Asks the completion provider for continuation text.
	async fn get_completion(
		&self,
		document: &str,
		params: &CompletionParams,
	) -> Result<String, HostError>;

	/// Fire-and-forget dirty signal. Must not fail; hosts that cannot take
	/// the signal yet simply drop it.
	fn mark_modified(&self);

	/// Asks the host to quit.
	fn quit_app(&self);
}

/// User-visible notice produced by the uniform host failure mapping.
///
/// The engine never blocks on this itself; the embedding decides how to
/// present it (the reference host shows a blocking alert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
	/// Message to show the user.
	pub message: String,
}

/// Uniform failure path for user-facing host operations: log the error and
/// produce the alert text. Completion failures never come through here; they
/// stay silent apart from their own log line.
pub(crate) fn alert_failure(op: &str, err: &HostError) -> Alert {
	tracing::error!(error = %err, "{op} failed");
	Alert {
		message: format!("Error {op}"),
	}
}
