//! Shared fakes for unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::host::{CompletionParams, DialogOutcome, HostApi, HostError, OpenOutcome};

/// Recording fake host with scripted results.
pub(crate) struct ScriptedHost {
	completion: Result<String, HostError>,
	save_result: Result<(), HostError>,
	open_result: Result<OpenOutcome, HostError>,
	/// `mark_modified` call count.
	pub modified: AtomicUsize,
	/// Contents passed to `save_file` / `save_file_as`.
	pub saved: Mutex<Vec<String>>,
	/// `quit_app` call count.
	pub quits: AtomicUsize,
}

impl ScriptedHost {
	pub fn new() -> Arc<Self> {
		Arc::new(Self {
			completion: Ok(String::new()),
			save_result: Ok(()),
			open_result: Ok(OpenOutcome::default()),
			modified: AtomicUsize::new(0),
			saved: Mutex::new(Vec::new()),
			quits: AtomicUsize::new(0),
		})
	}

	/// Host whose completion provider returns `text`.
	pub fn completing(text: &str) -> Arc<Self> {
		let mut host = Self::unwrapped();
		host.completion = Ok(text.to_string());
		Arc::new(host)
	}

	/// Host whose completion provider errors.
	pub fn failing_completion(reason: &str) -> Arc<Self> {
		let mut host = Self::unwrapped();
		host.completion = Err(HostError::Rejected(reason.to_string()));
		Arc::new(host)
	}

	/// Host whose save calls are rejected.
	pub fn failing_save(reason: &str) -> Arc<Self> {
		let mut host = Self::unwrapped();
		host.save_result = Err(HostError::Rejected(reason.to_string()));
		Arc::new(host)
	}

	/// Host whose open dialog yields `outcome`.
	pub fn opening(outcome: OpenOutcome) -> Arc<Self> {
		let mut host = Self::unwrapped();
		host.open_result = Ok(outcome);
		Arc::new(host)
	}

	pub fn modified_count(&self) -> usize {
		self.modified.load(Ordering::SeqCst)
	}

	fn unwrapped() -> Self {
		Self {
			completion: Ok(String::new()),
			save_result: Ok(()),
			open_result: Ok(OpenOutcome::default()),
			modified: AtomicUsize::new(0),
			saved: Mutex::new(Vec::new()),
			quits: AtomicUsize::new(0),
		}
	}
}

#[async_trait]
impl HostApi for ScriptedHost {
	async fn save_file(&self, content: &str) -> Result<(), HostError> {
		self.save_result.clone()?;
		self.saved.lock().push(content.to_string());
		Ok(())
	}

	async fn save_file_as(&self, content: &str) -> Result<(), HostError> {
		self.save_file(content).await
	}

	async fn save_file_dialog(&self, content: &str) -> Result<DialogOutcome, HostError> {
		self.save_file(content).await?;
		Ok(DialogOutcome {
			success: true,
			message: None,
		})
	}

	async fn open_file_dialog(&self) -> Result<OpenOutcome, HostError> {
		self.open_result.clone()
	}

	async fn get_completion(
		&self,
		_document: &str,
		_params: &CompletionParams,
	) -> Result<String, HostError> {
		self.completion.clone()
	}

	fn mark_modified(&self) {
		self.modified.fetch_add(1, Ordering::SeqCst);
	}

	fn quit_app(&self) {
		self.quits.fetch_add(1, Ordering::SeqCst);
	}
}
