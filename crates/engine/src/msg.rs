//! Async message bus between background tasks and the engine loop.
//!
//! Completion tasks resolve off the event loop; their results come back here
//! and are applied between events by [`Engine::drain_messages`] (or awaited
//! with [`Engine::next_message`]). Binding the span at request time and
//! applying at drain time is what resolves the "which span does a delayed
//! result target" race.
//!
//! [`Engine::drain_messages`]: crate::engine::Engine::drain_messages
//! [`Engine::next_message`]: crate::engine::Engine::next_message

use mdtrigger_primitives::Span;
use tokio::sync::mpsc;

use crate::engine::Engine;
use crate::popup::PopupWidget;
use crate::surface::TextSurface;

/// Channel sender for background tasks.
pub type MsgSender = mpsc::UnboundedSender<EngineMsg>;

/// Channel receiver for the engine loop.
pub type MsgReceiver = mpsc::UnboundedReceiver<EngineMsg>;

/// Creates a new message channel pair.
pub fn channel() -> (MsgSender, MsgReceiver) {
	mpsc::unbounded_channel()
}

/// A resolved completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionDoneMsg {
	/// Span captured when the request was issued; the replacement target
	/// regardless of where the cursor has moved since.
	pub span: Span,
	/// Non-empty completion text.
	pub text: String,
}

/// Messages applied to the engine between events.
#[derive(Debug)]
pub enum EngineMsg {
	/// A completion request resolved with text to splice in.
	CompletionDone(CompletionDoneMsg),
}

impl EngineMsg {
	/// Applies this message to the engine.
	pub fn apply<S: TextSurface, W: PopupWidget>(self, engine: &mut Engine<S, W>) {
		match self {
			Self::CompletionDone(msg) => engine.apply_completion(msg),
		}
	}
}

impl From<CompletionDoneMsg> for EngineMsg {
	fn from(msg: CompletionDoneMsg) -> Self {
		Self::CompletionDone(msg)
	}
}
