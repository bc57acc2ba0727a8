#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Slash-command trigger engine for a cursor-addressable text surface.
//!
//! As the user types, fixed sequences (`/date`, `/complete`) are recognized
//! immediately after entry and start a side interaction: a transient date
//! popup, or an asynchronous completion request. The result is spliced back
//! into the document at the exact span that triggered it, even if the cursor
//! has moved since.
//!
//! # Architecture
//!
//! ```text
//! surface change ──► TriggerSet::scan ──► Firing
//!                                           ├── DatePopup ──► PopupController
//!                                           └── Complete ───► CompletionCoordinator
//!                                                                │ (tokio task)
//!                                                                ▼
//!                            Engine::drain_messages ◄── EngineMsg bus
//! ```
//!
//! Everything runs on one cooperative loop; the completion request is the
//! only suspension point. Resolved completions come back through the message
//! bus and are applied between events, against the span captured at request
//! time.

/// Asynchronous completion coordination.
pub mod completion;
/// Engine wiring: change dispatch, popup routing, host passthrough.
pub mod engine;
/// Host application interface (RPC passthrough contract).
pub mod host;
/// Async message bus between background tasks and the engine loop.
pub mod msg;
/// Date popup lifecycle.
pub mod popup;
/// Text surface seam and the in-memory implementation.
pub mod surface;
#[cfg(test)]
pub(crate) mod testutil;
/// Trigger sequence detection.
pub mod trigger;

pub use completion::CompletionCoordinator;
pub use engine::Engine;
pub use host::{Alert, CompletionParams, DialogOutcome, HostApi, HostError, OpenOutcome};
pub use popup::{ClickTarget, Committed, PopupController, PopupKey, PopupState, PopupWidget};
pub use surface::{MemorySurface, TextSurface};
pub use trigger::{Firing, TriggerAction, TriggerRule, TriggerSet};
