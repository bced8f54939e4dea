//! 1Click Swap Service
//!
//! The stateful layer of the swap client: cancellable status polling and the
//! single-session orchestrator driving quote → confirm → poll → completion.

pub mod poller;
pub mod session;

pub use poller::{PollError, PollOptions, StatusPoller, StatusSink};
pub use session::{
	NullObserver, SessionError, SessionObserver, SessionOptions, SessionPhase, SwapSession,
};
