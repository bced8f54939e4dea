//! Fixed-cadence status polling with an attempt budget
//!
//! One poll invocation walks armed → polling → {completed | failed |
//! timed-out}. Every observed status, terminal or not, is forwarded to the
//! caller's sink in poll order; transient transport failures consume an
//! attempt but do not end the poll.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use oneclick_client::SwapApi;
use oneclick_types::{ClientError, SwapState, SwapStatus};

const TRACING_TARGET: &str = "oneclick_service::poller";

/// Default cadence between status requests
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);
/// Default attempt budget (wall-clock bound: interval × attempts = 120 s)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

/// Final outcomes of a poll
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PollError {
	/// The remote reported FAILED or REFUNDED; carries its message verbatim
	#[error("swap {state:?}: {message}")]
	Terminated { state: SwapState, message: String },

	/// The attempt budget ran out without a terminal status
	#[error("status polling timed out after {attempts} attempts")]
	Timeout { attempts: u32 },

	/// A non-transient classified error ended the poll
	#[error(transparent)]
	Client(#[from] ClientError),

	/// A poll for a different identifier is still active
	#[error("already polling swap {active}, refusing to poll {requested}")]
	AlreadyPolling { active: String, requested: String },
}

/// Cadence and budget for a poll invocation
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
	pub interval: Duration,
	pub max_attempts: u32,
}

impl Default for PollOptions {
	fn default() -> Self {
		Self {
			interval: DEFAULT_POLL_INTERVAL,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

/// Receiver for every status observed during a poll
pub trait StatusSink: Send + Sync {
	fn on_status(&self, status: &SwapStatus);
}

impl<F> StatusSink for F
where
	F: Fn(&SwapStatus) + Send + Sync,
{
	fn on_status(&self, status: &SwapStatus) {
		self(status)
	}
}

/// An in-flight poll. Dropping the handle does not stop the poll; `stop()`
/// does.
struct ActivePoll {
	tracking_id: String,
	/// Fire-time gate: every sink and outcome delivery locks this and
	/// re-checks the flag, so `stop()` cannot return while a delivery is in
	/// flight and no delivery can begin afterwards.
	gate: Arc<Mutex<bool>>,
	attempts: Arc<AtomicU32>,
	task: JoinHandle<()>,
}

impl std::fmt::Debug for ActivePoll {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActivePoll")
			.field("tracking_id", &self.tracking_id)
			.finish_non_exhaustive()
	}
}

impl ActivePoll {
	/// A poll stops counting as active once its task finished or its gate was
	/// closed; an aborted task may briefly outlive its `stop()` call.
	fn is_active(&self) -> bool {
		!self.task.is_finished() && !*self.gate.lock().expect("poll gate poisoned")
	}

	fn stop(&self) {
		{
			let mut stopped = self.gate.lock().expect("poll gate poisoned");
			*stopped = true;
		}
		self.task.abort();
	}
}

/// Polls `fetch_status` on a fixed cadence until a terminal state or budget
/// exhaustion, reporting every status to a caller-supplied sink.
///
/// At most one poll is active at a time: starting for the identifier already
/// being polled is a no-op, starting for a different one is refused.
#[derive(Debug)]
pub struct StatusPoller {
	api: Arc<dyn SwapApi>,
	options: PollOptions,
	active: Mutex<Option<ActivePoll>>,
}

impl StatusPoller {
	pub fn new(api: Arc<dyn SwapApi>, options: PollOptions) -> Self {
		Self {
			api,
			options,
			active: Mutex::new(None),
		}
	}

	/// Start polling `tracking_id`, delivering every status to `sink` and the
	/// final outcome to `on_outcome`.
	///
	/// Idempotent for the identifier currently being polled; refused for a
	/// different one while a poll is active.
	pub fn start(
		&self,
		tracking_id: &str,
		sink: Arc<dyn StatusSink>,
		on_outcome: impl FnOnce(Result<SwapStatus, PollError>) + Send + 'static,
	) -> Result<(), PollError> {
		let mut active = self.active.lock().expect("poller state poisoned");

		if let Some(poll) = active.as_ref() {
			if poll.is_active() {
				if poll.tracking_id == tracking_id {
					debug!(
						target: TRACING_TARGET,
						tracking_id = %tracking_id,
						"Poll already active for this swap, ignoring start"
					);
					return Ok(());
				}
				return Err(PollError::AlreadyPolling {
					active: poll.tracking_id.clone(),
					requested: tracking_id.to_string(),
				});
			}
		}

		let gate = Arc::new(Mutex::new(false));
		let attempts = Arc::new(AtomicU32::new(0));
		let api = Arc::clone(&self.api);
		let options = self.options;
		let id = tracking_id.to_string();

		let task = tokio::spawn({
			let gate = Arc::clone(&gate);
			let attempts = Arc::clone(&attempts);
			let id = id.clone();
			async move {
				let outcome = Self::poll_loop(&*api, &id, options, &*sink, &gate, &attempts).await;

				let stopped = gate.lock().expect("poll gate poisoned");
				if !*stopped {
					on_outcome(outcome);
				}
			}
		});

		*active = Some(ActivePoll {
			tracking_id: id,
			gate,
			attempts,
			task,
		});
		Ok(())
	}

	/// Stop the active poll, if any. Safe to call at any point, including
	/// after natural termination; once it returns, no further sink or outcome
	/// delivery will occur.
	pub fn stop(&self) {
		let active = self.active.lock().expect("poller state poisoned");
		if let Some(poll) = active.as_ref() {
			debug!(
				target: TRACING_TARGET,
				tracking_id = %poll.tracking_id,
				"Stopping poll"
			);
			poll.stop();
		}
	}

	/// Identifier of the poll still running, if any
	pub fn active_tracking_id(&self) -> Option<String> {
		let active = self.active.lock().expect("poller state poisoned");
		active
			.as_ref()
			.filter(|poll| poll.is_active())
			.map(|poll| poll.tracking_id.clone())
	}

	/// Attempts consumed by the most recent poll
	pub fn attempts(&self) -> u32 {
		let active = self.active.lock().expect("poller state poisoned");
		active
			.as_ref()
			.map(|poll| poll.attempts.load(Ordering::Relaxed))
			.unwrap_or(0)
	}

	async fn poll_loop(
		api: &dyn SwapApi,
		tracking_id: &str,
		options: PollOptions,
		sink: &dyn StatusSink,
		gate: &Mutex<bool>,
		attempts: &AtomicU32,
	) -> Result<SwapStatus, PollError> {
		for attempt in 1..=options.max_attempts {
			attempts.store(attempt, Ordering::Relaxed);

			match api.fetch_status(tracking_id).await {
				Ok(status) => {
					{
						let stopped = gate.lock().expect("poll gate poisoned");
						if *stopped {
							return Err(PollError::Timeout { attempts: attempt });
						}
						sink.on_status(&status);
					}

					match status.status {
						SwapState::Completed => {
							debug!(
								target: TRACING_TARGET,
								tracking_id = %tracking_id,
								attempt = attempt,
								"Swap completed"
							);
							return Ok(status);
						},
						SwapState::Failed | SwapState::Refunded => {
							let message = status
								.error
								.clone()
								.unwrap_or_else(|| "Unknown error".to_string());
							debug!(
								target: TRACING_TARGET,
								tracking_id = %tracking_id,
								state = ?status.status,
								message = %message,
								"Swap terminated"
							);
							return Err(PollError::Terminated {
								state: status.status,
								message,
							});
						},
						// Non-terminal (including Unknown from an ambiguous
						// response): keep polling
						_ => {},
					}
				},
				Err(e) if e.is_transient() => {
					// Transient outage: the attempt is consumed, the poll
					// survives until the budget runs out
					warn!(
						target: TRACING_TARGET,
						tracking_id = %tracking_id,
						attempt = attempt,
						error = %e,
						"Transient failure during status tick, continuing"
					);
				},
				Err(e) => return Err(PollError::Client(e)),
			}

			if attempt < options.max_attempts {
				tokio::time::sleep(options.interval).await;
			}
		}

		Err(PollError::Timeout {
			attempts: options.max_attempts,
		})
	}
}
