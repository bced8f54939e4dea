//! The swap session orchestrator
//!
//! One logical session per instance: request a quote, hold it, submit it,
//! then delegate to the status poller, exposing a single lifecycle
//! (idle → quoting → quoted → submitting → polling → completed/failed) with
//! `reset()` as the only way back to idle.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, warn};

use oneclick_client::api::{QuoteParams, SwapApi};
use oneclick_types::{ClientError, Quote, SwapHandle, SwapStatus};

use crate::poller::{PollError, PollOptions, StatusPoller, StatusSink};

const TRACING_TARGET: &str = "oneclick_service::session";

/// Slippage tolerance applied to every quote, in basis points (1%)
pub const DEFAULT_SLIPPAGE_BPS: u32 = 100;

/// Where the session currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
	Idle,
	Quoting,
	Quoted,
	Submitting,
	Polling,
	Completed,
	Failed,
}

/// Errors surfaced by session operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
	#[error("{operation} is not valid while the session is {phase:?}")]
	InvalidPhase {
		operation: &'static str,
		phase: SessionPhase,
	},

	#[error(transparent)]
	Client(#[from] ClientError),

	#[error(transparent)]
	Poll(#[from] PollError),
}

/// Tuning for a session
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
	/// Basis points; fixed per session
	pub slippage_tolerance: u32,
	pub poll: PollOptions,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			slippage_tolerance: DEFAULT_SLIPPAGE_BPS,
			poll: PollOptions::default(),
		}
	}
}

/// Observer for session progress.
///
/// Callbacks fire on the polling task. They must not call back into the
/// session synchronously; signal the controlling task instead.
pub trait SessionObserver: Send + Sync {
	/// Every status observed while polling, terminal or not
	fn on_status(&self, _status: &SwapStatus) {}
	/// The swap completed; invoked exactly once with the final details
	fn on_completed(&self, _status: &SwapStatus) {}
	/// The swap failed, was refunded, or polling timed out
	fn on_failed(&self, _error: &SessionError) {}
}

/// No-op observer for callers that only poll accessors
pub struct NullObserver;

impl SessionObserver for NullObserver {}

#[derive(Debug)]
struct SessionInner {
	phase: SessionPhase,
	quote: Option<Quote>,
	handle: Option<SwapHandle>,
}

/// The stateful session driver. Owns the one live [`Quote`] and
/// [`SwapHandle`]; state transitions are the only mutation path.
///
/// Assumes a single control thread issuing one operation at a time;
/// `reset()` is additionally safe to call while a poll is in flight.
pub struct SwapSession {
	api: Arc<dyn SwapApi>,
	poller: Arc<StatusPoller>,
	observer: Arc<dyn SessionObserver>,
	options: SessionOptions,
	inner: Arc<Mutex<SessionInner>>,
}

impl SwapSession {
	pub fn new(
		api: Arc<dyn SwapApi>,
		observer: Arc<dyn SessionObserver>,
		options: SessionOptions,
	) -> Self {
		Self {
			poller: Arc::new(StatusPoller::new(Arc::clone(&api), options.poll)),
			api,
			observer,
			options,
			inner: Arc::new(Mutex::new(SessionInner {
				phase: SessionPhase::Idle,
				quote: None,
				handle: None,
			})),
		}
	}

	pub fn phase(&self) -> SessionPhase {
		self.inner.lock().expect("session state poisoned").phase
	}

	/// The live quote, if one is held
	pub fn current_quote(&self) -> Option<Quote> {
		self.inner
			.lock()
			.expect("session state poisoned")
			.quote
			.clone()
	}

	/// Tracking identifier of the submitted swap, if one exists
	pub fn tracking_id(&self) -> Option<String> {
		self.inner
			.lock()
			.expect("session state poisoned")
			.handle
			.as_ref()
			.map(|h| h.tracking_id.clone())
	}

	/// Poll attempts consumed so far, for progress display
	pub fn poll_attempts(&self) -> u32 {
		self.poller.attempts()
	}

	/// Request a fresh quote for `amount` of `from_symbol` into `to_symbol`,
	/// quoting and refunding to `user_address`. Replaces any quote already
	/// held; allowed from Idle and Quoted only.
	pub async fn request_quote(
		&self,
		from_symbol: &str,
		to_symbol: &str,
		amount: &str,
		user_address: &str,
	) -> Result<Quote, SessionError> {
		{
			let mut inner = self.inner.lock().expect("session state poisoned");
			match inner.phase {
				SessionPhase::Idle | SessionPhase::Quoted => {},
				phase => {
					return Err(SessionError::InvalidPhase {
						operation: "request_quote",
						phase,
					})
				},
			}
			// A new quote discards the previous one
			inner.quote = None;
			inner.phase = SessionPhase::Quoting;
		}

		let params = QuoteParams {
			from_symbol: from_symbol.to_string(),
			to_symbol: to_symbol.to_string(),
			amount: amount.to_string(),
			user_address: user_address.to_string(),
			slippage_tolerance: self.options.slippage_tolerance,
		};

		match self.api.request_quote(&params).await {
			Ok(quote) => {
				let mut inner = self.inner.lock().expect("session state poisoned");
				if inner.phase != SessionPhase::Quoting {
					// Reset raced the request; the session stays where
					// reset() put it and the quote is discarded
					return Err(SessionError::InvalidPhase {
						operation: "request_quote",
						phase: inner.phase,
					});
				}
				debug!(
					target: TRACING_TARGET,
					amount_in = %quote.amount_in(),
					amount_out = %quote.amount_out(),
					"Quote acquired"
				);
				inner.quote = Some(quote.clone());
				inner.phase = SessionPhase::Quoted;
				Ok(quote)
			},
			Err(e) => {
				let mut inner = self.inner.lock().expect("session state poisoned");
				if inner.phase == SessionPhase::Quoting {
					inner.phase = SessionPhase::Failed;
				}
				warn!(target: TRACING_TARGET, error = %e, "Quote request failed");
				Err(SessionError::Client(e))
			},
		}
	}

	/// Submit the held quote and start polling for completion. Requires the
	/// session to be Quoted; the outcome is delivered through the observer.
	pub async fn confirm(&self, user_address: &str) -> Result<SwapHandle, SessionError> {
		let quote = {
			let mut inner = self.inner.lock().expect("session state poisoned");
			if inner.phase != SessionPhase::Quoted {
				return Err(SessionError::InvalidPhase {
					operation: "confirm",
					phase: inner.phase,
				});
			}
			let quote = inner.quote.clone().ok_or(SessionError::InvalidPhase {
				operation: "confirm",
				phase: inner.phase,
			})?;
			inner.phase = SessionPhase::Submitting;
			quote
		};

		let handle = match self.api.submit_swap(quote, user_address).await {
			Ok(handle) => handle,
			Err(e) => {
				let mut inner = self.inner.lock().expect("session state poisoned");
				if inner.phase == SessionPhase::Submitting {
					inner.phase = SessionPhase::Failed;
				}
				warn!(target: TRACING_TARGET, error = %e, "Swap submission failed");
				let error = SessionError::Client(e);
				self.observer.on_failed(&error);
				return Err(error);
			},
		};

		{
			let mut inner = self.inner.lock().expect("session state poisoned");
			if inner.phase != SessionPhase::Submitting {
				// Reset raced the submission; do not start polling
				return Err(SessionError::InvalidPhase {
					operation: "confirm",
					phase: inner.phase,
				});
			}
			inner.handle = Some(handle.clone());
			inner.phase = SessionPhase::Polling;
		}

		debug!(
			target: TRACING_TARGET,
			tracking_id = %handle.tracking_id,
			"Swap submitted, polling for completion"
		);

		let sink: Arc<dyn StatusSink> = {
			let observer = Arc::clone(&self.observer);
			Arc::new(move |status: &SwapStatus| observer.on_status(status))
		};

		let on_outcome = {
			let inner = Arc::clone(&self.inner);
			let observer = Arc::clone(&self.observer);
			move |outcome: Result<SwapStatus, PollError>| match outcome {
				Ok(status) => {
					{
						let mut inner = inner.lock().expect("session state poisoned");
						if inner.phase != SessionPhase::Polling {
							return;
						}
						inner.phase = SessionPhase::Completed;
					}
					observer.on_completed(&status);
				},
				Err(e) => {
					{
						let mut inner = inner.lock().expect("session state poisoned");
						if inner.phase != SessionPhase::Polling {
							return;
						}
						inner.phase = SessionPhase::Failed;
					}
					observer.on_failed(&SessionError::Poll(e));
				},
			}
		};

		self.poller.start(&handle.tracking_id, sink, on_outcome)?;
		Ok(handle)
	}

	/// Cancel any in-flight poll and return to Idle, discarding the quote and
	/// handle. Safe from any phase, including mid-poll: the poll is fully
	/// cancelled before this returns, so no late tick can touch the reset
	/// session.
	pub fn reset(&self) {
		// Stop before touching state: once stop() returns, no sink or
		// outcome delivery can fire
		self.poller.stop();

		let mut inner = self.inner.lock().expect("session state poisoned");
		debug!(target: TRACING_TARGET, phase = ?inner.phase, "Session reset");
		inner.phase = SessionPhase::Idle;
		inner.quote = None;
		inner.handle = None;
	}
}
