//! Mock swap API for examples and testing
//!
//! A scripted [`SwapApi`] implementation that fabricates quotes and replays a
//! configured status sequence, so the poller and session layers can be tested
//! without a network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use oneclick_client::api::{QuoteParams, SwapApi};
use oneclick_service::{SessionError, SessionObserver};
use oneclick_types::chrono::{Duration as ChronoDuration, Utc};
use oneclick_types::{
	assets, ClientError, ClientResult, Quote, QuoteDetails, QuoteRequest, QuoteResponse,
	SwapHandle, SwapState, SwapStatus,
};

/// Scripted [`SwapApi`] implementation.
///
/// `fetch_status` pops the next entry from the configured sequence; once the
/// sequence is exhausted it keeps returning PENDING, which is how timeout
/// scenarios are scripted.
#[derive(Debug, Default)]
pub struct MockSwapApi {
	status_script: Mutex<VecDeque<ClientResult<SwapStatus>>>,
	quote_error: Mutex<Option<ClientError>>,
	submit_error: Mutex<Option<ClientError>>,
	/// Artificial latency before each status response
	status_delay: Option<Duration>,
	quote_calls: AtomicU32,
	submit_calls: AtomicU32,
	status_calls: AtomicU32,
}

impl MockSwapApi {
	pub fn new() -> Self {
		Self::default()
	}

	/// Script the sequence of `fetch_status` outcomes, in order
	pub fn with_status_script(
		self,
		script: impl IntoIterator<Item = ClientResult<SwapStatus>>,
	) -> Self {
		*self.status_script.lock().unwrap() = script.into_iter().collect();
		self
	}

	/// Make the next `request_quote` fail with `error`
	pub fn with_quote_error(self, error: ClientError) -> Self {
		*self.quote_error.lock().unwrap() = Some(error);
		self
	}

	/// Make the next `submit_swap` fail with `error`
	pub fn with_submit_error(self, error: ClientError) -> Self {
		*self.submit_error.lock().unwrap() = Some(error);
		self
	}

	/// Delay each status response, to widen race windows in cancellation tests
	pub fn with_status_delay(mut self, delay: Duration) -> Self {
		self.status_delay = Some(delay);
		self
	}

	pub fn quote_calls(&self) -> u32 {
		self.quote_calls.load(Ordering::SeqCst)
	}

	pub fn submit_calls(&self) -> u32 {
		self.submit_calls.load(Ordering::SeqCst)
	}

	pub fn status_calls(&self) -> u32 {
		self.status_calls.load(Ordering::SeqCst)
	}

	/// A non-terminal or COMPLETED status entry for a script
	pub fn status(state: SwapState) -> ClientResult<SwapStatus> {
		Ok(SwapStatus {
			status: state,
			updated_at: Some(Utc::now()),
			..SwapStatus::default()
		})
	}

	/// A FAILED/REFUNDED status entry carrying a remote error message
	pub fn terminated(state: SwapState, message: &str) -> ClientResult<SwapStatus> {
		Ok(SwapStatus {
			status: state,
			updated_at: Some(Utc::now()),
			error: Some(message.to_string()),
			..SwapStatus::default()
		})
	}
}

#[async_trait]
impl SwapApi for MockSwapApi {
	async fn request_quote(&self, params: &QuoteParams) -> ClientResult<Quote> {
		self.quote_calls.fetch_add(1, Ordering::SeqCst);

		if let Some(error) = self.quote_error.lock().unwrap().take() {
			return Err(error);
		}

		// Mirror the real client's local validation
		let origin = assets::resolve(&params.from_symbol).ok_or_else(|| {
			ClientError::UnsupportedAsset {
				symbol: params.from_symbol.clone(),
			}
		})?;
		let destination = assets::resolve(&params.to_symbol).ok_or_else(|| {
			ClientError::UnsupportedAsset {
				symbol: params.to_symbol.clone(),
			}
		})?;

		let request = QuoteRequest::dry_run(
			origin.remote_identifier,
			destination.remote_identifier,
			params.amount.clone(),
			params.user_address.clone(),
			params.slippage_tolerance,
			Utc::now() + ChronoDuration::minutes(30),
			"mock-referral",
		);

		Ok(Quote::new(QuoteResponse {
			timestamp: Utc::now().to_rfc3339(),
			signature: format!("mock-sig-{}", Uuid::new_v4()),
			quote_request: request,
			quote: QuoteDetails {
				amount_in_formatted: params.amount.clone(),
				amount_in_usd: params.amount.clone(),
				amount_out_formatted: params.amount.clone(),
				amount_out_usd: params.amount.clone(),
				time_estimate: Some(assets::estimate_time(&params.from_symbol, &params.to_symbol)),
			},
		}))
	}

	async fn submit_swap(&self, quote: Quote, recipient_address: &str) -> ClientResult<SwapHandle> {
		self.submit_calls.fetch_add(1, Ordering::SeqCst);

		if let Some(error) = self.submit_error.lock().unwrap().take() {
			return Err(error);
		}

		// The submission payload must carry the refund override
		debug_assert_eq!(
			quote.request().for_submission(recipient_address).refund_to,
			recipient_address
		);

		Ok(SwapHandle {
			tracking_id: format!("mock-swap-{}", Uuid::new_v4()),
			originating_quote: quote,
		})
	}

	async fn fetch_status(&self, tracking_id: &str) -> ClientResult<SwapStatus> {
		self.status_calls.fetch_add(1, Ordering::SeqCst);

		if let Some(delay) = self.status_delay {
			tokio::time::sleep(delay).await;
		}

		let next = self.status_script.lock().unwrap().pop_front();
		match next {
			Some(Ok(mut status)) => {
				status.tracking_id = tracking_id.to_string();
				Ok(status)
			},
			Some(Err(e)) => Err(e),
			// Script exhausted: stay pending so budget exhaustion can be
			// exercised
			None => Ok(SwapStatus {
				tracking_id: tracking_id.to_string(),
				status: SwapState::Pending,
				updated_at: Some(Utc::now()),
				..SwapStatus::default()
			}),
		}
	}
}

/// Observer that records everything it sees, for assertions in tests
#[derive(Debug, Default)]
pub struct RecordingObserver {
	statuses: Mutex<Vec<SwapStatus>>,
	completions: Mutex<Vec<SwapStatus>>,
	failures: Mutex<Vec<SessionError>>,
}

impl RecordingObserver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn statuses(&self) -> Vec<SwapStatus> {
		self.statuses.lock().unwrap().clone()
	}

	pub fn completions(&self) -> Vec<SwapStatus> {
		self.completions.lock().unwrap().clone()
	}

	pub fn failures(&self) -> Vec<SessionError> {
		self.failures.lock().unwrap().clone()
	}
}

impl SessionObserver for RecordingObserver {
	fn on_status(&self, status: &SwapStatus) {
		self.statuses.lock().unwrap().push(status.clone());
	}

	fn on_completed(&self, status: &SwapStatus) {
		self.completions.lock().unwrap().push(status.clone());
	}

	fn on_failed(&self, error: &SessionError) {
		self.failures.lock().unwrap().push(error.clone());
	}
}
