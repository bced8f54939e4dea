//! HTTP implementation of [`SwapApi`] against the 1Click API

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use tracing::{debug, warn};
use url::Url;

use oneclick_types::{
	assets, ClientError, ClientResult, Quote, QuoteRequest, QuoteResponse, SwapHandle, SwapStatus,
	SwapSubmission, SwapSubmissionReceipt,
};

use crate::api::{QuoteParams, SwapApi};
use crate::config::ClientConfig;

const TRACING_TARGET: &str = "oneclick_client::oneclick";

/// Quote deadline horizon
const QUOTE_DEADLINE_MINS: i64 = 30;

/// Stateless client for the three 1Click endpoints.
///
/// Holds no mutable state between calls; the underlying `reqwest::Client`
/// is shared for connection pooling only. Every failure surfaces as one of
/// the five [`ClientError`] kinds.
#[derive(Debug, Clone)]
pub struct OneClickClient {
	config: ClientConfig,
	http: Arc<Client>,
}

impl OneClickClient {
	pub fn new(config: ClientConfig) -> ClientResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("Accept", HeaderValue::from_static("application/json"));

		let http = Client::builder()
			.default_headers(headers)
			.timeout(config.request_timeout)
			.build()
			.map_err(|e| ClientError::Network {
				reason: format!("failed to build HTTP client: {}", e),
			})?;

		Ok(Self {
			config,
			http: Arc::new(http),
		})
	}

	/// Client with the default production configuration
	pub fn with_default_config() -> ClientResult<Self> {
		Self::new(ClientConfig::default())
	}

	/// Properly construct a URL by joining the base endpoint with a path
	fn build_url(&self, path: &str) -> ClientResult<String> {
		let mut base = Url::parse(&self.config.base_url).map_err(|e| ClientError::Network {
			reason: format!("invalid base URL '{}': {}", self.config.base_url, e),
		})?;

		// Treat the base URL as a directory so path segments join cleanly
		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let joined = base.join(path).map_err(|e| ClientError::Network {
			reason: format!("failed to join URL path '{}': {}", path, e),
		})?;

		Ok(joined.to_string())
	}

	/// Map a transport-level failure (no HTTP response received) to the
	/// taxonomy.
	fn classify_transport(err: reqwest::Error) -> ClientError {
		let reason = if err.is_timeout() {
			"request timed out".to_string()
		} else if err.is_connect() {
			format!("connection failed: {}", err)
		} else {
			err.to_string()
		};
		ClientError::Network { reason }
	}

	/// Check the response status and read the body, classifying any HTTP
	/// failure. The remote's own `message` field is surfaced when present.
	async fn read_success_body(response: Response) -> ClientResult<String> {
		let status = response.status();
		let body = response
			.text()
			.await
			.map_err(|e| ClientError::Network {
				reason: format!("failed to read response body: {}", e),
			})?;

		if status.is_success() {
			return Ok(body);
		}

		let remote_message = serde_json::from_str::<serde_json::Value>(&body)
			.ok()
			.and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));

		warn!(
			target: TRACING_TARGET,
			status = status.as_u16(),
			message = remote_message.as_deref().unwrap_or(""),
			"1Click API returned an error status"
		);

		Err(ClientError::from_http_failure(status.as_u16(), remote_message))
	}

	/// Amounts travel as decimal strings; reject anything that is not a
	/// positive decimal before spending a round trip on it.
	fn validate_amount(amount: &str) -> ClientResult<()> {
		let (int_part, frac_part) = match amount.split_once('.') {
			Some((i, f)) => (i, f),
			None => (amount, ""),
		};

		let well_formed = !(int_part.is_empty() && frac_part.is_empty())
			&& int_part.chars().all(|c| c.is_ascii_digit())
			&& frac_part.chars().all(|c| c.is_ascii_digit());
		let positive = int_part.chars().any(|c| c != '0') || frac_part.chars().any(|c| c != '0');

		if well_formed && positive {
			Ok(())
		} else {
			Err(ClientError::InvalidQuote {
				reason: format!("amount must be a positive decimal string, got '{}'", amount),
			})
		}
	}
}

#[async_trait]
impl SwapApi for OneClickClient {
	async fn request_quote(&self, params: &QuoteParams) -> ClientResult<Quote> {
		// Both assets must resolve locally before any network call happens
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
		Self::validate_amount(&params.amount)?;

		// Always a dry-run probe: price discovery only, no funds move
		let request = QuoteRequest::dry_run(
			origin.remote_identifier,
			destination.remote_identifier,
			params.amount.clone(),
			params.user_address.clone(),
			params.slippage_tolerance,
			Utc::now() + ChronoDuration::minutes(QUOTE_DEADLINE_MINS),
			self.config.referral.clone(),
		);

		let url = self.build_url("quote")?;
		debug!(
			target: TRACING_TARGET,
			from = %params.from_symbol,
			to = %params.to_symbol,
			amount = %params.amount,
			"Requesting quote"
		);

		let response = self
			.http
			.post(&url)
			.json(&request)
			.send()
			.await
			.map_err(Self::classify_transport)?;

		let body = Self::read_success_body(response).await?;
		let quote_response: QuoteResponse =
			serde_json::from_str(&body).map_err(|e| ClientError::InvalidQuote {
				reason: format!("malformed quote response: {}", e),
			})?;

		debug!(
			target: TRACING_TARGET,
			amount_in = %quote_response.quote.amount_in_formatted,
			amount_out = %quote_response.quote.amount_out_formatted,
			"Quote received"
		);

		Ok(Quote::new(quote_response))
	}

	async fn submit_swap(&self, quote: Quote, recipient_address: &str) -> ClientResult<SwapHandle> {
		let submission = SwapSubmission {
			swap_request: quote.request().for_submission(recipient_address),
			quote_response: quote.response.clone(),
		};

		let url = self.build_url("swap")?;
		debug!(
			target: TRACING_TARGET,
			recipient = %recipient_address,
			amount = %submission.swap_request.amount,
			"Submitting swap"
		);

		let response = self
			.http
			.post(&url)
			.json(&submission)
			.send()
			.await
			.map_err(Self::classify_transport)?;

		let body = Self::read_success_body(response).await?;
		let receipt: SwapSubmissionReceipt =
			serde_json::from_str(&body).map_err(|e| ClientError::InvalidQuote {
				reason: format!("malformed swap response: {}", e),
			})?;

		debug!(
			target: TRACING_TARGET,
			swap_id = %receipt.swap_id,
			"Swap accepted"
		);

		Ok(SwapHandle {
			tracking_id: receipt.swap_id,
			originating_quote: quote,
		})
	}

	async fn fetch_status(&self, tracking_id: &str) -> ClientResult<SwapStatus> {
		let url = self.build_url(&format!("swap/{}/status", tracking_id))?;

		let response = self
			.http
			.get(&url)
			.send()
			.await
			.map_err(Self::classify_transport)?;

		let body = Self::read_success_body(response).await?;
		let mut status: SwapStatus =
			serde_json::from_str(&body).map_err(|e| ClientError::InvalidQuote {
				reason: format!("malformed status response: {}", e),
			})?;
		status.tracking_id = tracking_id.to_string();

		debug!(
			target: TRACING_TARGET,
			tracking_id = %tracking_id,
			status = ?status.status,
			"Status fetched"
		);

		Ok(status)
	}
}
