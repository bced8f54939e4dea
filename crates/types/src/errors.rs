//! Classified errors for swap client operations

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Every transport or HTTP failure is classified into exactly one of these
/// before it crosses the client boundary; callers never see a raw transport
/// error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
	#[error("Unsupported asset: {symbol}")]
	UnsupportedAsset { symbol: String },

	#[error("Quote rejected: {reason}")]
	InvalidQuote { reason: String },

	#[error("Rate limit exceeded. Please try again later.")]
	RateLimited,

	#[error("Swap service is temporarily unavailable (HTTP {status_code})")]
	ServiceUnavailable { status_code: u16 },

	#[error("Network error: {reason}")]
	Network { reason: String },
}

impl ClientError {
	/// Classify an HTTP failure status into the error taxonomy.
	///
	/// 429 maps to rate limiting, 5xx to service unavailability, and any other
	/// failing status means the remote rejected the parameters. The remote's
	/// own message is surfaced when present.
	pub fn from_http_failure(status_code: u16, remote_message: Option<String>) -> Self {
		match status_code {
			429 => Self::RateLimited,
			code if code >= 500 => Self::ServiceUnavailable { status_code: code },
			code => Self::InvalidQuote {
				reason: remote_message
					.unwrap_or_else(|| format!("request rejected with HTTP {}", code)),
			},
		}
	}

	/// Whether the failure is transient (the remote may recover on the next
	/// attempt). Used by the status poller to keep ticking through outages.
	pub fn is_transient(&self) -> bool {
		matches!(self, Self::Network { .. } | Self::ServiceUnavailable { .. })
	}
}
