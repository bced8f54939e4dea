//! Quote domain model and wire protocol

use chrono::{DateTime, Utc};

pub mod request;
pub mod response;

pub use request::{AppFee, QuoteRequest, RecipientType, SwapType, TransferType};
pub use response::{QuoteDetails, QuoteResponse};

/// A signed, time-bounded price offer held by a swap session.
///
/// Wraps the remote API's response verbatim: the embedded `quoteRequest`,
/// `signature` and `timestamp` must be echoed back unchanged on submission,
/// so the wire payload is kept intact rather than re-assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
	/// The signed payload as returned by the remote API
	pub response: QuoteResponse,
	/// When the quote was received locally
	pub received_at: DateTime<Utc>,
}

impl Quote {
	pub fn new(response: QuoteResponse) -> Self {
		Self {
			response,
			received_at: Utc::now(),
		}
	}

	/// The request the remote signed this quote for
	pub fn request(&self) -> &QuoteRequest {
		&self.response.quote_request
	}

	/// Input amount as a decimal string
	pub fn amount_in(&self) -> &str {
		&self.response.quote.amount_in_formatted
	}

	/// Output amount as a decimal string
	pub fn amount_out(&self) -> &str {
		&self.response.quote.amount_out_formatted
	}

	/// USD equivalents of the input and output amounts
	pub fn usd_amounts(&self) -> (&str, &str) {
		(
			&self.response.quote.amount_in_usd,
			&self.response.quote.amount_out_usd,
		)
	}

	/// Remote-reported settlement estimate in seconds, when provided.
	/// Falls back to the registry heuristic at the call site otherwise.
	pub fn time_estimate(&self) -> Option<u64> {
		self.response.quote.time_estimate
	}
}
