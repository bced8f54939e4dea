//! The swap API seam
//!
//! The poller and session layers depend on this trait rather than on the
//! concrete HTTP client, so tests drive them with scripted implementations.

use async_trait::async_trait;
use std::fmt::Debug;

use oneclick_types::{ClientResult, Quote, SwapHandle, SwapStatus};

/// Parameters for a quote attempt, in user-facing terms (symbols, not
/// remote identifiers)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteParams {
	pub from_symbol: String,
	pub to_symbol: String,
	/// Decimal string; must be positive
	pub amount: String,
	/// Recipient and refund address for the quote probe
	pub user_address: String,
	/// Slippage tolerance in basis points
	pub slippage_tolerance: u32,
}

/// The three remote operations, each a single network round trip.
///
/// Implementations are side-effect-free with respect to local state: they
/// perform the call and translate its outcome, nothing more.
#[async_trait]
pub trait SwapApi: Send + Sync + Debug {
	/// Request a dry-run price quote. No funds move.
	async fn request_quote(&self, params: &QuoteParams) -> ClientResult<Quote>;

	/// Submit a previously obtained quote for execution, refunding to
	/// `recipient_address` on failure. Consumes the quote: the returned
	/// handle owns it unmutated.
	async fn submit_swap(&self, quote: Quote, recipient_address: &str) -> ClientResult<SwapHandle>;

	/// Fetch the current status for a tracking identifier.
	async fn fetch_status(&self, tracking_id: &str) -> ClientResult<SwapStatus>;
}
