//! Swap submission, tracking handle, and status models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quotes::{Quote, QuoteRequest, QuoteResponse};

/// Remote-reported swap lifecycle state.
///
/// Transitions are monotonic toward a terminal state; unknown or missing
/// values deserialize to [`SwapState::Unknown`], which is non-terminal so
/// polling continues optimistically rather than failing on an ambiguous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapState {
	Pending,
	QuoteGenerated,
	DepositDetected,
	KnownDepositTx,
	Processing,
	Completed,
	Failed,
	Refunded,
	#[default]
	#[serde(other)]
	Unknown,
}

impl SwapState {
	/// Whether no further transition can occur from this state
	pub fn is_terminal(&self) -> bool {
		matches!(self, Self::Completed | Self::Failed | Self::Refunded)
	}

	/// User-facing progress message for this state
	pub fn user_message(&self) -> &'static str {
		match self {
			Self::Pending => "Preparing payment...",
			Self::QuoteGenerated => "Quote generated, waiting for deposit...",
			Self::DepositDetected => "Deposit detected, processing...",
			Self::KnownDepositTx => "Processing your payment...",
			Self::Processing => "Executing cross-chain swap...",
			Self::Completed => "Payment completed successfully!",
			Self::Failed => "Payment failed",
			Self::Refunded => "Payment refunded",
			Self::Unknown => "Processing...",
		}
	}
}

/// An on-chain transaction reference with its explorer link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInfo {
	pub hash: String,
	pub explorer_url: String,
}

/// Transaction hashes observed on both sides of the swap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwapDetails {
	pub origin_chain_tx_hashes: Vec<TxInfo>,
	pub destination_chain_tx_hashes: Vec<TxInfo>,
}

/// Response body for `GET /swap/{swapId}/status`.
///
/// The latest instance is the session's authoritative status; only the most
/// recent one is retained. `tracking_id` is not part of the wire payload and
/// is filled in by the client from the queried identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapStatus {
	#[serde(skip)]
	pub tracking_id: String,
	#[serde(default)]
	pub status: SwapState,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<DateTime<Utc>>,
	#[serde(default)]
	pub swap_details: SwapDetails,
	/// Remote-provided failure message, surfaced verbatim
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl SwapStatus {
	pub fn is_terminal(&self) -> bool {
		self.status.is_terminal()
	}
}

/// Request body for `POST /swap`: the signed quote plus its derived
/// submission parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapSubmission {
	pub quote_response: QuoteResponse,
	pub swap_request: QuoteRequest,
}

/// Response body for `POST /swap`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapSubmissionReceipt {
	pub swap_id: String,
}

/// Tracking handle for a submitted swap.
///
/// Holds the tracking identifier (the sole key for status queries) together
/// with the quote it was created from, unmutated. One handle per session.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapHandle {
	pub tracking_id: String,
	pub originating_quote: Quote,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_terminal_states() {
		assert!(SwapState::Completed.is_terminal());
		assert!(SwapState::Failed.is_terminal());
		assert!(SwapState::Refunded.is_terminal());
		assert!(!SwapState::Pending.is_terminal());
		assert!(!SwapState::Processing.is_terminal());
		assert!(!SwapState::DepositDetected.is_terminal());
		assert!(!SwapState::Unknown.is_terminal());
	}

	#[test]
	fn test_status_wire_parsing() {
		let json = r#"{
			"status": "PROCESSING",
			"updatedAt": "2025-01-01T00:00:10Z",
			"swapDetails": {
				"originChainTxHashes": [
					{"hash": "0xaaa", "explorerUrl": "https://etherscan.io/tx/0xaaa"}
				],
				"destinationChainTxHashes": []
			}
		}"#;

		let status: SwapStatus = serde_json::from_str(json).unwrap();
		assert_eq!(status.status, SwapState::Processing);
		assert_eq!(status.swap_details.origin_chain_tx_hashes.len(), 1);
		assert_eq!(status.swap_details.origin_chain_tx_hashes[0].hash, "0xaaa");
		assert!(status.error.is_none());
	}

	#[test]
	fn test_unknown_and_missing_status_are_non_terminal() {
		let unknown: SwapStatus = serde_json::from_str(r#"{"status": "SOMETHING_NEW"}"#).unwrap();
		assert_eq!(unknown.status, SwapState::Unknown);
		assert!(!unknown.is_terminal());

		let missing: SwapStatus = serde_json::from_str(r#"{}"#).unwrap();
		assert_eq!(missing.status, SwapState::Unknown);
		assert!(!missing.is_terminal());
	}

	#[test]
	fn test_failed_status_carries_remote_message() {
		let status: SwapStatus =
			serde_json::from_str(r#"{"status": "FAILED", "error": "insufficient funds"}"#).unwrap();
		assert_eq!(status.status, SwapState::Failed);
		assert_eq!(status.error.as_deref(), Some("insufficient funds"));
	}
}
