//! Wire model for the quote response

use serde::{Deserialize, Serialize};

use super::QuoteRequest;

/// Priced amounts for a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDetails {
	/// Input amount as a decimal string
	pub amount_in_formatted: String,
	/// USD equivalent of the input
	pub amount_in_usd: String,
	/// Output amount as a decimal string
	pub amount_out_formatted: String,
	/// USD equivalent of the output
	pub amount_out_usd: String,
	/// Remote settlement estimate in seconds
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time_estimate: Option<u64>,
}

/// Response body for `POST /quote`.
///
/// `timestamp` and `signature` are opaque tokens; the whole response is
/// echoed back verbatim on submission so the remote can verify its own
/// signature. Amount fields are required: a response missing them is
/// rejected as an invalid quote rather than carried with undefined amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	pub timestamp: String,
	pub signature: String,
	pub quote_request: QuoteRequest,
	pub quote: QuoteDetails,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_quote_response() {
		let json = r#"{
			"timestamp": "2025-01-01T00:00:00Z",
			"signature": "ed25519:abc123",
			"quoteRequest": {
				"dry": true,
				"swapType": "EXACT_INPUT",
				"slippageTolerance": 100,
				"originAsset": "nep141:eth-0x0000000000000000000000000000000000000000.omft.near",
				"depositType": "ORIGIN_CHAIN",
				"destinationAsset": "nep141:near.omft.near",
				"amount": "100",
				"refundTo": "0xabc",
				"refundType": "ORIGIN_CHAIN",
				"recipient": "0xabc",
				"virtualChainRecipient": "0xabc",
				"virtualChainRefundRecipient": "0xabc",
				"recipientType": "DESTINATION_CHAIN",
				"deadline": "2025-01-01T00:30:00Z",
				"referral": "crypto-concierge",
				"quoteWaitingTimeMs": 3000,
				"appFees": []
			},
			"quote": {
				"amountInFormatted": "100",
				"amountInUsd": "250000.00",
				"amountOutFormatted": "249100.50",
				"amountOutUsd": "249100.50",
				"timeEstimate": 5
			}
		}"#;

		let response: QuoteResponse = serde_json::from_str(json).unwrap();
		assert_eq!(response.signature, "ed25519:abc123");
		assert_eq!(response.quote.amount_in_formatted, "100");
		assert_eq!(response.quote.time_estimate, Some(5));
		assert!(response.quote_request.dry);
	}

	#[test]
	fn test_missing_amounts_fail_to_parse() {
		// A quote without priced amounts must not parse into a usable quote
		let json = r#"{
			"timestamp": "2025-01-01T00:00:00Z",
			"signature": "ed25519:abc123",
			"quoteRequest": null,
			"quote": {}
		}"#;
		assert!(serde_json::from_str::<QuoteResponse>(json).is_err());
	}

	#[test]
	fn test_time_estimate_optional() {
		let details: QuoteDetails = serde_json::from_str(
			r#"{
				"amountInFormatted": "1",
				"amountInUsd": "1",
				"amountOutFormatted": "1",
				"amountOutUsd": "1"
			}"#,
		)
		.unwrap();
		assert_eq!(details.time_estimate, None);
	}
}
