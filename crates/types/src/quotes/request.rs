//! Wire model for `POST /quote`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Swap pricing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapType {
	ExactInput,
	ExactOutput,
}

/// Which side of the bridge a deposit or refund settles on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferType {
	OriginChain,
	VirtualChain,
}

/// Where the recipient receives the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
	DestinationChain,
	VirtualChain,
}

/// Application fee entry forwarded to the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppFee {
	pub recipient: String,
	/// Fee in basis points
	pub fee: u32,
}

/// Request body for `POST /quote`.
///
/// Constructed fresh per quote attempt and immutable once sent; the remote
/// echoes it back inside the quote response and expects the same payload
/// (with `dry` flipped and refund fields overridden) on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	/// Dry-run probe: no funds move when true
	pub dry: bool,
	pub swap_type: SwapType,
	/// Slippage tolerance in basis points (100 = 1%)
	pub slippage_tolerance: u32,
	pub origin_asset: String,
	pub deposit_type: TransferType,
	pub destination_asset: String,
	/// Decimal string, never binary floating point
	pub amount: String,
	pub refund_to: String,
	pub refund_type: TransferType,
	pub recipient: String,
	pub virtual_chain_recipient: String,
	pub virtual_chain_refund_recipient: String,
	pub recipient_type: RecipientType,
	/// ISO-8601; quotes are rejected past this point
	pub deadline: DateTime<Utc>,
	pub referral: String,
	pub quote_waiting_time_ms: u64,
	pub app_fees: Vec<AppFee>,
}

impl QuoteRequest {
	/// Build a dry-run EXACT_INPUT quote request with the fixed wire defaults
	/// the 1Click API expects.
	pub fn dry_run(
		origin_asset: impl Into<String>,
		destination_asset: impl Into<String>,
		amount: impl Into<String>,
		user_address: impl Into<String>,
		slippage_tolerance: u32,
		deadline: DateTime<Utc>,
		referral: impl Into<String>,
	) -> Self {
		let user_address = user_address.into();
		Self {
			dry: true,
			swap_type: SwapType::ExactInput,
			slippage_tolerance,
			origin_asset: origin_asset.into(),
			deposit_type: TransferType::OriginChain,
			destination_asset: destination_asset.into(),
			amount: amount.into(),
			refund_to: user_address.clone(),
			refund_type: TransferType::OriginChain,
			recipient: user_address.clone(),
			virtual_chain_recipient: user_address.clone(),
			virtual_chain_refund_recipient: user_address,
			recipient_type: RecipientType::DestinationChain,
			deadline,
			referral: referral.into(),
			quote_waiting_time_ms: 3000,
			app_fees: Vec::new(),
		}
	}

	/// Derive the submission payload: the same signed parameters with `dry`
	/// forced off and the refund addresses overridden to the submitting
	/// address. No other field changes in transit.
	pub fn for_submission(&self, refund_address: &str) -> Self {
		let mut request = self.clone();
		request.dry = false;
		request.refund_to = refund_address.to_string();
		request.virtual_chain_refund_recipient = refund_address.to_string();
		request
	}
}
