//! 1Click Swap
//!
//! Client SDK for the NEAR Intents 1Click cross-chain swap API: quote
//! acquisition, swap submission, and status polling behind a single
//! session-oriented state machine.
//!
//! ```no_run
//! use std::sync::Arc;
//! use oneclick_swap::{
//! 	ClientConfig, NullObserver, OneClickClient, SessionOptions, SwapSession,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OneClickClient::new(ClientConfig::from_env())?;
//! let session = SwapSession::new(
//! 	Arc::new(client),
//! 	Arc::new(NullObserver),
//! 	SessionOptions::default(),
//! );
//!
//! let quote = session
//! 	.request_quote("ETH", "USDC_ETH", "0.5", "0xabc")
//! 	.await?;
//! println!("{} -> {}", quote.amount_in(), quote.amount_out());
//!
//! session.confirm("0xabc").await?;
//! # Ok(())
//! # }
//! ```

pub mod mocks;

// Core domain types
pub use oneclick_types::{
	assets,
	// External dependencies for convenience
	chrono,
	display::format_display_amount,
	estimate_time,
	resolve,
	serde_json,
	supported_assets,
	AssetDescriptor,
	ClientError,
	ClientResult,
	Quote,
	QuoteDetails,
	QuoteRequest,
	QuoteResponse,
	SwapDetails,
	SwapHandle,
	SwapState,
	SwapStatus,
	TxInfo,
};

// Client layer
pub use oneclick_client::{
	api::{QuoteParams, SwapApi},
	ClientConfig, OneClickClient,
};

// Service layer
pub use oneclick_service::{
	poller::{PollError, PollOptions, StatusPoller, StatusSink},
	session::{NullObserver, SessionError, SessionObserver, SessionOptions, SessionPhase, SwapSession},
};

/// Install a `tracing` subscriber reading `RUST_LOG`, for binaries and
/// manual runs. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
	use tracing_subscriber::EnvFilter;

	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.try_init();
}
