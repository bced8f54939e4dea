//! 1Click Swap Types
//!
//! Shared models for the 1Click swap client: the asset registry, quote and
//! swap wire models, and the classified error taxonomy. This crate holds no
//! I/O; everything here is plain data shared by the client and service layers.

pub mod assets;
pub mod display;
pub mod errors;
pub mod quotes;
pub mod swaps;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use assets::{estimate_time, resolve, supported_assets, AssetDescriptor};
pub use display::format_display_amount;
pub use errors::{ClientError, ClientResult};
pub use quotes::{AppFee, Quote, QuoteDetails, QuoteRequest, QuoteResponse, RecipientType, SwapType, TransferType};
pub use swaps::{SwapDetails, SwapHandle, SwapState, SwapStatus, SwapSubmission, SwapSubmissionReceipt, TxInfo};
