//! Static registry of assets the 1Click API can settle
//!
//! Maps human-readable symbols to the `nep141:*.omft.near` identifiers the
//! remote API expects. The table is fixed at compile time; there is no
//! lifecycle beyond lookup.

/// A supported asset and its remote identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
	/// Canonical upper-case symbol (e.g. "ETH", "USDC_ARB")
	pub symbol: &'static str,
	/// Identifier the 1Click API expects for this asset
	pub remote_identifier: &'static str,
	/// Human-readable name for display
	pub display_name: &'static str,
}

/// Base settlement latency in seconds
const BASE_SWAP_SECS: u64 = 3;
/// Extra latency charged when origin and destination differ
const CROSS_PAIR_PENALTY_SECS: u64 = 2;

const SUPPORTED_ASSETS: &[AssetDescriptor] = &[
	AssetDescriptor {
		symbol: "ETH",
		remote_identifier: "nep141:eth-0x0000000000000000000000000000000000000000.omft.near",
		display_name: "Ethereum",
	},
	AssetDescriptor {
		symbol: "USDC_ETH",
		remote_identifier: "nep141:eth-0xa0b86a33e6441e6c7d3e4081f7567f8b8e8b8b8b.omft.near",
		display_name: "USD Coin (Ethereum)",
	},
	AssetDescriptor {
		symbol: "BTC",
		remote_identifier: "nep141:btc-0x0000000000000000000000000000000000000000.omft.near",
		display_name: "Bitcoin",
	},
	AssetDescriptor {
		symbol: "SOL",
		remote_identifier: "nep141:sol-0x0000000000000000000000000000000000000000.omft.near",
		display_name: "Solana",
	},
	AssetDescriptor {
		symbol: "USDC_SOL",
		remote_identifier: "nep141:sol-5ce3bf3a31af18be40ba30f721101b4341690186.omft.near",
		display_name: "USD Coin (Solana)",
	},
	AssetDescriptor {
		symbol: "NEAR",
		remote_identifier: "nep141:near.omft.near",
		display_name: "NEAR Protocol",
	},
	AssetDescriptor {
		symbol: "USDC_ARB",
		remote_identifier: "nep141:arb-0xaf88d065e77c8cc2239327c5edb3a432268e5831.omft.near",
		display_name: "USD Coin (Arbitrum)",
	},
];

/// Look up an asset by symbol, case-insensitively
pub fn resolve(symbol: &str) -> Option<&'static AssetDescriptor> {
	let normalized = symbol.to_uppercase();
	SUPPORTED_ASSETS.iter().find(|a| a.symbol == normalized)
}

/// All assets the registry knows about, in table order
pub fn supported_assets() -> &'static [AssetDescriptor] {
	SUPPORTED_ASSETS
}

/// Estimate swap settlement time in seconds.
///
/// This is a fixed heuristic, not a measurement: a flat base latency plus a
/// penalty when the two symbols differ (cross-pair settlement). Actual network
/// conditions are not consulted.
pub fn estimate_time(from_symbol: &str, to_symbol: &str) -> u64 {
	let penalty = if from_symbol.eq_ignore_ascii_case(to_symbol) {
		0
	} else {
		CROSS_PAIR_PENALTY_SECS
	};
	BASE_SWAP_SECS + penalty
}
