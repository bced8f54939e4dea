//! Drive a full quote → confirm → poll flow against the live 1Click API.
//!
//! Usage: swap_demo <FROM> <TO> <AMOUNT> <ADDRESS>
//!
//! The base URL can be overridden with `ONECLICK_API_URL` (useful for
//! pointing at a staging deployment).

use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use oneclick_swap::{
	format_display_amount, init_tracing, ClientConfig, OneClickClient, SessionError,
	SessionObserver, SessionOptions, SwapSession, SwapStatus,
};

enum Outcome {
	Completed(SwapStatus),
	Failed(String),
}

struct ChannelObserver {
	outcome: mpsc::UnboundedSender<Outcome>,
}

impl SessionObserver for ChannelObserver {
	fn on_status(&self, status: &SwapStatus) {
		info!(
			state = ?status.status,
			"{}",
			status.status.user_message()
		);
	}

	fn on_completed(&self, status: &SwapStatus) {
		let _ = self.outcome.send(Outcome::Completed(status.clone()));
	}

	fn on_failed(&self, err: &SessionError) {
		let _ = self.outcome.send(Outcome::Failed(err.to_string()));
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	init_tracing();

	let args: Vec<String> = std::env::args().skip(1).collect();
	let [from, to, amount, address] = match args.as_slice() {
		[a, b, c, d] => [a.clone(), b.clone(), c.clone(), d.clone()],
		_ => {
			eprintln!("usage: swap_demo <FROM> <TO> <AMOUNT> <ADDRESS>");
			return ExitCode::FAILURE;
		},
	};

	let client = match OneClickClient::new(ClientConfig::from_env()) {
		Ok(client) => client,
		Err(e) => {
			error!(error = %e, "Failed to build client");
			return ExitCode::FAILURE;
		},
	};

	let (tx, mut rx) = mpsc::unbounded_channel();
	let session = SwapSession::new(
		Arc::new(client),
		Arc::new(ChannelObserver { outcome: tx }),
		SessionOptions::default(),
	);

	let quote = match session.request_quote(&from, &to, &amount, &address).await {
		Ok(quote) => quote,
		Err(e) => {
			error!(error = %e, "Quote request failed");
			return ExitCode::FAILURE;
		},
	};

	let (usd_in, usd_out) = quote.usd_amounts();
	info!(
		amount_in = %format_display_amount(quote.amount_in()),
		amount_out = %format_display_amount(quote.amount_out()),
		usd_in = %usd_in,
		usd_out = %usd_out,
		estimate_secs = quote.time_estimate().unwrap_or_else(|| {
			oneclick_swap::estimate_time(&from, &to)
		}),
		"Quote received, submitting"
	);

	let handle = match session.confirm(&address).await {
		Ok(handle) => handle,
		Err(e) => {
			error!(error = %e, "Swap submission failed");
			return ExitCode::FAILURE;
		},
	};
	info!(tracking_id = %handle.tracking_id, "Swap submitted, waiting for completion");

	match rx.recv().await {
		Some(Outcome::Completed(status)) => {
			for tx_info in &status.swap_details.destination_chain_tx_hashes {
				info!(hash = %tx_info.hash, explorer = %tx_info.explorer_url, "Settled");
			}
			info!("Swap completed");
			ExitCode::SUCCESS
		},
		Some(Outcome::Failed(message)) => {
			error!(%message, "Swap did not complete");
			ExitCode::FAILURE
		},
		None => {
			error!("Session ended without an outcome");
			ExitCode::FAILURE
		},
	}
}
