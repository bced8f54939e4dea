//! Full session lifecycle against a scripted API

use std::sync::Arc;
use std::time::Duration;

use oneclick_swap::mocks::{MockSwapApi, RecordingObserver};
use oneclick_swap::{
	ClientError, PollOptions, SessionError, SessionOptions, SessionPhase, SwapDetails, SwapState,
	SwapSession, SwapStatus, TxInfo,
};

fn fast_options() -> SessionOptions {
	SessionOptions {
		poll: PollOptions {
			interval: Duration::from_millis(5),
			max_attempts: 60,
		},
		..SessionOptions::default()
	}
}

fn session_with(
	api: Arc<MockSwapApi>,
	options: SessionOptions,
) -> (SwapSession, Arc<RecordingObserver>) {
	let observer = Arc::new(RecordingObserver::new());
	let session = SwapSession::new(api, observer.clone(), options);
	(session, observer)
}

async fn wait_for_phase(session: &SwapSession, phase: SessionPhase) {
	for _ in 0..200 {
		if session.phase() == phase {
			return;
		}
		tokio::time::sleep(Duration::from_millis(5)).await;
	}
	panic!("session never reached {:?}, stuck in {:?}", phase, session.phase());
}

#[tokio::test]
async fn quote_confirm_poll_complete_flow() {
	let completed = SwapStatus {
		status: SwapState::Completed,
		swap_details: SwapDetails {
			origin_chain_tx_hashes: vec![TxInfo {
				hash: "0xaaa".to_string(),
				explorer_url: "https://etherscan.io/tx/0xaaa".to_string(),
			}],
			destination_chain_tx_hashes: vec![TxInfo {
				hash: "0xbbb".to_string(),
				explorer_url: "https://etherscan.io/tx/0xbbb".to_string(),
			}],
		},
		..SwapStatus::default()
	};
	let api = Arc::new(MockSwapApi::new().with_status_script([
		MockSwapApi::status(SwapState::Pending),
		Ok(completed.clone()),
	]));
	let (session, observer) = session_with(api.clone(), fast_options());

	assert_eq!(session.phase(), SessionPhase::Idle);

	let quote = session
		.request_quote("ETH", "USDC_ETH", "100", "0xabc")
		.await
		.unwrap();
	assert_eq!(session.phase(), SessionPhase::Quoted);
	assert_eq!(quote.amount_in(), "100");

	let handle = session.confirm("0xabc").await.unwrap();
	assert_eq!(session.phase(), SessionPhase::Polling);
	assert_eq!(session.tracking_id(), Some(handle.tracking_id.clone()));

	wait_for_phase(&session, SessionPhase::Completed).await;

	// Remote returned COMPLETED on tick 2; success callback fired once with
	// that tick's details
	assert_eq!(api.status_calls(), 2);
	let completions = observer.completions();
	assert_eq!(completions.len(), 1);
	assert_eq!(
		completions[0].swap_details.destination_chain_tx_hashes[0].hash,
		"0xbbb"
	);
	assert!(observer.failures().is_empty());

	// Every observed status was republished, in order
	let statuses = observer.statuses();
	assert_eq!(statuses.len(), 2);
	assert_eq!(statuses[0].status, SwapState::Pending);
	assert_eq!(statuses[1].status, SwapState::Completed);
}

#[tokio::test]
async fn submitted_handle_preserves_originating_quote() {
	let api = Arc::new(MockSwapApi::new().with_status_script([
		MockSwapApi::status(SwapState::Completed),
	]));
	let (session, _observer) = session_with(api, fast_options());

	let quote = session
		.request_quote("BTC", "NEAR", "0.25", "0xabc")
		.await
		.unwrap();
	let handle = session.confirm("0xabc").await.unwrap();

	// The quote travels into the handle unmutated
	assert_eq!(handle.originating_quote, quote);
	assert!(handle.originating_quote.request().dry);
}

#[tokio::test]
async fn failed_swap_reaches_failed_phase_with_remote_message() {
	let api = Arc::new(MockSwapApi::new().with_status_script([
		MockSwapApi::status(SwapState::Pending),
		MockSwapApi::terminated(SwapState::Failed, "insufficient funds"),
	]));
	let (session, observer) = session_with(api, fast_options());

	session
		.request_quote("ETH", "USDC_ETH", "100", "0xabc")
		.await
		.unwrap();
	session.confirm("0xabc").await.unwrap();

	wait_for_phase(&session, SessionPhase::Failed).await;

	let failures = observer.failures();
	assert_eq!(failures.len(), 1);
	assert!(failures[0].to_string().contains("insufficient funds"));
	assert!(observer.completions().is_empty());
}

#[tokio::test]
async fn polling_timeout_fails_the_session() {
	// Empty script: the mock reports PENDING forever
	let api = Arc::new(MockSwapApi::new());
	let (session, observer) = session_with(
		api.clone(),
		SessionOptions {
			poll: PollOptions {
				interval: Duration::from_millis(5),
				max_attempts: 5,
			},
			..SessionOptions::default()
		},
	);

	session
		.request_quote("ETH", "NEAR", "1", "0xabc")
		.await
		.unwrap();
	session.confirm("0xabc").await.unwrap();

	wait_for_phase(&session, SessionPhase::Failed).await;
	assert_eq!(api.status_calls(), 5);
	assert_eq!(observer.failures().len(), 1);
	assert!(observer.failures()[0].to_string().contains("timed out"));
}

#[tokio::test]
async fn reset_during_active_poll_suppresses_all_deliveries() {
	// Slow status responses so reset lands while a tick is in flight
	let api = Arc::new(
		MockSwapApi::new().with_status_delay(Duration::from_millis(40)),
	);
	let (session, observer) = session_with(api, fast_options());

	session
		.request_quote("ETH", "USDC_ETH", "100", "0xabc")
		.await
		.unwrap();
	session.confirm("0xabc").await.unwrap();
	assert_eq!(session.phase(), SessionPhase::Polling);

	tokio::time::sleep(Duration::from_millis(10)).await;
	session.reset();
	assert_eq!(session.phase(), SessionPhase::Idle);
	assert_eq!(session.current_quote(), None);
	assert_eq!(session.tracking_id(), None);

	// Even a tick already scheduled at reset time must not reach the observer
	tokio::time::sleep(Duration::from_millis(150)).await;
	assert!(observer.statuses().is_empty());
	assert!(observer.completions().is_empty());
	assert!(observer.failures().is_empty());
	assert_eq!(session.phase(), SessionPhase::Idle);
}

#[tokio::test]
async fn reset_then_fresh_quote_starts_a_new_lifecycle() {
	let api = Arc::new(MockSwapApi::new().with_status_script([
		MockSwapApi::status(SwapState::Completed),
	]));
	let (session, observer) = session_with(api, fast_options());

	session
		.request_quote("ETH", "USDC_ETH", "100", "0xabc")
		.await
		.unwrap();
	session.reset();
	assert_eq!(session.phase(), SessionPhase::Idle);

	// A fresh lifecycle after reset runs to completion
	session
		.request_quote("SOL", "USDC_SOL", "2", "0xdef")
		.await
		.unwrap();
	session.confirm("0xdef").await.unwrap();
	wait_for_phase(&session, SessionPhase::Completed).await;
	assert_eq!(observer.completions().len(), 1);
}

#[tokio::test]
async fn confirm_requires_a_quoted_session() {
	let api = Arc::new(MockSwapApi::new());
	let (session, _observer) = session_with(api.clone(), fast_options());

	let err = session.confirm("0xabc").await.unwrap_err();
	assert_eq!(
		err,
		SessionError::InvalidPhase {
			operation: "confirm",
			phase: SessionPhase::Idle,
		}
	);
	assert_eq!(api.submit_calls(), 0);
}

#[tokio::test]
async fn quote_failure_moves_session_to_failed() {
	let api = Arc::new(MockSwapApi::new().with_quote_error(ClientError::ServiceUnavailable {
		status_code: 503,
	}));
	let (session, _observer) = session_with(api, fast_options());

	let err = session
		.request_quote("ETH", "USDC_ETH", "100", "0xabc")
		.await
		.unwrap_err();
	assert!(matches!(
		err,
		SessionError::Client(ClientError::ServiceUnavailable { status_code: 503 })
	));
	assert_eq!(session.phase(), SessionPhase::Failed);

	// No retry happens on its own; reset is the only way forward
	session.reset();
	assert_eq!(session.phase(), SessionPhase::Idle);
}

#[tokio::test]
async fn unsupported_asset_fails_without_touching_the_network() {
	let api = Arc::new(MockSwapApi::new());
	let (session, _observer) = session_with(api, fast_options());

	let err = session
		.request_quote("DOGE", "USDC_ETH", "100", "0xabc")
		.await
		.unwrap_err();
	assert_eq!(
		err,
		SessionError::Client(ClientError::UnsupportedAsset {
			symbol: "DOGE".to_string()
		})
	);
	assert_eq!(session.phase(), SessionPhase::Failed);
}

#[tokio::test]
async fn submission_failure_surfaces_to_observer() {
	let api = Arc::new(MockSwapApi::new().with_submit_error(ClientError::Network {
		reason: "connection reset".to_string(),
	}));
	let (session, observer) = session_with(api, fast_options());

	session
		.request_quote("ETH", "USDC_ETH", "100", "0xabc")
		.await
		.unwrap();
	let err = session.confirm("0xabc").await.unwrap_err();
	assert!(matches!(err, SessionError::Client(ClientError::Network { .. })));
	assert_eq!(session.phase(), SessionPhase::Failed);
	assert_eq!(observer.failures().len(), 1);
}
