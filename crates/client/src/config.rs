//! Client configuration

use std::time::Duration;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "ONECLICK_API_URL";

/// Default base URL of the 1Click API
pub const DEFAULT_API_URL: &str = "https://1click.near-intents.org";

/// Per-request timeout (applies to each of the three endpoints)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Referral tag attached to every quote request
pub const DEFAULT_REFERRAL: &str = "crypto-concierge";

/// Settings for [`crate::OneClickClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub base_url: String,
	pub request_timeout: Duration,
	pub referral: String,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_API_URL.to_string(),
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
			referral: DEFAULT_REFERRAL.to_string(),
		}
	}
}

impl ClientConfig {
	/// Default configuration with the base URL taken from `ONECLICK_API_URL`
	/// when set.
	pub fn from_env() -> Self {
		let mut config = Self::default();
		if let Ok(url) = std::env::var(API_URL_ENV) {
			if !url.trim().is_empty() {
				config.base_url = url;
			}
		}
		config
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	pub fn with_referral(mut self, referral: impl Into<String>) -> Self {
		self.referral = referral.into();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = ClientConfig::default();
		assert_eq!(config.base_url, "https://1click.near-intents.org");
		assert_eq!(config.request_timeout, Duration::from_secs(30));
		assert_eq!(config.referral, "crypto-concierge");
	}

	#[test]
	fn test_builder_overrides() {
		let config = ClientConfig::default()
			.with_base_url("http://localhost:3000")
			.with_request_timeout(Duration::from_secs(5))
			.with_referral("test-tag");
		assert_eq!(config.base_url, "http://localhost:3000");
		assert_eq!(config.request_timeout, Duration::from_secs(5));
		assert_eq!(config.referral, "test-tag");
	}
}
