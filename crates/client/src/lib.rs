//! 1Click Swap Client
//!
//! Stateless request/response wrapper around the three remote endpoints
//! (quote, submit, status). Every transport failure is classified into the
//! [`oneclick_types::ClientError`] taxonomy before it reaches callers.

pub mod api;
pub mod config;
pub mod oneclick;

pub use api::SwapApi;
pub use config::ClientConfig;
pub use oneclick::OneClickClient;
