//! turing-client — JSON-RPC transport for the grading service.
//!
//! Implements the `GradingService` trait over HTTP, so questions built with
//! `turing-core` can be graded remotely.

pub mod client;
pub mod config;
pub mod mock;
pub mod rpc;

pub use client::RpcClient;
pub use config::{load_config, load_config_from, ClientConfig};
pub use mock::MockGradingService;
