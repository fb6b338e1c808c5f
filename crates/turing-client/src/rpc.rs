//! JSON-RPC envelope types.

use serde::Serialize;
use serde_json::{Map, Value};

use turing_core::error::ClientError;

/// Every request carries the same id; calls are never multiplexed.
pub const REQUEST_ID: u64 = 1;
pub const JSONRPC_VERSION: &str = "2.0";

/// The outer `{id, jsonrpc, method, params}` request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest<'a> {
    pub id: u64,
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: Value) -> Self {
        Self {
            id: REQUEST_ID,
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
        }
    }
}

/// Unwrap a decoded response envelope.
///
/// Any `error` key fails the call with its payload, whatever its value.
/// Otherwise the `result` field is returned.
pub fn unwrap_response(mut envelope: Map<String, Value>) -> Result<Value, ClientError> {
    if let Some(error) = envelope.remove("error") {
        return Err(ClientError::Rpc(error));
    }
    envelope
        .remove("result")
        .ok_or(ClientError::MissingField("result"))
}
