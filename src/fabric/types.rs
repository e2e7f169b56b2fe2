//! Query response types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fabric::identity::IdentityError;

/// A channel joined by a peer, as reported by a channel query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChannelInfo {
    pub channel_id: String,
}

/// Response to a channel query against a single peer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChannelQueryResponse {
    #[serde(default)]
    pub channels: Vec<ChannelInfo>,
}

/// One chaincode entry in an installed or instantiated query response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChaincodeInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub escc: String,
    #[serde(default)]
    pub vscc: String,
    /// Chaincode id bytes as reported by the peer.
    #[serde(default)]
    pub id: Vec<u8>,
}

/// Response to an installed or instantiated chaincode query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChaincodeQueryResponse {
    #[serde(default)]
    pub chaincodes: Vec<ChaincodeInfo>,
}

impl ChannelQueryResponse {
    /// Parse a response from a JSON-speaking binding.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        serde_json::from_str(json)
            .map_err(|e| SdkError::Request(format!("Malformed channel response: {}", e)))
    }
}

impl ChaincodeQueryResponse {
    /// Parse a response from a JSON-speaking binding.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        serde_json::from_str(json)
            .map_err(|e| SdkError::Request(format!("Malformed chaincode response: {}", e)))
    }
}

/// Name and version of an instantiated chaincode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ChaincodeSummary {
    pub name: String,
    pub version: String,
}

impl From<ChaincodeInfo> for ChaincodeSummary {
    fn from(info: ChaincodeInfo) -> Self {
        Self {
            name: info.name,
            version: info.version,
        }
    }
}

/// Errors raised by an SDK binding.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The connection profile could not be loaded or is inconsistent.
    #[error("Connection profile error: {0}")]
    Profile(String),

    /// A request to a peer or orderer failed.
    #[error("Request failed: {0}")]
    Request(String),

    /// Any other binding-specific failure.
    #[error("{message}")]
    Other {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Errors returned by [`FabricConnection`](crate::fabric::FabricConnection).
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// A query was issued before `connect` succeeded.
    #[error("Not connected: call connect() first")]
    NotConnected,

    /// `connect` was called on a connection that already holds a client.
    #[error("Already connected")]
    AlreadyConnected,

    /// Identity material could not be read or parsed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// The SDK rejected the call.
    #[error(transparent)]
    Sdk(#[from] SdkError),

    /// An SDK call exceeded the configured query timeout.
    #[error("{operation} timed out after {secs} seconds")]
    Timeout { operation: &'static str, secs: u64 },
}

/// Result type for connection operations.
pub type ConnectionResult<T> = Result<T, ConnectionError>;
