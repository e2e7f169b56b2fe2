//! Boundary traits implemented by a concrete Fabric SDK binding.
//!
//! The facade only ever talks to the network through these traits, so any
//! binding (or a test double) can be injected at construction time.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::fabric::identity::SigningIdentity;
use crate::fabric::types::{ChaincodeQueryResponse, ChannelQueryResponse, SdkError};

/// Entry point that turns a connection profile into a client.
#[async_trait]
pub trait ClientLoader: Send + Sync {
    /// Parse the connection profile at `profile_path` and build a client.
    async fn load_from_config(
        &self,
        profile_path: &Path,
    ) -> Result<Box<dyn FabricClient>, SdkError>;
}

/// A client configured from a connection profile.
#[async_trait]
pub trait FabricClient: Send + Sync + fmt::Debug {
    /// MSP id of the client's organization.
    fn msp_id(&self) -> Result<String, SdkError>;

    /// Register the identity used for admin queries.
    fn set_admin_signing_identity(&mut self, identity: &SigningIdentity) -> Result<(), SdkError>;

    /// Peers of `org`, or of the client's own organization when `None`.
    fn peers_for_org(&self, org: Option<&str>) -> Vec<Arc<dyn Peer>>;

    /// Channel object for `name`.
    fn channel(&self, name: &str) -> Result<Arc<dyn Channel>, SdkError>;

    /// Channels joined by `peer`.
    async fn query_channels(
        &self,
        peer: Option<&dyn Peer>,
        use_admin: bool,
    ) -> Result<ChannelQueryResponse, SdkError>;

    /// Chaincode installed on `peer`.
    async fn query_installed_chaincodes(
        &self,
        peer: Option<&dyn Peer>,
        use_admin: bool,
    ) -> Result<ChaincodeQueryResponse, SdkError>;
}

/// A peer known to the client.
pub trait Peer: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;
}

/// A channel known to the client.
#[async_trait]
pub trait Channel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Chaincode instantiated on this channel. `target` selects the peer to
    /// ask; `None` lets the binding pick one.
    async fn query_instantiated_chaincodes(
        &self,
        target: Option<&dyn Peer>,
        use_admin: bool,
    ) -> Result<ChaincodeQueryResponse, SdkError>;
}
