//! Facade over a Fabric SDK client.
//!
//! # Responsibilities
//! - Load the SDK client from the connection profile
//! - Register the admin signing identity read from disk
//! - Enumerate peers and look them up by name
//! - Query channels and installed / instantiated chaincode
//!
//! Every lookup goes back to the SDK; nothing is cached between calls.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::timeout;

use crate::config::ConnectionData;
use crate::fabric::identity::SigningIdentity;
use crate::fabric::sdk::{Channel, ClientLoader, FabricClient, Peer};
use crate::fabric::types::{
    ChaincodeInfo, ChaincodeSummary, ConnectionError, ConnectionResult, SdkError,
};
use crate::observability::metrics;

/// Connection to a Fabric network through an injected SDK binding.
pub struct FabricConnection {
    /// Paths and options, fixed at construction.
    data: ConnectionData,
    /// SDK entry point used by `connect`.
    loader: Arc<dyn ClientLoader>,
    /// Set once by a successful `connect`.
    client: Option<Arc<dyn FabricClient>>,
}

impl FabricConnection {
    /// Create an unconnected facade. No I/O happens until [`connect`](Self::connect).
    pub fn new(data: ConnectionData, loader: Arc<dyn ClientLoader>) -> Self {
        Self {
            data,
            loader,
            client: None,
        }
    }

    /// Load the client from the connection profile and register the admin
    /// identity.
    ///
    /// On failure the facade stays unconnected and `connect` may be retried.
    pub async fn connect(&mut self) -> ConnectionResult<()> {
        tracing::debug!(profile = %self.data.connection_profile_path.display(), "connect");
        if self.client.is_some() {
            return Err(ConnectionError::AlreadyConnected);
        }

        let mut client = run_sdk_call(
            "load_from_config",
            self.data.query_timeout(),
            self.loader.load_from_config(&self.data.connection_profile_path),
        )
        .await?;

        let msp_id = client.msp_id().inspect_err(log_sdk_failure("msp_id"))?;
        let identity = SigningIdentity::load(
            &self.data.certificate_path,
            &self.data.private_key_path,
            msp_id.as_str(),
            self.data.identity_format,
        )?;
        // TODO: register through an identity store so non-admin profiles can connect too.
        client
            .set_admin_signing_identity(&identity)
            .inspect_err(log_sdk_failure("set_admin_signing_identity"))?;

        tracing::info!(
            msp_id = %msp_id,
            profile = %self.data.connection_profile_path.display(),
            "Connected to Fabric network"
        );
        metrics::record_connected(true);
        self.client = Some(Arc::from(client));
        Ok(())
    }

    /// Whether `connect` has succeeded.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// The connection data this facade was built with.
    pub fn connection_data(&self) -> &ConnectionData {
        &self.data
    }

    /// Names of every peer of the configured organization, in SDK order.
    pub fn all_peer_names(&self) -> ConnectionResult<Vec<String>> {
        tracing::debug!("all_peer_names");
        Ok(self
            .all_peers()?
            .iter()
            .map(|peer| peer.name().to_string())
            .collect())
    }

    /// First peer whose name equals `name`.
    ///
    /// An unknown name is `Ok(None)`, not an error.
    pub fn peer(&self, name: &str) -> ConnectionResult<Option<Arc<dyn Peer>>> {
        tracing::debug!(peer = name, "peer");
        Ok(self.all_peers()?.into_iter().find(|peer| peer.name() == name))
    }

    /// Ids of the channels `peer_name` has joined, in response order.
    ///
    /// An unknown peer is passed to the SDK as no target; what happens then
    /// is up to the binding.
    pub async fn all_channels_for_peer(&self, peer_name: &str) -> ConnectionResult<Vec<String>> {
        tracing::debug!(peer = peer_name, "all_channels_for_peer");
        let client = self.client()?;
        let peer = self.peer(peer_name)?;
        let response = run_sdk_call(
            "query_channels",
            self.data.query_timeout(),
            client.query_channels(peer.as_deref(), true),
        )
        .await?;

        Ok(response
            .channels
            .into_iter()
            .map(|channel| channel.channel_id)
            .collect())
    }

    /// Installed chaincode on `peer_name`, grouping versions under each name.
    ///
    /// Names keep the order of their first appearance in the response, and
    /// versions keep response order.
    pub async fn installed_chaincode(
        &self,
        peer_name: &str,
    ) -> ConnectionResult<Vec<(String, Vec<String>)>> {
        tracing::debug!(peer = peer_name, "installed_chaincode");
        let client = self.client()?;
        let peer = self.peer(peer_name)?;
        let response = run_sdk_call(
            "query_installed_chaincodes",
            self.data.query_timeout(),
            client.query_installed_chaincodes(peer.as_deref(), true),
        )
        .await?;

        Ok(group_versions(response.chaincodes))
    }

    /// Chaincode instantiated on `channel_name`, in response order.
    pub async fn instantiated_chaincode(
        &self,
        channel_name: &str,
    ) -> ConnectionResult<Vec<ChaincodeSummary>> {
        tracing::debug!(channel = channel_name, "instantiated_chaincode");
        let channel = self.channel(channel_name)?;
        let response = run_sdk_call(
            "query_instantiated_chaincodes",
            self.data.query_timeout(),
            channel.query_instantiated_chaincodes(None, true),
        )
        .await?;

        Ok(response
            .chaincodes
            .into_iter()
            .map(ChaincodeSummary::from)
            .collect())
    }

    /// Channel object for `channel_name`, looked up directly by the SDK.
    pub fn channel(&self, channel_name: &str) -> ConnectionResult<Arc<dyn Channel>> {
        tracing::debug!(channel = channel_name, "channel");
        let channel = self
            .client()?
            .channel(channel_name)
            .inspect_err(log_sdk_failure("channel"))?;
        Ok(channel)
    }

    fn all_peers(&self) -> ConnectionResult<Vec<Arc<dyn Peer>>> {
        let client = self.client()?;
        Ok(client.peers_for_org(self.data.organization.as_deref()))
    }

    fn client(&self) -> ConnectionResult<&Arc<dyn FabricClient>> {
        self.client.as_ref().ok_or(ConnectionError::NotConnected)
    }
}

impl std::fmt::Debug for FabricConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FabricConnection")
            .field("profile", &self.data.connection_profile_path)
            .field("organization", &self.data.organization)
            .field("connected", &self.client.is_some())
            .finish()
    }
}

/// Await an SDK future, bounded by `limit` when one is configured.
async fn run_sdk_call<T, F>(
    operation: &'static str,
    limit: Option<Duration>,
    fut: F,
) -> ConnectionResult<T>
where
    F: Future<Output = Result<T, SdkError>>,
{
    let start = Instant::now();
    let result = match limit {
        Some(limit) => match timeout(limit, fut).await {
            Ok(result) => result.map_err(ConnectionError::from),
            Err(_) => Err(ConnectionError::Timeout {
                operation,
                secs: limit.as_secs(),
            }),
        },
        None => fut.await.map_err(ConnectionError::from),
    };

    metrics::record_sdk_call(operation, result.is_ok(), start);
    if let Err(e) = &result {
        tracing::warn!(operation, error = %e, "Fabric SDK call failed");
    }
    result
}

/// Group chaincode versions by name, keeping first-seen name order.
fn group_versions(chaincodes: Vec<ChaincodeInfo>) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for chaincode in chaincodes {
        match grouped.iter_mut().find(|(name, _)| *name == chaincode.name) {
            Some((_, versions)) => versions.push(chaincode.version),
            None => grouped.push((chaincode.name, vec![chaincode.version])),
        }
    }
    grouped
}

fn log_sdk_failure(operation: &'static str) -> impl Fn(&SdkError) {
    move |e: &SdkError| tracing::warn!(operation, error = %e, "Fabric SDK call failed")
}
