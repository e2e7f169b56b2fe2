//! Fabric network access subsystem.
//!
//! # Data Flow
//! ```text
//! ConnectionData (profile, certificate, private key paths)
//!     → connection.rs (FabricConnection::connect)
//!         → sdk.rs ClientLoader (profile → FabricClient)
//!         → identity.rs (certificate + key from disk)
//!         → FabricClient::set_admin_signing_identity
//!     → peer / channel / chaincode queries through the same client
//! ```
//!
//! # Security Constraints
//! - Private keys are read from disk only inside `connect`
//! - Never log private keys or sensitive data
//! - All queries run as the single admin identity registered on connect

pub mod connection;
pub mod identity;
pub mod sdk;
pub mod types;

pub use connection::FabricConnection;
pub use identity::{load_file_from_disk, IdentityError, SigningIdentity};
pub use sdk::{Channel, ClientLoader, FabricClient, Peer};
pub use types::{
    ChaincodeInfo, ChaincodeQueryResponse, ChaincodeSummary, ChannelInfo, ChannelQueryResponse,
    ConnectionError, ConnectionResult, SdkError,
};
