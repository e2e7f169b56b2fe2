//! Hyperledger Fabric connection facade.
//!
//! Connects to a Fabric network through an injected SDK binding and answers
//! peer, channel and chaincode queries as the admin identity.

pub mod config;
pub mod fabric;
pub mod observability;

pub use config::ConnectionData;
pub use fabric::FabricConnection;
