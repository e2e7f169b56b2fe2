//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Everything a [`FabricConnection`](crate::fabric::FabricConnection) needs
/// to reach the network and sign as the admin identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionData {
    /// Path to the SDK connection profile.
    pub connection_profile_path: PathBuf,

    /// Path to the admin certificate (PEM).
    pub certificate_path: PathBuf,

    /// Path to the admin private key (PEM).
    pub private_key_path: PathBuf,

    /// Organization whose peers are enumerated. `None` uses the SDK default.
    #[serde(default)]
    pub organization: Option<String>,

    /// How identity files are checked before registration.
    #[serde(default)]
    pub identity_format: IdentityFormat,

    /// Upper bound on each network-bound SDK call. Unbounded when absent.
    #[serde(default)]
    pub query_timeout_secs: Option<u64>,
}

impl ConnectionData {
    /// Build connection data from the three required paths.
    pub fn new(
        connection_profile_path: impl Into<PathBuf>,
        certificate_path: impl Into<PathBuf>,
        private_key_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            connection_profile_path: connection_profile_path.into(),
            certificate_path: certificate_path.into(),
            private_key_path: private_key_path.into(),
            organization: None,
            identity_format: IdentityFormat::default(),
            query_timeout_secs: None,
        }
    }

    /// Configured query timeout, if any.
    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_secs.map(Duration::from_secs)
    }
}

/// Encoding expected for the certificate and private key files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityFormat {
    /// PEM blocks, checked locally before registration.
    #[default]
    Pem,
    /// Opaque text passed to the SDK untouched.
    Raw,
}
