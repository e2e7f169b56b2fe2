//! Admin signing identity loading.
//!
//! # Security
//! - The private key is read from disk only at connect time
//! - Keys are never logged; `Debug` redacts them

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustls_pemfile::Item;
use thiserror::Error;

use crate::config::IdentityFormat;

/// Errors that can occur while loading identity material.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The file could not be read as UTF-8 text.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but does not hold the expected PEM block.
    #[error("Malformed identity file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Read a file from disk as UTF-8 text.
pub fn load_file_from_disk(path: &Path) -> Result<String, IdentityError> {
    tracing::debug!(path = %path.display(), "Loading file from disk");
    fs::read_to_string(path).map_err(|source| IdentityError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Certificate, private key and MSP id registered as the admin identity.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningIdentity {
    private_key: String,
    certificate: String,
    msp_id: String,
}

impl SigningIdentity {
    /// Build an identity from material already in memory.
    pub fn new(
        private_key: impl Into<String>,
        certificate: impl Into<String>,
        msp_id: impl Into<String>,
    ) -> Self {
        Self {
            private_key: private_key.into(),
            certificate: certificate.into(),
            msp_id: msp_id.into(),
        }
    }

    /// Read the certificate and private key from disk.
    ///
    /// With [`IdentityFormat::Pem`] both files are checked for a usable PEM
    /// block before the identity is returned.
    pub fn load(
        certificate_path: &Path,
        private_key_path: &Path,
        msp_id: impl Into<String>,
        format: IdentityFormat,
    ) -> Result<Self, IdentityError> {
        let certificate = load_file_from_disk(certificate_path)?;
        let private_key = load_file_from_disk(private_key_path)?;

        if format == IdentityFormat::Pem {
            check_certificate_pem(certificate_path, &certificate)?;
            check_private_key_pem(private_key_path, &private_key)?;
        }

        Ok(Self::new(private_key, certificate, msp_id))
    }

    /// The private key text.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// The certificate text.
    pub fn certificate(&self) -> &str {
        &self.certificate
    }

    /// The MSP id of the organization issuing the certificate.
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("msp_id", &self.msp_id)
            .field("certificate_len", &self.certificate.len())
            .field("private_key", &"<redacted>")
            .finish()
    }
}

fn check_certificate_pem(path: &Path, pem: &str) -> Result<(), IdentityError> {
    let mut reader = pem.as_bytes();
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| malformed(path, format!("invalid PEM: {}", e)))?;
    if certs.is_empty() {
        return Err(malformed(path, "no CERTIFICATE block found".to_string()));
    }
    Ok(())
}

fn check_private_key_pem(path: &Path, pem: &str) -> Result<(), IdentityError> {
    let mut reader = pem.as_bytes();
    loop {
        match rustls_pemfile::read_one(&mut reader) {
            Ok(Some(Item::Pkcs1Key(_) | Item::Pkcs8Key(_) | Item::Sec1Key(_))) => return Ok(()),
            Ok(Some(_)) => continue,
            Ok(None) => return Err(malformed(path, "no private key block found".to_string())),
            Err(e) => return Err(malformed(path, format!("invalid PEM: {}", e))),
        }
    }
}

fn malformed(path: &Path, reason: String) -> IdentityError {
    IdentityError::Malformed {
        path: path.to_path_buf(),
        reason,
    }
}
