//! File-backed key store.
//!
//! The bundled-storage analog on the host: a resource identifier maps to
//! `<root>/<resource>.pk8` holding PKCS8 DER bytes. Oversized or
//! unreadable files surface as key-store I/O errors; a missing file is
//! the distinct not-found case the lifecycle treats as "no credential
//! provisioned".

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::app::ports::KeyStorePort;
use crate::error::CredentialError;
use crate::telemetry::credential::KeyBytes;

pub struct FileKeyStore {
    root: PathBuf,
}

impl FileKeyStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resource_path(&self, resource: &str) -> PathBuf {
        self.root.join(format!("{resource}.pk8"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl KeyStorePort for FileKeyStore {
    fn read_key(&self, resource: &str) -> Result<KeyBytes, CredentialError> {
        let path = self.resource_path(resource);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CredentialError::NotFound);
            }
            Err(_) => return Err(CredentialError::Io),
        };
        debug!("read key resource '{resource}' ({} bytes)", bytes.len());
        KeyBytes::from_slice(&bytes).map_err(|()| CredentialError::Io)
    }
}
