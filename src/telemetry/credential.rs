//! Device credential loading.
//!
//! The key store hands back raw PKCS8 DER bytes by resource identifier;
//! this module parses them into an RSA private key. The credential is
//! signing-only — no public key is carried, which is intentional for the
//! authentication scheme the telemetry link implements.

use log::info;
use rsa::RsaPrivateKey;
use rsa::pkcs8::{DecodePrivateKey, ObjectIdentifier, PrivateKeyInfo};
use rsa::traits::PublicKeyParts;

use crate::app::ports::KeyStorePort;
use crate::error::CredentialError;

/// Maximum PKCS8 blob size accepted from the key store.
pub const MAX_KEY_SIZE: usize = 2048;

/// Raw key material as handed back by a [`KeyStorePort`].
pub type KeyBytes = heapless::Vec<u8, MAX_KEY_SIZE>;

const OID_RSA_ENCRYPTION: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Parsed signing-only device credential.
pub struct DeviceKey {
    key: RsaPrivateKey,
}

impl DeviceKey {
    pub fn key(&self) -> &RsaPrivateKey {
        &self.key
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.key.size() * 8
    }
}

/// Fetch and parse the device credential.
///
/// Distinguishes a wrong algorithm from malformed bytes so startup logs
/// point at the actual provisioning mistake.
pub fn load_device_key(
    store: &impl KeyStorePort,
    resource: &str,
) -> Result<DeviceKey, CredentialError> {
    let bytes = store.read_key(resource)?;

    let info = PrivateKeyInfo::try_from(bytes.as_slice())
        .map_err(|_| CredentialError::InvalidKeySpec)?;
    if info.algorithm.oid != OID_RSA_ENCRYPTION {
        return Err(CredentialError::UnsupportedAlgorithm);
    }

    let key = RsaPrivateKey::from_pkcs8_der(bytes.as_slice())
        .map_err(|_| CredentialError::InvalidKeySpec)?;

    let device_key = DeviceKey { key };
    info!(
        "loaded device credential '{resource}' ({} bit RSA)",
        device_key.bits()
    );
    Ok(device_key)
}
