use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::errors::FingerprintError;

/// Content hash of a serialized argument list.
///
/// Two argument lists with the same serde_json encoding share a fingerprint,
/// regardless of where their values live in memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        Fingerprint(format!("sha256:{hex}"))
    }

    /// Fingerprint the canonical JSON encoding of `value`.
    pub fn of<T>(value: &T) -> Result<Self, FingerprintError>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
