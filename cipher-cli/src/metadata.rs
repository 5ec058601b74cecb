use cipher_core::{Cipher, CipherKind};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Metadata stored alongside the ciphertext to enable correct decryption.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub(crate) struct CiphertextMetadata {
    pub(crate) cipher: CipherKind,
    pub(crate) length: usize,
    pub(crate) key_fingerprint: String,
    pub(crate) ciphertext_hash: String,
}

#[derive(Error, Debug)]
pub(crate) enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Ciphertext hash does not match metadata hash. The file may be corrupt or tampered with.")]
    HashMismatch,

    #[error("Ciphertext is {actual} letters long but the metadata records {expected}.")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("The {cipher} key does not match the one used for encryption.")]
    KeyMismatch { cipher: CipherKind },
}

impl CiphertextMetadata {
    pub(crate) fn describe(kind: CipherKind, cipher: &dyn Cipher, ciphertext: &str) -> Self {
        Self {
            cipher: kind,
            length: ciphertext.len(),
            key_fingerprint: sha256_hex(cipher.parameters().as_bytes()),
            ciphertext_hash: sha256_hex(ciphertext.as_bytes()),
        }
    }

    /// Checks that `ciphertext` is the one described and that `cipher` holds the same key.
    pub(crate) fn verify(&self, cipher: &dyn Cipher, ciphertext: &str) -> Result<(), MetadataError> {
        if ciphertext.len() != self.length {
            return Err(MetadataError::LengthMismatch {
                expected: self.length,
                actual: ciphertext.len(),
            });
        }
        if sha256_hex(ciphertext.as_bytes()) != self.ciphertext_hash {
            return Err(MetadataError::HashMismatch);
        }
        if sha256_hex(cipher.parameters().as_bytes()) != self.key_fingerprint {
            return Err(MetadataError::KeyMismatch {
                cipher: self.cipher,
            });
        }
        Ok(())
    }

    pub(crate) fn load(path: &Path) -> Result<Self, MetadataError> {
        let metadata_str = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&metadata_str)?)
    }

    pub(crate) fn save(&self, path: &Path) -> Result<(), MetadataError> {
        let metadata_str = serde_json::to_string_pretty(self)?;
        fs::write(path, metadata_str)?;
        Ok(())
    }
}

/// `<output>.metadata.json`, next to the ciphertext file.
pub(crate) fn metadata_path(output: &Path) -> PathBuf {
    let mut path = output.as_os_str().to_owned();
    path.push(".metadata.json");
    PathBuf::from(path)
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipher_core::{Grid, PolybiusCipher, Scytale};

    #[test]
    fn test_verify_detects_key_mismatch() {
        let keyed = PolybiusCipher::new(Grid::keyed("PORSCHE").unwrap());
        let ciphertext = keyed.encrypt("HELLOWORLD").unwrap();
        let metadata = CiphertextMetadata::describe(CipherKind::Polybius, &keyed, &ciphertext);

        assert!(metadata.verify(&keyed, &ciphertext).is_ok());
        assert!(matches!(
            metadata.verify(&PolybiusCipher::default(), &ciphertext),
            Err(MetadataError::KeyMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_detects_tampering() {
        let scytale = Scytale::default();
        let metadata = CiphertextMetadata::describe(CipherKind::Scytale, &scytale, "PNTSLTMA");
        assert!(matches!(
            metadata.verify(&scytale, "PNTSLTMB"),
            Err(MetadataError::HashMismatch)
        ));
    }

    #[test]
    fn test_verify_reports_truncation_before_hash() {
        let scytale = Scytale::default();
        let metadata = CiphertextMetadata::describe(CipherKind::Scytale, &scytale, "PNTSLTMA");
        assert!(matches!(
            metadata.verify(&scytale, "PNTSL"),
            Err(MetadataError::LengthMismatch {
                expected: 8,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_metadata_path_appends_suffix() {
        assert_eq!(
            metadata_path(Path::new("out/secret.txt")),
            PathBuf::from("out/secret.txt.metadata.json")
        );
    }
}
