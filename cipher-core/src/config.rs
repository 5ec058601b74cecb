// File:    config.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: JSON configuration selecting the default cipher and its keys.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::atbash::Atbash;
use crate::cipher::{Cipher, CipherKind};
use crate::error::{CipherError, ConfigError, Result};
use crate::polybius::{Grid, MergedPair, PolybiusCipher, PolybiusSquare};
use crate::scytale::{DEFAULT_ROWS, Scytale};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name used when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cipher.json";

/// Settings for both Polybius ciphers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PolybiusConfig {
    /// Keyword placed at the start of the grid. `None` uses the canonical grid.
    pub key: Option<String>,
    /// Letter the shared `I/J` cell decodes to, either `I` or `J`.
    pub representative: char,
}

impl PolybiusConfig {
    /// Builds the grid these settings describe.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the representative is neither
    /// `I` nor `J` or the key contains non-letters.
    pub fn grid(&self) -> Result<Grid> {
        let pair = match self.representative.to_ascii_uppercase() {
            'I' => MergedPair::i_j(),
            'J' => MergedPair::i_j().swapped(),
            other => {
                return Err(CipherError::invalid_key(format!(
                    "representative must be 'I' or 'J', not '{other}'"
                )));
            }
        };
        Grid::with_pair(self.key.as_deref().unwrap_or_default(), pair)
    }
}

impl Default for PolybiusConfig {
    fn default() -> Self {
        Self {
            key: None,
            representative: MergedPair::i_j().representative(),
        }
    }
}

/// Settings for the Scytale cipher.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScytaleConfig {
    /// Number of matrix rows.
    pub rows: usize,
}

impl Default for ScytaleConfig {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}

/// Complete configuration. Missing fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CipherConfig {
    /// Cipher used when none is requested explicitly.
    pub cipher: CipherKind,
    /// Polybius settings.
    pub polybius: PolybiusConfig,
    /// Scytale settings.
    pub scytale: ScytaleConfig,
}

impl CipherConfig {
    /// Constructs the cipher of the given kind from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the relevant settings are unusable.
    pub fn build(&self, kind: CipherKind) -> Result<Box<dyn Cipher>> {
        let cipher: Box<dyn Cipher> = match kind {
            CipherKind::Atbash => Box::new(Atbash),
            CipherKind::Polybius => Box::new(PolybiusCipher::new(self.polybius.grid()?)),
            CipherKind::Square => Box::new(PolybiusSquare::new(self.polybius.grid()?)),
            CipherKind::Scytale => Box::new(Scytale::new(self.scytale.rows)?),
        };
        debug!("Configured {} cipher", cipher.name());
        Ok(cipher)
    }
}

/// Loads the configuration at `path`, or the defaults if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> std::result::Result<CipherConfig, ConfigError> {
    if path.exists() {
        let config_str = fs::read_to_string(path)?;
        let config = serde_json::from_str(&config_str)?;
        debug!("Loaded configuration from '{}'", path.display());
        Ok(config)
    } else {
        debug!(
            "No configuration at '{}', using defaults",
            path.display()
        );
        Ok(CipherConfig::default())
    }
}

/// Saves the configuration to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ConfigError`] if serialization or the write fails.
pub fn save_config(path: &Path, config: &CipherConfig) -> std::result::Result<(), ConfigError> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}
