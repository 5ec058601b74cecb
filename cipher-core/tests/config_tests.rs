#![allow(missing_docs)]
use cipher_core::config::{PolybiusConfig, ScytaleConfig};
use cipher_core::{CipherConfig, CipherError, CipherKind, load_config, save_config};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = load_config(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(config, CipherConfig::default());
    assert_eq!(config.cipher, CipherKind::Polybius);
    assert_eq!(config.polybius.representative, 'I');
    assert_eq!(config.scytale.rows, 4);
}

#[test]
fn test_save_then_load() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cipher.json");
    let config = CipherConfig {
        cipher: CipherKind::Scytale,
        polybius: PolybiusConfig {
            key: Some("PORSCHE".to_string()),
            representative: 'J',
        },
        scytale: ScytaleConfig { rows: 6 },
    };
    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cipher.json");
    fs::write(&path, r#"{"cipher":"atbash","scytale":{"rows":2}}"#).unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config.cipher, CipherKind::Atbash);
    assert_eq!(config.scytale.rows, 2);
    assert_eq!(config.polybius, PolybiusConfig::default());
}

#[test]
fn test_invalid_json_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cipher.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn test_build_uses_configured_keys() {
    let mut config = CipherConfig::default();
    config.polybius.key = Some("porsche".to_string());
    let cipher = config.build(CipherKind::Polybius).unwrap();
    assert_eq!(cipher.name(), "polybius");
    assert_eq!(cipher.encrypt("HELLOWORLD").unwrap(), "WDEXDGRCFO");
    assert_eq!(
        cipher.parameters(),
        "grid=PORSCHEABDFGIKLMNQTUVWXYZ;merged=I/J"
    );

    config.scytale.rows = 3;
    let scytale = config.build(CipherKind::Scytale).unwrap();
    assert_eq!(scytale.parameters(), "rows=3");
    assert_eq!(scytale.encrypt("HELLOWORLD").unwrap(), "HOLEWDLOLR");
}

#[test]
fn test_representative_j() {
    let mut config = CipherConfig::default();
    config.polybius.representative = 'j';
    let grid = config.polybius.grid().unwrap();
    assert_eq!(grid.layout(), "ABCDEFGHJKLMNOPQRSTUVWXYZ");

    let cipher = config.build(CipherKind::Square).unwrap();
    assert_eq!(cipher.decrypt(&cipher.encrypt("IJ").unwrap()).unwrap(), "JJ");
}

#[test]
fn test_build_rejects_bad_settings() {
    let mut config = CipherConfig::default();
    config.scytale.rows = 0;
    assert!(matches!(
        config.build(CipherKind::Scytale),
        Err(CipherError::InvalidKey { .. })
    ));

    config.polybius.representative = 'K';
    assert!(matches!(
        config.build(CipherKind::Polybius),
        Err(CipherError::InvalidKey { .. })
    ));
    assert!(config.build(CipherKind::Atbash).is_ok());
}

#[test]
fn test_cipher_kind_names() {
    for kind in CipherKind::ALL {
        assert_eq!(kind.to_string().parse::<CipherKind>().unwrap(), kind);
    }
    assert_eq!("Scytale".parse::<CipherKind>().unwrap(), CipherKind::Scytale);
    assert!("vigenere".parse::<CipherKind>().is_err());
    assert_eq!(
        serde_json::to_string(&CipherKind::Square).unwrap(),
        "\"square\""
    );
}
