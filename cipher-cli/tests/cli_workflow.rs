#![allow(missing_docs)]
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn cli(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary");
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_encrypt_and_decrypt_text() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");

    cli(&config)
        .arg("encrypt")
        .arg("some text")
        .assert()
        .success()
        .stdout("IUPTNQVO\n");

    cli(&config)
        .arg("decrypt")
        .arg("iuptnqvo")
        .assert()
        .success()
        .stdout("SOMETEXT\n");
}

#[test]
fn test_invalid_input_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");

    cli(&config)
        .arg("encrypt")
        .arg("AGENT007")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot contain numbers"));

    cli(&config)
        .arg("encrypt")
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("message is empty"));
}

#[test]
fn test_sibling_ciphers_from_flags() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");

    cli(&config)
        .args(["encrypt", "--cipher", "scytale", "--rows", "4", "PLAINTEXTMESSAGE"])
        .assert()
        .success()
        .stdout("PNTSLTMAAEEGIXSE\n");

    cli(&config)
        .args(["encrypt", "--cipher", "atbash", "THIS IS A test"])
        .assert()
        .success()
        .stdout("GSRH RH Z GVHG\n");

    cli(&config)
        .args(["decrypt", "--cipher", "square", "3443235144513544"])
        .assert()
        .success()
        .stdout("SOMETEXT\n");

    cli(&config)
        .args(["encrypt", "--cipher", "vigenere", "ABC"])
        .assert()
        .failure();
}

#[test]
fn test_file_workflow_with_metadata() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");
    let input_path = temp_dir.path().join("input.txt");
    let encrypted_path = temp_dir.path().join("input.enc");
    let metadata_path = temp_dir.path().join("input.enc.metadata.json");
    let decrypted_path = temp_dir.path().join("decrypted.txt");
    fs::write(&input_path, "Hello World\n").expect("Failed to write input file");

    cli(&config)
        .args(["encrypt", "--key", "PORSCHE", "--input"])
        .arg(&input_path)
        .arg("--output")
        .arg(&encrypted_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Decryption metadata saved to"));

    assert!(metadata_path.exists(), "Metadata file should exist");
    let encrypted = fs::read_to_string(&encrypted_path).expect("Failed to read ciphertext");
    assert_eq!(encrypted, "WDEXDGRCFO\n");

    let metadata: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(&metadata_path).expect("Failed to read metadata"),
    )
    .expect("Metadata should be JSON");
    assert_eq!(metadata["cipher"], "polybius");
    assert_eq!(metadata["length"], 10);

    cli(&config)
        .args(["decrypt", "--key", "PORSCHE", "--input"])
        .arg(&encrypted_path)
        .arg("--output")
        .arg(&decrypted_path)
        .arg("--metadata")
        .arg(&metadata_path)
        .assert()
        .success();
    let decrypted = fs::read_to_string(&decrypted_path).expect("Failed to read plaintext");
    assert_eq!(decrypted, "HELLOWORLD\n");
}

#[test]
fn test_metadata_detects_wrong_key() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");
    let encrypted_path = temp_dir.path().join("secret.enc");
    let metadata_path = temp_dir.path().join("secret.enc.metadata.json");

    cli(&config)
        .args(["encrypt", "--key", "PORSCHE", "--output"])
        .arg(&encrypted_path)
        .arg("ATTACKATDAWN")
        .assert()
        .success();

    cli(&config)
        .args(["decrypt", "--input"])
        .arg(&encrypted_path)
        .arg("--metadata")
        .arg(&metadata_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("key does not match"));

    // Without metadata the wrong key goes unnoticed.
    cli(&config)
        .args(["decrypt", "--input"])
        .arg(&encrypted_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ATTACKATDAWN").not());
}

#[test]
fn test_metadata_detects_tampering_and_cipher_conflict() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");
    let encrypted_path = temp_dir.path().join("secret.enc");
    let metadata_path = temp_dir.path().join("secret.enc.metadata.json");

    cli(&config)
        .args(["encrypt", "--cipher", "scytale", "--rows", "3", "--output"])
        .arg(&encrypted_path)
        .arg("HELLOWORLD")
        .assert()
        .success();

    // The cipher kind and rows come from the metadata and the flags.
    cli(&config)
        .args(["decrypt", "--rows", "3", "--input"])
        .arg(&encrypted_path)
        .arg("--metadata")
        .arg(&metadata_path)
        .assert()
        .success()
        .stdout("HELLOWORLD\n");

    cli(&config)
        .args(["decrypt", "--cipher", "atbash", "--input"])
        .arg(&encrypted_path)
        .arg("--metadata")
        .arg(&metadata_path)
        .assert()
        .failure();

    fs::write(&encrypted_path, "HOLEWDLOLS\n").expect("Failed to tamper with ciphertext");
    cli(&config)
        .args(["decrypt", "--rows", "3", "--input"])
        .arg(&encrypted_path)
        .arg("--metadata")
        .arg(&metadata_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hash does not match"));
}

#[test]
fn test_metadata_detects_truncated_ciphertext() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");
    let encrypted_path = temp_dir.path().join("secret.enc");
    let metadata_path = temp_dir.path().join("secret.enc.metadata.json");

    cli(&config)
        .args(["encrypt", "--output"])
        .arg(&encrypted_path)
        .arg("ATTACKATDAWN")
        .assert()
        .success();

    let encrypted = fs::read_to_string(&encrypted_path).expect("Failed to read ciphertext");
    fs::write(&encrypted_path, &encrypted[..6]).expect("Failed to truncate ciphertext");

    cli(&config)
        .args(["decrypt", "--input"])
        .arg(&encrypted_path)
        .arg("--metadata")
        .arg(&metadata_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("6 letters long but the metadata records 12"));
}

#[test]
fn test_grid_command() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");

    cli(&config)
        .args(["grid", "--key", "PORSCHE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P    O    R    S    C"))
        .stdout(predicate::str::contains("I/J"));
}

#[test]
fn test_config_init_and_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config = temp_dir.path().join("cipher.json");

    cli(&config).args(["config", "init"]).assert().success();
    assert!(config.exists());

    cli(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rows\": 4"))
        .stdout(predicate::str::contains("\"cipher\": \"polybius\""));

    fs::write(&config, r#"{"cipher":"scytale","scytale":{"rows":4}}"#)
        .expect("Failed to write config");
    cli(&config)
        .arg("encrypt")
        .arg("PLAINTEXTMESSAGE")
        .assert()
        .success()
        .stdout("PNTSLTMAAEEGIXSE\n");
}
