//! Tests for loading the TOML configuration from disk.

use std::io::Write;
use std::path::PathBuf;

use xmixdrix::Config;
use xmixdrix_tictactoe::Player;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.title(), "X Mix Drix");
}

#[test]
fn test_file_overrides_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "title = \"Tic Tac Toe\"").unwrap();
    writeln!(file, "o_mark = \"◯\"").unwrap();
    writeln!(file, "log_file = \"/tmp/ttt.log\"").unwrap();

    let config = Config::load_or_default(file.path()).unwrap();
    assert_eq!(config.title(), "Tic Tac Toe");
    assert_eq!(config.mark(Player::O), "◯");
    assert_eq!(config.mark(Player::X), "X");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "title = [").unwrap();

    let err = Config::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_unreadable_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
