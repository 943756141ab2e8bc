//! Tests for console configuration loading.

use noughts::Difficulty;
use noughts_console::{Cli, ConsoleConfig};
use std::io::Write;

#[test]
fn test_defaults() {
    let config = ConsoleConfig::default();
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert!(!*config.computer_starts());
    assert_eq!(*config.seed(), None);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ConsoleConfig::from_toml("difficulty = \"genius\"\n").unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert!(!*config.computer_starts());
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = ConsoleConfig::from_toml("dificulty = \"hard\"\n").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"easy\"").unwrap();
    writeln!(file, "seed = 12").unwrap();

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        difficulty: Some(Difficulty::Hard),
        computer_starts: true,
        ..Cli::default()
    };
    let config = ConsoleConfig::resolve(&cli).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert!(*config.computer_starts());
    assert_eq!(*config.seed(), Some(12));
}

#[test]
fn test_missing_file_is_error() {
    let cli = Cli {
        config: Some("/definitely/not/here.toml".into()),
        ..Cli::default()
    };
    let err = ConsoleConfig::resolve(&cli).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
