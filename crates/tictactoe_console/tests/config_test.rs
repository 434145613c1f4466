//! Configuration loading tests.

use std::io::Write;
use tictactoe_console::ConsoleConfig;
use tictactoe_engine::Mark;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Create temp file");
    file.write_all(contents.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConsoleConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ConsoleConfig::default());
    assert_eq!(*config.first_player(), Mark::X);
    assert!(!config.show_scoreboard());
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_file_values_are_read() {
    let file = write_config(
        r#"
first_player = "O"
show_scoreboard = true
log_filter = "tictactoe_engine=debug"
"#,
    );
    let config = ConsoleConfig::load(file.path()).unwrap();
    assert_eq!(*config.first_player(), Mark::O);
    assert!(*config.show_scoreboard());
    assert_eq!(config.log_filter(), "tictactoe_engine=debug");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("show_scoreboard = true\n");
    let config = ConsoleConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), Mark::X);
    assert!(*config.show_scoreboard());
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("board_size = 4\n");
    let err = ConsoleConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{}", err);
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("first_player = \"O\"\n");
    let config = ConsoleConfig::load(file.path())
        .unwrap()
        .with_overrides(Some(Mark::X), true);
    assert_eq!(*config.first_player(), Mark::X);
    assert!(*config.show_scoreboard());
}
