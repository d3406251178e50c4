//! Tests for loading state configuration from disk.

use std::io::Write;
use strictly_backtrack::{Mark, StateConfig, TicTacToeState, UndoPolicy};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_to_move = \"O\"").unwrap();
    writeln!(file, "undo_policy = \"unchecked\"").unwrap();

    let config = StateConfig::from_file(file.path()).unwrap();
    assert_eq!(config, StateConfig::new(Mark::O, UndoPolicy::Unchecked));

    let state = TicTacToeState::with_config(&config);
    assert_eq!(state.current_mark(), Mark::O);
    assert!(state.is_o_to_move());
    assert_eq!(state.undo_policy(), UndoPolicy::Unchecked);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StateConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_default_state_uses_default_config() {
    let state = TicTacToeState::default();
    assert_eq!(state.current_mark(), Mark::X);
    assert_eq!(state.undo_policy(), UndoPolicy::Strict);
}
