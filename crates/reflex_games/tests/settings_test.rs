//! Settings file loading.

use reflex_games::{PlayArgs, Settings};
use reflex_tictactoe::Mark;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "think_delay_ms = 0\nhuman_mark = \"O\"\nlog_file = \"game.log\"").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(*settings.think_delay_ms(), 0);
    assert_eq!(*settings.human_mark(), Mark::O);
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    assert_eq!(*settings.seed(), None);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_flags_override_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 1\nthink_delay_ms = 750").unwrap();

    let args = PlayArgs {
        config: Some(file.path().to_path_buf()),
        seed: Some(2),
        ..PlayArgs::default()
    };
    let settings = args.apply(Settings::load(args.config.as_deref()).unwrap());
    assert_eq!(*settings.seed(), Some(2));
    assert_eq!(*settings.think_delay_ms(), 750);
}
