//! Configuration file loading.

use std::fs;
use std::path::PathBuf;

use rust_decimal_macros::dec;
use tempfile::TempDir;
use wildcard::error::{ConfigError, Error};
use wildcard::infrastructure::config::settings::Config;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("wildcard.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn full_config_loads() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(
        &dir,
        concat!(
            "[logging]\n",
            "level = \"debug\"\n",
            "format = \"json\"\n",
            "\n",
            "[solver]\n",
            "time_limit_secs = 30\n",
            "\n",
            "[optimizer]\n",
            "funds_in_bank = 2.5\n",
            "free_transfers = 2\n",
            "transfer_margin = 1\n",
            "filler_count = 3\n",
        ),
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.solver.time_limit().as_secs(), 30);
    let params = config.params();
    assert_eq!(params.funds_in_bank, dec!(2.5));
    assert_eq!(params.free_transfers, 2);
    assert_eq!(params.transfer_margin, dec!(1));
    assert_eq!(params.filler_count, 3);
}

#[test]
fn negative_funds_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, "[optimizer]\nfunds_in_bank = -1\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "funds_in_bank",
            ..
        })
    ));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_or_default(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}
