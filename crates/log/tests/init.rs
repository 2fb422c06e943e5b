//! Global installation. Kept in its own test binary because the global
//! subscriber can only be set once per process.

use reel_log::{Config, LogError, info};

#[test]
fn second_global_install_fails() {
    let _guard = reel_log::init_with(Config::test()).unwrap();
    info!("first subscriber installed");

    let err = reel_log::init_with(Config::test()).unwrap_err();
    assert!(matches!(err, LogError::Init(_)));
}
