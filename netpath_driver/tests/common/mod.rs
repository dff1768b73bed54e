#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::OnceLock;

use netpath_driver::{NetlistPaths, load_netlist};
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

pub fn init_test_logger() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> NetlistPaths {
    init_test_logger();
    load_netlist(fixture_path(name)).expect("fixture should load")
}
