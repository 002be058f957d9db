use crate::version::Version;

/// Routes `log` output through the test harness; `RUST_LOG` picks the level.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a version that is known to be valid.
pub fn v(input: &str) -> Version {
    Version::parse(input).unwrap_or_else(|err| panic!("test version must parse: {}", err))
}
