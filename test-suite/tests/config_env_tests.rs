//! Kept alone in its own binary: it mutates the process environment.

use vartype_core::{NewForConfig, ParseConfig};

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("vartype.toml"), "max_depth = 8\n").expect("write config");

    // SAFETY: no other test in this binary reads the environment.
    unsafe {
        std::env::set_var("VARTYPE_MAX_DEPTH", "12");
    }

    let config = ParseConfig::new(Some(dir.path().display().to_string())).expect("loads");
    assert_eq!(config.max_depth, 12);

    unsafe {
        std::env::remove_var("VARTYPE_MAX_DEPTH");
    }
}
