use vartype_core::NewForConfig;
use vartype_errors::{Category, Domain, SchemaError};
use vartype_test_suite::*;

fn dir_with(
    file: &str,
    contents: &str,
) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(file), contents).expect("write config");
    dir
}

#[test]
fn missing_file_uses_defaults() {
    vartype_testing::logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ParseConfig::new(Some(dir.path().display().to_string())).expect("loads");
    assert_eq!(config, ParseConfig::default());
}

#[test]
fn toml_file_overrides_depth() {
    let dir = dir_with("vartype.toml", fixtures::CONFIG_TOML);
    let config = ParseConfig::new(Some(dir.path().display().to_string())).expect("loads");
    assert_eq!(config.max_depth, 8);
}

#[test]
fn json_file_overrides_depth() {
    let dir = dir_with("vartype.json", r#"{ "max_depth": 3 }"#);
    let config = ParseConfig::new(Some(dir.path().display().to_string())).expect("loads");
    assert_eq!(config.max_depth, 3);

    let schema = fixtures::catalog();
    let err = vartype_core::parse_with("[][][][]User", &schema, &config).unwrap_err();
    assert!(matches!(err, TypeExprError::MaxDepthExceeded { max_depth: 3, .. }));
}

#[test]
fn out_of_range_depth_is_rejected() {
    let dir = dir_with("vartype.yaml", "max_depth: 0\n");
    let err = ParseConfig::new(Some(dir.path().display().to_string())).unwrap_err();
    assert!(matches!(err, vartype_core::Error::SourceFile { .. }), "{err}");

    let err: SchemaError = err.into();
    assert_eq!(err.error_code().domain, Domain::CF);
    assert_eq!(err.error_code().category, Category::Validation);
    assert!(err.message().contains("max_depth"), "{}", err.message());
}

#[test]
fn malformed_file_fails_to_load() {
    let dir = dir_with("vartype.toml", "max_depth = \"deep\"\n");
    let err: SchemaError = ParseConfig::new(Some(dir.path().display().to_string()))
        .unwrap_err()
        .into();
    assert_eq!(err.error_code().to_string(), "VCF0001");
    assert!(err.message().contains("vartype"), "{}", err.message());
}
