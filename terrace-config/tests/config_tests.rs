use pretty_assertions::assert_eq;
use std::io::Write;
use terrace_config::{ConfigError, ConfigStore, lookup};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_and_get_string_value() {
    let file = write_config("approval_list_url = \"/Lists/Approvals\"\n");
    let store = ConfigStore::load(file.path()).unwrap();
    assert_eq!(store.get("approval_list_url"), Some("/Lists/Approvals"));
}

#[test]
fn scalars_are_stringified() {
    let file = write_config("batch_size = 200\nenabled = true\nratio = 0.5\n");
    let store = ConfigStore::load(file.path()).unwrap();
    assert_eq!(store.get("batch_size"), Some("200"));
    assert_eq!(store.get("enabled"), Some("true"));
    assert_eq!(store.get("ratio"), Some("0.5"));
}

#[test]
fn missing_key_is_none() {
    let file = write_config("a = \"1\"\n");
    let store = ConfigStore::load(file.path()).unwrap();
    assert_eq!(store.get("b"), None);
}

#[test]
fn require_surfaces_missing_key() {
    let file = write_config("a = \"1\"\n");
    let store = ConfigStore::load(file.path()).unwrap();
    let err = store.require("b").unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey(key) if key == "b"));
}

#[test]
fn non_scalar_value_is_rejected() {
    let file = write_config("[section]\nkey = \"v\"\n");
    let err = ConfigStore::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NonScalar(_)));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("not valid = = toml\n");
    let err = ConfigStore::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ConfigStore::load(std::path::Path::new("/nonexistent/settings.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn load_relative_joins_the_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("settings.toml"), "key = \"value\"\n").unwrap();
    let store = ConfigStore::load_relative(dir.path(), "settings.toml").unwrap();
    assert_eq!(store.get("key"), Some("value"));
}

#[test]
fn one_shot_lookup() {
    let file = write_config("key = \"value\"\n");
    assert_eq!(lookup("key", file.path()).unwrap(), Some("value".to_string()));
    assert_eq!(lookup("other", file.path()).unwrap(), None);
}
