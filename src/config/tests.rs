// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::io::Write;

const SAMPLE: &str = r#"; application settings
app_name = "TestApp"
verbose = true

[server]
host = localhost
port = 8080
timeout = 2.5
mode = "Fast"

[limits]
max = -1
"#;

#[test]
fn test_config_from_string() {
    let config = IniConfig::from_str(SAMPLE).expect("Failed to parse config");

    let app_name: String = config.get("app_name").expect("Failed to get app_name");
    assert_eq!(app_name, "TestApp");

    let host: String = config.get("server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let timeout: f64 = config.get("server.timeout").expect("Failed to get timeout");
    assert_eq!(timeout, 2.5);

    let verbose: bool = config.get("verbose").expect("Failed to get verbose");
    assert!(verbose);

    assert!(config.has("server.port"));
    assert!(!config.has("server.nonexistent"));
    assert!(!config.has("nowhere.port"));
}

#[test]
fn test_sections_and_keys_keep_order() {
    let config = IniConfig::from_str(SAMPLE).unwrap();
    assert_eq!(config.sections(), vec!["", "server", "limits"]);
    assert_eq!(config.keys("server").unwrap(), vec!["host", "port", "timeout", "mode"]);
    assert!(matches!(config.keys("missing"), Err(IniError::NotFound { .. })));
}

#[test]
fn test_missing_path() {
    let config = IniConfig::from_str(SAMPLE).unwrap();

    let err = config.get::<String>("server.user").unwrap_err();
    assert_eq!(err.code(), Some(304));
    assert_eq!(err.hint(), Some("Section 'server' has no key 'user'"));

    let err = config.get_value("db.user").unwrap_err();
    assert_eq!(err.hint(), Some("There is no section 'db'"));
}

#[test]
fn test_get_optional_and_get_or() {
    let config = IniConfig::from_str(SAMPLE).unwrap();

    assert_eq!(config.get_optional::<i64>("limits.max").unwrap(), Some(-1));
    assert_eq!(config.get_optional::<i64>("limits.min").unwrap(), None);
    // present but wrong type is still an error
    assert!(config.get_optional::<i64>("server.host").is_err());

    assert_eq!(config.get_or("limits.min", 10i64), 10);
    assert_eq!(config.get_or("server.port", 1u32), 8080);
}

#[test]
fn test_type_error_carries_source_line() {
    let config = IniConfig::from_str(SAMPLE).unwrap();
    let err = config.get::<i64>("server.host").unwrap_err();

    assert_eq!(err.line(), Some(6));
    assert!(err.message().contains("host = localhost"));
}

#[test]
fn test_out_of_range_integer() {
    let config = IniConfig::from_str(SAMPLE).unwrap();
    let err = config.get::<u8>("limits.max").unwrap_err();
    assert_eq!(err.code(), Some(404));
}

#[test]
fn test_string_enum_validation() {
    let config = IniConfig::from_str(SAMPLE).expect("Failed to parse config");

    let mode = config.get_string_enum("server.mode", &["slow", "fast"]);
    assert_eq!(mode.unwrap(), "Fast");

    let invalid = config.get_string_enum("server.mode", &["good", "better"]);
    assert!(matches!(invalid, Err(IniError::ValidationError { line: 9, .. })));
}

#[test]
fn test_validated_value() {
    let config = IniConfig::from_str(SAMPLE).unwrap();

    let port: u16 = config
        .get_validated("server.port", |p: &u16| *p >= 1024, "a port >= 1024")
        .unwrap();
    assert_eq!(port, 8080);

    let err = config
        .get_validated("server.port", |p: &u16| *p < 1024, "a privileged port")
        .unwrap_err();
    assert_eq!(err.code(), Some(450));
    assert_eq!(err.line(), Some(7));
}

#[test]
fn test_parse_errors_are_returned_as_list() {
    let errors = IniConfig::from_str("[broken\nkey=\n").unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_strict_policy() {
    let input = "[a]\nk=1\nk=2\n";
    assert!(IniConfig::from_str(input).is_ok());

    let errors = IniConfig::from_str_with_policy(input, DuplicatePolicy::Reject).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], IniError::BuildError { line: 3, .. }));
}

#[test]
fn test_from_bytes_and_reader() {
    let config = IniConfig::from_bytes(b"[s]\nk=1\n").unwrap();
    assert_eq!(config.get::<i64>("s.k").unwrap(), 1);

    let errors = IniConfig::from_bytes(&[b'k', b'=', 0xff]).unwrap_err();
    assert!(matches!(errors[0], IniError::ReadError { .. }));

    let config = IniConfig::from_reader("x = yes".as_bytes()).unwrap();
    assert_eq!(config.get::<String>("x").unwrap(), "yes");
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", SAMPLE).unwrap();

    let config = IniConfig::from_file(file.path()).expect("Failed to load file");
    assert_eq!(config.get::<i64>("server.port").unwrap(), 8080);
    assert_eq!(config.raw_content(), SAMPLE);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let errors = IniConfig::from_file(dir.path().join("absent.ini")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], IniError::FileError { code: Some(301), .. }));
}

#[test]
fn test_from_file_with_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let fallback = dir.path().join("fallback.ini");
    std::fs::write(&fallback, "[s]\nsource = fallback\n").unwrap();

    let config = IniConfig::from_file_with_fallback(dir.path().join("primary.ini"), fallback.clone()).unwrap();
    assert_eq!(config.get::<String>("s.source").unwrap(), "fallback");

    let errors =
        IniConfig::from_file_with_fallback(dir.path().join("a.ini"), dir.path().join("b.ini")).unwrap_err();
    assert!(errors[0].message().contains("or fallback path"));
}

#[test]
fn test_fallback_not_used_for_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let primary = dir.path().join("primary.ini");
    let fallback = dir.path().join("fallback.ini");
    std::fs::write(&primary, "key=\n").unwrap();
    std::fs::write(&fallback, "key=1\n").unwrap();

    let errors = IniConfig::from_file_with_fallback(primary, fallback).unwrap_err();
    assert!(matches!(errors[0], IniError::ParseError { line: 1, .. }));
}

#[test]
fn test_config_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IniConfig>();
    assert_send_sync::<Document>();
}
