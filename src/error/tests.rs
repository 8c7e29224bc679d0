use std::error::Error as _;
use std::path::Path;

use miette::Diagnostic;

use super::*;

#[test]
fn test_parse_error_display_and_source() {
    let err = source::parse_failed("github:acme/lib/x.lua", ParseError::MissingRef);

    assert_eq!(
        err.to_string(),
        "Invalid source 'github:acme/lib/x.lua': missing ref: append @<branch, tag or commit>"
    );
    assert!(err.source().is_some());
    assert!(err.help().is_some());
}

#[test]
fn test_diagnostic_codes() {
    let err = fetch::http_status("https://example.test/x", 404);
    assert_eq!(err.code().unwrap().to_string(), "filedep::transport::status");

    let err = FiledepError::OutOfDate { count: 2 };
    assert_eq!(err.code().unwrap().to_string(), "filedep::check::stale");
    assert_eq!(err.to_string(), "2 dependencies need action");
}

#[test]
fn test_in_step_names_dependency_and_step() {
    let err = fetch::http_status("https://example.test/x", 500).in_step("json", Step::Download);

    assert_eq!(
        err.to_string(),
        "json: download failed: Request to https://example.test/x failed with HTTP status 500"
    );
    assert!(matches!(
        err.source().and_then(|s| s.downcast_ref::<FiledepError>()),
        Some(FiledepError::HttpStatus { status: 500, .. })
    ));
}

#[test]
fn test_step_display() {
    let names: Vec<String> = [
        Step::Parse,
        Step::Download,
        Step::Write,
        Step::SaveManifest,
        Step::SaveLockfile,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(
        names,
        ["parse", "download", "write", "save manifest", "save lockfile"]
    );
}

#[test]
fn test_is_persistence() {
    let write_failure =
        |step| persist::write_failed(Path::new("filedep.lock"), "disk full").in_step("x", step);
    assert!(write_failure(Step::SaveLockfile).is_persistence());
    assert!(write_failure(Step::SaveManifest).is_persistence());
    assert!(!write_failure(Step::Write).is_persistence());
    assert!(!fetch::http_status("u", 404).in_step("x", Step::Download).is_persistence());
    assert!(
        FiledepError::LockfileSaveAfterManifest {
            reason: "disk full".to_string()
        }
        .is_persistence()
    );
}

#[test]
fn test_from_io_error() {
    let err: FiledepError = std::io::Error::other("boom").into();
    assert!(matches!(err, FiledepError::IoError { message } if message == "boom"));
}

#[test]
fn test_from_toml_error() {
    let err: FiledepError = toml::from_str::<toml::Table>("= nope").unwrap_err().into();
    assert!(matches!(err, FiledepError::ConfigParseFailed { .. }));
}
